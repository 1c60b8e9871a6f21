/// Scroll position of a container, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Whether the visible area reaches within `threshold` pixels of the content's end
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        if self.content_height <= 0.0 {
            return false;
        }
        self.scroll_top + self.viewport_height >= self.content_height - threshold.max(0.0)
    }
}
