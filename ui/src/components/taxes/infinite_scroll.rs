use dioxus::prelude::*;
use std::rc::Rc;

use crate::utils::ScrollMetrics;

#[derive(Props, PartialEq, Clone)]
pub struct InfiniteScrollProps {
    /// Pixels from the end of the content that count as the bottom
    pub threshold: f64,
    pub on_bottom: EventHandler<()>,
    pub children: Element,
}

/// Scrollable region that reports when its bottom comes into view
#[component]
pub fn InfiniteScroll(props: InfiniteScrollProps) -> Element {
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let on_bottom = props.on_bottom;
    let threshold = props.threshold;

    rsx! {
        div {
            class: "infinite-scroll",
            onmounted: move |event| container.set(Some(event.data())),
            onscroll: move |_| {
                let Some(element) = container.peek().clone() else {
                    return;
                };
                spawn(async move {
                    if let Some(metrics) = read_scroll_metrics(&element).await {
                        if metrics.is_near_bottom(threshold) {
                            on_bottom.call(());
                        }
                    }
                });
            },
            {props.children}
        }
    }
}

async fn read_scroll_metrics(element: &MountedData) -> Option<ScrollMetrics> {
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let rect = element.get_client_rect().await.ok()?;

    Some(ScrollMetrics {
        scroll_top: offset.y,
        viewport_height: rect.size.height,
        content_height: size.height,
    })
}
