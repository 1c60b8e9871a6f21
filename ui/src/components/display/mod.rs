pub mod generic_placeholder;
pub mod loading_indicator;
pub mod notification_toast;

pub use generic_placeholder::*;
pub use loading_indicator::*;
pub use notification_toast::*;
