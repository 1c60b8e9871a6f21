/// Macros for timestamped browser console logging
/// These macros wrap gloo_console functions and prefix every message with the
/// current `Date.now()` so interleaved fetch logs can be ordered.
///
/// Accept either a plain message or a format string with arguments:
/// `console_info!("[TaxesSettings] loaded {} rows", count)`.

/// Prefix a message with the browser clock in milliseconds
pub fn timestamped(message: &str) -> String {
    format!("[{}] {}", js_sys::Date::now(), message)
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        gloo_console::info!($crate::utils::console_macros::timestamped(&format!("{}", $fmt)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::info!($crate::utils::console_macros::timestamped(&format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        gloo_console::warn!($crate::utils::console_macros::timestamped(&format!("{}", $fmt)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::warn!($crate::utils::console_macros::timestamped(&format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        gloo_console::error!($crate::utils::console_macros::timestamped(&format!("{}", $fmt)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::error!($crate::utils::console_macros::timestamped(&format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        gloo_console::debug!($crate::utils::console_macros::timestamped(&format!("{}", $fmt)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::debug!($crate::utils::console_macros::timestamped(&format!($fmt, $($arg)*)))
    };
}
