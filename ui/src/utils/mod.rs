//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the application:
//!
//! - **console_macros**: Timestamped logging macros for browser console output
//! - **formatters**: Input formatters for amounts, trial periods and tax rates
//! - **scroll**: Scroll position math for infinite lists
//! - **validation**: Styling helpers for fields and validity indicators

pub mod console_macros;
pub mod formatters;
pub mod scroll;
pub mod validation;

pub use formatters::*;
pub use scroll::*;
pub use validation::*;
