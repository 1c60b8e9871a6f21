//! Route paths shared by the screens and the router

pub const TAX_RATES_SETTINGS_ROUTE: &str = "/settings/taxes";
pub const CREATE_TAX_RATE_ROUTE: &str = "/settings/taxes/create";
pub const CREATE_PLAN_ROUTE: &str = "/plans/create";
