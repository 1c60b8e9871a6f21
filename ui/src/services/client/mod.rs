// Client-side access to the billing GraphQL API
//
// This module provides:
// - A thin GraphQL-over-HTTP client with bearer auth
// - Tax rate queries and mutations behind the `TaxRateGateway` trait
// - Typed client errors

pub mod errors;
pub mod graphql;
pub mod tax_rates;

pub use errors::{ClientError, ClientResult, GraphQlErrorEntry};
pub use graphql::BillingApiClient;
pub use tax_rates::TaxRateGateway;
