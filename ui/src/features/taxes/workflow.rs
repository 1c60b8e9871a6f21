//! Network steps of the tax rate list
//!
//! Each function performs one gateway call and turns its outcome into the
//! action the list state is reduced with.

use super::list_state::{TaxRateListAction, TaxRatesQuery};
use tracing::warn;

use super::types::TaxRateId;
use crate::services::client::{ClientError, TaxRateGateway};

fn describe_failure(operation: &str, error: &ClientError) -> String {
    warn!(
        retryable = error.is_retryable(),
        code = error.graphql_code().unwrap_or("none"),
        "{} failed: {}",
        operation,
        error
    );
    error.to_string()
}

pub async fn run_tax_rates_query<G>(gateway: &G, query: TaxRatesQuery) -> TaxRateListAction
where
    G: TaxRateGateway + ?Sized,
{
    let result = gateway
        .get_tax_rates(query.limit, query.page)
        .await
        .map_err(|e| describe_failure("getTaxRates", &e));
    TaxRateListAction::PageLoaded { query, result }
}

pub async fn run_destroy_tax_rate<G>(gateway: &G, id: TaxRateId) -> TaxRateListAction
where
    G: TaxRateGateway + ?Sized,
{
    match gateway.destroy_tax_rate(&id).await {
        Ok(_) => TaxRateListAction::DeletionSucceeded(id),
        Err(e) => TaxRateListAction::DeletionFailed {
            message: describe_failure("destroyTaxRate", &e),
            id,
        },
    }
}
