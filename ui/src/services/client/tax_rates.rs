//! Tax rate API operations
//!
//! GraphQL documents and response envelopes for the tax rate settings page,
//! plus the [`TaxRateGateway`] seam the page's workflow is written against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::errors::ClientResult;
use super::graphql::BillingApiClient;
use crate::features::taxes::{TaxRateId, TaxRatesPage};

pub const GET_TAX_RATES_QUERY: &str = r#"
query getTaxRates($limit: Int, $page: Int) {
  taxRates(limit: $limit, page: $page) {
    metadata {
      currentPage
      totalPages
    }
    collection {
      id
      name
      code
      rate
      appliedToOrganization
    }
  }
}
"#;

pub const DESTROY_TAX_RATE_MUTATION: &str = r#"
mutation destroyTaxRate($input: DestroyTaxRateInput!) {
  destroyTaxRate(input: $input) {
    id
  }
}
"#;

#[derive(Serialize, Debug)]
struct GetTaxRatesVariables {
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTaxRatesData {
    tax_rates: TaxRatesPage,
}

#[derive(Serialize, Debug)]
struct DestroyTaxRateVariables<'a> {
    input: DestroyTaxRateInput<'a>,
}

#[derive(Serialize, Debug)]
struct DestroyTaxRateInput<'a> {
    id: &'a TaxRateId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DestroyTaxRateData {
    destroy_tax_rate: Option<DestroyedTaxRate>,
}

#[derive(Deserialize)]
struct DestroyedTaxRate {
    id: TaxRateId,
}

/// Remote operations backing the tax rate list
#[async_trait(?Send)]
pub trait TaxRateGateway {
    /// Fetch one page; `page: None` lets the API default to the first page
    async fn get_tax_rates(&self, limit: u32, page: Option<u32>) -> ClientResult<TaxRatesPage>;

    /// Delete a tax rate, returning the identifier the API reports as deleted
    async fn destroy_tax_rate(&self, id: &TaxRateId) -> ClientResult<TaxRateId>;
}

#[async_trait(?Send)]
impl TaxRateGateway for BillingApiClient {
    #[instrument(skip(self), err)]
    async fn get_tax_rates(&self, limit: u32, page: Option<u32>) -> ClientResult<TaxRatesPage> {
        let data: GetTaxRatesData = self
            .execute(
                "getTaxRates",
                GET_TAX_RATES_QUERY,
                GetTaxRatesVariables { limit, page },
            )
            .await?;

        info!(
            "Fetched {} tax rates (page {}/{})",
            data.tax_rates.collection.len(),
            data.tax_rates.metadata.current_page,
            data.tax_rates.metadata.total_pages
        );
        Ok(data.tax_rates)
    }

    #[instrument(skip(self), err)]
    async fn destroy_tax_rate(&self, id: &TaxRateId) -> ClientResult<TaxRateId> {
        let data: DestroyTaxRateData = self
            .execute(
                "destroyTaxRate",
                DESTROY_TAX_RATE_MUTATION,
                DestroyTaxRateVariables {
                    input: DestroyTaxRateInput { id },
                },
            )
            .await?;

        let destroyed = data.destroy_tax_rate.map(|tax_rate| tax_rate.id);
        info!("Destroyed tax rate {:?}", destroyed);
        Ok(destroyed.unwrap_or_else(|| id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_page_omits_page_variable() {
        let encoded = serde_json::to_value(GetTaxRatesVariables {
            limit: 20,
            page: None,
        })
        .unwrap();
        assert_eq!(encoded, json!({ "limit": 20 }));

        let encoded = serde_json::to_value(GetTaxRatesVariables {
            limit: 20,
            page: Some(3),
        })
        .unwrap();
        assert_eq!(encoded, json!({ "limit": 20, "page": 3 }));
    }

    #[test]
    fn test_destroy_variables_shape() {
        let id = TaxRateId::from("tax_1");
        let encoded = serde_json::to_value(DestroyTaxRateVariables {
            input: DestroyTaxRateInput { id: &id },
        })
        .unwrap();
        assert_eq!(encoded, json!({ "input": { "id": "tax_1" } }));
    }

    #[test]
    fn test_get_tax_rates_data_decoding() {
        let data: GetTaxRatesData = serde_json::from_value(json!({
            "taxRates": {
                "metadata": { "currentPage": 2, "totalPages": 2 },
                "collection": [{ "id": "tax_9", "name": "VAT", "code": "vat", "rate": 19.0 }]
            }
        }))
        .unwrap();
        assert_eq!(data.tax_rates.metadata.current_page, 2);
        assert_eq!(data.tax_rates.collection[0].code, "vat");
    }
}
