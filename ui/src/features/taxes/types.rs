use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque server-side identifier of a tax rate
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRateId(pub String);

impl fmt::Display for TaxRateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxRateId {
    fn from(value: &str) -> Self {
        TaxRateId(value.to_string())
    }
}

/// Read-only projection of a tax rate, as listed in settings
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRate {
    pub id: TaxRateId,
    pub name: String,
    pub code: String,
    /// Percentage, `20.0` means 20%
    pub rate: f64,
    #[serde(default)]
    pub applied_to_organization: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationMetadata {
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of the `taxRates` query
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TaxRatesPage {
    pub metadata: PaginationMetadata,
    pub collection: Vec<TaxRate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tax_rates_page_decoding() {
        let payload = json!({
            "metadata": { "currentPage": 1, "totalPages": 3 },
            "collection": [
                { "id": "b7ab2926", "name": "French VAT", "code": "fr_vat", "rate": 20.0, "appliedToOrganization": true },
                { "id": "c2f9a6d4", "name": "Reduced", "code": "reduced", "rate": 5.5 }
            ]
        });

        let page: TaxRatesPage = serde_json::from_value(payload).unwrap();
        assert_eq!(page.metadata, PaginationMetadata { current_page: 1, total_pages: 3 });
        assert!(page.metadata.has_next_page());
        assert_eq!(page.collection[0].id, TaxRateId::from("b7ab2926"));
        assert!(page.collection[0].applied_to_organization);
        assert!(!page.collection[1].applied_to_organization);
    }
}
