// Core plan draft types - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Billing interval of a plan
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Weekly,
    #[default]
    Monthly,
    Yearly,
    /// Any interval this client does not know how to label
    #[serde(other)]
    Unknown,
}

/// Currencies the plan form can price in
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Chf,
    Cad,
    Aud,
    Jpy,
    Krw,
    Sek,
    Nok,
    Dkk,
    Pln,
    Inr,
    Brl,
}

impl CurrencyCode {
    /// Symbol shown as the amount input adornment
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd | CurrencyCode::Cad | CurrencyCode::Aud => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Jpy => "¥",
            CurrencyCode::Krw => "₩",
            CurrencyCode::Sek | CurrencyCode::Nok | CurrencyCode::Dkk => "kr",
            CurrencyCode::Pln => "zł",
            CurrencyCode::Inr => "₹",
            CurrencyCode::Brl => "R$",
        }
    }

    /// Number of digits after the decimal separator
    pub fn minor_units(&self) -> u32 {
        match self {
            CurrencyCode::Jpy | CurrencyCode::Krw => 0,
            _ => 2,
        }
    }
}

/// Fixed fee amount as held by the draft.
///
/// `Empty` is the state of a field the user has cleared: it is present but
/// invalid, and must not be confused with a draft that never had an amount.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AmountCents {
    #[default]
    Unset,
    Empty,
    Cents(u64),
}

impl AmountCents {
    pub fn cents(&self) -> Option<u64> {
        match self {
            AmountCents::Cents(cents) => Some(*cents),
            _ => None,
        }
    }
}

/// In-memory, not yet persisted plan being created or edited
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PlanDraft {
    pub amount_cents: AmountCents,
    pub amount_currency: Option<CurrencyCode>,
    pub pay_in_advance: bool,
    /// Days before billing begins
    pub trial_period: Option<u32>,
    pub interval: PlanInterval,
}

impl PlanDraft {
    /// Currency used for display, USD when the draft has none yet
    pub fn display_currency(&self) -> CurrencyCode {
        self.amount_currency.unwrap_or_default()
    }
}

/// The three draft fields the fixed fee section is allowed to write
#[derive(Clone, PartialEq, Debug)]
pub enum PlanFieldChange {
    AmountCents(AmountCents),
    PayInAdvance(bool),
    TrialPeriod(Option<u32>),
}

/// Advisory validation errors, keyed by field
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PlanFormErrors {
    pub amount_cents: Option<String>,
}

impl PlanFormErrors {
    pub fn is_empty(&self) -> bool {
        self.amount_cents.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_interval_deserializes() {
        let interval: PlanInterval = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(interval, PlanInterval::Unknown);

        let interval: PlanInterval = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(interval, PlanInterval::Weekly);
    }

    #[test]
    fn test_display_currency_falls_back_to_usd() {
        let mut draft = PlanDraft::default();
        assert_eq!(draft.display_currency(), CurrencyCode::Usd);
        assert_eq!(draft.display_currency().symbol(), "$");

        draft.amount_currency = Some(CurrencyCode::Eur);
        assert_eq!(draft.display_currency().symbol(), "€");
    }
}
