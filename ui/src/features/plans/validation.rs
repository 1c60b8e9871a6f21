use super::types::*;

pub const AMOUNT_REQUIRED_ERROR: &str = "plans.fixed_fee.errors.amount_required";

/// Runs the plan validator over the fields the fixed fee section owns
pub fn validate_plan_draft(draft: &PlanDraft) -> PlanFormErrors {
    PlanFormErrors {
        amount_cents: validate_amount_cents(&draft.amount_cents),
    }
}

fn validate_amount_cents(amount: &AmountCents) -> Option<String> {
    match amount {
        AmountCents::Cents(_) => None,
        AmountCents::Unset | AmountCents::Empty => Some(AMOUNT_REQUIRED_ERROR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_required() {
        let mut draft = PlanDraft::default();
        assert_eq!(
            validate_plan_draft(&draft).amount_cents.as_deref(),
            Some(AMOUNT_REQUIRED_ERROR)
        );

        draft.amount_cents = AmountCents::Empty;
        assert!(!validate_plan_draft(&draft).is_empty());

        draft.amount_cents = AmountCents::Cents(0);
        assert!(validate_plan_draft(&draft).is_empty());
    }

    #[test]
    fn test_trial_period_never_errors() {
        for trial_period in [None, Some(0), Some(14), Some(u32::MAX)] {
            let draft = PlanDraft {
                amount_cents: AmountCents::Cents(100),
                trial_period,
                ..PlanDraft::default()
            };
            assert_eq!(validate_plan_draft(&draft), PlanFormErrors::default());
        }
    }
}
