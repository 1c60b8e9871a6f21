use super::types::*;
use super::validation::validate_plan_draft;

/// Form-state handle for a plan draft.
///
/// Owned by the enclosing plan workflow and shared with sections through a
/// `Signal`. `set_field_value` is the only way sections write to the draft.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PlanForm {
    pub values: PlanDraft,
    pub initial_values: PlanDraft,
    pub errors: PlanFormErrors,
    draft_generation: u64,
}

impl PlanForm {
    pub fn new(initial_values: PlanDraft) -> Self {
        let errors = validate_plan_draft(&initial_values);
        Self {
            values: initial_values.clone(),
            initial_values,
            errors,
            draft_generation: 0,
        }
    }

    /// Load a different draft into the same form
    pub fn replace_draft(&mut self, draft: PlanDraft) {
        let draft_generation = self.draft_generation + 1;
        *self = Self::new(draft);
        self.draft_generation = draft_generation;
    }

    /// Number of drafts loaded with `replace_draft`, so sections can reset
    /// local field state even when the new draft equals the old one
    pub fn draft_generation(&self) -> u64 {
        self.draft_generation
    }

    pub fn set_field_value(&mut self, change: PlanFieldChange) {
        match change {
            PlanFieldChange::AmountCents(amount) => self.values.amount_cents = amount,
            PlanFieldChange::PayInAdvance(pay_in_advance) => {
                self.values.pay_in_advance = pay_in_advance
            }
            PlanFieldChange::TrialPeriod(trial_period) => self.values.trial_period = trial_period,
        }
        self.errors = validate_plan_draft(&self.values);
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_value_revalidates() {
        let mut form = PlanForm::new(PlanDraft::default());
        assert!(form.errors.amount_cents.is_some());
        assert!(!form.is_dirty());

        form.set_field_value(PlanFieldChange::AmountCents(AmountCents::Cents(1500)));
        assert_eq!(form.values.amount_cents, AmountCents::Cents(1500));
        assert!(form.errors.is_empty());
        assert!(form.is_dirty());

        form.set_field_value(PlanFieldChange::AmountCents(AmountCents::Empty));
        assert!(form.errors.amount_cents.is_some());
    }

    #[test]
    fn test_replace_draft_resets_initial_values() {
        let mut form = PlanForm::new(PlanDraft::default());
        form.set_field_value(PlanFieldChange::TrialPeriod(Some(3)));

        form.replace_draft(PlanDraft {
            trial_period: Some(14),
            amount_cents: AmountCents::Cents(100),
            ..PlanDraft::default()
        });

        assert_eq!(form.initial_values.trial_period, Some(14));
        assert_eq!(form.values.trial_period, Some(14));
        assert!(!form.is_dirty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_replace_draft_bumps_generation_for_equal_drafts() {
        let draft = PlanDraft {
            amount_cents: AmountCents::Cents(500),
            ..PlanDraft::default()
        };
        let mut form = PlanForm::new(draft.clone());
        assert_eq!(form.draft_generation(), 0);

        form.set_field_value(PlanFieldChange::AmountCents(AmountCents::Cents(700)));
        assert_eq!(form.draft_generation(), 0);

        form.replace_draft(draft.clone());
        assert_eq!(form.draft_generation(), 1);
        assert_eq!(form.values, draft);

        form.replace_draft(draft);
        assert_eq!(form.draft_generation(), 2);
    }
}
