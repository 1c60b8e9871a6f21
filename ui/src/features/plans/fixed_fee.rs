//! Fixed fee section state
//!
//! Holds the only piece of local state the section owns (whether the trial
//! period input is shown) and the rules that gate writes to the shared
//! [`PlanForm`].

use super::form::PlanForm;
use super::types::*;

/// Visibility of the trial period input
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TrialPeriodVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The two mutually exclusive states of the section's validity icon
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionValidity {
    Valid,
    HasError,
}

impl SectionValidity {
    pub fn tooltip_key(&self) -> &'static str {
        match self {
            SectionValidity::Valid => "plans.fixed_fee.validity.valid",
            SectionValidity::HasError => "plans.fixed_fee.validity.has_error",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SectionValidity::Valid => "validity-icon success",
            SectionValidity::HasError => "validity-icon disabled",
        }
    }
}

/// Whether a draft loaded with this trial period should show its input
pub fn should_display_trial_period(initial_trial_period: Option<u32>) -> bool {
    matches!(initial_trial_period, Some(days) if days > 0)
}

/// Translation key for the interval chip, empty for unknown intervals
pub fn interval_label_key(interval: PlanInterval) -> &'static str {
    match interval {
        PlanInterval::Weekly => "plans.interval.weekly",
        PlanInterval::Monthly => "plans.interval.monthly",
        PlanInterval::Yearly => "plans.interval.yearly",
        PlanInterval::Unknown => "",
    }
}

/// Translation key for the helper text under the pay-in-advance selector
pub fn pay_in_advance_helper_key(pay_in_advance: bool) -> &'static str {
    if pay_in_advance {
        "plans.fixed_fee.pay_in_advance.helper_advance"
    } else {
        "plans.fixed_fee.pay_in_advance.helper_arrears"
    }
}

pub fn section_validity(form: &PlanForm) -> SectionValidity {
    if form.values.amount_cents == AmountCents::Empty || form.errors.amount_cents.is_some() {
        SectionValidity::HasError
    } else {
        SectionValidity::Valid
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FixedFeeSectionState {
    pub trial_period: TrialPeriodVisibility,
    fields_locked: bool,
}

impl FixedFeeSectionState {
    pub fn new(can_be_edited: bool, is_edition: bool, form: &PlanForm) -> Self {
        let mut state = Self {
            trial_period: TrialPeriodVisibility::Hidden,
            fields_locked: is_edition && !can_be_edited,
        };
        state.on_draft_replaced(form.initial_values.trial_period);
        state
    }

    /// An existing plan that can no longer be edited renders read-only
    pub fn fields_locked(&self) -> bool {
        self.fields_locked
    }

    pub fn set_edit_permissions(&mut self, can_be_edited: bool, is_edition: bool) {
        self.fields_locked = is_edition && !can_be_edited;
    }

    pub fn is_trial_period_visible(&self) -> bool {
        self.trial_period == TrialPeriodVisibility::Visible
    }

    /// Re-derive visibility after a different draft is loaded into the form
    pub fn on_draft_replaced(&mut self, initial_trial_period: Option<u32>) {
        self.trial_period = if should_display_trial_period(initial_trial_period) {
            TrialPeriodVisibility::Visible
        } else {
            TrialPeriodVisibility::Hidden
        };
    }

    /// Apply a field edit; returns whether the draft was written
    pub fn edit(&self, form: &mut PlanForm, change: PlanFieldChange) -> bool {
        if self.fields_locked {
            return false;
        }
        form.set_field_value(change);
        true
    }

    pub fn show_trial_period(&mut self) {
        if self.fields_locked {
            return;
        }
        self.trial_period = TrialPeriodVisibility::Visible;
    }

    pub fn remove_trial_period(&mut self, form: &mut PlanForm) {
        if self.fields_locked {
            return;
        }
        form.set_field_value(PlanFieldChange::TrialPeriod(None));
        self.trial_period = TrialPeriodVisibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_trial(trial_period: Option<u32>) -> PlanForm {
        PlanForm::new(PlanDraft {
            trial_period,
            amount_cents: AmountCents::Cents(1000),
            ..PlanDraft::default()
        })
    }

    #[test]
    fn test_trial_period_visibility_on_mount() {
        for (initial, expected) in [
            (None, false),
            (Some(0), false),
            (Some(1), true),
            (Some(30), true),
        ] {
            let state = FixedFeeSectionState::new(true, false, &form_with_trial(initial));
            assert_eq!(state.is_trial_period_visible(), expected, "initial {:?}", initial);
        }
    }

    #[test]
    fn test_draft_replaced_recomputes_visibility() {
        let mut state = FixedFeeSectionState::new(true, true, &form_with_trial(Some(7)));
        assert!(state.is_trial_period_visible());

        state.on_draft_replaced(None);
        assert!(!state.is_trial_period_visible());

        state.on_draft_replaced(Some(14));
        assert!(state.is_trial_period_visible());
    }

    #[test]
    fn test_show_trial_period_keeps_value() {
        let mut form = form_with_trial(None);
        let mut state = FixedFeeSectionState::new(true, false, &form);

        state.show_trial_period();
        assert!(state.is_trial_period_visible());
        assert_eq!(form.values.trial_period, None);

        assert!(state.edit(&mut form, PlanFieldChange::TrialPeriod(Some(5))));
        state.show_trial_period();
        assert_eq!(form.values.trial_period, Some(5));
    }

    #[test]
    fn test_remove_trial_period_unsets_and_hides() {
        let mut form = form_with_trial(Some(10));
        let mut state = FixedFeeSectionState::new(true, true, &form);
        assert!(state.is_trial_period_visible());

        state.remove_trial_period(&mut form);
        assert!(!state.is_trial_period_visible());
        assert_eq!(form.values.trial_period, None);
    }

    #[test]
    fn test_locked_section_ignores_edits() {
        let mut form = form_with_trial(Some(10));
        let mut state = FixedFeeSectionState::new(false, true, &form);
        let before = form.clone();

        assert!(state.fields_locked());
        assert!(!state.edit(&mut form, PlanFieldChange::AmountCents(AmountCents::Cents(5))));
        assert!(!state.edit(&mut form, PlanFieldChange::PayInAdvance(true)));
        assert!(!state.edit(&mut form, PlanFieldChange::TrialPeriod(Some(3))));
        state.remove_trial_period(&mut form);

        assert_eq!(form, before);
        assert!(state.is_trial_period_visible());
    }

    #[test]
    fn test_new_plan_is_never_locked() {
        let state = FixedFeeSectionState::new(false, false, &form_with_trial(None));
        assert!(!state.fields_locked());
    }

    #[test]
    fn test_section_validity_is_exclusive() {
        let amounts = [
            AmountCents::Unset,
            AmountCents::Empty,
            AmountCents::Cents(0),
            AmountCents::Cents(990),
        ];
        let errors = [None, Some("plans.fixed_fee.errors.amount_required".to_string())];

        for amount in amounts {
            for error in errors.clone() {
                let mut form = PlanForm::default();
                form.values.amount_cents = amount;
                form.errors.amount_cents = error.clone();

                let expected = if amount == AmountCents::Empty || error.is_some() {
                    SectionValidity::HasError
                } else {
                    SectionValidity::Valid
                };
                assert_eq!(section_validity(&form), expected);
            }
        }
    }

    #[test]
    fn test_empty_amount_always_has_error() {
        let mut form = PlanForm::default();
        form.values.amount_cents = AmountCents::Empty;
        form.errors.amount_cents = None;
        assert_eq!(section_validity(&form), SectionValidity::HasError);
    }

    #[test]
    fn test_interval_label_keys() {
        assert_eq!(interval_label_key(PlanInterval::Weekly), "plans.interval.weekly");
        assert_eq!(interval_label_key(PlanInterval::Monthly), "plans.interval.monthly");
        assert_eq!(interval_label_key(PlanInterval::Yearly), "plans.interval.yearly");
        assert_eq!(interval_label_key(PlanInterval::Unknown), "");
    }
}
