use dioxus::prelude::*;

use crate::components::input::{BooleanSelector, InputType, SectionValidityIndicator, ValidatedInput};
use crate::features::plans::*;
use crate::services::i18n::translate;
use crate::utils::{
    amount_field_text, format_amount_input, parse_amount_input, parse_trial_period_input,
    positive_number,
};

#[derive(Props, PartialEq, Clone)]
pub struct FixedFeeSectionProps {
    /// Whether fields may still be changed once the plan exists
    pub can_be_edited: bool,
    /// Whether the form edits an existing plan rather than creating one
    pub is_edition: bool,
    pub form: Signal<PlanForm>,
}

#[component]
pub fn FixedFeeSection(props: FixedFeeSectionProps) -> Element {
    let mut form = props.form;
    let mut section = use_signal(|| {
        FixedFeeSectionState::new(props.can_be_edited, props.is_edition, &form.peek())
    });
    let mut amount_text = use_signal(|| {
        let current = form.peek();
        format_amount_input(current.values.amount_cents, current.values.display_currency())
    });

    use_effect(use_reactive(
        (&props.can_be_edited, &props.is_edition),
        move |(can_be_edited, is_edition)| {
            section.with_mut(|s| s.set_edit_permissions(can_be_edited, is_edition));
        },
    ));

    // Loading another draft re-derives trial period visibility and resets the amount text
    let draft_generation = use_memo(move || form.read().draft_generation());
    use_effect(move || {
        draft_generation();
        let current = form.peek();
        let initial = &current.initial_values;
        section.with_mut(|s| s.on_draft_replaced(initial.trial_period));
        amount_text.set(format_amount_input(
            initial.amount_cents,
            current.values.display_currency(),
        ));
    });

    let validity = section_validity(&form.read());
    let locked = section.read().fields_locked();
    let trial_visible = section.read().is_trial_period_visible();
    let values = form.read().values.clone();
    let currency = values.display_currency();
    let amount_display = amount_field_text(&amount_text.read(), values.amount_cents, currency);

    let interval_label = translate(interval_label_key(values.interval));
    let trial_text = values
        .trial_period
        .map(|days| days.to_string())
        .unwrap_or_default();
    let remove_tooltip = if locked {
        String::new()
    } else {
        translate("plans.fixed_fee.trial_period.remove")
    };

    rsx! {
        div {
            class: "card fixed-fee-section",

            h3 {
                class: "section-title",
                {translate("plans.fixed_fee.title")}
            }

            div {
                class: "box-wrapper",

                div {
                    class: "box-header",
                    span {
                        class: "box-title",
                        {translate("plans.fixed_fee.box_title")}
                    }
                    div {
                        class: "box-header-right",
                        SectionValidityIndicator { validity: validity }
                        span {
                            class: "chip",
                            "{interval_label}"
                        }
                    }
                }

                div {
                    class: "box-content",

                    ValidatedInput {
                        label: translate("plans.fixed_fee.amount.label"),
                        value: amount_display,
                        input_type: InputType::Decimal,
                        adornment: currency.symbol().to_string(),
                        has_error: validity == SectionValidity::HasError,
                        disabled: locked,
                        on_change: move |raw: String| {
                            if section.peek().fields_locked() {
                                return;
                            }
                            let currency = form.peek().values.display_currency();
                            let sanitized = positive_number(&raw, currency.minor_units());
                            let amount = parse_amount_input(&sanitized, currency);
                            amount_text.set(sanitized);
                            form.with_mut(|f| {
                                section.peek().edit(f, PlanFieldChange::AmountCents(amount));
                            });
                        }
                    }

                    BooleanSelector {
                        label: translate("plans.fixed_fee.pay_in_advance.label"),
                        value: values.pay_in_advance,
                        false_label: translate("plans.fixed_fee.pay_in_advance.arrears"),
                        true_label: translate("plans.fixed_fee.pay_in_advance.advance"),
                        helper_text: translate(pay_in_advance_helper_key(values.pay_in_advance)),
                        disabled: locked,
                        on_change: move |pay_in_advance: bool| {
                            form.with_mut(|f| {
                                section.peek().edit(f, PlanFieldChange::PayInAdvance(pay_in_advance));
                            });
                        }
                    }

                    if trial_visible {
                        div {
                            class: "inline-trial-period",
                            ValidatedInput {
                                label: translate("plans.fixed_fee.trial_period.label"),
                                value: trial_text,
                                placeholder: translate("plans.fixed_fee.trial_period.placeholder"),
                                input_type: InputType::Integer,
                                adornment: translate("plans.fixed_fee.trial_period.unit"),
                                disabled: locked,
                                on_change: move |raw: String| {
                                    let trial_period = parse_trial_period_input(&raw);
                                    form.with_mut(|f| {
                                        section.peek().edit(f, PlanFieldChange::TrialPeriod(trial_period));
                                    });
                                }
                            }
                            button {
                                class: "icon-button remove-trial-period",
                                title: "{remove_tooltip}",
                                disabled: locked,
                                onclick: move |_| {
                                    let mut draft = form.write();
                                    section.write().remove_trial_period(&mut draft);
                                },
                                "🗑"
                            }
                        }
                    } else {
                        button {
                            class: "button-quaternary",
                            "data-test": "show-trial-period",
                            disabled: locked,
                            onclick: move |_| section.write().show_trial_period(),
                            "+ "
                            {translate("plans.fixed_fee.trial_period.add")}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use std::time::Duration;

    #[derive(Props, PartialEq, Clone)]
    struct HostProps {
        draft: PlanDraft,
        /// Applied through the form handle after the section has rendered once
        later_change: Option<PlanFieldChange>,
    }

    #[component]
    fn Host(props: HostProps) -> Element {
        let mut form = use_signal(|| PlanForm::new(props.draft.clone()));
        let later_change = props.later_change.clone();
        use_effect(move || {
            if let Some(change) = later_change.clone() {
                form.write().set_field_value(change);
            }
        });

        rsx! {
            FixedFeeSection { can_be_edited: true, is_edition: false, form: form }
        }
    }

    async fn render_settled(props: HostProps) -> String {
        let mut dom = VirtualDom::new_with_props(Host, props);
        dom.rebuild_in_place();
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn test_amount_written_through_form_is_shown() {
        let html = render_settled(HostProps {
            draft: PlanDraft::default(),
            later_change: Some(PlanFieldChange::AmountCents(AmountCents::Cents(1250))),
        })
        .await;

        assert!(html.contains("12.50"), "{}", html);
    }

    #[tokio::test]
    async fn test_initial_amount_is_shown() {
        let html = render_settled(HostProps {
            draft: PlanDraft {
                amount_cents: AmountCents::Cents(900),
                amount_currency: Some(CurrencyCode::Eur),
                ..PlanDraft::default()
            },
            later_change: None,
        })
        .await;

        assert!(html.contains("9.00"), "{}", html);
        assert!(html.contains('€'), "{}", html);
    }

    #[tokio::test]
    async fn test_unknown_interval_keeps_an_empty_chip() {
        let html = render_settled(HostProps {
            draft: PlanDraft {
                interval: PlanInterval::Unknown,
                ..PlanDraft::default()
            },
            later_change: None,
        })
        .await;

        assert!(html.contains("class=\"chip\""), "{}", html);
    }
}
