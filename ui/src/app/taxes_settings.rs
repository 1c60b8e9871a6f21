use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::services::AppServices;
use crate::components::display::{GenericPlaceholder, NotificationToast};
use crate::components::taxes::{DeleteTaxRateDialog, InfiniteScroll, TaxRateItem, TaxRateItemSkeleton};
use crate::features::taxes::*;
use crate::services::client::BillingApiClient;
use crate::services::i18n::translate;
use crate::{console_debug, console_error, console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct TaxesSettingsProps {
    /// Navigate to the tax rate creation screen
    pub on_create: EventHandler<()>,
}

/// Fetch one page and hand the outcome to the list reducer
async fn load_page(
    client: Signal<BillingApiClient>,
    query: TaxRatesQuery,
    dispatch: EventHandler<TaxRateListAction>,
) {
    let client = client.peek().clone();
    console_debug!("[TaxesSettings] Fetching tax rates page {:?}", query.page);

    let action = run_tax_rates_query(&client, query).await;
    if let TaxRateListAction::PageLoaded { result: Err(e), .. } = &action {
        match query.kind {
            QueryKind::Initial => {
                console_error!("[TaxesSettings] Failed to load tax rates: {}", e)
            }
            QueryKind::Append => {
                console_warn!("[TaxesSettings] Failed to load page {:?}: {}", query.page, e)
            }
        }
    }
    dispatch.call(action);
}

async fn delete_tax_rate(
    client: Signal<BillingApiClient>,
    id: TaxRateId,
    dispatch: EventHandler<TaxRateListAction>,
) {
    let client = client.peek().clone();
    console_info!("[TaxesSettings] Deleting tax rate {}", id);

    let action = run_destroy_tax_rate(&client, id).await;
    if let TaxRateListAction::DeletionFailed { id, message } = &action {
        console_error!("[TaxesSettings] Deletion of {} failed: {}", id, message);
    }
    dispatch.call(action);
}

fn render_list_region(
    state: Signal<TaxRateListState>,
    dispatch: EventHandler<TaxRateListAction>,
    on_bottom: EventHandler<()>,
    threshold: f64,
) -> Element {
    let region = state.read().region();

    match region {
        ListRegion::Loading => rsx! {
            div {
                class: "info-block",
                for index in 0..SKELETON_ROW_COUNT {
                    TaxRateItemSkeleton { key: "tax-rate-skeleton-{index}" }
                }
            }
        },
        ListRegion::Empty => rsx! {
            div {
                class: "info-block empty",
                p {
                    class: "empty-title",
                    {translate("taxes.settings.empty_title")}
                }
                p {
                    class: "empty-subtitle",
                    {translate("taxes.settings.empty_subtitle")}
                }
            }
        },
        ListRegion::Populated { appending } => {
            let collection = state.read().collection.clone();
            rsx! {
                div {
                    class: "info-block has-data",
                    InfiniteScroll {
                        threshold: threshold,
                        on_bottom: on_bottom,
                        for tax_rate in collection {
                            TaxRateItem {
                                key: "tax-rate-item-{tax_rate.id}",
                                tax_rate: tax_rate.clone(),
                                on_delete: move |id: TaxRateId| {
                                    dispatch.call(TaxRateListAction::RequestDeletion(id));
                                }
                            }
                        }
                        if appending {
                            for index in 0..SKELETON_ROW_COUNT {
                                TaxRateItemSkeleton { key: "tax-rate-skeleton-{index}" }
                            }
                        }
                    }
                }
            }
        }
        // Handled by the page before the list region is rendered
        ListRegion::Error => rsx! {},
    }
}

#[component]
pub fn TaxesSettings(props: TaxesSettingsProps) -> Element {
    let services = use_context::<AppServices>();
    let page_size = services.config.tax_rates.page_size;
    let threshold = services.config.tax_rates.scroll_threshold_px;
    let notification_timeout_ms = services.config.tax_rates.notification_timeout_ms;

    let mut state = use_signal(|| TaxRateListState::new(page_size));
    let client = use_signal(|| services.client.clone());

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: TaxRateListAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    use_hook(move || {
        spawn(async move {
            let query = state.write().request_initial_page();
            load_page(client, query, dispatch).await;
        });
    });

    // Each raised notification gets its own timer; a timer only dismisses the notification it was started for
    let active_notification = use_memo(move || {
        let state = state.read();
        state.notification.as_ref().map(|_| state.notification_seq())
    });
    use_effect(move || {
        if let Some(seq) = active_notification() {
            spawn(async move {
                TimeoutFuture::new(notification_timeout_ms).await;
                dispatch.call(TaxRateListAction::DismissNotification(seq));
            });
        }
    });

    let on_bottom = EventHandler::new(move |_: ()| {
        let next = state.write().request_next_page();
        if let Some(query) = next {
            spawn(load_page(client, query, dispatch));
        }
    });

    if state.read().region() == ListRegion::Error {
        return rsx! {
            GenericPlaceholder {
                title: translate("taxes.error.title"),
                subtitle: translate("taxes.error.subtitle"),
                button_title: translate("taxes.error.retry"),
                on_action: move |_| {
                    console_info!("[TaxesSettings] Reloading tax rates");
                    let query = state.write().request_initial_page();
                    spawn(load_page(client, query, dispatch));
                }
            }
        };
    }

    let on_create = props.on_create;
    let create_disabled = state.read().is_loading_initial();
    let pending = state.read().selected_for_deletion.clone();
    let pending_name = pending
        .as_ref()
        .and_then(|pending| {
            state
                .read()
                .collection
                .iter()
                .find(|tax_rate| tax_rate.id == pending.id)
                .map(|tax_rate| tax_rate.name.clone())
        })
        .unwrap_or_default();
    let notification = state.read().notification.clone();
    let notification_seq = state.read().notification_seq();

    rsx! {
        div {
            class: "settings-page",

            h1 {
                class: "page-title",
                {translate("taxes.settings.title")}
            }
            p {
                class: "page-subtitle",
                {translate("taxes.settings.subtitle")}
            }

            div {
                class: "inline-section-title",
                h2 {
                    class: "section-title",
                    {translate("taxes.settings.section_title")}
                }
                button {
                    class: "button-quaternary",
                    disabled: create_disabled,
                    onclick: move |_| on_create.call(()),
                    {translate("taxes.settings.create")}
                }
            }

            {render_list_region(state, dispatch, on_bottom, threshold)}
        }

        if let Some(pending) = pending {
            DeleteTaxRateDialog {
                pending: pending,
                tax_rate_name: pending_name,
                on_cancel: move |_| dispatch.call(TaxRateListAction::CancelDeletion),
                on_confirm: move |_| {
                    let id = state.write().confirm_deletion();
                    if let Some(id) = id {
                        spawn(delete_tax_rate(client, id, dispatch));
                    }
                }
            }
        }

        if let Some(notification) = notification {
            NotificationToast {
                message: translate(notification.translation_key()),
                on_dismiss: move |_| dispatch.call(TaxRateListAction::DismissNotification(notification_seq))
            }
        }
    }
}
