use dioxus::prelude::*;
use ui::features::plans::PlanDraft;
use ui::services::i18n::translate;
use ui::{BillingServices, PlanEditor, TaxesSettings};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BillingServices {
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::TaxRates {})]
    #[layout(Shell)]
    #[route("/settings/taxes")]
    TaxRates {},
    #[route("/settings/taxes/create")]
    CreateTaxRate {},
    #[route("/plans/create")]
    CreatePlan {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        nav {
            class: "main-nav",
            Link { to: Route::TaxRates {}, {translate("taxes.settings.title")} }
            Link { to: Route::CreatePlan {}, {translate("plans.create.title")} }
        }
        main {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn TaxRates() -> Element {
    let navigator = navigator();

    rsx! {
        TaxesSettings {
            on_create: move |_| {
                navigator.push(Route::CreateTaxRate {});
            }
        }
    }
}

#[component]
fn CreateTaxRate() -> Element {
    rsx! {
        div {
            class: "settings-page",
            h1 {
                class: "page-title",
                {translate("taxes.create.title")}
            }
            Link { to: Route::TaxRates {}, {translate("taxes.create.back")} }
        }
    }
}

#[component]
fn CreatePlan() -> Element {
    rsx! {
        PlanEditor { draft: PlanDraft::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::routes::{CREATE_PLAN_ROUTE, CREATE_TAX_RATE_ROUTE, TAX_RATES_SETTINGS_ROUTE};

    #[test]
    fn test_routes_match_shared_paths() {
        assert_eq!(Route::TaxRates {}.to_string(), TAX_RATES_SETTINGS_ROUTE);
        assert_eq!(Route::CreateTaxRate {}.to_string(), CREATE_TAX_RATE_ROUTE);
        assert_eq!(Route::CreatePlan {}.to_string(), CREATE_PLAN_ROUTE);
    }
}
