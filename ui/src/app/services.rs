use dioxus::prelude::*;

use crate::console_info;
use crate::services::client::BillingApiClient;
use crate::services::config::AppConfig;

/// Configuration and API client shared with every screen through context
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub client: BillingApiClient,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        let client = BillingApiClient::new(config.api.clone());
        Self { config, client }
    }
}

/// Provides [`AppServices`] to everything rendered inside it
#[component]
pub fn BillingServices(children: Element) -> Element {
    use_context_provider(|| {
        let services = AppServices::new(AppConfig::load());
        console_info!(
            "[BillingServices] Using GraphQL endpoint {}",
            services.client.endpoint()
        );
        services
    });

    rsx! {
        {children}
    }
}
