use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::app_config;
use crate::shared::notification::Notifier;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = app_config().clone();

    // Provide the AppGlobalContext store to the whole app via context.
    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);

    // One notification slot for the whole app
    provide_context(Notifier::new(config.ui.notification_ttl_ms));
    provide_context(config);

    // Sync the active tab with ?active=...
    tabs_store.init_router_integration();

    view! {
        <Shell />
    }
}
