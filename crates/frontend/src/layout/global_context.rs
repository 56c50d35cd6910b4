use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Dashboard,
    PriceEntry,
    TransactionEntry,
    Reports,
}

impl AppTab {
    pub fn all() -> [AppTab; 4] {
        [
            AppTab::Dashboard,
            AppTab::PriceEntry,
            AppTab::TransactionEntry,
            AppTab::Reports,
        ]
    }

    /// Value of the `?active=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "dashboard",
            AppTab::PriceEntry => "priceEntry",
            AppTab::TransactionEntry => "transactionEntry",
            AppTab::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::PriceEntry => "Price Entry",
            AppTab::TransactionEntry => "Transaction Entry",
            AppTab::Reports => "Reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "dashboard",
            AppTab::PriceEntry => "price",
            AppTab::TransactionEntry => "transaction",
            AppTab::Reports => "reports",
        }
    }

    pub fn from_key(key: &str) -> Option<AppTab> {
        AppTab::all().into_iter().find(|t| t.key() == key)
    }
}

/// Tab named by a location query string, e.g. "?active=reports"
pub fn tab_from_query(search: &str) -> Option<AppTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| AppTab::from_key(key))
}

/// Query string selecting `tab`, with leading '?'
pub fn query_for(tab: AppTab) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), tab.key().to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppTab::default()),
        }
    }

    /// Restore the active tab from the URL and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_query(&search) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: AppTab) {
        leptos::logging::log!("🔶 activate_tab: '{}'", tab.key());
        self.active.set(tab);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query("?active=priceEntry"), Some(AppTab::PriceEntry));
        assert_eq!(tab_from_query("active=reports"), Some(AppTab::Reports));
        assert_eq!(tab_from_query("?active=nope"), None);
        assert_eq!(tab_from_query(""), None);
    }

    #[test]
    fn test_query_roundtrip_for_every_tab() {
        for tab in AppTab::all() {
            assert_eq!(tab_from_query(&query_for(tab)), Some(tab));
        }
        assert_eq!(query_for(AppTab::TransactionEntry), "?active=transactionEntry");
    }
}
