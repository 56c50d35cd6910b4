use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::render_tab_content;
use crate::shared::notification::NotificationBanner;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Re-selecting the current tab keeps the mounted screen
    let active = Memo::new(move |_| tabs_store.active.get());

    view! {
        <main data-zone="center" class="app-main">
            <NotificationBanner />
            {move || render_tab_content(active.get())}
        </main>
    }
}
