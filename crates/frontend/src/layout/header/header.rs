use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("fuel")}
                <span class="header__title">"Fuel Inventory Management"</span>
            </div>
            <nav class="header__nav">
                {AppTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if tabs_store.active.get() == tab {
                                        "button header__tab header__tab--active"
                                    } else {
                                        "button button--ghost header__tab"
                                    }
                                }
                                on:click=move |_| tabs_store.activate_tab(tab)
                            >
                                {icon(tab.icon())}
                                <span>{tab.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
