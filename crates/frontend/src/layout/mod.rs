pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod tabs;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   Header (title + tab navigation)        |
/// +------------------------------------------+
/// |   Notification banner                    |
/// |   Active tab content                     |
/// +------------------------------------------+
/// |   Footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <center::Center />
            <footer::Footer />
        </div>
    }
}
