use super::{use_notifier, NotificationKind};
use leptos::prelude::*;
use thaw::*;

/// Displays the current notification, if any
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        {move || notifier.current().map(|n| {
            let intent = match n.kind {
                NotificationKind::Success => MessageBarIntent::Success,
                NotificationKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notification" role="status">
                    <MessageBar intent=intent>
                        <div class="notification__body">
                            <span>{n.text}</span>
                            <button
                                class="button button--ghost notification__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.clear()
                            >
                                "×"
                            </button>
                        </div>
                    </MessageBar>
                </div>
            }
        })}
    }
}
