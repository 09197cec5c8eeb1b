use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Shown in place of a list that has nothing to offer.
#[component]
pub fn EmptyState(message: String) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Info>
            {message}
        </MessageBar>
    }
}
