//! Entry List Component
//!
//! Left column listing every entry with its avatar and a remove button.

use leptos::prelude::*;

use crate::context::use_shuffle;
use crate::models::Entry;

#[component]
pub fn EntryListView() -> impl IntoView {
    let shuffle = use_shuffle();

    view! {
        <div class="entry-list">
            <Show
                when=move || !shuffle.is_empty()
                fallback=|| view! { <p class="empty-hint">"No names added yet"</p> }
            >
                <For
                    each=move || shuffle.entries()
                    key=|entry| entry.id.clone()
                    children=move |entry| view! { <EntryRow entry=entry /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn EntryRow(entry: Entry) -> impl IntoView {
    let shuffle = use_shuffle();
    let id = entry.id.clone();

    view! {
        <div class="entry-row">
            <div class=format!("entry-avatar {}", entry.color)>{entry.icon}</div>
            <span class="entry-name">{entry.name}</span>
            <button
                class="delete-btn"
                title="Remove"
                aria-label="Trash"
                on:click=move |_| shuffle.remove(&id)
            >
                "🗑"
            </button>
        </div>
    }
}
