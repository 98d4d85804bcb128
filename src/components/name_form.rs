//! Name Form Component
//!
//! Text input plus add button; Enter submits.

use leptos::prelude::*;

use crate::context::use_shuffle;

#[component]
pub fn NameForm() -> impl IntoView {
    let shuffle = use_shuffle();
    let (new_name, set_new_name) = signal(String::new());

    let add_name = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if shuffle.add(&new_name.get_untracked()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="name-form" on:submit=add_name>
            <input
                type="text"
                placeholder="Enter a name"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" aria-label="Plus">"+"</button>
        </form>
    }
}
