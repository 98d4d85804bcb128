//! Shuffle Stage Component
//!
//! Big avatar area (idle, rolling or result) and the shuffle trigger.

use leptos::prelude::*;

use crate::context::use_shuffle;

#[component]
pub fn ShuffleStage() -> impl IntoView {
    let shuffle = use_shuffle();

    let stage = move || {
        if shuffle.shuffling() {
            return view! {
                <div class="stage rolling">
                    <div class="stage-avatar spin">"🎲"</div>
                    <p class="stage-caption">"Shuffling..."</p>
                </div>
            }
            .into_any();
        }
        match shuffle.selected().filter(|_| shuffle.show_result()) {
            Some(entry) => view! {
                <div class="stage result">
                    <div class=format!("stage-avatar {}", entry.color)>{entry.icon}</div>
                    <p class="stage-name">{entry.name}</p>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="stage idle">
                    <div class="stage-avatar">"👤"</div>
                    <p class="stage-caption">"Press shuffle to pick a name!"</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <section class="shuffle-area">
            <div class="stage-frame">{stage}</div>

            <button
                class="shuffle-btn"
                prop:disabled=move || !shuffle.can_shuffle()
                on:click=move |_| shuffle.shuffle()
            >
                "🔀 "
                {move || if shuffle.shuffling() { "Shuffling..." } else { "Shuffle!" }}
            </button>

            <Show when=move || shuffle.is_empty()>
                <p class="empty-hint">"Add some names to get started"</p>
            </Show>
        </section>
    }
}
