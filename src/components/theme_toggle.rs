//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_theme;

/// Cycles system → light → dark.
///
/// The glyph shows the active preference, the label names the next one.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            aria-label=move || theme.preference().switch_label()
            on:click=move |_| theme.cycle()
        >
            {move || theme.preference().icon()}
        </button>
    }
}
