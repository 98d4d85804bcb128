//! Name Shuffle App
//!
//! Root component: names column on the left, shuffle stage in the main
//! area, theme toggle in the top-right corner.

use leptos::prelude::*;

use crate::components::{EntryListView, NameForm, ShuffleStage, ThemeToggle};
use crate::config::AppConfig;
use crate::context::{ShuffleContext, ThemeContext};
use crate::storage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = storage::open_default();

    // Theme first, so the document class is set before anything renders
    let theme = ThemeContext::init(storage.clone());
    let shuffle = ShuffleContext::init(storage, config.timing);

    provide_context(theme);
    provide_context(shuffle);

    view! {
        <div class="app-layout">
            <div class="theme-corner">
                <ThemeToggle />
            </div>

            <aside class="names-column">
                <NameForm />
                <EntryListView />
            </aside>

            <main class="main-content">
                <ShuffleStage />
            </main>
        </div>
    }
}
