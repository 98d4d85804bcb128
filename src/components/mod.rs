//! UI Components
//!
//! Leptos views over the theme and shuffle contexts.

mod entry_list_view;
mod name_form;
mod shuffle_stage;
mod theme_toggle;

pub use entry_list_view::EntryListView;
pub use name_form::NameForm;
pub use shuffle_stage::ShuffleStage;
pub use theme_toggle::ThemeToggle;
