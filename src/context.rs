//! Application Context
//!
//! Theme and entry-list handles, constructed by the root component and
//! provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::{ShuffleTiming, DARK_CLASS, NAMES_PARAM};
use crate::entries::EntryList;
use crate::models::Entry;
use crate::persistence::EntryPersister;
use crate::storage::SharedStore;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::theme::{ResolvedTheme, ThemePreference, ThemeResolver};
use crate::url_sync;

fn apply_theme(theme: ResolvedTheme) {
    leptos_color_scheme::set_root_class(DARK_CLASS, theme.is_dark());
}

/// Theme state shared with the view layer
#[derive(Clone, Copy)]
pub struct ThemeContext {
    resolver: RwSignal<ThemeResolver, LocalStorage>,
}

impl ThemeContext {
    /// Restore the theme, apply it to the document right away and start
    /// following the platform color scheme for the lifetime of the
    /// current owner.
    pub fn init(storage: SharedStore) -> Self {
        let resolver = ThemeResolver::load(storage, leptos_color_scheme::prefers_dark());
        apply_theme(resolver.resolved());
        let resolver = RwSignal::new_local(resolver);

        leptos_color_scheme::watch_prefers_dark(move |dark| {
            log::debug!("[THEME] platform prefers dark: {}", dark);
            resolver.maybe_update(|r| r.set_system_dark(dark));
        });

        Effect::new(move |_| apply_theme(resolver.with(|r| r.resolved())));

        Self { resolver }
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.resolver.with(|r| r.resolved())
    }

    pub fn preference(&self) -> ThemePreference {
        self.resolver.with(|r| r.preference())
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        log::info!("[THEME] set {}", preference);
        self.resolver.update(|r| r.set_preference(preference));
    }

    pub fn cycle(&self) {
        self.resolver.update(|r| {
            let next = r.cycle();
            log::info!("[THEME] cycled to {}", next);
        });
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Entry list and shuffle state shared with the view layer
#[derive(Clone, Copy)]
pub struct ShuffleContext {
    store: AppStore,
    timing: ShuffleTiming,
}

impl ShuffleContext {
    /// Load saved entries, merge names from the URL, and keep storage and
    /// URL in step with every later change.
    pub fn init(storage: SharedStore, timing: ShuffleTiming) -> Self {
        let persister = EntryPersister::new(storage);
        let mut entries = persister.load();
        if let Some(names) = url_sync::read_location_names(NAMES_PARAM) {
            let seeded = entries.seed_names(&names, &mut rand::thread_rng());
            log::info!("[ENTRIES] {} of {} URL names added", seeded, names.len());
        }

        let store = Store::new(AppState::with_entries(entries));
        let persister = StoredValue::new_local(persister);

        // shuffle state lives in the same store; only a changed list is written out
        let entries = Memo::new(move |_| store.entries().get());
        Effect::new(move |_| {
            entries.with(|entries| {
                persister.with_value(|p| {
                    if let Err(err) = p.save(entries) {
                        log::warn!("[ENTRIES] failed to save: {}", err);
                    }
                });
                url_sync::replace_location_names(NAMES_PARAM, entries.names().as_slice());
            });
        });

        Self { store, timing }
    }

    pub fn entries(&self) -> EntryList {
        self.store.entries().get()
    }

    pub fn is_empty(&self) -> bool {
        self.store.entries().read().is_empty()
    }

    pub fn selected(&self) -> Option<Entry> {
        self.store.selected().get()
    }

    pub fn shuffling(&self) -> bool {
        self.store.shuffling().get()
    }

    pub fn show_result(&self) -> bool {
        self.store.show_result().get()
    }

    /// Whether the shuffle trigger should be enabled
    pub fn can_shuffle(&self) -> bool {
        !self.shuffling() && !self.is_empty()
    }

    /// Add an entry; blank names are ignored. Returns whether one was added.
    pub fn add(&self, raw_name: &str) -> bool {
        if raw_name.trim().is_empty() {
            log::debug!("[ENTRIES] ignoring blank name");
            return false;
        }
        let added = self
            .store
            .entries()
            .write()
            .add(raw_name, &mut rand::thread_rng())
            .map(|entry| entry.name.clone());
        if let Some(name) = &added {
            log::info!("[ENTRIES] added {:?}", name);
        }
        added.is_some()
    }

    /// Remove an entry by id; unknown ids are ignored
    pub fn remove(&self, id: &str) {
        if !self.store.entries().read_untracked().contains_id(id) {
            return;
        }
        if let Some(removed) = self.store.try_update(|state| state.remove_entry(id)).flatten() {
            log::info!("[ENTRIES] removed {:?}", removed.name);
        }
    }

    /// One uniformly random entry, `None` when the list is empty
    pub fn select_random(&self) -> Option<Entry> {
        let entries = self.store.entries().read_untracked();
        let picked = entries
            .shuffler()
            .map(|shuffler| shuffler.pick(&mut rand::thread_rng()).clone());
        picked
    }

    /// Run the shuffle animation and pick an entry when it ends.
    ///
    /// Ignored while a shuffle is running or the list is empty.
    pub fn shuffle(&self) {
        if !self.store.read_untracked().can_shuffle() {
            return;
        }
        if !self.store.try_update(|state| state.begin_shuffle()).unwrap_or(false) {
            return;
        }
        log::debug!("[SHUFFLE] rolling for {}ms", self.timing.roll_ms);

        let this = *self;
        let store = self.store;
        let timing = self.timing;
        spawn_local(async move {
            TimeoutFuture::new(timing.roll_ms).await;
            let picked = this.select_random();
            let picked = store
                .try_update(|state| state.finish_shuffle(picked).map(|entry| entry.name.clone()))
                .flatten();
            match &picked {
                Some(name) => log::info!("[SHUFFLE] picked {:?}", name),
                None => log::info!("[SHUFFLE] nothing left to pick"),
            }

            TimeoutFuture::new(timing.reveal_ms).await;
            store.try_update(|state| state.reveal());
        });
    }
}

pub fn use_shuffle() -> ShuffleContext {
    expect_context::<ShuffleContext>()
}
