//! Name Shuffle
//!
//! Keep a list of names in the browser and pick one at random, with a
//! light/dark/system theme that survives reloads.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod entries;
pub mod models;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod theme;
pub mod url_sync;
