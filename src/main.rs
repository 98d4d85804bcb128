//! Name Shuffle Frontend Entry Point

use leptos::prelude::*;
use name_shuffle::app::App;
use name_shuffle::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if console_log::init_with_level(config.log_level).is_err() {
        log::warn!("logger already initialised");
    }
    log::info!("[APP] starting name-shuffle {}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <App config=config /> });
}
