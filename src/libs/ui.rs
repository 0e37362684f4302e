use crate::libs::routes::Route;
use crate::state::config::AppConfig;
use crate::debug_print;

use dioxus::prelude::*;

pub fn app() -> Element {
    // Provide the API/build config to every component below the router
    let config = use_context_provider(AppConfig::load);
    debug_print!("🔧 API base: {}", config.api_url);

    rsx! {
        document::Title { "WP Directory" }
        Router::<Route> {}
    }
}
