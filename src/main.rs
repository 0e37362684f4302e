#![allow(non_snake_case)]

mod components;
mod libs;
mod state;
mod utils;

#[cfg(test)]
#[path = "../build_support.rs"]
mod build_support;

use dioxus::prelude::*;
use libs::ui;
use utils::constants::{ APP_NAME, APP_VERSION };

#[cfg(feature = "desktop")]
fn launch_desktop() {
    use dioxus::desktop::{ Config, LogicalSize, WindowBuilder };
    use utils::constants::APP_NAME_DISPLAY;

    let window_width = 1200;
    let window_height = 820;
    let min_width = 480;
    let min_height = 600;

    let window_builder = WindowBuilder::default()
        .with_title(APP_NAME_DISPLAY)
        .with_inner_size(LogicalSize::new(window_width, window_height))
        .with_min_inner_size(LogicalSize::new(min_width, min_height))
        .with_resizable(true);

    let config = Config::new().with_window(window_builder).with_menu(None);

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app_with_stylesheets)
}

fn main() {
    utils::logger::init_logging();

    always_print!("🚀 Initializing {} v{}...", APP_NAME, APP_VERSION);

    #[cfg(feature = "desktop")]
    launch_desktop();

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app_with_stylesheets);
}

fn app_with_stylesheets() -> Element {
    rsx! {
        ui::app {}
    }
}
