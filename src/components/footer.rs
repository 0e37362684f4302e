use crate::components::dreamhost_link::DreamHostLink;
use crate::libs::api::ApiClient;
use crate::state::config::{ AppConfig, BuildInfo };
use crate::state::last_updated::{ load_last_updated, LastUpdated };
use crate::utils::constants::{ APP_NAME, AUTHOR_NAME, AUTHOR_URL, REPO_URL };
use dioxus::prelude::*;

const SEPARATOR: &str = "\u{a0}-\u{a0}";

/// Attribution line plus the "Last Updated" time of the repository index
#[component]
pub fn Footer() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_hook(|| ApiClient::new(config.clone()));

    // Starts as Loading and is written exactly once by the mount task.
    // The task lives in this scope, so it is dropped if the footer unmounts first.
    let mut last_updated = use_signal(LastUpdated::default);

    use_future(move || {
        let client = client.clone();
        async move {
            let resolved = load_last_updated(&client).await;
            last_updated.set(resolved);
        }
    });

    rsx! {
      FooterInfo { state: last_updated(), build_info: config.build.clone() }
    }
}

/// Static rendering of the footer for a given state
#[component]
pub fn FooterInfo(state: LastUpdated, build_info: BuildInfo) -> Element {
    let build = build_info;
    let loading = state.is_loading();
    let view = state.view(chrono::Utc::now());
    let version_tooltip = build.tooltip();

    rsx! {
      footer { class: "footer cell shrink", "data-loading": "{loading}",
        div { class: "info",
          span {
            "Made with Love, Go and Rust by "
            a { href: AUTHOR_URL, target: "_blank", rel: "noopener noreferrer", "{AUTHOR_NAME}" }
          }
          "{SEPARATOR}"
          span {
            "Powered by "
            DreamHostLink { height: 16, width: 120 }
          }
          "{SEPARATOR}"
          span {
            a {
              href: REPO_URL,
              target: "_blank",
              rel: "noopener noreferrer",
              title: "{version_tooltip}",
              "{APP_NAME} {build.version}"
            }
          }
          if let Some(view) = view {
            "{SEPARATOR}"
            span { class: "last-updated", title: "{view.raw}", "Last Updated: {view.phrase}" }
          }
        }
      }
    }
}
