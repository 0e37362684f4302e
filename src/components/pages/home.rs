use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::Search;

/// Landing page, also served for starting a new search
#[component]
pub fn HomePage() -> Element {
    rsx! {
      div { class: "page page-home",
        PageHeader {
          title: "New Search".to_string(),
          subtitle: "Search the code of every WordPress plugin and theme".to_string(),
          icon: Some(rsx! {
            Search { class: "w-8 h-8" }
          }),
        }
      }
    }
}
