use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::FileSearch;

/// Single search result. The id is shown as received from the URL.
#[component]
pub fn SearchPage(id: String) -> Element {
    rsx! {
      div { class: "page page-search", "data-search-id": "{id}",
        PageHeader {
          title: "Search".to_string(),
          subtitle: format!("Search #{}", id),
          icon: Some(rsx! {
            FileSearch { class: "w-8 h-8" }
          }),
        }
      }
    }
}
