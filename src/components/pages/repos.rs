use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::Database;

#[component]
pub fn ReposPage() -> Element {
    rsx! {
      div { class: "page page-repos",
        PageHeader {
          title: "Repositories".to_string(),
          subtitle: "Plugin and theme directories indexed by wpdir".to_string(),
          icon: Some(rsx! {
            Database { class: "w-8 h-8" }
          }),
        }
      }
    }
}
