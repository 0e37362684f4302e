use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::History;

#[component]
pub fn SearchesPage() -> Element {
    rsx! {
      div { class: "page page-searches",
        PageHeader {
          title: "Searches".to_string(),
          subtitle: "Recent public searches".to_string(),
          icon: Some(rsx! {
            History { class: "w-8 h-8" }
          }),
        }
      }
    }
}
