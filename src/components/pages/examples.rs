use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::BookOpen;

#[component]
pub fn ExamplesPage() -> Element {
    rsx! {
      div { class: "page page-examples",
        PageHeader {
          title: "Examples".to_string(),
          subtitle: "Example search patterns".to_string(),
          icon: Some(rsx! {
            BookOpen { class: "w-8 h-8" }
          }),
        }
      }
    }
}
