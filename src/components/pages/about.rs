use crate::components::ui::PageHeader;
use dioxus::prelude::*;
use lucide_dioxus::Info;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
      div { class: "page page-about",
        PageHeader {
          title: "About".to_string(),
          icon: Some(rsx! {
            Info { class: "w-8 h-8" }
          }),
        }
      }
    }
}
