use crate::components::ui::PageHeader;
use crate::libs::routes::Route;
use dioxus::prelude::*;
use lucide_dioxus::Compass;

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
      div { class: "page page-not-found",
        PageHeader {
          title: "Page Not Found".to_string(),
          subtitle: format!("Nothing lives at {}", path),
          icon: Some(rsx! {
            Compass { class: "w-8 h-8" }
          }),
        }
        Link { to: Route::Home {}, "Back to search" }
      }
    }
}
