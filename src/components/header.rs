use crate::libs::routes::Route;
use crate::utils::constants::APP_NAME_DISPLAY;
use dioxus::prelude::*;
use lucide_dioxus::{ BookOpen, Database, History, Info, Plus };

#[component]
pub fn Header() -> Element {
    rsx! {
      header { class: "header cell shrink",
        div { class: "top-bar",
          div { class: "top-bar-left",
            Link { class: "brand", to: Route::Home {}, "{APP_NAME_DISPLAY}" }
          }
          nav { class: "top-bar-right",
            ul { class: "menu",
              li {
                Link { to: Route::NewSearch {},
                  Plus { class: "w-4 h-4" }
                  "New Search"
                }
              }
              li {
                Link { to: Route::Searches {},
                  History { class: "w-4 h-4" }
                  "Searches"
                }
              }
              li {
                Link { to: Route::Repos {},
                  Database { class: "w-4 h-4" }
                  "Repos"
                }
              }
              li {
                Link { to: Route::About {},
                  Info { class: "w-4 h-4" }
                  "About"
                }
              }
              li {
                Link { to: Route::Examples {},
                  BookOpen { class: "w-4 h-4" }
                  "Examples"
                }
              }
            }
          }
        }
      }
    }
}
