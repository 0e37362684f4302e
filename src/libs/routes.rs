use dioxus::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Route table for the whole app. Unmatched paths fall through to `NotFound`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)] #[route("/")] Home {},
    #[route("/searches")] Searches {},
    #[route("/search/new", Home)] NewSearch {},
    #[route("/search/:id")] Search { id: String },
    #[route("/repos")] Repos {},
    #[route("/about")] About {},
    #[route("/examples")] Examples {},
    #[route("/:..segments")] NotFound { segments: Vec<String> },
}

#[component]
pub fn Layout() -> Element {
    rsx! {
      div { class: "app grid-y medium-grid-frame",
        Header {}

        section { class: "content cell medium-auto medium-cell-block-container",
          // Outlet for nested routes
          Outlet::<Route> {}
        }

        Footer {}
      }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
      crate::components::pages::HomePage {}
    }
}

#[component]
pub fn Searches() -> Element {
    rsx! {
      crate::components::pages::SearchesPage {}
    }
}

#[component]
pub fn Search(id: String) -> Element {
    rsx! {
      crate::components::pages::SearchPage { id }
    }
}

#[component]
pub fn Repos() -> Element {
    rsx! {
      crate::components::pages::ReposPage {}
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
      crate::components::pages::AboutPage {}
    }
}

#[component]
pub fn Examples() -> Element {
    rsx! {
      crate::components::pages::ExamplesPage {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
      crate::components::pages::NotFoundPage { path }
    }
}
