use crate::utils::constants::{ DREAMHOST_BADGE_URL, DREAMHOST_URL };
use dioxus::prelude::*;

/// Sponsor badge linking to DreamHost
#[component]
pub fn DreamHostLink(#[props(default = 16)] height: u32, #[props(default = 120)] width: u32) -> Element {
    rsx! {
      a {
        class: "dreamhost-link",
        href: DREAMHOST_URL,
        target: "_blank",
        rel: "noopener noreferrer",
        img {
          src: DREAMHOST_BADGE_URL,
          alt: "DreamHost",
          height: "{height}",
          width: "{width}",
        }
      }
    }
}
