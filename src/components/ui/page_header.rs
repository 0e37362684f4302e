use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
    #[props(optional)]
    pub icon: Option<Element>,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
      div { class: "page-header grid-x align-middle",
        if let Some(icon) = props.icon {
          div { class: "page-header-icon cell shrink",
            {icon}
          }
        }
        div { class: "cell auto",
          h1 { class: "page-title", "{props.title}" }
          if let Some(subtitle) = props.subtitle {
            p { class: "page-subtitle", "{subtitle}" }
          }
        }
      }
    }
}
