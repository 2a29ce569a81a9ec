use dioxus::prelude::*;

#[component]
pub fn AppHeader(player: String) -> Element {
    rsx! {
        header { class: "header",
            p { class: "greeting", "Hello, {player} 👋" }
            p { class: "tagline", "Test how smart you are" }
        }
    }
}
