use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::AppHeader;

#[component]
pub fn StartView(on_start: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let player = ctx.player_name().to_string();

    rsx! {
        div { class: "page start",
            AppHeader { player }
            section { class: "start-prompt",
                h2 { "Are you ready?" }
                p {
                    "Click the button below"
                    br {}
                    "to begin"
                }
            }
            button { id: "start-button", onclick: move |_| on_start.call(()), "Start →" }
        }
    }
}
