use dioxus::prelude::*;

use brainteaser_core::model::QuizOutcome;

use crate::context::AppContext;
use crate::views::AppHeader;
use crate::vm::ScoreVm;

#[component]
pub fn ScoreView(
    outcome: QuizOutcome,
    on_home: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let player = ctx.player_name().to_string();
    let vm = ScoreVm::from(outcome);

    rsx! {
        div { class: "page score",
            AppHeader { player }

            div { class: "score-circle {vm.accent_class}",
                p { class: "score-value", "{vm.score_label}" }
                p { "your score" }
            }

            div { class: "progress {vm.accent_class}",
                div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
            }

            p { class: "status {vm.accent_class}", "{vm.status_message}" }

            button { id: "score-exit", onclick: move |_| on_exit.call(()), "Exit →" }

            if vm.passed {
                div { class: "congratulations", "😊 Congratulations" }
            }

            section { class: "score-footer",
                p { "Want to try more questions?" }
                p { "Click below....." }
                button { id: "score-home", onclick: move |_| on_home.call(()), "Home →" }
            }
        }
    }
}
