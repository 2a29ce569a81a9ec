use dioxus::prelude::*;

use brainteaser_core::model::QuizOutcome;
use services::{QuizHandle, QuizRunner};

use crate::context::AppContext;
use crate::views::AppHeader;
use crate::vm::QuizVm;

fn submit(handle: &QuizHandle, choice: bool) {
    if let Err(err) = handle.submit_answer(choice) {
        tracing::warn!(%err, choice, "answer not delivered");
    }
}

fn advance(handle: &QuizHandle) {
    if let Err(err) = handle.advance() {
        tracing::warn!(%err, "advance not delivered");
    }
}

#[component]
pub fn QuizView(on_complete: EventHandler<QuizOutcome>) -> Element {
    let ctx = use_context::<AppContext>();
    let player = ctx.player_name().to_string();

    // One runner per mount. Its task, and with it the countdown, is dropped
    // together with this component.
    let handle = use_hook(|| {
        let (handle, runner) = QuizRunner::new(ctx.next_question_set(), ctx.runner_config());
        spawn(async move {
            let _ = runner.run().await;
        });
        handle
    });

    let snapshot = use_signal(|| handle.snapshot());

    use_future({
        let handle = handle.clone();
        move || {
            let mut handle = handle.clone();
            let mut snapshot = snapshot;
            async move {
                while let Ok(next) = handle.changed().await {
                    let outcome = next.outcome;
                    snapshot.set(next);
                    if let Some(outcome) = outcome {
                        on_complete.call(outcome);
                        break;
                    }
                }
            }
        }
    });

    let vm = QuizVm::from(&*snapshot.read());
    let on_true = {
        let handle = handle.clone();
        move |_: MouseEvent| submit(&handle, true)
    };
    let on_false = {
        let handle = handle.clone();
        move |_: MouseEvent| submit(&handle, false)
    };
    let on_next = {
        let handle = handle.clone();
        move |_: MouseEvent| advance(&handle)
    };

    rsx! {
        div { class: "page quiz",
            AppHeader { player }

            figure { class: "question",
                img { class: "question-image", src: "images/{vm.image}.png", alt: "" }
                figcaption { class: "question-text", "{vm.prompt}" }
            }

            div { class: "progress",
                div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
            }
            p { class: "question-count", "Question {vm.question_number} of {vm.total}" }

            div { class: "timer",
                span { class: "label", "Time Left:" }
                span { class: "value", "{vm.timer_label}" }
            }

            div { class: "answers",
                button {
                    id: "answer-true",
                    disabled: !vm.answers_enabled,
                    onclick: on_true,
                    "True"
                }
                button {
                    id: "answer-false",
                    disabled: !vm.answers_enabled,
                    onclick: on_false,
                    "False"
                }
            }

            if let Some(feedback) = vm.feedback {
                section { class: "feedback",
                    div { class: feedback.class(), {feedback.label()} }
                    p { "Ready for the next challenge?" }
                    button { id: "next-question", onclick: on_next, "{vm.next_label}" }
                }
            }
        }
    }
}
