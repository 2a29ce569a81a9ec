use dioxus::prelude::*;

use brainteaser_core::model::QuizOutcome;

use crate::nav::{NavEvent, Screen};
use crate::views::{QuizView, ScoreView, SplashView, StartView};

fn navigate(mut screen: Signal<Screen>, event: NavEvent) {
    let current = *screen.peek();
    let next = current.on(event);
    if next != current {
        tracing::debug!(from = ?current, to = ?next, "navigate");
        screen.set(next);
    }
}

fn close_window() {
    tracing::info!("exit requested");
    dioxus::desktop::window().close();
}

#[component]
pub fn App() -> Element {
    let screen = use_signal(Screen::default);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Brain Teaser" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                match screen() {
                    Screen::Splash => rsx! {
                        SplashView { on_timeout: move |_| navigate(screen, NavEvent::SplashElapsed) }
                    },
                    Screen::Start => rsx! {
                        StartView { on_start: move |_| navigate(screen, NavEvent::StartPressed) }
                    },
                    Screen::Quiz => rsx! {
                        QuizView {
                            on_complete: move |outcome: QuizOutcome| navigate(screen, NavEvent::QuizCompleted(outcome)),
                        }
                    },
                    Screen::Score(outcome) => rsx! {
                        ScoreView {
                            outcome,
                            on_home: move |_| navigate(screen, NavEvent::HomePressed),
                            on_exit: move |_| close_window(),
                        }
                    },
                }
            }
        }
    }
}
