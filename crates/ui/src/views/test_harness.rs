use std::sync::Arc;

use dioxus::prelude::*;

use brainteaser_core::model::{QuestionPool, QuizOutcome};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{QuizView, ScoreView, SplashView, StartView};

struct TestApp {
    pool: QuestionPool,
}

impl UiApp for TestApp {
    fn player_name(&self) -> String {
        "Tester".into()
    }

    fn question_pool(&self) -> QuestionPool {
        self.pool.clone()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(1)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Splash,
    Start,
    Quiz,
    Score(QuizOutcome),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    match props.view {
        ViewKind::Splash => rsx! { SplashView { on_timeout: |_| {} } },
        ViewKind::Start => rsx! { StartView { on_start: |_| {} } },
        ViewKind::Quiz => rsx! { QuizView { on_complete: |_| {} } },
        ViewKind::Score(outcome) => rsx! {
            ScoreView { outcome, on_home: |_| {}, on_exit: |_| {} }
        },
    }
}

pub fn render_view(view: ViewKind, pool: QuestionPool) -> String {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { pool });
    let ctx = build_app_context(&app);
    let mut dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { ctx, view });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
