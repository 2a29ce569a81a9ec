use brainteaser_core::model::QuizOutcome;

/// The screen currently on display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Splash,
    Start,
    Quiz,
    Score(QuizOutcome),
}

/// Things that move the app between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    SplashElapsed,
    StartPressed,
    QuizCompleted(QuizOutcome),
    HomePressed,
}

impl Screen {
    /// Next screen after `event`. Events that do not apply leave the screen unchanged.
    #[must_use]
    pub fn on(self, event: NavEvent) -> Self {
        match (self, event) {
            (Screen::Splash, NavEvent::SplashElapsed) => Screen::Start,
            (Screen::Start, NavEvent::StartPressed) => Screen::Quiz,
            (Screen::Quiz, NavEvent::QuizCompleted(outcome)) => Screen::Score(outcome),
            (Screen::Score(_), NavEvent::HomePressed) => Screen::Start,
            (current, _) => current,
        }
    }
}
