mod header;
mod quiz;
mod score;
mod splash;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use header::AppHeader;
pub use quiz::QuizView;
pub use score::ScoreView;
pub use splash::{SPLASH_DURATION, SplashView};
pub use start::StartView;
