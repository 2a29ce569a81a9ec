use std::time::Duration;

use dioxus::prelude::*;

/// How long the splash screen stays up.
pub const SPLASH_DURATION: Duration = Duration::from_secs(6);

#[component]
pub fn SplashView(on_timeout: EventHandler<()>) -> Element {
    use_future(move || async move {
        tokio::time::sleep(SPLASH_DURATION).await;
        on_timeout.call(());
    });

    rsx! {
        div { class: "page splash",
            h1 { "Brain Teaser" }
            p { "Loading..." }
        }
    }
}
