use brainteaser_core::model::{Question, QuestionPool, QuizOutcome};

use super::test_harness::{ViewKind, render_view};

fn single_question_pool() -> QuestionPool {
    let question = Question::new("Do penguins fly?", "q3", false).unwrap();
    QuestionPool::new(vec![question]).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn splash_view_smoke_renders_title() {
    let html = render_view(ViewKind::Splash, QuestionPool::builtin());
    assert!(html.contains("Brain Teaser"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_greeting_and_button() {
    let html = render_view(ViewKind::Start, QuestionPool::builtin());
    assert!(html.contains("Hello, Tester"), "missing greeting in {html}");
    assert!(html.contains("Test how smart you are"), "missing tagline in {html}");
    assert!(html.contains("Are you ready?"), "missing prompt in {html}");
    assert!(html.contains("Start →"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let html = render_view(ViewKind::Quiz, single_question_pool());
    assert!(html.contains("Do penguins fly?"), "missing prompt in {html}");
    assert!(html.contains("images/q3.png"), "missing image in {html}");
    assert!(html.contains("Question 1 of 1"), "missing count in {html}");
    assert!(html.contains("Time Left:"), "missing timer label in {html}");
    assert!(html.contains("00:05"), "missing countdown in {html}");
    assert!(html.contains("True"), "missing true button in {html}");
    assert!(html.contains("False"), "missing false button in {html}");
    assert!(
        !html.contains("Ready for the next challenge?"),
        "feedback shown before answering in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn score_view_smoke_renders_pass() {
    let html = render_view(ViewKind::Score(QuizOutcome::new(4, 5)), QuestionPool::builtin());
    assert!(html.contains("4/5"), "missing score in {html}");
    assert!(html.contains("your score"), "missing label in {html}");
    assert!(html.contains("You have passed"), "missing pass message in {html}");
    assert!(html.contains("Congratulations"), "missing congratulations in {html}");
    assert!(html.contains("Home →"), "missing home button in {html}");
    assert!(html.contains("Exit →"), "missing exit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn score_view_smoke_renders_fail() {
    let html = render_view(ViewKind::Score(QuizOutcome::new(2, 5)), QuestionPool::builtin());
    assert!(html.contains("2/5"), "missing score in {html}");
    assert!(html.contains("Better luck next time!"), "missing fail message in {html}");
    assert!(!html.contains("Congratulations"), "unexpected congratulations in {html}");
}
