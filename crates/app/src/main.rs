use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use brainteaser_core::model::{PoolError, QuestionPool};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to read question file {}: {source}", path.display())]
    ReadQuestions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question file {}: {source}", path.display())]
    InvalidQuestions {
        path: PathBuf,
        #[source]
        source: PoolError,
    },
}

#[derive(Parser, Debug)]
#[command(author, version, about = "True/false brain teaser quiz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    ui: UiArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct UiArgs {
    /// Name shown in the screen header.
    #[arg(long, env = "BRAINTEASER_PLAYER", default_value = "Player")]
    player: String,

    /// JSON file with the question pool. Uses the built-in questions when omitted.
    #[arg(long, env = "BRAINTEASER_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Seed for a repeatable question order.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Check a question file without launching the window.
    Validate {
        /// Path to the JSON question pool.
        path: PathBuf,
    },
}

struct DesktopApp {
    player: String,
    pool: QuestionPool,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn player_name(&self) -> String {
        self.player.clone()
    }

    fn question_pool(&self) -> QuestionPool {
        self.pool.clone()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }
}

fn load_pool(path: Option<&Path>) -> Result<QuestionPool, AppError> {
    let Some(path) = path else {
        return Ok(QuestionPool::builtin());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::ReadQuestions {
        path: path.to_path_buf(),
        source,
    })?;
    QuestionPool::from_json(&raw).map_err(|source| AppError::InvalidQuestions {
        path: path.to_path_buf(),
        source,
    })
}

fn run_validate(path: &Path) -> Result<(), AppError> {
    let pool = load_pool(Some(path))?;
    tracing::info!(path = %path.display(), questions = pool.len(), "question file is valid");
    println!("{}: {} questions", path.display(), pool.len());
    Ok(())
}

fn run_ui(args: UiArgs) -> Result<(), AppError> {
    let pool = load_pool(args.questions.as_deref())?;
    tracing::info!(
        player = %args.player,
        questions = pool.len(),
        seed = ?args.seed,
        "launching desktop ui"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        player: args.player,
        pool,
        seed: args.seed,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Brain Teaser")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate { path }) => run_validate(&path),
        None => run_ui(cli.ui),
    };

    if let Err(err) = result {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("brainteaser-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn no_subcommand_launches_ui_with_options() {
        let cli = Cli::try_parse_from(["app", "--player", "Ada", "--seed", "9"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.ui.player, "Ada");
        assert_eq!(cli.ui.seed, Some(9));
    }

    #[test]
    fn validate_subcommand_takes_path() {
        let cli = Cli::try_parse_from(["app", "validate", "pool.json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Validate {
                path: PathBuf::from("pool.json")
            })
        );
    }

    #[test]
    fn missing_path_uses_builtin_pool() {
        let pool = load_pool(None).unwrap();
        assert_eq!(pool, QuestionPool::builtin());
    }

    #[test]
    fn pool_file_is_loaded() {
        let path = temp_file(
            "valid.json",
            r#"[{ "prompt": "Is ice cold?", "image": "ice", "answer": true }]"#,
        );
        let pool = load_pool(Some(&path)).unwrap();
        assert_eq!(pool.len(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_pool_file_is_rejected() {
        let path = temp_file("empty.json", "[]");
        let err = load_pool(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidQuestions {
                source: PoolError::Empty,
                ..
            }
        ));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unreadable_pool_file_is_reported() {
        let path = std::env::temp_dir().join("brainteaser-does-not-exist.json");
        let err = load_pool(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::ReadQuestions { .. }));
    }
}
