use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::ProfessionId;
use services::{HttpQuizApi, QuizApiConfig, QuizLoopService};
use tracing_subscriber::{EnvFilter, Registry, fmt as log_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidProfessionId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidProfessionId { raw } => {
                write!(f, "invalid --profession value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    default_profession: Option<ProfessionId>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn default_profession(&self) -> Option<ProfessionId> {
        self.default_profession
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

struct Args {
    server_url: Option<String>,
    profession: Option<ProfessionId>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server <url>] [--profession <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server {}", QuizApiConfig::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SERVER_URL, QUIZ_PROFESSION_ID, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server_url = None;
        let mut profession = std::env::var("QUIZ_PROFESSION_ID")
            .ok()
            .and_then(|value| value.parse::<ProfessionId>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => server_url = Some(require_value(args, "--server")?),
                "--profession" => {
                    let value = require_value(args, "--profession")?;
                    let parsed = value
                        .parse::<ProfessionId>()
                        .map_err(|_| ArgsError::InvalidProfessionId { raw: value.clone() })?;
                    profession = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            server_url,
            profession,
        })
    }
}

/// Install a stdout subscriber filtered by `RUST_LOG`.
fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(log_fmt::layer().with_writer(std::io::stdout));
    tracing::subscriber::set_global_default(subscriber)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // An explicit --server wins over QUIZ_SERVER_URL.
    let config = match parsed.server_url {
        Some(raw) => QuizApiConfig::new(&raw)?,
        None => QuizApiConfig::from_env()?,
    };
    tracing::info!(server = %config.base_url(), "using quiz server");

    let api = HttpQuizApi::new(config)?;
    let quiz_loop = Arc::new(QuizLoopService::new(Arc::new(api)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        default_profession: parsed.profession,
        quiz_loop,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Exam Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
