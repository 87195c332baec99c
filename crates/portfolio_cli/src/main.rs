//! Terminal rendering surface for the portfolio core.
//!
//! # Responsibility
//! - Turn CLI flags into a selection and print the resulting page as text.
//! - Surface catalog authoring hazards on request.
//!
//! # Invariants
//! - An empty result is a normal outcome and exits with success.
//! - Only configuration problems (catalog file, logging) exit with failure.

use clap::Parser;
use log::warn;
use portfolio_core::{
    default_log_level, init_logging, Catalog, CatalogError, PortfolioService, PortfolioView,
    Selection, ALL_CATEGORIES,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Browse the project portfolio")]
struct Cli {
    /// Category label to show (`All` shows every category).
    #[arg(long, default_value = ALL_CATEGORIES)]
    category: String,

    /// Case-insensitive text matched against titles, tags and descriptions.
    #[arg(long, default_value = "")]
    query: String,

    /// JSON catalog file to use instead of the built-in projects.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Print the selectable categories and exit.
    #[arg(long)]
    list_categories: bool,

    /// Print catalog authoring problems and exit.
    #[arg(long)]
    audit: bool,

    /// Log level (trace|debug|info|warn|error). Needs `--log-dir`.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,
}

/// Configuration or output failure that ends the run with a non-zero code.
#[derive(Debug)]
enum CliError {
    Logging(String),
    Catalog(CatalogError),
    Output(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Catalog(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one invocation, writing the page or listing to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let catalog = match cli.catalog.as_ref() {
        Some(path) => Catalog::load_json_file(path)?,
        None => Catalog::builtin(),
    };

    let findings = catalog.audit();
    for finding in &findings {
        warn!("event=catalog_audit module=cli status=warn finding=\"{finding}\"");
    }

    if cli.audit {
        if findings.is_empty() {
            writeln!(out, "catalog ok: {} projects", catalog.len())?;
        }
        for finding in &findings {
            writeln!(out, "{finding}")?;
        }
        return Ok(());
    }

    if cli.list_categories {
        for label in catalog.categories().labels() {
            writeln!(out, "{label}")?;
        }
        return Ok(());
    }

    let selection = Selection::default()
        .with_category(cli.category)
        .with_query(cli.query);
    let view = PortfolioService::new(catalog).render(&selection);
    out.write_all(render_text(&view).as_bytes())?;
    Ok(())
}

fn render_text(view: &PortfolioView) -> String {
    let mut out = String::new();

    let controls = view
        .controls
        .iter()
        .map(|control| {
            if control.active {
                format!("[*] {}", control.label)
            } else {
                format!("[ ] {}", control.label)
            }
        })
        .collect::<Vec<_>>();
    out.push_str(&controls.join("  "));
    out.push_str("\n\n");

    if let Some(message) = view.empty_state {
        out.push_str(message);
        out.push('\n');
        return out;
    }

    for card in &view.cards {
        out.push_str(&format!("{}\n  {}\n", card.title, card.subtitle));
        for bullet in &card.bullets {
            out.push_str(&format!("  - {bullet}\n"));
        }
        if !card.tags.is_empty() {
            out.push_str(&format!("  tags: {}\n", card.tags.join(", ")));
        }
        for link in &card.links {
            out.push_str(&format!("  {}: {}\n", link.label, link.target));
        }
        out.push('\n');
    }
    out
}
