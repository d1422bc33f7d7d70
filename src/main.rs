mod session;

use clap::Parser;
use session::{FieldSpec, Session, SessionError, run_keystrokes};
use std::io;
use std::path::PathBuf;

/// Drive a numeric input field from a script or from stdin.
///
/// Without `--session`, every line read from stdin is taken as the field's
/// full text after one keystroke.
#[derive(Debug, Parser)]
#[command(name = "numfield", version)]
struct Cli {
    /// TOML session file with a `[field]` table and `[[step]]` entries.
    #[arg(long, short)]
    session: Option<PathBuf>,

    /// Element type for stdin mode (text, number, password, ...).
    #[arg(long = "type", default_value = "text")]
    ty: String,

    /// Currency mode: digits only, grouped with thousands separators.
    #[arg(long)]
    currency: bool,

    /// Controlled value for stdin mode.
    #[arg(long)]
    value: Option<String>,

    /// Default value for stdin mode.
    #[arg(long)]
    default_value: Option<String>,
}

fn main() -> Result<(), SessionError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match &cli.session {
        Some(path) => Session::load(path).and_then(|s| s.run(&mut io::stdout().lock())),
        None => run_stdin(&cli),
    };
    if let Err(e) = &result {
        log::error!(target: "numfield", "{e}");
    }
    result
}

fn run_stdin(cli: &Cli) -> Result<(), SessionError> {
    let spec = FieldSpec {
        ty: Some(cli.ty.clone()),
        currency: cli.currency,
        value: cli.value.clone(),
        default_value: cli.default_value.clone(),
        ..FieldSpec::default()
    };
    run_keystrokes(&spec, io::stdin().lock(), &mut io::stdout().lock())
}
