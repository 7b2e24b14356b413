mod commands;
mod helpers;

use anchor_core::ShowerError;
use clap::Parser;
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let shower_error = error.as_shower_error();
            eprintln!("{}", shower_error.diagnostic_line());
            eprintln!("{}", shower_error.fatal_exit_line());
            shower_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("anchor".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => dispatch_parsed(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "anchor",
    version,
    about = "Cosmic-ray air shower task generator for AIRES/ZHAireS"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Args)]
struct GlobalArgs {
    /// JSON install layout configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Install root holding defaults/ and aires/
    #[arg(long, global = true)]
    install_root: Option<PathBuf>,

    /// Directory under which task directories are created
    #[arg(long, global = true)]
    run_root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Create a ground-incident shower task
    Direct(commands::DirectArgs),
    /// Create a shower task reflected off the surface before detection
    Reflected(commands::ReflectedArgs),
    /// Create an upward-going stratospheric shower task using RASPASS primaries
    Stratospheric(commands::StratosphericArgs),
    /// Print the effective install layout as JSON
    ShowLayout,
}

fn dispatch_parsed(cli: Cli) -> Result<i32, CliError> {
    helpers::init_tracing(cli.global.verbose);
    let layout = helpers::resolve_layout(&cli.global)?;

    match cli.command {
        CliCommand::Direct(args) => commands::run_direct_command(&layout, args),
        CliCommand::Reflected(args) => commands::run_reflected_command(&layout, args),
        CliCommand::Stratospheric(args) => commands::run_stratospheric_command(&layout, args),
        CliCommand::ShowLayout => commands::run_show_layout_command(&layout),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Shower(ShowerError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ShowerError> for CliError {
    fn from(error: ShowerError) -> Self {
        Self::Shower(error)
    }
}

impl CliError {
    fn as_shower_error(&self) -> ShowerError {
        match self {
            Self::Usage(message) => {
                ShowerError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Shower(error) => error.clone(),
            Self::Internal(error) => ShowerError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
