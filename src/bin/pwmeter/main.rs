use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

mod interactive;
mod meter;
mod select;
mod table;

#[derive(Parser)]
#[command(about = "Score and generate passwords")]
struct Args {
    /// Config file. Defaults to `$HOME/.pwmeter.yaml`, if it exists.
    #[arg(long, global = true, env = "PWMETER_CONFIG")]
    config: Option<PathBuf>,
    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Prompt for a password (without echoing it) and show how strong it is.
    Check {
        /// Print the assessment as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate random passwords and show how strong each one is.
    #[command(alias = "gen")]
    Generate {
        /// Override the configured password length.
        #[arg(long)]
        length: Option<usize>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Fill in a password form interactively.
    Form,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config)?;
    match args.command {
        Command::Check { json } => meter::check(json)?,
        Command::Generate { length, count } => meter::generate(&config, length, count)?,
        Command::Form => interactive::run_form(&config)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Cancelled) => process::exit(130),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<pwmeter::Config, ProgError> {
    match path {
        Some(p) => Ok(pwmeter::Config::load(&p)?),
        None => match default_config_path() {
            Some(p) => Ok(pwmeter::Config::load_or_default(&p)?),
            None => {
                log::warn!("HOME is not set; using the default configuration");
                Ok(pwmeter::Config::default())
            }
        },
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".pwmeter.yaml");
    Some(p)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Cancelled; exiting.")]
    Cancelled,
    #[error("The password count must be at least 1.")]
    ZeroCount,
    #[error(transparent)]
    Pwmeter(#[from] pwmeter::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
