use clap::Parser;

use pathstore_repl::{logging, ConfigOverrides, ReplConfig, ReplError};

/// pathstore - interactive shell over a nested key/value store
#[derive(Parser, Debug)]
#[command(name = "pathstore")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Force vi editing mode
    #[arg(long, conflicts_with = "emacs")]
    vi: bool,

    /// Force emacs editing mode
    #[arg(long)]
    emacs: bool,

    /// Initial store contents, as a JSON object
    #[arg(long, value_name = "JSON")]
    seed: Option<String>,

    /// Log level when PATHSTORE_LOG is unset (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not read or write command history
    #[arg(long)]
    no_history: bool,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            vi: args.vi,
            emacs: args.emacs,
            seed: args.seed,
            log_level: args.log_level,
            no_history: args.no_history,
        }
    }
}

fn start(args: Args) -> Result<(), ReplError> {
    let config = ReplConfig::resolve(args.into())?;
    logging::init(&config.log_level)?;
    pathstore_repl::run(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = start(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
