use anyhow::Result;
use ghscope::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // The dashboard owns the terminal; logging there is opt-in through RUST_LOG.
    let quiet = matches!(cli.command, Commands::Dashboard { .. });
    init_tracing(cli.common.verbose, quiet);
    cli.execute()
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "warn,ghscope=info",
        (false, _) => "warn,ghscope=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
