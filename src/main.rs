use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use simpver::cli::{run_release, ReleaseOptions};
use simpver::config::{self, Environment};
use simpver::github::GitHubClient;
use simpver::ui;

#[derive(clap::Parser)]
#[command(
    name = "simpver",
    version,
    about = "Tag the default branch head with the next vMAJOR.MINOR version after a PR merges"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "File to write the new version to (default: .version)")]
    output: Option<PathBuf>,

    #[arg(long, help = "Compute the next tag without creating it or writing the file")]
    dry_run: bool,

    #[arg(short, long, help = "Log remote calls and decisions to stderr")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Fails before any network call when a variable is missing
    let env = Environment::from_env()?;
    debug!(?env, "Loaded environment");

    let config = config::load_config(args.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    let client = GitHubClient::new(&env)?;
    let options = ReleaseOptions {
        artifact: args.output,
        dry_run: args.dry_run,
    };

    let outcome = run_release(&client, &config, &options)?;
    if let Some(path) = &outcome.artifact {
        ui::display_success(&format!(
            "Tagged {} as {} and wrote {}",
            &outcome.sha[..outcome.sha.len().min(7)],
            outcome.new_tag,
            path.display()
        ));
    }

    Ok(())
}
