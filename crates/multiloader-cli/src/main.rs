//! multiloader-create - Project scaffolding for multi-loader Minecraft mods

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use multiloader_core::{CreateArgs, FetchPolicy, HttpFetcher, Platform, RawParameters, ReferenceData, Sources};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "multiloader-create")]
#[command(about = "CLI for scaffolding multi-loader Minecraft mod projects")]
#[command(version)]
pub struct Args {
    /// YAML file with project parameters (used as prompt defaults)
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Directory the project archive is written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Loader platforms to generate (comma-separated: fabric,forge,neoforge)
    #[arg(long, value_delimiter = ',')]
    pub platforms: Option<Vec<Platform>>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Timeout for a single download, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retries for failed downloads
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn create_args(&self) -> Result<CreateArgs> {
        let params = match &self.params {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                RawParameters::from_yaml(&content)
                    .with_context(|| format!("Failed to parse parameters in {}", path.display()))?
            }
            None => RawParameters::default(),
        };

        Ok(CreateArgs {
            params,
            platforms: self.platforms.clone(),
            output: self.output.clone(),
            yes: self.yes,
        })
    }

    fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn create(args: &Args) -> Result<()> {
    let create_args = args.create_args()?;
    let sources = Sources::from_env().context("Invalid source URL override")?;
    let policy = args.fetch_policy();
    tracing::debug!(?policy, params = ?args.params, "starting");

    let fetcher = HttpFetcher::new(&format!("multiloader-create/{}", CLI_VERSION), policy);
    let reference = ReferenceData::new(fetcher, sources);

    multiloader_core::run(create_args, &reference, CLI_VERSION).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let result = create(&args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
