use clap::{Parser, Subcommand};
use simple_roster::{config, generate, output, roster};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-roster")]
#[command(about = "Static site generator for club member rosters")]
#[command(long_about = "\
Static site generator for club member rosters

A spreadsheet export is the data source. Each row becomes a member profile
page, the table becomes a searchable directory page with an optional
access-code gate, and every member gets a QR code image encoding the public
URL of their profile.

Output structure:

  site/
  ├── members/
  │   ├── index.html         # Directory: search, dues filter, access gate
  │   └── <slug>.html        # One profile page per member
  └── qrs/
      └── <slug>.png         # QR code per member

Configuration comes from roster.toml plus environment overrides:

  ROSTER_CSV_URL        CSV export URL or local path (required)
  ROSTER_ACCESS_CODE    directory gate code (optional; hashed at build time)
  ROSTER_SHEET_LINK     'Open the sheet' button target (optional)

Run 'simple-roster gen-config' to generate a documented roster.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, default_value = "roster.toml", global = true)]
    config: PathBuf,

    /// Output directory for the generated site
    #[arg(long, default_value = "site", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Print the normalized roster as JSON instead of the summary view
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: fetch, normalize, render, write, sweep
    Build,
    /// Fetch and normalize the roster without writing any output
    Check(CheckArgs),
    /// Print a stock roster.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Build => {
            let config = load_config(&cli.config)?;
            let roster = roster::load(&config)?;
            let stats = generate::generate(&roster, &config, &cli.output)?;
            output::print_build_output(&roster, &stats, &config.output);
        }
        Command::Check(args) => {
            let config = load_config(&cli.config)?;
            let roster = roster::load(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                output::print_check_output(&roster);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and overlay environment-provided secrets.
fn load_config(path: &std::path::Path) -> Result<config::SiteConfig, config::ConfigError> {
    let mut config = config::load_config(path)?;
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}
