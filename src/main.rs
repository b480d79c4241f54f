use clap::{Parser, Subcommand};
use lensmap::{config, manifest, output};
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
#[command(name = "lensmap")]
#[command(about = "Build an ID-to-URL manifest for image assets")]
#[command(long_about = "\
Build an ID-to-URL manifest for image assets

Walks a directory tree, finds image files, and writes manifest.json at the
scan root mapping a stable identifier to a public cache-busted URL:

  {
    \"photos-cat\": \"https://example.github.io/imagesWeb/photos/cat.jpg?v=1736164512\"
  }

Identifiers default to <parent-dir>-<file-stem>, slugged (files at the root
use \"root\" as the parent segment). A sidecar file <asset>.id pins a custom
identifier. Duplicate identifiers get -2, -3, … suffixes.

Configuration lives in lensmap.toml at the scan root (base URL, extensions,
skipped directories). Run 'lensmap gen-config' to print a documented stock
file.")]
#[command(version = version_string())]
struct Cli {
    /// Directory to scan (manifest.json is written here)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Override the configured base URL for this run
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the tree and write manifest.json
    Build,
    /// Scan and print the would-be manifest without writing anything
    Check,
    /// Print a stock lensmap.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = load_config(&cli)?;
            let manifest = manifest::build(&cli.root, &config)?;
            manifest.write(&cli.root)?;
            output::print_build_output(&manifest);
        }
        Command::Check => {
            let config = load_config(&cli)?;
            let manifest = manifest::build(&cli.root, &config)?;
            output::print_check_output(&manifest);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load lensmap.toml from the scan root, applying the --base-url override.
fn load_config(cli: &Cli) -> Result<config::BuildConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.root)?;
    if let Some(base) = &cli.base_url {
        config.base_url = base.trim_end_matches('/').to_string();
    }
    Ok(config)
}
