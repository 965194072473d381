//! shadekit CLI
//!
//! Renders widgets to HTML with declarative shadow roots and exposes the
//! formatting helpers from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Render one widget
//! shadekit render ui-button -a variant=secondary --content "Save"
//!
//! # Write the showcase page
//! shadekit gallery -o gallery.html
//!
//! # Relative time for a timestamp
//! shadekit time-ago 2024-05-01T12:00:00Z --style compact
//!
//! # Initials for a display name
//! shadekit initials "Ada Lovelace"
//!
//! # Show what the renderer did
//! shadekit --show-logs render ui-toggle -a checked
//!
//! # Create or inspect configuration
//! shadekit config init
//! shadekit config show
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shadekit::config::Config;
use shadekit::logger::Logger;
use shadekit::ui::{gallery, Document};
use shadekit::utils::datetime::{format_time_ago, TimeStyle};
use shadekit::utils::initials::initials;

#[derive(Parser)]
#[command(name = "shadekit")]
#[command(version)]
#[command(about = "Themed, style-encapsulated UI widgets rendered to HTML")]
struct Cli {
    /// Configuration file (default: ./shadekit.toml, then the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the captured log records (newest first) to stderr when done
    #[arg(long, global = true)]
    show_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one widget as declarative shadow DOM
    Render {
        /// Component tag, e.g. ui-button
        tag: String,

        /// Attribute as name=value (repeatable; `name` alone sets a flag)
        #[arg(short, long = "attr", value_name = "NAME=VALUE")]
        attributes: Vec<String>,

        /// Light-DOM content projected into the widget's slot
        #[arg(long)]
        content: Option<String>,
    },

    /// Render a showcase page with one of each widget
    Gallery {
        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a timestamp relative to now
    TimeAgo {
        timestamp: String,

        /// verbose ("5 minutes ago") or compact ("5m ago")
        #[arg(short, long)]
        style: Option<TimeStyle>,
    },

    /// Print the initials for a display name
    Initials { name: String },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Target path (default: the user config directory)
        path: Option<PathBuf>,
    },

    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let mut logging = config.logging.clone();
    match cli.verbose {
        0 if cli.show_logs => logging.level = "debug".to_string(),
        0 => {}
        1 => {
            logging.stderr = true;
            logging.level = "debug".to_string();
        }
        _ => {
            logging.stderr = true;
            logging.level = "trace".to_string();
        }
    }
    let logger = Logger::new();
    logger.init(&logging)?;

    run(cli.command, &config)?;

    if cli.show_logs {
        log::logger().flush();
        eprintln!("{}", logger.debug_report());
    }

    Ok(())
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Render { tag, attributes, content } => {
            let attributes = parse_attributes(&attributes)?;
            let pairs: Vec<(&str, &str)> = attributes.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();

            let mut document = Document::from_config(config)?;
            let id = document.insert(&tag, &pairs)?;
            if let Some(content) = content {
                document.set_content(id, &content)?;
            }
            println!("{}", document.element(id)?.to_html());
        }
        Commands::Gallery { output } => {
            let mut document = Document::from_config(config)?;
            let page = gallery(&mut document)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, page)
                        .with_context(|| format!("Failed to write gallery: {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{page}"),
            }
        }
        Commands::TimeAgo { timestamp, style } => {
            let style = style.or(config.display.time_style).unwrap_or_default();
            println!("{}", format_time_ago(&timestamp, style));
        }
        Commands::Initials { name } => {
            println!("{}", initials(&name));
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path } => {
                let path = match path {
                    Some(path) => path,
                    None => Config::get_default_config_path()?,
                };
                if path.exists() {
                    anyhow::bail!("Config file already exists: {}", path.display());
                }
                Config::generate_default_config(&path)?;
                println!("Wrote {}", path.display());
            }
            ConfigAction::Show => {
                let toml = toml::to_string_pretty(config).context("Failed to serialize config")?;
                print!("{toml}");
            }
        },
    }

    Ok(())
}

/// Split `name=value` pairs; a bare `name` becomes a presence flag
fn parse_attributes(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            let (name, value) = entry.split_once('=').unwrap_or((entry.as_str(), ""));
            if name.trim().is_empty() {
                anyhow::bail!("Attribute '{}' has no name", entry);
            }
            Ok((name.trim().to_string(), value.to_string()))
        })
        .collect()
}
