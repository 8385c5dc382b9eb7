#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use widget_explorer_lib::domain::{MemberKind, MemberTable, pyside2_registry, resolve_doc_urls};
use widget_explorer_lib::infrastructure::http_client::decode_utf8;
use widget_explorer_lib::infrastructure::{
    AppConfig, ConfigManager, DocScraper, HttpClient, init_logging_with_config,
};
use widget_explorer_lib::{DocSite, ExplorerSession, Introspect};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "widget-explorer")]
#[command(about = "Inspect PySide2 widget classes and their API documentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override ("error", "warn", "info", "debug", "trace")
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documentation page URLs for a class and its toolkit ancestors
    Urls {
        /// Class name, simple (QComboBox) or qualified (PySide2.QtWidgets.QComboBox)
        class: String,
    },
    /// List the members of a class grouped by kind
    Members {
        /// Class name
        class: String,
    },
    /// Fetch the documentation pages of a class and print a member's documentation
    Doc {
        /// Class name
        class: String,
        /// Member to look up
        member: String,
    },
    /// Look up a member in local HTML files, searched in the given order
    Lookup {
        /// Documentation pages, most-derived class first
        #[arg(long = "file", required = true)]
        files: Vec<PathBuf>,
        /// Member to look up
        member: String,
    },
    /// List the classes known to the built-in catalog
    Classes,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

async fn load_config(cli: &Cli) -> Result<AppConfig> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let mut config = manager.load_config().await?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).await?;
    init_logging_with_config(&config.logging)?;
    let site = config.docs.to_site();

    match cli.command {
        Commands::Urls { class } => print_urls(&class, &site),
        Commands::Members { class } => print_members(&class),
        Commands::Doc { class, member } => print_doc(&class, &member, &site, &config).await,
        Commands::Lookup { files, member } => lookup_files(&files, &member),
        Commands::Classes => {
            let registry = pyside2_registry()?;
            for name in registry.class_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn print_urls(class: &str, site: &DocSite) -> Result<()> {
    let registry = pyside2_registry()?;
    let instance = registry.instantiate(class)?;
    for url in resolve_doc_urls(&instance, site) {
        println!("{url}");
    }
    Ok(())
}

fn print_members(class: &str) -> Result<()> {
    let registry = pyside2_registry()?;
    let instance = registry.instantiate(class)?;
    let table = MemberTable::from_members(instance.members());

    for kind in MemberKind::ALL {
        let group = table.group(kind);
        if group.is_empty() {
            continue;
        }
        println!("{kind}:");
        for name in group {
            println!("  {name}");
        }
    }
    Ok(())
}

async fn print_doc(class: &str, member: &str, site: &DocSite, config: &AppConfig) -> Result<()> {
    let registry = pyside2_registry()?;
    let instance = registry.instantiate(class)?;
    let client = HttpClient::with_config(config.http.clone())?;

    let session = ExplorerSession::open(&instance, site, &client).await;
    match session.doc_for(member) {
        Some(html) => println!("{html}"),
        None => println!("No documentation found for '{member}'"),
    }
    Ok(())
}

fn lookup_files(files: &[PathBuf], member: &str) -> Result<()> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        documents.push(decode_utf8(&bytes));
    }

    let scraper = DocScraper::new(&documents);
    match scraper.lookup(member) {
        Some(found) => {
            tracing::info!("Found in {}", files[found.document_index].display());
            println!("{}", found.html);
        }
        None => println!("No documentation found for '{member}'"),
    }
    Ok(())
}
