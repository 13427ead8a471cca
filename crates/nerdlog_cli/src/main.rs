//! `nerdlog` command-line client.
//!
//! # Responsibility
//! - Resolve configuration from file and flags, then drive `nerdlog_core`.
//! - Print the home lists, a modal route, or the string catalog.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use nerdlog_core::content::SectionBuckets;
use nerdlog_core::{
    init_logging, ClassHighlighter, HomeView, Language, MarkdownOptions, MarkdownRenderer,
    Section, Site, SiteConfig, TextDocument,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "nerdlog", version, about = "Read a nerdlog site from the terminal")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content root: http(s) base URL or local directory.
    #[arg(long, global = true)]
    root: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files (stderr when unset).
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the section lists and recent activity.
    Home {
        /// Print rendered HTML instead of a summary.
        #[arg(long)]
        html: bool,
    },
    /// Navigate to a hash route and print the modal.
    Open {
        /// e.g. `#lab&project=LAB%2Frover`
        hash: String,
    },
    /// Print the translated string catalog.
    Strings {
        /// it|en; defaults to the configured language.
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok version={} root={}",
        nerdlog_core::core_version(),
        config.content_root
    );

    match cli.command {
        Command::Home { html } => run_home(config, html).await,
        Command::Open { hash } => run_open(config, &hash).await,
        Command::Strings { lang } => run_strings(&config, lang.as_deref()),
    }
}

fn resolve_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.content_root = root.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    config.validate()?;
    Ok(config)
}

fn build_site(config: SiteConfig, hash: &str) -> Result<Site> {
    let fetcher = config
        .fetcher()
        .with_context(|| format!("invalid content root `{}`", config.content_root))?;
    let renderer = MarkdownRenderer::new(
        MarkdownOptions::default(),
        Some(Arc::new(ClassHighlighter)),
    );
    Ok(Site::new(config, fetcher, Some(Arc::new(renderer)), hash))
}

async fn run_home(config: SiteConfig, html: bool) -> Result<()> {
    let mut site = build_site(config, "")?;
    let home = site.boot().await.clone();
    if html {
        print_home_html(&home);
        return Ok(());
    }

    let index = site.index().await?;
    let buckets = SectionBuckets::from_projects(&index.items);
    for section in Section::ALL {
        println!("== {section}");
        let projects = buckets.bucket(section);
        if projects.is_empty() {
            println!("   (empty)");
        }
        for project in projects {
            println!(
                "   {:<32} {:<10} {}",
                project.key(),
                project.status,
                project.updated_at
            );
        }
    }

    println!("== RECENT");
    for item in &home.recent_items {
        println!(
            "   {}  {}/{}  {}  {}",
            item.date,
            item.section,
            item.slug,
            item.display_title(),
            item.subtitle()
        );
    }
    Ok(())
}

fn print_home_html(home: &HomeView) {
    for section in Section::ALL {
        println!("<!-- {section} -->");
        println!("{}", home.section(section).html);
    }
    println!("<!-- RECENT -->");
    println!("{}", home.recent.html);
}

async fn run_open(config: SiteConfig, hash: &str) -> Result<()> {
    let mut site = build_site(config, hash)?;
    site.boot().await;
    let state = site.modal_state();
    println!("state: {}", state.name());
    if let Some(view) = state.view() {
        println!("kicker: {}", view.kicker);
        println!("title: {}", view.title);
        println!();
        println!("{}", view.body_html);
    }
    Ok(())
}

fn run_strings(config: &SiteConfig, lang: Option<&str>) -> Result<()> {
    let language = match lang {
        Some(value) => {
            Language::parse(value).ok_or_else(|| anyhow!("unknown language `{value}`"))?
        }
        None => config.language,
    };
    let document = TextDocument::for_language(language);
    for (id, node) in document.iter() {
        println!("{id}\t{}", node.as_str());
    }
    Ok(())
}
