use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use urlparser::config::{self, OutputFormat, ParserConfig};
use urlparser::{logging, FileSuffixSource, ParsedUrl, SuffixList, SuffixSource};

/// Split URLs and classify their hosts against the public suffix list.
#[derive(Debug, Parser)]
#[command(name = "urlparser", version, about)]
struct Cli {
    /// Config file (default: ~/.config/urlparser/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to public_suffix_list.dat
    #[arg(short, long)]
    suffix_list: Option<PathBuf>,

    /// Print one JSON object per URL
    #[arg(long)]
    json: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    /// URLs to parse (full or partial)
    #[arg(required_unless_present = "show_config")]
    urls: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    url: String,
    #[serde(flatten)]
    parsed: &'a ParsedUrl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_or_default().context("loading default config")?,
    };

    if let Err(e) = logging::init_logging(cfg.log_filter.as_deref()) {
        eprintln!("warning: {}", e);
    }

    if cli.show_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => config::config_path()?,
        };
        println!("# {}", path.display());
        print!("{}", toml::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let suffixes = load_suffixes(&cli, &cfg)?;
    let format = if cli.json { OutputFormat::Json } else { cfg.output };

    for raw in &cli.urls {
        let parsed = ParsedUrl::parse(raw, &suffixes);
        match format {
            OutputFormat::Json => {
                let report = Report {
                    url: parsed.to_string(),
                    parsed: &parsed,
                };
                println!("{}", serde_json::to_string(&report)?);
            }
            OutputFormat::Text => print_text(&parsed),
        }
    }

    Ok(())
}

/// Flag beats config, config beats the cached XDG data file.
fn load_suffixes(cli: &Cli, cfg: &ParserConfig) -> Result<SuffixList> {
    let path = cli
        .suffix_list
        .clone()
        .or_else(|| cfg.suffix_list.clone())
        .or_else(config::default_suffix_list_path);

    let Some(path) = path else {
        tracing::warn!("no public suffix list configured; tld and domain will be empty");
        return Ok(SuffixList::default());
    };

    let list = FileSuffixSource::new(&path)
        .load()
        .with_context(|| format!("loading suffix list {}", path.display()))?;
    if list.is_empty() {
        tracing::warn!("suffix list {} is empty", path.display());
    }
    Ok(list)
}

fn print_text(parsed: &ParsedUrl) {
    println!("url:       {}", parsed);
    println!("scheme:    {}", parsed.scheme());
    println!("secure:    {}", parsed.is_secure());
    println!("host:      {}", parsed.host());
    println!("path:      {}", parsed.path());
    println!("anchor:    {}", parsed.anchor().unwrap_or("-"));
    println!("tld:       {}", parsed.tld().unwrap_or("-"));
    println!("domain:    {}", parsed.domain().unwrap_or("-"));
    println!("subdomain: {}", parsed.subdomain().unwrap_or("-"));
    for (key, value) in parsed.query_params().iter() {
        println!("param:     {} = {}", key, value);
    }
    println!();
}
