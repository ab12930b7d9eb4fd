use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use hdworld_search_core::config::default_config_path;
use hdworld_search_core::monitoring::{default_filter, get_metrics, init_tracing};
use hdworld_search_core::output::{print_pretty_json, print_table};
use hdworld_search_core::{BASE_URL, QueryInput, SearchConfig, SiteSearchAdapter};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "hdworld-search", version, about = "Search hd-world.cc releases")]
struct Cli {
    /// Movie title to search for
    title: String,

    /// Release year of the movie
    #[arg(long)]
    year: Option<i32>,

    /// Hoster link text to pick, e.g. DDownload.com (overrides the config file)
    #[arg(long)]
    hoster: Option<String>,

    /// Append the year to the search string
    #[arg(long, default_value_t = false)]
    append_year: bool,

    /// Replace whitespace with dots in the search string
    #[arg(long, default_value_t = false)]
    whitespace2dot: bool,

    /// TOML config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site base URL
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Output format: json or table
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print debug logs to stderr
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn resolve_config(cli: &Cli) -> Result<SearchConfig> {
    let from_file = match &cli.config {
        Some(path) => Some(
            SearchConfig::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
        ),
        None => {
            let path = default_config_path();
            if path.exists() {
                Some(
                    SearchConfig::load_from_file(&path)
                        .with_context(|| format!("loading config {}", path.display()))?,
                )
            } else {
                None
            }
        }
    };

    let mut config = match (from_file, &cli.hoster) {
        (Some(mut cfg), Some(hoster)) => {
            cfg.hoster = hoster.clone();
            cfg
        }
        (Some(cfg), None) => cfg,
        (None, Some(hoster)) => SearchConfig::new(hoster.clone()),
        (None, None) => bail!("no hoster configured; pass --hoster or set it in the config file"),
    };
    config.search.append_year |= cli.append_year;
    config.search.whitespace2dot |= cli.whitespace2dot;
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.debug));

    let config = resolve_config(&cli)?;
    let query = QueryInput::new(cli.title.clone(), cli.year);
    let adapter = SiteSearchAdapter::new().with_base_url(cli.base_url.clone());

    tracing::debug!("Searching {} for {:?} via {}", adapter.base_url(), query.title, config.hoster);
    let records = adapter.search(&query, &config).await;

    match cli.format {
        OutputFormat::Json => print_pretty_json(&records),
        OutputFormat::Table => print_table(&records),
    }
    if cli.debug {
        get_metrics().log_summary();
    }
    Ok(())
}
