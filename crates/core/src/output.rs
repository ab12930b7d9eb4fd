use colored_json::ToColoredJson;
use serde_json::{Value, json};

use crate::models::ResultRecord;
use tabled::{Table, Tabled, settings::Style};
use terminal_size::{Width as TWidth, terminal_size};
use textwrap::fill as tw_fill;

pub fn calc_title_wrap_columns() -> usize {
    let term_cols = match terminal_size().map(|(w, _)| w) {
        Some(TWidth(n)) if n > 20 => n as usize,
        _ => 100usize,
    };
    term_cols.saturating_sub(60).max(20)
}

/// `{"results": [...], "count": n}` as handed to the host.
pub fn results_json(records: &[ResultRecord]) -> Value {
    json!({
        "results": records,
        "count": records.len(),
    })
}

pub fn print_pretty_json(records: &[ResultRecord]) {
    match serde_json::to_string_pretty(&results_json(records)) {
        Ok(s) => match s.to_colored_json_auto() {
            Ok(cs) => println!("{cs}"),
            Err(_) => println!("{s}"),
        },
        Err(e) => eprintln!("failed to serialize results: {e}"),
    }
}

pub fn print_table(records: &[ResultRecord]) {
    if records.is_empty() {
        println!("No results.");
        return;
    }
    let title_wrap = calc_title_wrap_columns();
    let mut rows: Vec<DisplayRow> = records.iter().map(DisplayRow::from).collect();
    for r in rows.iter_mut() {
        if r.title.len() > title_wrap {
            r.title = tw_fill(&r.title, title_wrap);
        }
    }
    if std::env::var("NO_TABLE").ok().as_deref() == Some("1") {
        for r in &rows {
            println!("  - {} [{}] ({})", r.title, r.quality, r.url);
        }
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

#[derive(Clone, Tabled)]
struct DisplayRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Quality")]
    quality: String,
    #[tabled(rename = "Hoster link")]
    url: String,
    #[tabled(rename = "IMDB")]
    imdb: String,
}

impl From<&ResultRecord> for DisplayRow {
    fn from(r: &ResultRecord) -> Self {
        Self {
            title: r.title.clone(),
            quality: r.quality.clone().unwrap_or_else(|| "-".to_string()),
            url: r.download_url.clone(),
            imdb: r.imdb_url.clone().unwrap_or_default(),
        }
    }
}
