use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::{QueryInput, SearchOptions};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize a title the way scene release names are written.
///
/// `&` becomes `and`, accents are stripped by NFKD decomposition and anything
/// outside `[A-Za-z0-9 -._()]` is dropped.
pub fn normalize_scene(text: &str) -> String {
    text.replace('&', "and")
        .chars()
        .map(fold_undecomposable)
        .collect::<String>()
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '.' | '_' | '(' | ')'))
        .collect()
}

/// Letters NFKD leaves intact because their stroke is not a combining mark.
fn fold_undecomposable(c: char) -> char {
    match c {
        'ł' => 'l',
        'Ł' => 'L',
        'ø' => 'o',
        'Ø' => 'O',
        'đ' => 'd',
        'Đ' => 'D',
        'ħ' => 'h',
        'Ħ' => 'H',
        'ı' => 'i',
        _ => c,
    }
}

/// Replace every run of whitespace with a single dot.
pub fn collapse_whitespace_to_dots(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, ".").into_owned()
}

/// Shape the `s` parameter sent to the site.
pub fn build_search_string(query: &QueryInput, options: &SearchOptions) -> String {
    let mut search = normalize_scene(&query.title);
    if options.append_year {
        match query.year {
            Some(year) => {
                search.push(' ');
                search.push_str(&year.to_string());
            }
            None => tracing::debug!("append_year set but {:?} has no year", query.title),
        }
    }
    if options.whitespace2dot {
        search = collapse_whitespace_to_dots(&search);
    }
    search
}

pub fn build_search_url(base_url: &str, search: &str) -> String {
    let qs = serde_urlencoded::to_string([("s", search)])
        .unwrap_or_else(|_| format!("s={}", search.replace(' ', "+")));
    format!("{base_url}?{qs}")
}
