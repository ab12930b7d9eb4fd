use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::models::ResultRecord;
use crate::title::TitleParser;

pub const IMDB_PREFIX: &str = "https://www.imdb.com";

/// Walk every `<article>` of a results page and keep those offering `hoster`.
pub fn extract_records(html: &str, hoster: &str, parser: &dyn TitleParser) -> Vec<ResultRecord> {
    if html.is_empty() {
        return Vec::new();
    }
    let document = Html::parse_document(html);
    let (Ok(article_sel), Ok(link_sel)) = (
        Selector::parse("article"),
        Selector::parse(r#"a[target="_blank"]"#),
    ) else {
        return Vec::new();
    };

    let hoster_l = hoster.trim().to_lowercase();
    let mut out = Vec::new();
    for article in document.select(&article_sel) {
        let Some(title_link) = first_anchor_from(article) else {
            warn!("Skipping article without a title link");
            continue;
        };
        let title = anchor_text(title_link).replace(['\n', '\r'], "").trim().to_string();
        let Some(origin_url) = title_link.value().attr("href") else {
            warn!("Skipping {} without href", title);
            continue;
        };
        debug!("Found {} [{}]", title, origin_url);

        let parsed = parser.parse(&title);

        let child_links: Vec<ElementRef> = article.select(&link_sel).collect();
        let imdb_url = imdb_url_from_links(&child_links);
        let Some(download_url) = download_url_from_links(&child_links, &hoster_l) else {
            debug!("Hoster {} not found for {}", hoster, title);
            continue;
        };

        out.push(ResultRecord {
            title,
            download_url,
            name: parsed.name,
            year: parsed.year,
            quality: parsed.quality,
            origin_url: origin_url.to_string(),
            imdb_url,
        });
    }
    out
}

fn is_anchor(el: &ElementRef) -> bool {
    el.value().name() == "a"
}

fn anchor_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

/// First `<a>` at or after the start of `article` in document order: a
/// descendant if there is one, otherwise whatever anchor follows it.
fn first_anchor_from(article: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(a) = article.descendants().filter_map(ElementRef::wrap).find(is_anchor) {
        return Some(a);
    }
    let mut node = *article;
    loop {
        for sibling in node.next_siblings() {
            if let Some(a) = sibling.descendants().filter_map(ElementRef::wrap).find(is_anchor) {
                return Some(a);
            }
        }
        node = node.parent()?;
    }
}

fn imdb_url_from_links(links: &[ElementRef]) -> Option<String> {
    links
        .iter()
        .filter_map(|l| l.value().attr("href"))
        .find(|href| href.starts_with(IMDB_PREFIX))
        .map(str::to_string)
}

/// `hoster` must already be trimmed and lowercased.
fn download_url_from_links(links: &[ElementRef], hoster: &str) -> Option<String> {
    links
        .iter()
        .filter(|l| anchor_text(**l).trim().to_lowercase() == hoster)
        .find_map(|l| l.value().attr("href"))
        .map(str::to_string)
}
