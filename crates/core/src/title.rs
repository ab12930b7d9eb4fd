//! Splitting release titles into name, year and quality.
//!
//! The adapter only depends on the [`TitleParser`] trait so callers can plug in
//! their own parser; [`MovieTitleParser`] handles the usual scene movie format
//! (`Some.Movie.2022.German.DL.1080p.BluRay.x264-GRP`).

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedTitle;

pub trait TitleParser: Send + Sync {
    fn parse(&self, title: &str) -> ParsedTitle;
}

static TOKEN_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s._]+").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[(\[]?((?:19|20)\d{2})[)\]]?$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct MovieTitleParser;

impl MovieTitleParser {
    pub fn new() -> Self {
        Self
    }
}

impl TitleParser for MovieTitleParser {
    fn parse(&self, title: &str) -> ParsedTitle {
        let tokens: Vec<&str> = TOKEN_SPLIT
            .split(title.trim())
            .filter(|t| !t.is_empty())
            .collect();

        // The first token is never the year so titles like "2012" or
        // "1917.2019" keep their name.
        let year_hit = tokens
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find_map(|(idx, t)| {
                YEAR.captures(t)
                    .and_then(|c| c[1].parse::<i32>().ok())
                    .map(|y| (idx, y))
            });

        // Words before the year belong to the name even when they look like
        // quality tags ("The.Web.2019").
        let quality_from = year_hit.map(|(idx, _)| idx + 1).unwrap_or(0);
        let mut quality: Vec<&'static str> = Vec::new();
        let mut first_quality: Option<usize> = None;
        for (idx, token) in tokens.iter().enumerate().skip(quality_from) {
            if let Some(q) = quality_token(token) {
                first_quality.get_or_insert(idx);
                if !quality.contains(&q) {
                    quality.push(q);
                }
            }
        }

        let name_end = year_hit
            .map(|(idx, _)| idx)
            .or(first_quality)
            .unwrap_or(tokens.len());
        let mut name = tokens[..name_end].join(" ");
        if name.is_empty() {
            name = tokens.join(" ");
        }

        ParsedTitle {
            name,
            year: year_hit.map(|(_, y)| y),
            quality: (!quality.is_empty()).then(|| quality.join(" ")),
        }
    }
}

fn quality_token(token: &str) -> Option<&'static str> {
    let lower = token.to_ascii_lowercase();
    lookup_quality(&lower).or_else(|| {
        // release group suffix: "x264-GRP"
        lower.split('-').next().and_then(lookup_quality)
    })
}

fn lookup_quality(token: &str) -> Option<&'static str> {
    let q = match token {
        "2160p" | "4k" | "uhd" => "2160p",
        "1080p" => "1080p",
        "1080i" => "1080i",
        "720p" => "720p",
        "576p" => "576p",
        "480p" => "480p",
        "bluray" | "blu-ray" | "bdrip" | "brrip" => "bluray",
        "remux" => "remux",
        "web-dl" | "webdl" => "webdl",
        "webrip" => "webrip",
        "web" => "web",
        "hdtv" => "hdtv",
        "dvdrip" => "dvdrip",
        "hdrip" => "hdrip",
        "x264" | "h264" | "avc" => "h264",
        "x265" | "h265" | "hevc" => "h265",
        "xvid" => "xvid",
        "hdr" | "hdr10" => "hdr",
        "dts" => "dts",
        "truehd" => "truehd",
        "atmos" => "atmos",
        "ac3" => "ac3",
        "aac" => "aac",
        _ => return None,
    };
    Some(q)
}
