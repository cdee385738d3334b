//! Derives word counts, reading time and the table of contents from content.
//!
//! Every function here is total: empty or malformed input yields zero-valued
//! metadata, never an error.

use lazy_static::lazy_static;
use libs::regex::Regex;
use linden_core::{Metadata, TocItem};

lazy_static! {
    static ref LATIN_WORD_RE: Regex = Regex::new(r"[A-Za-z]+").unwrap();
    static ref CJK_CHAR_RE: Regex = Regex::new(r"[\u{4e00}-\u{9fa5}]").unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"(?s)<h([1-6])[^>]*>(.*?)</h[1-6]>").unwrap();
    static ref ID_ATTR_RE: Regex = Regex::new(r#"id="([^"]*)""#).unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref BLANK_LINE_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref CHAPTER_RE: Regex = Regex::new(r"(?m)^#{2,3}\s+.+$").unwrap();
}

/// Counts runs of Latin letters as one word each, plus every CJK ideograph on
/// its own. Digits, punctuation and whitespace do not count.
pub fn count_words(text: &str) -> usize {
    LATIN_WORD_RE.find_iter(text).count() + CJK_CHAR_RE.find_iter(text).count()
}

/// Estimates reading time in whole minutes: 300 Latin words or 500 CJK
/// characters per minute when the source text is available, a flat 350 words
/// per minute otherwise.
pub fn calculate_read_time(word_count: usize, text: Option<&str>) -> u32 {
    if word_count == 0 {
        return 0;
    }
    match text {
        Some(text) => {
            let latin = LATIN_WORD_RE.find_iter(text).count() as f64;
            let cjk = CJK_CHAR_RE.find_iter(text).count() as f64;
            (latin / 300.0 + cjk / 500.0).ceil() as u32
        }
        None => ((word_count as f64) / 350.0).ceil() as u32,
    }
}

/// Collects the headings of the rendered HTML in document order. Only
/// headings carrying an id anchor make it into the list.
pub fn extract_toc(html: &str) -> Vec<TocItem> {
    let mut toc = Vec::new();
    for heading in HEADING_RE.captures_iter(html) {
        let id = match ID_ATTR_RE.captures(heading.get(0).unwrap().as_str()) {
            Some(attr) => attr[1].to_string(),
            None => continue,
        };
        let level: u8 = heading[1].parse().unwrap();
        let title = TAG_RE.replace_all(&heading[2], "").trim().to_string();
        toc.push(TocItem { id, title, level });
    }
    toc
}

/// Line and stanza counts for poetry: non-blank lines, and blocks separated
/// by one or more blank lines.
pub fn analyze_poetry(text: &str) -> (usize, usize) {
    let line_count = text.lines().filter(|line| !line.trim().is_empty()).count();
    let stanza_count = BLANK_LINE_RE
        .split(text)
        .filter(|stanza| !stanza.trim().is_empty())
        .count();
    (line_count, stanza_count)
}

/// Counts level 2 and 3 headings in the raw Markdown, used as the chapter
/// count of serialized fiction.
pub fn chapter_count(text: &str) -> usize {
    CHAPTER_RE.find_iter(text).count()
}

pub fn extract_all(raw: &str, html: &str) -> Metadata {
    let word_count = count_words(raw);
    Metadata {
        word_count,
        read_time: calculate_read_time(word_count, Some(raw)),
        toc: extract_toc(html),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_mixed_languages() {
        assert_eq!(count_words("Hello 你好"), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one, two; three!"), 3);
        assert_eq!(count_words("2024 ... 42"), 0);
    }

    #[test]
    fn test_read_time_zero_words() {
        assert_eq!(calculate_read_time(0, Some("")), 0);
        assert_eq!(calculate_read_time(0, None), 0);
    }

    #[test]
    fn test_read_time_rounds_up() {
        let text = "word ".repeat(301);
        assert_eq!(calculate_read_time(301, Some(&text)), 2);
        assert_eq!(calculate_read_time(300, None), 1);
        assert_eq!(calculate_read_time(351, None), 2);
    }

    #[test]
    fn test_read_time_monotonic_in_word_count() {
        let mut previous = 0;
        for words in [1, 10, 350, 700, 1400] {
            let estimate = calculate_read_time(words, None);
            assert!(estimate >= previous);
            previous = estimate;
        }
    }

    #[test]
    fn test_extract_toc_keeps_document_order() {
        let html = concat!(
            r##"<h1><a href="#intro" aria-hidden="true" class="anchor" id="intro"></a>Intro</h1>"##,
            "<p>text</p>",
            r##"<h2><a href="#details" aria-hidden="true" class="anchor" id="details"></a> Details </h2>"##,
            "<h3>No anchor here</h3>",
        );
        let toc = extract_toc(html);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].id, "intro");
        assert_eq!(toc[0].title, "Intro");
        assert_eq!(toc[0].level, 1);
        assert_eq!(toc[1].id, "details");
        assert_eq!(toc[1].title, "Details");
        assert_eq!(toc[1].level, 2);
    }

    #[test]
    fn test_extract_toc_from_rendered_markdown() {
        let html = markdown::string_to_html(
            "# First\n\ntext\n\n## Second\n\n## Second",
            &markdown::MarkdownOptions::default(),
        );
        let toc = extract_toc(&html);
        let ids: Vec<&str> = toc.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "second-1"]);
    }

    #[test]
    fn test_analyze_poetry() {
        assert_eq!(analyze_poetry("line1\nline2\n\nline3"), (3, 2));
        assert_eq!(analyze_poetry(""), (0, 0));
        assert_eq!(analyze_poetry("\n\n\n"), (0, 0));
    }

    #[test]
    fn test_chapter_count() {
        let text = "# Title\n\n## Chapter One\n\ntext\n\n### Interlude\n\n#### Not a chapter\n";
        assert_eq!(chapter_count(text), 2);
    }
}
