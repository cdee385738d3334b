use libs::comrak::{format_html, parse_document, Arena, ComrakOptions};

#[derive(Clone)]
pub struct MarkdownOptions;

impl MarkdownOptions {
    pub fn default() -> ComrakOptions {
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.tasklist = true;
        options.extension.autolink = true;
        options.extension.header_ids = Some("".to_string());
        // Bodies may carry literal HTML; it passes through unchanged.
        options.render.unsafe_ = true;

        options
    }
}

pub fn string_to_html(source: &str, options: &ComrakOptions) -> String {
    let arena = Arena::new();
    let mut html = Vec::new();
    let root = parse_document(&arena, source, options);
    format_html(root, options, &mut html).unwrap();
    String::from_utf8(html).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_get_anchor_ids() {
        let html = string_to_html("# Hello World", &MarkdownOptions::default());
        assert!(html.contains("<h1>"));
        assert!(html.contains(r##"id="hello-world""##));
    }

    #[test]
    fn test_duplicate_headings_get_suffixed_ids() {
        let html = string_to_html("## Intro\n\n## Intro", &MarkdownOptions::default());
        assert!(html.contains(r##"id="intro""##));
        assert!(html.contains(r##"id="intro-1""##));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = string_to_html(
            "~~gone~~\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\n- [ ] open task\n",
            &MarkdownOptions::default(),
        );
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = string_to_html(
            "<div class=\"callout\">kept</div>",
            &MarkdownOptions::default(),
        );
        assert!(html.contains("<div class=\"callout\">kept</div>"));
    }
}
