use libs::log;
use libs::serde_yaml::{self, Mapping, Value};

pub const DELIMITER: &str = "---";

/// Splits a document into its YAML header and the remaining body.
///
/// The header is an opening `---` line followed by YAML up to the closing
/// `---` line. A missing closing delimiter closes the header at the end of
/// input, so blocks cut out of multi-record files parse standalone. Documents
/// without a header come back with an empty mapping and the full text as body.
pub fn extract(source: &str) -> (Mapping, String) {
    let text = normalize_newlines(source);
    let rest = match text.strip_prefix("---\n") {
        Some(rest) => rest,
        None if text.trim() == DELIMITER => "",
        None => return (Mapping::new(), text),
    };

    let (header, body) = match rest.find("\n---\n") {
        Some(end) => (&rest[..end], &rest[end + 5..]),
        None => match rest.strip_suffix("\n---") {
            Some(header) => (header, ""),
            None => (rest, ""),
        },
    };

    (parse_header(header), body.to_string())
}

fn parse_header(header: &str) -> Mapping {
    if header.trim().is_empty() {
        return Mapping::new();
    }
    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(data)) => data,
        Ok(_) => Mapping::new(),
        Err(e) => {
            log::warn!("skipping malformed frontmatter header: {}", e);
            Mapping::new()
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
