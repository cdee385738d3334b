//! Splitting of multi-record files.
//!
//! Several logical documents share one source file, separated by the
//! frontmatter delimiter. Splitting re-prefixes every block with the
//! delimiter so each one parses as a standalone document.

use markdown::DELIMITER;

pub fn split_blocks(source: &str) -> Vec<String> {
    let text = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix(DELIMITER) {
        text = rest.trim();
    }

    text.split("\n---\n")
        .map(|block| {
            let block = block.trim();
            match block.strip_prefix(DELIMITER) {
                Some(rest) => rest.trim(),
                None => block,
            }
        })
        .filter(|block| !block.is_empty())
        .map(|block| format!("{}\n{}", DELIMITER, block))
        .collect()
}

/// Slug for the block at `index`: a deterministic 32-bit rolling hash over
/// the block text and its position, so byte-identical blocks at different
/// positions still get distinct slugs.
pub fn block_slug(prefix: &str, block: &str, index: usize) -> String {
    format!("{}-{:08x}", prefix, rolling_hash(block, index))
}

fn rolling_hash(block: &str, index: usize) -> u32 {
    let mut hash: i32 = 0;
    for c in block.chars().chain(index.to_string().chars()) {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}
