// crates/split_at_markers/src/lib.rs

use anyhow::{bail, Result};

/// Finds the first occurrence of each marker in `content` and returns the
/// byte offsets in the same order as `markers`.
///
/// Each lookup is an independent search from the start of the document, so
/// the returned positions are a pure function of the content and the marker
/// text. Markers are matched case-sensitively, byte for byte.
///
/// # Arguments
///
/// * `content` - The full document text.
/// * `markers` - Literal substrings to locate.
///
/// # Errors
///
/// Returns a single combined error naming every marker that does not occur
/// in `content`.
pub fn marker_positions(content: &str, markers: &[&str]) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(markers.len());
    let mut missing: Vec<&str> = Vec::new();
    for &marker in markers {
        match content.find(marker) {
            Some(pos) => positions.push(pos),
            None => missing.push(marker),
        }
    }
    if !missing.is_empty() {
        bail!("Section marker(s) not found: {}", missing.join(", "));
    }
    Ok(positions)
}

/// Splits `content` into `markers.len() + 1` spans, cut at the first
/// occurrence of each marker. Each span except the first begins with its
/// marker; concatenating all spans reproduces the input exactly.
///
/// The markers must occur in non-decreasing position order. Out-of-order
/// markers would describe overlapping spans, so they are rejected instead
/// of sliced.
pub fn split_at_markers<'a>(content: &'a str, markers: &[&str]) -> Result<Vec<&'a str>> {
    let positions = marker_positions(content, markers)?;
    if let Some(i) = positions.windows(2).position(|pair| pair[0] > pair[1]) {
        bail!(
            "Section markers out of order: '{}' occurs before '{}'",
            markers[i + 1],
            markers[i]
        );
    }

    let mut spans = Vec::with_capacity(positions.len() + 1);
    let mut begin = 0;
    for &pos in &positions {
        spans.push(&content[begin..pos]);
        begin = pos;
    }
    spans.push(&content[begin..]);
    Ok(spans)
}
