use anyhow::Result;
use split_at_markers::split_at_markers;

/// The three heading literals that partition the document.
///
/// `features` opens the section kept verbatim, `old_compile` opens the
/// section to be dropped, and `tail` opens the first section after it that
/// is carried over untouched.
pub struct SectionMarkers<'a> {
    pub features: &'a str,
    pub old_compile: &'a str,
    pub tail: &'a str,
}

/// The newly authored content spliced into the document.
pub struct ReplacementBlocks<'a> {
    pub structure: &'a str,
    pub compile: &'a str,
}

/// Splices the replacement blocks into `content` and returns the assembled
/// document. Pure function; the caller owns all file I/O.
///
/// The document is partitioned at the three markers into intro, features,
/// old-compile and tail spans. The old-compile span is discarded and the
/// result is assembled in fixed order: intro, structure block, blank line,
/// features span, compile block, blank line, tail span.
///
/// # Errors
///
/// Fails if any marker is absent from `content` or if the markers do not
/// occur in document order. Nothing is assembled on failure.
pub fn splice_sections(
    content: &str,
    markers: &SectionMarkers,
    blocks: &ReplacementBlocks,
) -> Result<String> {
    let spans = split_at_markers(
        content,
        &[markers.features, markers.old_compile, markers.tail],
    )?;

    let mut output = String::with_capacity(
        content.len() + blocks.structure.len() + blocks.compile.len() + 2,
    );
    output.push_str(spans[0]);
    output.push_str(blocks.structure);
    output.push('\n');
    output.push_str(spans[1]);
    // spans[2], the old compile section, is dropped here.
    output.push_str(blocks.compile);
    output.push('\n');
    output.push_str(spans[3]);
    Ok(output)
}
