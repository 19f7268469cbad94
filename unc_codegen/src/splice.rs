//! Locating, replacing and stripping the generated region of a source file.
//!
//! A region spans from the line holding [`BEGIN_MARKER`] through the line
//! holding [`END_MARKER`], both inclusive. Marker lines may be indented;
//! spliced text takes the begin marker's indentation on every non-empty
//! line. Everything outside the region is left byte-for-byte untouched.

use std::borrow::Cow;
use std::fs;
use std::ops::Range;
use std::path::Path;

use tracing::{debug, info};
use unc_common::consts::{BEGIN_MARKER, END_MARKER};

use crate::error::CodegenError;

/// Result of rewriting a file in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file already held the requested content and was not written.
    Unchanged,
    /// The file was rewritten.
    Updated,
}

/// Byte range of the generated region, marker lines included.
///
/// # Errors
/// - `MissingMarker` if either marker line is absent
/// - `MarkersOutOfOrder` if the end marker comes first
/// - `DuplicateMarker` if a second begin marker opens before the first
///   region is closed
pub fn locate(source: &str) -> Result<Range<usize>, CodegenError> {
    let mut begin: Option<usize> = None;
    let mut offset = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let text = line.trim();
        if text == BEGIN_MARKER {
            if begin.is_some() {
                return Err(CodegenError::DuplicateMarker { line: index + 1 });
            }
            begin = Some(offset);
        } else if text == END_MARKER {
            let start = begin.ok_or(CodegenError::MarkersOutOfOrder)?;
            return Ok(start..offset + line.len());
        }
        offset += line.len();
    }

    Err(CodegenError::MissingMarker(if begin.is_none() {
        BEGIN_MARKER
    } else {
        END_MARKER
    }))
}

/// The generated region of `source`, marker lines included.
pub fn extract(source: &str) -> Result<&str, CodegenError> {
    let range = locate(source)?;
    Ok(&source[range])
}

/// Leading whitespace of the begin marker line.
fn indentation<'a>(source: &'a str, range: &Range<usize>) -> &'a str {
    let line = &source[range.start..];
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

/// Prefix every non-empty line of `text` with `indent`.
fn reindent<'a>(text: &'a str, indent: &str) -> Cow<'a, str> {
    if indent.is_empty() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + indent.len() * text.lines().count());
    for line in text.split_inclusive('\n') {
        if line != "\n" {
            out.push_str(indent);
        }
        out.push_str(line);
    }
    Cow::Owned(out)
}

/// Replace the generated region of `source` with `generated`, indented to
/// match the begin marker.
pub fn splice(source: &str, generated: &str) -> Result<String, CodegenError> {
    let range = locate(source)?;
    let generated = reindent(generated, indentation(source, &range));
    let mut out = String::with_capacity(source.len() - range.len() + generated.len());
    out.push_str(&source[..range.start]);
    out.push_str(&generated);
    out.push_str(&source[range.end..]);
    Ok(out)
}

/// Empty the generated region, keeping both marker lines so it can be
/// regenerated later.
pub fn strip(source: &str) -> Result<String, CodegenError> {
    splice(source, &format!("{BEGIN_MARKER}\n{END_MARKER}\n"))
}

fn read(path: &Path) -> Result<String, CodegenError> {
    fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))
}

fn rewrite(path: &Path, current: &str, updated: String) -> Result<Outcome, CodegenError> {
    if updated == current {
        debug!(path = %path.display(), "generated region already up to date");
        return Ok(Outcome::Unchanged);
    }
    fs::write(path, updated).map_err(|e| CodegenError::io(path, e))?;
    info!(path = %path.display(), "rewrote generated region");
    Ok(Outcome::Updated)
}

/// Splice `generated` into the file at `path`, writing only when the
/// content changes.
pub fn write_region(path: &Path, generated: &str) -> Result<Outcome, CodegenError> {
    let current = read(path)?;
    let updated = splice(&current, generated)?;
    rewrite(path, &current, updated)
}

/// Whether the generated region of the file at `path` equals `generated`
/// at the begin marker's indentation.
pub fn check_region(path: &Path, generated: &str) -> Result<bool, CodegenError> {
    let current = read(path)?;
    let range = locate(&current)?;
    Ok(current[range.clone()] == *reindent(generated, indentation(&current, &range)))
}

/// Empty the generated region of the file at `path`.
pub fn strip_file(path: &Path) -> Result<Outcome, CodegenError> {
    let current = read(path)?;
    let updated = strip(&current)?;
    rewrite(path, &current, updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> String {
        format!("use x;\n\n{BEGIN_MARKER}\nfn generated() {{}}\n{END_MARKER}\n\nfn hand_written() {{}}\n")
    }

    #[test]
    fn extract_covers_marker_lines() {
        let source = sample();
        assert_eq!(
            extract(&source).unwrap(),
            format!("{BEGIN_MARKER}\nfn generated() {{}}\n{END_MARKER}\n")
        );
    }

    #[test]
    fn splice_keeps_surrounding_text() {
        let source = sample();
        let replaced = splice(&source, &format!("{BEGIN_MARKER}\nfn other() {{}}\n{END_MARKER}\n")).unwrap();
        assert!(replaced.starts_with("use x;\n\n"));
        assert!(replaced.ends_with("\nfn hand_written() {}\n"));
        assert!(replaced.contains("fn other() {}"));
        assert!(!replaced.contains("fn generated() {}"));
    }

    #[test]
    fn strip_then_splice_restores_source() {
        let source = sample();
        let region = extract(&source).unwrap().to_string();
        let stripped = strip(&source).unwrap();
        assert!(!stripped.contains("fn generated"));
        assert_eq!(splice(&stripped, &region).unwrap(), source);
    }

    #[test]
    fn indented_markers_are_recognised() {
        let source = format!("mod m {{\n    {BEGIN_MARKER}\n    fn g() {{}}\n    {END_MARKER}\n}}\n");
        let region = extract(&source).unwrap();
        assert!(region.starts_with("    // BEGIN"));
        assert!(region.ends_with("// END GENERATED CODE\n"));
    }

    #[test]
    fn splice_keeps_marker_indentation() {
        let source = format!("mod m {{\n    {BEGIN_MARKER}\n    {END_MARKER}\n}}\n");
        let generated = format!("{BEGIN_MARKER}\nfn g() {{}}\n\nfn h() {{}}\n{END_MARKER}\n");

        let once = splice(&source, &generated).unwrap();
        assert_eq!(
            once,
            format!("mod m {{\n    {BEGIN_MARKER}\n    fn g() {{}}\n\n    fn h() {{}}\n    {END_MARKER}\n}}\n")
        );
        assert_eq!(splice(&once, &generated).unwrap(), once);
        assert_eq!(strip(&once).unwrap(), source);
    }

    #[test]
    fn end_marker_without_trailing_newline() {
        let source = format!("{BEGIN_MARKER}\nx\n{END_MARKER}");
        assert_eq!(extract(&source).unwrap(), source);
    }

    #[test]
    fn marker_errors() {
        assert!(matches!(
            locate("fn main() {}\n"),
            Err(CodegenError::MissingMarker(BEGIN_MARKER))
        ));
        assert!(matches!(
            locate(&format!("{BEGIN_MARKER}\nfn f() {{}}\n")),
            Err(CodegenError::MissingMarker(END_MARKER))
        ));
        assert!(matches!(
            locate(&format!("{END_MARKER}\n{BEGIN_MARKER}\n")),
            Err(CodegenError::MarkersOutOfOrder)
        ));
        assert!(matches!(
            locate(&format!("{BEGIN_MARKER}\n{BEGIN_MARKER}\n{END_MARKER}\n")),
            Err(CodegenError::DuplicateMarker { line: 2 })
        ));
    }

    #[test]
    fn marker_text_inside_a_line_is_not_a_marker() {
        let source = format!("let s = \"{BEGIN_MARKER}\";\n");
        assert!(matches!(
            locate(&source),
            Err(CodegenError::MissingMarker(_))
        ));
    }
}
