//! Generator idempotence and in-place rewriting tests

use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;
use unc_codegen::splice::{self, Outcome};
use unc_codegen::{CodegenError, render};
use unc_common::consts::{BEGIN_MARKER, END_MARKER, MAX_ARITY};

const CHECKED_IN: &str = include_str!("../../unc_core/src/propagate/arity.rs");

fn temp_source(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_render_is_deterministic() {
    assert_eq!(render(MAX_ARITY).unwrap(), render(MAX_ARITY).unwrap());
}

#[test]
fn test_checked_in_region_matches_renderer() {
    let region = splice::extract(CHECKED_IN).unwrap();
    assert_eq!(region, render(MAX_ARITY).unwrap());
}

#[test]
fn test_checked_in_procedures_cover_every_arity() {
    for arity in 1..=MAX_ARITY {
        let name = format!("pub fn propagate_error_{arity}<");
        assert_eq!(CHECKED_IN.matches(&name).count(), 1, "arity {arity}");
    }
    assert!(!CHECKED_IN.contains(&format!("propagate_error_{}<", MAX_ARITY + 1)));
}

#[test]
fn test_second_write_is_a_no_op() {
    let file = temp_source(CHECKED_IN);
    let generated = render(MAX_ARITY).unwrap();

    assert_eq!(
        splice::write_region(file.path(), &generated).unwrap(),
        Outcome::Unchanged
    );
    assert_eq!(fs::read_to_string(file.path()).unwrap(), CHECKED_IN);
}

#[test]
fn test_strip_then_write_restores_file() {
    let file = temp_source(CHECKED_IN);

    assert_eq!(splice::strip_file(file.path()).unwrap(), Outcome::Updated);
    let stripped = fs::read_to_string(file.path()).unwrap();
    assert!(stripped.contains(&format!("{BEGIN_MARKER}\n{END_MARKER}\n")));
    assert!(!stripped.contains("pub fn propagate_error_1<"));
    assert!(!splice::check_region(file.path(), &render(MAX_ARITY).unwrap()).unwrap());

    let generated = render(MAX_ARITY).unwrap();
    assert_eq!(
        splice::write_region(file.path(), &generated).unwrap(),
        Outcome::Updated
    );
    assert_eq!(fs::read_to_string(file.path()).unwrap(), CHECKED_IN);
    assert_eq!(
        splice::write_region(file.path(), &generated).unwrap(),
        Outcome::Unchanged
    );
}

#[test]
fn test_check_detects_stale_region() {
    let file = temp_source(CHECKED_IN);

    assert!(splice::check_region(file.path(), &render(MAX_ARITY).unwrap()).unwrap());
    assert!(!splice::check_region(file.path(), &render(MAX_ARITY - 1).unwrap()).unwrap());
}

#[test]
fn test_hand_written_text_survives_regeneration() {
    let source = format!(
        "//! header\n\nuse core::ops::Sub;\n\n{BEGIN_MARKER}\nstale\n{END_MARKER}\n\nfn keep_me() {{}}\n"
    );
    let file = temp_source(&source);

    let generated = render(3).unwrap();
    splice::write_region(file.path(), &generated).unwrap();

    let updated = fs::read_to_string(file.path()).unwrap();
    assert!(updated.starts_with("//! header\n\nuse core::ops::Sub;\n\n"));
    assert!(updated.ends_with("\nfn keep_me() {}\n"));
    assert!(!updated.contains("stale"));
    assert_eq!(splice::extract(&updated).unwrap(), generated);
}

#[test]
fn test_missing_file_reports_path() {
    let err = splice::write_region(
        std::path::Path::new("/nonexistent/arity.rs"),
        "irrelevant",
    )
    .unwrap_err();

    assert!(matches!(err, CodegenError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/arity.rs"));
}

#[test]
fn test_indented_region_is_stable() {
    let source = format!("mod generated {{\n    {BEGIN_MARKER}\n    {END_MARKER}\n}}\n");
    let file = temp_source(&source);
    let generated = render(2).unwrap();

    assert_eq!(
        splice::write_region(file.path(), &generated).unwrap(),
        Outcome::Updated
    );
    let written = fs::read_to_string(file.path()).unwrap();
    assert!(written.contains("    pub fn propagate_error_2<"));
    assert!(written.contains(&format!("\n    {END_MARKER}\n}}\n")));
    assert!(splice::check_region(file.path(), &generated).unwrap());

    assert_eq!(
        splice::write_region(file.path(), &generated).unwrap(),
        Outcome::Unchanged
    );
}
