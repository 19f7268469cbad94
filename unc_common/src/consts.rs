//! Workspace-wide constants.
//!
//! Single source of truth for the arity ceiling and the generated-region
//! markers. Imported by the core library and the generator.

/// Highest arity with a generated propagation procedure.
///
/// Calls with more arguments have no matching dispatch arm and fail to
/// compile.
pub const MAX_ARITY: usize = 20;

/// First line of a generated region.
pub const BEGIN_MARKER: &str = "// BEGIN GENERATED CODE";

/// Last line of a generated region.
pub const END_MARKER: &str = "// END GENERATED CODE";

/// Default configuration file read by the generator when present.
pub const DEFAULT_CONFIG_FILE: &str = "codegen.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert!(MAX_ARITY >= 1);
        assert_ne!(BEGIN_MARKER, END_MARKER);
    }

    #[test]
    fn markers_are_line_comments() {
        assert!(BEGIN_MARKER.starts_with("//"));
        assert!(END_MARKER.starts_with("//"));
        assert!(!BEGIN_MARKER.contains('\n'));
        assert!(!END_MARKER.contains('\n'));
    }
}
