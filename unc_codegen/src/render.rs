//! Rendering of the per-arity propagation procedures.
//!
//! The output is a pure function of the arity ceiling: rendering the same
//! ceiling twice yields identical bytes. Each procedure is written out flat,
//! one `if` per argument, so a debugger steps through it at a single call
//! depth.
//!
//! The rendered region expects `Sub`, `Measurand` and `Propagation` to be in
//! scope at the splice site.

use std::fmt::{self, Write};

use tracing::debug;
use unc_common::consts::{BEGIN_MARKER, END_MARKER};

use crate::error::CodegenError;

/// Render the complete generated region for arities `1..=max_arity`,
/// markers included, ending with a newline.
///
/// # Errors
/// Returns `CodegenError::InvalidArity` for a ceiling of zero.
pub fn render(max_arity: usize) -> Result<String, CodegenError> {
    if max_arity == 0 {
        return Err(CodegenError::InvalidArity(max_arity));
    }

    let mut out = String::new();
    writeln!(out, "{BEGIN_MARKER}")?;
    writeln!(
        out,
        "// Produced by unc_codegen for arities 1 through {max_arity}. Do not edit by hand."
    )?;
    writeln!(
        out,
        "// Regenerate in place with `cargo run -p unc_codegen -- --write <this file>`."
    )?;
    writeln!(out)?;
    writeln!(out, "/// Highest arity with a generated propagation procedure.")?;
    writeln!(out, "pub const GENERATED_MAX_ARITY: usize = {max_arity};")?;

    for arity in 1..=max_arity {
        writeln!(out)?;
        write_procedure(&mut out, arity)?;
    }

    writeln!(out)?;
    write_dispatch(&mut out, max_arity)?;
    writeln!(out, "{END_MARKER}")?;

    debug!(max_arity, bytes = out.len(), "rendered propagation procedures");
    Ok(out)
}

/// `item(0), item(1), ..., item(arity - 1)`.
fn joined(arity: usize, item: impl Fn(usize) -> String) -> String {
    (0..arity).map(item).collect::<Vec<_>>().join(", ")
}

fn write_procedure(out: &mut String, arity: usize) -> fmt::Result {
    let type_params = joined(arity, |i| format!("A{i}"));
    let params = joined(arity, |i| format!("a{i}: &A{i}"));
    let value_types = joined(arity, |i| format!("A{i}::Value"));
    let nominal_args = joined(arity, |i| format!("a{i}.nominal()"));
    let deviations = joined(arity, |i| format!("d{i}"));
    let plural = if arity == 1 { "" } else { "s" };

    writeln!(
        out,
        "/// Propagate deviations through a function of {arity} argument{plural}."
    )?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "#[inline]")?;
    writeln!(
        out,
        "pub fn propagate_error_{arity}<F, R, {type_params}>(f: F, {params}) -> Propagation<R, {arity}>"
    )?;
    writeln!(out, "where")?;
    writeln!(out, "    F: Fn({value_types}) -> R,")?;
    writeln!(out, "    R: Clone + Sub<Output = R>,")?;
    for i in 0..arity {
        writeln!(out, "    A{i}: Measurand,")?;
    }
    writeln!(out, "{{")?;
    writeln!(out, "    let nominal = f({nominal_args});")?;
    for i in 0..arity {
        let perturbed = joined(arity, |j| {
            if j == i {
                format!("a{j}.upper()")
            } else {
                format!("a{j}.nominal()")
            }
        });
        writeln!(out, "    let d{i} = if a{i}.is_uncertain() {{")?;
        writeln!(out, "        f({perturbed}) - nominal.clone()")?;
        writeln!(out, "    }} else {{")?;
        writeln!(out, "        nominal.clone() - nominal.clone()")?;
        writeln!(out, "    }};")?;
    }
    writeln!(out, "    Propagation::new(nominal, [{deviations}])")?;
    writeln!(out, "}}")
}

fn write_dispatch(out: &mut String, max_arity: usize) -> fmt::Result {
    writeln!(
        out,
        "/// Call the propagation procedure matching the number of arguments."
    )?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// `propagate_deviations!(f, a0, ..., an)` borrows every argument and returns a"
    )?;
    writeln!(
        out,
        "/// `Propagation` whose deviation array has one entry per argument."
    )?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "#[macro_export]")?;
    writeln!(out, "macro_rules! propagate_deviations {{")?;
    for arity in 1..=max_arity {
        let pattern = joined(arity, |i| format!("$a{i}:expr"));
        let call = joined(arity, |i| format!("&$a{i}"));
        writeln!(out, "    ($f:expr, {pattern} $(,)?) => {{")?;
        writeln!(
            out,
            "        $crate::propagate::propagate_error_{arity}($f, {call})"
        )?;
        writeln!(out, "    }};")?;
    }
    writeln!(out, "    ($($tokens:tt)*) => {{")?;
    writeln!(
        out,
        "        compile_error!(\"propagate_deviations! takes a function followed by 1 to {max_arity} arguments\")"
    )?;
    writeln!(out, "    }};")?;
    writeln!(out, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ceiling_is_rejected() {
        assert!(matches!(render(0), Err(CodegenError::InvalidArity(0))));
    }

    #[test]
    fn region_is_framed_by_markers() {
        let text = render(2).unwrap();
        assert!(text.starts_with(BEGIN_MARKER));
        assert!(text.ends_with(&format!("{END_MARKER}\n")));
    }

    #[test]
    fn arity_one_procedure() {
        let text = render(1).unwrap();
        assert!(text.contains("/// Propagate deviations through a function of 1 argument.\n"));
        assert!(text.contains(
            "pub fn propagate_error_1<F, R, A0>(f: F, a0: &A0) -> Propagation<R, 1>\n"
        ));
        assert!(text.contains("        f(a0.upper()) - nominal.clone()\n"));
        assert!(text.contains("    Propagation::new(nominal, [d0])\n"));
        assert!(text.contains("pub const GENERATED_MAX_ARITY: usize = 1;\n"));
    }

    #[test]
    fn perturbs_one_argument_per_slot() {
        let text = render(3).unwrap();
        assert!(text.contains("f(a0.upper(), a1.nominal(), a2.nominal())"));
        assert!(text.contains("f(a0.nominal(), a1.upper(), a2.nominal())"));
        assert!(text.contains("f(a0.nominal(), a1.nominal(), a2.upper())"));
        assert!(text.contains("    Propagation::new(nominal, [d0, d1, d2])\n"));
    }

    #[test]
    fn one_procedure_and_one_arm_per_arity() {
        let text = render(5).unwrap();
        assert_eq!(text.matches("pub fn propagate_error_").count(), 5);
        assert_eq!(text.matches("$crate::propagate::propagate_error_").count(), 5);
        assert!(!text.contains("propagate_error_6"));
        assert!(text.contains("1 to 5 arguments"));
    }

    #[test]
    fn dispatch_arm_borrows_arguments() {
        let text = render(2).unwrap();
        assert!(text.contains("    ($f:expr, $a0:expr, $a1:expr $(,)?) => {\n"));
        assert!(text.contains("        $crate::propagate::propagate_error_2($f, &$a0, &$a1)\n"));
    }

    #[test]
    fn generated_items_opt_out_of_rustfmt() {
        let text = render(4).unwrap();
        assert_eq!(text.matches("#[rustfmt::skip]\n#[inline]\npub fn ").count(), 4);
        assert!(text.contains("#[rustfmt::skip]\n#[macro_export]\nmacro_rules! propagate_deviations {\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(7).unwrap(), render(7).unwrap());
    }
}
