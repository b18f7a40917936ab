//! LP-style ASCII rendering of the buffered model.

use std::fmt::Write as _;

use rowform_expr::VariableId;
use rowform_solver::{Direction, VarKind, VarSpec};

use crate::engine::RowSpec;

/// Render the buffered model for diagnostics. Variable labels use the
/// external zero-based ids (`x0`, `x1`, ...).
pub(crate) fn render_model(
    cols: &[VarSpec],
    rows: &[RowSpec],
    objective: &[(VariableId, f64)],
    direction: Direction,
) -> String {
    let mut lines = Vec::new();

    let sense_label = match direction {
        Direction::Minimize => "Min",
        Direction::Maximize => "Max",
    };
    lines.push(format!("{sense_label} {}", render_terms(objective)));
    lines.push(String::new());
    lines.push("s.t.".to_string());

    if rows.is_empty() {
        lines.push(" (none)".to_string());
    } else {
        for row in rows {
            lines.push(format!(
                " {} {} {}",
                render_terms(&row.entries),
                row.op.symbol(),
                format_number(row.rhs)
            ));
        }
    }

    let binary_vars: Vec<usize> = kind_group(cols, VarKind::Binary);
    let integer_vars: Vec<usize> = kind_group(cols, VarKind::Integer);
    let mut bounds_lines = Vec::new();
    for (idx, spec) in cols.iter().enumerate() {
        if spec.kind == VarKind::Binary {
            continue;
        }
        if let Some(line) = format_bounds_line(idx, spec) {
            bounds_lines.push(line);
        }
    }

    if !binary_vars.is_empty() || !integer_vars.is_empty() || !bounds_lines.is_empty() {
        lines.push(String::new());
    }
    if !binary_vars.is_empty() {
        lines.push(render_group("Binary", &binary_vars));
    }
    if !integer_vars.is_empty() {
        lines.push(render_group("Integer", &integer_vars));
    }
    if !bounds_lines.is_empty() {
        lines.push("Bounds:".to_string());
        for line in bounds_lines {
            lines.push(format!(" {line}"));
        }
    }

    lines.join("\n")
}

fn kind_group(cols: &[VarSpec], kind: VarKind) -> Vec<usize> {
    cols.iter()
        .enumerate()
        .filter(|(_, spec)| spec.kind == kind)
        .map(|(idx, _)| idx)
        .collect()
}

fn render_group(heading: &str, vars: &[usize]) -> String {
    let labels: Vec<String> = vars.iter().map(|idx| format!("x{idx}")).collect();
    format!("{heading}: {}", labels.join(" "))
}

fn render_terms(terms: &[(VariableId, f64)]) -> String {
    let nonzero: Vec<(VariableId, f64)> = terms
        .iter()
        .copied()
        .filter(|(_, coeff)| *coeff != 0.0)
        .collect();
    if nonzero.is_empty() {
        return "0".to_string();
    }

    let mut rendered = String::new();
    for (idx, (var_id, coeff)) in nonzero.iter().enumerate() {
        let negative = *coeff < 0.0;
        let abs_coeff = coeff.abs();
        let label = format!("x{}", var_id.inner());
        let body = if abs_coeff == 1.0 {
            label
        } else {
            format!("{} {label}", format_number(abs_coeff))
        };

        if idx == 0 {
            if negative {
                rendered.push('-');
            }
            rendered.push_str(&body);
        } else if negative {
            let _ = write!(rendered, " - {body}");
        } else {
            let _ = write!(rendered, " + {body}");
        }
    }
    rendered
}

fn format_bounds_line(idx: usize, spec: &VarSpec) -> Option<String> {
    let lower_finite = spec.lower.is_finite();
    let upper_finite = spec.upper.is_finite();
    if !lower_finite && !upper_finite {
        return None;
    }

    let label = format!("x{idx}");
    if lower_finite && upper_finite {
        return Some(format!(
            "{} <= {label} <= {}",
            format_number(spec.lower),
            format_number(spec.upper)
        ));
    }
    if lower_finite {
        return Some(format!("{} <= {label}", format_number(spec.lower)));
    }
    Some(format!("{label} <= {}", format_number(spec.upper)))
}

pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }

    let normalized = if value.to_bits() == (-0.0_f64).to_bits() {
        0.0
    } else {
        value
    };
    let mut rendered = format!("{normalized:.12}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    if rendered == "-0" {
        "0".to_string()
    } else {
        rendered
    }
}
