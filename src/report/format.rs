//! Reporting utilities: fitted-surface errors and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use nalgebra::DMatrix;

use crate::domain::{SurfaceFit, Term};

/// How well the fitted surface reproduces the observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceErrors {
    pub n_points: usize,
    pub rmse: f64,
    pub max_abs: f64,
}

/// Compare the fitted surface against `z` on the original grid.
pub fn surface_errors(
    fit: &SurfaceFit,
    xs: &[f64],
    ys: &[f64],
    z: &DMatrix<f64>,
) -> SurfaceErrors {
    let fitted = fit.evaluate_grid(xs, ys);
    let diff = z - fitted;
    let n_points = diff.len();
    let rmse = if n_points == 0 {
        0.0
    } else {
        (diff.norm_squared() / n_points as f64).sqrt()
    };
    let max_abs = diff.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    SurfaceErrors {
        n_points,
        rmse,
        max_abs,
    }
}

/// Format the fit summary (degree, diagnostics, coefficient grid).
pub fn format_fit_summary(fit: &SurfaceFit, errors: &SurfaceErrors) -> String {
    let mut out = String::new();
    let degree = &fit.degree;

    out.push_str("=== surf - 2D polynomial least-squares fit ===\n");
    out.push_str(&format!(
        "Degree: kx={} ky={} order={}\n",
        degree.kx,
        degree.ky,
        degree
            .order
            .map(|o| o.to_string())
            .unwrap_or_else(|| "none".to_string()),
    ));
    out.push_str(&format!(
        "Terms: {} | points: {} | rank: {}{}\n",
        degree.term_count(),
        errors.n_points,
        fit.rank,
        if fit.is_rank_deficient() {
            " (rank-deficient)"
        } else {
            ""
        },
    ));
    match fit.residuals {
        Some(sse) => out.push_str(&format!("Residual SS: {sse:.6e}\n")),
        None => out.push_str("Residual SS: n/a\n"),
    }
    out.push_str(&format!(
        "Grid error: RMSE={:.6e} max|e|={:.6e}\n",
        errors.rmse, errors.max_abs
    ));
    out.push_str(&format!("Singular values: {}\n", fmt_vec(&fit.singular_values)));
    if let Some(cond) = fit.condition_number() {
        out.push_str(&format!("Condition number: {cond:.3e}\n"));
    }

    out.push_str("\nCoefficients (row = y power, column = x power):\n");
    out.push_str(&format_coefficients(fit));
    out
}

/// Coefficient grid as a table; terms above the order cap are shown as `-`.
pub fn format_coefficients(fit: &SurfaceFit) -> String {
    let degree = &fit.degree;
    let mut out = String::new();

    out.push_str(&format!("{:>6}", ""));
    for i in 0..=degree.kx {
        out.push_str(&format!(" {:>14}", format!("x^{i}")));
    }
    out.push('\n');

    for j in 0..=degree.ky {
        out.push_str(&format!("{:>6}", format!("y^{j}")));
        for i in 0..=degree.kx {
            let cell = match fit.coefficient(i, j) {
                Some(c) if degree.includes(Term { i, j }) => format!("{c:.6e}"),
                _ => "-".to_string(),
            };
            out.push_str(&format!(" {cell:>14}"));
        }
        out.push('\n');
    }
    out
}

/// Largest absolute coefficient difference against a known truth.
pub fn max_coefficient_error(fit: &SurfaceFit, truth: &[f64]) -> f64 {
    fit.coefficients
        .iter()
        .zip(truth.iter())
        .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.4e}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SurfaceDegree;

    fn plane_fit() -> SurfaceFit {
        SurfaceFit {
            degree: SurfaceDegree::new(1, 1, Some(1)).unwrap(),
            coefficients: vec![2.0, 3.0, 5.0, 0.0],
            residuals: None,
            rank: 3,
            singular_values: vec![4.0, 2.0, 1.0, 0.0],
        }
    }

    #[test]
    fn surface_errors_zero_for_exact_fit() {
        let fit = plane_fit();
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0];
        let z = DMatrix::from_fn(2, 3, |a, b| 2.0 + 3.0 * xs[b] + 5.0 * ys[a]);
        let e = surface_errors(&fit, &xs, &ys, &z);
        assert_eq!(e.n_points, 6);
        assert!(e.rmse < 1e-12);
        assert!(e.max_abs < 1e-12);

        let mut shifted = z.clone();
        shifted[(1, 2)] += 0.5;
        let e = surface_errors(&fit, &xs, &ys, &shifted);
        assert!((e.max_abs - 0.5).abs() < 1e-12);
    }

    #[test]
    fn summary_marks_excluded_terms_and_rank() {
        let fit = plane_fit();
        let errors = SurfaceErrors {
            n_points: 9,
            rmse: 0.0,
            max_abs: 0.0,
        };
        let text = format_fit_summary(&fit, &errors);
        assert!(text.contains("order=1"), "{text}");
        assert!(text.contains("rank: 3 (rank-deficient)"), "{text}");
        assert!(text.contains("Residual SS: n/a"), "{text}");

        let table = format_coefficients(&fit);
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("   y^1"), "{table}");
        assert!(last.trim_end().ends_with('-'), "{table}");
    }

    #[test]
    fn coefficient_error_against_truth() {
        let fit = plane_fit();
        assert!((max_coefficient_error(&fit, &[2.0, 3.0, 4.5, 0.0]) - 0.5).abs() < 1e-12);
    }
}
