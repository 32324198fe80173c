//! Textual report of a reconstructed polynomial.

use num_rational::BigRational;

/// Render the full report: one labeled line per coefficient in index
/// order, then the polynomial expression.
///
/// Values are printed exactly as the solver produced them; an
/// integer-valued coefficient prints without a denominator. Nothing is
/// re-derived through a lower-precision computation.
pub fn render(coeffs: &[BigRational]) -> String {
    let mut out = String::from("Polynomial coefficients:\n");
    for (i, coeff) in coeffs.iter().enumerate() {
        out.push_str(&format!("a{i} = {coeff}\n"));
    }
    out.push('\n');
    out.push_str("Polynomial: ");
    out.push_str(&expression(coeffs));
    out.push('\n');
    out
}

/// The human-readable `f(x) = (a_0)*x^0 + (a_1)*x^1 + ...` form.
pub fn expression(coeffs: &[BigRational]) -> String {
    let terms: Vec<String> = coeffs
        .iter()
        .enumerate()
        .map(|(i, coeff)| format!("({coeff})*x^{i}"))
        .collect();
    format!("f(x) = {}", terms.join(" + "))
}
