// File: crates/budget-chart/src/format.rs
// Summary: Brazilian-locale currency formatting for value labels and axis ticks.
// Notes:
// - Rounding is done by Rust's fixed-precision float formatting (exact decimal
//   expansion, ties to even); only the separators are localized afterwards.

const THOUSANDS_SEP: char = '.';
const DECIMAL_SEP: char = ',';

/// Full monetary value with two decimals, e.g. `1234.5` -> `"R$ 1.234,50"`.
pub fn money(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("R$ {}", localize(&format!("{value:.2}")))
}

/// Axis tick in millions with one decimal, e.g. `2_500_000.0` -> `"R$ 2,5 Mi"`.
pub fn millions(value: f64) -> String {
    if value == 0.0 {
        return "R$ 0,0 Mi".to_string();
    }
    format!("R$ {} Mi", localize(&format!("{:.1}", value / 1_000_000.0)))
}

/// Rewrite a `-1234.56`-style string with locale separators.
fn localize(fixed: &str) -> String {
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEP);
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEP);
        out.push_str(frac_part);
    }
    out
}
