//! Guard predicates shared by the value types and the grid resolver.
//!
//! Inputs are typed, so "is a number" means a finite `f64`: `NaN` and the
//! infinities are the only non-numbers an `f64` can carry. Strings are never
//! treated as numbers; only [`is_percent_string`] looks at text.

/// Is the value a finite number.
pub fn is_number(value: f64) -> bool {
    value.is_finite()
}

/// Is the value a finite number greater than or equal to zero.
pub fn is_positive_number(value: f64) -> bool {
    is_number(value) && value >= 0.0
}

/// Is the value a whole number greater than or equal to zero.
pub fn is_positive_integer(value: f64) -> bool {
    is_positive_number(value) && value.fract() == 0.0
}

/// Is the value a number followed by a single percent sign, for example `"44%"`.
///
/// Matches `^(\d+|\d+\.\d+)%$`: no sign, no surrounding whitespace, no
/// trailing dot, and exactly one `%`.
pub fn is_percent_string(value: &str) -> bool {
    parse_percent(value).is_some()
}

/// Parse a percent string into its numeric part, so `"33.9%"` gives `33.9`.
pub fn parse_percent(value: &str) -> Option<f64> {
    let number = value.strip_suffix('%')?;
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }

    number.parse().ok()
}
