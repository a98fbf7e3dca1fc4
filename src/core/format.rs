use crate::core::expression::Expression;
use crate::domain::model::Glyphs;

pub const DEFAULT_PRECISION: usize = 3;

/// Rounds numbers for display and lays out the expression line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    precision: usize,
}

impl Formatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Rounds to the configured number of fractional digits, ties away from zero.
    ///
    /// Works on the exact decimal expansion of the double, so `1.0005`
    /// (stored as `1.000499...`) rounds down to `1`.
    pub fn round(&self, value: f64) -> f64 {
        // Past 1e21 there is nothing left after the decimal point to round.
        if !value.is_finite() || value.abs() >= 1e21 {
            return value;
        }

        let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        let kept = &frac_part[..self.precision.min(frac_part.len())];
        let round_up = frac_part
            .as_bytes()
            .get(self.precision)
            .is_some_and(|digit| *digit >= b'5');

        let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
        if round_up && !increment_decimal(&mut digits) {
            digits.insert(0, b'1');
        }

        let split = digits.len() - kept.len();
        let (int_digits, frac_digits) = digits.split_at(split);
        let text = format!(
            "{}.{}0",
            String::from_utf8_lossy(int_digits),
            String::from_utf8_lossy(frac_digits)
        );
        let magnitude: f64 = text.parse().unwrap_or(value.abs());
        if value.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// `2.50000` shows as `2.5`, `1/3` as `0.333`.
    pub fn number(&self, value: f64) -> String {
        shortest(self.round(value))
    }

    /// `"<first> <glyph> <second> <equals>"`; missing parts leave empty
    /// segments but keep their separating spaces.
    pub fn expression_line(&self, expression: &Expression, glyphs: &Glyphs, append_equals: bool) -> String {
        let first = expression
            .first
            .map(|value| self.number(value))
            .unwrap_or_default();
        let second = expression
            .second
            .map(|value| self.number(value))
            .unwrap_or_default();
        let glyph = expression
            .operator
            .map(|op| glyphs.glyph(op))
            .unwrap_or("");
        let equals = if expression.is_complete() || append_equals {
            "="
        } else {
            ""
        };

        format!("{} {} {} {}", first, glyph, second, equals)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Every finite double has at most this many digits after the decimal point.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Adds one to the last digit, carrying left. Returns false on carry out.
fn increment_decimal(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Shortest decimal text for a number. Negative zero prints as `0`; magnitudes
/// from 1e21 up and below 1e-6 use exponent form (`1e+21`, `1.5e-7`).
pub fn shortest(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}
