use crate::core::format::shortest;
use crate::domain::model::Digit;

pub const DEFAULT_VALUE: &str = "0";

/// The number currently being typed, kept as text.
///
/// Besides the default `"0"` the buffer has an empty state: the entry was just
/// consumed by the expression, and the next digit starts a fresh number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    value: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    /// Takes the text out, leaving the buffer empty.
    pub fn extract(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Numeric reading of the text; anything unparsable reads as zero.
    pub fn value(&self) -> f64 {
        parse_number(&self.value)
    }

    pub fn add_digit(&mut self, digit: Digit) {
        if self.is_empty() || self.is_default() {
            self.value.clear();
        }
        self.value.push(digit.as_char());
    }

    pub fn add_decimal_point(&mut self) {
        if self.value.contains('.') {
            return;
        }
        if self.is_empty() {
            self.reset();
        }
        self.value.push('.');
    }

    pub fn remove_last_character(&mut self) {
        self.value.pop();
        if self.is_empty() || self.value == "-" {
            self.reset();
        }
    }

    pub fn change_sign(&mut self) {
        if self.is_empty() || self.is_default() {
            return;
        }
        self.value = shortest(-self.value());
    }

    pub fn reset(&mut self) {
        self.value = DEFAULT_VALUE.to_string();
    }

    pub fn make_empty(&mut self) {
        self.value.clear();
    }

    pub fn is_default(&self) -> bool {
        self.value == DEFAULT_VALUE
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE.to_string(),
        }
    }
}

pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    fn typed(keys: &str) -> Buffer {
        let mut buffer = Buffer::new();
        for c in keys.chars() {
            match c {
                '.' => buffer.add_decimal_point(),
                c => buffer.add_digit(digit(c)),
            }
        }
        buffer
    }

    #[test]
    fn test_default_is_zero() {
        let buffer = Buffer::new();
        assert_eq!(buffer.get(), "0");
        assert!(buffer.is_default());
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_add_digit_replaces_default_and_appends_otherwise() {
        let mut buffer = Buffer::new();
        buffer.add_digit(digit('0'));
        assert_eq!(buffer.get(), "0");
        buffer.add_digit(digit('4'));
        assert_eq!(buffer.get(), "4");
        buffer.add_digit(digit('2'));
        assert_eq!(buffer.get(), "42");
    }

    #[test]
    fn test_extract_leaves_empty_and_next_digit_overwrites() {
        let mut buffer = typed("12");
        assert_eq!(buffer.extract(), "12");
        assert!(buffer.is_empty());
        assert!(!buffer.is_default());
        buffer.add_digit(digit('7'));
        assert_eq!(buffer.get(), "7");
    }

    #[test]
    fn test_add_decimal_point_is_idempotent() {
        let mut once = typed("3");
        once.add_decimal_point();
        let mut twice = typed("3");
        twice.add_decimal_point();
        twice.add_decimal_point();
        assert_eq!(once, twice);
        assert_eq!(twice.get(), "3.");

        let mut later = typed("3.1");
        later.add_decimal_point();
        assert_eq!(later.get(), "3.1");
    }

    #[test]
    fn test_add_decimal_point_on_empty_starts_from_zero() {
        let mut buffer = Buffer::new();
        buffer.make_empty();
        buffer.add_decimal_point();
        assert_eq!(buffer.get(), "0.");
        buffer.add_digit(digit('5'));
        assert_eq!(buffer.get(), "0.5");
    }

    #[test]
    fn test_remove_last_character_lands_on_default() {
        let mut buffer = typed("12.5");
        for _ in 0..10 {
            buffer.remove_last_character();
            assert!(!buffer.get().is_empty());
        }
        assert_eq!(buffer.get(), "0");
    }

    #[test]
    fn test_remove_last_character_never_leaves_lone_sign() {
        let mut buffer = typed("5");
        buffer.change_sign();
        assert_eq!(buffer.get(), "-5");
        buffer.remove_last_character();
        assert_eq!(buffer.get(), "0");
    }

    #[test]
    fn test_change_sign() {
        let mut buffer = typed("1.50");
        buffer.change_sign();
        assert_eq!(buffer.get(), "-1.5");
        buffer.change_sign();
        assert_eq!(buffer.get(), "1.5");

        let mut trailing_point = typed("5.");
        trailing_point.change_sign();
        assert_eq!(trailing_point.get(), "-5");
    }

    #[test]
    fn test_change_sign_ignores_default_and_empty() {
        let mut buffer = Buffer::new();
        buffer.change_sign();
        assert_eq!(buffer.get(), "0");

        buffer.make_empty();
        buffer.change_sign();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_value_parsing() {
        assert_eq!(typed("5.").value(), 5.0);
        assert_eq!(typed("0.25").value(), 0.25);
        let mut empty = Buffer::new();
        empty.make_empty();
        assert_eq!(empty.value(), 0.0);
    }
}
