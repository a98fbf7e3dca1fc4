use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Division,
    Multiplication,
    Subtraction,
    Addition,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Division,
        Operator::Multiplication,
        Operator::Subtraction,
        Operator::Addition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Division => "division",
            Operator::Multiplication => "multiplication",
            Operator::Subtraction => "subtraction",
            Operator::Addition => "addition",
        }
    }

    /// Division by zero (of either sign) is the only way to get `Invalid`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Evaluation {
        match self {
            Operator::Division if rhs == 0.0 => Evaluation::Invalid,
            Operator::Division => Evaluation::Value(lhs / rhs),
            Operator::Multiplication => Evaluation::Value(lhs * rhs),
            Operator::Subtraction => Evaluation::Value(lhs - rhs),
            Operator::Addition => Evaluation::Value(lhs + rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Clear,
    #[serde(rename = "remove_character")]
    RemoveCharacter,
    #[serde(rename = "percentage")]
    CalculatePercentage,
    Calculate,
    ChangeSign,
    #[serde(rename = "decimal_point")]
    AddDecimalPoint,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Clear,
        Action::RemoveCharacter,
        Action::CalculatePercentage,
        Action::Calculate,
        Action::ChangeSign,
        Action::AddDecimalPoint,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Clear => "clear",
            Action::RemoveCharacter => "remove_character",
            Action::CalculatePercentage => "percentage",
            Action::Calculate => "calculate",
            Action::ChangeSign => "change_sign",
            Action::AddDecimalPoint => "decimal_point",
        }
    }
}

/// A single keypad digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Every discrete event the keypad can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Input {
    Digit(Digit),
    Operator(Operator),
    Action(Action),
}

impl Input {
    pub fn name(&self) -> String {
        match self {
            Input::Digit(d) => d.as_char().to_string(),
            Input::Operator(op) => op.name().to_string(),
            Input::Action(action) => action.name().to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Input {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::from_char(c) {
                return Ok(Input::Digit(digit));
            }
        }

        if let Some(op) = Operator::ALL.into_iter().find(|op| op.name() == s) {
            return Ok(Input::Operator(op));
        }

        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .map(Input::Action)
            .ok_or_else(|| CalcError::UnknownInput {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Input {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Input> for String {
    fn from(input: Input) -> Self {
        input.name()
    }
}

/// Result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),
    Invalid,
}

/// Display symbols for the four operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub division: String,
    pub multiplication: String,
    pub subtraction: String,
    pub addition: String,
}

impl Glyphs {
    pub fn glyph(&self, operator: Operator) -> &str {
        match operator {
            Operator::Division => &self.division,
            Operator::Multiplication => &self.multiplication,
            Operator::Subtraction => &self.subtraction,
            Operator::Addition => &self.addition,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            division: "÷".to_string(),
            multiplication: "×".to_string(),
            subtraction: "−".to_string(),
            addition: "+".to_string(),
        }
    }
}

/// The two lines currently shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub buffer: String,
    pub expression: String,
}
