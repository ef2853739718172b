use std::fmt;
use std::str::FromStr;

use crate::error::ParseOperatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    Addition,
    Subtraction,
    Multiplication,
}

impl Operator {
    /// All operators in button order
    pub const ALL: [Operator; 3] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
    ];

    /// Symbol placed between operands in the equation
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
        }
    }

    /// Glyph shown on the operator button
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Addition => "➕",
            Operator::Subtraction => "➖",
            Operator::Multiplication => "✖️",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Addition => "addition",
            Operator::Subtraction => "subtraction",
            Operator::Multiplication => "multiplication",
        }
    }

    /// Next operator in button order, wrapping around
    pub fn next(self) -> Operator {
        match self {
            Operator::Addition => Operator::Subtraction,
            Operator::Subtraction => Operator::Multiplication,
            Operator::Multiplication => Operator::Addition,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" | "+" => Ok(Operator::Addition),
            "subtraction" | "-" => Ok(Operator::Subtraction),
            "multiplication" | "*" | "x" => Ok(Operator::Multiplication),
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut op = Operator::Addition;
        for expected in Operator::ALL.iter().skip(1).chain(Operator::ALL.iter().take(1)) {
            op = op.next();
            assert_eq!(op, *expected);
        }
    }

    #[test]
    fn test_from_str_accepts_names_and_symbols() {
        assert_eq!("Addition".parse::<Operator>(), Ok(Operator::Addition));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtraction));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiplication));
        assert!("division".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Operator::Multiplication.to_string(), "*");
    }
}
