//! Check digit values and the fixed table of known algorithms.
//!
//! Every algorithm works over the already-parsed body digits and yields the
//! check character it expects. Mod-11 schemes may expect the letter `X`, so
//! the result is a tagged [`CheckDigit`] rather than a bare integer.

pub mod mod10;
pub mod mod11;

use serde::{Serialize, Serializer};
use std::fmt;

/// Expected or declared check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    /// Decimal check digit, always in `0..=9`
    Digit(u8),
    /// Mod-11 remainder of 10, written as `X`
    LetterX,
}

impl CheckDigit {
    /// Build a check digit from a value in `0..=10`; 10 becomes `X`.
    pub fn from_remainder(value: u8) -> Option<Self> {
        match value {
            0..=9 => Some(CheckDigit::Digit(value)),
            10 => Some(CheckDigit::LetterX),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CheckDigit::Digit(d) => char::from(b'0' + d),
            CheckDigit::LetterX => 'X',
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for CheckDigit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Trailing character of a barcode, read as the check it declares.
pub struct DeclaredCheck;

impl DeclaredCheck {
    /// `'0'..='9'` and `'X'` are the only characters a check can be.
    pub fn parse(c: char) -> Option<CheckDigit> {
        match c {
            'X' => Some(CheckDigit::LetterX),
            _ => parse_digit(c).map(CheckDigit::Digit),
        }
    }
}

/// Value of a single ASCII decimal digit.
pub fn parse_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// A named check digit formula over body digits.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub compute: fn(&[u8]) -> Option<CheckDigit>,
}

impl Algorithm {
    pub fn expected(&self, body: &[u8]) -> Option<CheckDigit> {
        (self.compute)(body)
    }
}

pub const UPC: &str = "UPC";
pub const EAN_13: &str = "EAN-13";
pub const EAN_8: &str = "EAN-8";
pub const ISBN_10: &str = "ISBN-10";
pub const ISBN_13: &str = "ISBN-13";
pub const ISSN: &str = "ISSN";

pub static ALGORITHMS: [Algorithm; 6] = [
    Algorithm { name: UPC, compute: mod10::upc },
    Algorithm { name: EAN_13, compute: mod10::ean13 },
    Algorithm { name: EAN_8, compute: mod10::ean8 },
    Algorithm { name: ISBN_10, compute: mod11::isbn10 },
    Algorithm { name: ISBN_13, compute: mod10::isbn13 },
    Algorithm { name: ISSN, compute: mod11::issn },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_check_parsing() {
        assert_eq!(DeclaredCheck::parse('0'), Some(CheckDigit::Digit(0)));
        assert_eq!(DeclaredCheck::parse('9'), Some(CheckDigit::Digit(9)));
        assert_eq!(DeclaredCheck::parse('X'), Some(CheckDigit::LetterX));
        assert_eq!(DeclaredCheck::parse('x'), None);
        assert_eq!(DeclaredCheck::parse('Q'), None);
        assert_eq!(DeclaredCheck::parse('٣'), None);
    }

    #[test]
    fn test_from_remainder() {
        assert_eq!(CheckDigit::from_remainder(7), Some(CheckDigit::Digit(7)));
        assert_eq!(CheckDigit::from_remainder(10), Some(CheckDigit::LetterX));
        assert_eq!(CheckDigit::from_remainder(11), None);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(CheckDigit::Digit(4).to_string(), "4");
        assert_eq!(CheckDigit::LetterX.to_string(), "X");
        assert_eq!(serde_json::to_string(&CheckDigit::LetterX).unwrap(), "\"X\"");
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        let mut names: Vec<_> = ALGORITHMS.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&ISSN));
    }
}
