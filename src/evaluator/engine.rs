use std::collections::BTreeSet;
use serde::Serialize;
use tracing::debug;
use crate::{
    checkdigit::{parse_digit, Algorithm, CheckDigit, DeclaredCheck, ALGORITHMS},
    error::{CheckDigitError, Result},
};

/// How non-digit characters in the body are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyParsing {
    /// Non-digits count as 0
    #[default]
    Lenient,
    /// Non-digits reject the barcode
    Strict,
}

/// Result of one algorithm against one barcode
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmOutcome {
    pub algorithm: &'static str,
    pub expected: Option<CheckDigit>,
    pub matched: bool,
}

/// Outcome of every known algorithm for a single barcode
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub barcode: String,
    pub declared: Option<CheckDigit>,
    pub results: Vec<AlgorithmOutcome>,
}

impl Evaluation {
    /// Names of matching algorithms, alphabetical
    pub fn matches(&self) -> BTreeSet<&'static str> {
        self.results
            .iter()
            .filter(|o| o.matched)
            .map(|o| o.algorithm)
            .collect()
    }

    pub fn is_empty_match(&self) -> bool {
        !self.results.iter().any(|o| o.matched)
    }
}

pub struct Evaluator {
    parsing: BodyParsing,
}

impl Evaluator {
    pub fn new(parsing: BodyParsing) -> Self {
        Self { parsing }
    }

    /// Run every algorithm over the body and compare with the trailing character.
    ///
    /// A barcode shorter than two characters has no body, so nothing is
    /// attempted and nothing matches.
    pub fn evaluate(&self, barcode: &str) -> Result<Evaluation> {
        let mut chars: Vec<char> = barcode.chars().collect();
        let declared = chars.pop().and_then(DeclaredCheck::parse);

        if chars.is_empty() {
            debug!("Barcode {:?} has no body", barcode);
            return Ok(self.unattempted(barcode, declared));
        }

        let body = self.parse_body(&chars)?;

        let results = ALGORITHMS
            .iter()
            .map(|algorithm| check(algorithm, &body, declared))
            .collect();

        Ok(Evaluation {
            barcode: barcode.to_string(),
            declared,
            results,
        })
    }

    fn parse_body(&self, chars: &[char]) -> Result<Vec<u8>> {
        chars
            .iter()
            .enumerate()
            .map(|(position, &character)| match parse_digit(character) {
                Some(d) => Ok(d),
                None if self.parsing == BodyParsing::Strict => {
                    Err(CheckDigitError::InvalidBodyCharacter { position, character })
                }
                None => {
                    debug!("Treating {:?} at position {} as 0", character, position);
                    Ok(0)
                }
            })
            .collect()
    }

    fn unattempted(&self, barcode: &str, declared: Option<CheckDigit>) -> Evaluation {
        Evaluation {
            barcode: barcode.to_string(),
            declared,
            results: ALGORITHMS
                .iter()
                .map(|a| AlgorithmOutcome {
                    algorithm: a.name,
                    expected: None,
                    matched: false,
                })
                .collect(),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(BodyParsing::default())
    }
}

fn check(algorithm: &Algorithm, body: &[u8], declared: Option<CheckDigit>) -> AlgorithmOutcome {
    let expected = algorithm.expected(body);
    let matched = matches!((expected, declared), (Some(e), Some(d)) if e == d);

    debug!(
        "{}: expected {:?}, declared {:?}, matched: {}",
        algorithm.name, expected, declared, matched
    );

    AlgorithmOutcome {
        algorithm: algorithm.name,
        expected,
        matched,
    }
}

/// Names of every algorithm the barcode satisfies, non-digits in the body read as 0.
pub fn evaluate(barcode: &str) -> BTreeSet<&'static str> {
    match Evaluator::default().evaluate(barcode) {
        Ok(evaluation) => evaluation.matches(),
        Err(_) => BTreeSet::new(),
    }
}
