use super::CheckDigit;

/// Remainder of a weighted sum modulo 11, sign following the sum.
fn remainder(sum: i64) -> Option<CheckDigit> {
    let r = sum % 11;
    if r < 0 {
        return None;
    }
    CheckDigit::from_remainder(r as u8)
}

/// ISBN-10: weights 1, 2, 3, ... from the left.
pub fn isbn10(body: &[u8]) -> Option<CheckDigit> {
    let sum: i64 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| d as i64 * (i as i64 + 1))
        .sum();
    remainder(sum)
}

/// ISSN: weights 8, 7, 6, ... from the left.
///
/// Past the ninth position the weight turns negative; a negative sum has no
/// representable check character.
pub fn issn(body: &[u8]) -> Option<CheckDigit> {
    let sum: i64 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| d as i64 * (8 - i as i64))
        .sum();
    remainder(sum)
}
