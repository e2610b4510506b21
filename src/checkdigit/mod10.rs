use super::CheckDigit;

/// Alternating 1/3 weighted mod-10 checksum, first body digit weighted 1.
///
/// Body length is not enforced, so the four standards sharing this scheme
/// always agree.
pub fn weighted_mod10(body: &[u8]) -> u8 {
    let mut sum = 0u64;
    for (i, &d) in body.iter().enumerate() {
        if (i % 2) == 0 {
            sum += d as u64;
        } else {
            sum += d as u64 * 3;
        }
    }
    ((10 - (sum % 10)) % 10) as u8
}

pub fn upc(body: &[u8]) -> Option<CheckDigit> {
    Some(CheckDigit::Digit(weighted_mod10(body)))
}

pub fn ean13(body: &[u8]) -> Option<CheckDigit> {
    Some(CheckDigit::Digit(weighted_mod10(body)))
}

pub fn ean8(body: &[u8]) -> Option<CheckDigit> {
    Some(CheckDigit::Digit(weighted_mod10(body)))
}

pub fn isbn13(body: &[u8]) -> Option<CheckDigit> {
    Some(CheckDigit::Digit(weighted_mod10(body)))
}
