use colored::Colorize;
use crate::checkdigit::CheckDigit;

/// Format an optional check digit, `-` when there is none
pub fn format_check(check: Option<CheckDigit>) -> String {
    match check {
        Some(c) => c.to_string(),
        None => "-".to_string(),
    }
}

/// Match marker with color
pub fn format_match(matched: bool) -> String {
    if matched {
        "✓ match".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Table border line
pub fn table_border(width: usize) -> String {
    "=".repeat(width)
}

/// Table row with padded columns
pub fn table_row(columns: &[&str], widths: &[usize]) -> String {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_check() {
        assert_eq!(format_check(Some(CheckDigit::Digit(3))), "3");
        assert_eq!(format_check(Some(CheckDigit::LetterX)), "X");
        assert_eq!(format_check(None), "-");
    }

    #[test]
    fn test_table_row_pads_and_trims() {
        assert_eq!(table_row(&["UPC", "7"], &[10, 4]), "UPC         7");
        assert_eq!(table_row(&["a", "b", "c"], &[2]), "a");
        assert_eq!(table_border(3), "===");
    }
}
