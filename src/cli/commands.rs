use clap::Parser;
use barcode_checkdigit::evaluator::OutputFormat;

pub const USAGE: &str = "Usage: barcode-checkdigit <barcode>";

#[derive(Parser, Debug)]
#[command(name = "barcode-checkdigit")]
#[command(about = "Report which barcode check digit algorithms a code satisfies")]
#[command(version)]
#[command(after_help = "A barcode that looks like an option (for example -f or --strict) must follow `--`:\n  barcode-checkdigit -- -f")]
pub struct Cli {
    /// Barcode to check, trailing character is the check digit. Put it after `--` if it starts with `-`
    #[arg(allow_hyphen_values = true)]
    pub barcode: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show every algorithm's expected check digit
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject barcodes whose body contains non-digit characters
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_barcode() {
        let cli = Cli::try_parse_from(["barcode-checkdigit", "4006381333931"]).unwrap();
        assert_eq!(cli.barcode.as_deref(), Some("4006381333931"));
        assert!(cli.extra.is_empty());
        assert!(cli.format.is_none());
        assert!(!cli.verbose && !cli.strict);
    }

    #[test]
    fn test_missing_barcode() {
        let cli = Cli::try_parse_from(["barcode-checkdigit"]).unwrap();
        assert!(cli.barcode.is_none());
    }

    #[test]
    fn test_options_and_extra_args() {
        let cli = Cli::try_parse_from([
            "barcode-checkdigit",
            "--format",
            "json",
            "--strict",
            "-v",
            "0306406152",
            "ignored",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.strict && cli.verbose);
        assert_eq!(cli.barcode.as_deref(), Some("0306406152"));
        assert_eq!(cli.extra, vec!["ignored".to_string()]);
    }

    #[test]
    fn test_option_lookalike_after_double_dash() {
        let cli = Cli::try_parse_from(["barcode-checkdigit", "--", "-f"]).unwrap();
        assert_eq!(cli.barcode.as_deref(), Some("-f"));
        assert!(cli.format.is_none());

        let cli = Cli::try_parse_from(["barcode-checkdigit", "--", "--strict"]).unwrap();
        assert_eq!(cli.barcode.as_deref(), Some("--strict"));
        assert!(!cli.strict);
    }

    #[test]
    fn test_help_mentions_double_dash() {
        use clap::CommandFactory;
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("barcode-checkdigit -- -f"));
    }

    #[test]
    fn test_empty_barcode_is_kept() {
        let cli = Cli::try_parse_from(["barcode-checkdigit", ""]).unwrap();
        assert_eq!(cli.barcode.as_deref(), Some(""));
    }
}
