use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::{
    error::Result,
    evaluator::engine::Evaluation,
    utils,
};

pub const NOT_FOUND: &str = "No known check digit algorithm found for the barcode.";

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line per matching algorithm, or the not-found line.
pub fn render_text(evaluation: &Evaluation) -> String {
    if evaluation.is_empty_match() {
        return format!("{}\n", NOT_FOUND);
    }

    let mut out = String::new();
    for name in evaluation.matches() {
        out.push_str(&format!(
            "The barcode {} uses the {} check digit algorithm.\n",
            evaluation.barcode, name
        ));
    }
    out
}

/// Per-algorithm breakdown table
pub fn render_table(evaluation: &Evaluation) -> String {
    let widths = [10, 10, 10, 10];
    let declared = utils::format_check(evaluation.declared);

    let mut lines = vec![
        utils::table_border(46),
        utils::table_row(&["Algorithm", "Expected", "Declared", "Result"], &widths),
        utils::table_border(46),
    ];

    let mut outcomes: Vec<_> = evaluation.results.iter().collect();
    outcomes.sort_by_key(|o| o.algorithm);

    for outcome in outcomes {
        lines.push(utils::table_row(
            &[
                outcome.algorithm,
                &utils::format_check(outcome.expected),
                &declared,
                &utils::format_match(outcome.matched),
            ],
            &widths,
        ));
    }
    lines.push(utils::table_border(46));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    matches: Vec<&'static str>,
}

pub fn render_json(evaluation: &Evaluation) -> Result<String> {
    let report = JsonReport {
        evaluation,
        matches: evaluation.matches().into_iter().collect(),
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

/// Render an evaluation in the requested format
pub fn render(evaluation: &Evaluation, format: OutputFormat, verbose: bool) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(evaluation),
        OutputFormat::Text if verbose => Ok(format!(
            "{}\n{}",
            render_text(evaluation),
            render_table(evaluation)
        )),
        OutputFormat::Text => Ok(render_text(evaluation)),
    }
}
