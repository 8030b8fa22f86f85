// Plain-text terminal output.
//
// The line formats are fixed so results can be diffed and scripted against.
// Only the warning notices are colored; `colored` drops the escapes when
// stdout is not a terminal or NO_COLOR is set.

use colored::Colorize;

use crate::compare::{Comparison, LoadedDocument};
use crate::config::MAX_PRECISION;
use crate::corpus::{Document, DocumentError};
use crate::similarity::{EmptySide, Similarity, SimilarityError};

/// `File <name>: <lines> lines, <words> words, <distinct> distinct words`
pub fn stats_line(document: &Document) -> String {
    format!(
        "File {}: {} lines, {} words, {} distinct words",
        document.name, document.stats.lines, document.stats.words, document.stats.distinct_words
    )
}

/// The distance sentence, or an explanation of why there is no distance.
///
/// `precision` is capped at `MAX_PRECISION` decimal places.
pub fn distance_line(
    outcome: &Result<Similarity, SimilarityError>,
    first: &Document,
    second: &Document,
    precision: usize,
) -> String {
    match outcome {
        Ok(sim) => format!(
            "The distance between the documents is: {:.*} radians",
            precision.min(MAX_PRECISION),
            sim.radians
        ),
        Err(SimilarityError::DegenerateNorm(side)) => {
            let reason = match side {
                EmptySide::First => format!("{} has no words", first.name),
                EmptySide::Second => format!("{} has no words", second.name),
                EmptySide::Both => "neither document has any words".to_string(),
            };
            format!("The distance between the documents is: undefined ({reason})")
        }
    }
}

pub fn elapsed_line(seconds: f64) -> String {
    format!("Time elapsed: {seconds:.3} seconds")
}

/// Print one document's load notice (if any) and statistics line.
pub fn display_document(loaded: &LoadedDocument) {
    if let Some(error) = &loaded.error {
        display_load_error(error);
    }
    println!("{}", stats_line(&loaded.document));
}

fn display_load_error(error: &DocumentError) {
    println!("{}", error.to_string().yellow());
}

/// Print a whole comparison in argument order.
pub fn display_comparison(comparison: &Comparison, precision: usize, elapsed_seconds: f64) {
    display_document(&comparison.first);
    display_document(&comparison.second);

    let line = distance_line(
        &comparison.outcome,
        &comparison.first.document,
        &comparison.second.document,
        precision,
    );
    if comparison.outcome.is_ok() {
        println!("{line}");
    } else {
        println!("{}", line.red());
    }

    println!("{}", elapsed_line(elapsed_seconds));
}
