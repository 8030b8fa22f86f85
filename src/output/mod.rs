// Output formatting: terminal lines and the JSON report.

pub mod terminal;

use serde::Serialize;

use crate::compare::{Comparison, LoadedDocument};
use crate::corpus::DocumentStats;

/// Machine-readable summary of one comparison.
#[derive(Debug, Serialize)]
pub struct Report {
    pub documents: Vec<DocumentReport>,
    pub cosine: Option<f64>,
    pub distance_radians: Option<f64>,
    /// Set when the distance is undefined
    pub undefined_reason: Option<String>,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub name: String,
    pub found: bool,
    #[serde(flatten)]
    pub stats: DocumentStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&LoadedDocument> for DocumentReport {
    fn from(loaded: &LoadedDocument) -> Self {
        let doc = &loaded.document;
        Self {
            name: doc.name.clone(),
            found: doc.found,
            stats: doc.stats,
            error: loaded.error.as_ref().map(|e| e.to_string()),
        }
    }
}

impl Report {
    pub fn new(comparison: &Comparison, elapsed_seconds: f64) -> Self {
        let (cosine, distance_radians, undefined_reason) = match &comparison.outcome {
            Ok(sim) => (Some(sim.cosine), Some(sim.radians), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        Self {
            documents: vec![
                DocumentReport::from(&comparison.first),
                DocumentReport::from(&comparison.second),
            ],
            cosine,
            distance_radians,
            undefined_reason,
            elapsed_seconds,
        }
    }
}

/// Print the comparison as a single pretty-printed JSON object.
pub fn display_json(comparison: &Comparison, elapsed_seconds: f64) -> anyhow::Result<()> {
    let report = Report::new(comparison, elapsed_seconds);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
