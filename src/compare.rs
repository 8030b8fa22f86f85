// Comparison pipeline: load two documents, then measure the angle between them.
//
// Loading is the only part that touches the filesystem. When `parallel` is
// set, each document is aggregated on its own blocking task; the tasks share
// nothing but the loader, and results always come back in argument order.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::MissingPolicy;
use crate::corpus::{Document, DocumentError, DocumentLoader};
use crate::similarity::{similarity, Similarity, SimilarityError};

/// A document ready for comparison, plus the error that emptied it, if any.
#[derive(Debug)]
pub struct LoadedDocument {
    pub document: Document,
    pub error: Option<DocumentError>,
}

/// Everything the output layer needs to report one run.
#[derive(Debug)]
pub struct Comparison {
    pub first: LoadedDocument,
    pub second: LoadedDocument,
    pub outcome: Result<Similarity, SimilarityError>,
}

impl Comparison {
    /// Compare two already loaded documents.
    pub fn new(first: LoadedDocument, second: LoadedDocument) -> Self {
        let outcome = similarity(&first.document.frequencies, &second.document.frequencies);
        match &outcome {
            Ok(sim) => info!(cosine = sim.cosine, radians = sim.radians, "Compared documents"),
            Err(e) => warn!(error = %e, "Distance is undefined"),
        }
        Self {
            first,
            second,
            outcome,
        }
    }
}

/// Load both documents, applying `policy` to any that cannot be read.
pub async fn load_pair(
    loader: Arc<dyn DocumentLoader>,
    first: PathBuf,
    second: PathBuf,
    policy: MissingPolicy,
    parallel: bool,
) -> Result<(LoadedDocument, LoadedDocument)> {
    let (a, b) = if parallel {
        let loader_b = Arc::clone(&loader);
        let task_a = {
            let path = first.clone();
            tokio::task::spawn_blocking(move || loader.load(&path))
        };
        let task_b = {
            let path = second.clone();
            tokio::task::spawn_blocking(move || loader_b.load(&path))
        };
        let (a, b) = tokio::try_join!(task_a, task_b).context("document loader task failed")?;
        (a, b)
    } else {
        (loader.load(&first), loader.load(&second))
    };

    Ok((resolve(first, a, policy)?, resolve(second, b, policy)?))
}

/// Turn a load result into a comparable document, or abort under `Fail`.
pub fn resolve(
    path: PathBuf,
    result: Result<Document, DocumentError>,
    policy: MissingPolicy,
) -> Result<LoadedDocument> {
    match result {
        Ok(document) => Ok(LoadedDocument {
            document,
            error: None,
        }),
        Err(e) => match policy {
            MissingPolicy::Fail => {
                Err(anyhow::Error::new(e).context("cannot compare without both documents"))
            }
            MissingPolicy::Skip => {
                warn!(path = %path.display(), error = %e, "Treating unreadable document as empty");
                Ok(LoadedDocument {
                    document: Document::missing(path.to_string_lossy()),
                    error: Some(e),
                })
            }
        },
    }
}
