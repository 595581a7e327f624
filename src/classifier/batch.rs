use super::{ClassificationResult, Classifier, ClassifierError};
use crate::extractors::ContainerEvidence;
use crate::knowledge::KnowledgeBase;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::debug;

/// Classifies many containers across blocking worker tasks.
///
/// Classification is CPU-only and independent per container, so the input
/// is split into contiguous chunks, one per worker, and the results are
/// stitched back together in input order.
pub struct BatchClassifier {
    kb: Arc<KnowledgeBase>,
}

impl BatchClassifier {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub async fn classify(
        &self,
        containers: &[ContainerEvidence],
        workers: usize,
    ) -> Result<Vec<ClassificationResult>, ClassifierError> {
        if containers.is_empty() {
            return Ok(Vec::new());
        }

        let workers = workers.clamp(1, containers.len());
        let chunk_size = (containers.len() + workers - 1) / workers;
        let chunk_count = (containers.len() + chunk_size - 1) / chunk_size;
        debug!(
            containers = containers.len(),
            workers,
            chunk_size,
            "Starting batch classification"
        );

        let mut tasks = JoinSet::new();
        for (index, chunk) in containers.chunks(chunk_size).enumerate() {
            let chunk = chunk.to_vec();
            let kb = Arc::clone(&self.kb);
            tasks.spawn_blocking(move || {
                let classifier = Classifier::new(kb);
                (index, classifier.classify_all(&chunk))
            });
        }

        let mut slots: Vec<Option<Vec<ClassificationResult>>> =
            (0..chunk_count).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            let (index, results) = joined.map_err(|e| ClassifierError::Worker(e.to_string()))?;
            slots[index] = Some(results);
        }

        Ok(slots.into_iter().flatten().flatten().collect())
    }
}
