//! Precomputed corpus tables.
//!
//! The corpus and each model's assignment table are row-aligned: row `i` of
//! the assignment table describes document `i` of the prepared data.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use predtopic_types::{Document, ModelKind, Settings, TopicAssignment, TopicId};

use crate::error::TopicsError;

#[derive(Debug, Deserialize)]
struct PreparedRow {
    #[serde(rename = "DOI")]
    doi: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Abstract")]
    abstract_text: String,
    #[serde(rename = "Text")]
    text: String,
    #[serde(rename = "Author Keywords", default)]
    author_keywords: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssignmentRow {
    #[serde(rename = "Top Topic ID")]
    topic_id: TopicId,
    #[serde(rename = "Top Topic Name")]
    topic_name: String,
    #[serde(rename = "Top Topic Probability", default)]
    probability: Option<f64>,
}

/// Title and description text of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDescription {
    #[serde(rename = "Topic")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// A document's assignment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub assignment: TopicAssignment,
    pub topic_name: String,
}

/// A document shown as representative of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeDocument {
    /// 1-based position in the list
    pub rank: usize,
    pub document: Document,
    /// Assignment probability, only for techniques that expose one
    pub probability: Option<f64>,
}

/// Load the prepared corpus table.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>, TopicsError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let mut documents = Vec::new();
    for (id, row) in reader.deserialize::<PreparedRow>().enumerate() {
        let row = row?;
        documents.push(
            Document::new(id, row.year, row.title, row.abstract_text, row.doi, row.text)
                .with_author_keywords(row.author_keywords.unwrap_or_default()),
        );
    }
    info!(path = %path.display(), documents = documents.len(), "Loaded corpus");
    Ok(documents)
}

/// Load a topic description table, indexed by topic id.
pub fn load_descriptions(path: impl AsRef<Path>) -> Result<Vec<TopicDescription>, TopicsError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let descriptions = reader
        .deserialize::<TopicDescription>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = descriptions.len(), "Loaded topic descriptions");
    Ok(descriptions)
}

/// Documents, assignments and descriptions for one model.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    model: ModelKind,
    documents: Arc<Vec<Document>>,
    entries: Vec<CatalogEntry>,
    descriptions: Vec<TopicDescription>,
}

impl TopicCatalog {
    /// Build a catalog. BERTopic rows always carry probability 1.0.
    pub fn new(
        model: ModelKind,
        documents: Arc<Vec<Document>>,
        entries: Vec<CatalogEntry>,
        descriptions: Vec<TopicDescription>,
    ) -> Result<Self, TopicsError> {
        if entries.len() > documents.len() {
            return Err(TopicsError::InvalidInput(format!(
                "{} assignment table has {} rows but the corpus has {} documents",
                model.display_name(),
                entries.len(),
                documents.len()
            )));
        }
        if entries.len() < documents.len() {
            warn!(
                model = %model,
                rows = entries.len(),
                documents = documents.len(),
                "Assignment table is shorter than the corpus"
            );
        }
        let entries = match model {
            ModelKind::Lda => entries,
            ModelKind::Bertopic => entries
                .into_iter()
                .map(|mut e| {
                    e.assignment.probability = 1.0;
                    e
                })
                .collect(),
        };
        Ok(Self {
            model,
            documents,
            entries,
            descriptions,
        })
    }

    /// Load a model's assignment and description tables.
    pub fn load(
        settings: &Settings,
        model: ModelKind,
        documents: Arc<Vec<Document>>,
    ) -> Result<Self, TopicsError> {
        let path = settings.assignments_path(model);
        let mut reader = csv::Reader::from_path(&path)?;
        let mut entries = Vec::new();
        for (id, row) in reader.deserialize::<AssignmentRow>().enumerate() {
            let row = row?;
            entries.push(CatalogEntry {
                assignment: TopicAssignment::new(
                    id,
                    row.topic_id,
                    row.probability.unwrap_or(1.0),
                ),
                topic_name: row.topic_name,
            });
        }
        let descriptions = load_descriptions(settings.descriptions_path(model))?;
        info!(
            model = %model,
            path = %path.display(),
            rows = entries.len(),
            descriptions = descriptions.len(),
            "Loaded topic catalog"
        );
        Self::new(model, documents, entries, descriptions)
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Most frequent topic id (lowest id on ties) and its most frequent name.
    pub fn best_topic(&self) -> Option<(TopicId, String)> {
        let mut counts: HashMap<TopicId, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.assignment.topic_id).or_insert(0) += 1;
        }
        let (topic_id, _) = counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))?;
        let name = self.topic_name(topic_id).unwrap_or_default();
        Some((topic_id, name))
    }

    /// Most frequent name among a topic's rows, first seen on ties.
    pub fn topic_name(&self, topic_id: TopicId) -> Option<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for entry in self.entries_for(topic_id) {
            match counts.iter_mut().find(|(n, _)| *n == entry.topic_name) {
                Some((_, c)) => *c += 1,
                None => counts.push((entry.topic_name.as_str(), 1)),
            }
        }
        counts
            .into_iter()
            .rev()
            .max_by_key(|(_, c)| *c)
            .map(|(n, _)| n.to_string())
    }

    /// Rows assigned to a topic, in corpus order.
    pub fn entries_for(&self, topic_id: TopicId) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.assignment.topic_id == topic_id)
    }

    /// Documents assigned to a topic, in corpus order.
    pub fn documents_for(&self, topic_id: TopicId) -> Vec<(&Document, &CatalogEntry)> {
        self.entries_for(topic_id)
            .filter_map(|e| {
                self.documents
                    .get(e.assignment.document_id)
                    .map(|d| (d, e))
            })
            .collect()
    }

    /// Up to `n` documents representing a topic.
    ///
    /// LDA lists the most probable documents first (corpus order on ties).
    /// BERTopic has no per-document probability, so it draws a seeded sample.
    pub fn representative_documents(
        &self,
        topic_id: TopicId,
        n: usize,
        seed: u64,
    ) -> Vec<RepresentativeDocument> {
        let mut rows = self.documents_for(topic_id);
        let picked: Vec<(&Document, &CatalogEntry)> = match self.model {
            ModelKind::Lda => {
                rows.sort_by(|a, b| {
                    b.1.assignment
                        .probability
                        .partial_cmp(&a.1.assignment.probability)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                rows.into_iter().take(n).collect()
            }
            ModelKind::Bertopic => {
                if rows.len() <= n {
                    rows
                } else {
                    let mut rng = StdRng::seed_from_u64(seed);
                    rand::seq::index::sample(&mut rng, rows.len(), n)
                        .into_iter()
                        .map(|i| rows[i])
                        .collect()
                }
            }
        };

        picked
            .into_iter()
            .enumerate()
            .map(|(i, (document, entry))| RepresentativeDocument {
                rank: i + 1,
                document: document.clone(),
                probability: match self.model {
                    ModelKind::Lda => Some(entry.assignment.probability),
                    ModelKind::Bertopic => None,
                },
            })
            .collect()
    }

    /// Description of a topic, by position in the description table.
    pub fn description(&self, topic_id: TopicId) -> Option<&TopicDescription> {
        self.descriptions.get(topic_id)
    }

    pub fn descriptions(&self) -> &[TopicDescription] {
        &self.descriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn documents(n: usize) -> Arc<Vec<Document>> {
        Arc::new(
            (0..n)
                .map(|i| {
                    Document::new(
                        i,
                        2018 + (i % 3) as i32,
                        format!("Title {}", i),
                        format!("Abstract {}", i),
                        format!("10.1000/{}", i),
                        format!("text {}", i),
                    )
                })
                .collect(),
        )
    }

    fn entry(document_id: usize, topic_id: TopicId, probability: f64, name: &str) -> CatalogEntry {
        CatalogEntry {
            assignment: TopicAssignment::new(document_id, topic_id, probability),
            topic_name: name.to_string(),
        }
    }

    fn lda_catalog() -> TopicCatalog {
        let entries = vec![
            entry(0, 1, 0.40, "1_network"),
            entry(1, 0, 0.90, "0_data"),
            entry(2, 1, 0.95, "1_network"),
            entry(3, 1, 0.70, "1_network"),
            entry(4, 0, 0.60, "0_data"),
            entry(5, 1, 0.70, "1_network"),
        ];
        let descriptions = vec![
            TopicDescription {
                title: "Data".to_string(),
                description: "Data topics".to_string(),
            },
            TopicDescription {
                title: "Networks".to_string(),
                description: "Network topics".to_string(),
            },
        ];
        TopicCatalog::new(ModelKind::Lda, documents(6), entries, descriptions).unwrap()
    }

    #[test]
    fn test_best_topic() {
        let catalog = lda_catalog();
        assert_eq!(catalog.best_topic(), Some((1, "1_network".to_string())));
    }

    #[test]
    fn test_best_topic_tie_prefers_lower_id() {
        let entries = vec![entry(0, 3, 1.0, "3_a"), entry(1, 2, 1.0, "2_b")];
        let catalog =
            TopicCatalog::new(ModelKind::Bertopic, documents(2), entries, Vec::new()).unwrap();
        assert_eq!(catalog.best_topic(), Some((2, "2_b".to_string())));

        let empty =
            TopicCatalog::new(ModelKind::Lda, documents(0), Vec::new(), Vec::new()).unwrap();
        assert_eq!(empty.best_topic(), None);
    }

    #[test]
    fn test_lda_representatives_by_probability() {
        let catalog = lda_catalog();
        let docs = catalog.representative_documents(1, 3, 42);
        let ids: Vec<usize> = docs.iter().map(|d| d.document.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
        assert_eq!(docs[0].rank, 1);
        assert_eq!(docs[0].probability, Some(0.95));
    }

    #[test]
    fn test_bertopic_sample_is_seeded() {
        let entries: Vec<CatalogEntry> = (0..30).map(|i| entry(i, 0, 0.2, "0_x")).collect();
        let catalog =
            TopicCatalog::new(ModelKind::Bertopic, documents(30), entries, Vec::new()).unwrap();

        let first = catalog.representative_documents(0, 10, 42);
        let second = catalog.representative_documents(0, 10, 42);
        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
        assert!(first.iter().all(|d| d.probability.is_none()));

        let mut ids: Vec<usize> = first.iter().map(|d| d.document.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_bertopic_probability_placeholder() {
        let entries = vec![entry(0, 0, 0.3, "0_x")];
        let catalog =
            TopicCatalog::new(ModelKind::Bertopic, documents(1), entries, Vec::new()).unwrap();
        assert_eq!(catalog.entries()[0].assignment.probability, 1.0);
    }

    #[test]
    fn test_fewer_rows_than_requested() {
        let catalog = lda_catalog();
        assert_eq!(catalog.representative_documents(0, 10, 42).len(), 2);
        assert!(catalog.representative_documents(9, 10, 42).is_empty());
    }

    #[test]
    fn test_too_many_assignment_rows() {
        let entries = vec![entry(0, 0, 1.0, "0"), entry(1, 0, 1.0, "0")];
        let result = TopicCatalog::new(ModelKind::Lda, documents(1), entries, Vec::new());
        assert!(matches!(result, Err(TopicsError::InvalidInput(_))));
    }

    #[test]
    fn test_description() {
        let catalog = lda_catalog();
        assert_eq!(catalog.description(1).unwrap().title, "Networks");
        assert!(catalog.description(5).is_none());
    }

    #[test]
    fn test_load_from_csv() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        let materials = dir.path().join("materials/documentation");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::create_dir_all(&materials).unwrap();

        std::fs::write(
            data.join("prepared_data.csv"),
            "DOI,Year,Title,Abstract,Text,Author Keywords\n\
             10.1/a,2020,Graph nets,\"Graphs, at scale\",graph nets,gnn\n\
             10.1/b,2021,Proteins,Folding,protein folding,\n",
        )
        .unwrap();
        std::fs::write(
            data.join("topic_probabilities_LDA-BoW.csv"),
            "Top Topic ID,Top Topic Name,Top Topic Probability\n1,1_graph,0.8\n0,0_protein,0.6\n",
        )
        .unwrap();
        std::fs::write(
            materials.join("topic_descriptions_LDA.csv"),
            "Topic,Description\nBiology,Proteins and cells\nGraphs,Graph learning\n",
        )
        .unwrap();

        let settings = Settings::default().rooted_at(dir.path());
        let documents = Arc::new(load_documents(settings.prepared_data_path()).unwrap());
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].abstract_text, "Graphs, at scale");
        assert!(documents[0].has_author_keywords());
        assert!(!documents[1].has_author_keywords());

        let catalog = TopicCatalog::load(&settings, ModelKind::Lda, documents).unwrap();
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[0].assignment.probability, 0.8);
        assert_eq!(catalog.description(0).unwrap().title, "Biology");
    }

    #[test]
    fn test_missing_table() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default().rooted_at(dir.path());
        let result = TopicCatalog::load(&settings, ModelKind::Bertopic, documents(0));
        assert!(matches!(result, Err(TopicsError::Csv(_))));
    }
}
