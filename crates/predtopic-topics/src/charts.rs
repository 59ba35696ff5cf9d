//! Serializable chart data for topic pages.
//!
//! Each builder returns plain data ready to be written as JSON and drawn by
//! any front end.

use std::collections::BTreeMap;

use serde::Serialize;

use predtopic_types::{topic_label, TopicDistribution, TopicId};

use crate::catalog::TopicCatalog;
use crate::error::TopicsError;
use crate::model::TopicModel;
use crate::palette::TopicColorMapper;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Documents per year for one topic, years ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicOverTime {
    pub topic_id: TopicId,
    pub title: String,
    pub points: Vec<YearCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart, bars ascending by value so the largest is on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub title: String,
    /// (word, weight), heaviest first
    pub words: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub topic_id: TopicId,
    pub label: String,
    pub probability: f64,
    pub color: String,
}

/// Single stacked bar, one segment per topic of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBar {
    pub segments: Vec<Segment>,
}

pub fn topic_over_time(catalog: &TopicCatalog, topic_id: TopicId) -> TopicOverTime {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for (document, _) in catalog.documents_for(topic_id) {
        *years.entry(document.year).or_insert(0) += 1;
    }
    TopicOverTime {
        topic_id,
        title: format!("Topic {} Over The Years", topic_id),
        points: years
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}

/// Top `n` words of a topic as an ascending bar chart.
pub fn top_words_chart(
    model: &dyn TopicModel,
    topic_id: TopicId,
    n: usize,
) -> Result<BarChart, TopicsError> {
    let mut bars: Vec<Bar> = model
        .top_words(topic_id, n)?
        .into_iter()
        .map(|(label, value)| Bar { label, value })
        .collect();
    bars.reverse();
    Ok(BarChart {
        title: format!("Top {} Words of Topic {}", n, topic_id),
        bars,
    })
}

pub fn word_cloud(
    model: &dyn TopicModel,
    topic_id: TopicId,
    n: usize,
) -> Result<WordCloud, TopicsError> {
    Ok(WordCloud {
        title: format!("Top {} Words of Topic {} in a Wordcloud", n, topic_id),
        words: model.top_words(topic_id, n)?,
    })
}

pub fn distribution_bar(
    distribution: &TopicDistribution,
    colors: &TopicColorMapper,
) -> DistributionBar {
    DistributionBar {
        segments: distribution
            .entries()
            .iter()
            .map(|(topic_id, probability)| Segment {
                topic_id: *topic_id,
                label: topic_label(*topic_id),
                probability: *probability,
                color: colors.color_for(*topic_id).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use predtopic_types::{Document, ModelKind, Prediction, TopicAssignment};
    use std::sync::Arc;

    struct FixedModel;

    impl TopicModel for FixedModel {
        fn kind(&self) -> ModelKind {
            ModelKind::Lda
        }

        fn num_topics(&self) -> usize {
            1
        }

        fn top_words(
            &self,
            topic_id: TopicId,
            n: usize,
        ) -> Result<Vec<(String, f64)>, TopicsError> {
            self.check_topic(topic_id)?;
            Ok([("data", 0.5), ("model", 0.3), ("graph", 0.2)]
                .iter()
                .take(n)
                .map(|(w, s)| (w.to_string(), *s))
                .collect())
        }

        fn predict(&self, _text: &str) -> Result<Prediction, TopicsError> {
            Ok(Prediction::new(ModelKind::Lda, 0, 1.0))
        }
    }

    #[test]
    fn test_topic_over_time() {
        let documents: Vec<Document> = [2020, 2019, 2020, 2021]
            .iter()
            .enumerate()
            .map(|(i, y)| {
                Document::new(i, *y, String::new(), String::new(), String::new(), String::new())
            })
            .collect();
        let entries = vec![
            CatalogEntry {
                assignment: TopicAssignment::new(0, 4, 0.9),
                topic_name: "4_x".to_string(),
            },
            CatalogEntry {
                assignment: TopicAssignment::new(1, 4, 0.9),
                topic_name: "4_x".to_string(),
            },
            CatalogEntry {
                assignment: TopicAssignment::new(2, 4, 0.9),
                topic_name: "4_x".to_string(),
            },
            CatalogEntry {
                assignment: TopicAssignment::new(3, 1, 0.9),
                topic_name: "1_y".to_string(),
            },
        ];
        let catalog =
            TopicCatalog::new(ModelKind::Lda, Arc::new(documents), entries, Vec::new()).unwrap();

        let chart = topic_over_time(&catalog, 4);
        assert_eq!(chart.title, "Topic 4 Over The Years");
        assert_eq!(
            chart.points,
            vec![
                YearCount {
                    year: 2019,
                    count: 1
                },
                YearCount {
                    year: 2020,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_top_words_ascending() {
        let chart = top_words_chart(&FixedModel, 0, 10).unwrap();
        assert_eq!(chart.title, "Top 10 Words of Topic 0");
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["graph", "model", "data"]);
        assert!(top_words_chart(&FixedModel, 3, 10).is_err());
    }

    #[test]
    fn test_word_cloud() {
        let cloud = word_cloud(&FixedModel, 0, 2).unwrap();
        assert_eq!(cloud.title, "Top 2 Words of Topic 0 in a Wordcloud");
        assert_eq!(cloud.words.len(), 2);
        assert_eq!(cloud.words[0].0, "data");
    }

    #[test]
    fn test_distribution_bar() {
        let distribution = TopicDistribution::new(vec![(3, 0.2), (1, 0.7)]);
        let bar = distribution_bar(&distribution, &TopicColorMapper::default());
        assert_eq!(bar.segments.len(), 2);
        assert_eq!(bar.segments[0].topic_id, 1);
        assert_eq!(bar.segments[0].label, "Topic 1");
        assert_eq!(bar.segments[0].color, "#FFDFBA");

        let json = serde_json::to_value(&bar).unwrap();
        assert_eq!(json["segments"][1]["color"], "#BAFFC9");
    }
}
