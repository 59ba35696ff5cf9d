//! Common interface of the pretrained topic models.

use predtopic_types::{ModelKind, Prediction, Topic, TopicId};

use crate::dictionary::TokenLookup;
use crate::error::TopicsError;

/// A pretrained topic model that can describe its topics and classify text.
///
/// Implementations are read-only after loading and can be shared across
/// threads behind an `Arc`.
pub trait TopicModel: Send + Sync {
    /// Which technique this model implements.
    fn kind(&self) -> ModelKind;

    /// Number of topics; ids are dense in `0..num_topics()`.
    fn num_topics(&self) -> usize;

    /// Top `n` (word, weight) pairs of a topic, highest weight first.
    fn top_words(&self, topic_id: TopicId, n: usize) -> Result<Vec<(String, f64)>, TopicsError>;

    /// Classify raw text. The prediction's distribution is sorted descending.
    fn predict(&self, text: &str) -> Result<Prediction, TopicsError>;

    /// Resolves the token ids of a prediction's per-word topics. `None` for
    /// techniques without word-level assignments.
    fn token_lookup(&self) -> Option<&dyn TokenLookup> {
        None
    }

    /// Classify raw text, returning only the top topic and its probability.
    fn assign(&self, text: &str) -> Result<(TopicId, f64), TopicsError> {
        let prediction = self.predict(text)?;
        Ok((prediction.topic_id, prediction.probability))
    }

    /// Display name of a topic. Defaults to the id followed by its top four
    /// words, joined with underscores.
    fn topic_name(&self, topic_id: TopicId) -> Result<String, TopicsError> {
        let words = self.top_words(topic_id, 4)?;
        let mut name = topic_id.to_string();
        for (word, _) in words {
            name.push('_');
            name.push_str(&word);
        }
        Ok(name)
    }

    /// Topic with its name and top `n` words.
    fn topic(&self, topic_id: TopicId, n: usize) -> Result<Topic, TopicsError> {
        let name = self.topic_name(topic_id)?;
        Ok(Topic::new(topic_id, name).with_words(self.top_words(topic_id, n)?))
    }

    /// Reject topic ids outside `0..num_topics()`.
    fn check_topic(&self, topic_id: TopicId) -> Result<(), TopicsError> {
        if topic_id >= self.num_topics() {
            return Err(TopicsError::NotFound(format!(
                "topic {} ({} model has {} topics)",
                topic_id,
                self.kind().display_name(),
                self.num_topics()
            )));
        }
        Ok(())
    }
}
