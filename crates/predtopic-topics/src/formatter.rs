//! Markup for a classified piece of text.
//!
//! Tokens the model assigned to a topic are wrapped in that topic's color;
//! everything else passes through unchanged.

use serde::Serialize;

use predtopic_types::{Prediction, TopicId, WordTopics};

use crate::dictionary::TokenLookup;
use crate::palette::TopicColorMapper;

/// How rendered tokens are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Spacing {
    /// One space between tokens
    #[default]
    Separated,
    /// A space after every token, including the last
    Trailing,
}

impl Spacing {
    pub fn join(self, parts: &[String]) -> String {
        match self {
            Spacing::Separated => parts.join(" "),
            Spacing::Trailing => parts.iter().map(|p| format!("{} ", p)).collect(),
        }
    }
}

/// Headline lines shown above a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub title: String,
    pub subtitle: String,
}

pub fn render_headline(prediction: &Prediction) -> Headline {
    Headline {
        title: format!(
            "Prediction by {} Model = Topic {}",
            prediction.model.display_name(),
            prediction.topic_id
        ),
        subtitle: format!(
            "The text is most likely related to Topic {} with a {}% probability",
            prediction.topic_id,
            prediction.percent()
        ),
    }
}

/// Top topic of the first per-word entry whose token equals `word`.
///
/// Entries whose id the lookup cannot resolve never match. Only the first
/// match is considered, even when its topic list is empty.
fn lookup_topic<L>(word: &str, lookup: &L, per_word_topics: &[WordTopics]) -> Option<TopicId>
where
    L: TokenLookup + ?Sized,
{
    per_word_topics
        .iter()
        .find(|entry| lookup.token(entry.token_id) == Some(word))
        .and_then(WordTopics::top)
}

/// Render surface tokens, coloring each by its top-ranked topic.
pub fn render_colored_text<S, L>(
    tokens: &[S],
    lookup: &L,
    per_word_topics: &[WordTopics],
    colors: &TopicColorMapper,
    spacing: Spacing,
) -> String
where
    S: AsRef<str>,
    L: TokenLookup + ?Sized,
{
    let parts: Vec<String> = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            match lookup_topic(&token.to_lowercase(), lookup, per_word_topics) {
                Some(topic_id) => colors.colorize(token, topic_id),
                None => token.to_string(),
            }
        })
        .collect();
    spacing.join(&parts)
}

/// Legend of `num_topics` colored labels joined with `spacing`.
pub fn render_legend(colors: &TopicColorMapper, num_topics: usize, spacing: Spacing) -> String {
    spacing.join(&colors.legend_labels(num_topics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use predtopic_types::ModelKind;
    use std::collections::HashMap;

    fn vocab() -> Vec<String> {
        vec!["data".to_string(), "science".to_string()]
    }

    #[test]
    fn test_colors_only_assigned_words() {
        let per_word = vec![WordTopics::new(0, vec![2]), WordTopics::new(1, vec![])];
        let colors = TopicColorMapper::default();
        let html = render_colored_text(
            &["Data", "science", "unknownword"],
            &vocab(),
            &per_word,
            &colors,
            Spacing::Separated,
        );
        assert_eq!(
            html,
            "<span style=\"background-color: #FFFFBA;\">Data</span> science unknownword"
        );
    }

    #[test]
    fn test_trailing_spacing() {
        let per_word = vec![WordTopics::new(0, vec![2])];
        let html = render_colored_text(
            &["plain", "text"],
            &vocab(),
            &per_word,
            &TopicColorMapper::default(),
            Spacing::Trailing,
        );
        assert_eq!(html, "plain text ");
    }

    #[test]
    fn test_first_match_wins() {
        let lookup: HashMap<usize, String> =
            [(4, "graph".to_string()), (9, "graph".to_string())].into_iter().collect();
        let per_word = vec![WordTopics::new(4, vec![]), WordTopics::new(9, vec![1])];
        let html = render_colored_text(
            &["Graph"],
            &lookup,
            &per_word,
            &TopicColorMapper::default(),
            Spacing::Separated,
        );
        assert_eq!(html, "Graph");
    }

    #[test]
    fn test_unresolvable_id_is_unwrapped() {
        let per_word = vec![WordTopics::new(42, vec![0])];
        let html = render_colored_text(
            &["data"],
            &vocab(),
            &per_word,
            &TopicColorMapper::default(),
            Spacing::Separated,
        );
        assert_eq!(html, "data");
    }

    #[test]
    fn test_top_topic_wraps_palette() {
        let per_word = vec![WordTopics::new(1, vec![12, 0])];
        let colors = TopicColorMapper::for_model(ModelKind::Lda);
        let html =
            render_colored_text(&["Science"], &vocab(), &per_word, &colors, Spacing::Separated);
        assert_eq!(html, colors.colorize("Science", 1));
    }

    #[test]
    fn test_empty_tokens() {
        let tokens: [&str; 0] = [];
        let colors = TopicColorMapper::default();
        assert_eq!(
            render_colored_text(&tokens, &vocab(), &[], &colors, Spacing::Separated),
            ""
        );
    }

    #[test]
    fn test_legend_spacing() {
        let colors = TopicColorMapper::default();
        let separated = render_legend(&colors, 3, Spacing::Separated);
        assert_eq!(separated, colors.render_legend(3));
        assert_eq!(separated.matches("<span").count(), 3);
        let trailing = render_legend(&colors, 3, Spacing::Trailing);
        assert_eq!(trailing, format!("{} ", separated));
        assert_eq!(render_legend(&colors, 0, Spacing::Separated), "");
    }

    #[test]
    fn test_headline() {
        let prediction = Prediction::new(ModelKind::Lda, 3, 0.73214);
        let headline = render_headline(&prediction);
        assert_eq!(headline.title, "Prediction by LDA Model = Topic 3");
        assert_eq!(
            headline.subtitle,
            "The text is most likely related to Topic 3 with a 73.21% probability"
        );

        let headline = render_headline(&Prediction::new(ModelKind::Bertopic, 0, 1.0));
        assert_eq!(headline.title, "Prediction by BERTopic Model = Topic 0");
        assert!(headline.subtitle.ends_with("100.00% probability"));
    }
}
