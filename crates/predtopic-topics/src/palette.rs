//! Topic index to color mapping.
//!
//! Topic ids wrap around the palette with modulo, so any id maps to a color.

use predtopic_types::{topic_label, ModelKind, TopicId};

/// Pastel palette, in topic order.
pub static PASTEL_PALETTE: [&str; 23] = [
    "#FFB3BA", // pink
    "#FFDFBA", // orange
    "#FFFFBA", // yellow
    "#BAFFC9", // green
    "#BAE1FF", // blue
    "#FFC8DD", // magenta
    "#E2F0CB", // lime
    "#C9D6FF", // lavender
    "#FFABAB", // coral
    "#FFB5E8", // fuchsia
    "#B28DFF", // purple
    "#D4A5A5", // rose
    "#C6A5FF", // lilac
    "#9AD0EC", // sky blue
    "#FFC3A0", // peach
    "#B5EAD7", // mint
    "#FF9CEE", // pink purple
    "#FFCCF9", // light pink
    "#CAFFBF", // lime green
    "#FFD6A5", // apricot
    "#FDFFB6", // lemon
    "#FFC6FF", // orchid
    "#9BF6FF", // light cyan
];

/// Palette size of the LDA model, one color per topic.
pub const LDA_PALETTE_LEN: usize = 11;

/// Maps topic ids to palette colors.
#[derive(Debug, Clone, Copy)]
pub struct TopicColorMapper {
    palette: &'static [&'static str],
}

impl Default for TopicColorMapper {
    fn default() -> Self {
        Self::new(&PASTEL_PALETTE)
    }
}

impl TopicColorMapper {
    /// Create a mapper over a custom palette. An empty palette falls back to
    /// the full pastel palette.
    pub fn new(palette: &'static [&'static str]) -> Self {
        if palette.is_empty() {
            return Self {
                palette: &PASTEL_PALETTE,
            };
        }
        Self { palette }
    }

    /// Palette used for a model's charts and markup.
    pub fn for_model(model: ModelKind) -> Self {
        match model {
            ModelKind::Lda => Self::new(&PASTEL_PALETTE[..LDA_PALETTE_LEN]),
            ModelKind::Bertopic => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Color for a topic id, wrapping past the end of the palette.
    pub fn color_for(&self, topic_id: TopicId) -> &'static str {
        self.palette[topic_id % self.palette.len()]
    }

    /// Wrap text in a span with the topic's background color.
    pub fn colorize(&self, text: &str, topic_id: TopicId) -> String {
        format!(
            "<span style=\"background-color: {};\">{}</span>",
            self.color_for(topic_id),
            text
        )
    }

    /// One colored `Topic i` label per topic, ascending, space separated.
    pub fn render_legend(&self, num_topics: usize) -> String {
        self.legend_labels(num_topics).join(" ")
    }

    /// Legend labels before joining.
    pub fn legend_labels(&self, num_topics: usize) -> Vec<String> {
        (0..num_topics)
            .map(|id| self.colorize(&topic_label(id), id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_wraps() {
        let mapper = TopicColorMapper::default();
        assert_eq!(mapper.len(), 23);
        assert_eq!(mapper.color_for(0), "#FFB3BA");
        assert_eq!(mapper.color_for(22), "#9BF6FF");
        for t in 0..100 {
            assert_eq!(mapper.color_for(t), mapper.color_for(t % mapper.len()));
        }
        assert_eq!(mapper.color_for(23), "#FFB3BA");
    }

    #[test]
    fn test_lda_palette() {
        let mapper = TopicColorMapper::for_model(ModelKind::Lda);
        assert_eq!(mapper.len(), 11);
        assert_eq!(mapper.color_for(11), mapper.color_for(0));
        assert_eq!(mapper.color_for(10), "#B28DFF");
        assert_eq!(TopicColorMapper::for_model(ModelKind::Bertopic).len(), 23);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mapper = TopicColorMapper::new(&[]);
        assert_eq!(mapper.len(), 23);
        assert!(!mapper.is_empty());
    }

    #[test]
    fn test_colorize() {
        let mapper = TopicColorMapper::default();
        assert_eq!(
            mapper.colorize("Data", 2),
            "<span style=\"background-color: #FFFFBA;\">Data</span>"
        );
    }

    #[test]
    fn test_render_legend() {
        let mapper = TopicColorMapper::default();
        let legend = mapper.render_legend(3);
        assert_eq!(legend.matches("<span").count(), 3);
        let first = legend.find("Topic 0").unwrap();
        let second = legend.find("Topic 1").unwrap();
        let third = legend.find("Topic 2").unwrap();
        assert!(first < second && second < third);
        assert!(!legend.ends_with(' '));
        assert!(mapper.render_legend(0).is_empty());
    }

    #[test]
    fn test_legend_wraps_past_palette() {
        let mapper = TopicColorMapper::for_model(ModelKind::Lda);
        let labels = mapper.legend_labels(13);
        assert_eq!(labels.len(), 13);
        assert!(labels[12].contains(mapper.color_for(1)));
    }
}
