//! Topic pages.
//!
//! A [`DashboardView`] records what the user is looking at. It is a plain
//! value: every transition returns a new view and [`render_page`] turns a
//! view plus the loaded [`Dashboard`] into a [`TopicPage`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use predtopic_text::surface_tokens;
use predtopic_types::{ModelKind, Prediction, Settings, TopicId};

use crate::bertopic::BertopicModel;
use crate::catalog::{load_documents, RepresentativeDocument, TopicCatalog, TopicDescription};
use crate::charts::{
    distribution_bar, top_words_chart, topic_over_time, word_cloud, BarChart, DistributionBar,
    TopicOverTime, WordCloud,
};
use crate::config::PageConfig;
use crate::error::TopicsError;
use crate::formatter::{render_colored_text, render_headline, render_legend, Headline, Spacing};
use crate::lda::LdaModel;
use crate::model::TopicModel;
use crate::palette::TopicColorMapper;

/// Text submitted for classification and the model's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub text: String,
    pub prediction: Prediction,
}

/// Current model and topic selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub model: ModelKind,
    /// `None` shows the model's best topic
    pub topic_id: Option<TopicId>,
    pub submission: Option<Submission>,
}

impl DashboardView {
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            topic_id: None,
            submission: None,
        }
    }

    /// Switch model. The topic resets to the new model's best topic and any
    /// submission is dropped, since topic ids do not carry across models.
    pub fn with_model(&self, model: ModelKind) -> Self {
        if model == self.model {
            return self.clone();
        }
        Self::new(model)
    }

    pub fn with_topic(&self, topic_id: TopicId) -> Self {
        Self {
            topic_id: Some(topic_id),
            ..self.clone()
        }
    }

    /// Show the predicted topic of a submitted text.
    pub fn with_prediction(&self, text: impl Into<String>, prediction: Prediction) -> Self {
        Self {
            model: prediction.model,
            topic_id: Some(prediction.topic_id),
            submission: Some(Submission {
                text: text.into(),
                prediction,
            }),
        }
    }
}

/// A loaded model with its precomputed corpus assignments.
pub struct ModelPanel {
    model: Arc<dyn TopicModel>,
    catalog: TopicCatalog,
    colors: TopicColorMapper,
}

impl ModelPanel {
    pub fn new(model: Arc<dyn TopicModel>, catalog: TopicCatalog) -> Self {
        let colors = TopicColorMapper::for_model(model.kind());
        Self {
            model,
            catalog,
            colors,
        }
    }

    pub fn model(&self) -> &dyn TopicModel {
        self.model.as_ref()
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn colors(&self) -> &TopicColorMapper {
        &self.colors
    }
}

/// Everything loaded at startup. Read-only afterwards.
pub struct Dashboard {
    lda: ModelPanel,
    bertopic: ModelPanel,
    page: PageConfig,
    spacing: Spacing,
}

impl Dashboard {
    pub fn new(lda: ModelPanel, bertopic: ModelPanel, page: PageConfig) -> Self {
        Self {
            lda,
            bertopic,
            page,
            spacing: Spacing::default(),
        }
    }

    /// Load both models, the corpus and the assignment tables.
    pub fn load(settings: &Settings) -> Result<Self, TopicsError> {
        let documents = Arc::new(load_documents(settings.prepared_data_path())?);
        let lda = LdaModel::load(&settings.lda_model_path, &settings.lda_dictionary_path)?;
        let bertopic = BertopicModel::load(&settings.bertopic_model_path)?;

        let lda_catalog = TopicCatalog::load(settings, ModelKind::Lda, Arc::clone(&documents))?;
        let bertopic_catalog =
            TopicCatalog::load(settings, ModelKind::Bertopic, Arc::clone(&documents))?;

        info!(documents = documents.len(), "Dashboard loaded");
        Ok(Self::new(
            ModelPanel::new(Arc::new(lda), lda_catalog),
            ModelPanel::new(Arc::new(bertopic), bertopic_catalog),
            PageConfig::from(settings),
        ))
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn panel(&self, model: ModelKind) -> &ModelPanel {
        match model {
            ModelKind::Lda => &self.lda,
            ModelKind::Bertopic => &self.bertopic,
        }
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.page
    }

    /// Classify text with the given model and return the resulting view.
    pub fn predict(
        &self,
        view: &DashboardView,
        model: ModelKind,
        text: &str,
    ) -> Result<DashboardView, TopicsError> {
        let prediction = self.panel(model).model().predict(text)?;
        Ok(view.with_prediction(text, prediction))
    }

    /// Topic a view resolves to: its selection, else the model's best topic.
    pub fn resolve_topic(&self, view: &DashboardView) -> TopicId {
        view.topic_id
            .or_else(|| {
                self.panel(view.model)
                    .catalog()
                    .best_topic()
                    .map(|(id, _)| id)
            })
            .unwrap_or(0)
    }
}

/// Prediction block of a topic page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSection {
    pub headline: Headline,
    /// Submitted text with topic-colored words, for techniques with
    /// word-level assignments
    pub colored_text: Option<String>,
    pub legend: Option<String>,
    pub distribution: DistributionBar,
}

/// Everything shown for one topic of one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicPage {
    pub model: ModelKind,
    pub topic_id: TopicId,
    pub topic_name: String,
    pub is_best_topic: bool,
    pub document_count: usize,
    pub description: Option<TopicDescription>,
    pub over_time: TopicOverTime,
    pub top_words: BarChart,
    pub word_cloud: WordCloud,
    pub representative_documents: Vec<RepresentativeDocument>,
    pub prediction: Option<PredictionSection>,
}

fn prediction_section(
    panel: &ModelPanel,
    submission: &Submission,
    spacing: Spacing,
) -> PredictionSection {
    let prediction = &submission.prediction;
    let colored_text = panel.model().token_lookup().map(|lookup| {
        render_colored_text(
            &surface_tokens(&submission.text),
            lookup,
            &prediction.per_word_topics,
            panel.colors(),
            spacing,
        )
    });
    let legend = colored_text
        .as_ref()
        .map(|_| render_legend(panel.colors(), panel.model().num_topics(), spacing));
    PredictionSection {
        headline: render_headline(prediction),
        colored_text,
        legend,
        distribution: distribution_bar(&prediction.distribution, panel.colors()),
    }
}

/// Build the page for a view.
#[instrument(skip(view, dashboard), fields(model = %view.model))]
pub fn render_page(
    view: &DashboardView,
    dashboard: &Dashboard,
) -> Result<TopicPage, TopicsError> {
    let panel = dashboard.panel(view.model);
    let model = panel.model();
    let catalog = panel.catalog();
    let config = dashboard.page_config();

    let topic_id = dashboard.resolve_topic(view);
    model.check_topic(topic_id)?;

    let topic_name = match catalog.topic_name(topic_id) {
        Some(name) => name,
        None => model.topic_name(topic_id)?,
    };
    let is_best_topic = catalog
        .best_topic()
        .map(|(best, _)| best == topic_id)
        .unwrap_or(false);

    let prediction = view
        .submission
        .as_ref()
        .filter(|s| s.prediction.model == view.model)
        .map(|s| prediction_section(panel, s, dashboard.spacing));

    let page = TopicPage {
        model: view.model,
        topic_id,
        topic_name,
        is_best_topic,
        document_count: catalog.entries_for(topic_id).count(),
        description: catalog.description(topic_id).cloned(),
        over_time: topic_over_time(catalog, topic_id),
        top_words: top_words_chart(model, topic_id, config.top_words)?,
        word_cloud: word_cloud(model, topic_id, config.wordcloud_words)?,
        representative_documents: catalog.representative_documents(
            topic_id,
            config.representative_docs,
            config.sample_seed,
        ),
        prediction,
    };
    debug!(
        topic_id,
        documents = page.document_count,
        has_prediction = page.prediction.is_some(),
        "Rendered topic page"
    );
    Ok(page)
}
