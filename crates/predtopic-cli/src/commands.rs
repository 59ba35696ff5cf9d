//! Command implementations.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use predtopic_text::TextNormalizer;
use predtopic_topics::{
    analyze, load_documents, render_legend, render_page, BertopicModel, Dashboard, DashboardView,
    LdaModel, Spacing, TopicCatalog, TopicColorMapper, TopicModel, TopicPage, TrendReport,
};
use predtopic_types::{ModelKind, Settings, TopicId};

/// Load settings and apply CLI overrides.
pub fn load_settings(
    config_path: Option<&str>,
    log_level_override: Option<&str>,
    root: Option<&Path>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    settings.validate().context("Invalid configuration")?;
    if let Some(root) = root {
        settings = settings.rooted_at(root);
    }
    Ok(settings)
}

/// Install the global tracing subscriber. Logs go to stderr so command output
/// stays clean.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn spacing(trailing_space: bool) -> Spacing {
    if trailing_space {
        Spacing::Trailing
    } else {
        Spacing::Separated
    }
}

/// Text from the argument, a file, or stdin, in that order.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Load a single model.
pub fn load_model(settings: &Settings, model: ModelKind) -> Result<Arc<dyn TopicModel>> {
    let loaded: Arc<dyn TopicModel> = match model {
        ModelKind::Lda => Arc::new(
            LdaModel::load(&settings.lda_model_path, &settings.lda_dictionary_path)
                .context("Failed to load LDA model")?,
        ),
        ModelKind::Bertopic => Arc::new(
            BertopicModel::load(&settings.bertopic_model_path)
                .context("Failed to load BERTopic model")?,
        ),
    };
    Ok(loaded)
}

pub fn handle_predict(
    settings: &Settings,
    text: Option<String>,
    file: Option<PathBuf>,
    model: Option<ModelKind>,
    trailing_space: bool,
    json: bool,
) -> Result<()> {
    let text = read_input(text, file.as_deref())?;
    settings.check_input(&text).context("Rejected input")?;
    let model = model.unwrap_or(settings.default_model);

    let dashboard = Dashboard::load(settings)
        .context("Failed to load dashboard")?
        .with_spacing(spacing(trailing_space));
    let view = dashboard
        .predict(&DashboardView::new(model), model, &text)
        .context("Prediction failed")?;
    let page = render_page(&view, &dashboard).context("Failed to render topic page")?;
    info!(model = %model, topic_id = page.topic_id, "Prediction complete");
    print_page(&page, json)
}

pub fn handle_topic(
    settings: &Settings,
    model: Option<ModelKind>,
    topic: Option<TopicId>,
    json: bool,
) -> Result<()> {
    let model = model.unwrap_or(settings.default_model);
    let dashboard = Dashboard::load(settings).context("Failed to load dashboard")?;
    let mut view = DashboardView::new(model);
    if let Some(topic_id) = topic {
        view = view.with_topic(topic_id);
    }
    let page = render_page(&view, &dashboard).context("Failed to render topic page")?;
    print_page(&page, json)
}

pub fn handle_legend(
    settings: &Settings,
    model: Option<ModelKind>,
    trailing_space: bool,
) -> Result<()> {
    let model = model.unwrap_or(settings.default_model);
    let loaded = load_model(settings, model)?;
    let colors = TopicColorMapper::for_model(model);
    println!(
        "{}",
        render_legend(&colors, loaded.num_topics(), spacing(trailing_space))
    );
    Ok(())
}

pub fn handle_trends(
    settings: &Settings,
    model: Option<ModelKind>,
    topic: Option<TopicId>,
    json: bool,
) -> Result<()> {
    let model = model.unwrap_or(settings.default_model);
    let documents = load_documents(settings.prepared_data_path())
        .context("Failed to load prepared data")?;
    let catalog = TopicCatalog::load(settings, model, Arc::new(documents))
        .context("Failed to load topic catalog")?;
    let report = analyze(&catalog);
    if let Some(topic_id) = topic {
        if report.topic(topic_id).is_none() {
            anyhow::bail!("{} model has no documents for topic {}", model, topic_id);
        }
    }

    if json {
        let value = match topic.and_then(|id| report.topic(id)) {
            Some(trend) => serde_json::to_string_pretty(trend)?,
            None => serde_json::to_string_pretty(&report)?,
        };
        println!("{}", value);
    } else {
        print!("{}", format_trends(&report, topic));
    }
    Ok(())
}

pub fn handle_normalize(text: &str) -> Result<()> {
    let tokens = TextNormalizer::new().normalize(text);
    debug!(tokens = tokens.len(), "Normalized text");
    for token in tokens {
        println!(
            "{}\t{}\t{}",
            token.surface_form, token.lemma, token.part_of_speech
        );
    }
    Ok(())
}

pub fn show_config(settings: &Settings) -> Result<()> {
    let rendered = toml::to_string_pretty(settings).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

fn print_page(page: &TopicPage, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", format_page(page));
    }
    Ok(())
}

/// Plain-text rendering of a topic page.
pub fn format_page(page: &TopicPage) -> String {
    let mut out = String::new();

    if let Some(section) = &page.prediction {
        out.push_str(&format!("{}\n", section.headline.title));
        out.push_str(&format!("{}\n", section.headline.subtitle));
        if let Some(colored) = &section.colored_text {
            out.push_str(&format!("\n{}\n", colored));
        }
        if let Some(legend) = &section.legend {
            out.push_str(&format!("{}\n", legend));
        }
        for segment in &section.distribution.segments {
            out.push_str(&format!(
                "  {:<10} {:>7.2}%\n",
                segment.label,
                segment.probability * 100.0
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} Topic {}: {}",
        page.model, page.topic_id, page.topic_name
    ));
    if page.is_best_topic {
        out.push_str(" (best topic)");
    }
    out.push('\n');
    out.push_str(&format!("Documents: {}\n", page.document_count));
    if let Some(description) = &page.description {
        out.push_str(&format!("{}\n", description.description));
    }

    out.push_str(&format!("\n{}\n", page.over_time.title));
    for point in &page.over_time.points {
        out.push_str(&format!("  {}  {}\n", point.year, point.count));
    }

    out.push_str(&format!("\n{}\n", page.top_words.title));
    for bar in page.top_words.bars.iter().rev() {
        out.push_str(&format!("  {:<20} {:.4}\n", bar.label, bar.value));
    }

    if !page.representative_documents.is_empty() {
        out.push_str("\nRepresentative documents\n");
        for doc in &page.representative_documents {
            out.push_str(&format!(
                "  {}. {} ({})",
                doc.rank, doc.document.title, doc.document.year
            ));
            if let Some(p) = doc.probability {
                out.push_str(&format!(" p={:.3}", p));
            }
            out.push('\n');
            if !doc.document.doi.is_empty() {
                out.push_str(&format!("     {}\n", doc.document.doi_url()));
            }
        }
    }
    out
}

/// Plain-text rendering of a trend report, optionally for one topic.
pub fn format_trends(report: &TrendReport, topic: Option<TopicId>) -> String {
    let mut out = format!(
        "{} topic trends, {} topics\n",
        report.model,
        report.topics.len()
    );
    for trend in &report.topics {
        if topic.is_some_and(|id| id != trend.topic_id) {
            continue;
        }
        out.push_str(&format!("\nTopic {}", trend.topic_id));
        if let Some(name) = &trend.topic_name {
            out.push_str(&format!(" ({})", name));
        }
        out.push_str(&format!(": {} documents\n", trend.total));
        let yearly: Vec<String> = trend
            .yearly
            .iter()
            .map(|p| format!("{}={}", p.year, p.count))
            .collect();
        out.push_str(&format!("  counts: {}\n", yearly.join(" ")));
        for growth in &trend.growth {
            let marker = if growth.is_significant() { " *" } else { "" };
            out.push_str(&format!(
                "  {}-{}: {:+.1}%{}\n",
                growth.from_year,
                growth.to_year,
                growth.rate * 100.0,
                marker
            ));
        }
        if let Some(average) = trend.average_growth {
            out.push_str(&format!("  average growth: {:+.1}%\n", average * 100.0));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use predtopic_topics::{GrowthRate, TopicTrend, YearCount};

    #[test]
    fn test_spacing_flag() {
        assert_eq!(spacing(false), Spacing::Separated);
        assert_eq!(spacing(true), Spacing::Trailing);
    }

    #[test]
    fn test_load_settings_applies_cli_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "log_level = \"warn\"\nmax_input_chars = 1200\n").unwrap();
        let root = dir.path().join("deploy");

        let settings = load_settings(
            Some(config.to_str().unwrap()),
            Some("debug"),
            Some(root.as_path()),
        )
        .unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.max_input_chars, 1200);
        assert_eq!(
            settings.prepared_data_path(),
            root.join("data").join("prepared_data.csv")
        );
        assert_eq!(
            PathBuf::from(&settings.lda_model_path),
            root.join("models/lda_model/best_lda_model.json")
        );
    }

    #[test]
    fn test_load_settings_keeps_file_level_without_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "log_level = \"warn\"\n").unwrap();

        let settings = load_settings(Some(config.to_str().unwrap()), None, None).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.data_dir, "data");
    }

    #[test]
    fn test_read_input_prefers_text() {
        let text = read_input(Some("idea".to_string()), None).unwrap();
        assert_eq!(text, "idea");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("idea.txt");
        std::fs::write(&path, "graph learning").unwrap();
        assert_eq!(read_input(None, Some(path.as_path())).unwrap(), "graph learning");
        assert!(read_input(None, Some(dir.path().join("missing.txt").as_path())).is_err());
    }

    #[test]
    fn test_format_trends() {
        let report = TrendReport {
            model: ModelKind::Lda,
            years: vec![2019, 2020],
            topics: vec![
                TopicTrend {
                    topic_id: 3,
                    topic_name: Some("3_data".to_string()),
                    total: 9,
                    yearly: vec![
                        YearCount {
                            year: 2019,
                            count: 4,
                        },
                        YearCount {
                            year: 2020,
                            count: 5,
                        },
                    ],
                    growth: vec![GrowthRate {
                        from_year: 2019,
                        to_year: 2020,
                        rate: 0.25,
                    }],
                    average_growth: Some(0.25),
                },
                TopicTrend {
                    topic_id: 1,
                    topic_name: None,
                    total: 1,
                    yearly: Vec::new(),
                    growth: Vec::new(),
                    average_growth: None,
                },
            ],
        };
        let text = format_trends(&report, None);
        assert!(text.starts_with("LDA topic trends, 2 topics"));
        assert!(text.contains("Topic 3 (3_data): 9 documents"));
        assert!(text.contains("2019-2020: +25.0% *"));
        assert!(text.contains("Topic 1: 1 documents"));

        let only = format_trends(&report, Some(1));
        assert!(!only.contains("Topic 3"));
    }
}
