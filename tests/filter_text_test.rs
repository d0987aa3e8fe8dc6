use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use bayesian_filter::analysis::analyzer::StandardAnalyzer;
use bayesian_filter::classifier::{
    BayesianFilter, TextClassifier, TrainingSample, load_training_data, new_bayesian_filter,
    new_with_default_analyzer,
};
use bayesian_filter::config::{AnalyzerConfig, FilterConfig};
use bayesian_filter::error::Result;

fn corpus() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new("Win a FREE iPhone! Click now!", "spam"),
        TrainingSample::new("Cheap pills, limited offer, buy now", "spam"),
        TrainingSample::new("You have won a free cruise (claim today)", "spam"),
        TrainingSample::new("Can we move the meeting to Friday?", "ham"),
        TrainingSample::new("Lunch tomorrow? The usual place.", "ham"),
        TrainingSample::new("Here are the notes from the meeting", "ham"),
    ]
}

#[test]
fn filter_classifies_raw_text() -> Result<()> {
    let mut filter = new_with_default_analyzer()?;
    filter.fit_samples(&corpus())?;

    assert_eq!(filter.predict("free offer, click now")?.best_category, "spam");
    assert_eq!(filter.predict("notes for the meeting")?.best_category, "ham");
    Ok(())
}

#[test]
fn punctuation_and_case_do_not_split_the_vocabulary() -> Result<()> {
    let mut filter = new_with_default_analyzer()?;
    filter.fit("FREE! free. (Free)", "spam")?;

    assert_eq!(filter.model().vocabulary_size(), 1);
    assert_eq!(filter.model().word_count("free", "spam")?, 3);
    Ok(())
}

#[test]
fn confidences_rank_the_expected_category_first() -> Result<()> {
    let mut filter = new_with_default_analyzer()?;
    filter.fit_samples(&corpus())?;

    let top = filter.top_k("won a free cruise", 2, false)?;
    assert_eq!(top.keys().next().map(String::as_str), Some("spam"));
    assert!(top["spam"] > top["ham"]);
    assert!((top.values().sum::<f64>() - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn saved_filter_reloads_with_same_analyzer() -> Result<()> {
    let dir = TempDir::new()?;
    let base = dir.path().join("models").join("mail");

    let mut filter = new_with_default_analyzer()?;
    filter.fit_samples(&corpus())?;
    filter.save(&base)?;

    let restored = BayesianFilter::from_path(&base, Arc::new(StandardAnalyzer::new()?))?;
    let text = "Buy cheap pills today";
    assert_eq!(restored.predict(text)?, filter.predict(text)?);
    Ok(())
}

#[test]
fn configured_filter_removes_stop_words() -> Result<()> {
    let config = FilterConfig {
        analyzer: AnalyzerConfig {
            stop_words: vec!["the".to_string(), "a".to_string()],
            ..AnalyzerConfig::default()
        },
        ..FilterConfig::default()
    };
    let mut filter = new_bayesian_filter(&config)?;
    filter.fit("The cat and a dog", "animal")?;

    assert_eq!(filter.model().word_count("the", "animal")?, 0);
    assert_eq!(filter.model().total_word_count("animal")?, 3);
    Ok(())
}

#[test]
fn training_data_from_json_lines() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("samples.jsonl");
    let lines: Vec<String> = corpus()
        .iter()
        .map(serde_json::to_string)
        .collect::<std::result::Result<_, _>>()?;
    fs::write(&path, lines.join("\n"))?;

    let samples = load_training_data(&path)?;
    assert_eq!(samples, corpus());
    Ok(())
}

#[test]
fn filter_behind_trait_object() -> Result<()> {
    let mut classifier: Box<dyn TextClassifier> = Box::new(new_with_default_analyzer()?);
    for sample in corpus() {
        classifier.fit(&sample.text, &sample.category)?;
    }

    assert_eq!(classifier.predict("lunch meeting")?.best_category, "ham");
    Ok(())
}
