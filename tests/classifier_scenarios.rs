use bayesian_filter::classifier::{NaiveBayesModel, Score, top_k_scores};
use bayesian_filter::error::{BayesianFilterError, Result};

const EPSILON: f64 = 1e-9;

fn trained_model() -> NaiveBayesModel {
    let mut model = NaiveBayesModel::new();
    model.fit(&["cat", "pet", "fur"], "animal");
    model.fit(&["dog", "pet", "bark"], "animal");
    model.fit(&["car", "road", "engine"], "vehicle");
    model.fit(&["bus", "road"], "vehicle");
    model.fit(&["apple", "pie"], "food");
    model
}

#[test]
fn animal_and_vehicle_are_told_apart() -> Result<()> {
    let mut model = NaiveBayesModel::new();
    model.fit(&["cat", "pet"], "animal");
    model.fit(&["car", "road"], "vehicle");

    let prediction = model.predict(&["cat"])?;
    assert_eq!(prediction.best_category, "animal");
    assert_eq!(prediction.token_count, 1);
    assert_eq!(prediction.scores.len(), 2);
    Ok(())
}

#[test]
fn empty_model_cannot_predict() {
    let model = NaiveBayesModel::new();
    assert!(matches!(
        model.predict(&Vec::<&str>::new()),
        Err(BayesianFilterError::EmptyModel)
    ));
}

#[test]
fn single_empty_document_gives_full_prior() -> Result<()> {
    let mut model = NaiveBayesModel::new();
    model.fit::<&str>(&[], "x");

    assert_eq!(model.category_prior("x")?, 1.0);
    Ok(())
}

#[test]
fn smoothed_likelihood_golden_value() -> Result<()> {
    let mut model = NaiveBayesModel::new();
    model.fit(&["a", "a", "b"], "X");

    // (2 + 1) / (3 + 2)
    assert!((model.word_likelihood("a", "X")? - 3.0 / 5.0).abs() < EPSILON);
    // (0 + 1) / (3 + 2)
    assert!((model.word_likelihood("zzz", "X")? - 1.0 / 5.0).abs() < EPSILON);
    Ok(())
}

#[test]
fn priors_sum_to_one() -> Result<()> {
    let model = trained_model();
    let total: f64 = model
        .categories()
        .map(|c| model.category_prior(c))
        .sum::<Result<f64>>()?;

    assert!((total - 1.0).abs() < EPSILON);
    Ok(())
}

#[test]
fn likelihoods_are_always_positive() -> Result<()> {
    let model = trained_model();
    let categories: Vec<String> = model.categories().map(str::to_string).collect();
    let mut words: Vec<String> = model.vocabulary().iter().cloned().collect();
    words.push("never-seen".to_string());

    for category in &categories {
        for word in &words {
            assert!(model.word_likelihood(word, category)? > 0.0);
        }
    }
    Ok(())
}

#[test]
fn counts_never_decrease() -> Result<()> {
    let mut model = trained_model();
    let before = model.clone();

    model.fit(&["pet", "new"], "animal");
    model.fit(&["pet"], "brand-new");

    for (category, words) in before.word_counts() {
        for (word, &count) in words {
            assert!(model.word_count(word, category)? >= count);
        }
        assert!(model.category_count(category) >= before.category_count(category));
    }
    assert!(model.vocabulary().is_superset(before.vocabulary()));
    Ok(())
}

#[test]
fn unknown_category_is_reported() {
    let model = trained_model();
    assert!(matches!(
        model.category_prior("plant"),
        Err(BayesianFilterError::UnknownCategory(c)) if c == "plant"
    ));
    assert!(matches!(
        model.word_likelihood("cat", "plant"),
        Err(BayesianFilterError::UnknownCategory(_))
    ));
}

#[test]
fn top_k_log_scores_are_descending() -> Result<()> {
    let model = trained_model();
    let prediction = model.predict(&["pet", "road"])?;

    for k in 0..5 {
        let top = prediction.top_k(&model, k, true);
        assert_eq!(top.len(), k.min(prediction.scores.len()));

        let values: Vec<f64> = top.values().copied().collect();
        assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
    }
    Ok(())
}

#[test]
fn top_k_confidences_form_a_distribution() -> Result<()> {
    let model = trained_model();
    let prediction = model.predict(&["pet", "road", "fur", "unknown"])?;
    let top = prediction.top_k(&model, 3, false);

    assert_eq!(top.len(), 3);
    assert!(top.values().all(|v| (0.0..=1.0).contains(v)));
    assert!((top.values().sum::<f64>() - 1.0).abs() < EPSILON);
    assert_eq!(
        top.keys().next().map(String::as_str),
        Some(prediction.best_category.as_str())
    );
    Ok(())
}

#[test]
fn top_k_free_function_handles_empty_input() {
    let empty: Vec<Score> = Vec::new();
    assert!(top_k_scores(&empty, 3, false, 0, 10).is_empty());
    assert!(top_k_scores(&empty, 3, true, 0, 10).is_empty());
}

#[test]
fn ties_go_to_first_trained_category() -> Result<()> {
    let mut model = NaiveBayesModel::new();
    model.fit(&["shared"], "later-alphabetically");
    model.fit(&["shared"], "earlier");

    let prediction = model.predict(&["shared"])?;
    assert_eq!(prediction.best_category, "later-alphabetically");
    Ok(())
}
