//! End-to-end recommendation scenarios with the built-in lexicon scorer.
//!
//! Results are shuffled, so these tests assert on set membership and
//! polarity values, never on positions.

use std::collections::HashSet;
use std::path::PathBuf;

use data_loader::{Catalog, CatalogItem};
use engine::{PolarityBand, RecommendationCriteria, RecommendationEngine, ScoredCandidate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sentiment::LexiconScorer;

fn item(title: &str, genre: &str, rating: f32, overview: Option<&str>) -> CatalogItem {
    CatalogItem::new(
        title,
        Some(genre.to_string()),
        overview.map(str::to_string),
        Some(rating),
    )
}

/// A: upbeat comedy, B: downbeat drama, C: comedy without overview
fn three_item_engine() -> RecommendationEngine<LexiconScorer> {
    let catalog: Catalog = vec![
        item("A", "Comedy", 8.5, Some("A joyful uplifting tale")),
        item("B", "Drama", 9.0, Some("A tragic and hopeless story")),
        item("C", "Comedy", 7.0, None),
    ]
    .into_iter()
    .collect();
    RecommendationEngine::build(catalog, LexiconScorer::builtin().unwrap())
}

fn mixed_mood_engine() -> RecommendationEngine<LexiconScorer> {
    let catalog: Catalog = vec![
        item("Sunrise", "Drama", 8.0, Some("A joyful uplifting tale")),
        item("Ashes", "Drama", 8.1, Some("A tragic and hopeless story")),
        item("Bright Side", "Comedy", 7.9, Some("A wonderful and charming romance")),
        item("Wreckage", "Thriller", 7.5, Some("A cruel and bitter betrayal")),
        item("Commute", "Drama", 7.8, Some("A man walks to the station")),
    ]
    .into_iter()
    .collect();
    RecommendationEngine::build(catalog, LexiconScorer::builtin().unwrap())
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data-loader/tests/fixtures/mini_catalog.csv")
}

fn titles(results: &[ScoredCandidate]) -> HashSet<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_genre_query_excludes_other_genres_and_missing_overviews() {
    let engine = three_item_engine();
    let criteria = RecommendationCriteria::new().with_genre("Comedy").with_top_n(5);

    let results = engine.recommend_with_rng(&criteria, &mut StdRng::seed_from_u64(1));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "A");
    assert!(results[0].polarity > 0.0);
    assert_eq!(results[0].band(), PolarityBand::Positive);
}

#[test]
fn test_rating_query_without_mood_keeps_negative_item() {
    let engine = three_item_engine();
    let criteria = RecommendationCriteria::new().with_min_rating(8.7);

    let results = engine.recommend_with_rng(&criteria, &mut StdRng::seed_from_u64(2));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "B");
    assert!(results[0].polarity < 0.0);
}

#[test]
fn test_no_match_is_empty() {
    let engine = three_item_engine();
    let criteria = RecommendationCriteria::new().with_genre("Western");

    assert!(engine.recommend(&criteria).is_empty());
}

#[test]
fn test_negative_mood_never_returns_negative_polarity() {
    let engine = mixed_mood_engine();
    let criteria = RecommendationCriteria::new()
        .with_mood("I feel terrible and hopeless")
        .with_top_n(10);

    for seed in 0..20 {
        let results = engine.recommend_with_rng(&criteria, &mut StdRng::seed_from_u64(seed));

        assert_eq!(
            titles(&results),
            HashSet::from(["Sunrise", "Bright Side", "Commute"])
        );
        assert!(results.iter().all(|r| r.polarity >= 0.0));
    }
}

#[test]
fn test_absent_mood_keeps_neutral_and_negative() {
    let engine = mixed_mood_engine();
    let criteria = RecommendationCriteria::new().with_top_n(10);

    let results = engine.recommend(&criteria);

    assert_eq!(results.len(), 5);
    let commute = results.iter().find(|r| r.title == "Commute").unwrap();
    assert_eq!(commute.polarity, 0.0);
    assert_eq!(commute.band(), PolarityBand::Neutral);
}

#[test]
fn test_result_bounded_by_top_n_and_drawn_from_pool() {
    let engine = mixed_mood_engine();
    let criteria = RecommendationCriteria::new().with_top_n(2);
    let pool = titles(&engine.recommend(&RecommendationCriteria::new().with_top_n(10)))
        .into_iter()
        .map(str::to_string)
        .collect::<HashSet<_>>();

    for seed in 0..20 {
        let results = engine.recommend_with_rng(&criteria, &mut StdRng::seed_from_u64(seed));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| pool.contains(&r.title)));
        assert_ne!(results[0].title, results[1].title);
    }
}

#[test]
fn test_repeated_queries_are_stable() {
    let engine = mixed_mood_engine();
    let criteria = RecommendationCriteria::new().with_genre("drama").with_top_n(10);

    let first = engine.recommend(&criteria);
    let second = engine.recommend(&criteria);

    assert_eq!(titles(&first), titles(&second));
    for result in &first {
        let again = second.iter().find(|r| r.title == result.title).unwrap();
        assert_eq!(again.polarity, result.polarity);
    }
}

#[test]
fn test_raw_criteria_end_to_end() {
    let engine = three_item_engine();
    let criteria = RecommendationCriteria::from_raw(Some("comedy"), Some(""), Some("abc"), Some("0"));

    let results = engine.recommend(&criteria);

    assert_eq!(titles(&results), HashSet::from(["A"]));
}

#[test]
fn test_load_fixture_catalog() {
    let engine = RecommendationEngine::load(&fixture_path(), LexiconScorer::builtin().unwrap()).unwrap();

    assert_eq!(engine.catalog().len(), 6);
    assert_eq!(
        engine.list_genres(),
        vec!["Action", "Animation", "Comedy", "Crime", "Drama", "Family"]
    );

    let drama = engine.recommend(&RecommendationCriteria::new().with_genre("drama"));
    assert_eq!(
        titles(&drama),
        HashSet::from(["The Shawshank Redemption", "The Dark Knight", "Grave of the Fireflies"])
    );

    let top_rated = engine.recommend(&RecommendationCriteria::new().with_min_rating(9.0));
    assert_eq!(
        titles(&top_rated),
        HashSet::from(["The Shawshank Redemption", "The Dark Knight"])
    );
}

#[test]
fn test_load_missing_catalog_fails_with_context() {
    let result = RecommendationEngine::load(
        &PathBuf::from("does/not/exist.csv"),
        LexiconScorer::builtin().unwrap(),
    );

    let err = result.err().unwrap();
    assert!(err.to_string().contains("Failed to load catalog"));
}

#[test]
fn test_similarity_is_exposed_but_not_used_for_ranking() {
    let engine = RecommendationEngine::load(&fixture_path(), LexiconScorer::builtin().unwrap()).unwrap();

    let toy_story = engine.similarity_between("Toy Story", "Grave of the Fireflies").unwrap();
    let unrelated = engine.similarity_between("Toy Story", "The Shawshank Redemption").unwrap();
    assert!(toy_story > unrelated);
    assert_eq!(engine.similarity_between("Untitled Reel", "Untitled Reel"), Some(0.0));
}
