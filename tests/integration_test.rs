// Integration tests for matsel
use matsel::analysis::cost_projection;
use matsel_scoring::criteria::application_match;
use matsel::prelude::*;
use matsel::{
    Criterion, InstallationTolerance, RatingSample, ScoreScale, TrainingError,
};
use matsel_storage::{export_catalog, load_catalog};
use proptest::prelude::*;
use std::sync::Arc;

fn foundation_spec() -> ProjectSpecification {
    ProjectSpecification::builder([Application::Foundation])
        .min_strength_mpa(50.0)
        .budget(150.0)
        .build()
        .unwrap()
}

#[test]
fn test_foundation_scenario() {
    let catalog = Catalog::builtin();
    let engine = ScoringEngine::default();
    let ranked = engine.score(catalog.materials(), &foundation_spec());

    // applications (5) + strength (3) + cost (4), over the full table of 33
    let ceiling = 120.0 / 33.0 * 10.0;

    let hsc = ranked.iter().find(|s| s.id() == 2).unwrap();
    assert!(hsc.sub_scores.get(Criterion::Cost).unwrap() < 10.0);
    assert_eq!(hsc.sub_scores.get(Criterion::Strength), Some(10.0));
    assert!(hsc.total_score < ceiling);

    let portland = ranked.iter().find(|s| s.id() == 1).unwrap();
    assert_eq!(portland.sub_scores.get(Criterion::Strength), Some(5.0));
    assert_eq!(portland.sub_scores.get(Criterion::Cost), Some(10.0));
    assert!(portland.total_score < ceiling);

    assert_eq!(ranked[0].id(), 2);
    assert_eq!(ranked[1].id(), 1);

    let again = engine.score(catalog.materials(), &foundation_spec());
    let ids: Vec<u32> = ranked.iter().map(|s| s.id()).collect();
    let ids_again: Vec<u32> = again.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ids_again);
}

#[test]
fn test_recommend_top_three() {
    let recommender = Recommender::with_defaults(Arc::new(Catalog::builtin())).unwrap();
    let top = recommender.recommend(&foundation_spec(), 3);

    assert_eq!(top.len(), 3);
    assert!(top[0].total_score >= top[1].total_score);
    assert!(top[1].total_score >= top[2].total_score);
}

#[test]
fn test_similar_glass() {
    let recommender = Recommender::with_defaults(Arc::new(Catalog::builtin())).unwrap();
    let similar = recommender.similar(8, 3).unwrap();

    assert_eq!(similar.len(), 3);
    assert!(similar.iter().all(|m| m.id != 8));
    assert_eq!(similar[0].name, "Low-E Insulated Glass");
}

#[test]
fn test_inactive_strength() {
    let catalog = Catalog::builtin();
    let engine = ScoringEngine::default();
    let applications = [Application::Wall];

    let spec = ProjectSpecification::builder(applications)
        .min_strength_mpa(0.0)
        .build()
        .unwrap();

    for scored in engine.score(catalog.materials(), &spec) {
        assert!(scored.sub_scores.get(Criterion::Strength).is_none());
        assert_eq!(scored.sub_scores.active().count(), 1);

        // only the application weight (5) counts, over the full table of 33
        let baseline = application_match(scored.material, &applications) * 5.0 / 33.0 * 10.0;
        assert!((scored.total_score - baseline).abs() < 1e-9);
    }
}

#[test]
fn test_clamped_scale() {
    let catalog = Arc::new(Catalog::builtin());
    let config = RecommenderConfig {
        score_scale: ScoreScale::Clamped,
        ..RecommenderConfig::default()
    };
    let recommender = Recommender::new(catalog, config).unwrap();
    let spec = ProjectSpecification::builder([Application::Roofing])
        .installation(InstallationTolerance::Low)
        .build()
        .unwrap();

    assert!(recommender
        .recommend(&spec, 15)
        .iter()
        .all(|s| (0.0..=10.0).contains(&s.total_score)));
}

#[test]
fn test_training_requires_five_samples() {
    let catalog = Arc::new(Catalog::builtin());
    let mut recommender = Recommender::with_defaults(catalog).unwrap();
    let history: Vec<RatingSample> = (1..=4)
        .map(|id| RatingSample {
            spec: foundation_spec(),
            material_id: id,
            rating: 4.0,
        })
        .collect();

    assert!(matches!(
        recommender.train(&history),
        Err(TrainingError::InsufficientData {
            required: 5,
            actual: 4
        })
    ));
    assert!(!recommender.is_trained());
    assert!(recommender.predict(&foundation_spec()).is_none());
}

#[test]
fn test_rating_history_from_json() {
    let json = r#"[
        {"spec": {"applications": ["Windows"]}, "material_id": 8, "rating": 5},
        {"spec": {"applications": ["Windows"]}, "material_id": 9, "rating": 5},
        {"spec": {"applications": ["Windows"]}, "material_id": 10, "rating": 3},
        {"spec": {"applications": ["Windows"]}, "material_id": 1, "rating": 1},
        {"spec": {"applications": ["Windows"]}, "material_id": 3, "rating": 1},
        {"spec": {"applications": ["Windows"]}, "material_id": 7, "rating": 2}
    ]"#;
    let history: Vec<RatingSample> = serde_json::from_str(json).unwrap();

    let mut recommender = Recommender::with_defaults(Arc::new(Catalog::builtin())).unwrap();
    let report = recommender.train(&history).unwrap();
    assert_eq!(report.samples, 6);

    let spec = ProjectSpecification::builder([Application::Windows])
        .build()
        .unwrap();
    let predictions = recommender.predict(&spec).unwrap();
    assert_eq!(predictions.len(), 15);
    assert!(predictions
        .iter()
        .all(|p| (1.0..=5.0).contains(&p.predicted_rating)));
}

#[test]
fn test_cost_projection_ascending() {
    let catalog = Catalog::builtin();
    let lines = cost_projection(&catalog, &[3, 1, 8, 12], 50.0).unwrap();
    assert!(lines.windows(2).all(|w| w[0].total_cost <= w[1].total_cost));
}

#[test]
fn test_catalog_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    export_catalog(&Catalog::builtin(), &path).unwrap();
    let loaded = load_catalog(&CatalogSource::JsonFile(path)).unwrap();
    assert_eq!(loaded, Catalog::builtin());
}

#[test]
fn test_store_reload_failure_keeps_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();

    let store = CatalogStore::default();
    let before = store.snapshot();
    assert!(store.reload(&CatalogSource::JsonFile(bad)).is_err());
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_specification_from_json() {
    let spec = ProjectSpecification::from_json(
        r#"{
            "applications": ["Roofing", "Interior Finishing"],
            "material_types": ["Wood"],
            "thermal_requirement": "low",
            "budget_constraint": 800,
            "environmental_conditions": {"humidity": 9}
        }"#,
    )
    .unwrap();

    assert_eq!(spec.applications.len(), 2);
    assert_eq!(spec.thermal_requirement, Some(ThermalPreference::Low));
    assert_eq!(spec.environmental_conditions.humidity, 9.0);

    assert!(matches!(
        ProjectSpecification::from_json(r#"{"applications": []}"#),
        Err(Error::InvalidArgument(_))
    ));
}

fn any_application() -> impl Strategy<Value = Application> {
    prop::sample::select(Application::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_applications_only_ranks_by_match(apps in prop::collection::vec(any_application(), 1..4)) {
        let catalog = Catalog::builtin();
        let spec = ProjectSpecification::builder(apps).build().unwrap();
        let ranked = ScoringEngine::default().score(catalog.materials(), &spec);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].sub_scores.application_match >= pair[1].sub_scores.application_match);
        }
    }

    #[test]
    fn prop_score_is_idempotent(app in any_application(), strength in 0.0f64..500.0, budget in 1.0f64..5000.0) {
        let catalog = Catalog::builtin();
        let spec = ProjectSpecification::builder([app])
            .min_strength_mpa(strength)
            .budget(budget)
            .build()
            .unwrap();
        let engine = ScoringEngine::default();

        let a: Vec<(u32, f64)> = engine.score(catalog.materials(), &spec).iter().map(|s| (s.id(), s.total_score)).collect();
        let b: Vec<(u32, f64)> = engine.score(catalog.materials(), &spec).iter().map(|s| (s.id(), s.total_score)).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_eco_only_leaves_thermal_and_cost_inactive(app in any_application(), eco in 0.0f64..10.0) {
        let catalog = Catalog::builtin();
        let engine = ScoringEngine::default();
        let spec = ProjectSpecification::builder([app]).eco_friendly(eco).build().unwrap();

        for scored in engine.score(catalog.materials(), &spec) {
            prop_assert!(scored.sub_scores.get(Criterion::Thermal).is_none());
            prop_assert!(scored.sub_scores.get(Criterion::Cost).is_none());
        }
    }
}
