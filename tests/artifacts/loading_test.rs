#[cfg(test)]
mod tests {
    use std::fs;

    use heart_risk::artifacts::{Classifier, LogisticRegression};
    use heart_risk::{
        ClinicalObservation, HeartRiskError, ModelArtifacts, PredictorConfig, encode,
    };

    use crate::utils::{single_feature_logistic, unit_scaler, write_artifacts};

    #[test]
    fn test_load_round_trip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(1, 3.0, -1.0));

        let artifacts = ModelArtifacts::load(&config).unwrap();
        let male = ClinicalObservation {
            sex: heart_risk::models::Sex::Male,
            ..Default::default()
        };
        let scaled = artifacts.transform(&encode(&male));
        let [p0, p1] = artifacts.predict_proba(&scaled);

        let expected = 1.0 / (1.0 + (-2.0f64).exp());
        assert!((p1 - expected).abs() < 1e-12);
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_directory_reports_model_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = PredictorConfig::default().with_models_dir(dir.path().join("models"));

        match ModelArtifacts::load(&config) {
            Err(HeartRiskError::ArtifactMissing { path }) => {
                assert_eq!(path, config.model_path());
            }
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_scaler_only() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(0, 1.0, 0.0));
        fs::remove_file(config.scaler_path()).unwrap();

        match ModelArtifacts::load(&config) {
            Err(HeartRiskError::ArtifactMissing { path }) => {
                assert_eq!(path, config.scaler_path());
            }
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(0, 1.0, 0.0));
        fs::write(config.model_path(), "not json").unwrap();

        let err = ModelArtifacts::load(&config).unwrap_err();
        match err {
            HeartRiskError::ArtifactFormat { path, .. } => assert_eq!(path, config.model_path()),
            other => panic!("expected ArtifactFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_model_kind_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(0, 1.0, 0.0));
        fs::write(config.model_path(), r#"{"kind": "neural_net", "layers": []}"#).unwrap();

        assert!(matches!(
            ModelArtifacts::load(&config),
            Err(HeartRiskError::ArtifactFormat { .. })
        ));
    }

    #[test]
    fn test_wrong_feature_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let model = Classifier::LogisticRegression(LogisticRegression {
            coefficients: vec![0.5; 14],
            intercept: 0.0,
        });
        let config = write_artifacts(dir.path(), &unit_scaler(), &model);

        let err = ModelArtifacts::load(&config).unwrap_err();
        assert!(matches!(
            err,
            HeartRiskError::DimensionMismatch { expected: 13, got: 14, .. }
        ));
    }

    #[test]
    fn test_bundled_demo_artifacts_load() {
        let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
        let config = PredictorConfig::default().with_models_dir(demos.join("models"));
        let artifacts = ModelArtifacts::load(&config).unwrap();

        let content = fs::read_to_string(demos.join("observation.json")).unwrap();
        let observation: ClinicalObservation = serde_json::from_str(&content).unwrap();
        observation.validate().unwrap();

        let [p0, p1] = artifacts.predict_proba(&artifacts.transform(&encode(&observation)));
        assert!((0.0..=1.0).contains(&p1));
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_forest_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(0, 1.0, 0.0));
        fs::write(
            config.model_path(),
            r#"{
                "kind": "random_forest",
                "n_features": 13,
                "trees": [{
                    "children_left": [1, -1, -1],
                    "children_right": [2, -1, -1],
                    "feature": [11, -2, -2],
                    "threshold": [0.5, -2.0, -2.0],
                    "value": [[1.0, 1.0], [3.0, 1.0], [0.0, 4.0]]
                }]
            }"#,
        )
        .unwrap();

        let artifacts = ModelArtifacts::load(&config).unwrap();
        let [_, p1] = artifacts.predict_proba(&encode(&ClinicalObservation::default()));
        assert!((p1 - 0.25).abs() < 1e-12);
    }
}
