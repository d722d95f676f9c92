#[cfg(test)]
mod tests {
    use heart_risk::models::*;
    use heart_risk::{
        HeartRiskError, PredictionService, PredictorConfig, RiskTier, SessionState, render,
    };

    use crate::utils::{fixed_artifacts, single_feature_logistic, unit_scaler, write_artifacts};

    fn reference_observation() -> ClinicalObservation {
        ClinicalObservation {
            age: 50,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::NoSymptoms,
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar_high: FastingBloodSugar::Normal,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            exercise_angina: ExerciseAngina::No,
            st_depression: 1.0,
            st_slope: StSlope::Slope0,
            major_vessels: MajorVessels::Zero,
            thalassemia: Thalassemia::PermanentDefect,
        }
    }

    #[test]
    fn test_session_moves_from_awaiting_to_resulted() {
        let service = PredictionService::with_artifacts(fixed_artifacts(0.85));
        let mut session = service.session();
        assert_eq!(session.state(), &SessionState::AwaitingInput);

        let assessment = session.submit(&reference_observation()).unwrap();
        assert_eq!(assessment.tier, RiskTier::High);
        assert_eq!(assessment.percent_label(), "85%");
        assert!(matches!(session.state(), SessionState::Resulted(a) if a.tier == RiskTier::High));

        let html = render::html(session.state());
        assert!(html.contains("HIGH RISK DETECTED:"));
    }

    #[test]
    fn test_resubmission_replaces_result() {
        let dir = tempfile::tempdir().unwrap();
        // Risk driven by exercise angina only
        let config =
            write_artifacts(dir.path(), &unit_scaler(), &single_feature_logistic(8, 6.0, -3.0));
        let service = PredictionService::initialize(&config);
        assert!(service.is_ready());
        assert!(service.load_notice().is_none());

        let mut session = service.session();
        let first = session.submit(&reference_observation()).unwrap();
        assert_eq!(first.tier, RiskTier::Low);

        let angina = ClinicalObservation {
            exercise_angina: ExerciseAngina::Yes,
            ..reference_observation()
        };
        let second = session.submit(&angina).unwrap();
        assert_eq!(second.tier, RiskTier::High);
        assert!(matches!(session.state(), SessionState::Resulted(a) if a.tier == RiskTier::High));
    }

    #[test]
    fn test_invalid_input_keeps_previous_state() {
        let service = PredictionService::with_artifacts(fixed_artifacts(0.10));
        let mut session = service.session();
        session.submit(&reference_observation()).unwrap();

        let too_old = ClinicalObservation {
            age: 120,
            ..reference_observation()
        };
        let err = session.submit(&too_old).unwrap_err();
        assert!(matches!(err, HeartRiskError::InvalidInput { field: "age", .. }));
        assert!(matches!(session.state(), SessionState::Resulted(a) if a.tier == RiskTier::Low));
    }

    #[test]
    fn test_missing_artifacts_never_predict() {
        let dir = tempfile::tempdir().unwrap();
        let config = PredictorConfig::default().with_models_dir(dir.path());
        let service = PredictionService::initialize(&config);

        assert!(!service.is_ready());
        let notice = service.load_notice().unwrap();
        assert!(notice.message.starts_with("Error: Model files not found! Looking at: "));
        assert!(notice.message.ends_with("heart_disease_model.json"));

        let err = service.predict(&reference_observation()).unwrap_err();
        assert!(matches!(err, HeartRiskError::PredictionUnavailable(_)));
    }

    #[test]
    fn test_low_risk_text_card() {
        let service = PredictionService::with_artifacts(fixed_artifacts(0.10));
        let mut session = service.session();
        session.submit(&reference_observation()).unwrap();

        let text = render::text(session.state());
        assert!(text.starts_with("LOW RISK 10%\n"));
        assert!(text.contains("Indicators are within healthy ranges."));
    }
}
