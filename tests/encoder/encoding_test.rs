#[cfg(test)]
mod tests {
    use heart_risk::models::*;
    use heart_risk::{FEATURE_COUNT, encode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_observation_vector() {
        let obs = ClinicalObservation {
            age: 50,
            sex: Sex::Male,
            chest_pain_type: "Type 0: No Symptoms".parse().unwrap(),
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
        };

        assert_eq!(
            encode(&obs).as_slice(),
            &[50.0, 1.0, 0.0, 120.0, 200.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_every_field_lands_in_its_slot() {
        let obs = ClinicalObservation {
            age: 71,
            sex: Sex::Female,
            chest_pain_type: ChestPainType::NotAngina,
            resting_bp: 181,
            cholesterol: 333,
            fasting_blood_sugar_high: FastingBloodSugar::High,
            resting_ecg: RestingEcg::Hypertrophy,
            max_heart_rate: 99,
            exercise_angina: ExerciseAngina::Yes,
            st_depression: 4.2,
            st_slope: StSlope::Slope1,
            major_vessels: MajorVessels::Three,
            thalassemia: Thalassemia::RecoverableDefect,
        };

        let features = encode(&obs);
        assert_eq!(features.as_slice().len(), FEATURE_COUNT);
        assert_eq!(
            features.as_slice(),
            &[71.0, 0.0, 3.0, 181.0, 333.0, 1.0, 2.0, 99.0, 1.0, 4.2, 1.0, 3.0, 3.0]
        );
    }

    #[test]
    fn test_chest_pain_labels() {
        let angina: ChestPainType = "Type 2: Angina".parse().unwrap();
        let none: ChestPainType = "Type 0: No Symptoms".parse().unwrap();

        let obs = ClinicalObservation {
            chest_pain_type: angina,
            ..Default::default()
        };
        assert_eq!(encode(&obs)[2], 2.0);

        let obs = ClinicalObservation {
            chest_pain_type: none,
            ..Default::default()
        };
        assert_eq!(encode(&obs)[2], 0.0);
    }

    #[test]
    fn test_binary_categoricals() {
        let yes = ClinicalObservation {
            sex: "Male".parse().unwrap(),
            fasting_blood_sugar_high: "True".parse().unwrap(),
            exercise_angina: "Yes".parse().unwrap(),
            ..Default::default()
        };
        let no = ClinicalObservation {
            sex: "Female".parse().unwrap(),
            fasting_blood_sugar_high: "False".parse().unwrap(),
            exercise_angina: "No".parse().unwrap(),
            ..Default::default()
        };

        let (yes, no) = (encode(&yes), encode(&no));
        for slot in [1, 5, 8] {
            assert_eq!(yes[slot], 1.0, "slot {slot}");
            assert_eq!(no[slot], 0.0, "slot {slot}");
        }
    }

    #[test]
    fn test_all_categorical_options_encode_to_their_code() {
        for &ecg in RestingEcg::ALL {
            let obs = ClinicalObservation {
                resting_ecg: ecg,
                ..Default::default()
            };
            assert_eq!(encode(&obs)[6], f64::from(ecg.code()));
        }
        for &vessels in MajorVessels::ALL {
            let obs = ClinicalObservation {
                major_vessels: vessels,
                ..Default::default()
            };
            assert_eq!(encode(&obs)[11], f64::from(vessels.code()));
        }
        for &thal in Thalassemia::ALL {
            let obs = ClinicalObservation {
                thalassemia: thal,
                ..Default::default()
            };
            assert_eq!(encode(&obs)[12], f64::from(thal.code()));
        }
    }
}
