//! Risk assessment integration tests
//!
//! Exercises the scorer, the console session, and report rendering through
//! the public API.

use healthrisk::assess::{bmi_points, score_factors};
use healthrisk::commands::{run_session, InteractiveOptions};
use healthrisk::{
    assess, assess_with, calculate_bmi, ActivityLevel, AdviceWording, BloodPressure, Cholesterol,
    Config, Factor, Gender, LinePrompter, OutputFormat, PatientInput, RiskTier,
};
use pretty_assertions::assert_eq;

fn high_risk_patient() -> PatientInput {
    PatientInput {
        age: 60,
        gender: Gender::Male,
        weight: 90.0,
        height: 1.70,
        cholesterol: Cholesterol::High,
        bp: BloodPressure::High,
        smoker: true,
        activity: ActivityLevel::Low,
    }
}

// =============================================================================
// Scoring
// =============================================================================

mod scoring_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_bmi() {
        assert_eq!(calculate_bmi(70.0, 1.75), 22.9);
    }

    #[test]
    fn test_rounding_below_half_keeps_underweight_points() {
        assert_eq!(calculate_bmi(73.8, 2.0), 18.4);
        assert_eq!(calculate_bmi(99.8, 2.0), 24.9);

        let input = PatientInput {
            weight: 73.8,
            height: 2.0,
            ..PatientInput::default()
        };
        let result = assess(&input);
        assert_eq!(result.bmi, 18.4);
        assert_eq!(result.risk_score, 2);
    }

    #[test]
    fn test_healthy_adult_is_low_risk() {
        let input = PatientInput {
            age: 30,
            gender: Gender::Female,
            weight: 70.0,
            height: 1.75,
            cholesterol: Cholesterol::Normal,
            bp: BloodPressure::Normal,
            smoker: false,
            activity: ActivityLevel::High,
        };
        let result = assess(&input);

        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_every_factor_maxed_scores_eleven() {
        let result = assess(&high_risk_patient());

        assert_eq!(result.bmi, 31.1);
        assert_eq!(result.risk_score, 11);
        assert_eq!(result.risk_tier, RiskTier::High);
        let points: Vec<(Factor, u8)> = result.factors.iter().map(|f| (f.factor, f.points)).collect();
        assert_eq!(
            points,
            vec![
                (Factor::Bmi, 2),
                (Factor::Cholesterol, 2),
                (Factor::BloodPressure, 2),
                (Factor::Smoking, 2),
                (Factor::Activity, 2),
                (Factor::Age, 1),
            ]
        );
    }

    #[test]
    fn test_assess_is_deterministic() {
        let input = high_risk_patient();
        assert_eq!(assess(&input), assess(&input));
    }

    #[test]
    fn test_gender_does_not_change_score() {
        let base = high_risk_patient();
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            let input = PatientInput { gender, ..base.clone() };
            assert_eq!(assess(&input).risk_score, 11);
        }
    }

    #[test]
    fn test_bmi_limits_are_strict() {
        assert_eq!(bmi_points(18.5), 0);
        assert_eq!(bmi_points(25.0), 0);
        assert_eq!(bmi_points(30.0), 1);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let cholesterols = [Cholesterol::Normal, Cholesterol::Borderline, Cholesterol::High];
        let pressures = [BloodPressure::Normal, BloodPressure::Borderline, BloodPressure::High];
        let activities = [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High];
        let bmis = [10.0, 18.4, 18.5, 22.9, 25.0, 27.5, 30.0, 30.1, 45.0];

        for &cholesterol in &cholesterols {
            for &bp in &pressures {
                for &activity in &activities {
                    for smoker in [false, true] {
                        for age in [1, 50, 51, 120] {
                            for &bmi in &bmis {
                                let input = PatientInput {
                                    age,
                                    cholesterol,
                                    bp,
                                    smoker,
                                    activity,
                                    ..PatientInput::default()
                                };
                                let score: u8 =
                                    score_factors(&input, bmi).iter().map(|f| f.points).sum();
                                assert!(score <= 11, "score {} for {:?}", score, input);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_tier_boundaries_via_inputs() {
        // borderline cholesterol + borderline bp = 2
        let two = PatientInput {
            cholesterol: Cholesterol::Borderline,
            bp: BloodPressure::Borderline,
            ..PatientInput::default()
        };
        assert_eq!(assess(&two).risk_score, 2);
        assert_eq!(assess(&two).risk_tier, RiskTier::Low);

        let three = PatientInput {
            activity: ActivityLevel::Moderate,
            ..two.clone()
        };
        assert_eq!(assess(&three).risk_score, 3);
        assert_eq!(assess(&three).risk_tier, RiskTier::Moderate);

        let five = PatientInput {
            smoker: true,
            ..three.clone()
        };
        assert_eq!(assess(&five).risk_score, 5);
        assert_eq!(assess(&five).risk_tier, RiskTier::Moderate);

        let six = PatientInput { age: 65, ..five };
        assert_eq!(assess(&six).risk_score, 6);
        assert_eq!(assess(&six).risk_tier, RiskTier::High);
    }

    #[test]
    fn test_advice_follows_wording_set() {
        let input = high_risk_patient();
        let dashboard = assess_with(&input, AdviceWording::Dashboard);
        let console = assess_with(&input, AdviceWording::Console);

        assert_eq!(dashboard.advice, AdviceWording::Dashboard.advice(RiskTier::High));
        assert_eq!(console.advice, AdviceWording::Console.advice(RiskTier::High));
        assert_eq!(dashboard.risk_score, console.risk_score);
    }
}

// =============================================================================
// Console session
// =============================================================================

mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(answers: &str, config: &Config) -> (bool, String, String) {
        let mut prompter = LinePrompter::new(answers.as_bytes(), Vec::new());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let completed = run_session(
            &mut prompter,
            &InteractiveOptions::default(),
            config,
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            completed,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn plain_config() -> Config {
        Config {
            color: false,
            advice: AdviceWording::Console,
            ..Config::default()
        }
    }

    #[test]
    fn test_high_risk_session() {
        let (completed, out, _) = run("60\nmale\n90\n1.70\nhigh\nHigh\nyes\nLOW\n", &plain_config());

        assert!(completed);
        assert!(out.contains("Age: 60 | Gender: Male"));
        assert!(out.contains("BMI: 31.1"));
        assert!(out.contains("Health Risk Level: High"));
        assert!(out.contains(AdviceWording::Console.advice(RiskTier::High)));
    }

    #[test]
    fn test_unknown_categories_fail_open() {
        let (completed, out, err) =
            run("30\nmale\n70\n1.75\nsky-high\n???\nnope\nsometimes\n", &plain_config());

        assert!(completed);
        assert!(out.contains("Health Risk Level: Low"));
        // smoker text is a plain yes/no and never counts as unrecognized
        assert_eq!(err.lines().count(), 3);
        assert!(err.contains("Unrecognized cholesterol"));
        assert!(err.contains("Unrecognized blood pressure"));
        assert!(err.contains("Unrecognized activity level"));
    }

    #[test]
    fn test_non_numeric_height_aborts() {
        let (completed, out, err) = run("30\nmale\n70\nabc\n", &plain_config());

        assert!(!completed);
        assert_eq!(out, "");
        assert!(err.contains("Invalid input. Please enter numeric values for age, weight, and height."));
    }

    #[test]
    fn test_truncated_input_aborts() {
        let (completed, out, _) = run("30\n", &plain_config());

        assert!(!completed);
        assert_eq!(out, "");
    }

    #[test]
    fn test_json_session_output() {
        let mut prompter =
            LinePrompter::new("45\nother\n95\n1.80\nborderline\nnormal\nno\nmoderate\n".as_bytes(), Vec::new());
        let mut out = Vec::new();
        let options = InteractiveOptions {
            format: Some(OutputFormat::Json),
            ..InteractiveOptions::default()
        };

        let completed =
            run_session(&mut prompter, &options, &plain_config(), &mut out, &mut Vec::<u8>::new()).unwrap();
        assert!(completed);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        // 95 / 1.8^2 = 29.3 -> +1, borderline cholesterol +1, moderate activity +1
        assert_eq!(value["result"]["bmi"], 29.3);
        assert_eq!(value["result"]["risk_score"], 3);
        assert_eq!(value["result"]["risk_tier"], "Moderate");
    }
}
