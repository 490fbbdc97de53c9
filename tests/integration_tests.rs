use fitness_tracker::{dispatch, export, import, processing};

/// Integration tests that run complete package-to-output workflows

#[cfg(test)]
mod integration_tests {
    use super::*;
    use fitness_tracker::error::{CalculationError, TrackerError};
    use fitness_tracker::{
        Activity, ActivityKind, BatchProcessor, OutputFormat, Package, Running, SportsWalking,
        Swimming, Training,
    };

    const DEMO_OUTPUT: [&str; 3] = [
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
    ];

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    /// The sample packages render to the exact reference lines
    #[test]
    fn test_demo_output_is_character_exact() {
        let report = BatchProcessor::default().process(&import::demo_packages());
        assert!(report.is_success());

        let rendered = export::render(&report.summaries(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, DEMO_OUTPUT);
    }

    #[test]
    fn test_running_statistics() {
        let activity = dispatch::build("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let summary = activity.summarize().unwrap();

        assert_eq!(summary.training_type, "Running");
        approx(summary.distance_km, 9.75);
        approx(summary.mean_speed_km_h, 9.75);
        approx(summary.calories, 699.75);
    }

    #[test]
    fn test_swimming_statistics() {
        let activity = dispatch::build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let summary = activity.summarize().unwrap();

        assert_eq!(summary.training_type, "Swimming");
        approx(summary.distance_km, 0.9936);
        approx(summary.mean_speed_km_h, 1.0);
        approx(summary.calories, 336.0);
    }

    #[test]
    fn test_walking_statistics() {
        let activity = dispatch::build("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let summary = activity.summarize().unwrap();

        assert_eq!(summary.training_type, "SportsWalking");
        approx(summary.distance_km, 5.85);
        approx(summary.mean_speed_km_h, 5.85);
        approx(summary.calories, 157.5);
    }

    #[test]
    fn test_named_constructors_match_dispatch() {
        let cases: Vec<(Activity, &str, Vec<f64>)> = vec![
            (Running::new(15000, 1.0, 75.0).into(), "RUN", vec![15000.0, 1.0, 75.0]),
            (
                SportsWalking::new(9000, 1.0, 75.0, 180.0).into(),
                "WLK",
                vec![9000.0, 1.0, 75.0, 180.0],
            ),
            (
                Swimming::new(720, 1.0, 80.0, 25.0, 40).into(),
                "SWM",
                vec![720.0, 1.0, 80.0, 25.0, 40.0],
            ),
        ];

        for (expected, code, values) in cases {
            assert_eq!(dispatch::build(code, &values).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_code_is_reported_with_code() {
        let err = dispatch::build("FLY", &[1.0, 1.0, 1.0]).unwrap_err();
        match err {
            TrackerError::UnknownActivityCode { code } => assert_eq!(code, "FLY"),
            other => panic!("expected UnknownActivityCode, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_duration_faults_every_variant() {
        let packages = [
            ("RUN", vec![15000.0, 0.0, 75.0]),
            ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
            ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
        ];

        for (code, values) in packages {
            let activity = dispatch::build(code, &values).unwrap();
            let err = activity.summarize().unwrap_err();
            assert!(
                matches!(
                    err,
                    TrackerError::Calculation(CalculationError::DivisionByZero { .. })
                ),
                "{} should fault on zero duration, got {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_continue_policy_keeps_order() {
        let packages = vec![
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            Package::new("RUN", vec![15000.0, 1.0]),
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 0.0, 75.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];

        let processor = BatchProcessor::new(processing::ProcessingOptions {
            error_policy: processing::ErrorPolicy::Continue,
            parallel: true,
        });
        let report = processor.process(&packages);

        let kinds: Vec<String> = report
            .summaries()
            .into_iter()
            .map(|s| s.training_type)
            .collect();
        assert_eq!(kinds, vec!["SportsWalking", "Swimming", "Running"]);

        let failed: Vec<usize> = report.failures().map(|(o, _)| o.index).collect();
        assert_eq!(failed, vec![1, 3]);
    }

    #[test]
    fn test_kind_metadata() {
        for kind in ActivityKind::ALL {
            assert_eq!(dispatch::resolve(kind.code()).unwrap(), kind);
            assert!(kind.field_names().len() >= 3);
        }
    }
}
