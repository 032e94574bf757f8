use super::*;

#[test]
fn defaults_match_documented_thresholds() {
    let d = DetectConfig::default();
    assert_eq!(d.max_working_dimension, 1000);
    assert_eq!(d.alpha_threshold, 50);
    assert_eq!(d.white_threshold, 240);
    assert_eq!(d.min_slot_area_fraction, 0.005);
    assert_eq!(d.min_slot_dimension, 10);
    assert_eq!(d.row_tolerance, 0.1);

    let c = ComposeConfig::default();
    assert_eq!(c.jpeg_quality(), 95);
    assert_eq!(c.background, [255, 255, 255]);
    assert_eq!(PreviewOptions::default().background, [240, 240, 240]);
    PhotoslotConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: PhotoslotConfig = serde_json::from_str(
        r#"{ "detect": { "row_tolerance": 0.05 }, "compose": { "format": "png" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.detect.row_tolerance, 0.05);
    assert_eq!(cfg.detect.max_working_dimension, 1000);
    assert_eq!(cfg.compose.format, OutputFormat::Png);
    assert_eq!(cfg.preview.filter, ToneFilter::None);
}

#[test]
fn invalid_values_are_rejected() {
    let d = DetectConfig {
        max_working_dimension: 0,
        ..DetectConfig::default()
    };
    assert!(matches!(d.validate(), Err(PhotoslotError::Validation(_))));

    let c = ComposeConfig {
        quality: 1.5,
        ..ComposeConfig::default()
    };
    assert!(c.validate().is_err());

    let p = PreviewOptions {
        overlay: Some(Overlay {
            rgba: [255, 0, 0, 255],
            opacity: 2.0,
        }),
        ..PreviewOptions::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = PhotoslotConfig::from_path("no/such/config.json").unwrap_err();
    assert!(err.to_string().contains("config.json"));
}
