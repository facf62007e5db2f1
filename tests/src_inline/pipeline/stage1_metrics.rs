use super::*;

fn sample_report() -> NetworkReport {
    serde_json::from_str(
        r#"{
            "ips": 120,
            "response_avg": 1.5,
            "ports": [22, 80, 443],
            "ip_life": {"1st_quartile": 0.75, "variance": "0.42"}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_stage1_network_profile() {
    let out = run_stage1(&sample_report(), &RadarProfile::network_v1()).unwrap();
    assert_eq!(out.values, vec![120.0, 1.5, 3.0, 0.75, 0.42]);
    assert_eq!(out.ranges[0], AxisRange::new(0.0, 2000.0));
    assert_eq!(out.ranges[4], AxisRange::new(0.0, 0.84));
    assert_eq!(out.metrics[3], MetricKey::IpLifeFirstQuartile);
    assert_eq!(out.label_refs()[4], "variance en s");
}

#[test]
fn test_stage1_bad_variance_fails() {
    let mut report = sample_report();
    report.ip_life.variance = crate::input::report::Numeric::Text("n/a".to_string());
    let err = run_stage1(&report, &RadarProfile::network_v1()).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_stage1_overflowing_variance_string_fails() {
    let mut report = sample_report();
    report.ip_life.variance = crate::input::report::Numeric::Text("1e400".to_string());
    let err = run_stage1(&report, &RadarProfile::network_v1()).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}
