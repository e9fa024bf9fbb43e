//! End-to-end: integrate a circular orbit, bridge the dense output into a
//! container, then query it back and confirm the round trip is sane.

use eph_bridge::{BridgeConfig, BridgedBody, bridge_body, from_output_samples, write_container};
use eph_container::ContainerReader;
use eph_integrator::{IntegrationConfig, KeplerianElements, integrate};
use eph_provider::NullProvider;
use eph_query::QueryEngine;

#[test]
fn integrate_bridge_and_query_round_trip() {
    let elements = KeplerianElements {
        epoch_jd: 2_451_545.0,
        semi_major_axis_m: 1.495_978_707e11,
        eccentricity: 0.0,
        inclination_rad: 0.0,
        arg_periapsis_rad: 0.0,
        raan_rad: 0.0,
        mean_anomaly_rad: 0.0,
    };
    let config = IntegrationConfig {
        elements,
        start_jd: 2_451_545.0,
        duration_days: 32.0,
        step_days: 0.25,
        output_step_days: 0.25,
        provider_is_precise: false,
        max_degraded_fraction: 1.0,
    };
    let mut provider = NullProvider::new([50.0 * 1.495_978_707e11, 0.0, 0.0]);
    let (samples, report) = integrate(&config, &mut provider).unwrap();
    assert_eq!(report.steps_taken, (32.0 / 0.25_f64).round() as u64);

    let dense = from_output_samples(&samples);
    let bridge_config = BridgeConfig {
        start_jd: 2_451_545.0,
        end_jd: 2_451_545.0 + 32.0,
        interval_days: 16.0,
        degree: 9,
        residual_threshold_au: 1e-8,
        max_halvings: 2,
    };
    let (intervals, blocks, bridge_report) = bridge_body(&dense, &bridge_config).unwrap();
    assert!(!bridge_report.residual_threshold_exceeded);

    let path = std::env::temp_dir().join("eph_bridge_round_trip_test.eph");
    write_container(
        &path,
        &intervals,
        bridge_config.degree as u32,
        vec![BridgedBody {
            id: 1,
            name: "TestBody".into(),
            blocks,
        }],
    )
    .unwrap();

    let mut engine = QueryEngine::open(&path).unwrap();
    let pos = engine.compute(1, 2_451_545.0 + 8.0).unwrap();
    let r = (pos[0] * pos[0] + pos[1] * pos[1] + pos[2] * pos[2]).sqrt();
    assert!((r - 1.0).abs() < 1e-3, "expected ~1 AU, got {r}");

    let reader = ContainerReader::open(&path).unwrap();
    assert_eq!(reader.bodies().len(), 1);
    assert_eq!(reader.bodies()[0].name, "TestBody");
}
