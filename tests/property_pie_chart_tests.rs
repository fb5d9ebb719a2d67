use expense_charts::api::{PieChart, PieChartConfig};
use expense_charts::core::{Record, Viewport};
use expense_charts::render::NullRenderer;
use proptest::prelude::*;

fn records_from(samples: &[(u8, f64)]) -> Vec<Record> {
    samples
        .iter()
        .map(|(category, amount)| Record::new(format!("c{}", category % 12), *amount, 0))
        .collect()
}

proptest! {
    #[test]
    fn wedge_sweeps_cover_the_full_ring(
        samples in proptest::collection::vec((0u8..32, 0.01f64..10_000.0), 1..64)
    ) {
        let config = PieChartConfig::new(Viewport::new(600, 600));
        let mut engine = PieChart::new(NullRenderer::default(), config).expect("pie init");
        engine.set_payloads(records_from(&samples));

        let wedges = engine.wedges();
        let sweep_sum: f64 = wedges.iter().map(|wedge| wedge.sweep_angle_deg).sum();
        prop_assert!((sweep_sum - 360.0).abs() <= 1e-3);
        prop_assert!((wedges[0].start_angle_deg + 90.0).abs() <= 1e-12);
        for pair in wedges.windows(2) {
            prop_assert!((pair[0].end_angle_deg() - pair[1].start_angle_deg).abs() <= 1e-9);
        }
    }

    #[test]
    fn frames_are_deterministic_and_valid(
        samples in proptest::collection::vec((0u8..32, 0.01f64..10_000.0), 1..64),
        width in 50u32..2000,
        height in 50u32..2000
    ) {
        let config = PieChartConfig::new(Viewport::new(width, height));
        let mut engine = PieChart::new(NullRenderer::default(), config).expect("pie init");
        engine.set_payloads(records_from(&samples));

        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(first.arcs().count(), engine.wedges().len());
        prop_assert_eq!(first.lines().count(), engine.wedges().len());
    }

    #[test]
    fn hit_test_returns_a_wedge_only_inside_the_band(
        samples in proptest::collection::vec((0u8..32, 0.01f64..10_000.0), 1..32),
        x in 0.0f64..600.0,
        y in 0.0f64..600.0
    ) {
        let config = PieChartConfig::new(Viewport::new(600, 600));
        let mut engine = PieChart::new(NullRenderer::default(), config).expect("pie init");
        engine.set_payloads(records_from(&samples));

        let ring = engine.ring_geometry();
        let distance = ring.distance_from_center(x, y);
        let hit = engine.hit_test(x, y);
        if distance < ring.inner_radius() || distance > ring.outer_radius() {
            prop_assert!(hit.is_none());
        } else {
            prop_assert!(hit.is_some());
        }
    }
}
