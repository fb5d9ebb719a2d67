use expense_charts::api::{LineChart, LineChartConfig};
use expense_charts::core::{DayPoint, SeriesInput, Viewport};
use expense_charts::render::{LINE_SERIES_PALETTE, NullRenderer};
use proptest::prelude::*;

fn build_series(samples: &[(u8, i16, u16)]) -> Vec<SeriesInput> {
    LINE_SERIES_PALETTE
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let points = samples
                .iter()
                .filter(|(serie, _, _)| usize::from(*serie) % LINE_SERIES_PALETTE.len() == index)
                .map(|(_, day, sum)| DayPoint::new(i64::from(*day), f64::from(*sum)))
                .collect();
            SeriesInput::new(format!("s{index}"), *color, points)
        })
        .collect()
}

proptest! {
    #[test]
    fn dense_series_span_the_combined_range_and_keep_mass(
        samples in proptest::collection::vec((0u8..3, -200i16..200, 0u16..5000), 1..96)
    ) {
        let inputs = build_series(&samples);
        let config = LineChartConfig::new(Viewport::new(1200, 700));
        let mut engine = LineChart::new(NullRenderer::default(), config).expect("line init");
        engine.set_data(inputs.clone());

        let dataset = engine.dataset().expect("dataset");
        let expected_len = usize::try_from(dataset.max_day - dataset.min_day + 1).expect("len");
        for (serie, input) in dataset.series.iter().zip(&inputs) {
            prop_assert_eq!(serie.points.len(), expected_len);
            let dense_total: f64 = serie.points.iter().map(|point| point.sum).sum();
            let input_total: f64 = input.points.iter().map(|point| point.sum).sum();
            prop_assert!((dense_total - input_total).abs() <= 1e-6);
            prop_assert!(serie.points.windows(2).all(|pair| pair[1].day == pair[0].day + 1));
        }
    }

    #[test]
    fn projected_points_stay_inside_the_plot(
        samples in proptest::collection::vec((0u8..3, -200i16..200, 0u16..5000), 1..96),
        width in 200u32..2000,
        height in 200u32..2000
    ) {
        let config = LineChartConfig::new(Viewport::new(width, height));
        let mut engine = LineChart::new(NullRenderer::default(), config).expect("line init");
        engine.set_data(build_series(&samples));

        let geometry = engine.geometry().expect("geometry").clone();
        let plot = geometry.plot;
        for serie in &geometry.series {
            for point in &serie.points {
                prop_assert!(point.x >= plot.left - 1e-9 && point.x <= plot.right + 1e-9);
                prop_assert!(point.y >= plot.top - 1e-9 && point.y <= plot.bottom + 1e-9);
            }
        }

        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
    }
}
