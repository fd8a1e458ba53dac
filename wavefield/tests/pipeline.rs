use glam::DVec3;
use wavefield::color::{Color, Gradient};
use wavefield::export::{CsvOptions, SampleWriter, SAMPLE_HEADER};
use wavefield::field::WaveField;
use wavefield::grid::{Bounds, Lattice, LatticeEnd, RandomCloud};
use wavefield::normalize::Normalization;
use wavefield::pipeline::Pipeline;
use wavefield::scenario::Scenario;
use wavefield::Error;

#[test]
fn min_max_then_red_blue() {
    let pipeline = Pipeline::new(WaveField::Travelling)
        .with_normalization(Some(Normalization::MinMax))
        .with_gradient(Gradient::RED_BLUE);

    let out = pipeline.colorize(&[1.0, 2.0, 3.0]).unwrap();
    let normalized: Vec<f64> = out.iter().map(|(v, _)| *v).collect();
    let colors: Vec<Color> = out.iter().map(|(_, c)| *c).collect();

    assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    assert_eq!(
        colors,
        vec![
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.5, 0.0, 0.5),
            Color::new(0.0, 0.0, 1.0),
        ]
    );
}

#[test]
fn lattice_overshoots_by_one_step() {
    let bounds = Bounds::new(DVec3::ZERO, DVec3::new(1.0, 0.5, 2.0));
    let lattice = Lattice::new(bounds, 0.25);

    assert_eq!(lattice.axis_counts().unwrap(), [6, 4, 10]);
    let points = lattice.generate().unwrap();
    assert_eq!(points.len(), 6 * 4 * 10);
    assert_eq!(points[0], DVec3::ZERO);
    assert_eq!(*points.last().unwrap(), DVec3::new(1.25, 0.75, 2.25));

    let inclusive = lattice.with_end(LatticeEnd::Inclusive);
    assert_eq!(inclusive.point_count().unwrap(), 5 * 3 * 9);
}

#[test]
fn inverted_bounds_are_rejected_everywhere() {
    let bad = Bounds::new(DVec3::splat(1.0), DVec3::ZERO);
    assert!(matches!(Lattice::new(bad, 0.1).generate(), Err(Error::InvalidBounds(_))));
    assert!(matches!(RandomCloud::new(bad, 5, 1).generate(), Err(Error::InvalidBounds(_))));
}

#[test]
fn seeded_scenarios_repeat() {
    let a = Scenario::bounce().points().unwrap();
    let b = Scenario::bounce().points().unwrap();
    assert_eq!(a, b);

    let other = Scenario::bounce().with_seed(7).points().unwrap();
    assert_ne!(a, other);
}

#[test]
fn boxed_wave_exports_every_lattice_point() {
    let scenario = Scenario::boxed_standing_wave();
    let points = scenario.points().unwrap();
    let samples = scenario.frame(&points, 0).unwrap();

    let mut writer = SampleWriter::new(Vec::new(), CsvOptions::default().with_header(true));
    writer.write_samples(&samples).unwrap();
    let (bytes, rows) = writer.finish().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    assert_eq!(rows, 25 * 25 * 25);
    assert_eq!(lines.next(), Some(SAMPLE_HEADER));
    assert_eq!(lines.next(), Some("-12.000000,-12.000000,-12.000000,0.000000"));
    assert_eq!(lines.last(), Some("12.000000,12.000000,12.000000,0.000000"));
}
