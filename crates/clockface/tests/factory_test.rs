//! Integration tests for clock construction through the public API.

use clockface::{
    ClockConfig, ClockError, ClockFactory, ClockTime, ColorScheme, OsEntropy, PartialColorScheme,
    Rgba, create, create_with_config,
};
use clockface_test_support::init_test_tracing;

#[test]
fn test_create_image_matches_requested_size() {
    init_test_tracing();

    for size in [1, 2, 3, 16, 99, 128] {
        let clock = create(size).unwrap();
        assert_eq!(clock.image().dimensions(), (size, size));
    }
}

#[test]
fn test_create_with_config_returns_supplied_time_unchanged() {
    init_test_tracing();

    for hour in 0..12 {
        for minute in 0..60 {
            let time = ClockTime::new(hour, minute).unwrap();
            let clock = create_with_config(8, ClockConfig::default().with_time(time)).unwrap();
            assert_eq!(clock.time(), time);
        }
    }
}

#[test]
fn test_create_with_config_zero_size_returns_render_error() {
    init_test_tracing();

    let config = ClockConfig::default().with_time(ClockTime::new(3, 30).unwrap());

    match create_with_config(0, config) {
        Err(ClockError::Render(_)) => {}
        other => panic!("expected Render error, got {other:?}"),
    }
}

#[test]
fn test_create_zero_size_returns_render_error() {
    assert!(matches!(create(0), Err(ClockError::Render(_))));
}

#[test]
fn test_supplied_colors_reach_the_image() {
    let colors = PartialColorScheme::default().with_background(Rgba::opaque(0, 128, 0));
    let config = ClockConfig::default()
        .with_time(ClockTime::new(0, 0).unwrap())
        .with_colors(colors);

    let clock = create_with_config(100, config).unwrap();

    assert_eq!(clock.image().get_pixel(50, 75).0, [0, 128, 0, 255]);
}

#[test]
fn test_default_colors_paint_white_face() {
    let config = ClockConfig::default().with_time(ClockTime::new(0, 0).unwrap());

    let clock = create_with_config(100, config).unwrap();

    let white = ColorScheme::DEFAULT.background;
    assert_eq!(
        clock.image().get_pixel(50, 75).0,
        [white.r, white.g, white.b, white.a]
    );
}

#[test]
fn test_config_loaded_from_json_renders() {
    let config: ClockConfig = serde_json::from_str(
        r#"{"time": {"hour": 4, "minute": 45}, "colors": {"hour_hand": {"r": 0, "g": 0, "b": 0, "a": 255}}}"#,
    )
    .unwrap();

    let clock = create_with_config(48, config).unwrap();

    assert_eq!(clock.time(), ClockTime::new(4, 45).unwrap());
}

#[test]
fn test_random_times_vary_between_calls() {
    let times: Vec<ClockTime> = (0..5).map(|_| create(4).unwrap().time()).collect();

    // All five equal has probability 720^-4.
    assert!(times.iter().any(|t| *t != times[0]));
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_random_times_are_uniform() {
    const SAMPLES: usize = 12_000;
    let mut factory = ClockFactory::new(OsEntropy);
    let mut hours = [0_usize; 12];
    let mut minutes = [0_usize; 60];

    for _ in 0..SAMPLES {
        let time = factory.create(2).unwrap().time();
        hours[usize::from(time.hour())] += 1;
        minutes[usize::from(time.minute())] += 1;
    }

    let chi_squared = |counts: &[usize]| {
        let expected = SAMPLES as f64 / counts.len() as f64;
        counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum::<f64>()
    };

    // Critical values well beyond p = 0.0001 for 11 and 59 degrees of freedom.
    assert!(chi_squared(&hours) < 40.0, "hours: {hours:?}");
    assert!(chi_squared(&minutes) < 110.0, "minutes: {minutes:?}");
    assert!(hours.iter().all(|&c| c > 0));
    assert!(minutes.iter().all(|&c| c > 0));
}
