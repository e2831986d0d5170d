use chartcalc_rs::prelude::*;

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[test]
fn test_even_two_column_beat_stream_has_neutral_balance() {
    // Four notes evenly spaced one per beat across two columns, one
    // four-beat interval: a perfectly even spread.
    let events: Vec<NoteEvent<f32>> = (0..4usize)
        .map(|i| NoteEvent::tap(i as f32, i % 2))
        .collect();
    let timeline = Timeline::new(&events, 2);

    let mut calc = Calc::new()
        .interval_unit(Beats)
        .interval_width(4.0)
        .return_series()
        .build()
        .unwrap();
    let result = calc.rate(&timeline).unwrap();

    assert_eq!(result.intervals, 1);
    let balance = result.mod_series("balance").unwrap();
    assert_eq!(balance.values, vec![1.0]);
}

#[test]
fn test_one_sided_chart_pins_balance_at_clamp_ceiling() {
    // One column at 1 Hz, the other idle for the whole interval: maximum
    // skew, no division by zero, clamp-ceiling output.
    let events: Vec<NoteEvent<f32>> = (0..4).map(|i| NoteEvent::tap(i as f32, 0)).collect();
    let timeline = Timeline::new(&events, 2);

    let mut calc = Calc::new()
        .interval_width(4.0)
        .mod_clamp(0.5, 1.5)
        .return_series()
        .build()
        .unwrap();
    let result = calc.rate(&timeline).unwrap();

    assert_eq!(result.intervals, 1);
    let balance = result.mod_series("balance").unwrap();
    assert_eq!(balance.values, vec![1.5]);
}

#[test]
fn test_empty_timeline_rates_at_minimum_everywhere() {
    let events: Vec<NoteEvent<f32>> = Vec::new();
    let timeline = Timeline::new(&events, 4);

    let mut calc = Calc::new().rating_range(1.0, 40.0).build().unwrap();
    let result = calc.rate(&timeline).unwrap();

    assert_eq!(result.ratings.len(), 4);
    for rating in &result.ratings {
        assert!(rating.value.is_finite());
        assert_eq!(rating.value, 1.0);
    }
}

#[test]
fn test_full_pipeline_is_deterministic() {
    let events: Vec<NoteEvent<f32>> = (0..512usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.13, (i * 7) % 4))
        .collect();
    let timeline = Timeline::new(&events, 4);

    let mut calc = Calc::new().build().unwrap();
    let first = calc.rate(&timeline).unwrap();
    let second = calc.rate(&timeline).unwrap();

    for (a, b) in first.ratings.iter().zip(second.ratings.iter()) {
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
}

#[test]
fn test_chordjack_chart_outranks_stream_chart_on_chordjack() {
    // All two-note chords versus a single-note stream of the same rate.
    let mut chords = Vec::new();
    for i in 0..64 {
        chords.push(NoteEvent::tap(i as f32 * 0.25, 0));
        chords.push(NoteEvent::tap(i as f32 * 0.25, 1));
    }
    let stream: Vec<NoteEvent<f32>> = (0..64usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.25, i % 2))
        .collect();

    let mut calc = Calc::new().build().unwrap();
    let chord_rating = calc
        .rate(&Timeline::new(&chords, 4))
        .unwrap()
        .rating(Chordjack)
        .unwrap();
    let stream_rating = calc
        .rate(&Timeline::new(&stream, 4))
        .unwrap()
        .rating(Chordjack)
        .unwrap();
    assert!(chord_rating > stream_rating);
}

#[test]
fn test_ratings_stay_inside_published_range() {
    // A dense, messy chart cannot escape the configured bounds.
    let events: Vec<NoteEvent<f32>> = (0..2048usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.02, (i * 3) % 4))
        .collect();
    let timeline = Timeline::new(&events, 4);

    let mut calc = Calc::new().rating_range(1.0, 40.0).build().unwrap();
    let result = calc.rate(&timeline).unwrap();
    for rating in &result.ratings {
        assert!((1.0..=40.0).contains(&rating.value));
    }
}

#[test]
fn test_offset_invariance() {
    // Shifting every position by a constant changes nothing.
    let original: Vec<NoteEvent<f32>> = (0..128usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.25, i % 4))
        .collect();
    let shifted: Vec<NoteEvent<f32>> = original
        .iter()
        .map(|e| NoteEvent::tap(e.position + 512.0, e.column))
        .collect();

    let mut calc = Calc::new().build().unwrap();
    let a = calc.rate(&Timeline::new(&original, 4)).unwrap();
    let b = calc.rate(&Timeline::new(&shifted, 4)).unwrap();
    assert_eq!(a.intervals, b.intervals);
    for (x, y) in a.ratings.iter().zip(b.ratings.iter()) {
        assert_eq!(x.value.to_bits(), y.value.to_bits());
    }
}

// ============================================================================
// Builder Behavior
// ============================================================================

#[test]
fn test_duplicate_parameter_is_rejected() {
    let result = Calc::<f32>::new()
        .interval_width(0.5)
        .interval_width(1.0)
        .build();
    assert_eq!(
        result.unwrap_err(),
        CalcError::DuplicateParameter {
            parameter: "interval_width"
        }
    );
}

#[test]
fn test_invalid_interval_width_is_rejected() {
    let result = Calc::<f32>::new().interval_width(0.0).build();
    assert!(matches!(
        result.unwrap_err(),
        CalcError::InvalidIntervalWidth(_)
    ));
}

#[test]
fn test_inverted_clamp_range_is_rejected() {
    let result = Calc::<f32>::new().mod_clamp(1.5, 0.5).build();
    assert!(matches!(result.unwrap_err(), CalcError::InvalidClampRange { .. }));
}

#[test]
fn test_unknown_weighted_mod_is_rejected() {
    let result = Calc::<f32>::new().mod_weight("no_such_mod", 1.0).build();
    assert_eq!(
        result.unwrap_err(),
        CalcError::UnknownMod("no_such_mod".to_string())
    );
}

#[test]
fn test_negative_mod_weight_is_rejected() {
    let result = Calc::<f32>::new().mod_weight("balance", -0.5).build();
    assert!(matches!(result.unwrap_err(), CalcError::InvalidModWeight { .. }));
}

#[test]
fn test_invalid_smoothing_is_rejected() {
    let result = Calc::<f32>::new().smoothing(0.0).build();
    assert!(matches!(result.unwrap_err(), CalcError::InvalidSmoothing(_)));
}

#[test]
fn test_disabling_a_mod_changes_its_category_only() {
    let events: Vec<NoteEvent<f32>> = (0..128usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.2, if i % 4 == 0 { 1 } else { 0 }))
        .collect();
    let timeline = Timeline::new(&events, 2);

    let mut plain = Calc::new().build().unwrap();
    let mut unweighted = Calc::new().mod_weight("chord_pressure", 0.0).build().unwrap();

    let a = plain.rate(&timeline).unwrap();
    let b = unweighted.rate(&timeline).unwrap();
    // Stream does not map chord_pressure, so it is unaffected.
    assert_eq!(
        a.rating(Stream).unwrap().to_bits(),
        b.rating(Stream).unwrap().to_bits()
    );
}

// ============================================================================
// Custom Mods
// ============================================================================

fn longest_column_run(
    interval: &IntervalData<f32>,
    _state: &mut RollingState<f32>,
    params: &ModParams<f32>,
) -> f32 {
    // Rough jack detector: repeated presses on one column with short gaps.
    let mut value = 1.0f32;
    for deltas in &interval.column_deltas {
        let quick = deltas.iter().filter(|&&d| d < 0.2).count();
        value += quick as f32 * 0.05;
    }
    value.min(params.clamp_high)
}

#[test]
fn test_custom_mod_participates_in_rating() {
    let jacky: Vec<NoteEvent<f32>> = (0..64)
        .map(|i| NoteEvent::tap(i as f32 * 0.15, 0))
        .collect();
    let spread: Vec<NoteEvent<f32>> = (0..64usize)
        .map(|i| NoteEvent::tap(i as f32 * 0.15, i % 4))
        .collect();

    let mut calc = Calc::new()
        .register_mod(ModSpec {
            name: "column_run",
            func: longest_column_run,
            dependent: false,
        })
        .categories(vec![(Technical, vec!["column_run"])])
        .build()
        .unwrap();

    let jacky_rating = calc
        .rate(&Timeline::new(&jacky, 4))
        .unwrap()
        .rating(Technical)
        .unwrap();
    let spread_rating = calc
        .rate(&Timeline::new(&spread, 4))
        .unwrap()
        .rating(Technical)
        .unwrap();
    assert!(jacky_rating > spread_rating);
}
