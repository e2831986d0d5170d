#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use chartcalc_rs::internals::algorithms::mods::{
    balance, chord_pressure, density, fatigue, gap_spread, surge, ModParams, ModRegistry,
    ModSpec, RollingState,
};
use chartcalc_rs::internals::algorithms::segment::{IntervalData, Segmenter};
use chartcalc_rs::prelude::*;

fn params() -> ModParams<f32> {
    ModParams {
        clamp_low: 0.5,
        clamp_high: 1.5,
        reference_rate: 4.0,
        shape: 0.9,
        smoothing: 0.25,
    }
}

/// Segment a one-interval chart and return its data.
fn single_interval(events: &[NoteEvent<f32>], columns: usize, width: f32) -> IntervalData<f32> {
    let timeline = Timeline::new(events, columns);
    let mut segmenter = Segmenter::new(&timeline, width);
    let mut data = IntervalData::new(columns);
    assert!(segmenter.next_into(&mut data));
    assert_eq!(segmenter.interval_count(), 1, "expected a one-interval chart");
    data
}

/// Segment a chart and run one mod over every interval in order.
fn run_mod(
    events: &[NoteEvent<f32>],
    columns: usize,
    width: f32,
    func: fn(&IntervalData<f32>, &mut RollingState<f32>, &ModParams<f32>) -> f32,
) -> Vec<f32> {
    let timeline = Timeline::new(events, columns);
    let mut segmenter = Segmenter::new(&timeline, width);
    let mut data = IntervalData::new(columns);
    let mut state = RollingState::new();
    let p = params();
    let mut out = Vec::new();
    while segmenter.next_into(&mut data) {
        out.push(func(&data, &mut state, &p));
    }
    out
}

fn evenly_spaced(count: usize, gap: f32, columns: usize) -> Vec<NoteEvent<f32>> {
    (0..count)
        .map(|i| NoteEvent::tap(i as f32 * gap, i % columns))
        .collect()
}

// ============================================================================
// Balance
// ============================================================================

#[test]
fn test_balance_even_spread_is_neutral() {
    // One note per beat across two columns: perfectly even.
    let events = evenly_spaced(4, 1.0, 2);
    let interval = single_interval(&events, 2, 4.0);
    let mut state = RollingState::new();
    assert_eq!(balance(&interval, &mut state, &params()), 1.0);
}

#[test]
fn test_balance_dead_column_is_extreme() {
    // One column at 1 Hz, the other idle: maximum skew, clamp ceiling.
    let events: Vec<NoteEvent<f32>> = (0..4).map(|i| NoteEvent::tap(i as f32, 0)).collect();
    let interval = single_interval(&events, 2, 4.0);
    let mut state = RollingState::new();
    assert_eq!(balance(&interval, &mut state, &params()), params().clamp_high);
}

#[test]
fn test_balance_empty_interval_is_neutral() {
    let interval = IntervalData::<f32>::new(4);
    let mut state = RollingState::new();
    assert_eq!(balance(&interval, &mut state, &params()), 1.0);
}

#[test]
fn test_balance_partial_skew_between_bounds() {
    // Three notes on one column, one on the other.
    let events = vec![
        NoteEvent::tap(0.0, 0),
        NoteEvent::tap(1.0, 0),
        NoteEvent::tap(2.0, 0),
        NoteEvent::tap(3.0, 1),
    ];
    let interval = single_interval(&events, 2, 4.0);
    let mut state = RollingState::new();
    let value = balance(&interval, &mut state, &params());
    assert!(value > 1.0 && value < params().clamp_high);
}

// ============================================================================
// Density
// ============================================================================

#[test]
fn test_density_empty_interval_is_neutral() {
    let interval = IntervalData::<f32>::new(4);
    let mut state = RollingState::new();
    assert_eq!(density(&interval, &mut state, &params()), 1.0);
}

#[test]
fn test_density_monotone_in_note_count() {
    // Adding notes that increase local density never lowers the mod.
    let mut previous = 0.0f32;
    for count in 1..24usize {
        let events = evenly_spaced(count, 4.0 / count as f32, 4);
        let timeline = Timeline::new(&events, 4);
        let mut segmenter = Segmenter::new(&timeline, 8.0f32);
        let mut data = IntervalData::new(4);
        assert!(segmenter.next_into(&mut data));
        let mut state = RollingState::new();
        let value = density(&data, &mut state, &params());
        assert!(
            value >= previous,
            "density decreased at count {}: {} < {}",
            count,
            value,
            previous
        );
        previous = value;
    }
}

#[test]
fn test_density_at_reference_rate_is_near_neutral() {
    // 4 notes per second against a reference of 4: ratio 1, fast_pow ~1.
    let events = evenly_spaced(8, 0.25, 2);
    let interval = single_interval(&events, 2, 2.0);
    let mut state = RollingState::new();
    let value = density(&interval, &mut state, &params());
    assert_relative_eq!(value, 1.0, max_relative = 0.05);
}

// ============================================================================
// Gap Spread
// ============================================================================

#[test]
fn test_gap_spread_uniform_timing_is_neutral() {
    // Constant gaps disperse nothing: CV 0, neutral output.
    let events = evenly_spaced(8, 0.25, 1);
    let interval = single_interval(&events, 1, 2.0);
    let mut state = RollingState::new();
    assert_eq!(gap_spread(&interval, &mut state, &params()), 1.0);
}

#[test]
fn test_gap_spread_uneven_timing_rises() {
    // Alternating short and long gaps in one column.
    let positions = [0.0f32, 0.1, 0.6, 0.7, 1.2, 1.3, 1.8];
    let events: Vec<NoteEvent<f32>> =
        positions.iter().map(|&p| NoteEvent::tap(p, 0)).collect();
    let interval = single_interval(&events, 1, 2.0);
    let mut state = RollingState::new();
    let value = gap_spread(&interval, &mut state, &params());
    assert!(value > 1.0);
    assert!(value <= params().clamp_high);
}

#[test]
fn test_gap_spread_too_few_gaps_is_neutral() {
    let events = vec![NoteEvent::tap(0.0f32, 0), NoteEvent::tap(0.5, 0)];
    let interval = single_interval(&events, 1, 2.0);
    let mut state = RollingState::new();
    // Exactly one gap: not enough to measure dispersion.
    assert_eq!(gap_spread(&interval, &mut state, &params()), 1.0);
}

// ============================================================================
// Chord Pressure
// ============================================================================

#[test]
fn test_chord_pressure_no_chords_is_neutral() {
    let events = evenly_spaced(4, 0.5, 4);
    let interval = single_interval(&events, 4, 2.0);
    let mut state = RollingState::new();
    assert_eq!(chord_pressure(&interval, &mut state, &params()), 1.0);
}

#[test]
fn test_chord_pressure_all_chords_is_extreme() {
    let mut events = Vec::new();
    for i in 0..4 {
        events.push(NoteEvent::tap(i as f32 * 0.5, 0));
        events.push(NoteEvent::tap(i as f32 * 0.5, 1));
    }
    let interval = single_interval(&events, 2, 2.0);
    let mut state = RollingState::new();
    assert_eq!(
        chord_pressure(&interval, &mut state, &params()),
        params().clamp_high
    );
}

#[test]
fn test_chord_pressure_empty_interval_is_neutral() {
    let interval = IntervalData::<f32>::new(4);
    let mut state = RollingState::new();
    assert_eq!(chord_pressure(&interval, &mut state, &params()), 1.0);
}

// ============================================================================
// Surge (dependent)
// ============================================================================

#[test]
fn test_surge_first_interval_seeds_and_is_neutral() {
    let events = evenly_spaced(4, 0.25, 1);
    let interval = single_interval(&events, 1, 1.0);
    let mut state = RollingState::new();
    assert_eq!(surge(&interval, &mut state, &params()), 1.0);
    assert_relative_eq!(state.rolling_gap.unwrap(), 0.25);
}

#[test]
fn test_surge_acceleration_rises_deceleration_falls() {
    // Gaps shrink from 0.5 to 0.125 across the chart: accelerating.
    let mut accelerating = Vec::new();
    let mut position = 0.0f32;
    for gap in [0.5f32, 0.25, 0.125] {
        for _ in 0..8 {
            accelerating.push(NoteEvent::tap(position, 0));
            position += gap;
        }
    }
    let values = run_mod(&accelerating, 1, 2.0, surge);
    assert!(values.iter().skip(1).any(|&v| v > 1.0));

    // The mirrored chart decelerates and dips below neutral somewhere.
    let mut decelerating = Vec::new();
    let mut position = 0.0f32;
    for gap in [0.125f32, 0.25, 0.5] {
        for _ in 0..8 {
            decelerating.push(NoteEvent::tap(position, 0));
            position += gap;
        }
    }
    let values = run_mod(&decelerating, 1, 2.0, surge);
    assert!(values.iter().skip(1).any(|&v| v < 1.0));
}

#[test]
fn test_surge_is_order_sensitive() {
    // Dependent state makes the pass a stream: reversing the chart's
    // shape changes the outputs. Documented, deliberate.
    let mut speeding = Vec::new();
    let mut position = 0.0f32;
    for gap in [0.5f32, 0.125] {
        for _ in 0..8 {
            speeding.push(NoteEvent::tap(position, 0));
            position += gap;
        }
    }
    let mut slowing = Vec::new();
    let mut position = 0.0f32;
    for gap in [0.125f32, 0.5] {
        for _ in 0..8 {
            slowing.push(NoteEvent::tap(position, 0));
            position += gap;
        }
    }
    let forward = run_mod(&speeding, 1, 2.0, surge);
    let backward = run_mod(&slowing, 1, 2.0, surge);
    assert_ne!(forward, backward);
}

#[test]
fn test_surge_empty_interval_keeps_rolling_gap() {
    let interval = IntervalData::<f32>::new(1);
    let mut state = RollingState::new();
    state.rolling_gap = Some(0.25);
    assert_eq!(surge(&interval, &mut state, &params()), 1.0);
    assert_eq!(state.rolling_gap, Some(0.25));
}

// ============================================================================
// Fatigue (dependent)
// ============================================================================

#[test]
fn test_fatigue_sustained_density_accumulates() {
    // A long dense run at twice the reference rate.
    let events = evenly_spaced(128, 0.125, 4);
    let values = run_mod(&events, 4, 2.0, fatigue);
    // Output grows monotonically toward the ceiling as fatigue builds.
    for pair in values.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert!(*values.last().unwrap() > 1.0);
}

#[test]
fn test_fatigue_drains_in_sparse_stretches() {
    // Dense opening, then a sparse tail at an easy rate.
    let mut events = evenly_spaced(64, 0.125, 2);
    let mut position = 8.0f32;
    for _ in 0..8 {
        events.push(NoteEvent::tap(position, 0));
        position += 2.0;
    }
    let values = run_mod(&events, 2, 2.0, fatigue);
    let peak = values
        .iter()
        .cloned()
        .fold(0.0f32, f32::max);
    assert!(*values.last().unwrap() < peak);
}

#[test]
fn test_fatigue_rested_chart_stays_neutral() {
    // Below the reference rate there is no excess to accumulate.
    let events = evenly_spaced(8, 1.0, 2);
    let values = run_mod(&events, 2, 2.0, fatigue);
    for value in values {
        assert_eq!(value, 1.0);
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_standard_registry_contents() {
    let registry = ModRegistry::<f32>::standard();
    for name in [
        "balance",
        "density",
        "gap_spread",
        "chord_pressure",
        "surge",
        "fatigue",
    ] {
        assert!(registry.find(name).is_some(), "missing mod '{}'", name);
    }
    assert_eq!(registry.len(), 6);
    assert!(registry.find("surge").unwrap().dependent);
    assert!(!registry.find("balance").unwrap().dependent);
}

#[test]
fn test_registry_replaces_in_place() {
    fn always_neutral(
        _interval: &IntervalData<f32>,
        _state: &mut RollingState<f32>,
        _params: &ModParams<f32>,
    ) -> f32 {
        1.0
    }

    let mut registry = ModRegistry::<f32>::standard();
    let original_index = registry.index_of("density").unwrap();
    registry.register(ModSpec {
        name: "density",
        func: always_neutral,
        dependent: false,
    });
    // Same position, same length, new function.
    assert_eq!(registry.index_of("density"), Some(original_index));
    assert_eq!(registry.len(), 6);
}
