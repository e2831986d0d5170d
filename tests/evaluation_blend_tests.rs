#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use chartcalc_rs::internals::evaluation::blend::{
    apply_mod, base_difficulty, reduce_chart, sanitize, SkillCategory,
};

// ============================================================================
// Sanitize
// ============================================================================

#[test]
fn test_sanitize_passes_finite_values() {
    assert_eq!(sanitize(0.0f32), 0.0);
    assert_eq!(sanitize(3.25f32), 3.25);
    assert_eq!(sanitize(-1.0f32), -1.0);
}

#[test]
fn test_sanitize_replaces_non_finite_with_neutral() {
    assert_eq!(sanitize(f32::NAN), 1.0);
    assert_eq!(sanitize(f32::INFINITY), 1.0);
    assert_eq!(sanitize(f64::NEG_INFINITY), 1.0);
}

// ============================================================================
// Base Difficulty
// ============================================================================

#[test]
fn test_base_difficulty_zero_rate_contributes_nothing() {
    assert_eq!(base_difficulty(0.0f32, 0.9, 7.0), 0.0);
    assert_eq!(base_difficulty(-1.0f32, 0.9, 7.0), 0.0);
}

#[test]
fn test_base_difficulty_scales_with_rate() {
    let slow = base_difficulty(2.0f32, 0.9, 7.0);
    let fast = base_difficulty(8.0f32, 0.9, 7.0);
    assert!(slow > 0.0);
    assert!(fast > slow);
}

// ============================================================================
// Apply Mod
// ============================================================================

#[test]
fn test_apply_mod_weight_zero_disables() {
    // fast_pow(v, 0) pins the factor at ~1 regardless of the mod value.
    let scalar = 10.0f32;
    let blended = apply_mod(scalar, 1.5, 0.0);
    assert_relative_eq!(blended, scalar, max_relative = 0.05);
}

#[test]
fn test_apply_mod_neutral_value_is_identity_like() {
    let scalar = 10.0f32;
    let blended = apply_mod(scalar, 1.0, 1.0);
    assert_relative_eq!(blended, scalar, max_relative = 0.05);
}

#[test]
fn test_apply_mod_above_neutral_raises() {
    let scalar = 10.0f32;
    assert!(apply_mod(scalar, 1.4, 1.0) > scalar);
    assert!(apply_mod(scalar, 0.6, 1.0) < scalar);
}

// ============================================================================
// Chart Reduce
// ============================================================================

#[test]
fn test_reduce_chart_empty_is_floor() {
    let scalars: [f32; 0] = [];
    let counts: [usize; 0] = [];
    assert_eq!(reduce_chart(&scalars, &counts, 0.5, 1.0, 40.0), 1.0);
}

#[test]
fn test_reduce_chart_all_empty_intervals_is_floor() {
    let scalars = [0.0f32, 0.0, 0.0];
    let counts = [0usize, 0, 0];
    assert_eq!(reduce_chart(&scalars, &counts, 0.5, 1.0, 40.0), 1.0);
}

#[test]
fn test_reduce_chart_constant_series_is_that_value() {
    // Uniform series: CV is 0, the weighted mean is the value itself.
    let scalars = [12.0f32, 12.0, 12.0, 12.0];
    let counts = [8usize, 8, 8, 8];
    let rating = reduce_chart(&scalars, &counts, 0.5, 1.0, 40.0);
    assert_relative_eq!(rating, 12.0, max_relative = 1e-5);
}

#[test]
fn test_reduce_chart_dense_intervals_weigh_more() {
    // The hard interval carries nearly all the notes.
    let scalars = [20.0f32, 4.0];
    let heavy_hard = reduce_chart(&scalars, &[30, 2], 0.0, 1.0, 40.0);
    let heavy_easy = reduce_chart(&scalars, &[2, 30], 0.0, 1.0, 40.0);
    assert!(heavy_hard > heavy_easy);
}

#[test]
fn test_reduce_chart_variation_inflates() {
    let uniform = [10.0f32, 10.0, 10.0, 10.0];
    let spiky = [4.0f32, 16.0, 4.0, 16.0];
    let counts = [8usize, 8, 8, 8];
    // Same weighted mean, but the spiky chart disperses more.
    let flat = reduce_chart(&uniform, &counts, 0.5, 1.0, 40.0);
    let varied = reduce_chart(&spiky, &counts, 0.5, 1.0, 40.0);
    assert!(varied > flat);
}

#[test]
fn test_reduce_chart_clamps_to_published_range() {
    let huge = [1000.0f32, 1000.0];
    let counts = [8usize, 8];
    assert_eq!(reduce_chart(&huge, &counts, 0.5, 1.0, 40.0), 40.0);

    let tiny = [0.01f32, 0.01];
    assert_eq!(reduce_chart(&tiny, &counts, 0.5, 1.0, 40.0), 1.0);
}

#[test]
fn test_reduce_chart_output_is_finite_under_bad_input() {
    // A non-finite scalar slipping in is substituted, not propagated.
    let scalars = [10.0f32, f32::NAN, 10.0];
    let counts = [8usize, 8, 8];
    let rating = reduce_chart(&scalars, &counts, 0.5, 1.0, 40.0);
    assert!(rating.is_finite());
    assert!((1.0..=40.0).contains(&rating));
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_category_names_are_stable() {
    assert_eq!(SkillCategory::Stream.name(), "stream");
    assert_eq!(SkillCategory::Technical.name(), "technical");
    assert_eq!(SkillCategory::Chordjack.name(), "chordjack");
    assert_eq!(SkillCategory::Stamina.name(), "stamina");
}

#[test]
fn test_category_table_uses_registered_names() {
    use chartcalc_rs::internals::algorithms::mods::ModRegistry;
    let registry = ModRegistry::<f32>::standard();
    for category in SkillCategory::ALL {
        let mods = category.default_mods();
        assert!(!mods.is_empty());
        for name in mods {
            assert!(registry.find(name).is_some(), "unmapped mod '{}'", name);
        }
    }
}
