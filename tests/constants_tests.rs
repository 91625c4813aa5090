use vecviz_viewport::constants::*;

#[test]
fn palette_entries_are_valid_colors() {
    for color in DEFAULT_VECTOR_COLORS.iter().chain(ACCENT_COLORS.iter()) {
        for channel in color {
            assert!((0.0..=1.0).contains(channel), "channel {channel} out of range");
        }
    }
}

#[test]
fn vector_color_cycles_through_the_palette() {
    let n = DEFAULT_VECTOR_COLORS.len();
    for i in 0..n {
        assert_eq!(vector_color(i), DEFAULT_VECTOR_COLORS[i]);
        assert_eq!(vector_color(i + n), DEFAULT_VECTOR_COLORS[i], "palette must wrap");
    }
}

#[test]
fn transition_durations_are_ordered_by_urgency() {
    // resets feel snappier than focus, focus snappier than a full reframe
    assert!(RESET_DURATION_MS < FOCUS_DURATION_MS);
    assert!(FOCUS_DURATION_MS < AUTO_FRAME_DURATION_MS);
    assert_eq!(AUTO_FRAME_DURATION_MS, 1000.0);
    assert_eq!(FOCUS_DURATION_MS, 800.0);
    assert_eq!(RESET_DURATION_MS, 600.0);
}

#[test]
fn recompute_rates_stay_below_display_rate() {
    assert!(GRID_RECOMPUTE_HZ <= 10.0);
    assert!(SPAN_RECOMPUTE_HZ >= 15.0 && SPAN_RECOMPUTE_HZ <= 20.0);
}

#[test]
fn clamp_pairs_are_consistent() {
    assert!(GRID_SPACING_MIN < GRID_SPACING_MAX);
    assert!(GRID_OPACITY_MIN < GRID_OPACITY_MAX);
    assert!(LOD_DISTANCE_FACTOR_MIN < LOD_DISTANCE_FACTOR_MAX);
    assert!(LABEL_SCALE_MIN < LABEL_SCALE_MAX);
    assert!(LOD_OUTLINE_MAGNITUDE < LOD_ANNOTATION_MAGNITUDE);
    assert!(ZOOM_MIN_FLOOR < ZOOM_MAX_FLOOR);
}
