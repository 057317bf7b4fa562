use candlestick_chart::domain::chart::{
    ChartConfig, ViewportState, VisibleWindow, WheelContext, WheelDelta, apply_wheel,
};
use quickcheck_macros::quickcheck;

const CONTEXT: WheelContext = WheelContext { series_len: 100, canvas_width: 500.0 };

fn initial() -> (ChartConfig, ViewportState) {
    let config = ChartConfig::default();
    let state = ViewportState::initial(&config, CONTEXT.series_len, CONTEXT.canvas_width);
    (config, state)
}

#[test]
fn wheel_up_by_a_thousand_doubles_the_zoom() {
    let (config, state) = initial();
    let next = apply_wheel(&state, WheelDelta::new(0.0, -1000.0), &config, CONTEXT);

    assert_eq!(next.scale_multiplier, 2.0);
    assert_eq!(next.candle_width, 27);
    assert_eq!(next.candle_margin, 6);
    assert_eq!(next.wick_width, 3);
}

#[test]
fn zoom_never_goes_below_zero() {
    let (config, state) = initial();
    let next = apply_wheel(&state, WheelDelta::new(0.0, 5000.0), &config, CONTEXT);

    assert_eq!(next.scale_multiplier, 0.0);
    assert_eq!((next.candle_width, next.candle_margin, next.wick_width), (1, 0, 1));
    assert_eq!(next.pitch(), 1.0);
}

#[test]
fn scrolling_past_the_end_is_clamped() {
    let (config, state) = initial();
    let next = apply_wheel(&state, WheelDelta::new(10_000.0, 0.0), &config, CONTEXT);
    assert_eq!(next.scroll_offset, 1900.0);

    let back = apply_wheel(&next, WheelDelta::new(-10_000.0, 0.0), &config, CONTEXT);
    assert_eq!(back.scroll_offset, -500.0);
}

#[quickcheck]
fn widths_stay_odd_and_positive(deltas: Vec<i16>) -> bool {
    let (config, mut state) = initial();
    for delta in deltas {
        state = apply_wheel(&state, WheelDelta::new(0.0, delta as f64), &config, CONTEXT);
        if state.candle_width % 2 == 0 || state.wick_width % 2 == 0 || state.scale_multiplier < 0.0 {
            return false;
        }
    }
    true
}

#[quickcheck]
fn right_edge_column_stays_within_one_pitch(delta_y: i16) -> bool {
    let (config, state) = initial();
    let delta_y = (delta_y % 500) as f64;
    let Some(window) = VisibleWindow::resolve(&state, CONTEXT.series_len, CONTEXT.canvas_width) else {
        return false;
    };
    let anchor = window.end_index as f64;
    let next = apply_wheel(&state, WheelDelta::new(0.0, delta_y), &config, CONTEXT);

    let before = state.pitch() * anchor - state.scroll_offset;
    let after = next.pitch() * anchor - next.scroll_offset;
    (after - before).abs() <= next.pitch()
}

#[quickcheck]
fn offset_stays_inside_scroll_bounds(gestures: Vec<(i16, i16)>) -> bool {
    let (config, mut state) = initial();
    gestures.into_iter().all(|(dx, dy)| {
        state = apply_wheel(&state, WheelDelta::new(dx as f64, dy as f64), &config, CONTEXT);
        let (min, max) = state.scroll_bounds(CONTEXT.series_len, CONTEXT.canvas_width);
        state.scroll_offset >= min && state.scroll_offset <= max
    })
}
