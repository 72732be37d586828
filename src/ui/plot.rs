use eframe::egui::{Color32, Ui};
use egui_plot::{GridInput, GridMark, Line, Plot, PlotPoints};

use crate::state::ChartState;

/// Spacing of the X-axis gridlines, in samples.
pub const X_TICK_STEP: f64 = 20.0;

/// Upper bound on gridlines drawn for one axis.
const MAX_GRID_MARKS: usize = 500;

// ---------------------------------------------------------------------------
// Sample plot (central panel)
// ---------------------------------------------------------------------------

/// Render the sample sequence as a single line series.
pub fn sample_plot(ui: &mut Ui, state: &ChartState) {
    Plot::new("sample_plot")
        .x_axis_label("samples")
        .y_axis_label("response")
        .show_grid(true)
        .x_grid_spacer(|input| multiple_locator(X_TICK_STEP, input))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::Borrowed(state.points()))
                .name(&state.display.title)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Grid spacing
// ---------------------------------------------------------------------------

/// Gridlines at every multiple of `step` inside the visible bounds.
///
/// When zoomed out far enough to exceed [`MAX_GRID_MARKS`], the step is
/// widened to a multiple of itself so the lines stay on multiples of `step`.
pub fn multiple_locator(step: f64, input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    if !(step > 0.0 && min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }

    // Kept in f64: far-out zoom spans exceed any integer type.
    let span_marks = ((max - min) / step).floor() + 1.0;
    let factor = (span_marks / MAX_GRID_MARKS as f64).ceil().max(1.0);
    let step = step * factor;
    if !step.is_finite() {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(marks: &[GridMark]) -> Vec<f64> {
        marks.iter().map(|m| m.value).collect()
    }

    fn input(min: f64, max: f64) -> GridInput {
        GridInput {
            bounds: (min, max),
            base_step_size: 1.0,
        }
    }

    #[test]
    fn marks_fall_on_multiples_of_twenty() {
        let marks = multiple_locator(X_TICK_STEP, input(-5.0, 65.0));
        assert_eq!(values(&marks), vec![0.0, 20.0, 40.0, 60.0]);
        assert!(marks.iter().all(|m| m.step_size == 20.0));
    }

    #[test]
    fn bounds_on_a_multiple_are_inclusive() {
        let marks = multiple_locator(X_TICK_STEP, input(20.0, 60.0));
        assert_eq!(values(&marks), vec![20.0, 40.0, 60.0]);
    }

    #[test]
    fn narrow_window_between_ticks_has_no_marks() {
        assert!(multiple_locator(X_TICK_STEP, input(1.0, 19.0)).is_empty());
    }

    #[test]
    fn wide_window_is_thinned_but_stays_on_multiples() {
        let marks = multiple_locator(X_TICK_STEP, input(0.0, 1.0e6));
        assert!(marks.len() <= MAX_GRID_MARKS + 1);
        assert!(marks.iter().all(|m| m.value % 20.0 == 0.0));
    }

    #[test]
    fn extreme_zoom_out_stays_bounded() {
        let marks = multiple_locator(X_TICK_STEP, input(-1.0e22, 1.0e22));
        assert!(!marks.is_empty());
        assert!(marks.len() <= MAX_GRID_MARKS + 1);
        assert!(marks.iter().all(|m| m.value.is_finite()));
    }

    #[test]
    fn span_overflowing_f64_yields_nothing() {
        assert!(multiple_locator(X_TICK_STEP, input(-f64::MAX, f64::MAX)).is_empty());
    }

    #[test]
    fn degenerate_bounds_yield_nothing() {
        assert!(multiple_locator(X_TICK_STEP, input(f64::NAN, 10.0)).is_empty());
        assert!(multiple_locator(X_TICK_STEP, input(10.0, 0.0)).is_empty());
        assert!(multiple_locator(0.0, input(0.0, 10.0)).is_empty());
    }
}
