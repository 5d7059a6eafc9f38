use crate::models::{SimulationConfig, SimulationState};

/// Major x tick spacing in months.
pub const X_MAJOR_TICK: usize = 5;
/// Major y tick spacing in geese.
pub const Y_MAJOR_TICK: f64 = 25_000.0;
/// Divisor for y tick labels (ten-thousands).
pub const Y_LABEL_SCALE: f64 = 10_000.0;

const MAX_Y_MAJOR_TICKS: f64 = 20.0;
const MAX_COLUMNS: usize = 100;

/// Axis bounds and tick spacing shared by every chart backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    /// Last month shown on the x axis
    pub x_max: usize,
    /// Months represented by one terminal column
    pub x_stride: usize,
    /// Top of the y axis, a multiple of `y_major`
    pub y_max: f64,
    pub y_major: f64,
    pub y_minor: f64,
}

impl ChartAxes {
    /// Bounds from the survived count and the peak level.
    ///
    /// The x axis covers the months the population survived (at least one,
    /// never beyond the trajectory). The y axis covers the peak level and both
    /// reference lines, rounded up to a major tick. Very tall ranges widen the
    /// tick step so there are at most twenty major rows.
    pub fn new(state: &SimulationState, config: &SimulationConfig) -> Self {
        let last_index = state.populations.len().saturating_sub(1);
        let x_max = (state.survived.max(1) as usize).min(last_index);
        let x_stride = (x_max + 1).div_ceil(MAX_COLUMNS).max(1);

        let top = [
            state.max_population,
            config.carrying_capacity,
            config.target_population,
        ]
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

        let multiplier = (top / (Y_MAJOR_TICK * MAX_Y_MAJOR_TICKS)).ceil().max(1.0);
        let y_major = Y_MAJOR_TICK * multiplier;
        let y_max = ((top / y_major).ceil() * y_major).max(y_major);

        Self {
            x_max,
            x_stride,
            y_max,
            y_major,
            y_minor: y_major / 2.0,
        }
    }

    /// Months shown as terminal columns, left to right.
    pub fn column_months(&self) -> Vec<usize> {
        (0..=self.x_max).step_by(self.x_stride).collect()
    }

    /// Whether a month gets a major x tick.
    pub fn is_major_month(&self, month: usize) -> bool {
        month % (X_MAJOR_TICK * self.x_stride) == 0
    }

    /// Months carrying a major x tick, from zero to `x_max`.
    pub fn x_major_ticks(&self) -> Vec<usize> {
        (0..=self.x_max).step_by(X_MAJOR_TICK).collect()
    }

    /// Major y tick values from zero to `y_max`.
    pub fn y_major_ticks(&self) -> Vec<f64> {
        let count = (self.y_max / self.y_major).round() as usize;
        (0..=count).map(|i| i as f64 * self.y_major).collect()
    }

    /// Minor y gridlines, halfway between major ticks.
    pub fn y_minor_ticks(&self) -> Vec<f64> {
        self.y_major_ticks()
            .iter()
            .map(|major| major + self.y_minor)
            .filter(|minor| *minor < self.y_max)
            .collect()
    }
}

/// Y tick label in ten-thousands, e.g. `2.5` for 25,000.
pub fn format_y_tick(value: f64) -> String {
    format!("{:.1}", value / Y_LABEL_SCALE)
}

/// X tick label; only every fifth month is labelled.
pub fn format_x_tick(month: usize) -> String {
    if month % X_MAJOR_TICK == 0 {
        month.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(levels: &[f64], survived: u32) -> SimulationState {
        let mut state = SimulationState::new(levels[0] as u64);
        for level in &levels[1..] {
            state.record(*level);
        }
        state.survived = survived;
        state
    }

    #[test]
    fn test_default_scale() {
        let config = SimulationConfig::default();
        let levels: Vec<f64> = (0..=72).map(|i| 250_000.0 - i as f64 * 1_000.0).collect();
        let state = state_with(&levels, 72);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.x_max, 72);
        assert_eq!(axes.x_stride, 1);
        assert_eq!(axes.y_major, 25_000.0);
        assert_eq!(axes.y_minor, 12_500.0);
        // capacity 275,000 is already a multiple of 25,000
        assert_eq!(axes.y_max, 275_000.0);
    }

    #[test]
    fn test_peak_above_capacity_rounds_up() {
        let config = SimulationConfig::default();
        let state = state_with(&[250_000.0, 281_000.0], 1);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.y_max, 300_000.0);
    }

    #[test]
    fn test_x_axis_stops_at_survival() {
        let config = SimulationConfig::default();
        let state = state_with(&[10_000.0, 5_000.0, 0.0, 0.0, 0.0], 2);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.x_max, 2);
    }

    #[test]
    fn test_x_axis_for_single_point() {
        let config = SimulationConfig::default();
        let state = SimulationState::new(250_000);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.x_max, 0);
        assert_eq!(axes.column_months(), vec![0]);
    }

    #[test]
    fn test_wide_horizon_uses_stride() {
        let config = SimulationConfig::default();
        let levels = vec![100_000.0; 301];
        let state = state_with(&levels, 300);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.x_stride, 4);
        assert!(axes.column_months().len() <= 100);
        assert!(axes.is_major_month(0));
        assert!(axes.is_major_month(20));
        assert!(!axes.is_major_month(5));
    }

    #[test]
    fn test_huge_capacity_widens_ticks() {
        let config = SimulationConfig {
            carrying_capacity: 10_000_000.0,
            ..SimulationConfig::default()
        };
        let state = SimulationState::new(250_000);
        let axes = ChartAxes::new(&state, &config);
        assert!(axes.y_major_ticks().len() <= 21);
        assert!(axes.y_max >= 10_000_000.0);
    }

    #[test]
    fn test_non_finite_values_ignored() {
        let config = SimulationConfig {
            carrying_capacity: f64::INFINITY,
            ..SimulationConfig::default()
        };
        let state = SimulationState::new(250_000);
        let axes = ChartAxes::new(&state, &config);
        assert!(axes.y_max.is_finite());
        assert_eq!(axes.y_max, 250_000.0);
    }

    #[test]
    fn test_negative_reference_lines() {
        let config = SimulationConfig {
            carrying_capacity: -5.0,
            target_population: -5.0,
            ..SimulationConfig::default()
        };
        let state = SimulationState::new(0);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.y_max, 25_000.0);
    }

    #[test]
    fn test_tick_formatters() {
        assert_eq!(format_y_tick(25_000.0), "2.5");
        assert_eq!(format_y_tick(275_000.0), "27.5");
        assert_eq!(format_y_tick(0.0), "0.0");
        assert_eq!(format_x_tick(10), "10");
        assert_eq!(format_x_tick(7), "");
    }

    #[test]
    fn test_major_ticks() {
        let config = SimulationConfig {
            carrying_capacity: 100_000.0,
            target_population: 50_000.0,
            ..SimulationConfig::default()
        };
        let state = SimulationState::new(60_000);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(
            axes.y_major_ticks(),
            vec![0.0, 25_000.0, 50_000.0, 75_000.0, 100_000.0]
        );
        assert_eq!(
            axes.y_minor_ticks(),
            vec![12_500.0, 37_500.0, 62_500.0, 87_500.0]
        );
    }

    #[test]
    fn test_x_major_ticks_every_fifth_month() {
        let config = SimulationConfig::default();
        let levels = vec![100_000.0; 13];
        let state = state_with(&levels, 12);
        let axes = ChartAxes::new(&state, &config);
        assert_eq!(axes.x_major_ticks(), vec![0, 5, 10]);
    }
}
