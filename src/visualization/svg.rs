use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use super::axes::{format_x_tick, format_y_tick, ChartAxes};
use super::charts::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::error::SimulationError;
use crate::models::{SimulationConfig, SimulationState};

const SVG_SIZE: (u32, u32) = (1200, 700);

fn render_err<E: Display>(err: E) -> SimulationError {
    SimulationError::Render(err.to_string())
}

/// Write the population chart to an SVG file.
///
/// Draws the trajectory with the target and carrying-capacity lines on the
/// same axes as the terminal chart.
pub fn render_svg(
    state: &SimulationState,
    config: &SimulationConfig,
    path: &Path,
) -> Result<(), SimulationError> {
    let axes = ChartAxes::new(state, config);
    let x_max = axes.x_max.max(1) as f64;

    // pin ticks to the shared axes instead of letting plotters pick round steps
    let x_ticks: Vec<f64> = axes.x_major_ticks().into_iter().map(|m| m as f64).collect();
    let y_ticks = axes.y_major_ticks();
    let x_range = (0.0f64..x_max).with_key_points(x_ticks.clone());
    let y_range = (0.0f64..axes.y_max)
        .with_key_points(y_ticks.clone())
        .with_light_points(axes.y_minor_ticks());

    let root = SVGBackend::new(path, SVG_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(x_ticks.len())
        .y_labels(y_ticks.len())
        .x_label_formatter(&|x| format_x_tick(x.round() as usize))
        .y_label_formatter(&|y| format_y_tick(*y))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(render_err)?;

    let points: Vec<(f64, f64)> = state
        .populations
        .iter()
        .take(axes.x_max + 1)
        .enumerate()
        .map(|(month, level)| (month as f64, *level))
        .collect();

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(render_err)?
        .label("Population")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let reference_lines = [
        (config.target_population, GREEN, "Target"),
        (config.carrying_capacity, RED, "Carrying capacity"),
    ];
    for (level, color, name) in reference_lines {
        if !level.is_finite() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(vec![(0.0, level), (x_max, level)], &color))
            .map_err(render_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote SVG chart");
    Ok(())
}
