mod axes;
mod charts;
mod svg;
mod tables;

pub use axes::{format_x_tick, format_y_tick, ChartAxes, X_MAJOR_TICK, Y_MAJOR_TICK};
pub use charts::{
    format_population_chart, print_population_chart, ChartGrid, Mark, CHART_TITLE, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
pub use svg::render_svg;
pub use tables::{
    format_parameter_table, format_run_summary, print_parameter_table, print_run_summary,
};
