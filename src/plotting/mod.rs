//! Bar-chart rendering for the commit-activity series.

mod chart;
mod styles;
#[cfg(test)]
mod tests;

pub use chart::{generate_chart, PlotError};
pub use styles::{ChartStyle, ChartTheme};
