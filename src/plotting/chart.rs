use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::styles::{ChartStyle, ChartTheme};
use crate::types::DisplaySeries;

pub type PlotError = Box<dyn Error + Send + Sync>;

/// Render the daily commit-count series as a bar chart PNG at `path`.
///
/// The file is rewritten in place on every call, so successive lookups reuse
/// one chart surface.
pub fn generate_chart(series: &DisplaySeries, path: &str) -> Result<(), PlotError> {
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    draw_chart(series, &root)?;
    root.present()?;
    Ok(())
}

fn draw_chart(
    series: &DisplaySeries,
    root_area: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    root_area.fill(&theme.background_color)?;

    let max_count = series.values.iter().copied().max().unwrap_or(0);
    let y_max = (max_count as f64 * 1.1).max(1.0);

    let caption = match series.week_start {
        Some(date) => format!("Commits (week of {date})"),
        None => "Commits (most recent active days)".to_string(),
    };

    let mut chart_builder = ChartBuilder::on(root_area)
        .caption(
            caption,
            ("sans-serif", style.caption_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .set_all_label_area_size(style.label_area_size)
        .build_cartesian_2d(0f64..series.values.len() as f64, 0f64..y_max)?;

    // X positions are bar indices; labels come from the series itself.
    let labels = series.labels.clone();
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        labels.get(idx).map(|label| label.to_string()).unwrap_or_default()
    };

    chart_builder
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .y_desc("Commits")
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_labels(series.values.len().max(1))
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    draw_bars(&mut chart_builder, &series.values, &theme, &style)?;

    Ok(())
}

fn draw_bars(
    chart_builder: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[u64],
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let accent = theme.accent_color;
    let bar_width = style.bar_width;

    chart_builder
        .draw_series(values.iter().enumerate().map(|(i, count)| {
            let x0 = i as f64 + (1.0 - bar_width) / 2.0;
            let x1 = x0 + bar_width;
            Rectangle::new([(x0, 0.0), (x1, *count as f64)], accent.mix(0.6).filled())
        }))?
        .label("Commits")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], accent.mix(0.6).filled())
        });

    Ok(())
}
