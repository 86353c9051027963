//! Bar chart rendering.
//!
//! Two shapes cover every chart in the report: grouped bars (one bar per
//! series within each category, with a legend) and single-series bars
//! colored per category. Both render to PNG files.

use anyhow::Context;
use plotters::prelude::*;
use std::path::Path;

/// Fill colors for series, reused in order when there are more series than
/// colors.
const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(140, 140, 140),
];

fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// One named series of per-category values for a grouped bar chart.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    /// One value per category; absent values draw no bar.
    pub values: Vec<Option<f64>>,
}

/// Captions and layout for one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    /// Output size in pixels.
    pub size: (u32, u32),
    /// Rotate category labels, for long benchmark names.
    pub rotate_labels: bool,
}

fn y_top(series: &[BarSeries]) -> Option<f64> {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().flatten())
        .fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));
    max.is_finite().then(|| if max <= 0.0 { 1.0 } else { max * 1.05 })
}

/// Render one bar per (category, series) pair, grouped by category, with a
/// legend naming each series.
pub fn grouped_bar_chart(
    path: &Path,
    spec: &ChartSpec<'_>,
    categories: &[String],
    series: &[BarSeries],
) -> anyhow::Result<()> {
    anyhow::ensure!(!categories.is_empty(), "chart '{}' has no categories", spec.title);
    let y_max = y_top(series)
        .with_context(|| format!("chart '{}' has no values to draw", spec.title))?;

    let root = BitMapBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(if spec.rotate_labels { 150 } else { 45 })
        .y_label_area_size(70)
        .build_cartesian_2d(-0.6..(categories.len() as f64 - 0.4), 0.0..y_max)?;

    let label_font = if spec.rotate_labels {
        ("sans-serif", 14)
            .into_font()
            .transform(FontTransform::Rotate90)
    } else {
        ("sans-serif", 14).into_font()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len())
        .x_label_formatter(&|x| {
            let index = x.round();
            if (x - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            categories
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(label_font)
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    let bar_width = 0.8 / series.len() as f64;
    for (series_index, bar_series) in series.iter().enumerate() {
        let color = series_color(series_index);
        let offset = -0.4 + series_index as f64 * bar_width;

        chart
            .draw_series(bar_series.values.iter().enumerate().filter_map(
                |(category_index, value)| {
                    value.map(|v| {
                        let x0 = category_index as f64 + offset;
                        Rectangle::new([(x0, 0.0), (x0 + bar_width * 0.9, v)], color.filled())
                    })
                },
            ))?
            .label(bar_series.name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()
        .with_context(|| format!("Write chart {}", path.display()))?;
    Ok(())
}

/// Render a single series with one colored bar per category and no legend.
pub fn category_bar_chart(
    path: &Path,
    spec: &ChartSpec<'_>,
    categories: &[String],
    values: &[Option<f64>],
) -> anyhow::Result<()> {
    anyhow::ensure!(!categories.is_empty(), "chart '{}' has no categories", spec.title);
    let single = [BarSeries {
        name: String::new(),
        values: values.to_vec(),
    }];
    let y_max = y_top(&single)
        .with_context(|| format!("chart '{}' has no values to draw", spec.title))?;

    let root = BitMapBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.6..(categories.len() as f64 - 0.4), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len())
        .x_label_formatter(&|x| {
            let index = x.round();
            if (x - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            categories
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 14))
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(values.iter().enumerate().filter_map(|(category_index, value)| {
        value.map(|v| {
            let x0 = category_index as f64 - 0.4;
            Rectangle::new(
                [(x0, 0.0), (x0 + 0.8, v)],
                series_color(category_index).filled(),
            )
        })
    }))?;

    root.present()
        .with_context(|| format!("Write chart {}", path.display()))?;
    Ok(())
}
