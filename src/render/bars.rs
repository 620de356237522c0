use std::path::Path;

use plotters::prelude::*;

use crate::render::{
    AXIS_DESC_FONT, CAPTION_FONT, CHART_SIZE, GRID_BOLD, GRID_LIGHT, LABEL_FONT, RenderError,
    series_color, to_chart_err,
};

// Vertical bars over a segmented index axis; mode names are drawn rotated
// so long fixed_* labels stay readable.
pub fn draw_bar_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    bars: &[(String, f64)],
) -> Result<(), RenderError> {
    let max = bars
        .iter()
        .map(|b| b.1)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = if max.is_finite() && max > 0.0 {
        max * 1.05
    } else {
        1.0
    };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(80)
        .build_cartesian_2d((0..bars.len() as u32).into_segmented(), 0f64..y_max)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(BLACK.mix(GRID_LIGHT))
        .bold_line_style(BLACK.mix(GRID_BOLD))
        .label_style(LABEL_FONT)
        .x_label_style(LABEL_FONT.into_font().transform(FontTransform::Rotate90))
        .axis_desc_style(AXIS_DESC_FONT)
        .x_labels(bars.len())
        .x_label_formatter(&|x| bar_label(bars, x))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(to_chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(series_color(0).filled())
                .margin(12)
                .data(bars.iter().enumerate().map(|(idx, bar)| (idx as u32, bar.1))),
        )
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    crate::ok!("wrote {}", path.display());
    Ok(())
}

fn bar_label(bars: &[(String, f64)], x: &SegmentValue<u32>) -> String {
    match x {
        SegmentValue::CenterOf(idx) if (*idx as usize) < bars.len() => {
            bars[*idx as usize].0.clone()
        }
        _ => String::new(),
    }
}
