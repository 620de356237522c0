use std::path::Path;

use plotters::prelude::*;

use crate::pipeline::adaptive_series::PhaseSeries;
use crate::render::{
    AXIS_DESC_FONT, CAPTION_FONT, CHART_SIZE, GRID_BOLD, GRID_LIGHT, LABEL_FONT, RenderError,
    padded_range, series_color, to_chart_err,
};

// One line per phase group with circular markers, legend keyed by phase
// name. Groups whose points were all missing still get a legend entry.
pub fn draw_line_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    groups: &[PhaseSeries],
) -> Result<(), RenderError> {
    let (x_min, x_max) = padded_range(groups.iter().flat_map(|g| g.points.iter().map(|p| p.0)));
    let (y_min, y_max) = padded_range(groups.iter().flat_map(|g| g.points.iter().map(|p| p.1)));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(GRID_LIGHT))
        .bold_line_style(BLACK.mix(GRID_BOLD))
        .label_style(LABEL_FONT)
        .axis_desc_style(AXIS_DESC_FONT)
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(to_chart_err)?;

    for (idx, group) in groups.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(LineSeries::new(
                group.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(to_chart_err)?
            .label(group.phase.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                group
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .map_err(to_chart_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .label_font(LABEL_FONT)
        .draw()
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    crate::ok!("wrote {}", path.display());
    Ok(())
}
