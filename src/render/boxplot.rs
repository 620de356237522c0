use std::path::Path;

use plotters::prelude::*;

use crate::pipeline::phase_distribution::PhaseLatencies;
use crate::render::{
    AXIS_DESC_FONT, CAPTION_FONT, CHART_SIZE, GRID_BOLD, GRID_LIGHT, LABEL_FONT, RenderError,
    padded_range, series_color, to_chart_err,
};

// One box per phase, outliers suppressed. A phase with no latency values
// keeps its axis slot but draws no box.
pub fn draw_boxplot(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    groups: &[PhaseLatencies],
) -> Result<(), RenderError> {
    let quartiles: Vec<Option<Quartiles>> = groups
        .iter()
        .map(|g| {
            if g.values.is_empty() {
                None
            } else {
                Some(Quartiles::new(&g.values))
            }
        })
        .collect();

    let (y_min, y_max) = padded_range(
        quartiles
            .iter()
            .flatten()
            .flat_map(|q| q.values().into_iter().map(f64::from)),
    );

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0..groups.len() as u32).into_segmented(),
            y_min as f32..y_max as f32,
        )
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(BLACK.mix(GRID_LIGHT))
        .bold_line_style(BLACK.mix(GRID_BOLD))
        .label_style(LABEL_FONT)
        .axis_desc_style(AXIS_DESC_FONT)
        .x_labels(groups.len())
        .x_label_formatter(&|x| phase_label(groups, x))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(to_chart_err)?;

    let style = series_color(0);
    chart
        .draw_series(quartiles.iter().enumerate().filter_map(|(idx, q)| {
            q.as_ref().map(|q| {
                Boxplot::new_vertical(SegmentValue::CenterOf(idx as u32), q)
                    .width(36)
                    .whisker_width(0.5)
                    .style(style)
            })
        }))
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    crate::ok!("wrote {}", path.display());
    Ok(())
}

fn phase_label(groups: &[PhaseLatencies], x: &SegmentValue<u32>) -> String {
    match x {
        SegmentValue::CenterOf(idx) if (*idx as usize) < groups.len() => {
            groups[*idx as usize].phase.to_string()
        }
        _ => String::new(),
    }
}
