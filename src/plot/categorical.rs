use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::model::domains::{Domain, N_DOMAINS};
use crate::pipeline::stage1_reshape::Stage1Output;
use crate::pipeline::stage2_human::Stage2Output;
use crate::plot::{
    GROUP_WIDTH, PlotResult, SET2, box_stats, case_jitter, domain_axis, domain_label,
    group_offsets, legend_line, legend_swatch, title_font,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanMetric {
    Mean,
    Std,
}

#[derive(Clone)]
pub struct BarChartSpec<'a> {
    pub title: &'a str,
    pub y_desc: &'a str,
    pub y_range: (f64, f64),
    pub palette: &'a [RGBColor],
    pub reference: Option<(f64, &'a str)>,
}

pub fn render_box_strip(out_path: &Path, stage1: &Stage1Output) -> PlotResult {
    let models = &stage1.models;
    let offsets = group_offsets(models.len(), GROUP_WIDTH);
    let box_width = GROUP_WIDTH / models.len().max(1) as f64 * 0.8;

    let root = SVGBackend::new(out_path, (1600, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "MELMA Project: General Comparison (Distribution + Individual Cases)",
            title_font(26.0),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(domain_axis(), 50.0f64..105.0f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(N_DOMAINS)
        .x_label_formatter(&domain_label)
        .x_label_style(("sans-serif", 16))
        .y_desc("Score (0-100)")
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (j, &model) in models.iter().enumerate() {
        let color = SET2[j % SET2.len()];
        let mut boxes = Vec::new();
        let mut strokes = Vec::new();
        let mut points = Vec::new();

        for domain in Domain::ALL {
            let cases = stage1.model_domain_scores(model, domain);
            let values = cases.iter().map(|r| r.score).collect::<Vec<_>>();
            let Some(stats) = box_stats(&values) else {
                continue;
            };
            let center = domain.index() as f64 + offsets[j];
            let (x0, x1) = (center - box_width / 2.0, center + box_width / 2.0);
            let cap = box_width / 4.0;

            boxes.push((x0, x1, stats.q1, stats.q3));
            strokes.push(vec![(x0, stats.median), (x1, stats.median)]);
            strokes.push(vec![(center, stats.q3), (center, stats.whisker_high)]);
            strokes.push(vec![(center, stats.q1), (center, stats.whisker_low)]);
            strokes.push(vec![
                (center - cap, stats.whisker_high),
                (center + cap, stats.whisker_high),
            ]);
            strokes.push(vec![
                (center - cap, stats.whisker_low),
                (center + cap, stats.whisker_low),
            ]);

            let n_cases = cases.len() as u32;
            for r in &cases {
                points.push((center + case_jitter(r.case, n_cases, box_width * 0.6), r.score));
            }
        }

        chart
            .draw_series(boxes.iter().map(|&(x0, x1, q1, q3)| {
                Rectangle::new([(x0, q1), (x1, q3)], color.mix(0.4).filled())
            }))?
            .label(model)
            .legend(legend_swatch(color));
        chart.draw_series(boxes.iter().map(|&(x0, x1, q1, q3)| {
            Rectangle::new([(x0, q1), (x1, q3)], BLACK.mix(0.4).stroke_width(1))
        }))?;
        chart.draw_series(
            strokes
                .into_iter()
                .map(|line| PathElement::new(line, BLACK.mix(0.4).stroke_width(1))),
        )?;
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 6, color.filled())))?;
        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, 6, RGBColor(128, 128, 128).stroke_width(1))),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 16))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn render_human_bars(
    out_path: &Path,
    stage2: &Stage2Output,
    metric: HumanMetric,
    spec: &BarChartSpec<'_>,
) -> PlotResult {
    let models = &stage2.models;
    let offsets = group_offsets(models.len(), GROUP_WIDTH);
    let bar_width = GROUP_WIDTH / models.len().max(1) as f64;
    let (y_min, y_max) = spec.y_range;

    let root = SVGBackend::new(out_path, (1400, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, title_font(24.0))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(domain_axis(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(N_DOMAINS)
        .x_label_formatter(&domain_label)
        .x_label_style(("sans-serif", 15))
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (j, &model) in models.iter().enumerate() {
        let color = spec.palette[j % spec.palette.len().max(1)];
        let bars = Domain::ALL
            .iter()
            .filter_map(|&domain| {
                let score = stage2.get(model, domain)?;
                let value = match metric {
                    HumanMetric::Mean => score.mean,
                    HumanMetric::Std => score.std,
                };
                let center = domain.index() as f64 + offsets[j];
                Some((center - bar_width / 2.0, center + bar_width / 2.0, value))
            })
            .collect::<Vec<_>>();

        chart
            .draw_series(bars.iter().map(|&(x0, x1, v)| {
                Rectangle::new([(x0, y_min), (x1, v.min(y_max))], color.filled())
            }))?
            .label(model)
            .legend(legend_swatch(color));
    }

    if let Some((level, label)) = spec.reference {
        let style = BLACK.stroke_width(2);
        chart
            .draw_series(DashedLineSeries::new(
                vec![(-0.5, level), (Domain::ALL.len() as f64 - 0.5, level)],
                10,
                6,
                style,
            ))?
            .label(label)
            .legend(legend_line(style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 15))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
