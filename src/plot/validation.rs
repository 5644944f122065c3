use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::model::domains::N_DOMAINS;
use crate::model::validation::{AgreementMetrics, PairedRow, ValidationRow};
use crate::pipeline::stage5_paired::Stage5Output;
use crate::plot::{
    AGREEMENT_COLOR, AUTOMATED_COLOR, DomainCoord, HUMAN_COLOR, HUMAN_Z_COLOR, MELMA_Z_COLOR,
    PlotResult, SOURCE_BAR_WIDTH, centered_range, domain_axis, domain_label, legend_line,
    legend_swatch, title_font,
};
use crate::stats::min_max;

const AUTOMATED_LABEL: &str = "MELMA (Automated)";
const HUMAN_LABEL: &str = "Evaluators (Human)";
const LIKERT_DESC: &str = "Likert Scale (1-5)";

const BA_X_RANGE: (f64, f64) = (3.0, 5.0);
const BA_BAND_X: (f64, f64) = (2.5, 5.5);

pub fn render_zscore_lines(out_path: &Path, rows: &[ValidationRow]) -> PlotResult {
    let melma = rows
        .iter()
        .map(|r| (r.domain.index() as f64, r.melma_z))
        .collect::<Vec<_>>();
    let human = rows
        .iter()
        .map(|r| (r.domain.index() as f64, r.human_z))
        .collect::<Vec<_>>();

    let all = rows
        .iter()
        .flat_map(|r| [r.melma_z, r.human_z])
        .collect::<Vec<_>>();
    let (lo, hi) = min_max(&all).unwrap_or((-1.0, 1.0));
    let (y_min, y_max) = centered_range(lo, hi, 1.2);

    let root = SVGBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Z-Score Comparison: Pattern Similarity", title_font(24.0))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(domain_axis(), y_min..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.2))
        .x_labels(N_DOMAINS)
        .x_label_formatter(&domain_label)
        .x_label_style(("sans-serif", 15))
        .y_desc("Standard Deviations (Z-Score)")
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    let melma_style = MELMA_Z_COLOR.stroke_width(3);
    chart
        .draw_series(LineSeries::new(melma.clone(), melma_style))?
        .label("MELMA (Normalized)")
        .legend(legend_line(melma_style));
    chart.draw_series(
        melma
            .iter()
            .map(|&p| Circle::new(p, 8, MELMA_Z_COLOR.filled())),
    )?;

    let human_style = HUMAN_Z_COLOR.stroke_width(3);
    chart
        .draw_series(DashedLineSeries::new(human.clone(), 12, 8, human_style))?
        .label("Human (Normalized)")
        .legend(legend_line(human_style));
    chart.draw_series(
        human
            .iter()
            .map(|&p| Circle::new(p, 8, HUMAN_Z_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 15))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn render_bland_altman(
    out_path: &Path,
    rows: &[ValidationRow],
    agreement: &AgreementMetrics,
) -> PlotResult {
    let (y_min, y_max) = centered_range(agreement.diff_min, agreement.diff_max, 2.5);
    let (x_min, x_max) = BA_X_RANGE;
    let band_x0 = BA_BAND_X.0.max(x_min);
    let band_x1 = BA_BAND_X.1.min(x_max);

    let root = SVGBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Bland-Altman Plot: Agreement Analysis", title_font(24.0))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .x_desc("Mean Score ((MELMA + Human)/2)")
        .y_desc("Difference (Human - MELMA)")
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [
            (band_x0, agreement.lower_loa.max(y_min)),
            (band_x1, agreement.upper_loa.min(y_max)),
        ],
        BLACK.mix(0.1).filled(),
    )))?;

    let bias_style = BLACK.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            vec![(x_min, agreement.bias), (x_max, agreement.bias)],
            bias_style,
        ))?
        .label(agreement.bias_label())
        .legend(legend_line(bias_style));

    let loa_style = RED.stroke_width(2);
    for (level, label) in [
        (agreement.upper_loa, "Upper Limit"),
        (agreement.lower_loa, "Lower Limit"),
    ] {
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_min, level), (x_max, level)],
                10,
                6,
                loa_style,
            ))?
            .label(label)
            .legend(legend_line(loa_style));
    }

    chart.draw_series(rows.iter().map(|r| {
        Circle::new(
            (r.mean_score, r.diff_score),
            10,
            AGREEMENT_COLOR.mix(0.8).filled(),
        )
    }))?;

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

fn draw_source_bars(
    chart: &mut ChartContext<'_, SVGBackend<'_>, DomainCoord>,
    melma: &[(usize, f64)],
    human: &[(usize, f64)],
    with_labels: bool,
) -> PlotResult {
    let half = SOURCE_BAR_WIDTH / 2.0;
    for (values, color, label, shift) in [
        (melma, AUTOMATED_COLOR, AUTOMATED_LABEL, -half),
        (human, HUMAN_COLOR, HUMAN_LABEL, half),
    ] {
        let anno = chart.draw_series(values.iter().map(|&(idx, v)| {
            let center = idx as f64 + shift;
            Rectangle::new(
                [(center - half, 0.0), (center + half, v.clamp(0.0, 5.0))],
                color.filled(),
            )
        }))?;
        if with_labels {
            anno.label(label).legend(legend_swatch(color));
        }
    }
    Ok(())
}

pub fn render_source_bars(out_path: &Path, rows: &[ValidationRow]) -> PlotResult {
    let melma = rows
        .iter()
        .map(|r| (r.domain.index(), r.melma))
        .collect::<Vec<_>>();
    let human = rows
        .iter()
        .map(|r| (r.domain.index(), r.human))
        .collect::<Vec<_>>();

    let root = SVGBackend::new(out_path, (1300, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Validation: MELMA Automated Scores vs. Human Evaluator Scores",
            title_font(24.0),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(domain_axis(), 0.0f64..5.0f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(N_DOMAINS)
        .x_label_formatter(&domain_label)
        .x_label_style(("sans-serif", 15))
        .y_desc(LIKERT_DESC)
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    draw_source_bars(&mut chart, &melma, &human, true)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 15))
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn paired_values(rows: &[&PairedRow]) -> (Vec<(usize, f64)>, Vec<(usize, f64)>) {
    let melma = rows
        .iter()
        .map(|r| (r.domain.index(), r.melma_1_5))
        .collect();
    let human = rows
        .iter()
        .map(|r| (r.domain.index(), r.human_1_5))
        .collect();
    (melma, human)
}

pub fn render_paired_panels(out_path: &Path, paired: &Stage5Output) -> PlotResult {
    let models = paired.models();

    let root = SVGBackend::new(out_path, (1800, 650)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Paired Validation (Model x Domain): MELMA-W vs Human Evaluators",
        title_font(24.0),
    )?;
    let panels = root.split_evenly((1, models.len().max(1)));

    for (i, (panel, &model)) in panels.iter().zip(models.iter()).enumerate() {
        let rows = paired.for_model(model);
        let (melma, human) = paired_values(&rows);

        let mut chart = ChartBuilder::on(panel)
            .caption(model, title_font(18.0))
            .margin(12)
            .x_label_area_size(50)
            .y_label_area_size(if i == 0 { 60 } else { 40 })
            .build_cartesian_2d(domain_axis(), 0.0f64..5.0f64)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .light_line_style(BLACK.mix(0.0))
            .bold_line_style(BLACK.mix(0.2))
            .x_label_formatter(&domain_label)
            .x_label_style(("sans-serif", 11))
            .x_labels(N_DOMAINS);
        if i == 0 {
            mesh.y_desc(LIKERT_DESC);
        }
        mesh.draw()?;

        draw_source_bars(&mut chart, &melma, &human, i == 0)?;

        if i == 0 {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(("sans-serif", 13))
                .background_style(WHITE.mix(0.9))
                .border_style(BLACK)
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}
