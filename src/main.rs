mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod plot;
mod report;
mod stats;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::error::{AnalysisError, Result};
use crate::input::load_embedded;
use crate::pipeline::stage1_reshape::run_stage1;
use crate::pipeline::stage2_human::run_stage2;
use crate::pipeline::stage3_validation::run_stage3;
use crate::pipeline::stage4_agreement::run_stage4;
use crate::pipeline::stage5_paired::run_stage5;
use crate::pipeline::stage6_charts::{Stage6Input, write_charts};
use crate::report::json::write_summary;
use crate::report::text::{render_paired_preview, render_shape_line};
use crate::report::{build_summary, format_f64_6};

const PREVIEW_ROWS: usize = 5;

/// Validates MELMA-W automated scores against human evaluator ratings and
/// renders the comparison charts.
#[derive(Debug, Parser)]
#[command(name = "melma-validation", version, about)]
struct Cli {
    /// Directory receiving the chart files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Also write the computed statistics as JSON to this file.
    #[arg(long)]
    summary: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        let _ = write_failure(&mut io::stderr().lock(), &err);
        std::process::exit(1);
    }
}

fn write_failure(w: &mut impl Write, err: &AnalysisError) -> io::Result<()> {
    writeln!(w, "{err}")
}

fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "starting");

    let bundle = load_embedded()?;
    info!(
        automated_cases = bundle.automated.len(),
        human_models = bundle.human.len(),
        "embedded tables loaded"
    );

    let stage1 = run_stage1(&bundle);
    debug!(rows = stage1.long.len(), "automated table reshaped");

    let stage2 = run_stage2(&bundle);
    debug!(rows = stage2.scores.len(), "human ratings aggregated");

    let stage3 = run_stage3(&stage1, &stage2);
    let agreement = run_stage4(&stage3.rows);
    info!(
        bias = %format_f64_6(agreement.bias),
        upper_loa = %format_f64_6(agreement.upper_loa),
        lower_loa = %format_f64_6(agreement.lower_loa),
        "bland-altman agreement"
    );
    for row in agreement.outside_limits(&stage3.rows) {
        warn!(
            domain = %row.domain,
            diff = row.diff_score,
            "difference outside limits of agreement"
        );
    }

    let stage5 = run_stage5(&stage1, &stage2);
    println!("{}", render_shape_line(stage5.shape()));
    print!("{}", render_paired_preview(&stage5.rows, PREVIEW_ROWS));

    let charts = write_charts(
        &Stage6Input {
            reshaped: &stage1,
            human: &stage2,
            validation: &stage3,
            agreement: &agreement,
            paired: &stage5,
        },
        &cli.out,
    )?;

    if let Some(path) = &cli.summary {
        let summary = build_summary(&stage2, &stage3, &agreement, &stage5, &charts);
        write_summary(path, &summary)?;
        info!(path = %path.display(), "summary written");
    }

    println!("\nAll {} files generated successfully.", charts.len());
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
