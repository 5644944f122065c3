use crate::model::validation::PairedRow;
use crate::pipeline::stage5_paired::PAIRED_COLUMNS;

pub fn render_shape_line(shape: (usize, usize)) -> String {
    format!("Paired dataset shape: ({}, {})", shape.0, shape.1)
}

pub fn render_paired_preview(rows: &[PairedRow], n: usize) -> String {
    let shown = &rows[..rows.len().min(n)];
    let melma = format_column(&shown.iter().map(|r| r.melma_1_5).collect::<Vec<_>>());
    let human = format_column(&shown.iter().map(|r| r.human_1_5).collect::<Vec<_>>());
    let cells = shown
        .iter()
        .zip(melma.into_iter().zip(human))
        .map(|(r, (m, h))| [r.model.to_string(), r.domain.name().to_string(), m, h])
        .collect::<Vec<_>>();

    let index_width = shown.len().saturating_sub(1).to_string().len();
    let mut widths = PAIRED_COLUMNS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (name, w) in PAIRED_COLUMNS.iter().zip(widths) {
        out.push_str(&format!("  {:>w$}", name, w = w));
    }
    out.push('\n');
    for (i, row) in cells.iter().enumerate() {
        out.push_str(&format!("{:<w$}", i, w = index_width));
        for (cell, w) in row.iter().zip(widths) {
            out.push_str(&format!("  {:>w$}", cell, w = w));
        }
        out.push('\n');
    }
    out
}

// Shared precision per column: the fewest decimals (at least one, at most
// six) that keep every value's rounded digits.
pub fn format_column(values: &[f64]) -> Vec<String> {
    let precision = values
        .iter()
        .map(|v| {
            let text = format!("{v:.6}");
            text.split_once('.')
                .map(|(_, frac)| frac.trim_end_matches('0').len())
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
        .max(1);
    values.iter().map(|v| format!("{v:.precision$}")).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
