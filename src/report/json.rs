use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn write_summary(path: &Path, data: &SummaryData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = render_summary_json(data)?;
    fs::write(path, json)?;
    Ok(())
}
