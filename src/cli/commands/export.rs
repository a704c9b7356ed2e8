use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv::write_csv, ensure_writable, json::write_json};
use crate::parser::parse_file;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `export` command
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        out,
        format,
        force,
    } = cmd
    {
        let records = parse_file(Path::new(file))?;
        let path = Path::new(out);

        ensure_writable(path, *force)?;
        info(format!(
            "Exporting {} record(s) to {}: {}",
            records.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => write_csv(path, &records)?,
            ExportFormat::Json => write_json(path, &records)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
    }
    Ok(())
}
