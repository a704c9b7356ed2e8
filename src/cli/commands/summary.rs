use crate::batch::summarize;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::parser::parse_file;
use crate::ui::messages::header;
use crate::utils::fmt_hours;
use crate::utils::formatting::{bold, pad_left};
use crate::utils::table::{Column, Table};
use std::path::Path;

use super::build_validator;

/// Handle the `summary` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { file, today } = cmd {
        let records = parse_file(Path::new(file))?;
        let result = build_validator(cfg, today)?.validate(&records);
        let s = summarize(&records, &result);

        header(format!("{file}: {} record(s)", s.records));

        let mut table = Table::new(vec![Column::new("Status", 20), Column::new("Records", 7)]);
        for (label, n) in &s.by_status {
            table.add_row(vec![label.clone(), pad_left(&n.to_string(), 7)]);
        }
        println!("{}", table.render());

        println!("{}", bold("Hours"));
        for (label, h) in [
            ("Reported", s.reported_hours),
            ("Regular", s.regular_hours),
            ("Overtime", s.overtime_hours),
            ("Holiday", s.holiday_hours),
            ("Leave", s.leave_hours),
            ("Total", s.total_hours),
        ] {
            println!("  {:<10}{}", label, pad_left(&fmt_hours(h), 10));
        }

        println!();
        println!(
            "Rows with errors: {} | Rows with warnings: {}",
            s.rows_with_errors, s.rows_with_warnings
        );
    }
    Ok(())
}
