use crate::config::Config;
use crate::core::{build_report, validate_history};
use crate::errors::AppResult;
use crate::history::load_history;
use crate::models::EvaluationInstant;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{BOLD, CYAN, RESET, color_for_end, colorize_label};
use crate::utils::date::format_date;
use crate::utils::table::{Cell, Column, Table};

/// Handle the `list` command: one row per period, then the total.
pub fn handle(cfg: &Config, at: EvaluationInstant) -> AppResult<()> {
    let periods = load_history(&cfg.history_path())?;
    let report = build_report(&periods, at);

    header(format!("Work history as of {at}"));

    if report.entries.is_empty() {
        warning("No work periods found.");
    } else {
        let mut table = Table::new(
            vec![
                Column::new("#", 2),
                Column::new("Title", 5),
                Column::new("Company", 7),
                Column::new("Start", 10),
                Column::new("End", 10),
                Column::new("Duration", 8),
            ],
            cfg.separator(),
        );

        for e in &report.entries {
            let end = e
                .end
                .map(format_date)
                .unwrap_or_else(|| cfg.ongoing_label.clone());

            table.add_row(vec![
                Cell::plain((e.index + 1).to_string()),
                Cell::plain(e.title.clone().unwrap_or_else(|| "-".into())),
                Cell::plain(e.company.clone().unwrap_or_else(|| "-".into())),
                Cell::plain(format_date(e.start)),
                Cell::colored(end, color_for_end(e.ongoing)),
                Cell::colored(e.label.clone(), CYAN),
            ]);
        }

        print!("{}", table.render());
    }

    println!(
        "\n{BOLD}Total experience:{RESET} {}",
        colorize_label(&report.total_label)
    );

    let issues = validate_history(&periods, at);
    if !issues.is_empty() {
        warning(format!(
            "{} entr{} with invalid dates counted as 0 months (see `rtenure check`)",
            issues.len(),
            if issues.len() == 1 { "y" } else { "ies" }
        ));
    }

    Ok(())
}
