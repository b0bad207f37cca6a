// src/export/text.rs

use crate::models::day::WeekReport;
use crate::utils::date::weekday_label;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Plain-text table: one row per day with recorded activity.
pub fn render_text(report: &WeekReport, show_weekday: &str) -> String {
    let with_weekday = weekday_label(report.monday, show_weekday).is_some();

    let mut columns = vec![Column::new("Date")];
    if with_weekday {
        columns.push(Column::new("Day"));
    }
    columns.push(Column::new("Gaps"));
    columns.push(Column::new("Free"));

    let mut table = Table::new(columns);
    for day in &report.days {
        let mut row = vec![day.date.to_string()];
        if let Some(wd) = weekday_label(day.date, show_weekday) {
            row.push(wd);
        }
        row.push(if day.gaps.is_empty() {
            "None".to_string()
        } else {
            day.gaps
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        });
        row.push(mins2readable(day.total_minutes()));
        table.add_row(row);
    }

    let mut out = format!(
        "Week {} → {} ({}), {} entries\n\n",
        report.monday, report.sunday, report.timezone, report.entry_count
    );
    out.push_str(&table.render());
    out.push_str(&format!(
        "\nTotal uncovered: {}\n",
        mins2readable(report.total_gap_minutes())
    ));
    out
}
