use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use daybook_ingest::BrowseListing;
use daybook_markup::RenderedText;
use daybook_model::{CheckIssue, IssueSeverity};

use crate::types::{CheckResult, ScheduleResult};

pub fn print_check_summary(result: &CheckResult) {
    println!("Program: {}", result.program_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Folder"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for report in &result.reports {
        let errors = report.error_count();
        let warnings = report.warning_count();
        total_errors += errors;
        total_warnings += warnings;
        table.add_row(vec![
            report
                .ordinal
                .map_or_else(|| dim_cell("-"), |o| day_cell(o.get())),
            Cell::new(&report.folder),
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} folders", result.reports.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(result);
}

fn print_issue_table(result: &CheckResult) {
    let mut issues: Vec<(&str, &CheckIssue)> = result
        .reports
        .iter()
        .flat_map(|r| r.issues.iter().map(move |issue| (r.folder.as_str(), issue)))
        .collect();
    if issues.is_empty() {
        return;
    }
    // Errors first, then folder order as reported.
    issues.sort_by_key(|(_, issue)| severity_rank(issue.severity));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Folder"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Location"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (folder, issue) in issues {
        table.add_row(vec![
            Cell::new(folder)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            location_cell(issue),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_schedule(result: &ScheduleResult) {
    match result.current_day {
        Some(day) => println!("Current day: {day}"),
        None => println!("Program has not started yet"),
    }
    if result.due.is_empty() {
        println!("Nothing due");
    } else {
        let due: Vec<String> = result.due.iter().map(ToString::to_string).collect();
        println!("Due: {}", due.join(", "));
    }
}

pub fn print_browse_listing(listing: &BrowseListing, descriptor: Option<&RenderedText>) {
    let crumbs: Vec<String> = listing
        .path
        .breadcrumbs()
        .iter()
        .map(|p| p.name().unwrap_or_default().to_string())
        .collect();
    println!("📁 /{}", crumbs.join(" / "));
    if let Some(text) = descriptor {
        println!();
        println!("{text}");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Name")]);
    apply_table_style(&mut table);
    if let Some(parent) = listing.path.parent() {
        table.add_row(vec![dim_cell("up"), Cell::new(format!("/{parent}"))]);
    }
    for folder in &listing.folders {
        table.add_row(vec![
            Cell::new("folder").fg(Color::Blue),
            Cell::new(folder).add_attribute(Attribute::Bold),
        ]);
    }
    for file in &listing.files {
        table.add_row(vec![Cell::new("file"), Cell::new(file.as_str())]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn location_cell(issue: &CheckIssue) -> Cell {
    match (&issue.origin, issue.position) {
        (Some(origin), Some(position)) => {
            Cell::new(format!("{origin}:{}:{}", position.line, position.column))
        }
        (Some(origin), None) => Cell::new(origin.as_str()),
        (None, _) => dim_cell("-"),
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 0,
        IssueSeverity::Warning => 1,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn day_cell(day: u32) -> Cell {
    Cell::new(day).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
