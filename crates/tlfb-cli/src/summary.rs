use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use tlfb_model::ChecklistSection;
use tlfb_query::QUERY_PARAMETERS;

use tlfb_cli::commands::SessionReport;

pub fn print_report(report: &SessionReport) {
    println!("{}", report.version_title);
    println!("{}", report.title);
    println!("{}", report.subtitle);
    println!("URL: {}", report.url);
    println!("{}", properties_table(report));
    println!(
        "Calendar: {} to {}, height {}px",
        display_or_dash(&report.calendar.valid_range.start),
        display_or_dash(&report.calendar.valid_range.end),
        report.calendar.height
    );
    if !report.missing.is_empty() {
        println!("Missing: {}", report.missing.join(", "));
    }
    for alert in &report.alerts {
        eprintln!("alert: {alert}");
    }
}

pub fn properties_table(report: &SessionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Property"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for param in &QUERY_PARAMETERS {
        let value = report.properties.get(param.field);
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        table.add_row(vec![
            Cell::new(param.name),
            Cell::new(param.field.name()),
            value_cell,
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("days").add_attribute(Attribute::Bold),
        Cell::new(report.properties.days()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_checklist(sections: &[ChecklistSection]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Id"),
        header_cell("Value"),
        header_cell("Substance"),
    ]);
    apply_table_style(&mut table);
    for section in sections {
        if section.items.is_empty() {
            table.add_row(vec![
                category_cell(&section.heading),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (index, item) in section.items.iter().enumerate() {
            let category = if index == 0 {
                category_cell(&section.heading)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                category,
                Cell::new(&item.id),
                Cell::new(&item.value),
                Cell::new(&item.label),
            ]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
