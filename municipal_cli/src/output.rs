use anyhow::Result;
use colored::Colorize;
use municipal_lib::forecast::ForecastRow;
use municipal_lib::summary::Summary;
use municipal_lib::table::{ResultsTable, TableRow, EMPTY_NOTICE};
use municipal_lib::types::AvailableItems;
use municipal_lib::{AmountTone, ShellView};
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct CellRow {
    #[tabled(rename = "Item Code")]
    #[serde(rename = "Item Code")]
    item_code: String,
    #[tabled(rename = "Item Description")]
    #[serde(rename = "Item Description")]
    item_label: String,
    #[tabled(rename = "Function")]
    #[serde(rename = "Function")]
    function_label: String,
    #[tabled(rename = "Amount (ZAR)")]
    #[serde(rename = "Amount (ZAR)")]
    amount: String,
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Total Amount")]
    #[serde(rename = "Total Amount")]
    total: String,
    #[tabled(rename = "Line Items")]
    #[serde(rename = "Line Items")]
    count: usize,
    #[tabled(rename = "Query Details")]
    #[serde(rename = "Query Details")]
    label: String,
}

#[derive(Tabled, Serialize)]
struct ItemRow {
    #[tabled(rename = "Item Code")]
    #[serde(rename = "Item Code")]
    code: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
}

#[derive(Tabled, Serialize)]
struct MunicipalityRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Municipality")]
    #[serde(rename = "Municipality")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct ForecastTableRow {
    #[tabled(rename = "Sector/Item")]
    #[serde(rename = "Sector/Item")]
    key: String,
    #[tabled(rename = "Forecast")]
    #[serde(rename = "Forecast")]
    forecast: String,
    #[tabled(rename = "Allocation")]
    #[serde(rename = "Allocation")]
    allocation: String,
}

/// JSON document for a query: the summary (if any) and every row.
#[derive(Serialize)]
struct QueryDocument<'a> {
    summary: Option<&'a Summary>,
    rows: &'a [TableRow],
}

// -- Row builders --

/// How the item code token is marked up in a given format.
#[derive(Clone, Copy)]
enum CodeStyle {
    Plain,
    Backticks,
}

fn build_cell_rows(rows: &[TableRow], code_style: CodeStyle, colorize: bool) -> Vec<CellRow> {
    rows.iter()
        .map(|r| CellRow {
            item_code: match code_style {
                CodeStyle::Plain => r.item_code.clone(),
                CodeStyle::Backticks => format!("`{}`", r.item_code),
            },
            item_label: r.item_label.clone(),
            function_label: r.function_label.clone(),
            amount: if colorize {
                tone_amount(&r.amount_display, r.tone)
            } else {
                r.amount_display.clone()
            },
        })
        .collect()
}

fn build_summary_row(summary: &Summary) -> SummaryRow {
    SummaryRow {
        total: summary.formatted_total(),
        count: summary.item_count,
        label: summary.query_label.clone(),
    }
}

fn build_item_rows(items: &AvailableItems) -> Vec<ItemRow> {
    items
        .codes()
        .map(|code| ItemRow {
            code: code.to_string(),
            label: items.label(code).unwrap_or_default().to_string(),
        })
        .collect()
}

fn build_forecast_rows(rows: &[ForecastRow]) -> Vec<ForecastTableRow> {
    rows.iter()
        .map(|r| ForecastTableRow {
            key: r.key.clone(),
            forecast: r.forecast.clone(),
            allocation: r.allocation.clone(),
        })
        .collect()
}

fn tone_amount(display: &str, tone: AmountTone) -> String {
    match tone {
        AmountTone::NonNegative => display.green().to_string(),
        AmountTone::Negative => display.red().to_string(),
    }
}

fn amounts_table(rows: Vec<CellRow>) -> Table {
    let mut table = Table::new(rows);
    table.modify(Columns::last(), Alignment::right());
    table
}

// -- Query output --

/// Prints the form line shown before a submission.
pub fn print_form_status(description: &str, submit_label: &str) {
    eprintln!("{} [{}]", description, submit_label);
}

/// Prints the error banner, summary and table, in that order.
pub fn print_shell(view: &ShellView, format: &OutputFormat) -> Result<()> {
    if let Some(message) = &view.error_banner {
        print_error_banner(message);
    }
    match format {
        OutputFormat::Table => print_shell_table(view),
        OutputFormat::Markdown => print_shell_markdown(view),
        OutputFormat::Json => print_shell_json(view),
        OutputFormat::Csv => print_shell_csv(view)?,
    }
    Ok(())
}

pub fn print_error_banner(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

fn print_shell_table(view: &ShellView) {
    if let Some(summary) = &view.summary {
        println!("{}", "Financial Summary".bold());
        println!("{}", Table::new([build_summary_row(summary)]));
    }
    match &view.table {
        Some(ResultsTable::Empty) => println!("{}", EMPTY_NOTICE),
        Some(ResultsTable::Rows(rows)) => {
            println!(
                "{}",
                amounts_table(build_cell_rows(rows, CodeStyle::Plain, true))
            );
        }
        None => {}
    }
}

fn print_shell_markdown(view: &ShellView) {
    if let Some(summary) = &view.summary {
        println!("## Financial Summary\n");
        let mut table = Table::new([build_summary_row(summary)]);
        table.with(Style::markdown());
        println!("{}\n", table);
    }
    match &view.table {
        Some(ResultsTable::Empty) => println!("_{}_", EMPTY_NOTICE),
        Some(ResultsTable::Rows(rows)) => {
            let mut table = amounts_table(build_cell_rows(rows, CodeStyle::Backticks, false));
            table.with(Style::markdown());
            println!("{}", table);
        }
        None => {}
    }
}

fn print_shell_json(view: &ShellView) {
    if view.table.is_none() {
        return;
    }
    let rows = view.table.as_ref().map(|t| t.rows()).unwrap_or_default();
    print_json(&QueryDocument {
        summary: view.summary.as_ref(),
        rows,
    });
}

fn print_shell_csv(view: &ShellView) -> Result<()> {
    if let Some(summary) = &view.summary {
        eprintln!(
            "{} line items, total {} ({})",
            summary.item_count,
            summary.formatted_total(),
            summary.query_label
        );
    }
    match &view.table {
        Some(ResultsTable::Empty) => eprintln!("{}", EMPTY_NOTICE),
        Some(ResultsTable::Rows(rows)) => {
            write_csv(build_cell_rows(rows, CodeStyle::Plain, false))?
        }
        None => {}
    }
    Ok(())
}

// -- Available items output --

pub fn print_items(items: &AvailableItems, format: &OutputFormat) -> Result<()> {
    let rows = build_item_rows(items);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(items),
        OutputFormat::Csv => write_csv(rows)?,
    }
    Ok(())
}

// -- Forecast output --

pub fn print_forecast(rows: &[ForecastRow], format: &OutputFormat) -> Result<()> {
    let table_rows = build_forecast_rows(rows);
    match format {
        OutputFormat::Table => println!("{}", Table::new(table_rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(table_rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => write_csv(table_rows)?,
    }
    Ok(())
}

// -- Municipality catalog output --

pub fn print_municipalities(entries: &[(&str, &str)], format: &OutputFormat) -> Result<()> {
    let rows: Vec<MunicipalityRow> = entries
        .iter()
        .map(|(code, name)| MunicipalityRow {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => write_csv(rows)?,
    }
    Ok(())
}

// -- Shared writers --

fn write_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use municipal_lib::types::{Cell, ResultSet};

    use super::*;

    fn load_result_fixture(name: &str) -> ResultSet {
        let json_str = match name {
            "single" => include_str!("../../municipal_api/tests/fixtures/municipality_data.json"),
            _ => include_str!("../../municipal_api/tests/fixtures/municipality_data_multi.json"),
        };
        serde_json::from_str(json_str).unwrap()
    }

    fn table_rows(data: &ResultSet) -> Vec<TableRow> {
        ResultsTable::derive(Some(data)).unwrap().rows().to_vec()
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    // -- Row builder tests --

    #[test]
    fn test_build_cell_rows_mapping() {
        let data = load_result_fixture("single");
        let rows = build_cell_rows(&table_rows(&data), CodeStyle::Plain, false);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.item_code, "2800");
        assert_eq!(row.item_label, "Refuse");
        assert_eq!(row.function_label, "Waste");
        assert_eq!(row.amount, "R\u{a0}150\u{a0}000,00");
    }

    #[test]
    fn test_build_cell_rows_order_and_placeholders() {
        let data = load_result_fixture("multi");
        let rows = build_cell_rows(&table_rows(&data), CodeStyle::Plain, false);
        let codes: Vec<&str> = rows.iter().map(|r| r.item_code.as_str()).collect();
        assert_eq!(codes, vec!["0200", "2000", "4600"]);
        assert_eq!(rows[1].amount, "-R\u{a0}250\u{a0}000,00");
        assert_eq!(rows[2].item_label, "-");
        assert_eq!(rows[2].amount, "R\u{a0}0,00");
    }

    #[test]
    fn test_build_cell_rows_backticks() {
        let data = load_result_fixture("single");
        let rows = build_cell_rows(&table_rows(&data), CodeStyle::Backticks, false);
        assert_eq!(rows[0].item_code, "`2800`");
    }

    #[test]
    fn test_build_cell_rows_colorized_keeps_text() {
        colored::control::set_override(true);
        let data = load_result_fixture("multi");
        let rows = build_cell_rows(&table_rows(&data), CodeStyle::Plain, true);
        assert!(rows[0].amount.contains("R\u{a0}12\u{a0}500\u{a0}000,50"));
        assert!(rows[1].amount.contains("\u{1b}[31m"));
        colored::control::unset_override();
    }

    #[test]
    fn test_build_summary_row() {
        let data = load_result_fixture("single");
        let request = municipal_lib::QueryRequest::Structured(
            municipal_lib::MunicipalityDataQuery::new("CPT", 2023),
        );
        let summary = Summary::derive(Some(&data), Some(&request)).unwrap();
        let row = build_summary_row(&summary);
        assert_eq!(row.total, "R\u{a0}150\u{a0}000,00");
        assert_eq!(row.count, 1);
        assert_eq!(row.label, "Cape Town 2023");
    }

    #[test]
    fn test_build_item_rows() {
        let json = include_str!("../../municipal_api/tests/fixtures/available_items.json");
        let items: AvailableItems = serde_json::from_str(json).unwrap();
        let rows = build_item_rows(&items);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].code, "0200");
        assert_eq!(rows[0].label, "Property rates");
    }

    // -- CSV output tests --

    #[test]
    fn test_csv_cell_headers() {
        let data = load_result_fixture("single");
        let rows = build_cell_rows(&table_rows(&data), CodeStyle::Plain, false);
        let csv = csv_from_rows(&rows);
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Item Code,Item Description,Function,Amount (ZAR)");
    }

    #[test]
    fn test_csv_forecast_headers() {
        let rows = build_forecast_rows(&[ForecastRow {
            key: "Water".to_string(),
            forecast: "1".to_string(),
            allocation: "2".to_string(),
        }]);
        let csv = csv_from_rows(&rows);
        assert_eq!(csv.lines().next().unwrap(), "Sector/Item,Forecast,Allocation");
        assert_eq!(csv.lines().nth(1).unwrap(), "Water,1,2");
    }

    // -- JSON output tests --

    #[test]
    fn test_json_query_document() {
        let data = load_result_fixture("multi");
        let rows = table_rows(&data);
        let summary = Summary::derive(Some(&data), None).unwrap();
        let val = serde_json::to_value(QueryDocument {
            summary: Some(&summary),
            rows: &rows,
        })
        .unwrap();
        assert_eq!(val["rows"].as_array().unwrap().len(), 3);
        assert_eq!(val["summary"]["item_count"], 3);
        assert_eq!(val["rows"][1]["tone"], "negative");
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_cells_structure() {
        let data = load_result_fixture("multi");
        let mut table = amounts_table(build_cell_rows(
            &table_rows(&data),
            CodeStyle::Backticks,
            false,
        ));
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Item Code"));
        assert!(header_line.contains("Amount (ZAR)"));
        // header + separator + one line per cell
        assert_eq!(md.lines().count(), 2 + data.cells.len());
    }

    #[test]
    fn test_table_row_count_matches_cells() {
        let cells: Vec<Cell> = (0..5)
            .map(|i| Cell {
                item_code: Some(format!("{:04}", i * 100)),
                item_label: None,
                function_label: None,
                function_code: None,
                demarcation_code: None,
                demarcation_label: None,
                amount_sum: Some(i as f64),
                municipality_name: None,
            })
            .collect();
        let data = ResultSet { cells };
        let mut table = Table::new(build_cell_rows(&table_rows(&data), CodeStyle::Plain, false));
        table.with(Style::markdown());
        assert_eq!(table.to_string().lines().count(), 2 + 5);
    }
}
