use serde_json::Value;
use shared::{MonthlyReport, StationRow};
use yew::prelude::*;

const STATION_LABEL: &str = "Station";
const EXPECTED_LABEL: &str = "Expected";
const ACTUAL_LABEL: &str = "Actual";
const RATE_LABEL: &str = "Rate (%)";

/// Render a pass-through cell as received: strings verbatim, everything
/// else in its JSON form. No reformatting of numbers.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Header cells: station label, one cell per day header, then the three
/// fixed total columns. Always `day_headers.len() + 4` cells.
pub fn header_cells(report: &MonthlyReport) -> Vec<String> {
    let mut cells = Vec::with_capacity(report.day_headers.len() + 4);
    cells.push(STATION_LABEL.to_string());
    cells.extend(report.day_headers.iter().map(cell_text));
    cells.push(EXPECTED_LABEL.to_string());
    cells.push(ACTUAL_LABEL.to_string());
    cells.push(RATE_LABEL.to_string());
    cells
}

/// Body cells for one station, mirroring the header layout.
pub fn row_cells(row: &StationRow) -> Vec<String> {
    let mut cells = Vec::with_capacity(row.daily_actual.len() + 4);
    cells.push(row.station_name.clone());
    cells.extend(row.daily_actual.iter().map(cell_text));
    cells.push(cell_text(&row.expected_total));
    cells.push(cell_text(&row.actual_total));
    cells.push(cell_text(&row.rate));
    cells
}

#[derive(Properties, PartialEq)]
pub struct ReportTableProps {
    pub report: MonthlyReport,
}

/// Tabular view of one monthly report. Rows appear in backend order; no
/// sorting or filtering happens here.
#[function_component(ReportTable)]
pub fn report_table(props: &ReportTableProps) -> Html {
    html! {
        <table class="report-table">
            <thead>
                <tr>
                    { for header_cells(&props.report).into_iter().map(|cell| html! {
                        <th>{ cell }</th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for props.report.rows.iter().map(|row| html! {
                    <tr>
                        { for row_cells(row).into_iter().map(|cell| html! {
                            <td>{ cell }</td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> MonthlyReport {
        MonthlyReport {
            day_headers: vec![json!(1), json!(2), json!(3)],
            rows: vec![
                StationRow {
                    station_name: "Station B".to_string(),
                    daily_actual: vec![json!(24), json!(23), json!(24)],
                    expected_total: json!(72),
                    actual_total: json!(71),
                    rate: json!(98.6),
                },
                StationRow {
                    station_name: "Station A".to_string(),
                    daily_actual: vec![json!(0), json!(0), json!(0)],
                    expected_total: json!(72),
                    actual_total: json!(0),
                    rate: json!(0.0),
                },
            ],
        }
    }

    #[test]
    fn test_header_has_day_count_plus_four_cells() {
        let report = sample_report();
        let header = header_cells(&report);
        assert_eq!(header.len(), report.day_headers.len() + 4);
        assert_eq!(header[0], STATION_LABEL);
        assert_eq!(header[1..4].to_vec(), ["1", "2", "3"]);
        assert_eq!(
            header[4..].to_vec(),
            [EXPECTED_LABEL, ACTUAL_LABEL, RATE_LABEL]
        );
    }

    #[test]
    fn test_rows_mirror_header_layout() {
        let report = sample_report();
        for row in &report.rows {
            assert_eq!(row_cells(row).len(), report.day_headers.len() + 4);
        }
    }

    #[test]
    fn test_row_order_is_preserved() {
        // "B" sorts after "A" but arrives first; output must not reorder.
        let report = sample_report();
        let names: Vec<String> = report
            .rows
            .iter()
            .map(|row| row_cells(row)[0].clone())
            .collect();
        assert_eq!(names, ["Station B", "Station A"]);
    }

    #[test]
    fn test_cells_render_values_as_received() {
        let row = StationRow {
            station_name: "Station C".to_string(),
            daily_actual: vec![json!("-"), json!(12)],
            expected_total: json!("48"),
            actual_total: json!(12),
            rate: json!("25.0%"),
        };

        let cells = row_cells(&row);
        assert_eq!(cells, ["Station C", "-", "12", "48", "12", "25.0%"]);
    }

    #[test]
    fn test_mismatched_row_length_renders_as_given() {
        // Length mismatches are the backend's bug; the row still renders
        // with whatever it carries.
        let row = StationRow {
            station_name: "Station D".to_string(),
            daily_actual: vec![json!(1)],
            expected_total: json!(72),
            actual_total: json!(1),
            rate: json!(1.4),
        };
        assert_eq!(row_cells(&row).len(), 5);
    }
}
