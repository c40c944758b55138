use crate::constellation::Satellite;

pub const COLUMNS: [&str; 7] = ["Name", "Alt (km)", "Incl (°)", "RAAN (°)", "TA (°)", "X", "Y"];

/// One satellite, formatted for display. Orbital values are shown as
/// received; planar coordinates are rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub altitude_km: String,
    pub inclination_deg: String,
    pub raan_deg: String,
    pub true_anomaly_deg: String,
    pub x: String,
    pub y: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.altitude_km.as_str(),
            self.inclination_deg.as_str(),
            self.raan_deg.as_str(),
            self.true_anomaly_deg.as_str(),
            self.x.as_str(),
            self.y.as_str(),
        ]
    }
}

impl From<&Satellite> for TableRow {
    fn from(sat: &Satellite) -> Self {
        TableRow {
            name: sat.name.clone(),
            altitude_km: optional(sat.altitude_km),
            inclination_deg: optional(sat.inclination_deg),
            raan_deg: optional(sat.raan_deg),
            true_anomaly_deg: optional(sat.true_anomaly_deg),
            x: format!("{:.2}", sat.x),
            y: format!("{:.2}", sat.y),
        }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Fixed-width plain text rendering used by the command line.
pub fn render_text_table(rows: &[TableRow]) -> String {
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, &row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
