//! The numeric body of a TRC file: tab-delimited rows of
//! `frame time x1 y1 z1 x2 y2 z2 ...` starting after the preamble.

use anyhow::Result;

use crate::header::PREAMBLE_LINES;

/// Parses every post-preamble line as a row of floats, dropping the redundant
/// leading frame-index column. Rows must be rectangular after the drop.
pub fn parse_rows(contents: &str) -> Result<Vec<Vec<f64>>> {
    let body = match contents.splitn(PREAMBLE_LINES + 1, '\n').nth(PREAMBLE_LINES) {
        Some(x) => x,
        None => bail!("TRC file ends inside the {}-line preamble", PREAMBLE_LINES),
    };

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());
    for record in reader.records() {
        let record = record?;
        let mut row = Vec::new();
        for field in record.iter().filter(|f| !f.is_empty()) {
            match field.parse::<f64>() {
                Ok(x) => row.push(x),
                Err(_) => bail!(
                    "non-numeric value {:?} in sample row {}",
                    field,
                    rows.len()
                ),
            }
        }
        // Trailing blank lines are common; skip them
        if row.is_empty() {
            continue;
        }
        if row.len() < 2 {
            bail!("sample row {} only has a frame index", rows.len());
        }
        row.remove(0);
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("TRC file has no sample rows after the preamble");
    }
    let width = rows[0].len();
    for (n, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!(
                "sample row {} has {} values; every other row has {}",
                n,
                row.len(),
                width
            );
        }
    }
    Ok(rows)
}
