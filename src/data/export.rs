//! Snapshot export of the loaded record set.
//!
//! Two formats: a flat CSV mirroring the input layout, and a JSON snapshot
//! that also records which dimensions were bound to the axes when the export
//! was taken.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::dataset::{Dataset, Record};
use super::dimension::{XDimension, YDimension};

#[derive(Serialize)]
struct Snapshot<'a> {
    x_dimension: &'static str,
    y_dimension: &'static str,
    records: &'a [Record],
}

/// Write the record set as CSV.
pub fn write_snapshot_csv<W: Write>(w: &mut W, data: &Dataset) -> std::io::Result<()> {
    writeln!(w, "id,state,abbr,poverty,age,income,obesity,smokes,healthcare")?;
    for r in &data.records {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{}",
            r.id, r.state, r.abbr, r.poverty, r.age, r.income, r.obesity, r.smokes, r.healthcare
        )?;
    }
    Ok(())
}

/// Write the record set plus the current axis selection as pretty JSON.
pub fn write_snapshot_json<W: Write>(
    w: &mut W,
    data: &Dataset,
    x_dim: XDimension,
    y_dim: YDimension,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(
        w,
        &Snapshot {
            x_dimension: x_dim.column(),
            y_dimension: y_dim.column(),
            records: &data.records,
        },
    )
}

/// Save the CSV snapshot to a file path.
pub fn save_snapshot_csv<P: AsRef<Path>>(path: P, data: &Dataset) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    write_snapshot_csv(&mut f, data)
}

/// Save the JSON snapshot to a file path.
pub fn save_snapshot_json<P: AsRef<Path>>(
    path: P,
    data: &Dataset,
    x_dim: XDimension,
    y_dim: YDimension,
) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    write_snapshot_json(&mut f, data, x_dim, y_dim)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
