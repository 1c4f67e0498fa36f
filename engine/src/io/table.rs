//! Thin CSV shims over the external interfaces of §6. Parsing geographic
//! arithmetic or validating OSM semantics is explicitly out of scope; this
//! module only knows how to get rows in and out of the shapes the core
//! algorithms expect.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One row of the Graph Builder's input table.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRow {
    pub from_id: String,
    pub to_id: String,
    pub from_lon: f64,
    pub from_lat: f64,
    pub to_lon: f64,
    pub to_lat: f64,
    pub d: f64,
    pub d_weighted: f64,
    pub highway: String,
}

/// One row of the compact or original graph export.
#[derive(Debug, Clone, Serialize)]
pub struct GraphRow {
    pub from_id: String,
    pub to_id: String,
    pub edge_id: u32,
    pub d: f64,
    pub d_weighted: f64,
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
    pub highway: String,
}

/// One row of the compact-to-original edge-id replacement map.
#[derive(Debug, Clone, Serialize)]
pub struct MapRow {
    pub id_compact: u32,
    pub id_original: u32,
}

pub fn read_input_rows<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let file = std::fs::File::open(path)?;
    read_input_rows_from_reader(file)
}

pub fn read_input_rows_from_reader<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<InputRow>().enumerate() {
        let row = result.map_err(|_| GraphError::MalformedInput { row: idx, column: "unknown" })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn write_graph_rows<P: AsRef<Path>>(path: P, rows: &[GraphRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_map_rows<P: AsRef<Path>>(path: P, rows: &[MapRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_single_row() {
        let csv = "from_id,to_id,from_lon,from_lat,to_lon,to_lat,d,d_weighted,highway\n\
                    A,B,1.0,2.0,1.1,2.1,5.0,5.5,primary\n";
        let rows = read_input_rows_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].from_id, "A");
        assert_eq!(rows[0].to_id, "B");
        assert_eq!(rows[0].highway, "primary");
    }

    #[test]
    fn rejects_malformed_row() {
        let csv = "from_id,to_id,from_lon,from_lat,to_lon,to_lat,d,d_weighted,highway\n\
                    A,B,not_a_number,2.0,1.1,2.1,5.0,5.5,primary\n";
        let result = read_input_rows_from_reader(csv.as_bytes());
        assert!(result.is_err());
    }
}
