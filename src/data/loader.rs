use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{
    Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use arrow::datatypes::DataType;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::RawRecord;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Failure to obtain any raw records from a source file. Distinct from an
/// empty dataset: a readable file with zero data rows loads as `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error(transparent)]
    Read(#[from] anyhow::Error),
}

/// Load raw vehicle rows from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row names the columns; empty cells load as `""`
/// * `.json`    – records-oriented array of flat objects; nulls omit the key
/// * `.parquet` – flat scalar columns; nulls omit the key
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(load_csv(path)?),
        "json" => Ok(load_json(path)?),
        "parquet" | "pq" => Ok(load_parquet(path)?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one vehicle per data row.
/// Every cell is recorded, including empty ones, so "present but empty" is
/// representable and the header defines which keys exist.
fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row: RawRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(col, cell)| (col.clone(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Make": "TESLA",
///     "Model Year": "2020",
///     "Electric Range": 250,
///     "Electric Vehicle Type": "Battery Electric Vehicle (BEV)"
///   },
///   ...
/// ]
/// ```
///
/// Scalar values of any JSON type are rendered to their text form; `null`
/// drops the key so the field reads as absent downstream.
fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = RawRecord::new();
        for (key, val) in obj {
            if let Some(text) = json_to_cell(val) {
                row.insert(key.clone(), text);
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet registry export with a flat schema of scalar columns
/// (strings, ints, floats, bools). Null cells omit the key, mirroring the
/// JSON loader. Works with files written by both Pandas and Polars.
fn load_parquet(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let columns: Vec<(usize, String)> = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(i, f)| (i, f.name().clone()))
            .collect();

        for row_no in 0..batch.num_rows() {
            let mut row = RawRecord::new();
            for (col_idx, col_name) in &columns {
                let col = batch.column(*col_idx);
                if let Some(text) = extract_cell(col, row_no)
                    .with_context(|| format!("Row {row_no}: failed to read '{col_name}'"))?
                {
                    row.insert(col_name.clone(), text);
                }
            }
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Render one Arrow cell to text; `None` for nulls.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let text = match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            arr.value(row).to_string()
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .context("expected LargeStringArray")?;
            arr.value(row).to_string()
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            arr.value(row).to_string()
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            arr.value(row).to_string()
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            arr.value(row).to_string()
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            arr.value(row).to_string()
        }
        DataType::Boolean => {
            let arr = col
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("expected BooleanArray")?;
            arr.value(row).to_string()
        }
        // Dates, decimals, dictionaries: fall back to Arrow's display form.
        _ => array_value_to_string(col, row).context("formatting cell")?,
    };
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_rows_keep_empty_cells_as_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "vehicles.csv",
            "Make,Model Year,Electric Range\nTESLA,2020,250\nNISSAN,,\n",
        );
        let rows = load_file(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Make"], "TESLA");
        // Empty cells are present-but-empty, not absent.
        assert_eq!(rows[1].get("Model Year").map(String::as_str), Some(""));
    }

    #[test]
    fn json_null_drops_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "vehicles.json",
            r#"[{"Make":"TESLA","Model Year":2020,"Electric Range":null}]"#,
        );
        let rows = load_file(&path).unwrap();
        assert_eq!(rows[0]["Make"], "TESLA");
        assert_eq!(rows[0]["Model Year"], "2020");
        assert!(!rows[0].contains_key("Electric Range"));
    }

    #[test]
    fn missing_file_is_an_error_not_an_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn headers_only_csv_loads_as_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "empty.csv", "Make,Model Year\n");
        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("vehicles.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }
}
