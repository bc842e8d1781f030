use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::Spectrum;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a summed spectrum from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – `mz` and `intensity` float columns, one row per point
/// * `.json`    – `{ "mz": [...], "intensity": [...] }`
/// * `.csv`     – header row with `mz` and `intensity` columns
pub fn load_file(path: &Path) -> Result<Spectrum> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Validate the raw arrays and assemble the [`Spectrum`].
///
/// The detector's notion of a local maximum relies on a stable ordering, so
/// a non-monotonic or NaN-bearing mass axis is rejected here rather than
/// tolerated. NaN is checked first: it slips through the `<=` comparison,
/// which is false for any NaN operand.
fn build_spectrum(mz: Vec<f64>, intensity: Vec<f64>) -> Result<Spectrum> {
    if mz.len() != intensity.len() {
        bail!(
            "mass axis has {} values but intensity has {}",
            mz.len(),
            intensity.len()
        );
    }
    if mz.is_empty() {
        bail!("spectrum file contains no data points");
    }
    if let Some(i) = mz.iter().position(|m| m.is_nan()) {
        bail!("mass axis value at index {i} is NaN");
    }
    if let Some(i) = intensity.iter().position(|y| y.is_nan()) {
        bail!("intensity value at index {i} is NaN");
    }
    for i in 1..mz.len() {
        if mz[i] <= mz[i - 1] {
            bail!("mass axis not strictly increasing at index {i}");
        }
    }
    Ok(Spectrum { mz, intensity })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "mz":        [9.4, 9.6, 10.0, ...],
///   "intensity": [0.0, 5.0, 20.0, ...]
/// }
/// ```
#[derive(Deserialize)]
struct SpectrumRecord {
    mz: Vec<f64>,
    intensity: Vec<f64>,
}

fn load_json(path: &Path) -> Result<Spectrum> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let record: SpectrumRecord = serde_json::from_str(&text).context("parsing JSON")?;
    build_spectrum(record.mz, record.intensity)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the columns, one axis point per row:
///
/// ```text
/// mz,intensity
/// 9.4,0.0
/// 9.6,5.0
/// ```
fn load_csv(path: &Path) -> Result<Spectrum> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mz_idx = headers
        .iter()
        .position(|h| h == "mz")
        .context("CSV missing 'mz' column")?;
    let int_idx = headers
        .iter()
        .position(|h| h == "intensity")
        .context("CSV missing 'intensity' column")?;

    let mut mz = Vec::new();
    let mut intensity = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        mz.push(parse_float(record.get(mz_idx).unwrap_or(""), row_no, "mz")?);
        intensity.push(parse_float(
            record.get(int_idx).unwrap_or(""),
            row_no,
            "intensity",
        )?);
    }

    build_spectrum(mz, intensity)
}

fn parse_float(s: &str, row: usize, col: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing a summed spectrum.
///
/// Expected schema:
/// - `mz`: Float64 or Float32 – mass-to-charge axis
/// - `intensity`: Float64 or Float32 – summed intensity
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Spectrum> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut mz = Vec::new();
    let mut intensity = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mz_idx = schema
            .index_of("mz")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'mz' column"))?;
        let int_idx = schema
            .index_of("intensity")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'intensity' column"))?;

        mz.extend(column_to_f64(batch.column(mz_idx), "mz")?);
        intensity.extend(column_to_f64(batch.column(int_idx), "intensity")?);
    }

    build_spectrum(mz, intensity)
}

/// Extract a whole float column as `Vec<f64>`. Nulls are a load error, not
/// a NaN substitute: a spectrum has one value per axis point.
fn column_to_f64(col: &Arc<dyn Array>, name: &str) -> Result<Vec<f64>> {
    if col.null_count() > 0 {
        bail!("column '{name}' contains null values");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.values().to_vec())
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.values().iter().map(|&v| v as f64).collect())
    } else {
        bail!(
            "column '{name}' has type {:?}, expected Float64 or Float32",
            col.data_type()
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_arrays_build_a_spectrum() {
        let s = build_spectrum(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.mz, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = build_spectrum(vec![1.0, 2.0], vec![10.0]).unwrap_err();
        assert!(err.to_string().contains("2 values but intensity has 1"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = build_spectrum(Vec::new(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no data points"));
    }

    #[test]
    fn non_monotonic_axis_is_rejected() {
        let err = build_spectrum(vec![1.0, 3.0, 2.0], vec![0.0; 3]).unwrap_err();
        assert!(err.to_string().contains("not strictly increasing at index 2"));

        let err = build_spectrum(vec![1.0, 1.0, 2.0], vec![0.0; 3]).unwrap_err();
        assert!(err.to_string().contains("not strictly increasing at index 1"));
    }

    #[test]
    fn nan_axis_value_is_rejected() {
        let err = build_spectrum(vec![1.0, f64::NAN, 3.0], vec![0.0; 3]).unwrap_err();
        assert!(err.to_string().contains("mass axis value at index 1 is NaN"));
    }

    #[test]
    fn nan_intensity_value_is_rejected() {
        let err = build_spectrum(vec![1.0, 2.0, 3.0], vec![0.0, f64::NAN, 0.0]).unwrap_err();
        assert!(err.to_string().contains("intensity value at index 1 is NaN"));
    }
}
