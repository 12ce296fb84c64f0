//! Parsing of user-supplied monthly CSV data.
//!
//! Expected shape: 12 data rows in calendar order (January first), columns
//! `tmax,tmin,viento[,radiacion]`. The header row is optional and both
//! Spanish and English column names are accepted.

use crate::sources::error::CsvSeriesError;
use crate::types::monthly::MonthlySeries;
use polars::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const TMAX_ALIASES: [&str; 3] = ["tmax", "temp_max", "tempmax"];
const TMIN_ALIASES: [&str; 3] = ["tmin", "temp_min", "tempmin"];
const WIND_ALIASES: [&str; 4] = ["viento", "wind", "vel_viento", "wind_speed"];
const RADIATION_ALIASES: [&str; 3] = ["radiacion", "radiation", "rad"];

/// Parses CSV bytes into a validated [`MonthlySeries`].
///
/// # Errors
///
/// Any shape or type problem is a [`CsvSeriesError`]: wrong row count,
/// wrong column count, a missing required column, or non-numeric cells.
/// A radiation column that cannot be read cleanly is treated as absent
/// rather than failing the upload.
pub fn parse_monthly_csv(bytes: &[u8]) -> Result<MonthlySeries, CsvSeriesError> {
    let text = String::from_utf8_lossy(bytes);
    let has_header = first_line_is_header(&text);

    // Stage the bytes in a temp file for the CSV reader.
    let mut staged = NamedTempFile::new()?;
    staged.write_all(bytes)?;
    staged.flush()?;

    let df = CsvReadOptions::default()
        .with_has_header(has_header)
        .try_into_reader_with_file_path(Some(staged.path().to_path_buf()))?
        .finish()?;

    if df.height() != 12 {
        return Err(CsvSeriesError::RowCount { found: df.height() });
    }

    let (tmax, tmin, wind, radiation) = if has_header {
        (
            required_column(&df, "tmax", &TMAX_ALIASES)?,
            required_column(&df, "tmin", &TMIN_ALIASES)?,
            required_column(&df, "viento", &WIND_ALIASES)?,
            find_column(&df, &RADIATION_ALIASES),
        )
    } else {
        // Headerless files use the fixed order tmax,tmin,viento[,radiacion].
        let columns = df.get_columns();
        if !(3..=4).contains(&columns.len()) {
            return Err(CsvSeriesError::ColumnCount {
                found: columns.len(),
            });
        }
        (
            columns[0].clone(),
            columns[1].clone(),
            columns[2].clone(),
            columns.get(3).cloned(),
        )
    };

    Ok(MonthlySeries::from_columns(
        numeric_values(&tmax)?,
        numeric_values(&tmin)?,
        numeric_values(&wind)?,
        radiation.as_ref().and_then(radiation_values),
    )?)
}

/// A line whose cells all parse as numbers is data, anything else is a
/// header.
fn first_line_is_header(text: &str) -> bool {
    let Some(line) = text.lines().find(|l| !l.trim().is_empty()) else {
        return false;
    };
    !line
        .split(',')
        .all(|cell| cell.trim().parse::<f64>().is_ok())
}

fn required_column(
    df: &DataFrame,
    name: &'static str,
    aliases: &[&str],
) -> Result<Column, CsvSeriesError> {
    find_column(df, aliases).ok_or(CsvSeriesError::MissingColumn { name })
}

fn find_column(df: &DataFrame, aliases: &[&str]) -> Option<Column> {
    df.get_columns()
        .iter()
        .find(|column| {
            aliases
                .iter()
                .any(|alias| column.name().as_str().trim().eq_ignore_ascii_case(alias))
        })
        .cloned()
}

fn numeric_values(column: &Column) -> Result<Vec<f64>, CsvSeriesError> {
    let name = column.name().to_string();
    let non_numeric = || CsvSeriesError::NonNumeric {
        column: name.clone(),
    };

    // Non-strict cast: junk cells become nulls and are rejected below.
    let cast = column
        .cast(&DataType::Float64)
        .map_err(|_| non_numeric())?;
    let values = cast.f64().map_err(|_| non_numeric())?;

    values
        .into_iter()
        .map(|value| value.ok_or_else(non_numeric))
        .collect()
}

/// Radiation is optional: a column with gaps or junk is dropped, not fatal.
fn radiation_values(column: &Column) -> Option<Vec<f64>> {
    let cast = column.cast(&DataType::Float64).ok()?;
    cast.f64().ok()?.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERED: &str = "tmax,tmin,viento,radiacion\n\
        25,12,3,150\n27,13,3.5,160\n30,15,4,180\n32,17,4.5,200\n\
        35,19,5,220\n36,20,5.2,230\n34,19,4.8,210\n33,18,4.5,200\n\
        31,16,4.2,190\n29,14,3.8,170\n27,13,3.5,160\n25,12,3,150\n";

    #[test]
    fn parses_headered_csv() {
        let series = parse_monthly_csv(HEADERED.as_bytes()).unwrap();
        assert_eq!(series.tmax[0], 25.0);
        assert_eq!(series.tmax[4], 35.0);
        assert_eq!(series.tmin[5], 20.0);
        assert_eq!(series.wind[5], 5.2);
        assert_eq!(series.radiation.unwrap()[5], 230.0);
    }

    #[test]
    fn parsed_series_matches_the_checked_constructor() {
        let series = parse_monthly_csv(HEADERED.as_bytes()).unwrap();
        let expected = MonthlySeries::from_columns(
            vec![
                25.0, 27.0, 30.0, 32.0, 35.0, 36.0, 34.0, 33.0, 31.0, 29.0, 27.0, 25.0,
            ],
            vec![
                12.0, 13.0, 15.0, 17.0, 19.0, 20.0, 19.0, 18.0, 16.0, 14.0, 13.0, 12.0,
            ],
            vec![3.0, 3.5, 4.0, 4.5, 5.0, 5.2, 4.8, 4.5, 4.2, 3.8, 3.5, 3.0],
            Some(vec![
                150.0, 160.0, 180.0, 200.0, 220.0, 230.0, 210.0, 200.0, 190.0, 170.0, 160.0,
                150.0,
            ]),
        )
        .unwrap();
        assert_eq!(series, expected);
    }

    #[test]
    fn parses_headerless_csv_without_radiation() {
        let body = "25,12,3\n27,13,3.5\n30,15,4\n32,17,4.5\n35,19,5\n36,20,5.2\n\
            34,19,4.8\n33,18,4.5\n31,16,4.2\n29,14,3.8\n27,13,3.5\n25,12,3\n";
        let series = parse_monthly_csv(body.as_bytes()).unwrap();
        assert_eq!(series.tmax[0], 25.0);
        assert_eq!(series.wind[11], 3.0);
        assert_eq!(series.radiation, None);
    }

    #[test]
    fn accepts_english_aliases_and_mixed_case() {
        let body = HEADERED.replace("tmax,tmin,viento,radiacion", "Tmax,Tmin,Wind_Speed,Radiation");
        let series = parse_monthly_csv(body.as_bytes()).unwrap();
        assert_eq!(series.wind[4], 5.0);
        assert!(series.radiation.is_some());
    }

    #[test]
    fn rejects_wrong_row_count() {
        let truncated: String = HEADERED.lines().take(12).collect::<Vec<_>>().join("\n");
        let error = parse_monthly_csv(truncated.as_bytes()).unwrap_err();
        assert!(matches!(error, CsvSeriesError::RowCount { found: 11 }));
    }

    #[test]
    fn rejects_missing_required_column() {
        let body = HEADERED.replace("viento", "direccion");
        let error = parse_monthly_csv(body.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            CsvSeriesError::MissingColumn { name: "viento" }
        ));
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let body = HEADERED.replace("35,19,5,220", "calor,19,5,220");
        let error = parse_monthly_csv(body.as_bytes()).unwrap_err();
        assert!(matches!(error, CsvSeriesError::NonNumeric { .. }));
    }

    #[test]
    fn rejects_headerless_with_too_few_columns() {
        let body = "25,12\n27,13\n30,15\n32,17\n35,19\n36,20\n\
            34,19\n33,18\n31,16\n29,14\n27,13\n25,12\n";
        let error = parse_monthly_csv(body.as_bytes()).unwrap_err();
        assert!(matches!(error, CsvSeriesError::ColumnCount { found: 2 }));
    }

    #[test]
    fn radiation_with_gaps_is_dropped() {
        let body = HEADERED.replace("36,20,5.2,230", "36,20,5.2,");
        let series = parse_monthly_csv(body.as_bytes()).unwrap();
        assert_eq!(series.radiation, None);
        assert_eq!(series.tmax[5], 36.0);
    }
}
