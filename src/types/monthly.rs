use thiserror::Error;

/// Short Spanish month labels, January first, matching the labels the
/// renderers print next to each tower.
pub const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// A producer handed over a column that does not hold exactly 12 values.
/// Producers fail fast on this instead of padding or truncating.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected 12 monthly values for '{field}', found {found}")]
pub struct SeriesLengthError {
    pub field: &'static str,
    pub found: usize,
}

/// Twelve monthly climate values per variable, January first. Radiation is
/// optional; when absent the normalizer treats its contribution as zero.
///
/// Immutable once produced, by exactly one of: CSV parse, monthly
/// aggregation, or the synthetic generator.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    pub tmax: [f64; 12],
    pub tmin: [f64; 12],
    pub wind: [f64; 12],
    pub radiation: Option<[f64; 12]>,
}

impl MonthlySeries {
    /// Builds a series from dynamically sized columns, enforcing the
    /// 12-element invariant.
    pub fn from_columns(
        tmax: Vec<f64>,
        tmin: Vec<f64>,
        wind: Vec<f64>,
        radiation: Option<Vec<f64>>,
    ) -> Result<Self, SeriesLengthError> {
        Ok(Self {
            tmax: fixed("tmax", tmax)?,
            tmin: fixed("tmin", tmin)?,
            wind: fixed("wind", wind)?,
            radiation: radiation.map(|r| fixed("radiation", r)).transpose()?,
        })
    }
}

fn fixed(field: &'static str, values: Vec<f64>) -> Result<[f64; 12], SeriesLengthError> {
    let found = values.len();
    values
        .try_into()
        .map_err(|_| SeriesLengthError { field, found })
}
