use std::fmt;

/// Where a [`MonthlySeries`](crate::MonthlySeries) came from. Threaded
/// through to the output so the UI can always tell real, user-provided and
/// synthetic data apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Parsed from a user-supplied CSV.
    Uploaded,
    /// Fetched from the remote archive and aggregated.
    Remote,
    /// Produced by the deterministic synthetic generator.
    Synthetic,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Uploaded => write!(f, "user CSV"),
            Provenance::Remote => write!(f, "remote archive"),
            Provenance::Synthetic => write!(f, "synthetic series"),
        }
    }
}
