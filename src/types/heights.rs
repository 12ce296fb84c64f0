/// Twelve dimensionless "conceptual heights" in [0, 100], one per month,
/// January first. The only input the 3D renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightSeries(pub [f64; 12]);

impl HeightSeries {
    pub fn values(&self) -> &[f64; 12] {
        &self.0
    }
}
