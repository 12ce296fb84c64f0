//! Per-month tower extents for the parametric 3D model.
//!
//! The renderer draws one square tower per month; everything it needs per
//! tower is derived here so presentation code stays free of arithmetic.

use crate::types::heights::HeightSeries;
use crate::types::monthly::MONTH_LABELS;

/// Layout parameters of the tower row, matching the interactive defaults
/// of the design view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerLayout {
    /// Spacing between consecutive tower bases along z.
    pub step: f64,
    /// Multiplier from conceptual height to model height.
    pub scale: f64,
    /// Half the side length of the square footprint.
    pub half_extent: f64,
}

impl Default for TowerLayout {
    fn default() -> Self {
        Self {
            step: 5.0,
            scale: 0.15,
            half_extent: 1.0,
        }
    }
}

/// One month's tower: a square prism from `base_z` to `top_z`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub month_label: &'static str,
    pub base_z: f64,
    pub top_z: f64,
    pub half_extent: f64,
}

/// Derives the twelve tower extents for a height series, January first.
pub fn tower_extents(heights: &HeightSeries, layout: TowerLayout) -> Vec<Tower> {
    heights
        .values()
        .iter()
        .enumerate()
        .map(|(slot, height)| {
            let base_z = slot as f64 * layout.step;
            Tower {
                month_label: MONTH_LABELS[slot],
                base_z,
                top_z: base_z + height * layout.scale,
                half_extent: layout.half_extent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn towers_step_along_z_in_month_order() {
        let heights = HeightSeries([
            0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 50.0,
        ]);
        let towers = tower_extents(&heights, TowerLayout::default());

        assert_eq!(towers.len(), 12);
        assert_eq!(towers[0].month_label, "Ene");
        assert_eq!(towers[11].month_label, "Dic");
        for (slot, tower) in towers.iter().enumerate() {
            assert_eq!(tower.base_z, slot as f64 * 5.0);
            assert!(tower.top_z >= tower.base_z);
        }
        assert_eq!(towers[10].top_z, 10.0 * 5.0 + 100.0 * 0.15);
    }

    #[test]
    fn layout_controls_scale_and_footprint() {
        let heights = HeightSeries([50.0; 12]);
        let layout = TowerLayout {
            step: 8.0,
            scale: 0.3,
            half_extent: 2.0,
        };
        let towers = tower_extents(&heights, layout);

        assert_eq!(towers[1].base_z, 8.0);
        assert_eq!(towers[1].top_z, 8.0 + 15.0);
        assert!(towers.iter().all(|t| t.half_extent == 2.0));
    }
}
