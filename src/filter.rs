use std::cmp::Ordering;

use tracing::debug;

use crate::mode::{DisplayMode, IndexedMode};

/// User supplied constraints. `None` leaves a dimension unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Criteria {
    /// Ordinal in the platform's enumeration order
    pub index: Option<i64>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub pixel_width: Option<u64>,
    pub pixel_height: Option<u64>,
    /// Minimum refresh rate, with one Hz of slack
    pub rate: Option<f64>,
}

impl Criteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Tags every mode with its ordinal and keeps those matching all criteria.
    pub fn apply(&self, modes: impl IntoIterator<Item = DisplayMode>) -> Vec<IndexedMode> {
        let mut candidates: Vec<IndexedMode> = modes
            .into_iter()
            .enumerate()
            .map(|(index, mode)| IndexedMode { index, mode })
            .collect();
        let total = candidates.len();

        if let Some(index) = self.index {
            candidates.retain(|c| i64::try_from(c.index).is_ok_and(|i| i == index));
        }
        if let Some(width) = self.width {
            candidates.retain(|c| c.mode.width == width);
        }
        if let Some(height) = self.height {
            candidates.retain(|c| c.mode.height == height);
        }
        if let Some(pixel_width) = self.pixel_width {
            candidates.retain(|c| c.mode.pixel_width == pixel_width);
        }
        if let Some(pixel_height) = self.pixel_height {
            candidates.retain(|c| c.mode.pixel_height == pixel_height);
        }
        if let Some(rate) = self.rate {
            // 59.94 Hz has to satisfy a request for 60
            candidates.retain(|c| c.mode.refresh_rate > rate - 1.0);
        }

        debug!(total, matched = candidates.len(), "Filtered display modes");
        candidates
    }
}

/// Orders candidates best first: pixel area, then refresh rate, then logical
/// area, then original index, all descending.
pub fn rank(candidates: &mut [IndexedMode]) {
    // Possibly inconsistent tie-breaking was reported against this ordering.
    // Keys are compared one at a time and the first difference decides, then
    // the ascending result is reversed. Listings depend on this exact shape,
    // so leave it alone until the ambiguity is settled.
    candidates.sort_by(ascending);
    candidates.reverse();
}

fn ascending(a: &IndexedMode, b: &IndexedMode) -> Ordering {
    let pixel = a.mode.pixel_area().cmp(&b.mode.pixel_area());
    if pixel != Ordering::Equal {
        return pixel;
    }
    let rate = a.mode.refresh_rate.total_cmp(&b.mode.refresh_rate);
    if rate != Ordering::Equal {
        return rate;
    }
    let logical = a.mode.logical_area().cmp(&b.mode.logical_area());
    if logical != Ordering::Equal {
        return logical;
    }
    a.index.cmp(&b.index)
}
