use std::fmt;

/// One mode offered by a display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMode {
    /// Logical width in points
    pub width: u64,
    /// Logical height in points
    pub height: u64,
    pub pixel_width: u64,
    pub pixel_height: u64,
    /// Refresh rate in Hz
    pub refresh_rate: f64,
}

impl DisplayMode {
    #[must_use]
    pub const fn pixel_area(&self) -> u64 {
        self.pixel_width.saturating_mul(self.pixel_height)
    }

    #[must_use]
    pub const fn logical_area(&self) -> u64 {
        self.width.saturating_mul(self.height)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Example: 1440x900 (2880x1800 px) @ 60 Hz
        write!(
            f,
            "{}x{} ({}x{} px) @ {} Hz",
            self.width, self.height, self.pixel_width, self.pixel_height, self.refresh_rate
        )
    }
}

/// A mode paired with its position in the platform's enumeration order.
///
/// The index never changes after enumeration; filtering and ranking move the
/// pair around but keep the original ordinal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedMode {
    pub index: usize,
    pub mode: DisplayMode,
}

impl fmt::Display for IndexedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.mode)
    }
}
