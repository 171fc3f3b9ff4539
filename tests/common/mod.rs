//! Shared test helpers: a display backend that records what it is asked to do.

#![allow(dead_code)]

use std::cell::RefCell;

use display_mode::backend::{DisplayBackend, Permanence};
use display_mode::error::{CgError, ModeError};
use display_mode::mode::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Begin,
    Configure(usize),
    Cancel,
    Complete(Permanence),
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub modes: Vec<DisplayMode>,
    pub no_screen: bool,
    pub no_display: bool,
    pub invalid_modes: bool,
    pub fail_begin: Option<CgError>,
    pub fail_configure: Option<CgError>,
    pub fail_cancel: Option<CgError>,
    pub fail_complete: Option<CgError>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub fn with_modes(modes: Vec<DisplayMode>) -> Self {
        Self {
            modes,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl DisplayBackend for FakeBackend {
    type Display = u32;
    type Mode = (usize, DisplayMode);
    type Config = ();

    fn focused_display(&self) -> Result<u32, ModeError> {
        if self.no_screen {
            return Err(ModeError::NoScreen);
        }
        if self.no_display {
            return Err(ModeError::NoDisplay);
        }
        Ok(1)
    }

    fn modes(&self, _display: &u32, include_duplicates: bool) -> Result<Vec<Self::Mode>, ModeError> {
        assert!(include_duplicates, "duplicate low resolution modes must be requested");
        if self.invalid_modes {
            return Err(ModeError::InvalidDisplay);
        }
        Ok(self.modes.iter().copied().enumerate().collect())
    }

    fn describe(&self, mode: &Self::Mode) -> DisplayMode {
        mode.1
    }

    fn begin_configuration(&self) -> Result<(), ModeError> {
        self.calls.borrow_mut().push(Call::Begin);
        self.fail_begin.map_or(Ok(()), |e| Err(e.into()))
    }

    fn configure(&self, _config: &(), _display: &u32, mode: &Self::Mode) -> Result<(), ModeError> {
        self.calls.borrow_mut().push(Call::Configure(mode.0));
        self.fail_configure.map_or(Ok(()), |e| Err(e.into()))
    }

    fn cancel(&self, _config: ()) -> Result<(), ModeError> {
        self.calls.borrow_mut().push(Call::Cancel);
        self.fail_cancel.map_or(Ok(()), |e| Err(e.into()))
    }

    fn complete(&self, _config: (), permanence: Permanence) -> Result<(), ModeError> {
        self.calls.borrow_mut().push(Call::Complete(permanence));
        self.fail_complete.map_or(Ok(()), |e| Err(e.into()))
    }
}

pub fn mode(width: u64, height: u64, scale: u64, refresh_rate: f64) -> DisplayMode {
    DisplayMode {
        width,
        height,
        pixel_width: width * scale,
        pixel_height: height * scale,
        refresh_rate,
    }
}

/// A laptop panel with scaled, native and duplicate low resolution modes.
pub fn laptop_modes() -> Vec<DisplayMode> {
    vec![
        mode(1440, 900, 2, 60.0),   // 0
        mode(1440, 900, 1, 60.0),   // 1
        mode(1280, 800, 2, 59.94),  // 2
        mode(1280, 800, 2, 120.0),  // 3
        mode(1680, 1050, 2, 60.0),  // 4
        mode(2880, 1800, 1, 60.0),  // 5
        mode(1024, 640, 2, 48.0),   // 6
        mode(1280, 800, 1, 60.0),   // 7
    ]
}
