use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::display::{CGConfigureOption, CGDisplay, CGDisplayConfigRef, CGDisplayMode};
use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;
use objc2_foundation::{ns_string, NSNumber};
use tracing::debug;

use crate::backend::{DisplayBackend, Permanence};
use crate::error::ModeError;
use crate::mode::DisplayMode;

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    static kCGDisplayShowDuplicateLowResolutionModes: CFStringRef;
}

/// CoreGraphics display configuration, AppKit for locating the main screen.
#[derive(Debug, Default)]
pub struct CoreGraphics;

impl DisplayBackend for CoreGraphics {
    type Display = CGDisplay;
    type Mode = CGDisplayMode;
    type Config = CGDisplayConfigRef;

    fn focused_display(&self) -> Result<CGDisplay, ModeError> {
        // AppKit only answers screen queries on the main thread
        let mtm = MainThreadMarker::new().ok_or(ModeError::NoScreen)?;
        let screen = NSScreen::mainScreen(mtm).ok_or(ModeError::NoScreen)?;

        let number = screen
            .deviceDescription()
            .objectForKey(ns_string!("NSScreenNumber"))
            .and_then(|value| value.downcast::<NSNumber>().ok())
            .ok_or(ModeError::NoDisplay)?;

        let id = number.unsignedIntValue();
        debug!(id, "Resolved main screen");
        Ok(CGDisplay::new(id))
    }

    fn modes(
        &self,
        display: &CGDisplay,
        include_duplicates: bool,
    ) -> Result<Vec<CGDisplayMode>, ModeError> {
        let modes = if include_duplicates {
            let key = unsafe {
                CFString::wrap_under_get_rule(kCGDisplayShowDuplicateLowResolutionModes)
            };
            let options = CFDictionary::from_CFType_pairs(&[(
                key.as_CFType(),
                CFBoolean::true_value().as_CFType(),
            )]);
            CGDisplayMode::all_display_modes(display.id, options.as_concrete_TypeRef())
        } else {
            CGDisplayMode::all_display_modes(display.id, std::ptr::null())
        };

        modes.ok_or(ModeError::InvalidDisplay)
    }

    fn describe(&self, mode: &CGDisplayMode) -> DisplayMode {
        DisplayMode {
            width: mode.width(),
            height: mode.height(),
            pixel_width: mode.pixel_width(),
            pixel_height: mode.pixel_height(),
            refresh_rate: mode.refresh_rate(),
        }
    }

    fn begin_configuration(&self) -> Result<CGDisplayConfigRef, ModeError> {
        CGDisplay::main().begin_configuration().map_err(ModeError::from)
    }

    fn configure(
        &self,
        config: &CGDisplayConfigRef,
        display: &CGDisplay,
        mode: &CGDisplayMode,
    ) -> Result<(), ModeError> {
        display
            .configure_display_with_display_mode(config, mode)
            .map_err(ModeError::from)
    }

    fn cancel(&self, config: CGDisplayConfigRef) -> Result<(), ModeError> {
        CGDisplay::main()
            .cancel_configuration(&config)
            .map_err(ModeError::from)
    }

    fn complete(
        &self,
        config: CGDisplayConfigRef,
        permanence: Permanence,
    ) -> Result<(), ModeError> {
        let option = match permanence {
            Permanence::App => CGConfigureOption::ConfigureForAppOnly,
            Permanence::Session => CGConfigureOption::ConfigureForSession,
            Permanence::Permanent => CGConfigureOption::ConfigurePermanently,
        };
        CGDisplay::main()
            .complete_configuration(&config, option)
            .map_err(ModeError::from)
    }
}
