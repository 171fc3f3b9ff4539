use std::io::Write;

use tracing::{debug, info, warn};

use crate::backend::{DisplayBackend, Permanence};
use crate::error::ModeError;
use crate::filter::{rank, Criteria};

/// What a run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Several modes matched and were listed
    Listed(usize),
    /// A single mode matched and was applied
    Applied(usize),
    /// A single mode matched and was only reported
    Matched(usize),
}

/// Resolves the focused display, filters its modes and either lists the
/// candidates or applies the only one left.
///
/// # Errors
///
/// `NoMatchingModes` when nothing survives filtering; resolver, enumeration
/// and platform errors are passed through.
pub fn select<B: DisplayBackend>(
    backend: &B,
    criteria: &Criteria,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let display = backend.focused_display()?;
    let modes = backend.modes(&display, true)?;
    debug!("Retrieved {} display modes", modes.len());
    if criteria.is_empty() {
        debug!("No filters given, every mode is a candidate");
    }

    let mut candidates = criteria.apply(modes.iter().map(|m| backend.describe(m)));
    rank(&mut candidates);

    match candidates.as_slice() {
        [] => Err(ModeError::NoMatchingModes.into()),
        [only] if dry_run => {
            writeln!(out, "{only}")?;
            Ok(Outcome::Matched(only.index))
        }
        [only] => {
            info!(index = only.index, "Applying {}", only.mode);
            apply_mode(backend, &display, &modes[only.index])?;
            Ok(Outcome::Applied(only.index))
        }
        many => {
            for candidate in many {
                writeln!(out, "{candidate}")?;
            }
            Ok(Outcome::Listed(many.len()))
        }
    }
}

/// Switches `display` to `mode` inside a configuration transaction.
///
/// A failed configure step is cancelled before its error is returned. Errors
/// from opening or committing the transaction are returned as they are.
///
/// # Errors
///
/// The platform error of the first step that failed.
pub fn apply_mode<B: DisplayBackend>(
    backend: &B,
    display: &B::Display,
    mode: &B::Mode,
) -> Result<(), ModeError> {
    let config = backend.begin_configuration()?;

    if let Err(err) = backend.configure(&config, display, mode) {
        if let ModeError::Platform(cg) = err {
            debug!(code = cg.code(), "Configure failed, cancelling");
        }
        if let Err(cancel_err) = backend.cancel(config) {
            warn!("Failed to cancel display configuration: {cancel_err}");
        }
        return Err(err);
    }

    backend.complete(config, Permanence::Permanent)?;
    info!("Display mode changed successfully");
    Ok(())
}
