use crate::error::ModeError;
use crate::mode::DisplayMode;

/// How long a committed configuration lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permanence {
    /// Until the application exits
    App,
    /// Until the user logs out
    Session,
    /// Survives logout and reboot
    Permanent,
}

/// The operating system's display subsystem.
///
/// `Display`, `Mode` and `Config` are the platform's own handles; the
/// selection logic only ever looks at a mode through [`DisplayBackend::describe`].
pub trait DisplayBackend {
    type Display;
    type Mode;
    type Config;

    /// The display behind the screen holding keyboard focus.
    ///
    /// # Errors
    ///
    /// `NoScreen` when there is no such screen, `NoDisplay` when it has no
    /// display id.
    fn focused_display(&self) -> Result<Self::Display, ModeError>;

    /// Every mode of `display` in platform order.
    ///
    /// # Errors
    ///
    /// `InvalidDisplay` when the platform does not return a list of modes.
    fn modes(
        &self,
        display: &Self::Display,
        include_duplicates: bool,
    ) -> Result<Vec<Self::Mode>, ModeError>;

    fn describe(&self, mode: &Self::Mode) -> DisplayMode;

    /// # Errors
    ///
    /// Platform error from opening the transaction.
    fn begin_configuration(&self) -> Result<Self::Config, ModeError>;

    /// # Errors
    ///
    /// Platform error when the mode cannot be staged.
    fn configure(
        &self,
        config: &Self::Config,
        display: &Self::Display,
        mode: &Self::Mode,
    ) -> Result<(), ModeError>;

    /// # Errors
    ///
    /// Platform error when the transaction cannot be rolled back.
    fn cancel(&self, config: Self::Config) -> Result<(), ModeError>;

    /// # Errors
    ///
    /// Platform error when the transaction cannot be committed.
    fn complete(&self, config: Self::Config, permanence: Permanence) -> Result<(), ModeError>;
}
