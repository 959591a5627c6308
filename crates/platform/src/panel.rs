//! Panel activation seam.

use board_specs::{BoardId, BoardProfile, PanelVariant};

/// The panel configuration selected by a successful probe.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivePanel {
    /// Detected board identity.
    pub board: BoardId,
    /// Profile to drive the panel with.
    pub profile: &'static BoardProfile,
    /// Manufacturing variant, where the board strap-senses one; `Tn`
    /// otherwise.
    pub variant: PanelVariant,
}

/// Host side of the panel driver: installs a profile and runs its bring-up
/// command sequence.
///
/// Command execution itself (walking the profile's init phases over the bus)
/// belongs to the panel driver, not the detection controller.
pub trait PanelHost {
    /// Error type
    type Error: core::fmt::Debug;

    /// Install `panel` as the live configuration.
    fn activate(&mut self, panel: ActivePanel);

    /// Execute the active profile's initialization phases.
    fn run_init(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}
