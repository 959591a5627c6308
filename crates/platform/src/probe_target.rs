//! Probe target descriptor.

use board_specs::{PinId, ProbeStage};

/// Mutable pin-role scratch reused across probe attempts.
///
/// Stands in for an unidentified panel while the bus is probed: the
/// sequencer overwrites the pin roles for every stage, and the geometry is
/// deliberately degenerate (0×0) so nothing ever treats the target as a
/// drawable display. Owned exclusively by the detection controller; the
/// fields are meaningless until the first stage is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeTarget {
    /// Chip-select line for the current attempt.
    pub cs: PinId,
    /// Data/command line for the current attempt.
    pub dc: PinId,
    /// Reset line for the current attempt, if the stage drives one.
    pub rst: Option<PinId>,
    /// Always 0: probe-only, not a real display.
    pub width: u16,
    /// Always 0: probe-only, not a real display.
    pub height: u16,
}

impl ProbeTarget {
    /// Fresh probe-only descriptor with zeroed geometry.
    pub const fn probe_only() -> Self {
        Self {
            cs: PinId::new(0),
            dc: PinId::new(0),
            rst: None,
            width: 0,
            height: 0,
        }
    }

    /// Overwrite the pin roles with `stage`'s mapping.
    pub fn assume_stage(&mut self, stage: &ProbeStage) {
        self.cs = stage.cs;
        self.dc = stage.dc;
        self.rst = stage.rst;
    }
}
