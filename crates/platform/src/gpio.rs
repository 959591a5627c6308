//! Raw GPIO primitives for the probe sequencer.

use board_specs::PinId;

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// High-impedance input
    Input,
    /// Push-pull output
    Output,
}

/// Pin-number addressed GPIO port used during probing.
///
/// Probe stages reassign pin roles at runtime, so this seam addresses lines
/// by number instead of through owned typestate pins. Operations are
/// infallible: a probe-time GPIO write that goes nowhere simply leaves the
/// stage classifying as "no match" downstream.
pub trait ProbeGpio {
    /// Switch `pin` between input and output.
    fn set_mode(&mut self, pin: PinId, mode: PinMode);

    /// Drive `pin` to `state` (pin must be an output).
    fn drive(&mut self, pin: PinId, state: PinState);

    /// Sample the level of `pin` (pin should be an input).
    fn read(&mut self, pin: PinId) -> PinState;
}
