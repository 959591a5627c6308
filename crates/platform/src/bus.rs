//! Probe-time control of the shared SPI bus.

use board_specs::BusWiring;

use crate::probe_target::ProbeTarget;

/// Exclusive control of the shared display bus under a reconfigurable pin
/// mapping.
///
/// The bus is a physically shared resource: only one pin mapping may be
/// active at a time, and the probe sequencer enforces that by releasing the
/// bus before every reconfiguration.
pub trait ProbeBus {
    /// Error type
    type Error: core::fmt::Debug;

    /// Release exclusive ownership of the bus.
    ///
    /// Must be safe to call when the bus is not currently held.
    fn release(&mut self);

    /// Acquire and initialize the bus for `target` under `wiring`.
    fn init(&mut self, target: &ProbeTarget, wiring: &BusWiring) -> Result<(), Self::Error>;

    /// Issue the display controller's identification command and return the
    /// raw register bits.
    ///
    /// The format is controller-family specific; callers treat the value
    /// opaquely apart from byte/bit masks. An unpopulated bus typically
    /// reads back all-ones or all-zeros.
    fn read_panel_id(&mut self) -> impl core::future::Future<Output = Result<u32, Self::Error>>;
}
