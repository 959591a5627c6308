//! Mock implementations for testing
//!
//! Scripted collaborators for the probe traits, driving the detection state
//! machine without hardware. Compiled into the library (they are `no_std`
//! clean) so both the suites under `tests/` and downstream consumers can use
//! them.

use board_specs::{BusWiring, PinId};
use heapless::Vec;

use crate::bus::ProbeBus;
use crate::delay::DelaySource;
use crate::gpio::{PinMode, PinState, ProbeGpio};
use crate::panel::{ActivePanel, PanelHost};
use crate::probe_target::ProbeTarget;

/// Raw ID a scripted bus returns for wirings nothing answers on.
pub const FLOATING_BUS_ID: u32 = u32::MAX;

/// Error type shared by the fallible mocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

/// Scripted SPI bus: maps wiring configurations to raw panel IDs.
///
/// Unscripted wirings read back [`FLOATING_BUS_ID`], mirroring an
/// unpopulated bus.
pub struct MockBus {
    responses: Vec<(BusWiring, u32), 8>,
    current: Option<BusWiring>,
    held: bool,
    /// Wiring of every `init` call, in order.
    pub init_log: Vec<BusWiring, 8>,
    /// Number of `release` calls.
    pub release_count: usize,
    /// `init` calls made while the bus was still held (protocol violations).
    pub init_while_held: usize,
    /// Probe target seen at the most recent `init`.
    pub last_target: Option<ProbeTarget>,
    /// Fail every `init` call.
    pub fail_init: bool,
    /// Fail every `read_panel_id` call.
    pub fail_read: bool,
}

impl MockBus {
    /// New bus with nothing scripted.
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            current: None,
            held: false,
            init_log: Vec::new(),
            release_count: 0,
            init_while_held: 0,
            last_target: None,
            fail_init: false,
            fail_read: false,
        }
    }

    /// Script `id` as the response while `wiring` is active.
    pub fn respond(&mut self, wiring: BusWiring, id: u32) {
        let _ = self.responses.push((wiring, id));
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeBus for MockBus {
    type Error = MockFault;

    fn release(&mut self) {
        self.release_count = self.release_count.saturating_add(1);
        self.held = false;
        self.current = None;
    }

    fn init(&mut self, target: &ProbeTarget, wiring: &BusWiring) -> Result<(), MockFault> {
        if self.held {
            self.init_while_held = self.init_while_held.saturating_add(1);
        }
        if self.fail_init {
            return Err(MockFault);
        }
        let _ = self.init_log.push(*wiring);
        self.last_target = Some(*target);
        self.current = Some(*wiring);
        self.held = true;
        Ok(())
    }

    async fn read_panel_id(&mut self) -> Result<u32, MockFault> {
        if self.fail_read {
            return Err(MockFault);
        }
        let current = self.current;
        let id = self
            .responses
            .iter()
            .find(|(wiring, _)| Some(*wiring) == current)
            .map(|(_, id)| *id)
            .unwrap_or(FLOATING_BUS_ID);
        Ok(id)
    }
}

/// Recorded GPIO operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioOp {
    /// `set_mode` call.
    Mode(PinId, PinMode),
    /// `drive` call.
    Drive(PinId, PinState),
}

/// Recording GPIO port with presettable input levels.
pub struct MockGpio {
    levels: Vec<(PinId, PinState), 8>,
    /// Every mode/drive call, in order.
    pub ops: Vec<GpioOp, 64>,
}

impl MockGpio {
    /// New port; all inputs read low until preset.
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Preset the level sampled when `pin` is read as an input.
    pub fn set_level(&mut self, pin: PinId, state: PinState) {
        if let Some(entry) = self.levels.iter_mut().find(|(p, _)| *p == pin) {
            entry.1 = state;
            return;
        }
        let _ = self.levels.push((pin, state));
    }

    /// Most recent drive recorded for `pin`, if any.
    pub fn last_drive(&self, pin: PinId) -> Option<PinState> {
        self.ops.iter().rev().find_map(|op| match op {
            GpioOp::Drive(p, state) if *p == pin => Some(*state),
            _ => None,
        })
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeGpio for MockGpio {
    fn set_mode(&mut self, pin: PinId, mode: PinMode) {
        let _ = self.ops.push(GpioOp::Mode(pin, mode));
    }

    fn drive(&mut self, pin: PinId, state: PinState) {
        let _ = self.ops.push(GpioOp::Drive(pin, state));
    }

    fn read(&mut self, pin: PinId) -> PinState {
        self.levels
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, state)| *state)
            .unwrap_or(PinState::Low)
    }
}

/// Recording panel host.
pub struct MockPanel {
    /// Configuration installed by the last `activate`.
    pub active: Option<ActivePanel>,
    /// Number of `activate` calls.
    pub activate_count: usize,
    /// Number of `run_init` calls.
    pub init_runs: usize,
    /// Fail every `run_init` call.
    pub fail_init: bool,
}

impl MockPanel {
    /// New panel host with nothing active.
    pub fn new() -> Self {
        Self {
            active: None,
            activate_count: 0,
            init_runs: 0,
            fail_init: false,
        }
    }
}

impl Default for MockPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelHost for MockPanel {
    type Error = MockFault;

    fn activate(&mut self, panel: ActivePanel) {
        self.activate_count = self.activate_count.saturating_add(1);
        self.active = Some(panel);
    }

    async fn run_init(&mut self) -> Result<(), MockFault> {
        self.init_runs = self.init_runs.saturating_add(1);
        if self.fail_init {
            return Err(MockFault);
        }
        Ok(())
    }
}

/// Delay source that records requested waits without sleeping.
pub struct MockDelay {
    /// Every requested wait, in milliseconds, in order.
    pub waits: Vec<u32, 32>,
}

impl MockDelay {
    /// New recorder.
    pub fn new() -> Self {
        Self { waits: Vec::new() }
    }
}

impl Default for MockDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelaySource for MockDelay {
    fn wait_ms(&mut self, ms: u32) -> impl core::future::Future<Output = ()> {
        let _ = self.waits.push(ms);
        core::future::ready(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use board_specs::PROBE_SEQUENCE;

    #[tokio::test]
    async fn mock_bus_answers_only_on_scripted_wiring() {
        let mut bus = MockBus::new();
        let target = ProbeTarget::probe_only();
        let stage_a = &PROBE_SEQUENCE[0];
        let stage_b = &PROBE_SEQUENCE[2];
        bus.respond(stage_a.wiring, 0x0052_8585);

        bus.init(&target, &stage_a.wiring).unwrap();
        assert_eq!(bus.read_panel_id().await.unwrap(), 0x0052_8585);

        bus.release();
        bus.init(&target, &stage_b.wiring).unwrap();
        assert_eq!(bus.read_panel_id().await.unwrap(), FLOATING_BUS_ID);
    }

    #[tokio::test]
    async fn mock_bus_flags_init_without_release() {
        let mut bus = MockBus::new();
        let target = ProbeTarget::probe_only();
        let wiring = PROBE_SEQUENCE[0].wiring;

        bus.init(&target, &wiring).unwrap();
        bus.init(&target, &wiring).unwrap();
        assert_eq!(bus.init_while_held, 1);

        bus.release();
        bus.init(&target, &wiring).unwrap();
        assert_eq!(bus.init_while_held, 1);
    }

    #[test]
    fn mock_gpio_levels_and_drives() {
        let mut gpio = MockGpio::new();
        let pin = PinId::new(33);

        assert_eq!(gpio.read(pin), PinState::Low);
        gpio.set_level(pin, PinState::High);
        assert_eq!(gpio.read(pin), PinState::High);

        gpio.drive(pin, PinState::Low);
        gpio.drive(pin, PinState::High);
        assert_eq!(gpio.last_drive(pin), Some(PinState::High));
        assert_eq!(gpio.last_drive(PinId::new(5)), None);
    }

    #[tokio::test]
    async fn mock_delay_records_without_sleeping() {
        let mut delay = MockDelay::new();
        delay.wait_ms(10).await;
        delay.wait_ms(1).await;
        assert_eq!(delay.waits.as_slice(), [10, 1]);
    }
}
