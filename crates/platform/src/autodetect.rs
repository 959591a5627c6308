//! Board autodetection state machine.
//!
//! Walks the fixed probe plan from `board-specs`: for each stage, release
//! the bus, quiesce the previous stage's control lines, apply the new pin
//! mapping, probe the device-ID register and classify the response. The
//! first signature match activates the matched profile and ends the
//! sequence; exhausting the plan terminates with [`BoardId::Unknown`].
//!
//! Detection never fails: a dead, absent or mis-wired panel reads back
//! floating-bus garbage and falls through every signature. `Unknown` is a
//! valid result meaning "no usable display"; the caller decides whether to
//! run headless or escalate.

use board_specs::{BoardId, Candidate, PanelVariant, PinId, ProbeStage, StrapSense};

use crate::bus::ProbeBus;
use crate::delay::DelaySource;
use crate::gpio::{PinMode, PinState, ProbeGpio};
use crate::panel::{ActivePanel, PanelHost};
use crate::probe_target::ProbeTarget;

/// Raw ID substituted when the bus read itself fails.
///
/// All-ones is what a floating bus reads back; it fails every signature,
/// including the presence heuristic.
const FLOATING_ID: u32 = u32::MAX;

/// Autodetection controller.
///
/// Owns the probe-target scratch and the detection result; borrows the
/// hardware collaborators for the duration of a run. Intended to run once at
/// system bring-up; re-running without first returning the bus to a
/// quiescent state is outside the guaranteed envelope.
pub struct Autodetect<'a, B, G, P, D> {
    bus: &'a mut B,
    gpio: &'a mut G,
    panel: &'a mut P,
    delay: &'a mut D,
    target: ProbeTarget,
    board: BoardId,
}

impl<'a, B, G, P, D> Autodetect<'a, B, G, P, D>
where
    B: ProbeBus,
    G: ProbeGpio,
    P: PanelHost,
    D: DelaySource,
{
    /// New controller over the four hardware collaborators.
    pub fn new(bus: &'a mut B, gpio: &'a mut G, panel: &'a mut P, delay: &'a mut D) -> Self {
        Self {
            bus,
            gpio,
            panel,
            delay,
            target: ProbeTarget::probe_only(),
            board: BoardId::Unknown,
        }
    }

    /// Last detection result; [`BoardId::Unknown`] before the first run.
    pub fn board(&self) -> BoardId {
        self.board
    }

    /// Run the probe plan once and return the detected identity.
    ///
    /// Stages run in order, each attempted exactly once; the first signature
    /// match wins and no further stages execute. Collaborator errors are
    /// absorbed into "no match". On exhaustion the bus is released and the
    /// last stage's control lines are left driven low.
    pub async fn detect(&mut self, stages: &[ProbeStage]) -> BoardId {
        self.board = BoardId::Unknown;
        let mut quiesce: Option<(PinId, PinId)> = None;

        for stage in stages {
            // Manual mutual exclusion over the physical bus: always release
            // before touching the pin mapping, and pin the previous stage's
            // control lines low so a half-initialized probe can't contend.
            self.bus.release();
            if let Some((cs, dc)) = quiesce {
                self.gpio.drive(dc, PinState::Low);
                self.gpio.drive(cs, PinState::Low);
            }
            self.target.assume_stage(stage);
            quiesce = Some((stage.cs, stage.dc));

            if self.bus.init(&self.target, &stage.wiring).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("[autodetect] {=str}: bus init failed", stage.name);
                continue;
            }

            if let (Some(rst), Some(pulse)) = (stage.rst, stage.reset_pulse) {
                self.gpio.set_mode(rst, PinMode::Output);
                self.gpio.drive(rst, PinState::Low);
                self.delay.wait_ms(pulse.hold_low_ms).await;
                self.gpio.drive(rst, PinState::High);
                self.delay.wait_ms(pulse.settle_ms).await;
            }
            if stage.settle_ms > 0 {
                self.delay.wait_ms(stage.settle_ms).await;
            }

            let raw = self.bus.read_panel_id().await.unwrap_or(FLOATING_ID);
            #[cfg(feature = "defmt")]
            defmt::info!("[autodetect] {=str}: panel id {=u32:#x}", stage.name, raw);

            for candidate in stage.candidates {
                if candidate.pattern.matches(raw) {
                    return self.matched(candidate).await;
                }
            }
        }

        // Exhausted: no panel activated, bus left quiesced.
        self.bus.release();
        if let Some((cs, dc)) = quiesce {
            self.gpio.drive(dc, PinState::Low);
            self.gpio.drive(cs, PinState::Low);
        }
        #[cfg(feature = "defmt")]
        defmt::info!("[autodetect] no panel matched");
        self.board
    }

    async fn matched(&mut self, candidate: &Candidate) -> BoardId {
        let variant = match candidate.strap_sense {
            Some(strap) => self.sense_variant(strap).await,
            None => PanelVariant::Tn,
        };
        self.panel.activate(ActivePanel {
            board: candidate.board,
            profile: candidate.profile,
            variant,
        });
        if self.panel.run_init().await.is_err() {
            // The identity stands: a bring-up hiccup is not a different board.
            #[cfg(feature = "defmt")]
            defmt::warn!("[autodetect] {} init failed", candidate.board);
        }
        #[cfg(feature = "defmt")]
        defmt::info!("[autodetect] detected {}", candidate.board);
        self.board = candidate.board;
        self.board
    }

    /// Sample the manufacturing-variant strap: drive the line low, float it
    /// as an input and read after the settle. The settle matters: the line
    /// needs time to rise through the strap before the sample, and reading
    /// early returns the line's own discharge instead.
    async fn sense_variant(&mut self, strap: StrapSense) -> PanelVariant {
        self.gpio.drive(strap.pin, PinState::Low);
        self.gpio.set_mode(strap.pin, PinMode::Input);
        self.delay.wait_ms(strap.settle_ms).await;
        match self.gpio.read(strap.pin) {
            PinState::High => PanelVariant::Ips,
            PinState::Low => PanelVariant::Tn,
        }
    }
}
