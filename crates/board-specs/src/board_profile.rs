//! Board profile types
//!
//! Defines the per-board hardware parameter bundle consumed by the
//! autodetection controller and the panel driver.

use crate::commands::{self, INVERT_SEQ_CAPACITY};

/// Identity of the physical board selected by autodetection.
///
/// Exactly one value is active at a time. The detection controller sets it
/// once per run; everything downstream that needs board-specific behavior
/// (backlight pin, orientation, …) reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardId {
    /// No supported board answered any probe stage
    Unknown,
    /// M5Stack Core (ILI9342C, 320×240)
    M5Stack,
    /// M5StickC (ST7735S, 80×160)
    M5StickC,
    /// M5StickC Plus (ST7789, 135×240)
    M5StickCPlus,
    /// TTGO T-Watch (ST7789, 240×240)
    TtgoTWatch,
}

impl BoardId {
    /// Human-readable board name.
    pub const fn name(self) -> &'static str {
        match self {
            BoardId::Unknown => "unknown",
            BoardId::M5Stack => "M5Stack",
            BoardId::M5StickC => "M5StickC",
            BoardId::M5StickCPlus => "M5StickC Plus",
            BoardId::TtgoTWatch => "TTGO T-Watch",
        }
    }
}

impl core::fmt::Display for BoardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display controller chip family behind a board's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerFamily {
    /// Sitronix ST7735S (small TFT, up to 132×162)
    St7735S,
    /// Sitronix ST7789 / ST7789V (up to 240×320)
    St7789,
    /// ILI Technology ILI9342C (landscape 320×240)
    Ili9342,
}

/// Numeric GPIO line identifier.
///
/// The probe path reassigns pin roles at runtime, so lines are addressed by
/// number rather than through owned typestate pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    /// Wrap a raw GPIO number.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The raw GPIO number.
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Backlight output line and the PWM channel that dims it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Backlight {
    /// Backlight enable/dim line
    pub pin: PinId,
    /// PWM channel assigned to the line
    pub pwm_channel: u8,
}

/// Control-line assignment for a panel (or for the probe target standing in
/// for one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Chip select, active low
    pub cs: PinId,
    /// Data/command select
    pub dc: PinId,
    /// Dedicated reset line, where the board wires one
    pub rst: Option<PinId>,
    /// Backlight, where driven from a GPIO (some boards dim through a PMIC
    /// instead)
    pub backlight: Option<Backlight>,
}

/// SPI data/clock line assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusWiring {
    /// Controller data-in line
    pub mosi: PinId,
    /// Controller data-out line; absent on write-only wirings
    pub miso: Option<PinId>,
    /// Bus clock line
    pub sclk: PinId,
}

/// SPI clock frequencies per operation class, in Hz.
///
/// Panels tolerate much faster clocks for streaming pixel data than for
/// register reads, so the driver switches between these per transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSet {
    /// Command/data writes
    pub write_hz: u32,
    /// Register and pixel readback
    pub read_hz: u32,
    /// Solid-fill bursts
    pub fill_hz: u32,
}

/// Panel geometry and mounting correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// First visible column in controller RAM
    pub offset_x: u16,
    /// First visible row in controller RAM
    pub offset_y: u16,
    /// Default rotation presented to the application (quarter turns)
    pub rotation: u8,
    /// Mounting correction added to every requested rotation (quarter turns)
    pub offset_rotation: u8,
}

/// Replacement byte table for one initialization phase.
///
/// Boards that need a single parameter changed in a family's bring-up
/// sequence patch just that phase and reuse the rest. See
/// [`BoardProfile::init_commands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitPatch {
    /// Phase index this table replaces
    pub phase: u8,
    /// Replacement table, in the shared `(command, arg-count, args…)` format
    pub table: &'static [u8],
}

/// How invert-display command bytes are produced for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvertStrategy {
    /// The controller family's plain INVON/INVOFF sequence
    FamilyDefault,
    /// IPS sub-variant panels additionally re-select the gamma curve; the
    /// choice is made at runtime from the strap-sensed [`PanelVariant`]
    IpsGammaPatch,
}

/// Manufacturing variant of a panel, sampled from a strap line at detection
/// time.
///
/// Two electrically near-identical panel builds can sit behind the same
/// controller; the strap distinguishes them where the device ID cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelVariant {
    /// Twisted-nematic build (strap reads low)
    Tn,
    /// In-plane-switching build (strap reads high)
    Ips,
}

/// Complete hardware description of one supported board.
///
/// Immutable after construction; one `const` instance per known board lives
/// for the whole process. The autodetection controller activates exactly one
/// of them.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardProfile {
    /// Marketing name of the board
    pub name: &'static str,

    /// Display controller family driving the panel
    pub family: ControllerFamily,

    /// Control-line assignment
    pub pins: PinAssignment,

    /// SPI data/clock lines the panel is wired to
    pub wiring: BusWiring,

    /// SPI clock frequencies per operation class
    pub clocks: ClockSet,

    /// Panel geometry and mounting correction
    pub geometry: Geometry,

    /// Panel expects inverted color
    pub invert: bool,

    /// Half-duplex 3-wire SPI (no dedicated MISO during writes)
    pub spi_3wire: bool,

    /// SPI mode used for register/pixel readback
    pub spi_mode_read: u8,

    /// Dummy clock cycles discarded before pixel readback data is valid
    pub dummy_read_bits: u8,

    /// Phase patch applied on top of the family init tables, if any
    pub init_patch: Option<InitPatch>,

    /// How invert-display commands are synthesized
    pub invert_strategy: InvertStrategy,
}

impl BoardProfile {
    /// Command table for one initialization phase.
    ///
    /// Returns the board's patched table where its [`InitPatch`] names this
    /// phase, the family default otherwise, and `None` past the last phase.
    /// Callers iterate phases from 0 until `None`.
    pub fn init_commands(&self, phase: u8) -> Option<&'static [u8]> {
        if let Some(patch) = self.init_patch {
            if patch.phase == phase {
                return Some(patch.table);
            }
        }
        commands::family_init_commands(self.family, phase)
    }

    /// Synthesize the invert-display command sequence into `buf`.
    ///
    /// The returned slice borrows from `buf` and is sentinel-terminated in
    /// the same format as the init tables. The invert on/off opcode is
    /// chosen by `invert` under every strategy; the IPS gamma patch only
    /// appends a gamma-curve re-selection.
    pub fn invert_display_commands<'b>(
        &self,
        buf: &'b mut [u8; INVERT_SEQ_CAPACITY],
        invert: bool,
        variant: PanelVariant,
    ) -> &'b [u8] {
        match (self.invert_strategy, variant) {
            (InvertStrategy::IpsGammaPatch, PanelVariant::Ips) => {
                commands::ips_invert_commands(buf, invert)
            }
            _ => commands::family_invert_commands(buf, invert),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;
    use crate::boards::{M5STACK, M5STICKC, TTGO_TWATCH};
    use crate::commands::{
        family_init_commands, GAMMA_CURVE2, GAMMA_CURVE4, GAMSET, INVOFF, INVON, PHASE_GAMMA,
        SEQ_END,
    };

    #[test]
    fn board_names_are_stable() {
        assert_eq!(BoardId::M5Stack.name(), "M5Stack");
        assert_eq!(BoardId::Unknown.name(), "unknown");
    }

    #[test]
    fn patched_phase_replaces_family_table() {
        let patched = M5STICKC.init_commands(PHASE_GAMMA).unwrap();
        assert_eq!(patched[0], GAMSET);
        assert_eq!(patched[2], GAMMA_CURVE4);
        assert_ne!(
            patched,
            family_init_commands(ControllerFamily::St7735S, PHASE_GAMMA).unwrap()
        );
    }

    #[test]
    fn unpatched_phases_fall_through_to_family() {
        assert_eq!(
            M5STICKC.init_commands(0),
            family_init_commands(ControllerFamily::St7735S, 0)
        );
        assert_eq!(
            M5STACK.init_commands(PHASE_GAMMA),
            family_init_commands(ControllerFamily::Ili9342, PHASE_GAMMA)
        );
    }

    #[test]
    fn phases_end_with_none() {
        let mut phase = 0u8;
        while TTGO_TWATCH.init_commands(phase).is_some() {
            phase = phase.checked_add(1).unwrap();
        }
        assert!(phase >= 2, "family tables should span several phases");
        assert!(TTGO_TWATCH.init_commands(phase).is_none());
    }

    #[test]
    fn family_default_invert_is_plain_opcode() {
        let mut buf = [0u8; INVERT_SEQ_CAPACITY];
        let seq = TTGO_TWATCH.invert_display_commands(&mut buf, true, PanelVariant::Tn);
        assert_eq!(seq, &[INVON, 0, SEQ_END, SEQ_END]);

        let seq = TTGO_TWATCH.invert_display_commands(&mut buf, false, PanelVariant::Tn);
        assert_eq!(seq, &[INVOFF, 0, SEQ_END, SEQ_END]);
    }

    #[test]
    fn ips_variant_patches_gamma_but_keeps_opcode() {
        let mut tn_buf = [0u8; INVERT_SEQ_CAPACITY];
        let mut ips_buf = [0u8; INVERT_SEQ_CAPACITY];
        let tn = M5STACK.invert_display_commands(&mut tn_buf, true, PanelVariant::Tn);
        let ips = M5STACK.invert_display_commands(&mut ips_buf, true, PanelVariant::Ips);

        assert_eq!(tn[0], ips[0], "invert opcode must not change per variant");
        assert_eq!(tn.len(), 4);
        assert_eq!(ips.len(), INVERT_SEQ_CAPACITY);
        assert!(ips.windows(3).any(|w| w == [GAMSET, 1, GAMMA_CURVE2]));
        assert!(!tn.windows(3).any(|w| w == [GAMSET, 1, GAMMA_CURVE2]));
    }

    #[test]
    fn ips_patch_only_applies_to_opted_in_profiles() {
        let mut buf = [0u8; INVERT_SEQ_CAPACITY];
        // TTGO T-Watch has no IPS sub-variant; the variant flag is ignored.
        let seq = TTGO_TWATCH.invert_display_commands(&mut buf, true, PanelVariant::Ips);
        assert_eq!(seq, &[INVON, 0, SEQ_END, SEQ_END]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn value_types_round_trip_through_json() {
        let geometry = Geometry {
            width: 320,
            height: 240,
            offset_x: 0,
            offset_y: 0,
            rotation: 1,
            offset_rotation: 3,
        };
        let json = serde_json::to_string(&geometry).unwrap();
        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geometry);

        let json = serde_json::to_string(&BoardId::M5StickCPlus).unwrap();
        let back: BoardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BoardId::M5StickCPlus);
    }
}
