//! M5Stack board profiles
//!
//! Factory wiring for the M5Stack Core and the two M5StickC revisions. The
//! Core sits on the default VSPI pins; the sticks route SPI through the
//! AXP192 power domain on a separate pin group.

use crate::commands::{GAMMA_CURVE4, GAMSET, PHASE_GAMMA, SEQ_END};
use crate::{
    Backlight, BoardProfile, BusWiring, ClockSet, ControllerFamily, Geometry, InitPatch,
    InvertStrategy, PinAssignment, PinId,
};

/// M5Stack Core (ILI9342C, 320×240, shared VSPI bus)
///
/// The panel ships in two electrically near-identical sub-variants (TN and
/// IPS) behind the same controller; the reset-line strap read at detection
/// time tells them apart, and the IPS build patches the invert-display
/// sequence (see [`InvertStrategy::IpsGammaPatch`]).
pub const M5STACK: BoardProfile = BoardProfile {
    name: "M5Stack Core",
    family: ControllerFamily::Ili9342,
    pins: PinAssignment {
        cs: PinId::new(14),
        dc: PinId::new(27),
        rst: Some(PinId::new(33)),
        backlight: Some(Backlight {
            pin: PinId::new(32),
            pwm_channel: 7,
        }),
    },
    wiring: BusWiring {
        mosi: PinId::new(23),
        miso: Some(PinId::new(19)),
        sclk: PinId::new(18),
    },
    clocks: ClockSet {
        write_hz: 40_000_000,
        read_hz: 16_000_000,
        fill_hz: 40_000_000,
    },
    geometry: Geometry {
        width: 320,
        height: 240,
        offset_x: 0,
        offset_y: 0,
        rotation: 1,
        offset_rotation: 3,
    },
    invert: false,
    spi_3wire: true,
    spi_mode_read: 0,
    dummy_read_bits: 8,
    init_patch: None,
    invert_strategy: InvertStrategy::IpsGammaPatch,
};

/// Gamma phase patch for the M5StickC factory panel: curve 4 instead of the
/// ST7735S default.
static M5STICKC_GAMMA: &[u8] = &[GAMSET, 1, GAMMA_CURVE4, SEQ_END, SEQ_END];

/// M5StickC (ST7735S, 80×160)
///
/// Backlight and panel rails are driven by the AXP192 PMIC, so there is no
/// backlight GPIO. The visible window sits offset inside the controller RAM
/// and the panel is mounted upside down.
pub const M5STICKC: BoardProfile = BoardProfile {
    name: "M5StickC",
    family: ControllerFamily::St7735S,
    pins: PinAssignment {
        cs: PinId::new(5),
        dc: PinId::new(23),
        rst: Some(PinId::new(18)),
        backlight: None,
    },
    wiring: BusWiring {
        mosi: PinId::new(15),
        miso: Some(PinId::new(14)),
        sclk: PinId::new(13),
    },
    clocks: ClockSet {
        write_hz: 27_000_000,
        read_hz: 8_000_000,
        fill_hz: 27_000_000,
    },
    geometry: Geometry {
        width: 80,
        height: 160,
        offset_x: 26,
        offset_y: 1,
        rotation: 0,
        offset_rotation: 2,
    },
    invert: true,
    spi_3wire: true,
    spi_mode_read: 0,
    dummy_read_bits: 8,
    init_patch: Some(InitPatch {
        phase: PHASE_GAMMA,
        table: M5STICKC_GAMMA,
    }),
    invert_strategy: InvertStrategy::FamilyDefault,
};

/// M5StickC Plus (ST7789, 135×240)
///
/// Same stick wiring as the original M5StickC but a faster controller: the
/// ST7789 sustains 80 MHz writes and needs SPI mode 1 plus 16 dummy bits for
/// pixel readback.
pub const M5STICKC_PLUS: BoardProfile = BoardProfile {
    name: "M5StickC Plus",
    family: ControllerFamily::St7789,
    pins: PinAssignment {
        cs: PinId::new(5),
        dc: PinId::new(23),
        rst: Some(PinId::new(18)),
        backlight: None,
    },
    wiring: BusWiring {
        mosi: PinId::new(15),
        miso: Some(PinId::new(14)),
        sclk: PinId::new(13),
    },
    clocks: ClockSet {
        write_hz: 80_000_000,
        read_hz: 16_000_000,
        fill_hz: 80_000_000,
    },
    geometry: Geometry {
        width: 135,
        height: 240,
        offset_x: 52,
        offset_y: 40,
        rotation: 0,
        offset_rotation: 0,
    },
    invert: true,
    spi_3wire: true,
    spi_mode_read: 1,
    dummy_read_bits: 16,
    init_patch: None,
    invert_strategy: InvertStrategy::FamilyDefault,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticks_share_wiring_but_not_controller() {
        assert_eq!(M5STICKC.wiring, M5STICKC_PLUS.wiring);
        assert_eq!(M5STICKC.pins.cs, M5STICKC_PLUS.pins.cs);
        assert_ne!(M5STICKC.family, M5STICKC_PLUS.family);
    }

    #[test]
    fn stickc_gamma_patch_is_sentinel_terminated() {
        assert_eq!(M5STICKC_GAMMA, [GAMSET, 1, GAMMA_CURVE4, SEQ_END, SEQ_END]);
    }

    #[test]
    fn core_is_the_only_strap_sensed_profile() {
        assert_eq!(M5STACK.invert_strategy, InvertStrategy::IpsGammaPatch);
        assert_eq!(M5STICKC.invert_strategy, InvertStrategy::FamilyDefault);
        assert_eq!(M5STICKC_PLUS.invert_strategy, InvertStrategy::FamilyDefault);
    }

    #[test]
    fn probe_only_geometry_never_leaks_into_profiles() {
        for profile in [&M5STACK, &M5STICKC, &M5STICKC_PLUS] {
            assert!(profile.geometry.width > 0);
            assert!(profile.geometry.height > 0);
        }
    }
}
