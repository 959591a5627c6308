//! TTGO board profiles

use crate::{
    Backlight, BoardProfile, BusWiring, ClockSet, ControllerFamily, Geometry, InvertStrategy,
    PinAssignment, PinId,
};

/// TTGO T-Watch (ST7789, 240×240)
///
/// Write-only wiring: the watch leaves MISO unrouted, so register reads come
/// back over the shared SDA line in 3-wire mode. No dedicated reset line;
/// the controller resets with the power domain.
pub const TTGO_TWATCH: BoardProfile = BoardProfile {
    name: "TTGO T-Watch",
    family: ControllerFamily::St7789,
    pins: PinAssignment {
        cs: PinId::new(5),
        dc: PinId::new(27),
        rst: None,
        backlight: Some(Backlight {
            pin: PinId::new(12),
            pwm_channel: 7,
        }),
    },
    wiring: BusWiring {
        mosi: PinId::new(19),
        miso: None,
        sclk: PinId::new(18),
    },
    clocks: ClockSet {
        write_hz: 80_000_000,
        read_hz: 20_000_000,
        fill_hz: 80_000_000,
    },
    geometry: Geometry {
        width: 240,
        height: 240,
        offset_x: 0,
        offset_y: 0,
        rotation: 0,
        offset_rotation: 0,
    },
    invert: true,
    spi_3wire: true,
    spi_mode_read: 0,
    dummy_read_bits: 8,
    init_patch: None,
    invert_strategy: InvertStrategy::FamilyDefault,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twatch_has_no_reset_or_miso() {
        assert!(TTGO_TWATCH.pins.rst.is_none());
        assert!(TTGO_TWATCH.wiring.miso.is_none());
    }
}
