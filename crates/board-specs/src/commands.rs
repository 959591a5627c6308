//! Display command constants and controller-family initialization tables.
//!
//! Reference: MIPI Display Command Set plus the Sitronix ST7735S / ST7789V
//! and ILI Technology ILI9342C datasheets (command chapters).
//!
//! # Table format
//!
//! Initialization tables are flat byte strings of repeated
//! `(command, arg-count, args…)` records. If [`ARG_DELAY_FLAG`] is set in
//! the arg-count byte, one extra byte follows the args: a post-command delay
//! in milliseconds. The pair `0xFF, 0xFF` ([`SEQ_END`] twice) terminates a
//! table. [`crate::InitSequence`] decodes the format.
//!
//! Tables are split into named phases ([`PHASE_POWER`] … [`PHASE_ENABLE`])
//! so a board can patch a single phase and reuse the rest of its family's
//! bring-up sequence.

use crate::ControllerFamily;

// ── MIPI DCS commands common to every supported controller ─────────────────

/// Software reset.
pub const SWRESET: u8 = 0x01;
/// Read display identification information.
pub const RDDID: u8 = 0x04;
/// Exit sleep mode.
pub const SLPOUT: u8 = 0x11;
/// Normal display mode on.
pub const NORON: u8 = 0x13;
/// Display inversion off.
pub const INVOFF: u8 = 0x20;
/// Display inversion on.
pub const INVON: u8 = 0x21;
/// Gamma curve select.
pub const GAMSET: u8 = 0x26;
/// Display on.
pub const DISPON: u8 = 0x29;
/// Memory data access control.
pub const MADCTL: u8 = 0x36;
/// Interface pixel format.
pub const COLMOD: u8 = 0x3A;

/// GAMSET argument: gamma curve 1 (G2.2).
pub const GAMMA_CURVE1: u8 = 0x01;
/// GAMSET argument: gamma curve 2 (G1.8).
pub const GAMMA_CURVE2: u8 = 0x02;
/// GAMSET argument: gamma curve 3 (G2.5).
pub const GAMMA_CURVE3: u8 = 0x04;
/// GAMSET argument: gamma curve 4 (G1.0).
pub const GAMMA_CURVE4: u8 = 0x08;

// ── Table format markers ────────────────────────────────────────────────────

/// Bit 7 of a record's arg-count byte: a post-command delay-ms byte follows
/// the args.
pub const ARG_DELAY_FLAG: u8 = 0x80;
/// Mask selecting the arg count proper from a record's arg-count byte.
pub const ARG_COUNT_MASK: u8 = 0x7F;
/// Two of these in a row terminate a table.
pub const SEQ_END: u8 = 0xFF;

// ── Initialization phases ───────────────────────────────────────────────────

/// Reset, power rails and voltage setup.
pub const PHASE_POWER: u8 = 0;
/// Pixel format and memory access order.
pub const PHASE_FORMAT: u8 = 1;
/// Gamma correction.
pub const PHASE_GAMMA: u8 = 2;
/// Leave sleep and switch the pixel pipeline on.
pub const PHASE_ENABLE: u8 = 3;

/// Capacity sufficient for any synthesized invert-display sequence.
pub const INVERT_SEQ_CAPACITY: usize = 9;

/// Sitronix ST7735S registers and initialization tables.
pub mod st7735s {
    use super::{
        ARG_DELAY_FLAG, COLMOD, DISPON, GAMMA_CURVE1, GAMSET, MADCTL, NORON, SEQ_END, SLPOUT,
        SWRESET,
    };

    /// Frame rate control, normal mode.
    pub const FRMCTR1: u8 = 0xB1;
    /// Frame rate control, idle mode.
    pub const FRMCTR2: u8 = 0xB2;
    /// Frame rate control, partial mode.
    pub const FRMCTR3: u8 = 0xB3;
    /// Display inversion control.
    pub const INVCTR: u8 = 0xB4;
    /// Power control 1 (GVDD / AVDD).
    pub const PWCTR1: u8 = 0xC0;
    /// Power control 2 (VGH / VGL).
    pub const PWCTR2: u8 = 0xC1;
    /// Power control 3 (op-amp current, normal mode).
    pub const PWCTR3: u8 = 0xC2;
    /// Power control 4 (op-amp current, idle mode).
    pub const PWCTR4: u8 = 0xC3;
    /// Power control 5 (op-amp current, partial mode).
    pub const PWCTR5: u8 = 0xC4;
    /// VCOM voltage.
    pub const VMCTR1: u8 = 0xC5;
    /// Positive gamma correction.
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction.
    pub const GMCTRN1: u8 = 0xE1;

    /// Reset, frame rate and power rails.
    pub static INIT_POWER: &[u8] = &[
        SWRESET, ARG_DELAY_FLAG, 120,
        SLPOUT, ARG_DELAY_FLAG, 120,
        FRMCTR1, 3, 0x01, 0x2C, 0x2D,
        FRMCTR2, 3, 0x01, 0x2C, 0x2D,
        FRMCTR3, 6, 0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D,
        INVCTR, 1, 0x07,
        PWCTR1, 3, 0xA2, 0x02, 0x84,
        PWCTR2, 1, 0xC5,
        PWCTR3, 2, 0x0A, 0x00,
        PWCTR4, 2, 0x8A, 0x2A,
        PWCTR5, 2, 0x8A, 0xEE,
        VMCTR1, 1, 0x0E,
        SEQ_END, SEQ_END,
    ];

    /// 16-bit pixels, BGR subpixel order.
    pub static INIT_FORMAT: &[u8] = &[
        COLMOD, 1 | ARG_DELAY_FLAG, 0x05, 10,
        MADCTL, 1, 0x08,
        SEQ_END, SEQ_END,
    ];

    /// Factory gamma tables and the default curve.
    pub static INIT_GAMMA: &[u8] = &[
        GMCTRP1, 16, 0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39,
        0x00, 0x01, 0x03, 0x10,
        GMCTRN1, 16, 0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F,
        0x00, 0x00, 0x02, 0x10,
        GAMSET, 1, GAMMA_CURVE1,
        SEQ_END, SEQ_END,
    ];

    /// Normal mode on, display on.
    pub static INIT_ENABLE: &[u8] = &[
        NORON, ARG_DELAY_FLAG, 10,
        DISPON, ARG_DELAY_FLAG, 100,
        SEQ_END, SEQ_END,
    ];
}

/// Sitronix ST7789 registers and initialization tables.
pub mod st7789 {
    use super::{
        ARG_DELAY_FLAG, COLMOD, DISPON, MADCTL, NORON, SEQ_END, SLPOUT, SWRESET,
    };

    /// Porch setting.
    pub const PORCTRL: u8 = 0xB2;
    /// Gate control (VGH / VGL).
    pub const GCTRL: u8 = 0xB7;
    /// VCOM setting.
    pub const VCOMS: u8 = 0xBB;
    /// LCM control.
    pub const LCMCTRL: u8 = 0xC0;
    /// VDV and VRH register-value enable.
    pub const VDVVRHEN: u8 = 0xC2;
    /// VRH set.
    pub const VRHS: u8 = 0xC3;
    /// VDV set.
    pub const VDVS: u8 = 0xC4;
    /// Frame rate control, normal mode.
    pub const FRCTRL2: u8 = 0xC6;
    /// Power control 1 (AVDD / AVCL / VDS).
    pub const PWCTRL1: u8 = 0xD0;
    /// Positive voltage gamma control.
    pub const PVGAMCTRL: u8 = 0xE0;
    /// Negative voltage gamma control.
    pub const NVGAMCTRL: u8 = 0xE1;

    /// Reset, porch/gate timing and power rails.
    pub static INIT_POWER: &[u8] = &[
        SWRESET, ARG_DELAY_FLAG, 150,
        SLPOUT, ARG_DELAY_FLAG, 10,
        PORCTRL, 5, 0x0C, 0x0C, 0x00, 0x33, 0x33,
        GCTRL, 1, 0x35,
        VCOMS, 1, 0x19,
        LCMCTRL, 1, 0x2C,
        VDVVRHEN, 2, 0x01, 0xFF,
        VRHS, 1, 0x12,
        VDVS, 1, 0x20,
        FRCTRL2, 1, 0x0F,
        PWCTRL1, 2, 0xA4, 0xA1,
        SEQ_END, SEQ_END,
    ];

    /// 16-bit pixels, RGB subpixel order.
    pub static INIT_FORMAT: &[u8] = &[
        COLMOD, 1 | ARG_DELAY_FLAG, 0x55, 10,
        MADCTL, 1, 0x00,
        SEQ_END, SEQ_END,
    ];

    /// Factory voltage-gamma tables.
    pub static INIT_GAMMA: &[u8] = &[
        PVGAMCTRL, 14, 0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B,
        0x1F, 0x23,
        NVGAMCTRL, 14, 0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F,
        0x20, 0x23,
        SEQ_END, SEQ_END,
    ];

    /// Normal mode on, display on.
    pub static INIT_ENABLE: &[u8] = &[
        NORON, ARG_DELAY_FLAG, 10,
        DISPON, ARG_DELAY_FLAG, 100,
        SEQ_END, SEQ_END,
    ];
}

/// ILI Technology ILI9342C registers and initialization tables.
pub mod ili9342 {
    use super::{ARG_DELAY_FLAG, COLMOD, DISPON, MADCTL, SEQ_END, SLPOUT, SWRESET};

    /// Extended command set enable (vendor magic bytes).
    pub const SETEXTC: u8 = 0xC8;
    /// Interface mode control.
    pub const IFMODE: u8 = 0xB0;
    /// Frame rate control, normal mode.
    pub const FRMCTR1: u8 = 0xB1;
    /// Display function control.
    pub const DFUNCTR: u8 = 0xB6;
    /// Power control 1.
    pub const PWCTR1: u8 = 0xC0;
    /// Power control 2.
    pub const PWCTR2: u8 = 0xC1;
    /// VCOM control 1.
    pub const VMCTR1: u8 = 0xC5;
    /// Positive gamma correction.
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction.
    pub const GMCTRN1: u8 = 0xE1;

    /// Reset, vendor unlock and power rails.
    pub static INIT_POWER: &[u8] = &[
        SWRESET, ARG_DELAY_FLAG, 120,
        SETEXTC, 3, 0xFF, 0x93, 0x42,
        PWCTR1, 2, 0x12, 0x12,
        PWCTR2, 1, 0x03,
        VMCTR1, 1, 0xF2,
        IFMODE, 1, 0xE0,
        FRMCTR1, 2, 0x00, 0x1B,
        DFUNCTR, 3, 0x08, 0x82, 0x27,
        SEQ_END, SEQ_END,
    ];

    /// 16-bit pixels, BGR subpixel order.
    pub static INIT_FORMAT: &[u8] = &[
        COLMOD, 1, 0x55,
        MADCTL, 1, 0x08,
        SEQ_END, SEQ_END,
    ];

    /// Factory gamma tables.
    pub static INIT_GAMMA: &[u8] = &[
        GMCTRP1, 15, 0x00, 0x0C, 0x11, 0x04, 0x11, 0x08, 0x37, 0x89, 0x4C, 0x06, 0x0C, 0x0A,
        0x2E, 0x34, 0x0F,
        GMCTRN1, 15, 0x00, 0x0B, 0x11, 0x05, 0x13, 0x09, 0x33, 0x67, 0x48, 0x07, 0x0E, 0x0B,
        0x2E, 0x33, 0x0F,
        SEQ_END, SEQ_END,
    ];

    /// Leave sleep, display on.
    pub static INIT_ENABLE: &[u8] = &[
        SLPOUT, ARG_DELAY_FLAG, 120,
        DISPON, ARG_DELAY_FLAG, 25,
        SEQ_END, SEQ_END,
    ];
}

/// Default initialization table for one phase of a controller family.
///
/// Callers iterate phases from 0 until `None`. Boards patch individual
/// phases through [`crate::BoardProfile::init_commands`].
pub const fn family_init_commands(family: ControllerFamily, phase: u8) -> Option<&'static [u8]> {
    match (family, phase) {
        (ControllerFamily::St7735S, PHASE_POWER) => Some(st7735s::INIT_POWER),
        (ControllerFamily::St7735S, PHASE_FORMAT) => Some(st7735s::INIT_FORMAT),
        (ControllerFamily::St7735S, PHASE_GAMMA) => Some(st7735s::INIT_GAMMA),
        (ControllerFamily::St7735S, PHASE_ENABLE) => Some(st7735s::INIT_ENABLE),
        (ControllerFamily::St7789, PHASE_POWER) => Some(st7789::INIT_POWER),
        (ControllerFamily::St7789, PHASE_FORMAT) => Some(st7789::INIT_FORMAT),
        (ControllerFamily::St7789, PHASE_GAMMA) => Some(st7789::INIT_GAMMA),
        (ControllerFamily::St7789, PHASE_ENABLE) => Some(st7789::INIT_ENABLE),
        (ControllerFamily::Ili9342, PHASE_POWER) => Some(ili9342::INIT_POWER),
        (ControllerFamily::Ili9342, PHASE_FORMAT) => Some(ili9342::INIT_FORMAT),
        (ControllerFamily::Ili9342, PHASE_GAMMA) => Some(ili9342::INIT_GAMMA),
        (ControllerFamily::Ili9342, PHASE_ENABLE) => Some(ili9342::INIT_ENABLE),
        _ => None,
    }
}

/// Family-default invert-display sequence: a single INVON/INVOFF record.
///
/// The returned slice borrows from `buf` and is sentinel-terminated.
pub fn family_invert_commands(buf: &mut [u8; INVERT_SEQ_CAPACITY], invert: bool) -> &[u8] {
    let op = if invert { INVON } else { INVOFF };
    buf[0] = op;
    buf[1] = 0;
    buf[2] = SEQ_END;
    buf[3] = SEQ_END;
    &buf[..4]
}

/// Invert-display sequence for IPS panel sub-variants.
///
/// Keeps the same invert opcode choice as the family default (emitted twice,
/// as the controller latches it per frame-polarity plane) and re-selects
/// gamma curve 2, which the IPS cell needs for a neutral mid-tone response.
pub fn ips_invert_commands(buf: &mut [u8; INVERT_SEQ_CAPACITY], invert: bool) -> &[u8] {
    let op = if invert { INVON } else { INVOFF };
    buf[0] = op;
    buf[1] = 0;
    buf[2] = op;
    buf[3] = 0;
    buf[4] = GAMSET;
    buf[5] = 1;
    buf[6] = GAMMA_CURVE2;
    buf[7] = SEQ_END;
    buf[8] = SEQ_END;
    &buf[..]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;
    use crate::InitSequence;

    const FAMILIES: [ControllerFamily; 3] = [
        ControllerFamily::St7735S,
        ControllerFamily::St7789,
        ControllerFamily::Ili9342,
    ];

    #[test]
    fn every_family_covers_all_phases() {
        for family in FAMILIES {
            for phase in [PHASE_POWER, PHASE_FORMAT, PHASE_GAMMA, PHASE_ENABLE] {
                assert!(
                    family_init_commands(family, phase).is_some(),
                    "missing phase {} table",
                    phase
                );
            }
            assert!(family_init_commands(family, 4).is_none());
        }
    }

    #[test]
    fn every_table_is_sentinel_terminated() {
        for family in FAMILIES {
            let mut phase = 0u8;
            while let Some(table) = family_init_commands(family, phase) {
                let tail = &table[table.len() - 2..];
                assert_eq!(tail, [SEQ_END, SEQ_END]);
                phase += 1;
            }
        }
    }

    #[test]
    fn every_table_decodes_without_residue() {
        for family in FAMILIES {
            let mut phase = 0u8;
            while let Some(table) = family_init_commands(family, phase) {
                let ops = InitSequence::new(table).count();
                assert!(ops > 0, "phase {} decodes to no ops", phase);
                phase += 1;
            }
        }
    }

    #[test]
    fn power_phases_begin_with_software_reset() {
        for family in FAMILIES {
            let table = family_init_commands(family, PHASE_POWER).unwrap();
            let first = InitSequence::new(table).next().unwrap();
            assert_eq!(first.command, SWRESET);
            assert!(first.delay_after_ms >= 100, "reset needs settle time");
            assert!(first.args.is_empty());
        }
    }

    #[test]
    fn st7735s_defaults_to_gamma_curve_1() {
        let table = family_init_commands(ControllerFamily::St7735S, PHASE_GAMMA).unwrap();
        let gamset = InitSequence::new(table)
            .find(|op| op.command == GAMSET)
            .unwrap();
        assert_eq!(gamset.args, [GAMMA_CURVE1]);
    }

    #[test]
    fn colmod_selects_16bpp_everywhere() {
        // 0x05 and 0x55 both set a 16-bit interface pixel format; the upper
        // nibble only matters for RGB-interface controllers.
        for family in FAMILIES {
            let table = family_init_commands(family, PHASE_FORMAT).unwrap();
            let colmod = InitSequence::new(table)
                .find(|op| op.command == COLMOD)
                .unwrap();
            assert_eq!(colmod.args.len(), 1);
            assert_eq!(colmod.args[0] & 0x07, 0x05);
        }
    }

    #[test]
    fn family_invert_emits_expected_opcode() {
        let mut buf = [0u8; INVERT_SEQ_CAPACITY];
        assert_eq!(family_invert_commands(&mut buf, true)[0], INVON);
        assert_eq!(family_invert_commands(&mut buf, false)[0], INVOFF);
    }

    #[test]
    fn ips_invert_keeps_opcode_and_patches_gamma() {
        let mut buf = [0u8; INVERT_SEQ_CAPACITY];
        let seq = ips_invert_commands(&mut buf, true);
        assert_eq!(seq[0], INVON);
        assert_eq!(seq[2], INVON, "opcode latched twice");
        assert_eq!(&seq[4..7], [GAMSET, 1, GAMMA_CURVE2]);
        assert_eq!(&seq[7..], [SEQ_END, SEQ_END]);
    }

    #[test]
    fn invert_sequences_decode_cleanly() {
        let mut buf = [0u8; INVERT_SEQ_CAPACITY];
        let seq = ips_invert_commands(&mut buf, false);
        let commands: std::vec::Vec<u8> = InitSequence::new(seq).map(|op| op.command).collect();
        assert_eq!(commands, [INVOFF, INVOFF, GAMSET]);
    }
}
