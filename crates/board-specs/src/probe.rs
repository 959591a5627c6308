//! Autodetection probe plan
//!
//! The fixed ordered stage table the detection controller walks at bring-up.
//! Stage order is load-bearing: signatures are matched first-stage,
//! first-candidate wins, and the presence-heuristic stage relies on every
//! more specific signature on overlapping wiring having run before it.

use crate::boards::{M5STACK, M5STICKC, M5STICKC_PLUS, TTGO_TWATCH};
use crate::{BoardId, BoardProfile, BusWiring, PinId};

/// Expected device-ID signature for a probe candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdPattern {
    /// Raw ID matches `value` on the bits selected by `mask`.
    Masked {
        /// Bits of the raw ID that participate in the comparison.
        mask: u32,
        /// Expected value of the selected bits.
        value: u32,
    },
    /// Anything answered at all: the raw ID is neither the all-zeros of a
    /// shorted bus nor the all-ones of a floating one. Used where a
    /// controller's ID register is not distinguishable by value alone.
    AnyResponse,
}

impl IdPattern {
    /// Test a raw device ID against this signature.
    pub const fn matches(self, raw: u32) -> bool {
        match self {
            IdPattern::Masked { mask, value } => raw & mask == value,
            IdPattern::AnyResponse => raw != 0 && raw != u32::MAX,
        }
    }
}

/// Reset pulse issued after bus init on stages whose candidate boards wire a
/// dedicated reset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetPulse {
    /// Hold the line low this long (ms).
    pub hold_low_ms: u32,
    /// Settle after driving it high again (ms).
    pub settle_ms: u32,
}

/// Strap-sense read performed on a matched candidate before its panel init.
///
/// Timing-sensitive: the line is driven low, floated as an input and sampled
/// after `settle_ms`. Sampling early reads the line's own discharge instead
/// of the strap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StrapSense {
    /// Line carrying the manufacturing-variant strap.
    pub pin: PinId,
    /// Input settle before the sample (ms).
    pub settle_ms: u32,
}

/// One ID-signature → board mapping within a stage.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Candidate {
    /// Signature the raw device ID must match.
    pub pattern: IdPattern,
    /// Identity reported on a match.
    pub board: BoardId,
    /// Profile activated on a match.
    pub profile: &'static BoardProfile,
    /// Manufacturing-variant read performed on a match, where the board has
    /// one.
    pub strap_sense: Option<StrapSense>,
}

/// One attempt in the fixed probe sequence: a pin mapping plus the
/// signatures reachable under it.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeStage {
    /// Stage label for log lines.
    pub name: &'static str,
    /// Chip-select line during this attempt.
    pub cs: PinId,
    /// Data/command line during this attempt.
    pub dc: PinId,
    /// Reset line, on stages that pulse one.
    pub rst: Option<PinId>,
    /// SPI data/clock lines during this attempt.
    pub wiring: BusWiring,
    /// Reset pulse issued after bus init, if any.
    pub reset_pulse: Option<ResetPulse>,
    /// Settle delay after bus init (and reset pulse), ms. Stages whose reset
    /// pulse already ends in a settle use 0 here.
    pub settle_ms: u32,
    /// Signatures checked in priority order; first match wins.
    pub candidates: &'static [Candidate],
}

/// The fixed probe plan, in execution order.
///
/// 1. T-Watch wiring. A ST7789 answering `0x85` here can only be the watch.
/// 2. Default VSPI wiring. Anything at all answering is the M5Stack Core;
///    its ILI9342C reports no usable ID value, so this is a presence check,
///    and the matched candidate strap-senses the panel sub-variant.
/// 3. Stick wiring, with a reset pulse. `0x85` is the ST7789 of the
///    M5StickC Plus, `0x7C` the ST7735S of the original M5StickC.
pub static PROBE_SEQUENCE: &[ProbeStage] = &[
    ProbeStage {
        name: "twatch-wiring",
        cs: PinId::new(5),
        dc: PinId::new(27),
        rst: None,
        wiring: BusWiring {
            mosi: PinId::new(19),
            miso: None,
            sclk: PinId::new(18),
        },
        reset_pulse: None,
        settle_ms: 10,
        candidates: &[Candidate {
            pattern: IdPattern::Masked {
                mask: 0xFF,
                value: 0x85,
            },
            board: BoardId::TtgoTWatch,
            profile: &TTGO_TWATCH,
            strap_sense: None,
        }],
    },
    ProbeStage {
        name: "core-wiring",
        cs: PinId::new(14),
        dc: PinId::new(27),
        rst: None,
        wiring: BusWiring {
            mosi: PinId::new(23),
            miso: Some(PinId::new(19)),
            sclk: PinId::new(18),
        },
        reset_pulse: None,
        settle_ms: 10,
        candidates: &[Candidate {
            pattern: IdPattern::AnyResponse,
            board: BoardId::M5Stack,
            profile: &M5STACK,
            strap_sense: Some(StrapSense {
                pin: PinId::new(33),
                settle_ms: 1,
            }),
        }],
    },
    ProbeStage {
        name: "stick-wiring",
        cs: PinId::new(5),
        dc: PinId::new(23),
        rst: Some(PinId::new(18)),
        wiring: BusWiring {
            mosi: PinId::new(15),
            miso: Some(PinId::new(14)),
            sclk: PinId::new(13),
        },
        reset_pulse: Some(ResetPulse {
            hold_low_ms: 1,
            settle_ms: 10,
        }),
        settle_ms: 0,
        candidates: &[
            Candidate {
                pattern: IdPattern::Masked {
                    mask: 0xFF,
                    value: 0x85,
                },
                board: BoardId::M5StickCPlus,
                profile: &M5STICKC_PLUS,
                strap_sense: None,
            },
            Candidate {
                pattern: IdPattern::Masked {
                    mask: 0xFF,
                    value: 0x7C,
                },
                board: BoardId::M5StickC,
                profile: &M5STICKC,
                strap_sense: None,
            },
        ],
    },
];
