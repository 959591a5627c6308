//! Display Board Profiles & Probe Plan
//!
//! Static hardware descriptions for the SPI display boards this firmware can
//! find itself running on, plus the fixed probe plan the autodetection
//! controller walks at bring-up.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Board templates** - Pre-configured profiles for the M5Stack and TTGO
//!   families
//! - **Serde support** - Optional serialization for host-side tooling
//! - **Shared command tables** - Controller-family init sequences referenced
//!   by every profile, with per-board patches where the factory panel needs
//!   one
//!
//! # Example
//!
//! ```
//! use board_specs::boards::M5STICKC;
//! use board_specs::InitSequence;
//!
//! let profile = &M5STICKC;
//! println!("Board: {}", profile.name);
//! println!("Panel: {}x{}", profile.geometry.width, profile.geometry.height);
//!
//! // Walk one initialization phase of the profile's command tables.
//! if let Some(table) = profile.init_commands(0) {
//!     for op in InitSequence::new(table) {
//!         println!("cmd {:#04x} ({} args)", op.command, op.args.len());
//!     }
//! }
//! ```
//!
//! # Custom Board Profiles
//!
//! A profile is a plain `const` record; integrators bringing up an unlisted
//! board declare their own and point a probe stage at it. See
//! [`boards`] for the shipped set and [`PROBE_SEQUENCE`] for the plan.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate std;

mod board_profile;
pub mod boards;
pub mod commands;
mod init_sequence;
mod probe;

pub use board_profile::{
    Backlight, BoardId, BoardProfile, BusWiring, ClockSet, ControllerFamily, Geometry, InitPatch,
    InvertStrategy, PanelVariant, PinAssignment, PinId,
};
pub use init_sequence::{InitOp, InitSequence};
pub use probe::{Candidate, IdPattern, ProbeStage, ResetPulse, StrapSense, PROBE_SEQUENCE};
