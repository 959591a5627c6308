//! Hardware seam and autodetection controller for the display subsystem
//!
//! This crate owns the bring-up question "which display board are we running
//! on?". It defines trait abstractions for the hardware an answer needs
//! (the shared SPI bus, raw GPIO lines, the panel driver and a wait source)
//! and the state machine that walks the probe plan from `board-specs` over
//! them.
//!
//! # Architecture Layers
//!
//! ```text
//! Application / panel driver
//!         ↓
//! Autodetection controller (this crate)
//!         ↓
//! Probe traits (this crate): ProbeBus / ProbeGpio / PanelHost / DelaySource
//!         ↓
//! Hardware layer (HAL + PAC, supplied by the integrating firmware)
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library support in `board-specs`
//! - `defmt`: Enable defmt logging (hardware builds)
//!
//! # Example
//!
//! ```no_run
//! use board_specs::PROBE_SEQUENCE;
//! use platform::{Autodetect, DelaySource, PanelHost, ProbeBus, ProbeGpio};
//!
//! async fn bring_up<B, G, P, D>(bus: &mut B, gpio: &mut G, panel: &mut P, delay: &mut D)
//! where
//!     B: ProbeBus,
//!     G: ProbeGpio,
//!     P: PanelHost,
//!     D: DelaySource,
//! {
//!     let mut detect = Autodetect::new(bus, gpio, panel, delay);
//!     let board = detect.detect(PROBE_SEQUENCE).await;
//!     let _ = board; // Unknown is a valid outcome: run headless.
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]
#![allow(async_fn_in_trait)] // single-threaded bring-up, Send bounds not needed

pub mod autodetect;
pub mod bus;
pub mod delay;
pub mod gpio;
pub mod mocks;
pub mod panel;
pub mod probe_target;

// Re-export the controller and the trait seam
pub use autodetect::Autodetect;
pub use bus::ProbeBus;
pub use delay::{DelaySource, TimerDelay};
pub use gpio::{PinMode, PinState, ProbeGpio};
pub use panel::{ActivePanel, PanelHost};
pub use probe_target::ProbeTarget;
