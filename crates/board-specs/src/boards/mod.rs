//! Pre-configured board profiles
//!
//! One `const` record per supported board, grouped by vendor. Values follow
//! the factory wiring and panel fit of each device.

pub mod m5;
pub mod ttgo;

pub use m5::*;
pub use ttgo::*;
