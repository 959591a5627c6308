//! Board Profile Example
//!
//! Dumps the shipped board profiles and the probe plan.
//!
//! Run with: cargo run --example board_info

use board_specs::boards::{M5STACK, M5STICKC, M5STICKC_PLUS, TTGO_TWATCH};
use board_specs::{BoardProfile, InitSequence, PROBE_SEQUENCE};

fn print_profile(profile: &BoardProfile) {
    println!("\n{}", "=".repeat(60));
    println!("Board: {}", profile.name);
    println!("{}", "=".repeat(60));

    println!("  Controller: {:?}", profile.family);
    println!(
        "  Panel: {}x{} (+{},+{}) rot {} (offset {})",
        profile.geometry.width,
        profile.geometry.height,
        profile.geometry.offset_x,
        profile.geometry.offset_y,
        profile.geometry.rotation,
        profile.geometry.offset_rotation,
    );
    println!(
        "  Pins: CS {} DC {} RST {:?}",
        profile.pins.cs.number(),
        profile.pins.dc.number(),
        profile.pins.rst.map(|p| p.number()),
    );
    println!(
        "  SPI: MOSI {} MISO {:?} SCLK {} ({} MHz write / {} MHz read)",
        profile.wiring.mosi.number(),
        profile.wiring.miso.map(|p| p.number()),
        profile.wiring.sclk.number(),
        profile.clocks.write_hz / 1_000_000,
        profile.clocks.read_hz / 1_000_000,
    );

    let mut phase = 0u8;
    while let Some(table) = profile.init_commands(phase) {
        let ops = InitSequence::new(table).count();
        let patched = profile
            .init_patch
            .map(|p| p.phase == phase)
            .unwrap_or(false);
        println!(
            "  Init phase {}: {} commands{}",
            phase,
            ops,
            if patched { " (board patch)" } else { "" }
        );
        phase += 1;
    }
}

fn main() {
    println!("Supported Display Boards");
    println!("========================");

    for profile in [&M5STACK, &M5STICKC, &M5STICKC_PLUS, &TTGO_TWATCH] {
        print_profile(profile);
    }

    println!("\n\nProbe Plan");
    println!("==========");
    for (i, stage) in PROBE_SEQUENCE.iter().enumerate() {
        println!(
            "  {}. {}: CS {} DC {}, {} candidate(s){}",
            i + 1,
            stage.name,
            stage.cs.number(),
            stage.dc.number(),
            stage.candidates.len(),
            if stage.reset_pulse.is_some() {
                ", reset pulse"
            } else {
                ""
            }
        );
        for candidate in stage.candidates {
            println!("       -> {}", candidate.board);
        }
    }
}
