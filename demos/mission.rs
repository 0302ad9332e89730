//! Scripted mission demo: prints the compound map, the agent's safe moves
//! and the planned route.
//!
//! Run: cargo run --bin mission

use std::io::{self, Write};

use covert_demos::{Mission, ROUTE_GLYPH, direction_report, path_report};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Terminal colour for a map glyph.
fn glyph_color(glyph: char) -> Color {
    match glyph {
        'g' => Color::Red,
        'f' => Color::DarkYellow,
        's' => Color::Magenta,
        'c' => Color::Cyan,
        'A' | 'O' => Color::White,
        g if g == ROUTE_GLYPH => Color::Green,
        _ => Color::DarkGrey,
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mission = Mission::compound()?;
    let route = mission.route();
    let mut stdout = io::stdout();

    for line in mission.overlay(route.as_ref()).lines() {
        for glyph in line.chars() {
            queue!(stdout, SetForegroundColor(glyph_color(glyph)), Print(glyph))?;
        }
        queue!(stdout, ResetColor, Print('\n'))?;
    }
    stdout.flush()?;

    println!();
    println!("{}", direction_report(&mission.field, mission.agent));
    println!(
        "{}",
        path_report(
            &mission.field,
            mission.search_config(),
            mission.agent,
            mission.objective,
        )
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
