#![no_main]

use arbitrary::Arbitrary;
use fastlane::game::{assert_invariants, check_invariants};
use fastlane::{LocationId, Point, Simulation, StartingStats};
use libfuzzer_sys::fuzz_target;

/// One input event from the frame loop.
#[derive(Arbitrary, Debug)]
enum Event {
    /// A frame passed.
    Tick,
    /// Several frames passed (capped to keep runs short).
    Ticks(u8),
    /// The pointer moved.
    Pointer { x: i32, y: i32 },
    /// The player clicked and then picked an action from the menu.
    ClickAction { x: i32, y: i32, index: u8 },
    /// An action was invoked directly by id.
    Action { location: u8, index: u8 },
}

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    money: u16,
    happiness: u8,
    education: u8,
    health: u8,
    energy: u8,
    events: Vec<Event>,
}

fuzz_target!(|input: SessionInput| {
    let start = StartingStats {
        money: i64::from(input.money),
        happiness: f64::from(input.happiness),
        education: f64::from(input.education),
        health: f64::from(input.health),
        energy: f64::from(input.energy) / 10.0,
    };

    let mut sim = Simulation::new();
    sim.start_new_game("Fuzz", start);

    for event in input.events.iter().take(1000) {
        match *event {
            Event::Tick => sim.tick(),
            Event::Ticks(n) => sim.tick_n(u64::from(n)),
            Event::Pointer { x, y } => {
                sim.pointer_moved(Point::new(x, y));
            }
            Event::ClickAction { x, y, index } => {
                if let Some(location) = sim.click(Point::new(x, y)) {
                    let _ = sim.perform_action(location, usize::from(index % 3));
                }
            }
            Event::Action { location, index } => {
                // Out-of-range ids must error, never panic.
                let _ = sim.perform_action(LocationId(usize::from(location)), usize::from(index));
            }
        }

        if let Some(player) = sim.player() {
            assert!(check_invariants(player).is_empty());
            assert_invariants(player);
        }
    }
});
