//! Completion detector — finish-line crossings and rank assignment.

use duckrace_core::constants::TRACK_LENGTH;
use duckrace_core::events::RaceEvent;
use duckrace_core::roster::Duck;

/// Finalize every duck that crossed the line this tick: pin progress to
/// exactly the track length and assign the next rank in roster order
/// (ties within a tick break by evaluation order).
///
/// Returns the id of the winner if rank 1 was assigned this tick.
pub fn run(ducks: &mut [Duck], elapsed_ms: f64, events: &mut Vec<RaceEvent>) -> Option<u32> {
    let mut finished = ducks.iter().filter(|d| d.is_finished()).count() as u32;
    let mut new_winner = None;

    for duck in ducks.iter_mut() {
        if duck.is_finished() || duck.progress < TRACK_LENGTH {
            continue;
        }

        finished += 1;
        duck.progress = TRACK_LENGTH;
        duck.rank = Some(finished);
        events.push(RaceEvent::DuckFinished {
            id: duck.id,
            rank: finished,
            elapsed_ms,
        });

        if finished == 1 {
            new_winner = Some(duck.id);
            events.push(RaceEvent::WinnerDeclared {
                id: duck.id,
                elapsed_ms,
            });
        }
    }

    new_winner
}
