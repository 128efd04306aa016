//! Console text for the game.

use std::collections::BTreeSet;
use wumpus_kb::{hazard_label, Coord, Hints};
use wumpus_rules::{GameState, Outcome, Percept};

/// Shown when the game asks for the next command.
pub(crate) const PROMPT: &str = "What would you like to do? Please enter command [R,L,F,S]:";

pub(crate) const FAREWELL: &str = "Thanks for playing Wumpus World!!!";

/// Rooms are shown 1-based.
fn room(coord: &Coord) -> String {
    let axes: Vec<String> = coord.0.iter().map(|axis| (axis + 1).to_string()).collect();
    axes.join(",")
}

pub(crate) fn location(state: &GameState) -> String {
    format!(
        "You are in room ({},{}) of the cave. Facing {}.",
        state.location.row + 1,
        state.location.col + 1,
        state.orientation.name()
    )
}

/// One line per percept. A dead Wumpus no longer smells.
pub(crate) fn percepts(percepts: &BTreeSet<Percept>, wumpus_dead: bool) -> Vec<&'static str> {
    percepts
        .iter()
        .filter_map(|percept| match percept {
            Percept::Stench if wumpus_dead => None,
            Percept::Stench => Some("It's stinky in here!"),
            Percept::Breeze => Some("You feel a breeze in this room."),
            Percept::Glitter => Some("Something glitters at your feet!"),
        })
        .collect()
}

pub(crate) fn hints(hints: &Hints, wumpus_dead: bool) -> Vec<String> {
    let certain = hints.certain.iter().flat_map(|(percept, coords)| {
        coords.iter().map(move |coord| {
            format!(
                "HINT: There is a {} at {}",
                hazard_label(*percept, wumpus_dead),
                room(coord)
            )
        })
    });
    let maybe = hints.maybe.iter().flat_map(|(percept, coords)| {
        coords.iter().map(move |coord| {
            format!(
                "HINT: There may be a {} at {}",
                hazard_label(*percept, wumpus_dead),
                room(coord)
            )
        })
    });
    certain.chain(maybe).collect()
}

/// Narration for a transition, if it deserves any.
pub(crate) fn outcome(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Continue | Outcome::GameOver => None,
        Outcome::Bump => Some("BUMP!!! You hit a wall!"),
        Outcome::FellInPit => Some("You have fallen into the pit!!!"),
        Outcome::Eaten => Some("You have been eaten by the Wumpus!!!"),
        Outcome::FoundDeadWumpus => {
            Some("A dead wumpus lays at your feet. You hold your bow triumphantly aloft.")
        }
        Outcome::FoundGold => Some("You have found the gold and won the game!!!"),
        Outcome::ArrowHit => Some("You hear a loud scream!!! The Wumpus is dead!!!"),
        Outcome::ArrowMiss => Some("Your arrow did not hit the Wumpus!!!"),
        Outcome::ArrowAlreadyUsed => Some("You have already used your only arrow!!!"),
    }
}
