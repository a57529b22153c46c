//! `RiverCrossing`: farmer, cat, duck and grain crossing a river.
//!
//! The farmer rows across alone or with one passenger from their own bank.
//! Left alone (without the farmer), the cat eats the duck and the duck eats
//! the grain; such states are never generated.
//!
//! Start: everyone on the near bank. Goal: everyone on the far bank.

use std::fmt;

use serde::{Deserialize, Serialize};
use statecraft_search::scorer::first_max_by_key;
use statecraft_search::{FrontierEntry, FrontierScorer, SearchWorld};

use crate::contract::GoalStateWorld;

/// One side of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
    Near,
    Far,
}

impl Bank {
    /// The opposite bank.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Near => Self::Far,
            Self::Far => Self::Near,
        }
    }

    /// `0` for the near bank, `1` for the far bank.
    #[must_use]
    pub fn as_bit(self) -> u8 {
        match self {
            Self::Near => 0,
            Self::Far => 1,
        }
    }
}

/// Which bank each of the four actors is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossingState {
    pub farmer: Bank,
    pub cat: Bank,
    pub duck: Bank,
    pub grain: Bank,
}

impl CrossingState {
    /// Everyone on `bank`.
    #[must_use]
    pub const fn all_on(bank: Bank) -> Self {
        Self {
            farmer: bank,
            cat: bank,
            duck: bank,
            grain: bank,
        }
    }

    /// Build from `(farmer, cat, duck, grain)` bits; any non-zero bit is the
    /// far bank.
    #[must_use]
    pub fn from_bits(farmer: u8, cat: u8, duck: u8, grain: u8) -> Self {
        let bank = |bit: u8| if bit == 0 { Bank::Near } else { Bank::Far };
        Self {
            farmer: bank(farmer),
            cat: bank(cat),
            duck: bank(duck),
            grain: bank(grain),
        }
    }

    /// `(farmer, cat, duck, grain)` as bits.
    #[must_use]
    pub fn bits(&self) -> [u8; 4] {
        [
            self.farmer.as_bit(),
            self.cat.as_bit(),
            self.duck.as_bit(),
            self.grain.as_bit(),
        ]
    }

    /// How many actors are on the far bank (0..=4).
    #[must_use]
    pub fn far_count(&self) -> u8 {
        self.bits().iter().sum()
    }

    /// No predator is left alone with its prey.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        let cat_eats_duck = self.cat == self.duck && self.farmer != self.cat;
        let duck_eats_grain = self.duck == self.grain && self.farmer != self.duck;
        !(cat_eats_duck || duck_eats_grain)
    }
}

impl fmt::Display for CrossingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.bits();
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

/// Who rides with the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Passenger {
    Cat,
    Duck,
    Grain,
}

/// The river-crossing world. Takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiverCrossing;

/// World identifier for [`RiverCrossing`].
pub const RIVER_CROSSING_ID: &str = "river_crossing";

impl RiverCrossing {
    fn cross(state: &CrossingState, passenger: Option<Passenger>) -> Option<CrossingState> {
        let mut next = *state;
        next.farmer = state.farmer.other();
        match passenger {
            None => {}
            Some(Passenger::Cat) if state.cat == state.farmer => next.cat = state.cat.other(),
            Some(Passenger::Duck) if state.duck == state.farmer => next.duck = state.duck.other(),
            Some(Passenger::Grain) if state.grain == state.farmer => {
                next.grain = state.grain.other();
            }
            Some(_) => return None,
        }
        next.is_safe().then_some(next)
    }
}

impl SearchWorld for RiverCrossing {
    type State = CrossingState;

    fn world_id(&self) -> &str {
        RIVER_CROSSING_ID
    }

    fn start_state(&self) -> CrossingState {
        CrossingState::all_on(Bank::Near)
    }

    fn is_goal(&self, state: &CrossingState) -> bool {
        *state == CrossingState::all_on(Bank::Far)
    }

    /// Farmer alone, then with the cat, the duck, the grain.
    fn expand(&self, state: &CrossingState) -> Vec<CrossingState> {
        [
            None,
            Some(Passenger::Cat),
            Some(Passenger::Duck),
            Some(Passenger::Grain),
        ]
        .into_iter()
        .filter_map(|passenger| Self::cross(state, passenger))
        .collect()
    }
}

impl GoalStateWorld for RiverCrossing {
    fn goal_state(&self) -> CrossingState {
        CrossingState::all_on(Bank::Far)
    }
}

/// Pick the entry with the most actors on the far bank; the first such entry
/// wins ties.
impl FrontierScorer<CrossingState> for RiverCrossing {
    fn best_candidate(&self, frontier: &[FrontierEntry<CrossingState>]) -> Option<usize> {
        first_max_by_key(frontier, CrossingState::far_count)
    }
}
