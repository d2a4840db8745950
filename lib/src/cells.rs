//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// The discriminants are the values stored in the grid buffers,
/// so a state can be summed directly as a neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum State {
    /// The Dead state.
    Dead = 0,
    /// The Alive state.
    Alive = 1,
}

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    /// Decodes a state stored in a grid buffer.
    ///
    /// Any non-zero value is alive.
    #[inline]
    pub(crate) fn from_u8(value: u8) -> Self {
        if value == 0 {
            State::Dead
        } else {
            State::Alive
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::Dead
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);
