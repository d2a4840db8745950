//! Life-like cellular automaton rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{cells::State, error::Error};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A totalistic Life-like rule.
///
/// The next state of a cell only depends on its own state and the
/// number of living cells among its 8 neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    /// `birth[n]`: whether a dead cell with `n` living neighbors is born.
    birth: [bool; 9],
    /// `survival[n]`: whether a living cell with `n` living neighbors survives.
    survival: [bool; 9],
}

impl Rule {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        Rule { birth, survival }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub fn conway() -> Self {
        Rule::new(&[3], &[2, 3])
    }

    /// The state of a cell in the next generation.
    #[inline]
    pub fn transition(&self, state: State, neighbors: u8) -> State {
        let n = neighbors as usize;
        State::from(match state {
            State::Alive => self.survival[n],
            State::Dead => self.birth[n],
        })
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::conway()
    }
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Rule = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        Ok(rule)
    }
}

/// Displays the rule in the `B/S` notation, e.g. `B3/S23`.
impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
