//! Standard face-turn notation.
//!
//! Moves are only ever concatenated and inverted here; nothing in this
//! crate applies them to a cube.

use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

/// One of the six outer layers. Slice, wide and rotation moves never show
/// up in the canned algorithms.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum BaseMove {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for BaseMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(BaseMove::U),
            "D" => Ok(BaseMove::D),
            "L" => Ok(BaseMove::L),
            "R" => Ok(BaseMove::R),
            "F" => Ok(BaseMove::F),
            "B" => Ok(BaseMove::B),
            _ => Err(MoveParseError::UnknownFace(s.to_owned())),
        }
    }
}

/// Quarter turn clockwise (no suffix), anticlockwise (`'`) or half turn
/// (`2`), looking at the layer from outside the cube.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Direction::Normal => "",
            Direction::Prime => "'",
            Direction::Double => "2",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Unknown face in move: {0:?}")]
    UnknownFace(String),
    #[error("Empty move")]
    Empty,
}

/// A single turn, written `R`, `R'` or `R2`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Move {
    pub basemove: BaseMove,
    pub dir: Direction,
}

impl Move {
    #[must_use]
    pub fn new(basemove: BaseMove, dir: Direction) -> Self {
        Self { basemove, dir }
    }

    /// The same layer turned back.
    #[must_use]
    pub fn invert(&self) -> Self {
        Move::new(self.basemove, self.dir.inverse())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.basemove, self.dir)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let dir = if let Some(rest) = s.strip_suffix('\'') {
            s = rest;
            Direction::Prime
        } else if let Some(rest) = s.strip_suffix('2') {
            s = rest;
            Direction::Double
        } else {
            Direction::Normal
        };

        Ok(Move::new(s.parse()?, dir))
    }
}

/// An ordered list of moves, used for canned algorithms and solutions.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence(Vec<Move>);

impl From<Vec<Move>> for MoveSequence {
    fn from(vec: Vec<Move>) -> Self {
        Self(vec)
    }
}

impl MoveSequence {
    /// The sequence that undoes this one.
    #[must_use]
    pub fn invert(&self) -> Self {
        MoveSequence(self.iter().rev().map(Move::invert).collect())
    }

    /// `setup`, then `self`, then `setup` undone.
    #[must_use]
    pub fn conjugate(&self, setup: &MoveSequence) -> Self {
        let mut out = setup.clone();
        out.extend_from_slice(self);
        out.extend(setup.invert().0);
        out
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSequence)
    }
}
