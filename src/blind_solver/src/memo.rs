//! Memorization: turning the permutation of an orbit into the ordered list
//! of letters to shoot to the buffer.
//!
//! Starting from whatever sits in the buffer, each step asks which letter
//! currently occupies the slot of the letter just named. A cycle ends either
//! when it reaches the buffer piece or when the piece that opened it has been
//! named a second time; the next cycle is then opened at the alphabetically
//! first letter still unsolved.

use std::{collections::BTreeSet, fmt};

use itertools::Itertools;
use log::trace;
use thiserror::Error;

use crate::{
    cube::StickerGrid,
    facelet::Sticker,
    lettering::{Label, LabelLookupError, Orbit, label_of_sticker},
};

/// A piece is named this many times across a cycle that doesn't involve the
/// buffer: once to open the cycle and once when it comes back around. For
/// corners this means a twisted corner costs two letters, not three.
const CYCLE_CLOSING_COUNT: usize = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    LabelLookup(#[from] LabelLookupError),
    #[error(
        "The {orbit} memo did not finish within {budget} steps, the cube cannot be in a legal state"
    )]
    InvalidCubeState { orbit: &'static str, budget: usize },
}

/// The letters of one orbit in the order they are shot. Index 0 names what
/// sits in the buffer (or, if the buffer is home, the first cycle opened, or
/// the buffer itself if there is nothing to solve); it drives the memo but
/// is not itself a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo<L> {
    labels: Vec<L>,
    /// The orbit had nothing to solve and the buffer's own letter fills in
    /// as the seed.
    placeholder: bool,
}

impl<L: Label> Memo<L> {
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[must_use]
    pub fn seed(&self) -> L {
        self.labels[0]
    }

    /// The letters that each cost a swap.
    #[must_use]
    pub fn targets(&self) -> &[L] {
        &self.labels[1..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true; a memo always holds its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether an odd number of letters was memorized. The buffer letter
    /// standing in for the seed of a solved orbit doesn't count.
    #[must_use]
    pub fn has_odd_length(&self) -> bool {
        !self.placeholder && self.labels.len() % 2 == 1
    }
}

impl<L: Label> fmt::Display for Memo<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.iter().join(" "))
    }
}

/// The letters that still need to be visited: every letter of a piece not
/// already solved, minus the buffer piece.
///
/// Each piece is checked once, from the first of its stickers met in face,
/// row, column order.
#[must_use]
pub fn unsolved_labels<O: Orbit>(cube: &impl StickerGrid) -> BTreeSet<O::Label> {
    let mut unsolved = O::Label::ALL.into_iter().collect::<BTreeSet<_>>();
    let mut checked = BTreeSet::<Sticker>::new();

    for sticker in Sticker::all() {
        let Some(label) = O::Label::at(sticker) else {
            continue;
        };
        if checked.contains(&sticker) {
            continue;
        }

        let piece = O::piece_of(label);
        checked.extend(piece.iter().map(|label| label.sticker()));

        if piece.iter().all(|label| cube.is_home(label.sticker())) {
            for label in piece {
                unsolved.remove(label);
            }
        }
    }

    for label in O::BUFFER {
        unsolved.remove(label);
    }

    unsolved
}

/// Where the next letter of the memo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor<L> {
    /// The slot of the last letter holds `L`, which continues the cycle.
    Following(L),
    /// The cycle is closed; open a new one.
    Seeking,
}

struct Memorizer<'a, O: Orbit, C: StickerGrid> {
    cube: &'a C,
    unsolved: BTreeSet<O::Label>,
    labels: Vec<O::Label>,
    placeholder: bool,
}

impl<'a, O: Orbit, C: StickerGrid> Memorizer<'a, O, C> {
    fn new(cube: &'a C) -> Self {
        Memorizer {
            cube,
            unsolved: unsolved_labels::<O>(cube),
            labels: Vec::new(),
            placeholder: false,
        }
    }

    fn remove_piece(&mut self, label: O::Label) {
        for label in O::piece_of(label) {
            self.unsolved.remove(label);
        }
    }

    fn read(&self, sticker: Sticker) -> Result<O::Label, LabelLookupError> {
        label_of_sticker::<O>(sticker, self.cube)
    }

    /// The first letter: whatever sits in the buffer. If the buffer is home
    /// the first unsolved letter opens a cycle instead, and if nothing is
    /// unsolved either the buffer's own letter stands in.
    fn seed(&mut self) -> Result<(), LabelLookupError> {
        let in_buffer = self.read(O::BUFFER[0].sticker())?;

        if O::is_buffer(in_buffer) {
            let seed = if let Some(&open) = self.unsolved.first() {
                open
            } else {
                self.placeholder = true;
                in_buffer
            };
            trace!("{} buffer is home, seeding with {seed}", O::NAME);
            self.labels.push(seed);
        } else {
            self.labels.push(in_buffer);
            self.remove_piece(in_buffer);
        }

        Ok(())
    }

    fn cursor(&self, last: O::Label) -> Result<Cursor<O::Label>, LabelLookupError> {
        let piece = O::piece_of(last);
        let named = self.labels.iter().filter(|&&label| piece.contains(&label)).count();
        if named >= CYCLE_CLOSING_COUNT {
            return Ok(Cursor::Seeking);
        }

        let next = self.read(last.sticker())?;
        if O::is_buffer(next) {
            return Ok(Cursor::Seeking);
        }

        Ok(Cursor::Following(next))
    }

    fn run(mut self) -> Result<Memo<O::Label>, SolveError> {
        // Every step either names a new piece or opens a cycle, and each
        // cycle opened is closed by naming a new piece, so a legal cube needs
        // at most two steps per unsolved piece.
        let budget = self.unsolved.len();

        self.seed()?;

        let mut steps = 0;
        while let Some(&open) = self.unsolved.first() {
            steps += 1;
            if steps > budget {
                return Err(SolveError::InvalidCubeState {
                    orbit: O::NAME,
                    budget,
                });
            }

            let last = *self.labels.last().unwrap_or(&open);
            match self.cursor(last)? {
                Cursor::Following(next) => {
                    self.labels.push(next);
                    self.remove_piece(next);
                }
                Cursor::Seeking => {
                    trace!("{} cycle closed after {last}, opening at {open}", O::NAME);
                    self.labels.push(open);
                }
            }
        }

        Ok(Memo {
            labels: self.labels,
            placeholder: self.placeholder,
        })
    }
}

/// Builds the memo of one orbit of `cube`.
///
/// # Errors
///
/// If a sticker of the cube can't be read as a letter, or if the cycles
/// never close, which only happens for cubes that can't be reached by
/// turning.
pub fn memorize<O: Orbit>(cube: &impl StickerGrid) -> Result<Memo<O::Label>, SolveError> {
    Memorizer::<O, _>::new(cube).run()
}
