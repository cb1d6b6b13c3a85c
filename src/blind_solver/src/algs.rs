//! Canned algorithms.
//!
//! Every non-buffer letter has a setup that brings its slot to the spot the
//! full swap exchanges with the buffer, without disturbing the buffer. The
//! swap for a letter is the setup, the full swap, then the setup undone.

use std::sync::LazyLock;

use crate::{
    lettering::{CornerLabel, Corners, EdgeLabel, Edges, Orbit},
    moves::MoveSequence,
};

/// Exchanges the buffer edge with the U-L edge (the T permutation). `D` is
/// that slot, so its setup is empty.
pub const EDGE_SWAP: &str = "R U R' U' R' F R2 U' R' U' R U R' F'";

/// The full corner swap (the Y permutation). `v` is the slot it exchanges
/// with the buffer, so its setup is empty.
pub const CORNER_SWAP: &str = "R U' R' U' R U R' F' R U R' U' R' F R";

/// Fixes the edge and corner pair left swapped by an odd number of edge
/// swaps.
pub const PARITY_FIX: &str = "R U R' F' R U2 R' U2 R' F R U R U2 R' U'";

const EDGE_SETUPS: [Option<&str>; 24] = [
    Some("R2 U' R2"),      // A
    None,                  // B
    Some("R2 U R2"),       // C
    Some(""),              // D
    Some("L U' F U"),      // E
    Some("U' F U"),        // F
    Some("L' U' F U"),     // G
    Some("U B' U'"),       // H
    Some("R F' L' R'"),    // I
    Some("U2 R U2"),       // J
    Some("R F L' R'"),     // K
    Some("L'"),            // L
    None,                  // M
    Some("U B U'"),        // N
    Some("D' R F L' R'"),  // O
    Some("U' F' U"),       // P
    Some("R' B L R"),      // Q
    Some("L"),             // R
    Some("R' B' L R"),     // S
    Some("U2 R' U2"),      // T
    Some("D' L2"),         // U
    Some("D2 L2"),         // V
    Some("D L2"),          // W
    Some("L2"),            // X
];

const CORNER_SETUPS: [Option<&str>; 24] = [
    None,                  // a
    Some("R2"),            // b
    Some("R2 D'"),         // c
    Some("F2"),            // d
    None,                  // e
    Some("F' D"),          // f
    Some("D R' D'"),       // g
    Some("D' R"),          // h
    Some("F R'"),          // i
    Some("R'"),            // j
    Some("R' D' R"),       // k
    Some("D2 R"),          // l
    Some("F"),             // m
    Some("R' F"),          // n
    Some("D' R' D"),       // o
    Some("F D"),           // p
    Some("R D'"),          // q
    None,                  // r
    Some("D2 R' D'"),      // s
    Some("R"),             // t
    Some("D"),             // u
    Some(""),              // v
    Some("D'"),            // w
    Some("D2"),            // x
];

fn parse(alg: &str) -> MoveSequence {
    alg.parse()
        .unwrap_or_else(|e| panic!("canned algorithm {alg:?} is malformed: {e}"))
}

fn swaps(swap: &str, setups: [Option<&str>; 24]) -> [Option<MoveSequence>; 24] {
    let swap = parse(swap);
    setups.map(|setup| setup.map(|setup| swap.conjugate(&parse(setup))))
}

static EDGE_SWAPS: LazyLock<[Option<MoveSequence>; 24]> =
    LazyLock::new(|| swaps(EDGE_SWAP, EDGE_SETUPS));

static CORNER_SWAPS: LazyLock<[Option<MoveSequence>; 24]> =
    LazyLock::new(|| swaps(CORNER_SWAP, CORNER_SETUPS));

static PARITY: LazyLock<MoveSequence> = LazyLock::new(|| parse(PARITY_FIX));

/// An orbit with a canned swap for each of its non-buffer letters.
pub trait SwapTable: Orbit {
    /// The moves exchanging the buffer with the piece in `label`'s slot,
    /// or `None` for the buffer's own letters.
    fn swap(label: Self::Label) -> Option<&'static MoveSequence>;
}

impl SwapTable for Edges {
    fn swap(label: EdgeLabel) -> Option<&'static MoveSequence> {
        edge_swap(label)
    }
}

impl SwapTable for Corners {
    fn swap(label: CornerLabel) -> Option<&'static MoveSequence> {
        corner_swap(label)
    }
}

#[must_use]
pub fn edge_swap(label: EdgeLabel) -> Option<&'static MoveSequence> {
    EDGE_SWAPS[label as usize].as_ref()
}

#[must_use]
pub fn corner_swap(label: CornerLabel) -> Option<&'static MoveSequence> {
    CORNER_SWAPS[label as usize].as_ref()
}

#[must_use]
pub fn parity_fix() -> &'static MoveSequence {
    &PARITY
}
