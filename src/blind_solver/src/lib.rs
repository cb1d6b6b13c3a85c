//! Blindfolded solving of the 3x3x3 cube with the Old Pochman method.
//!
//! Edges and corners are each solved by repeatedly swapping a fixed buffer
//! piece with the piece whose slot its current occupant belongs in. The
//! order of those swaps (the memo) is read off the cube's colours, then
//! turned into moves from a table of canned algorithms, with a parity fix
//! between the two phases when an odd number of edge swaps was made.

pub mod algs;
pub mod cube;
pub mod facelet;
pub mod lettering;
pub mod memo;
pub mod moves;
pub mod solver;

pub use cube::{Cube, CubeParseError, StickerGrid};
pub use facelet::{Color, Face, Sticker};
pub use lettering::{
    CornerLabel, Corners, EdgeLabel, Edges, Label, LabelLookupError, Orbit, coords_of_label,
    label_of_sticker,
};
pub use memo::{Memo, SolveError, memorize};
pub use moves::{Move, MoveParseError, MoveSequence};
pub use solver::{Solution, solve, solve_to_string};
