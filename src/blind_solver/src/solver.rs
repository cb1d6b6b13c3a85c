//! Assembling the memo into moves.

use std::fmt;

use log::debug;

use crate::{
    algs::{SwapTable, parity_fix},
    cube::StickerGrid,
    lettering::{CornerLabel, Corners, EdgeLabel, Edges},
    memo::{Memo, SolveError, memorize},
    moves::MoveSequence,
};

/// A full solve: both memos, whether parity is fixed between them, and the
/// resulting moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub edge_memo: Memo<EdgeLabel>,
    pub corner_memo: Memo<CornerLabel>,
    pub parity: bool,
    pub moves: MoveSequence,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves)
    }
}

fn push_swaps<O: SwapTable>(moves: &mut MoveSequence, memo: &Memo<O::Label>) {
    for &label in memo.targets() {
        // Targets never include the buffer, so every one has a swap.
        if let Some(swap) = O::swap(label) {
            moves.extend_from_slice(swap);
        }
    }
}

/// Concatenates the swap of every edge target, the parity fix if needed,
/// then the swap of every corner target.
#[must_use]
pub fn assemble(
    edge_memo: &Memo<EdgeLabel>,
    parity: bool,
    corner_memo: &Memo<CornerLabel>,
) -> MoveSequence {
    let mut moves = MoveSequence::default();

    push_swaps::<Edges>(&mut moves, edge_memo);
    if parity {
        moves.extend_from_slice(parity_fix());
    }
    push_swaps::<Corners>(&mut moves, corner_memo);

    moves
}

/// Solves `cube` with Old Pochman for edges and corners.
///
/// # Errors
///
/// If the colours of `cube` can't be read as pieces, or the cube is in a
/// state no sequence of turns reaches. See `SolveError`.
pub fn solve(cube: &impl StickerGrid) -> Result<Solution, SolveError> {
    let edge_memo = memorize::<Edges>(cube)?;
    debug!("edge memo: {edge_memo}");

    let parity = edge_memo.has_odd_length();
    debug!("parity: {parity}");

    let corner_memo = memorize::<Corners>(cube)?;
    debug!("corner memo: {corner_memo}");

    let moves = assemble(&edge_memo, parity, &corner_memo);

    Ok(Solution {
        edge_memo,
        corner_memo,
        parity,
        moves,
    })
}

/// The moves solving `cube`, in standard notation. Empty if it is solved.
///
/// # Errors
///
/// See `solve`.
pub fn solve_to_string(cube: &impl StickerGrid) -> Result<String, SolveError> {
    Ok(solve(cube)?.to_string())
}
