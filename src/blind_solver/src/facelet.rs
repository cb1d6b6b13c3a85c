//! Physical sticker coordinates on a 3x3x3 cube.

use std::fmt;

/// A colour id in `1..=6`.
pub type Color = u8;

/// The six faces, in the order their grids are stored.
///
/// In the reference colouring F is green, L orange, U white, B blue, R red
/// and D yellow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    F,
    L,
    U,
    B,
    R,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [F, L, U, B, R, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The colour this face's center carries in the reference colouring.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        self as Color + 1
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A (face, row, column) coordinate. Rows and columns are in `0..3`; the
/// center of a face is `(1, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sticker {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl Sticker {
    #[must_use]
    pub const fn new(face: Face, row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Sticker { face, row, col }
    }

    #[must_use]
    pub const fn center(face: Face) -> Self {
        Sticker::new(face, 1, 1)
    }

    #[must_use]
    pub fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// Every sticker of the cube in face, row, column order.
    pub fn all() -> impl Iterator<Item = Sticker> {
        Face::ALL.into_iter().flat_map(|face| {
            (0..3).flat_map(move |row| (0..3).map(move |col| Sticker::new(face, row, col)))
        })
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.face, self.row, self.col)
    }
}
