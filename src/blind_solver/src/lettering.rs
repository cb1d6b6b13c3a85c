//! The lettering scheme: one letter per solved-state sticker slot of every
//! edge (uppercase) and corner (lowercase), and the lookups between letters,
//! coordinates and the colours currently on a cube.
//!
//! ```text
//!            U                 lettering per face, row by row
//!          a A b
//!          D   B               F: i I j / L . J / l K k
//!          d C c               L: e E f / H . F / h G g
//!   L      F      R      B     U: a A b / D . B / d C c
//! e E f  i I j  m M n  q Q r   B: q Q r / T . R / t S s
//! H   F  L   J  P   N  T   R   R: m M n / P . N / p O o
//! h G g  l K k  p O o  t S s   D: u U v / X . V / x W w
//!          u U v
//!          X   V
//!          x W w
//!            D
//! ```

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use thiserror::Error;

use crate::{
    cube::StickerGrid,
    facelet::{Color, Face, Sticker},
};

/// A letter naming one solved-state sticker slot.
pub trait Label: Copy + Eq + Ord + Hash + Debug + Display + 'static {
    /// Every letter, in alphabetical order.
    const ALL: [Self; 24];

    /// Where this letter lives on a solved cube.
    fn sticker(self) -> Sticker;

    /// The letter naming `sticker`, if it is a slot of this kind.
    fn at(sticker: Sticker) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.sticker() == sticker)
    }
}

/// A set of pieces that only ever trade places among themselves: the
/// edges or the corners.
pub trait Orbit {
    type Label: Label;

    const NAME: &'static str;

    /// Stickers per piece.
    const PIECE_SIZE: usize;

    /// The letters of every piece, each ordered by the face index of its
    /// stickers' home faces.
    const PIECES: &'static [&'static [Self::Label]];

    /// The letters of the buffer piece. The first is the slot that is read
    /// to find what currently sits in the buffer.
    const BUFFER: &'static [Self::Label];

    fn is_buffer(label: Self::Label) -> bool {
        Self::BUFFER.contains(&label)
    }

    /// All letters of the piece `label` belongs to, `label` included.
    fn piece_of(label: Self::Label) -> &'static [Self::Label] {
        Self::PIECES
            .iter()
            .copied()
            .find(|piece| piece.contains(&label))
            .unwrap_or(&[])
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelLookupError {
    #[error("{sticker} is not a sticker of any {orbit} piece")]
    NotOnPiece {
        orbit: &'static str,
        sticker: Sticker,
    },
    #[error("Colour {color} on {sticker} does not match any center")]
    UnknownColor { sticker: Sticker, color: Color },
    #[error("The piece on {sticker} has colours of faces {faces:?}, which no piece carries")]
    UnknownPiece { sticker: Sticker, faces: Vec<Face> },
}

macro_rules! lettering {
    ($(#[$meta:meta])* $name:ident, $case:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $name {
            A, B, C, D, E, F, G, H, I, J, K, L,
            M, N, O, P, Q, R, S, T, U, V, W, X,
        }

        impl $name {
            #[must_use]
            pub fn letter(self) -> char {
                char::from(b'A' + self as u8).$case()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.letter())
            }
        }

        impl TryFrom<char> for $name {
            type Error = char;

            fn try_from(value: char) -> Result<Self, Self::Error> {
                <$name as Label>::ALL
                    .into_iter()
                    .find(|label| label.letter() == value)
                    .ok_or(value)
            }
        }
    };
}

lettering!(
    /// Edge letters, displayed uppercase.
    EdgeLabel,
    to_ascii_uppercase
);

lettering!(
    /// Corner letters, displayed lowercase.
    CornerLabel,
    to_ascii_lowercase
);

const fn s(face: Face, row: u8, col: u8) -> Sticker {
    Sticker::new(face, row, col)
}

// Every face is lettered clockwise from its top-left slot, four letters per
// face in U, L, F, R, B, D order. Edges start at the top middle.
const EDGE_STICKERS: [Sticker; 24] = {
    use Face::*;
    [
        s(U, 0, 1), s(U, 1, 2), s(U, 2, 1), s(U, 1, 0),
        s(L, 0, 1), s(L, 1, 2), s(L, 2, 1), s(L, 1, 0),
        s(F, 0, 1), s(F, 1, 2), s(F, 2, 1), s(F, 1, 0),
        s(R, 0, 1), s(R, 1, 2), s(R, 2, 1), s(R, 1, 0),
        s(B, 0, 1), s(B, 1, 2), s(B, 2, 1), s(B, 1, 0),
        s(D, 0, 1), s(D, 1, 2), s(D, 2, 1), s(D, 1, 0),
    ]
};

const CORNER_STICKERS: [Sticker; 24] = {
    use Face::*;
    [
        s(U, 0, 0), s(U, 0, 2), s(U, 2, 2), s(U, 2, 0),
        s(L, 0, 0), s(L, 0, 2), s(L, 2, 2), s(L, 2, 0),
        s(F, 0, 0), s(F, 0, 2), s(F, 2, 2), s(F, 2, 0),
        s(R, 0, 0), s(R, 0, 2), s(R, 2, 2), s(R, 2, 0),
        s(B, 0, 0), s(B, 0, 2), s(B, 2, 2), s(B, 2, 0),
        s(D, 0, 0), s(D, 0, 2), s(D, 2, 2), s(D, 2, 0),
    ]
};

impl Label for EdgeLabel {
    const ALL: [Self; 24] = {
        use EdgeLabel::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X,
        ]
    };

    fn sticker(self) -> Sticker {
        EDGE_STICKERS[self as usize]
    }
}

impl Label for CornerLabel {
    const ALL: [Self; 24] = {
        use CornerLabel::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X,
        ]
    };

    fn sticker(self) -> Sticker {
        CORNER_STICKERS[self as usize]
    }
}

/// The twelve edges. The buffer is the U-R edge.
pub struct Edges;

impl Orbit for Edges {
    type Label = EdgeLabel;

    const NAME: &'static str = "edge";
    const PIECE_SIZE: usize = 2;
    const PIECES: &'static [&'static [EdgeLabel]] = {
        use EdgeLabel::*;
        &[
            &[L, F],
            &[I, C],
            &[J, P],
            &[K, U],
            &[E, D],
            &[H, R],
            &[G, X],
            &[A, Q],
            &[B, M],
            &[T, N],
            &[S, W],
            &[O, V],
        ]
    };
    const BUFFER: &'static [EdgeLabel] = &[EdgeLabel::B, EdgeLabel::M];
}

/// The eight corners. The buffer is the U-L-B corner.
pub struct Corners;

impl Orbit for Corners {
    type Label = CornerLabel;

    const NAME: &'static str = "corner";
    const PIECE_SIZE: usize = 3;
    const PIECES: &'static [&'static [CornerLabel]] = {
        use CornerLabel::*;
        &[
            &[I, F, D],
            &[L, G, U],
            &[J, C, M],
            &[K, P, V],
            &[E, A, R],
            &[H, S, X],
            &[B, Q, N],
            &[T, O, W],
        ]
    };
    const BUFFER: &'static [CornerLabel] = &[CornerLabel::A, CornerLabel::E, CornerLabel::R];
}

/// The solved-state coordinates of `label`.
#[must_use]
pub fn coords_of_label<L: Label>(label: L) -> Sticker {
    label.sticker()
}

/// The letter of the piece sticker currently sitting on `sticker`.
///
/// The colours of every sticker of the piece at that position are mapped to
/// faces through the cube's centers. The piece whose home faces match is
/// the one occupying the slot, and the letter returned is the one whose
/// home face is the colour on `sticker` itself, so every orientation of a
/// piece maps to one letter no matter which of its stickers is asked about.
///
/// # Errors
///
/// If `sticker` is not a slot of this orbit, or its colours don't form a
/// piece of the cube.
pub fn label_of_sticker<O: Orbit>(
    sticker: Sticker,
    cube: &impl StickerGrid,
) -> Result<O::Label, LabelLookupError> {
    let slot = O::Label::at(sticker)
        .map(O::piece_of)
        .filter(|piece| !piece.is_empty())
        .ok_or(LabelLookupError::NotOnPiece {
            orbit: O::NAME,
            sticker,
        })?;

    let face_at = |sticker: Sticker| {
        let color = cube.color(sticker);
        cube.face_of_color(color)
            .ok_or(LabelLookupError::UnknownColor { sticker, color })
    };

    let own_face = face_at(sticker)?;
    let mut faces = slot
        .iter()
        .map(|label| face_at(label.sticker()))
        .collect::<Result<Vec<_>, _>>()?;
    faces.sort_unstable();

    O::PIECES
        .iter()
        .find(|piece| piece.iter().map(|label| label.sticker().face).eq(faces.iter().copied()))
        .and_then(|piece| piece.iter().copied().find(|label| label.sticker().face == own_face))
        .ok_or(LabelLookupError::UnknownPiece { sticker, faces })
}
