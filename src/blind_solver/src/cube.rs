//! The cube snapshot the solver reads from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facelet::{Color, Face, Sticker};

/// Read-only access to the colours of a cube. Anything that can answer
/// "what colour is on this sticker" can be solved.
pub trait StickerGrid {
    fn color(&self, sticker: Sticker) -> Color;

    fn center(&self, face: Face) -> Color {
        self.color(Sticker::center(face))
    }

    /// The face whose center carries `color`.
    fn face_of_color(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.center(face) == color)
    }

    /// Whether the sticker matches its own face's center.
    fn is_home(&self, sticker: Sticker) -> bool {
        self.color(sticker) == self.center(sticker.face)
    }
}

type FaceGrid = [[Color; 3]; 3];

/// A 6x3x3 grid of colour ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CubeRepr", into = "CubeRepr")]
pub struct Cube {
    faces: [FaceGrid; 6],
}

#[derive(Error, Debug)]
pub enum CubeParseError {
    #[error("Could not parse the cube document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Colour {color} on {sticker} is out of range, expected a value between 1 and 6")]
    ColorOutOfRange { sticker: Sticker, color: Color },
    #[error("The centers of {0} and {1} have the same colour")]
    DuplicateCenter(Face, Face),
    #[error("Colour {color} appears {count} times, expected 9")]
    WrongColorCount { color: Color, count: usize },
}

impl Cube {
    #[must_use]
    pub fn new(faces: [FaceGrid; 6]) -> Self {
        Cube { faces }
    }

    #[must_use]
    pub fn solved() -> Self {
        Cube {
            faces: Face::ALL.map(|face| [[face.solved_color(); 3]; 3]),
        }
    }

    pub fn set(&mut self, sticker: Sticker, color: Color) {
        self.faces[sticker.face as usize][sticker.row as usize][sticker.col as usize] = color;
    }

    /// Loads a snapshot written as one 3x3 array per face.
    ///
    /// ```toml
    /// F = [[1, 1, 1], [1, 1, 1], [1, 1, 1]]
    /// L = [[2, 2, 2], [2, 2, 2], [2, 2, 2]]
    /// # ...
    /// ```
    ///
    /// # Errors
    ///
    /// If the document is not valid TOML, or the colours cannot belong to a
    /// cube. See `CubeParseError`.
    pub fn from_toml(source: &str) -> Result<Self, CubeParseError> {
        let repr = toml::from_str::<CubeRepr>(source)?;
        Cube::try_from(repr)
    }

    /// Renders the snapshot in the format `from_toml` reads.
    ///
    /// # Errors
    ///
    /// If the TOML serializer rejects the document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&CubeRepr::from(self.clone()))
    }

    fn validate(&self) -> Result<(), CubeParseError> {
        for sticker in Sticker::all() {
            let color = self.color(sticker);
            if !(1..=6).contains(&color) {
                return Err(CubeParseError::ColorOutOfRange { sticker, color });
            }
        }

        for (i, &a) in Face::ALL.iter().enumerate() {
            for &b in &Face::ALL[i + 1..] {
                if self.center(a) == self.center(b) {
                    return Err(CubeParseError::DuplicateCenter(a, b));
                }
            }
        }

        for color in 1..=6 {
            let count = Sticker::all().filter(|&s| self.color(s) == color).count();
            if count != 9 {
                return Err(CubeParseError::WrongColorCount { color, count });
            }
        }

        Ok(())
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl StickerGrid for Cube {
    fn color(&self, sticker: Sticker) -> Color {
        self.faces[sticker.face as usize][sticker.row as usize][sticker.col as usize]
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
struct CubeRepr {
    F: FaceGrid,
    L: FaceGrid,
    U: FaceGrid,
    B: FaceGrid,
    R: FaceGrid,
    D: FaceGrid,
}

impl TryFrom<CubeRepr> for Cube {
    type Error = CubeParseError;

    fn try_from(value: CubeRepr) -> Result<Self, Self::Error> {
        let mut faces = [[[0; 3]; 3]; 6];
        faces[Face::F as usize] = value.F;
        faces[Face::L as usize] = value.L;
        faces[Face::U as usize] = value.U;
        faces[Face::B as usize] = value.B;
        faces[Face::R as usize] = value.R;
        faces[Face::D as usize] = value.D;

        let cube = Cube { faces };
        cube.validate()?;
        Ok(cube)
    }
}

impl From<Cube> for CubeRepr {
    fn from(value: Cube) -> Self {
        let faces = value.faces;
        CubeRepr {
            F: faces[Face::F as usize],
            L: faces[Face::L as usize],
            U: faces[Face::U as usize],
            B: faces[Face::B as usize],
            R: faces[Face::R as usize],
            D: faces[Face::D as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_is_home_everywhere() {
        let cube = Cube::solved();
        assert!(Sticker::all().all(|s| cube.is_home(s)));
        assert_eq!(cube.face_of_color(3), Some(Face::U));
        assert_eq!(cube.face_of_color(7), None);
    }

    #[test]
    fn toml_round_trip() {
        let mut cube = Cube::solved();
        cube.set(Sticker::new(Face::U, 2, 1), Face::F.solved_color());
        cube.set(Sticker::new(Face::F, 0, 1), Face::U.solved_color());

        let parsed = Cube::from_toml(&cube.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, cube);
    }

    #[test]
    fn rejects_duplicate_centers() {
        let mut cube = Cube::solved();
        cube.set(Sticker::center(Face::D), Face::F.solved_color());
        assert!(matches!(
            Cube::from_toml(&cube.to_toml().unwrap()),
            Err(CubeParseError::DuplicateCenter(Face::F, Face::D))
        ));
    }

    #[test]
    fn rejects_unbalanced_colors() {
        let mut cube = Cube::solved();
        cube.set(Sticker::new(Face::D, 0, 0), Face::F.solved_color());
        assert!(matches!(
            Cube::from_toml(&cube.to_toml().unwrap()),
            Err(CubeParseError::WrongColorCount { color: 1, count: 10 })
        ));
    }

    #[test]
    fn rejects_out_of_range_colors() {
        let source = Cube::solved().to_toml().unwrap().replacen('4', "9", 1);
        assert!(matches!(
            Cube::from_toml(&source),
            Err(CubeParseError::ColorOutOfRange { color: 9, .. })
        ));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            Cube::from_toml("F = [[1, 1]]"),
            Err(CubeParseError::Toml(_))
        ));
    }
}
