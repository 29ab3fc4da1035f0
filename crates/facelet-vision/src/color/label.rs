//! The six sticker labels of a standard cube.

use std::fmt;

/// A sticker color, named by the face whose center carries it.
///
/// The set is closed: classification always commits to one of these six.
/// The single-character code is the facelet alphabet understood by cube
/// solvers (`U`, `R`, `F`, `D`, `L`, `B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLabel {
    /// White
    Up,
    /// Red
    Right,
    /// Green
    Front,
    /// Yellow
    Down,
    /// Orange
    Left,
    /// Blue
    Back,
}

/// Error returned when a character is not a facelet code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid facelet code {0:?}, expected one of U, R, F, D, L, B")]
pub struct InvalidFaceletCode(pub char);

impl ColorLabel {
    /// Face order of a cube definition string.
    pub const FACE_ORDER: [ColorLabel; 6] = [
        ColorLabel::Up,
        ColorLabel::Right,
        ColorLabel::Front,
        ColorLabel::Down,
        ColorLabel::Left,
        ColorLabel::Back,
    ];

    /// Position of this face in [`ColorLabel::FACE_ORDER`].
    pub fn face_index(self) -> usize {
        match self {
            ColorLabel::Up => 0,
            ColorLabel::Right => 1,
            ColorLabel::Front => 2,
            ColorLabel::Down => 3,
            ColorLabel::Left => 4,
            ColorLabel::Back => 5,
        }
    }

    pub fn code(self) -> char {
        match self {
            ColorLabel::Up => 'U',
            ColorLabel::Right => 'R',
            ColorLabel::Front => 'F',
            ColorLabel::Down => 'D',
            ColorLabel::Left => 'L',
            ColorLabel::Back => 'B',
        }
    }

    pub fn from_code(code: char) -> Result<Self, InvalidFaceletCode> {
        match code {
            'U' => Ok(ColorLabel::Up),
            'R' => Ok(ColorLabel::Right),
            'F' => Ok(ColorLabel::Front),
            'D' => Ok(ColorLabel::Down),
            'L' => Ok(ColorLabel::Left),
            'B' => Ok(ColorLabel::Back),
            other => Err(InvalidFaceletCode(other)),
        }
    }

    /// Human-readable sticker color.
    pub fn color_name(self) -> &'static str {
        match self {
            ColorLabel::Up => "white",
            ColorLabel::Right => "red",
            ColorLabel::Front => "green",
            ColorLabel::Down => "yellow",
            ColorLabel::Left => "orange",
            ColorLabel::Back => "blue",
        }
    }

    /// Human-readable face name.
    pub fn face_name(self) -> &'static str {
        match self {
            ColorLabel::Up => "up",
            ColorLabel::Right => "right",
            ColorLabel::Front => "front",
            ColorLabel::Down => "down",
            ColorLabel::Left => "left",
            ColorLabel::Back => "back",
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for ColorLabel {
    type Error = InvalidFaceletCode;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
