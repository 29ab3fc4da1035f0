//! The nine-sticker result of scanning one face.

use std::fmt;
use std::str::FromStr;

use crate::color::{ColorLabel, InvalidFaceletCode};

/// Labels of one face, row-major from the top-left sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceScan([ColorLabel; 9]);

/// Error parsing a face from facelet codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFaceError {
    #[error("a face has 9 facelets, got {0}")]
    WrongLength(usize),

    #[error(transparent)]
    InvalidCode(#[from] InvalidFaceletCode),
}

impl FaceScan {
    pub fn new(labels: [ColorLabel; 9]) -> Self {
        Self(labels)
    }

    /// A face whose nine stickers all carry `label`.
    pub fn uniform(label: ColorLabel) -> Self {
        Self([label; 9])
    }

    pub fn labels(&self) -> &[ColorLabel; 9] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<ColorLabel> {
        (row < 3 && col < 3).then(|| self.0[row * 3 + col])
    }

    /// The center sticker, which names the face.
    pub fn center(&self) -> ColorLabel {
        self.0[4]
    }

    pub fn codes(&self) -> [char; 9] {
        self.0.map(ColorLabel::code)
    }
}

impl fmt::Display for FaceScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

impl FromStr for FaceScan {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels = s
            .chars()
            .map(ColorLabel::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        let count = labels.len();
        labels
            .try_into()
            .map(Self)
            .map_err(|_| ParseFaceError::WrongLength(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let face: FaceScan = "URFDLBUUU".parse().unwrap();
        assert_eq!(face.to_string(), "URFDLBUUU");
        assert_eq!(face.get(0, 1), Some(ColorLabel::Right));
        assert_eq!(face.get(1, 1), Some(ColorLabel::Back));
        assert_eq!(face.center(), ColorLabel::Back);
        assert_eq!(face.get(3, 0), None);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "UUU".parse::<FaceScan>(),
            Err(ParseFaceError::WrongLength(3))
        );
    }

    #[test]
    fn test_parse_invalid_code() {
        assert_eq!(
            "UUUUXUUUU".parse::<FaceScan>(),
            Err(ParseFaceError::InvalidCode(InvalidFaceletCode('X')))
        );
    }

    #[test]
    fn test_codes() {
        let face = FaceScan::uniform(ColorLabel::Front);
        assert_eq!(face.codes(), ['F'; 9]);
    }
}
