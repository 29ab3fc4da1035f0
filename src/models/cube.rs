//! Whole-cube state: six scanned faces and the solver's answer.

use facelet_vision::{ColorLabel, FaceScan};
use std::fmt;
use thiserror::Error;

/// Number of facelets in a cube definition string.
pub const FACELET_COUNT: usize = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("missing scan for the {} face", .0.face_name())]
    MissingFace(ColorLabel),
}

/// Six face scans in solver order (U, R, F, D, L, B).
///
/// Renders as the 54-character facelet string, each face contributing its
/// nine codes row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeDefinition([FaceScan; 6]);

impl CubeDefinition {
    /// Faces must already be in U, R, F, D, L, B order.
    pub fn from_faces(faces: [FaceScan; 6]) -> Self {
        Self(faces)
    }

    pub fn builder() -> CubeDefinitionBuilder {
        CubeDefinitionBuilder::default()
    }

    pub fn face(&self, face: ColorLabel) -> &FaceScan {
        &self.0[face.face_index()]
    }

    pub fn faces(&self) -> &[FaceScan; 6] {
        &self.0
    }

    /// All 54 facelets in definition order.
    pub fn facelets(&self) -> impl Iterator<Item = ColorLabel> + '_ {
        self.0.iter().flat_map(|face| face.labels().iter().copied())
    }
}

impl fmt::Display for CubeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.facelets() {
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

/// Collects face scans in any order.
///
/// Setting a face twice keeps the later scan.
#[derive(Debug, Clone, Default)]
pub struct CubeDefinitionBuilder {
    faces: [Option<FaceScan>; 6],
}

impl CubeDefinitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(mut self, face: ColorLabel, scan: FaceScan) -> Self {
        self.set(face, scan);
        self
    }

    pub fn set(&mut self, face: ColorLabel, scan: FaceScan) {
        self.faces[face.face_index()] = Some(scan);
    }

    pub fn build(self) -> Result<CubeDefinition, AssembleError> {
        let mut faces = [FaceScan::uniform(ColorLabel::Up); 6];
        for face in ColorLabel::FACE_ORDER {
            faces[face.face_index()] =
                self.faces[face.face_index()].ok_or(AssembleError::MissingFace(face))?;
        }
        Ok(CubeDefinition(faces))
    }
}

/// Move sequence returned by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    text: String,
    steps: Vec<String>,
}

impl Solution {
    /// Split solver output into move tokens on whitespace.
    pub fn from_moves(text: &str) -> Self {
        let text = text.trim();
        Self {
            text: text.to_string(),
            steps: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
