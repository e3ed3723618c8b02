//! Image documentation handles.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Rendered width for images wider than they are tall.
pub const LANDSCAPE_WIDTH_CM: f32 = 14.0;
/// Rendered width for every other image.
pub const PORTRAIT_WIDTH_CM: f32 = 9.0;

/// Display orientation chosen from pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySize {
    Landscape,
    Portrait,
}

impl DisplaySize {
    /// Landscape only when strictly wider than tall; squares are portrait.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn width_cm(self) -> f32 {
        match self {
            Self::Landscape => LANDSCAPE_WIDTH_CM,
            Self::Portrait => PORTRAIT_WIDTH_CM,
        }
    }
}

/// Opaque reference to one extracted, display-ready image.
///
/// Serializes with the rendered `width_cm` of its display size; reading
/// ignores that field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    /// Location of the extracted file on disk.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub display: DisplaySize,
}

impl Serialize for ImageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImageRef", 5)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("display", &self.display)?;
        state.serialize_field("width_cm", &self.display.width_cm())?;
        state.end()
    }
}
