// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color string as the rendering engine understands it.
///
/// Only non-emptiness is enforced; the engine is the authority on what color
/// syntax it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Result<Self, ColorError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ColorError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    Empty,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("color must not be empty"),
        }
    }
}

impl std::error::Error for ColorError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// One gradient color stop. Offsets are whole percent so the type stays `Eq`
/// and serializes deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset_percent: u8,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub angle_degrees: i16,
    pub stops: Vec<GradientStop>,
}

/// The document background: a solid color or a gradient descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Solid { color: Color },
    Gradient { gradient: Gradient },
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Result<Self, ColorError> {
        Ok(Self::Solid {
            color: Color::new(color)?,
        })
    }

    /// The background every blank baseline document starts with.
    pub fn default_blank() -> Self {
        Self::Solid {
            color: Color::new("#ffffff").expect("hard-coded blank background color is valid"),
        }
    }
}
