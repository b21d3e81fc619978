// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Documents are remote records; snapshots are immutable captures of the live
//! scene graph; nodes carry the raw per-object attributes the rendering
//! engine round-trips.

pub mod background;
pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;
pub mod snapshot;

pub use background::{Background, Color, ColorError, Gradient, GradientKind, GradientStop};
pub use document::{Document, DocumentPatch, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use ids::{DocumentId, Id, IdError, NodeId, OwnerId};
pub use node::{NodeKind, SceneNode};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
