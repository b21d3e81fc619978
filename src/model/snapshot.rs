// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::node::SceneNode;

pub const SNAPSHOT_VERSION: &str = "1";

/// An immutable, serializable capture of the scene graph at one instant.
///
/// Snapshots are never mutated after capture; history entries and persisted
/// document content are both plain `Snapshot` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    version: String,
    nodes: Vec<SceneNode>,
    background: Background,
    width: u32,
    height: u32,
}

impl Snapshot {
    pub fn new(nodes: Vec<SceneNode>, background: Background, width: u32, height: u32) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_owned(),
            nodes,
            background,
            width,
            height,
        }
    }

    /// An empty-node snapshot that still preserves background and geometry.
    pub fn minimal(background: Background, width: u32, height: u32) -> Self {
        Self::new(Vec::new(), background, width, height)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canonical serialized form used for structural equality checks.
    ///
    /// All maps in the model are `BTreeMap`, so two structurally equal
    /// snapshots always produce the same string.
    pub fn stable_form(&self) -> String {
        serde_json::to_string(self).expect("snapshot model serializes to JSON")
    }
}
