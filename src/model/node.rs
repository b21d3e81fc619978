// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Shape,
    Text,
    Image,
    Interactive,
}

/// One visual object as the rendering engine exports it.
///
/// Style entries and path data are raw `serde_json::Value` because the engine
/// round-trips arbitrary per-node attributes; malformed values enter the
/// model here and are dealt with by the codec's repair pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNode {
    node_id: NodeId,
    kind: NodeKind,
    #[serde(default)]
    style: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<Value>,
    #[serde(default)]
    attrs: BTreeMap<String, Value>,
}

impl SceneNode {
    pub fn new(node_id: NodeId, kind: NodeKind) -> Self {
        Self {
            node_id,
            kind,
            style: BTreeMap::new(),
            path: None,
            attrs: BTreeMap::new(),
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn style(&self) -> &BTreeMap<String, Value> {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.style
    }

    pub fn path(&self) -> Option<&Value> {
        self.path.as_ref()
    }

    pub fn set_path(&mut self, path: Option<Value>) {
        self.path = path;
    }

    pub fn attrs(&self) -> &BTreeMap<String, Value> {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.attrs
    }
}
