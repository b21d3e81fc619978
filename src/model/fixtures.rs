// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::json;

use super::background::Background;
use super::document::Document;
use super::ids::{DocumentId, NodeId};
use super::node::{NodeKind, SceneNode};
use super::snapshot::Snapshot;

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn did(value: &str) -> DocumentId {
    DocumentId::new(value).expect("document id")
}

pub(crate) fn shape_node(id: &str) -> SceneNode {
    let mut node = SceneNode::new(nid(id), NodeKind::Shape);
    node.style_mut()
        .insert("fill".to_owned(), json!({"color": "#336699"}));
    node.attrs_mut().insert("left".to_owned(), json!(10));
    node.attrs_mut().insert("top".to_owned(), json!(20));
    node
}

pub(crate) fn text_node(id: &str, text: &str) -> SceneNode {
    let mut node = SceneNode::new(nid(id), NodeKind::Text);
    node.attrs_mut().insert("text".to_owned(), json!(text));
    node.style_mut()
        .insert("font".to_owned(), json!({"family": "Inter", "size": 16}));
    node
}

/// A node whose style map and path data carry the malformed values the
/// repair pass is expected to strip.
pub(crate) fn corrupt_node(id: &str) -> SceneNode {
    let mut node = SceneNode::new(nid(id), NodeKind::Shape);
    node.style_mut()
        .insert("fill".to_owned(), json!({"color": "#ff0000"}));
    node.style_mut().insert("shadow".to_owned(), json!("#broken"));
    node.set_path(Some(json!([1, 2, 3])));
    node
}

pub(crate) fn document_with_snapshot(id: &str, nodes: Vec<SceneNode>) -> Document {
    let mut document = Document::blank_baseline(did(id));
    let snapshot = Snapshot::new(nodes, Background::default_blank(), 800, 600);
    document.set_dimensions(800, 600);
    document.set_snapshot(Some(snapshot));
    document
}
