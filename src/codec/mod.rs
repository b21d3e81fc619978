// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot codec: scene graph -> snapshot (capture) and back (restore).
//!
//! Capture runs a repair pass first so one malformed node cannot fail the
//! whole document, then asks the engine for its serialized node list. If
//! even that fails, the caller gets a minimal snapshot that preserves
//! background and geometry.

use std::fmt;

use crate::model::{SceneNode, Snapshot};
use crate::scene::{RenderDone, SceneError, SceneGraph};

/// What a per-node serialization probe rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDefect {
    pub loose_style_keys: Vec<String>,
    pub non_string_path: bool,
}

impl NodeDefect {
    fn is_clean(&self) -> bool {
        self.loose_style_keys.is_empty() && !self.non_string_path
    }
}

impl fmt::Display for NodeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loose_style_keys.is_empty() && !self.non_string_path {
            return f.write_str("no defects");
        }
        if !self.loose_style_keys.is_empty() {
            write!(f, "loose style keys {:?}", self.loose_style_keys)?;
            if self.non_string_path {
                f.write_str(", ")?;
            }
        }
        if self.non_string_path {
            f.write_str("non-string path data")?;
        }
        Ok(())
    }
}

/// Per-node serialization probe.
///
/// Style entries must be structured objects and path data must be a string;
/// anything else is a known-fragile field that breaks the engine's document
/// serialization.
pub fn probe_node(node: &SceneNode) -> Result<(), NodeDefect> {
    let mut defect = NodeDefect::default();
    for (key, value) in node.style() {
        if !value.is_object() {
            defect.loose_style_keys.push(key.clone());
        }
    }
    if let Some(path) = node.path() {
        if !path.is_string() {
            defect.non_string_path = true;
        }
    }
    if defect.is_clean() {
        Ok(())
    } else {
        Err(defect)
    }
}

fn strip_fragile_fields(node: &mut SceneNode, defect: &NodeDefect) {
    for key in &defect.loose_style_keys {
        node.style_mut().remove(key);
    }
    if defect.non_string_path {
        node.set_path(None);
    }
}

/// Whole-document capture failed; a minimal snapshot stands in so the
/// document never loses valid geometry.
#[derive(Debug)]
pub struct CaptureFailure {
    minimal: Snapshot,
    reason: SceneError,
}

impl CaptureFailure {
    pub fn minimal(&self) -> &Snapshot {
        &self.minimal
    }

    pub fn into_minimal(self) -> Snapshot {
        self.minimal
    }

    pub fn reason(&self) -> &SceneError {
        &self.reason
    }
}

impl fmt::Display for CaptureFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capture fell back to a minimal snapshot: {}", self.reason)
    }
}

impl std::error::Error for CaptureFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

/// Captures a snapshot of the live scene graph.
///
/// Never panics outward: the result is a tagged outcome so callers can count
/// failures without exception-style control flow.
pub fn capture(scene: &mut dyn SceneGraph) -> Result<Snapshot, CaptureFailure> {
    let mut repaired = 0usize;
    for index in 0..scene.nodes().len() {
        let defect = match probe_node(&scene.nodes()[index]) {
            Ok(()) => continue,
            Err(defect) => defect,
        };
        let node = &mut scene.nodes_mut()[index];
        log::debug!("repairing scene node {}: {defect}", node.node_id());
        strip_fragile_fields(node, &defect);
        repaired += 1;
    }
    if repaired > 0 {
        // Downstream captures must see the cleaned nodes.
        scene.request_render(Box::new(|| {}));
    }

    let background = scene.background().clone();
    let width = scene.width();
    let height = scene.height();

    match scene.export_nodes() {
        Ok(nodes) => Ok(Snapshot::new(nodes, background, width, height)),
        Err(reason) => Err(CaptureFailure {
            minimal: Snapshot::minimal(background, width, height),
            reason,
        }),
    }
}

/// Replays a snapshot into the live scene graph.
///
/// Completion is signaled through `done` because the render is not
/// guaranteed synchronous.
pub fn restore(snapshot: &Snapshot, scene: &mut dyn SceneGraph, done: RenderDone) {
    scene.replace_nodes(snapshot.nodes().to_vec());
    scene.set_background(snapshot.background().clone());
    scene.request_render(done);
}
