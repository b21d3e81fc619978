// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Background, NodeId, SceneNode, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use super::{EventBus, RenderDone, SceneError, SceneEvent, SceneEventKind, SceneGraph};

/// In-memory reference engine.
///
/// Emits the same mutation notifications a real engine would, including
/// during replay; that is exactly what the history replay guard exists to
/// absorb. Renders complete synchronously.
#[derive(Debug)]
pub struct MemoryScene {
    nodes: Vec<SceneNode>,
    width: u32,
    height: u32,
    background: Background,
    paint_ready: bool,
    bus: EventBus,
    renders: u64,
}

impl MemoryScene {
    pub fn new(width: u32, height: u32, background: Background) -> Self {
        Self {
            nodes: Vec::new(),
            width,
            height,
            background,
            paint_ready: true,
            bus: EventBus::new(),
            renders: 0,
        }
    }

    pub fn blank() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Background::default_blank())
    }

    pub fn set_paint_ready(&mut self, ready: bool) {
        self.paint_ready = ready;
    }

    /// Number of completed renders, handy for asserting render triggers.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn add_node(&mut self, node: SceneNode) {
        let node_id = node.node_id().clone();
        self.nodes.push(node);
        self.bus
            .emit(SceneEvent::for_node(SceneEventKind::NodeAdded, node_id));
    }

    pub fn remove_node(&mut self, node_id: &NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.node_id() != node_id);
        if self.nodes.len() == before {
            return false;
        }
        self.bus.emit(SceneEvent::for_node(
            SceneEventKind::NodeRemoved,
            node_id.clone(),
        ));
        true
    }

    /// Mutates a node in place and emits the given notification kind
    /// (modified/moving/scaling/rotating).
    pub fn touch_node(
        &mut self,
        node_id: &NodeId,
        kind: SceneEventKind,
        mutate: impl FnOnce(&mut SceneNode),
    ) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|node| node.node_id() == node_id) else {
            return false;
        };
        mutate(node);
        self.bus.emit(SceneEvent::for_node(kind, node_id.clone()));
        true
    }
}

impl SceneGraph for MemoryScene {
    fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Vec<SceneNode> {
        &mut self.nodes
    }

    fn export_nodes(&self) -> Result<Vec<SceneNode>, SceneError> {
        Ok(self.nodes.clone())
    }

    fn replace_nodes(&mut self, nodes: Vec<SceneNode>) {
        self.nodes = nodes;
        let node_ids = self
            .nodes
            .iter()
            .map(|node| node.node_id().clone())
            .collect::<Vec<_>>();
        for node_id in node_ids {
            self.bus
                .emit(SceneEvent::for_node(SceneEventKind::NodeAdded, node_id));
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn background(&self) -> &Background {
        &self.background
    }

    fn set_background(&mut self, background: Background) {
        self.background = background;
        self.bus.emit(SceneEvent::background_changed());
    }

    fn has_paint_context(&self) -> bool {
        self.paint_ready
    }

    fn request_render(&mut self, done: RenderDone) {
        self.renders += 1;
        done();
    }

    fn events(&self) -> EventBus {
        self.bus.clone()
    }
}
