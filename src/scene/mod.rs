// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering-engine collaborator surface.
//!
//! The engine owns the live scene graph; this subsystem only reads it
//! (capture), writes it (replay), and listens to its mutation notifications.
//! Everything is cooperative single-thread: the event bus is an
//! `Rc<RefCell<_>>` subscriber table, not a channel, and handlers run
//! synchronously at emission time.

pub mod memory;
#[cfg(test)]
pub(crate) mod test_utils;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::model::{Background, NodeId, SceneNode};

pub use memory::MemoryScene;

/// The fixed vocabulary of mutation notifications the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneEventKind {
    NodeAdded,
    NodeRemoved,
    NodeModified,
    NodeMoving,
    NodeScaling,
    NodeRotating,
    BackgroundChanged,
}

impl SceneEventKind {
    /// Every kind that signals a (potential) document mutation.
    pub const MUTATIONS: [SceneEventKind; 7] = [
        SceneEventKind::NodeAdded,
        SceneEventKind::NodeRemoved,
        SceneEventKind::NodeModified,
        SceneEventKind::NodeMoving,
        SceneEventKind::NodeScaling,
        SceneEventKind::NodeRotating,
        SceneEventKind::BackgroundChanged,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEvent {
    kind: SceneEventKind,
    node_id: Option<NodeId>,
}

impl SceneEvent {
    pub fn new(kind: SceneEventKind, node_id: Option<NodeId>) -> Self {
        Self { kind, node_id }
    }

    pub fn for_node(kind: SceneEventKind, node_id: NodeId) -> Self {
        Self::new(kind, Some(node_id))
    }

    pub fn background_changed() -> Self {
        Self::new(SceneEventKind::BackgroundChanged, None)
    }

    pub fn kind(&self) -> SceneEventKind {
        self.kind
    }

    pub fn node_id(&self) -> Option<&NodeId> {
        self.node_id.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

pub type EventHandler = Box<dyn FnMut(&SceneEvent)>;

struct Sink {
    kinds: Vec<SceneEventKind>,
    handler: EventHandler,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    sinks: BTreeMap<SubscriberId, Sink>,
}

/// Subscription table for mutation notifications.
///
/// Handlers are invoked synchronously from `emit` and must not call back
/// into the bus.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kinds: &[SceneEventKind], handler: EventHandler) -> SubscriberId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.sinks.insert(
            id,
            Sink {
                kinds: kinds.to_vec(),
                handler,
            },
        );
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.borrow_mut().sinks.remove(&id);
    }

    pub fn emit(&self, event: SceneEvent) {
        let mut inner = self.inner.borrow_mut();
        for sink in inner.sinks.values_mut() {
            if sink.kinds.contains(&event.kind()) {
                (sink.handler)(&event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().sinks.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Render-completion callback; the engine does not guarantee a synchronous
/// render.
pub type RenderDone = Box<dyn FnOnce()>;

/// Failure reported by the engine's own document serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneError {
    message: String,
}

impl SceneError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene export failed: {}", self.message)
    }
}

impl std::error::Error for SceneError {}

/// Handle to the engine-owned scene graph.
///
/// The subsystem never holds a second copy of the live graph; it goes
/// through this trait for enumeration, serialization, and replay.
pub trait SceneGraph {
    fn nodes(&self) -> &[SceneNode];

    /// Direct access for in-place node surgery. Callers are responsible for
    /// requesting a re-render afterwards.
    fn nodes_mut(&mut self) -> &mut Vec<SceneNode>;

    /// Whole-document serialization, owned by the engine.
    fn export_nodes(&self) -> Result<Vec<SceneNode>, SceneError>;

    fn replace_nodes(&mut self, nodes: Vec<SceneNode>);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_dimensions(&mut self, width: u32, height: u32);

    fn background(&self) -> &Background;
    fn set_background(&mut self, background: Background);

    /// Whether the underlying paint context exists yet.
    fn has_paint_context(&self) -> bool;

    fn request_render(&mut self, done: RenderDone);

    fn events(&self) -> EventBus;
}
