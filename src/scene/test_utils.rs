// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::Cell;

use crate::model::{Background, SceneNode};

use super::{EventBus, MemoryScene, RenderDone, SceneError, SceneGraph};

/// Engine wrapper whose whole-document export can be made to fail, for
/// exercising the capture fallback and failure-budget paths.
pub(crate) struct FlakyScene {
    inner: MemoryScene,
    export_failures: Cell<u32>,
}

impl FlakyScene {
    pub(crate) const ALWAYS: u32 = u32::MAX;

    pub(crate) fn new(inner: MemoryScene) -> Self {
        Self {
            inner,
            export_failures: Cell::new(0),
        }
    }

    /// Fail the next `count` exports (`ALWAYS` for every export).
    pub(crate) fn fail_exports(&mut self, count: u32) {
        self.export_failures.set(count);
    }

    pub(crate) fn inner_mut(&mut self) -> &mut MemoryScene {
        &mut self.inner
    }
}

impl SceneGraph for FlakyScene {
    fn nodes(&self) -> &[SceneNode] {
        self.inner.nodes()
    }

    fn nodes_mut(&mut self) -> &mut Vec<SceneNode> {
        self.inner.nodes_mut()
    }

    fn export_nodes(&self) -> Result<Vec<SceneNode>, SceneError> {
        let remaining = self.export_failures.get();
        if remaining > 0 {
            if remaining != Self::ALWAYS {
                self.export_failures.set(remaining - 1);
            }
            return Err(SceneError::new("injected export fault"));
        }
        self.inner.export_nodes()
    }

    fn replace_nodes(&mut self, nodes: Vec<SceneNode>) {
        self.inner.replace_nodes(nodes);
    }

    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.inner.set_dimensions(width, height);
    }

    fn background(&self) -> &Background {
        self.inner.background()
    }

    fn set_background(&mut self, background: Background) {
        self.inner.set_background(background);
    }

    fn has_paint_context(&self) -> bool {
        self.inner.has_paint_context()
    }

    fn request_render(&mut self, done: RenderDone) {
        self.inner.request_render(done);
    }

    fn events(&self) -> EventBus {
        self.inner.events()
    }
}
