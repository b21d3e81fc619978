// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded, linear undo/redo timeline of snapshots.

use std::cell::Cell;
use std::rc::Rc;

use crate::codec;
use crate::model::Snapshot;
use crate::scene::SceneGraph;

pub const HISTORY_CAP: usize = 50;

/// Reentrancy guard for replay.
///
/// Execution is cooperative single-thread, so this is a plain flag, not a
/// lock: it only exists to keep an undo/redo's own restore-triggered
/// notifications from being recorded as new history entries. The flag is
/// sampled at notification time (see `bridge`) and cleared by the engine's
/// render-completion callback.
#[derive(Debug, Clone, Default)]
pub struct ReplayFlag(Rc<Cell<bool>>);

impl ReplayFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub(crate) fn set(&self, value: bool) {
        self.0.set(value);
    }
}

#[derive(Debug)]
pub struct HistoryManager {
    stack: Vec<Snapshot>,
    index: usize,
    cap: usize,
    replaying: ReplayFlag,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            stack: Vec::new(),
            index: 0,
            cap: cap.max(1),
            replaying: ReplayFlag::default(),
        }
    }

    /// Captures the baseline snapshot the timeline starts from.
    ///
    /// If even the baseline capture fails, the minimal fallback snapshot
    /// seeds the stack so the index invariant holds from here on.
    pub fn initialize(&mut self, scene: &mut dyn SceneGraph) {
        let baseline = match codec::capture(scene) {
            Ok(snapshot) => snapshot,
            Err(failure) => {
                log::warn!("baseline capture failed, starting history from minimal snapshot: {failure}");
                failure.into_minimal()
            }
        };
        self.stack = vec![baseline];
        self.index = 0;
    }

    /// Records the current scene state as a new edit.
    ///
    /// No-op while a replay is in flight. A capture failure is logged and
    /// skipped: the live scene graph is unaffected, only the undo
    /// granularity for this one edit is lost.
    pub fn record(&mut self, scene: &mut dyn SceneGraph) {
        if self.replaying.get() {
            return;
        }
        if self.stack.is_empty() {
            self.initialize(scene);
            return;
        }
        let snapshot = match codec::capture(scene) {
            Ok(snapshot) => snapshot,
            Err(failure) => {
                log::warn!("history capture failed, edit not recorded: {}", failure.reason());
                return;
            }
        };
        self.stack.truncate(self.index + 1);
        self.stack.push(snapshot);
        if self.stack.len() > self.cap {
            let overflow = self.stack.len() - self.cap;
            self.stack.drain(0..overflow);
        }
        self.index = self.stack.len() - 1;
    }

    pub fn undo(&mut self, scene: &mut dyn SceneGraph) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        self.replay_current(scene);
    }

    pub fn redo(&mut self, scene: &mut dyn SceneGraph) {
        if self.stack.is_empty() || self.index + 1 >= self.stack.len() {
            return;
        }
        self.index += 1;
        self.replay_current(scene);
    }

    fn replay_current(&mut self, scene: &mut dyn SceneGraph) {
        let snapshot = self.stack[self.index].clone();
        self.replaying.set(true);
        let guard = self.replaying.clone();
        codec::restore(&snapshot, scene, Box::new(move || guard.set(false)));
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.stack.is_empty() && self.index + 1 < self.stack.len()
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying.get()
    }

    /// Shared handle for consumers that need the guard state at event time.
    pub fn replay_flag(&self) -> ReplayFlag {
        self.replaying.clone()
    }

    /// The snapshot the timeline currently points at.
    pub fn current(&self) -> Option<&Snapshot> {
        self.stack.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}
