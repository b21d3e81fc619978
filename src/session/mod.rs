// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing session facade.
//!
//! Wires loader, history, mutation bridge and auto-save together behind one
//! tick-driven surface. The bridge and version counter attach only after the
//! load completes, so the load's own replay into the scene never counts as
//! an edit.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::autosave::{AutosaveCoordinator, Observation};
use crate::bridge::MutationBridge;
use crate::history::HistoryManager;
use crate::loader::{DocumentLoader, LoadPhase};
use crate::model::{Document, DocumentId};
use crate::scene::{EventBus, SceneEventKind, SceneGraph, SubscriberId};
use crate::store::DocumentStore;

/// Counts every raw mutation notification, replay included. Hosts use it to
/// cheaply invalidate previews without diffing document content.
struct VersionCounter {
    bus: EventBus,
    subscriber_id: SubscriberId,
    count: Rc<Cell<u64>>,
}

impl VersionCounter {
    fn attach(bus: &EventBus) -> Self {
        let count = Rc::new(Cell::new(0u64));
        let sink = Rc::clone(&count);
        let subscriber_id = bus.subscribe(
            &SceneEventKind::MUTATIONS,
            Box::new(move |_| sink.set(sink.get() + 1)),
        );
        Self {
            bus: bus.clone(),
            subscriber_id,
            count,
        }
    }

    fn value(&self) -> u64 {
        self.count.get()
    }
}

impl Drop for VersionCounter {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscriber_id);
    }
}

pub struct EditorSession {
    loader: DocumentLoader,
    document: Option<Document>,
    bridge: Option<MutationBridge>,
    history: HistoryManager,
    autosave: AutosaveCoordinator,
    version: Option<VersionCounter>,
}

impl EditorSession {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            loader: DocumentLoader::new(document_id),
            document: None,
            bridge: None,
            history: HistoryManager::new(),
            autosave: AutosaveCoordinator::new(),
            version: None,
        }
    }

    pub fn with_autosave(mut self, autosave: AutosaveCoordinator) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_history(mut self, history: HistoryManager) -> Self {
        self.history = history;
        self
    }

    /// Drives the session one step: load progress, then pending mutation
    /// signals, then the auto-save deadline.
    pub fn tick(
        &mut self,
        store: &mut dyn DocumentStore,
        scene: &mut dyn SceneGraph,
        now: Instant,
    ) {
        if self.loader.phase() == &LoadPhase::Unloaded {
            self.loader.begin();
        }
        if self.document.is_none() {
            if let Some(document) = self.loader.tick(store, scene, now) {
                self.history.initialize(scene);
                let baseline = self
                    .history
                    .current()
                    .expect("history was just initialized")
                    .stable_form();
                self.autosave.prime(baseline);
                let bus = scene.events();
                self.bridge = Some(MutationBridge::attach(&bus, self.history.replay_flag()));
                self.version = Some(VersionCounter::attach(&bus));
                self.document = Some(document);
            }
        }

        let signals = match self.bridge.as_mut() {
            Some(bridge) => bridge.drain(),
            None => Vec::new(),
        };
        // A tick's burst of signals is one edit; replay echoes are dropped.
        if signals.iter().any(|signal| !signal.replaying())
            && self.autosave.observe(scene, now) == Observation::Changed
        {
            self.history.record(scene);
        }

        if let Some(document) = self.document.as_mut() {
            self.autosave.tick(store, document, now);
        }
    }

    pub fn undo(&mut self, scene: &mut dyn SceneGraph) {
        self.history.undo(scene);
    }

    pub fn redo(&mut self, scene: &mut dyn SceneGraph) {
        self.history.redo(scene);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Explicit save. Fails softly until the load has completed.
    pub fn save_now(&mut self, store: &mut dyn DocumentStore, scene: &mut dyn SceneGraph) -> bool {
        let Some(document) = self.document.as_mut() else {
            log::warn!("manual save ignored: no document loaded yet");
            return false;
        };
        self.autosave.save_now(store, document, scene)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.autosave.has_unsaved_changes()
    }

    pub fn last_saved_at(&self) -> Option<std::time::SystemTime> {
        self.autosave.last_saved_at()
    }

    /// Monotonic count of raw mutation notifications since load.
    pub fn version(&self) -> u64 {
        self.version.as_ref().map_or(0, VersionCounter::value)
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn load_phase(&self) -> &LoadPhase {
        self.loader.phase()
    }
}
