// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Auto-save coordinator.
//!
//! Three concerns are kept apart on purpose: detecting a real change
//! (stable-form diff), scheduling a write (debounce deadline), and
//! attempting the write (persist). Transient store errors therefore never
//! block editing and never corrupt the undo stack.

use std::time::{Duration, Instant, SystemTime};

use crate::codec;
use crate::model::{Document, DocumentPatch, Snapshot};
use crate::scene::SceneGraph;
use crate::store::{DocumentStore, StoreError};

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(2000);

/// Consecutive capture failures tolerated before scheduled saves are
/// suspended.
pub const FAILURE_BUDGET: u32 = 5;

/// Outcome of observing one mutation notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The scene differs from the last persisted form; a persist is now
    /// pending and the edit should be recorded in history.
    Changed,
    /// Structurally identical to the last persisted form (e.g. a
    /// selection-only change); nothing was scheduled.
    Unchanged,
    /// Capture failed; the failure budget was charged.
    CaptureFailed,
}

#[derive(Debug)]
struct PendingPersist {
    due_at: Instant,
    snapshot: Snapshot,
}

#[derive(Debug)]
pub struct AutosaveCoordinator {
    debounce: Duration,
    failure_budget: u32,
    last_persisted_form: Option<String>,
    dirty: bool,
    last_saved_at: Option<SystemTime>,
    consecutive_failures: u32,
    pending: Option<PendingPersist>,
}

impl AutosaveCoordinator {
    pub fn new() -> Self {
        Self {
            debounce: DEBOUNCE_INTERVAL,
            failure_budget: FAILURE_BUDGET,
            last_persisted_form: None,
            dirty: false,
            last_saved_at: None,
            consecutive_failures: 0,
            pending: None,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_failure_budget(mut self, failure_budget: u32) -> Self {
        self.failure_budget = failure_budget;
        self
    }

    /// Marks `form` as the already-persisted baseline so a freshly loaded
    /// session does not immediately report unsaved changes.
    pub fn prime(&mut self, form: String) {
        self.last_persisted_form = Some(form);
        self.dirty = false;
        self.pending = None;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn last_saved_at(&self) -> Option<SystemTime> {
        self.last_saved_at
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn is_suspended(&self) -> bool {
        self.consecutive_failures > self.failure_budget
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }

    /// Handles one mutation notification.
    ///
    /// Captures the scene, suppresses no-ops against the last persisted
    /// form, and (re)schedules the debounced persist. An existing deadline
    /// is replaced, never stacked, so bursts collapse into one write.
    pub fn observe(&mut self, scene: &mut dyn SceneGraph, now: Instant) -> Observation {
        let snapshot = match codec::capture(scene) {
            Ok(snapshot) => snapshot,
            Err(failure) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                log::warn!(
                    "auto-save capture failed ({} consecutive): {}",
                    self.consecutive_failures,
                    failure.reason()
                );
                return Observation::CaptureFailed;
            }
        };

        let form = snapshot.stable_form();
        if self.last_persisted_form.as_deref() == Some(form.as_str()) {
            return Observation::Unchanged;
        }

        self.consecutive_failures = 0;
        self.dirty = true;
        self.pending = Some(PendingPersist {
            due_at: now + self.debounce,
            snapshot,
        });
        Observation::Changed
    }

    /// Fires the pending persist once its deadline has passed.
    ///
    /// Returns `true` when a persist succeeded. While the failure budget is
    /// exhausted the pending write is dropped; only a manual save clears
    /// that state.
    pub fn tick(
        &mut self,
        store: &mut dyn DocumentStore,
        document: &mut Document,
        now: Instant,
    ) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.due_at <= now);
        if !due {
            return false;
        }
        let pending = self
            .pending
            .take()
            .expect("pending persist was just checked");

        if self.is_suspended() {
            log::warn!(
                "auto-save suspended after {} consecutive capture failures; waiting for a manual save",
                self.consecutive_failures
            );
            return false;
        }

        self.persist(store, document, pending.snapshot)
    }

    /// Explicit user-triggered save: cancels any pending deadline and
    /// persists immediately, bypassing the failure budget. Under a failing
    /// capture the minimal fallback snapshot is persisted so valid geometry
    /// survives.
    pub fn save_now(
        &mut self,
        store: &mut dyn DocumentStore,
        document: &mut Document,
        scene: &mut dyn SceneGraph,
    ) -> bool {
        self.pending = None;
        let snapshot = match codec::capture(scene) {
            Ok(snapshot) => snapshot,
            Err(failure) => {
                log::warn!("manual save falling back to minimal snapshot: {}", failure.reason());
                failure.into_minimal()
            }
        };
        self.persist(store, document, snapshot)
    }

    fn persist(
        &mut self,
        store: &mut dyn DocumentStore,
        document: &mut Document,
        snapshot: Snapshot,
    ) -> bool {
        let form = snapshot.stable_form();
        let patch = DocumentPatch {
            width: Some(snapshot.width()),
            height: Some(snapshot.height()),
            background: Some(snapshot.background().clone()),
            snapshot: Some(snapshot),
        };

        let outcome = match store.update(document.document_id(), patch.clone()) {
            Ok(updated) => Ok(updated),
            Err(StoreError::NotFound { .. }) => {
                // A session started from the blank baseline has no remote
                // record yet; its first save creates one.
                let mut fresh = document.clone();
                fresh.apply_patch(patch);
                store.create(fresh)
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(updated) => {
                *document = updated;
                self.last_persisted_form = Some(form);
                self.dirty = false;
                self.last_saved_at = Some(SystemTime::now());
                self.consecutive_failures = 0;
                true
            }
            Err(err) => {
                log::warn!("persist failed for document {}: {err}", document.document_id());
                // dirty stays set; the next mutation or a manual save retries.
                false
            }
        }
    }
}

impl Default for AutosaveCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
