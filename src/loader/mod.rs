// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document loader.
//!
//! `NotFound` is retried on a delay because a just-created document may not
//! be readable yet. After the retry limit, or on any other store error, the
//! session opens on a blank baseline instead of failing; the first save then
//! writes the record back.

use std::time::{Duration, Instant};

use crate::model::{Background, Document, DocumentId, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::scene::SceneGraph;
use crate::store::{DocumentStore, StoreError};

/// Total `get` attempts before a missing document stops being treated as
/// transient.
pub const RETRY_LIMIT: u32 = 3;

pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Wait between probes while the engine has no paint surface yet.
pub const SURFACE_RETRY_DELAY: Duration = Duration::from_millis(250);

/// How the loaded document came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The remote record was fetched and replayed into the scene.
    Remote,
    /// The record stayed missing past the retry limit.
    BlankAfterMissing,
    /// The store failed with a non-retriable error.
    BlankAfterError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Unloaded,
    Loading,
    Loaded(LoadOrigin),
}

#[derive(Debug)]
pub struct DocumentLoader {
    document_id: DocumentId,
    phase: LoadPhase,
    attempts: u32,
    next_attempt_at: Option<Instant>,
}

impl DocumentLoader {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            phase: LoadPhase::Unloaded,
            attempts: 0,
            next_attempt_at: None,
        }
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Starts loading. No-op once the document is loaded.
    pub fn begin(&mut self) {
        if self.phase == LoadPhase::Unloaded {
            self.phase = LoadPhase::Loading;
        }
    }

    /// Drives one load step. Returns the document exactly once, on the tick
    /// that completes the load.
    pub fn tick(
        &mut self,
        store: &mut dyn DocumentStore,
        scene: &mut dyn SceneGraph,
        now: Instant,
    ) -> Option<Document> {
        if self.phase != LoadPhase::Loading {
            return None;
        }
        if self.next_attempt_at.is_some_and(|at| now < at) {
            return None;
        }
        if !scene.has_paint_context() {
            log::debug!(
                "deferring load of {}: no paint surface yet",
                self.document_id
            );
            self.next_attempt_at = Some(now + SURFACE_RETRY_DELAY);
            return None;
        }

        self.attempts += 1;
        self.next_attempt_at = None;

        match store.get(&self.document_id) {
            Ok(document) => {
                apply_remote(&document, scene);
                self.phase = LoadPhase::Loaded(LoadOrigin::Remote);
                Some(document)
            }
            Err(StoreError::NotFound { .. }) if self.attempts < RETRY_LIMIT => {
                log::debug!(
                    "document {} not found (attempt {} of {}), retrying",
                    self.document_id,
                    self.attempts,
                    RETRY_LIMIT
                );
                self.next_attempt_at = Some(now + RETRY_DELAY);
                None
            }
            Err(StoreError::NotFound { .. }) => {
                log::debug!(
                    "document {} still missing after {} attempts, starting blank",
                    self.document_id,
                    self.attempts
                );
                self.phase = LoadPhase::Loaded(LoadOrigin::BlankAfterMissing);
                Some(self.blank_baseline(scene))
            }
            Err(err) => {
                log::warn!("loading document {} failed: {err}", self.document_id);
                self.phase = LoadPhase::Loaded(LoadOrigin::BlankAfterError {
                    message: err.to_string(),
                });
                Some(self.blank_baseline(scene))
            }
        }
    }

    fn blank_baseline(&mut self, scene: &mut dyn SceneGraph) -> Document {
        let document = Document::blank_baseline(self.document_id.clone());
        scene.set_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        scene.replace_nodes(Vec::new());
        scene.set_background(Background::default_blank());
        scene.request_render(Box::new(|| {}));
        document
    }
}

/// Replays a fetched record into the scene. Record-level dimensions and
/// background win; snapshot-embedded values cover older records that predate
/// those columns.
fn apply_remote(document: &Document, scene: &mut dyn SceneGraph) {
    let snapshot = document.snapshot();
    let width = document
        .width()
        .or_else(|| snapshot.map(|snapshot| snapshot.width()))
        .unwrap_or(DEFAULT_WIDTH);
    let height = document
        .height()
        .or_else(|| snapshot.map(|snapshot| snapshot.height()))
        .unwrap_or(DEFAULT_HEIGHT);
    let background = document
        .background()
        .cloned()
        .or_else(|| snapshot.map(|snapshot| snapshot.background().clone()))
        .unwrap_or_else(Background::default_blank);

    scene.set_dimensions(width, height);
    if let Some(snapshot) = snapshot {
        scene.replace_nodes(snapshot.nodes().to_vec());
    }
    scene.set_background(background);
    scene.request_render(Box::new(|| {}));
}

#[cfg(test)]
mod tests;
