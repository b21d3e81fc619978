// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use crate::model::{Document, DocumentId, DocumentPatch};

use super::{DocumentStore, MemoryStore, StoreError};

/// Store double that counts calls and can script responses; unscripted calls
/// fall through to an inner `MemoryStore`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedStore {
    inner: MemoryStore,
    scripted_gets: VecDeque<Result<Document, StoreError>>,
    update_faults: u32,
    pub(crate) get_calls: usize,
    pub(crate) create_calls: usize,
    pub(crate) update_calls: usize,
}

impl ScriptedStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inner_mut(&mut self) -> &mut MemoryStore {
        &mut self.inner
    }

    pub(crate) fn script_get(&mut self, response: Result<Document, StoreError>) {
        self.scripted_gets.push_back(response);
    }

    /// Fail the next `count` updates with a backend error.
    pub(crate) fn fail_updates(&mut self, count: u32) {
        self.update_faults = count;
    }
}

impl DocumentStore for ScriptedStore {
    fn get(&mut self, document_id: &DocumentId) -> Result<Document, StoreError> {
        self.get_calls += 1;
        match self.scripted_gets.pop_front() {
            Some(response) => response,
            None => self.inner.get(document_id),
        }
    }

    fn create(&mut self, document: Document) -> Result<Document, StoreError> {
        self.create_calls += 1;
        self.inner.create(document)
    }

    fn update(
        &mut self,
        document_id: &DocumentId,
        patch: DocumentPatch,
    ) -> Result<Document, StoreError> {
        self.update_calls += 1;
        if self.update_faults > 0 {
            self.update_faults -= 1;
            return Err(StoreError::Backend {
                message: "injected update fault".to_owned(),
            });
        }
        self.inner.update(document_id, patch)
    }
}
