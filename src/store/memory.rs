// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{Document, DocumentId, DocumentPatch};

use super::{DocumentStore, StoreError};

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: BTreeMap<DocumentId, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document without going through `create`.
    pub fn insert(&mut self, document: Document) {
        self.documents
            .insert(document.document_id().clone(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, document_id: &DocumentId) -> bool {
        self.documents.contains_key(document_id)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&mut self, document_id: &DocumentId) -> Result<Document, StoreError> {
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                document_id: document_id.clone(),
            })
    }

    fn create(&mut self, document: Document) -> Result<Document, StoreError> {
        let document_id = document.document_id().clone();
        if self.documents.contains_key(&document_id) {
            return Err(StoreError::AlreadyExists { document_id });
        }
        self.documents.insert(document_id, document.clone());
        Ok(document)
    }

    fn update(
        &mut self,
        document_id: &DocumentId,
        patch: DocumentPatch,
    ) -> Result<Document, StoreError> {
        let Some(document) = self.documents.get_mut(document_id) else {
            return Err(StoreError::NotFound {
                document_id: document_id.clone(),
            });
        };
        document.apply_patch(patch);
        Ok(document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentStore, MemoryStore, StoreError};
    use crate::model::fixtures;
    use crate::model::{Document, DocumentPatch};

    #[test]
    fn get_reports_not_found_for_unknown_ids() {
        let mut store = MemoryStore::new();
        let err = store.get(&fixtures::did("d:missing")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn create_then_update_round_trips() {
        let mut store = MemoryStore::new();
        let document = Document::blank_baseline(fixtures::did("d1"));
        store.create(document.clone()).unwrap();

        let err = store.create(document).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));

        let updated = store
            .update(
                &fixtures::did("d1"),
                DocumentPatch {
                    width: Some(640),
                    ..DocumentPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.width(), Some(640));
        assert_eq!(store.get(&fixtures::did("d1")).unwrap().width(), Some(640));
    }
}
