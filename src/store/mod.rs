// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Remote document store collaborator surface.
//!
//! `NotFound` is potentially transient (a just-created document may not be
//! visible to reads yet); every other error is terminal for the attempt but
//! never fatal to the editing session.

pub mod memory;
#[cfg(test)]
pub(crate) mod test_utils;

use std::fmt;

use crate::model::{Document, DocumentId, DocumentPatch};

pub use memory::MemoryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound { document_id: DocumentId },
    AlreadyExists { document_id: DocumentId },
    Backend { message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { document_id } => write!(f, "document not found: {document_id}"),
            Self::AlreadyExists { document_id } => {
                write!(f, "document already exists: {document_id}")
            }
            Self::Backend { message } => write!(f, "document store backend error: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait DocumentStore {
    fn get(&mut self, document_id: &DocumentId) -> Result<Document, StoreError>;

    fn create(&mut self, document: Document) -> Result<Document, StoreError>;

    fn update(
        &mut self,
        document_id: &DocumentId,
        patch: DocumentPatch,
    ) -> Result<Document, StoreError>;
}
