// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::ids::{DocumentId, OwnerId};
use super::snapshot::Snapshot;

/// Dimensions every blank baseline document starts with.
pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1080;

/// A remote document record.
///
/// Dimensions and background are optional at the record level: older records
/// predate those columns, in which case readers fall back to the values
/// embedded in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    document_id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background: Option<Background>,
    #[serde(default)]
    archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<OwnerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    snapshot: Option<Snapshot>,
}

impl Document {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            width: None,
            height: None,
            background: None,
            archived: false,
            owner: None,
            snapshot: None,
        }
    }

    /// A fresh default-sized document for sessions whose remote record never
    /// became readable.
    pub fn blank_baseline(document_id: DocumentId) -> Self {
        let mut document = Self::new(document_id);
        document.width = Some(DEFAULT_WIDTH);
        document.height = Some(DEFAULT_HEIGHT);
        document.background = Some(Background::default_blank());
        document
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = Some(width);
        self.height = Some(height);
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    pub fn archived(&self) -> bool {
        self.archived
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
    }

    pub fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }

    pub fn set_owner(&mut self, owner: Option<OwnerId>) {
        self.owner = owner;
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn set_snapshot(&mut self, snapshot: Option<Snapshot>) {
        self.snapshot = snapshot;
    }

    pub fn apply_patch(&mut self, patch: DocumentPatch) {
        if let Some(snapshot) = patch.snapshot {
            self.snapshot = Some(snapshot);
        }
        if let Some(width) = patch.width {
            self.width = Some(width);
        }
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(background) = patch.background {
            self.background = Some(background);
        }
    }
}

/// Partial update payload for `DocumentStore::update`. `None` fields are left
/// untouched on the remote record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub snapshot: Option<Snapshot>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<Background>,
}
