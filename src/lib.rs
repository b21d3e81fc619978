// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea: editing-session persistence and history core.
//!
//! This crate turns a live, mutable visual scene graph into an undo/redo
//! timeline and a durable remote document. The rendering engine and the
//! remote document store are collaborators reached through the `scene` and
//! `store` traits; everything here runs cooperatively on the host's UI
//! thread and is driven by `EditorSession::tick`.

pub mod autosave;
pub mod bridge;
pub mod codec;
pub mod history;
pub mod loader;
pub mod model;
pub mod scene;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
