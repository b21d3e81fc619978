// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use super::{DocumentLoader, LoadOrigin, LoadPhase, RETRY_DELAY, SURFACE_RETRY_DELAY};
use crate::model::fixtures;
use crate::model::{Background, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::scene::{MemoryScene, SceneGraph};
use crate::store::test_utils::ScriptedStore;
use crate::store::StoreError;

fn loading(id: &str) -> DocumentLoader {
    let mut loader = DocumentLoader::new(fixtures::did(id));
    loader.begin();
    loader
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound {
        document_id: fixtures::did(id),
    }
}

#[test]
fn transient_not_found_is_retried_until_the_record_appears() {
    let mut store = ScriptedStore::new();
    store.script_get(Err(not_found("d1")));
    store.script_get(Err(not_found("d1")));
    store
        .inner_mut()
        .insert(fixtures::document_with_snapshot("d1", vec![fixtures::shape_node("n:a")]));

    let mut scene = MemoryScene::blank();
    let mut loader = loading("d1");
    let t0 = Instant::now();

    assert!(loader.tick(&mut store, &mut scene, t0).is_none());
    // Inside the retry delay nothing is attempted.
    assert!(loader.tick(&mut store, &mut scene, t0).is_none());
    assert_eq!(store.get_calls, 1);

    assert!(loader.tick(&mut store, &mut scene, t0 + RETRY_DELAY).is_none());
    let document = loader
        .tick(&mut store, &mut scene, t0 + RETRY_DELAY * 2)
        .expect("third attempt finds the record");

    assert_eq!(store.get_calls, 3);
    assert_eq!(loader.phase(), &LoadPhase::Loaded(LoadOrigin::Remote));
    assert_eq!(document.document_id(), &fixtures::did("d1"));
    assert_eq!(scene.nodes().len(), 1);
    assert_eq!(scene.width(), 800);
    assert_eq!(scene.height(), 600);
    assert_eq!(scene.renders(), 1);
}

#[test]
fn persistently_missing_record_falls_back_to_blank_baseline() {
    let mut store = ScriptedStore::new();
    for _ in 0..3 {
        store.script_get(Err(not_found("d1")));
    }
    let mut scene = MemoryScene::new(320, 240, Background::default_blank());
    let mut loader = loading("d1");

    let mut now = Instant::now();
    let mut document = None;
    while document.is_none() {
        document = loader.tick(&mut store, &mut scene, now);
        now += RETRY_DELAY;
    }

    assert_eq!(store.get_calls, 3);
    assert_eq!(loader.phase(), &LoadPhase::Loaded(LoadOrigin::BlankAfterMissing));
    let document = document.unwrap();
    assert_eq!(document.width(), Some(DEFAULT_WIDTH));
    assert!(document.snapshot().is_none());
    assert!(scene.nodes().is_empty());
    assert_eq!(scene.width(), DEFAULT_WIDTH);
    assert_eq!(scene.height(), DEFAULT_HEIGHT);
    assert_eq!(scene.background(), &Background::default_blank());
}

#[test]
fn backend_error_opens_blank_without_retrying() {
    let mut store = ScriptedStore::new();
    store.script_get(Err(StoreError::Backend {
        message: "gateway timeout".to_owned(),
    }));
    let mut scene = MemoryScene::blank();
    let mut loader = loading("d1");

    let document = loader
        .tick(&mut store, &mut scene, Instant::now())
        .expect("completes on the first tick");

    assert_eq!(store.get_calls, 1);
    assert!(matches!(
        loader.phase(),
        LoadPhase::Loaded(LoadOrigin::BlankAfterError { message }) if message.contains("gateway timeout")
    ));
    assert!(document.snapshot().is_none());
}

#[test]
fn load_waits_for_a_paint_surface_without_spending_attempts() {
    let mut store = ScriptedStore::new();
    store
        .inner_mut()
        .insert(fixtures::document_with_snapshot("d1", Vec::new()));
    let mut scene = MemoryScene::blank();
    scene.set_paint_ready(false);
    let mut loader = loading("d1");
    let t0 = Instant::now();

    assert!(loader.tick(&mut store, &mut scene, t0).is_none());
    assert!(loader
        .tick(&mut store, &mut scene, t0 + SURFACE_RETRY_DELAY)
        .is_none());
    assert_eq!(store.get_calls, 0);
    assert_eq!(loader.attempts(), 0);

    scene.set_paint_ready(true);
    let document = loader
        .tick(&mut store, &mut scene, t0 + SURFACE_RETRY_DELAY * 2)
        .expect("loads once the surface exists");
    assert_eq!(store.get_calls, 1);
    assert_eq!(document.document_id(), &fixtures::did("d1"));
}

#[test]
fn record_level_geometry_wins_over_snapshot_values() {
    let mut document = fixtures::document_with_snapshot("d1", vec![fixtures::shape_node("n:a")]);
    document.set_dimensions(1920, 1080);
    let mut store = ScriptedStore::new();
    store.inner_mut().insert(document);

    let mut scene = MemoryScene::blank();
    let mut loader = loading("d1");
    loader.tick(&mut store, &mut scene, Instant::now()).unwrap();

    assert_eq!(scene.width(), 1920);
    assert_eq!(scene.height(), 1080);
}

#[test]
fn loaded_loader_ignores_further_ticks() {
    let mut store = ScriptedStore::new();
    store
        .inner_mut()
        .insert(fixtures::document_with_snapshot("d1", Vec::new()));
    let mut scene = MemoryScene::blank();
    let mut loader = loading("d1");
    let t0 = Instant::now();

    assert!(loader.tick(&mut store, &mut scene, t0).is_some());
    assert!(loader.tick(&mut store, &mut scene, t0 + RETRY_DELAY).is_none());
    assert_eq!(store.get_calls, 1);

    // begin() after a completed load stays a no-op as well.
    loader.begin();
    assert!(loader.tick(&mut store, &mut scene, t0 + RETRY_DELAY).is_none());
    assert_eq!(loader.phase(), &LoadPhase::Loaded(LoadOrigin::Remote));
}
