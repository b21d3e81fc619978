// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation bridge: turns the engine's raw notifications into one
//! normalized "something changed" stream.
//!
//! The bridge performs no deduplication or debouncing (that is the
//! auto-save coordinator's job), so consumers that need every raw event
//! (e.g. a version counter driving a live preview) can attach to the same
//! bus independently.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::history::ReplayFlag;
use crate::scene::{EventBus, SceneEvent, SceneEventKind, SubscriberId};

/// One raw mutation notification, normalized for the session.
///
/// `replaying` is the replay-guard state sampled when the engine emitted the
/// event. The host may drain the bridge after a replay already completed, so
/// the flag has to ride along with the event rather than be read at drain
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSignal {
    event: SceneEvent,
    replaying: bool,
}

impl ChangeSignal {
    pub fn event(&self) -> &SceneEvent {
        &self.event
    }

    pub fn kind(&self) -> SceneEventKind {
        self.event.kind()
    }

    pub fn replaying(&self) -> bool {
        self.replaying
    }
}

/// Subscribes to the engine's fixed set of mutation notification kinds and
/// queues every one of them. Unsubscribes automatically on drop.
pub struct MutationBridge {
    bus: EventBus,
    subscriber_id: SubscriberId,
    queue: Rc<RefCell<VecDeque<ChangeSignal>>>,
}

impl MutationBridge {
    pub fn attach(bus: &EventBus, replay: ReplayFlag) -> Self {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&queue);
        let subscriber_id = bus.subscribe(
            &SceneEventKind::MUTATIONS,
            Box::new(move |event| {
                sink.borrow_mut().push_back(ChangeSignal {
                    event: event.clone(),
                    replaying: replay.get(),
                });
            }),
        );
        Self {
            bus: bus.clone(),
            subscriber_id,
            queue,
        }
    }

    /// Hands over every queued signal, oldest first.
    pub fn drain(&mut self) -> Vec<ChangeSignal> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Drop for MutationBridge {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscriber_id);
    }
}
