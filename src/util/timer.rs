// src/util/timer.rs
//! Fire-once timers that post an [`AppEvent`] back into the event loop.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::event::{AppEvent, Event};

/// Aborted when dropped, so a timer never outlives the screen that owns it.
#[derive(Debug)]
pub struct OneShot {
    handle: JoinHandle<()>,
}

impl OneShot {
    pub fn spawn(delay: Duration, sender: mpsc::UnboundedSender<Event>, event: AppEvent) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Event::App(event));
        });
        Self { handle }
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
