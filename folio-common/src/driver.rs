//! Async event loop that owns a `GalleryState` off the UI thread
//!
//! A single task consumes user events from a queue and ticks from one shared
//! interval, applies them in arrival order, and publishes a fresh frame after
//! every change. Used by native hosts and tests; the web view drives the same
//! reducer from its own timer.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::gallery::{GalleryEvent, GalleryFrame, GalleryState};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("gallery driver has stopped")]
    Stopped,
    #[error("tick period must be greater than zero")]
    ZeroPeriod,
    #[error("gallery task failed: {0}")]
    Join(#[from] JoinError),
}

pub struct GalleryDriver {
    events: Option<mpsc::UnboundedSender<GalleryEvent>>,
    frames: watch::Receiver<GalleryFrame>,
    task: Option<JoinHandle<GalleryState>>,
}

impl GalleryDriver {
    /// Start the loop. Must be called inside a tokio runtime.
    pub fn spawn(state: GalleryState, period: Duration) -> Result<Self, DriverError> {
        if period.is_zero() {
            return Err(DriverError::ZeroPeriod);
        }
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (frames_tx, frames_rx) = watch::channel(state.frame());
        let task = tokio::spawn(run_gallery(state, period, events_rx, frames_tx));
        Ok(Self {
            events: Some(events_tx),
            frames: frames_rx,
            task: Some(task),
        })
    }

    pub fn send(&self, event: GalleryEvent) -> Result<(), DriverError> {
        let events = self.events.as_ref().ok_or(DriverError::Stopped)?;
        events.send(event).map_err(|_| DriverError::Stopped)
    }

    pub fn select_category(&self, label: impl Into<String>) -> Result<(), DriverError> {
        self.send(GalleryEvent::SelectCategory(label.into()))
    }

    /// Latest published frame
    pub fn frame(&self) -> GalleryFrame {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GalleryFrame> {
        self.frames.clone()
    }

    /// Close the event queue, stop the timer, and hand back the final state.
    pub async fn shutdown(mut self) -> Result<GalleryState, DriverError> {
        self.events.take();
        let task = self.task.take().ok_or(DriverError::Stopped)?;
        Ok(task.await?)
    }
}

impl Drop for GalleryDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Gallery driver dropped without shutdown, aborting");
            task.abort();
        }
    }
}

async fn run_gallery(
    mut state: GalleryState,
    period: Duration,
    mut events: mpsc::UnboundedReceiver<GalleryEvent>,
    frames: watch::Sender<GalleryFrame>,
) -> GalleryState {
    info!("Slideshow timer started (interval: {:?})", period);

    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            biased;
            received = events.recv() => match received {
                Some(event) => event,
                None => break,
            },
            _ = ticker.tick() => GalleryEvent::Tick,
        };

        let stop = event == GalleryEvent::Teardown;
        if state.apply(event) {
            frames.send_replace(state.frame());
        }
        if stop {
            break;
        }
    }

    state.apply(GalleryEvent::Teardown);
    info!(
        "Slideshow timer stopped after {} ticks",
        state.rotator().ticks()
    );
    state
}
