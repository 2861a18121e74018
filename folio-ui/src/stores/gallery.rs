//! Gallery state hook: selection, hover, and the shared slideshow timer

use dioxus::prelude::*;
use folio_common::config::DEFAULT_SLIDE_INTERVAL_MS;
use folio_common::{category_counts, Catalog, GalleryEvent, GalleryFrame, GalleryState};
use tracing::{info, warn};

/// Copyable handle to the gallery state of one mounted view.
///
/// Input callbacks call `select_category`/`pointer_enter`/`pointer_leave`;
/// the timer task spawned by `use_gallery` is the only other writer.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryHandle {
    state: Signal<GalleryState>,
}

impl GalleryHandle {
    pub fn select_category(&self, label: String) {
        let mut state = self.state;
        state.write().apply(GalleryEvent::SelectCategory(label));
    }

    pub fn pointer_enter(&self, id: String) {
        let mut state = self.state;
        state.write().apply(GalleryEvent::PointerEnter(id));
    }

    pub fn pointer_leave(&self, id: String) {
        let mut state = self.state;
        state.write().apply(GalleryEvent::PointerLeave(id));
    }

    pub fn frame(&self) -> GalleryFrame {
        self.state.read().frame()
    }

    pub fn selected(&self) -> String {
        self.state.read().selected().to_string()
    }

    pub fn category_options(&self) -> Vec<String> {
        self.state.read().catalog().category_options()
    }

    /// Item count per entry of `category_options`
    pub fn category_counts(&self) -> Vec<usize> {
        let state = self.state.read();
        let catalog = state.catalog();
        category_counts(catalog.items(), &catalog.category_options())
    }
}

/// Create the gallery state for the calling component and start its timer.
///
/// The timer task is spawned once, on first render, and cancelled when the
/// component unmounts. All slideshows advance on that one timer.
pub fn use_gallery(catalog: Catalog, initial_category: String, interval_ms: u64) -> GalleryHandle {
    let mut state =
        use_signal(move || GalleryState::with_selection(catalog, initial_category));

    let timer = use_hook(move || {
        let interval_ms = timer_interval_ms(interval_ms);
        info!("Slideshow timer started (interval: {} ms)", interval_ms);
        spawn(async move {
            loop {
                sleep_ms(interval_ms).await;
                state.write().apply(GalleryEvent::Tick);
            }
        })
    });

    use_drop(move || {
        timer.cancel();
        info!("Slideshow timer stopped");
    });

    GalleryHandle { state }
}

/// A zero interval would spin the timer loop; fall back to the default.
fn timer_interval_ms(requested: u64) -> u64 {
    if requested == 0 {
        warn!(
            "Slideshow interval of 0 ms ignored, using {} ms",
            DEFAULT_SLIDE_INTERVAL_MS
        );
        return DEFAULT_SLIDE_INTERVAL_MS;
    }
    requested
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        assert_eq!(timer_interval_ms(0), DEFAULT_SLIDE_INTERVAL_MS);
    }

    #[test]
    fn test_nonzero_interval_is_kept() {
        assert_eq!(timer_interval_ms(1), 1);
        assert_eq!(timer_interval_ms(2000), 2000);
    }
}
