//! Home page state and lifecycle
//!
//! [`HomePage`] holds everything the page renders: the carousel, the featured
//! performers and the schedule. It only changes through [`HomePage::handle`]
//! (timer ticks, fetch completion) and the manual carousel controls, all
//! called from one consumer loop, so transitions are applied one at a time
//! against the current state.
//!
//! [`mount`] acquires the page's resources: the auto-advance timer and the
//! one-shot activities fetch. The returned [`Mount`] releases the timer on
//! [`Mount::unmount`] or drop. The fetch is not cancelled; if it completes
//! after unmount its result is dropped with the closed channel.

use crate::activities::{load_schedule, ActivitiesClient};
use crate::carousel::{Carousel, ImageSet};
use crate::model::{Performer, ScheduleEntry};
use crate::ticker::AutoAdvance;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events delivered to the page from its background resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Auto-advance timer fired
    Tick,
    /// Activities fetch finished (empty on failure)
    ScheduleLoaded(Vec<ScheduleEntry>),
}

/// State of the home page
#[derive(Debug, Clone)]
pub struct HomePage {
    carousel: Carousel,
    performers: Vec<Performer>,
    schedule: Vec<ScheduleEntry>,
}

impl HomePage {
    pub fn new(images: ImageSet, performers: Vec<Performer>) -> Self {
        Self {
            carousel: Carousel::new(images),
            performers,
            schedule: Vec::new(),
        }
    }

    /// Apply an event from the page's background resources
    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Tick => self.carousel.advance(),
            PageEvent::ScheduleLoaded(entries) => {
                tracing::debug!("Schedule updated ({} entries)", entries.len());
                self.schedule = entries;
            }
        }
    }

    /// Manual "next image" control
    pub fn next_image(&mut self) {
        self.carousel.advance();
    }

    /// Manual "previous image" control
    pub fn prev_image(&mut self) {
        self.carousel.retreat();
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn performers(&self) -> &[Performer] {
        &self.performers
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }
}

/// Resources held while the page is mounted
#[derive(Debug)]
pub struct Mount {
    timer: AutoAdvance,
    fetch: JoinHandle<()>,
}

/// Mount the page: start the auto-advance timer and issue the activities fetch
///
/// Both resources report back through `tx`. Must be called from within a
/// Tokio runtime.
pub fn mount(
    advance_interval: Duration,
    client: ActivitiesClient,
    tx: mpsc::Sender<PageEvent>,
) -> Mount {
    let timer = AutoAdvance::start(advance_interval, tx.clone(), PageEvent::Tick);

    let fetch = tokio::spawn(async move {
        let entries = load_schedule(&client).await;
        if tx.send(PageEvent::ScheduleLoaded(entries)).await.is_err() {
            tracing::debug!("Page unmounted before activities arrived, dropping schedule");
        }
    });

    tracing::info!(
        "Home page mounted (auto-advance every {} ms)",
        advance_interval.as_millis()
    );

    Mount { timer, fetch }
}

impl Mount {
    /// Whether the auto-advance timer is still running
    pub fn is_mounted(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether the one-shot activities fetch has completed
    pub fn fetch_finished(&self) -> bool {
        self.fetch.is_finished()
    }

    /// Release the page's timer
    pub fn unmount(mut self) {
        self.timer.stop();
        tracing::info!("Home page unmounted");
    }
}
