// Snippet export action: copy, confirm, revert

use std::time::Duration;

use button_creator_core::{StyleConfig, TriggerLabel};
use gloo_timers::callback::Timeout;

use crate::{ClipboardBackend, ClipboardError, ClipboardService};

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Scheduler backed by `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Fire-and-forget: the handle is leaked so the timeout outlives this call
        Timeout::new(millis, task).forget();
    }
}

/// The "Create snippet" action
pub struct ExportAction<B: ClipboardBackend, S: Scheduler> {
    clipboard: ClipboardService<B>,
    scheduler: S,
    revert_delay: Duration,
}

impl<B: ClipboardBackend, S: Scheduler> ExportAction<B, S> {
    pub fn new(backend: B, scheduler: S, revert_delay: Duration) -> Self {
        Self {
            clipboard: ClipboardService::new(backend),
            scheduler,
            revert_delay,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn revert_delay(&self) -> Duration {
        self.revert_delay
    }

    /// Copy the current snippet and flip the trigger label.
    ///
    /// `on_label` receives [`TriggerLabel::Copied`] immediately and
    /// [`TriggerLabel::Idle`] once the revert delay has elapsed. A failed
    /// copy is returned to the caller, the label still changes.
    pub fn trigger<F>(&self, config: &StyleConfig, on_label: F) -> Result<(), ClipboardError>
    where
        F: Fn(TriggerLabel) + 'static,
    {
        let copied = self.clipboard.copy_snippet(config);
        tracing::debug!(ok = copied.is_ok(), delay_ms = ?self.revert_delay.as_millis(), "export triggered");

        on_label(TriggerLabel::Copied);
        self.scheduler
            .schedule_once(self.revert_delay, Box::new(move || on_label(TriggerLabel::Idle)));

        copied
    }
}
