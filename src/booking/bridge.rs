use std::rc::Rc;

use log::debug;
use url::Url;

use crate::analytics::{AnalyticsEvent, AnalyticsQueue, VENDOR};
use crate::booking::message::LifecycleSignal;
use crate::config;

/// Delay between the completion event and the forced navigation. Long enough
/// for the analytics push to flush before the page context is discarded,
/// short enough that the visitor doesn't notice the hand-off.
pub const REDIRECT_DELAY_MS: u32 = 250;

/// A close arriving within this window of a completion is the widget's own
/// teardown artifact, not a visitor cancellation.
pub const CLOSE_COOLDOWN_MS: f64 = 2000.0;

pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Seam for the delayed top-level navigation, so tests can observe the URL
/// and delay instead of waiting on a real timer.
pub trait RedirectScheduler {
    fn schedule(&self, url: &str, delay_ms: u32);
}

/// What the message handler did, surfaced to the DOM layer so it knows
/// whether to stop further propagation of the underlying event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    UntrustedOrigin,
    Ignored,
    Opened,
    Completed,
    Closed,
    CloseSuppressed,
}

/// Per-page-session bridge between the scheduler widget's cross-window
/// messages and the analytics queue. All state lives on the instance and
/// resets with the page.
pub struct SchedulerBridge {
    initialized: bool,
    opened_at: Option<f64>,
    completed_at: Option<f64>,
    closed_at: Option<f64>,
    clock: Rc<dyn Clock>,
    queue: Rc<dyn AnalyticsQueue>,
    redirects: Rc<dyn RedirectScheduler>,
}

impl SchedulerBridge {
    pub fn new(
        clock: Rc<dyn Clock>,
        queue: Rc<dyn AnalyticsQueue>,
        redirects: Rc<dyn RedirectScheduler>,
    ) -> Self {
        Self {
            initialized: false,
            opened_at: None,
            completed_at: None,
            closed_at: None,
            clock,
            queue,
            redirects,
        }
    }

    /// Marks the bridge initialized. Returns `false` if it already was, in
    /// which case the caller must not register another set of listeners.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        true
    }

    /// A message origin is trusted only if it parses as a URL whose hostname
    /// ends with the vendor suffix. Unparseable origins are untrusted.
    pub fn trusted_origin(origin: &str) -> bool {
        match Url::parse(origin) {
            Ok(url) => url
                .host_str()
                .map_or(false, |host| host.ends_with(config::VENDOR_ORIGIN_SUFFIX)),
            Err(_) => false,
        }
    }

    /// Delegated-click path: a booking CTA was clicked somewhere on the page.
    pub fn record_cta_click(&self, location: &str) {
        self.queue.push(AnalyticsEvent::ButtonInteraction {
            location: location.to_owned(),
        });
    }

    pub fn handle_message(&mut self, origin: &str, signal: LifecycleSignal) -> MessageOutcome {
        if !Self::trusted_origin(origin) {
            debug!("dropping scheduler message from untrusted origin {origin}");
            return MessageOutcome::UntrustedOrigin;
        }
        match signal {
            LifecycleSignal::IframeLoaded => {
                let now = self.clock.now_ms();
                self.opened_at = Some(now);
                self.queue.push(AnalyticsEvent::SchedulerOpen {
                    vendor: VENDOR,
                    method: "scheduler_modal",
                    opened_at: now,
                });
                MessageOutcome::Opened
            }
            LifecycleSignal::Redirect { url } => {
                let now = self.clock.now_ms();
                self.completed_at = Some(now);
                self.queue.push(AnalyticsEvent::SchedulerComplete {
                    vendor: VENDOR,
                    method: "scheduler_confirmed",
                    redirect_url: url.clone(),
                });
                if let Some(url) = url {
                    self.redirects.schedule(&url, REDIRECT_DELAY_MS);
                } else {
                    debug!("redirect signal carried no url, staying on page");
                }
                MessageOutcome::Completed
            }
            LifecycleSignal::Close => {
                let now = self.clock.now_ms();
                self.closed_at = Some(now);
                let just_completed = match (self.completed_at, self.closed_at) {
                    (Some(completed), Some(closed)) => closed - completed < CLOSE_COOLDOWN_MS,
                    _ => false,
                };
                if just_completed {
                    debug!("suppressing close fired right after completion");
                    return MessageOutcome::CloseSuppressed;
                }
                debug!(
                    "scheduler closed, open duration {:?} ms",
                    self.opened_at.map(|opened| now - opened)
                );
                self.queue.push(AnalyticsEvent::SchedulerClosed {
                    vendor: VENDOR,
                    method: "scheduler_modal",
                    closed_at: now,
                });
                MessageOutcome::Closed
            }
            LifecycleSignal::Unknown => MessageOutcome::Ignored,
        }
    }
}
