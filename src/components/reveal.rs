//! Scroll reveal: content starts hidden and fades in once, the first time it
//! enters the viewport.
//!
//! The platform's visibility detection is abstracted behind
//! [ViewportObserver]. The platform calls [ScrollReveal::on_intersection] with
//! the entries it observed, and [ScrollReveal::poll] once time has passed so a
//! delayed reveal can complete.

use crate::config::RevealConfig;
use crate::highlight::escape_html;
use std::time::{Duration, Instant};

const HIDDEN_CLASS: &str = "scroll-hidden";
const REVEALED_CLASS: &str = "animate-fade-in-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// One visibility change reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Visibility detection capability
pub trait ViewportObserver {
    fn observe(&mut self, target: ElementId, options: &ObserverOptions);
    fn unobserve(&mut self, target: ElementId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Scheduled { at: Instant },
    Revealed,
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    element: ElementId,
    delay: Duration,
    options: ObserverOptions,
    state: RevealState,
    observing: bool,
    /// Extra classes emitted next to the reveal class
    class: Option<String>,
}

impl ScrollReveal {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            delay: Duration::ZERO,
            options: ObserverOptions::default(),
            state: RevealState::Hidden,
            observing: false,
            class: None,
        }
    }

    pub fn from_config(element: ElementId, config: &RevealConfig) -> Self {
        Self {
            delay: config.delay(),
            options: ObserverOptions {
                threshold: config.threshold,
                root_margin: config.root_margin.clone(),
            },
            ..Self::new(element)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = if class.trim().is_empty() {
            None
        } else {
            Some(class)
        };
        self
    }

    /// Start watching the element. No-op once revealed or already watching.
    pub fn mount(&mut self, observer: &mut dyn ViewportObserver) {
        if self.observing || self.state != RevealState::Hidden {
            return;
        }
        observer.observe(self.element, &self.options);
        self.observing = true;
    }

    /// Stop watching. A reveal that is already scheduled still completes.
    pub fn unmount(&mut self, observer: &mut dyn ViewportObserver) {
        if self.observing {
            observer.unobserve(self.element);
            self.observing = false;
        }
    }

    /// Handle a batch of intersection entries.
    ///
    /// The first intersecting entry for this element schedules the reveal at
    /// `now + delay` and stops observation; later entries are ignored.
    pub fn on_intersection(
        &mut self,
        observer: &mut dyn ViewportObserver,
        entries: &[IntersectionEntry],
        now: Instant,
    ) {
        if !self.observing || self.state != RevealState::Hidden {
            return;
        }
        let entered = entries
            .iter()
            .any(|e| e.target == self.element && e.is_intersecting);
        if !entered {
            return;
        }

        self.state = RevealState::Scheduled {
            at: now + self.delay,
        };
        tracing::debug!(element = self.element.0, delay_ms = self.delay.as_millis() as u64, "reveal scheduled");
        self.unmount(observer);
        self.poll(now);
    }

    /// Complete a scheduled reveal whose time has come. Returns whether the
    /// element is revealed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let RevealState::Scheduled { at } = self.state {
            if now >= at {
                self.state = RevealState::Revealed;
            }
        }
        self.is_revealed()
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn class_name(&self) -> &'static str {
        if self.is_revealed() {
            REVEALED_CLASS
        } else {
            HIDDEN_CLASS
        }
    }

    /// Wrap already-rendered markup in the reveal container
    pub fn render(&self, inner: &str) -> String {
        let class = match &self.class {
            Some(extra) => format!("{} {}", self.class_name(), escape_html(extra)),
            None => self.class_name().to_string(),
        };
        format!(
            "<div class=\"{}\" data-reveal-id=\"{}\">\n{}</div>\n",
            class, self.element.0, inner
        )
    }
}
