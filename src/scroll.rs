use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A section becomes a candidate once its top crosses the line one third
/// down the viewport.
pub const ACTIVATION_DIVISOR: u32 = 3;
/// Offset after which the navbar switches to its opaque style.
pub const SCROLLED_THRESHOLD: u32 = 50;

/// Window scroll state in whole CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub offset: u32,
    pub viewport_height: u32,
    pub document_height: u32,
}

impl ScrollMetrics {
    pub fn new(offset: u32, viewport_height: u32, document_height: u32) -> Self {
        Self {
            offset,
            viewport_height,
            document_height,
        }
    }

    pub fn max_offset(&self) -> u32 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    pub fn at_bottom(&self) -> bool {
        let max = self.max_offset();
        max > 0 && self.offset >= max
    }

    pub fn activation_line(&self) -> u32 {
        self.offset
            .saturating_add(self.viewport_height / ACTIVATION_DIVISOR)
    }

    /// Percentage of the scrollable height already scrolled, in `[0, 100]`.
    /// A page that cannot scroll reports 0.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 0.0;
        }
        (self.offset.min(max) as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }
}

/// Absolute top of a mounted section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: u32,
}

/// Picks the section in view. `sections` must be in document order.
///
/// At the top of the page the first section wins and at the bottom the last
/// one does. In between, the last section whose top has crossed the
/// activation line is chosen, so when two sections qualify the later one
/// wins. Returns `None` only when `sections` is empty.
pub fn active_section(metrics: &ScrollMetrics, sections: &[SectionBounds]) -> Option<&'static str> {
    let first = sections.first()?;
    if metrics.offset == 0 {
        return Some(first.id);
    }
    if metrics.at_bottom() {
        return sections.last().map(|s| s.id);
    }
    let line = metrics.activation_line();
    let current = sections
        .iter()
        .rev()
        .find(|s| s.top <= line)
        .unwrap_or(first);
    Some(current.id)
}

type Handler = Arc<dyn Fn(ScrollMetrics) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    last: Option<ScrollMetrics>,
}

/// Fan-out point for window scroll updates.
///
/// Handlers stay registered for as long as the returned
/// [`ScrollSubscription`] is alive.
#[derive(Clone, Default)]
pub struct ScrollHub {
    inner: Arc<Mutex<HubInner>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`. If metrics were already published the handler is
    /// called once with the latest value before this returns.
    pub fn subscribe<F>(&self, handler: F) -> ScrollSubscription
    where
        F: Fn(ScrollMetrics) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let (id, last) = {
            let mut inner = self
                .inner
                .lock()
                .expect("should be able to acquire scroll hub lock");
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler.clone()));
            (id, inner.last)
        };
        if let Some(metrics) = last {
            handler(metrics);
        }
        ScrollSubscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn publish(&self, metrics: ScrollMetrics) {
        // call outside the lock so handlers may subscribe or unsubscribe
        let handlers = {
            let mut inner = self
                .inner
                .lock()
                .expect("should be able to acquire scroll hub lock");
            inner.last = Some(metrics);
            inner
                .handlers
                .iter()
                .map(|(_, h)| h.clone())
                .collect::<Vec<_>>()
        };
        for handler in handlers {
            handler(metrics);
        }
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<ScrollMetrics> {
        self.inner
            .lock()
            .expect("should be able to acquire scroll hub lock")
            .last
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("should be able to acquire scroll hub lock")
            .handlers
            .len()
    }
}

/// Registration guard returned by [`ScrollHub::subscribe`]. Dropping it
/// unregisters the handler.
#[must_use = "dropping the subscription unregisters the handler immediately"]
pub struct ScrollSubscription {
    hub: Weak<Mutex<HubInner>>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.hub.upgrade() else {
            return;
        };
        // a poisoned hub must still forget the handler
        let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.handlers.retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

    use super::*;

    const VIEWPORT: u32 = 900;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home", top: 0 },
            SectionBounds { id: "about", top: 900 },
            SectionBounds { id: "skills", top: 1800 },
            SectionBounds { id: "projects", top: 3000 },
            SectionBounds { id: "contact", top: 4900 },
        ]
    }

    fn at(offset: u32) -> ScrollMetrics {
        ScrollMetrics::new(offset, VIEWPORT, 5400)
    }

    #[test]
    fn test_top_of_page_is_first_section() {
        assert_eq!(active_section(&at(0), &sections()), Some("home"));
        // even when a tiny first section puts the next one above the line
        let squeezed = [
            SectionBounds { id: "home", top: 0 },
            SectionBounds { id: "about", top: 10 },
        ];
        assert_eq!(active_section(&at(0), &squeezed), Some("home"));
    }

    #[test]
    fn test_exactly_one_section_for_every_offset() {
        let sections = sections();
        let ids = sections.iter().map(|s| s.id).collect::<Vec<_>>();
        for offset in (0..=4500).step_by(25) {
            let active = active_section(&at(offset), &sections);
            assert!(
                active.is_some_and(|id| ids.contains(&id)),
                "offset {offset} gave {active:?}"
            );
        }
        assert_eq!(active_section(&at(100), &[]), None);
    }

    #[test]
    fn test_activation_line() {
        let sections = sections();
        // line sits at offset + 300
        assert_eq!(active_section(&at(599), &sections), Some("home"));
        assert_eq!(active_section(&at(600), &sections), Some("about"));
        assert_eq!(active_section(&at(1500), &sections), Some("skills"));
        assert_eq!(active_section(&at(2699), &sections), Some("skills"));
        assert_eq!(active_section(&at(2700), &sections), Some("projects"));
    }

    #[test]
    fn test_later_section_wins_when_both_qualify() {
        // about and skills both above the activation line
        let sections = [
            SectionBounds { id: "home", top: 0 },
            SectionBounds { id: "about", top: 400 },
            SectionBounds { id: "skills", top: 500 },
            SectionBounds { id: "contact", top: 3000 },
        ];
        assert_eq!(active_section(&at(300), &sections), Some("skills"));
    }

    #[test]
    fn test_bottom_of_page_is_last_section() {
        // contact is shorter than the viewport and never reaches the line
        assert_eq!(active_section(&at(4499), &sections()), Some("projects"));
        assert_eq!(active_section(&at(4500), &sections()), Some("contact"));
    }

    #[test]
    fn test_nothing_crossed_defaults_to_first() {
        let sections = [
            SectionBounds { id: "home", top: 2000 },
            SectionBounds { id: "about", top: 3000 },
        ];
        assert_eq!(active_section(&at(10), &sections), Some("home"));
    }

    #[test]
    fn test_progress_bounds_and_monotonicity() {
        assert_eq!(at(0).progress(), 0.0);
        assert_eq!(at(4500).progress(), 100.0);
        assert_eq!(at(9000).progress(), 100.0);
        assert_eq!(at(2250).progress(), 50.0);

        let mut prev = 0.0;
        for offset in (0..=6000).step_by(37) {
            let p = at(offset).progress();
            assert!((0.0..=100.0).contains(&p));
            assert!(p >= prev, "progress went backwards at {offset}");
            prev = p;
        }
    }

    #[test]
    fn test_progress_of_unscrollable_page() {
        let short = ScrollMetrics::new(0, 900, 600);
        assert_eq!(short.progress(), 0.0);
        assert!(!short.at_bottom());
    }

    #[test]
    fn test_scrolled_flag() {
        assert!(!at(0).is_scrolled());
        assert!(!at(50).is_scrolled());
        assert!(at(51).is_scrolled());
    }

    #[test]
    fn test_hub_delivers_until_dropped() {
        let hub = ScrollHub::new();
        let seen = Arc::new(AtomicU32::new(0));
        let calls = Arc::new(AtomicUsize::new(0));

        let sub = {
            let seen = seen.clone();
            let calls = calls.clone();
            hub.subscribe(move |m| {
                seen.store(m.offset, Ordering::SeqCst);
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert_eq!(hub.subscriber_count(), 1);

        hub.publish(at(120));
        assert_eq!(seen.load(Ordering::SeqCst), 120);

        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);
        hub.publish(at(800));
        assert_eq!(seen.load(Ordering::SeqCst), 120);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_late_subscriber_gets_latest_metrics() {
        let hub = ScrollHub::new();
        hub.publish(at(300));
        hub.publish(at(640));
        let seen = Arc::new(AtomicU32::new(0));
        let _sub = {
            let seen = seen.clone();
            hub.subscribe(move |m| seen.store(m.offset, Ordering::SeqCst))
        };
        assert_eq!(seen.load(Ordering::SeqCst), 640);
        assert_eq!(hub.last(), Some(at(640)));
    }

    #[test]
    fn test_poisoned_hub_still_unregisters() {
        let hub = ScrollHub::new();
        let sub = hub.subscribe(|_| {});
        let inner = hub.inner.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.lock().expect("should be able to acquire scroll hub lock");
            panic!("poison the hub");
        })
        .join();
        assert!(hub.inner.is_poisoned());

        drop(sub);
        let count = hub
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .len();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = ScrollHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        drop(sub);
    }
}
