use crate::counter::{CounterAction, CounterState, CounterStore};
use crate::store::Subscription;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Screen-side view of the counter store.
///
/// Holds no state of its own beyond UI bookkeeping: everything rendered is
/// pulled from the store, and every change goes through `dispatch`.
pub struct App {
    store: Arc<CounterStore>,
    /// Redraw observer registration, released on drop.
    subscription: Subscription,
    /// Raised by the store observer and by resizes; cleared on draw.
    needs_redraw: Arc<AtomicBool>,
    increase_step: i64,
    should_quit: bool,
    last_error: Option<String>,
}

impl App {
    pub fn new(store: Arc<CounterStore>, increase_step: i64) -> Self {
        let needs_redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_redraw);
        let subscription = store.subscribe(move || flag.store(true, Ordering::Release));

        Self {
            store,
            subscription,
            needs_redraw,
            increase_step,
            should_quit: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> Arc<CounterState> {
        self.store.get_state()
    }

    pub fn dispatch(&mut self, action: CounterAction) {
        match self.store.dispatch(action) {
            Ok(action) => {
                tracing::debug!(?action, "Dispatched action");
                if self.last_error.take().is_some() {
                    self.request_redraw();
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Dispatch failed");
                self.last_error = Some(err.to_string());
                self.request_redraw();
            }
        }
    }

    pub fn increase_step(&self) -> i64 {
        self.increase_step
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::AcqRel)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{counter_store, increase, toggle_switch};

    fn app_with(initial: CounterState) -> (App, Arc<CounterStore>) {
        let store = Arc::new(counter_store(Some(initial)).unwrap());
        (App::new(Arc::clone(&store), 1), store)
    }

    #[test]
    fn first_frame_is_always_drawn() {
        let (app, _) = app_with(CounterState::default());
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn dispatch_marks_redraw_through_observer() {
        let (mut app, _) = app_with(CounterState::default());
        app.take_redraw();

        app.dispatch(toggle_switch());

        assert!(app.take_redraw());
        assert!(app.state().toggle);
    }

    #[test]
    fn dispatch_from_elsewhere_also_marks_redraw() {
        let (app, store) = app_with(CounterState::default());
        app.take_redraw();

        store.dispatch(increase(2)).unwrap();

        assert!(app.take_redraw());
        assert_eq!(app.state().counter, 2);
    }

    #[test]
    fn failed_dispatch_records_error_and_keeps_state() {
        let (mut app, _) = app_with(CounterState::new(false, i64::MAX));

        app.dispatch(increase(1));

        assert!(app.last_error().is_some_and(|e| e.contains("overflow")));
        assert_eq!(app.state().counter, i64::MAX);
    }

    #[test]
    fn successful_dispatch_clears_error() {
        let (mut app, _) = app_with(CounterState::new(false, i64::MAX));
        app.dispatch(increase(1));

        app.dispatch(toggle_switch());

        assert!(app.last_error().is_none());
    }

    #[test]
    fn drop_releases_observer() {
        let (app, store) = app_with(CounterState::default());
        assert_eq!(store.subscriber_count(), 1);
        drop(app);
        assert_eq!(store.subscriber_count(), 0);
    }
}
