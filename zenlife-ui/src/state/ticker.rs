//! Countdown ticker
//!
//! Periodic recomputation of the bills page's countdown board. The interval
//! is armed when the page mounts, replaced whenever the bill list changes,
//! and dropped when the page unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;
use zenlife::bills::{BillTracker, CountdownBoard, SystemClock};

/// Shared holder for at most one live timer. Dropping a timer cancels it,
/// so arming a new one stops the previous one.
pub struct TimerSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    /// Store `timer`, dropping any previous one; true if one was replaced
    pub fn arm(&self, timer: T) -> bool {
        let previous = self.0.borrow_mut().replace(timer);
        previous.is_some()
    }

    /// Take the live timer out of the slot, if any
    pub fn disarm(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }

    pub fn is_armed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl<T> Clone for TimerSlot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep a countdown board in sync with `bills` and the wall clock
pub fn use_countdown_ticker(
    bills: RwSignal<BillTracker>,
    tick_interval_ms: u32,
    due_soon_days: i64,
) -> ReadSignal<CountdownBoard> {
    let (board, set_board) = create_signal(CountdownBoard::default());
    let timer = TimerSlot::<Interval>::new();

    let slot = timer.clone();
    create_effect(move |_| {
        let revision = bills.with(|b| b.revision());

        let refresh = move || {
            let next = bills.with_untracked(|b| b.tick_with(&SystemClock, due_soon_days));
            set_board.set(next);
        };
        refresh();

        let replaced = slot.arm(Interval::new(tick_interval_ms, refresh));
        tracing::debug!(revision, replaced, "Countdown timer armed");
    });

    on_cleanup(move || {
        if timer.disarm().is_some() {
            tracing::debug!("Countdown timer stopped");
        }
    });

    board
}
