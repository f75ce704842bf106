use gloo_timers::callback::Timeout;

/// One-shot delayed callbacks. Dropping the returned handle cancels the callback.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    type Key = (u64, u64);

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        timers: BTreeMap<Key, Box<dyn FnOnce()>>,
    }

    /// Virtual clock for tests. Time only moves through `advance_to`/`advance_by`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
        leaky: bool,
    }

    pub struct ManualHandle {
        key: Key,
        queue: Weak<RefCell<Queue>>,
        cancel_on_drop: bool,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if !self.cancel_on_drop {
                return;
            }
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().timers.remove(&self.key);
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Handles that never cancel, like a host whose clearTimeout lost a race.
        pub fn leaky() -> Self {
            Self {
                leaky: true,
                ..Self::default()
            }
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().timers.len()
        }

        pub fn advance_by(&self, ms: u64) {
            let target = self.now() + ms;
            self.advance_to(target);
        }

        /// Fires every timer due at or before `target`, in order, with the clock set to each fire time.
        pub fn advance_to(&self, target: u64) {
            loop {
                let due = {
                    let mut queue = self.queue.borrow_mut();
                    match queue.timers.keys().next().copied() {
                        Some(key) if key.0 <= target => {
                            queue.now = key.0;
                            queue.timers.remove(&key)
                        }
                        _ => None,
                    }
                };
                match due {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            let mut queue = self.queue.borrow_mut();
            queue.now = queue.now.max(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let key = (queue.now + u64::from(delay_ms), queue.next_id);
            queue.next_id += 1;
            queue.timers.insert(key, callback);
            ManualHandle {
                key,
                queue: Rc::downgrade(&self.queue),
                cancel_on_drop: !self.leaky,
            }
        }
    }

    mod tests {
        use std::cell::RefCell;
        use std::rc::Rc;

        use super::*;

        #[test]
        fn fires_in_due_order_and_cancels_on_drop() {
            let clock = ManualScheduler::new();
            let fired = Rc::new(RefCell::new(Vec::new()));

            let log = fired.clone();
            let _late = clock.schedule(200, Box::new(move || log.borrow_mut().push("late")));
            let log = fired.clone();
            let _early = clock.schedule(100, Box::new(move || log.borrow_mut().push("early")));
            let log = fired.clone();
            let cancelled = clock.schedule(150, Box::new(move || log.borrow_mut().push("cancelled")));
            drop(cancelled);

            assert_eq!(clock.pending(), 2);
            clock.advance_to(199);
            assert_eq!(*fired.borrow(), vec!["early"]);
            clock.advance_by(1);
            assert_eq!(*fired.borrow(), vec!["early", "late"]);
            assert_eq!(clock.now(), 200);
            assert_eq!(clock.pending(), 0);
        }

        #[test]
        fn leaky_handles_keep_their_timer() {
            let clock = ManualScheduler::leaky();
            let fired = Rc::new(RefCell::new(0));
            let count = fired.clone();
            drop(clock.schedule(10, Box::new(move || *count.borrow_mut() += 1)));
            clock.advance_by(10);
            assert_eq!(*fired.borrow(), 1);
        }
    }
}
