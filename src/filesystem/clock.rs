use std::time::SystemTime;

/// Source of modification timestamps for tree nodes.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, SystemTime};

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Rc<Cell<SystemTime>>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000))),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }

        pub fn rewind(&self, by: Duration) {
            self.now.set(self.now.get() - by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> SystemTime {
            self.now.get()
        }
    }
}
