//! Recording handler invocations.
//!
//! Command handlers must be `'static`, so tests hand them a clone of a
//! [`CallLog`] and inspect the original afterwards.
//!
//! # Examples
//!
//! ```
//! use argp_test_helpers::calls::CallLog;
//!
//! let log = CallLog::new();
//! let sink = log.clone();
//! let mut handler = move |value: &u64| sink.record(*value);
//! handler(&7);
//! assert_eq!(log.count(), 1);
//! assert_eq!(log.last(), Some(7));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, append-only record of calls.
#[derive(Debug)]
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> CallLog<T> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one call.
    pub fn record(&self, entry: T) {
        self.entries.borrow_mut().push(entry);
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: Clone> CallLog<T> {
    /// Copies every recorded call, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }

    /// Copies the most recent call.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.entries.borrow().last().cloned()
    }
}
