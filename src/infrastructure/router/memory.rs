//! In-memory history router
//!
//! `navigate` only queues the request. The host loop calls [`MemoryRouter::poll`]
//! to commit queued locations, then feeds the new path back into the
//! synchronizer.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::ports::Router;

/// History-stack router with a pending navigation queue
#[derive(Debug)]
pub struct MemoryRouter {
    history: RefCell<Vec<String>>,
    pending: RefCell<VecDeque<String>>,
}

impl MemoryRouter {
    /// Start at `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            history: RefCell::new(vec![initial_path.into()]),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Commit the oldest queued navigation.
    ///
    /// Returns the new current path, or `None` when nothing was queued.
    /// Navigating to the current path is committed without growing history.
    pub fn poll(&self) -> Option<String> {
        let next = self.pending.borrow_mut().pop_front()?;
        let mut history = self.history.borrow_mut();
        if history.last() != Some(&next) {
            history.push(next.clone());
        }
        Some(next)
    }

    /// Commit every queued navigation, returning the final path if any moved
    pub fn poll_all(&self) -> Option<String> {
        let mut last = None;
        while let Some(path) = self.poll() {
            last = Some(path);
        }
        last
    }

    /// Step back one entry. Returns the new current path, or `None` at the
    /// start of history.
    pub fn back(&self) -> Option<String> {
        let mut history = self.history.borrow_mut();
        if history.len() < 2 {
            return None;
        }
        history.pop();
        history.last().cloned()
    }

    /// Committed locations, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Number of queued, uncommitted navigations
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, path: &str) {
        self.pending.borrow_mut().push_back(path.to_string());
    }
}
