//! Recent-event log shown under the menu.
//!
//! Stderr logging would tear the raw-mode screen, so in interactive mode
//! events are kept in a small ring buffer and drawn with the menu.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use apiconsole::infrastructure::events::format_event;
use apiconsole::{NavigationEvent, NavigationEventSink};

#[derive(Debug, Clone)]
pub struct EventLog {
    lines: Rc<RefCell<VecDeque<String>>>,
    capacity: usize,
    detailed: bool,
}

impl EventLog {
    pub fn new(capacity: usize, detailed: bool) -> Self {
        Self {
            lines: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity,
            detailed,
        }
    }

    /// A sink writing into this log
    pub fn sink(&self) -> Box<dyn NavigationEventSink> {
        Box::new(self.clone())
    }

    /// Logged lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().iter().cloned().collect()
    }
}

impl NavigationEventSink for EventLog {
    fn on_event(&self, event: NavigationEvent) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.borrow_mut();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(format_event(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
