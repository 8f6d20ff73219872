// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, fmt, rc::Rc};

use crate::Error;
use crate::reducer::Action;

type Callback = Rc<RefCell<dyn FnMut(&Action) -> Result<(), Error>>>;

/// Single-threaded action bus.
///
/// Actions are delivered to every subscriber in registration order, one at a
/// time. A dispatch runs to completion before the next one starts.
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    /// Creates a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Adds `callback` after the existing subscribers.
    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    /// Delivers `action`, stopping at the first subscriber that fails.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), Error> {
        for sub in &self.subscribers {
            (sub.borrow_mut())(action)?;
        }
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
