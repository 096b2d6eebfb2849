//! Shared call journal for collaborator test doubles.

use std::cell::RefCell;
use std::rc::Rc;

/// One collaborator call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add { source: String, destination: String },
    Template { source: String, destination: String },
    ReplaceText { path: String, anchor: String, replacement: String },
    GetVersion { scope: String, name: String },
    AddDependency { name: String, version: String },
    AddDevDependency { name: String, version: String },
    AddScript { name: String, command: String },
}

/// Call journal shared between the doubles of one test.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Call>>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Destinations written by `add` or `template`, in call order.
    pub fn written_destinations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Add { destination, .. } | Call::Template { destination, .. } => {
                    Some(destination.clone())
                }
                _ => None,
            })
            .collect()
    }

    /// Position of the first call matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(predicate)
    }
}
