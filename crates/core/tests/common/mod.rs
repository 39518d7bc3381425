#![allow(dead_code)]

use evtree_core::{Handler, Hook};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared call log for asserting invocation order
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn handler<A: 'static, R: Default + 'static>(&self, label: &str) -> Handler<A, R> {
        let log = self.clone();
        let label = label.to_string();
        Handler::new(move |_, _| {
            log.push(label.clone());
            R::default()
        })
    }

    pub fn hook(&self, label: &str) -> Hook {
        let log = self.clone();
        let label = label.to_string();
        Hook::new(move |_| log.push(label.clone()))
    }
}
