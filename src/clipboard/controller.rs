//! Copy controller
//!
//! Owns the status/error pair for one copy surface and drives the configured
//! strategies through [`interrupt`]. Every invocation and every reset draws a
//! new sequence number; events from an attempt whose number is no longer the
//! latest are dropped, so a stale attempt can never overwrite newer state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::interrupt::interrupt;
use super::method::CopyMethod;
use super::platform::ClipboardPlatform;
use super::status::{CopyEvent, CopyState};
use super::strategy;
use super::target::CopyTarget;

type Listener = Box<dyn FnMut(&CopyState)>;

pub struct CopyController {
    platform: Rc<dyn ClipboardPlatform>,
    methods: RefCell<Vec<CopyMethod>>,
    state: RefCell<CopyState>,
    sequence: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

impl CopyController {
    pub fn new(platform: Rc<dyn ClipboardPlatform>, methods: Vec<CopyMethod>) -> Self {
        Self {
            platform,
            methods: RefCell::new(methods),
            state: RefCell::new(CopyState::default()),
            sequence: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the current status and error
    pub fn state(&self) -> CopyState {
        self.state.borrow().clone()
    }

    pub fn methods(&self) -> Vec<CopyMethod> {
        self.methods.borrow().clone()
    }

    /// Replace the method list used by subsequent invocations
    pub fn set_methods(&self, methods: Vec<CopyMethod>) {
        if *self.methods.borrow() != methods {
            *self.methods.borrow_mut() = methods;
        }
    }

    /// Register a listener called after every applied state change
    ///
    /// Listeners must not subscribe from inside their own callback.
    pub fn subscribe(&self, listener: impl FnMut(&CopyState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Copy `target` with the configured methods, first listed first
    ///
    /// Resolves once a method succeeds or all of them were tried. Failures
    /// only surface through the state, never as a returned error.
    pub async fn copy(&self, target: CopyTarget) {
        let seq = self.next_sequence();
        let methods = self.methods();
        log::debug!("Copy #{} with methods {:?}", seq, methods);

        let emit = |event: CopyEvent| self.apply(seq, event);
        let platform = self.platform.as_ref();
        let target = &target;
        let emit = &emit;

        let thunks = methods.into_iter().map(|method| {
            move || strategy::execute(method, platform, target, emit)
        });

        if interrupt(thunks, |copied| *copied).await.is_none() {
            log::debug!("Copy #{} finished without success", seq);
        }
    }

    /// Return to the unset state and invalidate any in-flight attempt
    pub fn reset(&self) {
        self.next_sequence();
        self.state.borrow_mut().clear();
        self.notify();
    }

    fn next_sequence(&self) -> u64 {
        let seq = self.sequence.get() + 1;
        self.sequence.set(seq);
        seq
    }

    fn apply(&self, seq: u64, event: CopyEvent) {
        if seq != self.sequence.get() {
            log::debug!("Discarding stale copy event from #{}: {:?}", seq, event);
            return;
        }
        self.state.borrow_mut().apply(event);
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.state();
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(&snapshot);
        }
    }
}
