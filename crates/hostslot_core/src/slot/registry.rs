//! Slot registry: one namespace mapping slot ids to slot state.
//!
//! # Responsibility
//! - Own every slot's owner, render function and redraw subscribers.
//! - Create slots lazily on first reference and keep them for the registry's
//!   lifetime.
//!
//! # Invariants
//! - A render function is only present while an owner is set.
//! - Redraw callbacks run, and values displaced from a slot are dropped,
//!   after the registry borrow is released, so either may reach the registry
//!   again.
//! - Single-threaded: the registry is `!Send` and `!Sync`.

use crate::slot::content::RenderFn;
use crate::slot::handle::SlotHandle;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Forced-redraw callback registered by a mounted view instance.
///
/// Equality is pointer identity: unsubscribing needs the same callback value
/// (or a clone of it) that was subscribed.
#[derive(Clone)]
pub struct RedrawCallback(Rc<dyn Fn()>);

impl RedrawCallback {
    pub fn new(redraw: impl Fn() + 'static) -> Self {
        Self(Rc::new(redraw))
    }

    pub fn invoke(&self) {
        (self.0)()
    }

    pub fn same_as(&self, other: &RedrawCallback) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for RedrawCallback {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for RedrawCallback {}

impl Debug for RedrawCallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RedrawCallback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Slot {
    pub(crate) owner: Option<String>,
    pub(crate) render_fn: Option<RenderFn>,
    pub(crate) subscribers: Vec<RedrawCallback>,
}

/// Read-only view of one slot at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub slot_id: String,
    pub owner: Option<String>,
    pub has_render_fn: bool,
    pub subscriber_count: usize,
}

/// Shared slot namespace.
///
/// Clones share the same underlying slots; construct one per host and pass it
/// to whatever owns the UI lifecycle.
#[derive(Clone, Default)]
pub struct SlotRegistry {
    slots: Rc<RefCell<BTreeMap<String, Slot>>>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of `slot_id`, creating an empty slot when missing.
    pub fn slot(&self, slot_id: &str) -> SlotSnapshot {
        self.with_slot(slot_id, |slot| SlotSnapshot {
            slot_id: slot_id.to_string(),
            owner: slot.owner.clone(),
            has_render_fn: slot.render_fn.is_some(),
            subscriber_count: slot.subscribers.len(),
        })
    }

    /// Returns an accessor bound to one `(registrant, slot)` pair.
    pub fn handle(
        &self,
        registrant_id: impl Into<String>,
        slot_id: impl Into<String>,
    ) -> SlotHandle {
        SlotHandle::new(self.clone(), registrant_id.into(), slot_id.into())
    }

    /// Current owner of `slot_id`, if claimed.
    pub fn owner(&self, slot_id: &str) -> Option<String> {
        self.with_slot(slot_id, |slot| slot.owner.clone())
    }

    /// Render function currently installed on `slot_id`.
    pub fn render_fn(&self, slot_id: &str) -> Option<RenderFn> {
        self.with_slot(slot_id, |slot| slot.render_fn.clone())
    }

    /// Returns sorted ids of every slot referenced so far.
    pub fn slot_ids(&self) -> Vec<String> {
        self.slots.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Runs `f` against `slot_id`, creating the slot first when missing.
    ///
    /// `f` must not call back into the registry, directly or by dropping a
    /// render function or callback; hand displaced values back to the caller.
    pub(crate) fn with_slot<R>(&self, slot_id: &str, f: impl FnOnce(&mut Slot) -> R) -> R {
        let mut slots = self.slots.borrow_mut();
        let slot = slots.entry(slot_id.to_string()).or_default();
        f(slot)
    }
}

impl Debug for SlotRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotRegistry")
            .field("slots", &self.slots.borrow())
            .finish()
    }
}

/// Invokes callbacks in registration order.
pub(crate) fn notify(subscribers: &[RedrawCallback]) {
    for callback in subscribers {
        callback.invoke();
    }
}
