//! Per-registrant accessor over one slot.
//!
//! Ownership is advisory: the first registrant to claim an unclaimed slot
//! owns it until it releases. Calls that need ownership silently do nothing
//! for anyone else.

use crate::slot::content::RenderFn;
use crate::slot::registry::{notify, RedrawCallback, SlotRegistry};
use log::debug;

/// Accessor bound to `(registrant_id, slot_id)`.
///
/// Holds no slot state; every call goes through the shared registry.
#[derive(Debug, Clone)]
pub struct SlotHandle {
    registry: SlotRegistry,
    registrant_id: String,
    slot_id: String,
}

impl SlotHandle {
    pub(crate) fn new(registry: SlotRegistry, registrant_id: String, slot_id: String) -> Self {
        Self {
            registry,
            registrant_id,
            slot_id,
        }
    }

    pub fn registrant_id(&self) -> &str {
        &self.registrant_id
    }

    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    /// Whether anyone owns the slot.
    pub fn is_claimed(&self) -> bool {
        self.registry
            .with_slot(&self.slot_id, |slot| slot.owner.is_some())
    }

    /// Whether this handle's registrant owns the slot.
    pub fn is_owner(&self) -> bool {
        self.registry.with_slot(&self.slot_id, |slot| {
            slot.owner.as_deref() == Some(self.registrant_id.as_str())
        })
    }

    /// Takes the slot if nobody holds it. No-op otherwise.
    ///
    /// Outcome is not reported; check [`SlotHandle::is_owner`] afterwards.
    pub fn claim(&self) {
        let current = self.registry.with_slot(&self.slot_id, |slot| {
            if slot.owner.is_none() {
                slot.owner = Some(self.registrant_id.clone());
            }
            slot.owner.clone()
        });

        let status = if current.as_deref() == Some(self.registrant_id.as_str()) {
            "ok"
        } else {
            "rejected"
        };
        debug!(
            "event=slot_claim module=slot status={} slot={} registrant={} owner={}",
            status,
            self.slot_id,
            self.registrant_id,
            current.as_deref().unwrap_or("none")
        );
    }

    /// Gives the slot up and redraws subscribers. No-op unless owner.
    ///
    /// Owner and render function are cleared together before any callback
    /// runs. The displaced render function is dropped outside the registry
    /// borrow, since its captures may touch the registry on drop.
    pub fn release(&self) {
        let cleared = self.registry.with_slot(&self.slot_id, |slot| {
            if slot.owner.as_deref() != Some(self.registrant_id.as_str()) {
                return None;
            }
            slot.owner = None;
            Some((slot.render_fn.take(), slot.subscribers.clone()))
        });

        let Some((displaced, subscribers)) = cleared else {
            debug!(
                "event=slot_release module=slot status=rejected slot={} registrant={}",
                self.slot_id, self.registrant_id
            );
            return;
        };

        debug!(
            "event=slot_release module=slot status=ok slot={} registrant={} redraws={}",
            self.slot_id,
            self.registrant_id,
            subscribers.len()
        );
        drop(displaced);
        notify(&subscribers);
    }

    /// Installs `render_fn` and redraws subscribers.
    ///
    /// Returns `false` without side effects when this registrant is not the
    /// owner.
    pub fn render(&self, render_fn: RenderFn) -> bool {
        let installed = self.registry.with_slot(&self.slot_id, |slot| {
            if slot.owner.as_deref() != Some(self.registrant_id.as_str()) {
                return Err(render_fn);
            }
            let displaced = slot.render_fn.replace(render_fn);
            Ok((displaced, slot.subscribers.clone()))
        });

        let (displaced, subscribers) = match installed {
            Ok(installed) => installed,
            Err(rejected) => {
                drop(rejected);
                debug!(
                    "event=slot_render module=slot status=rejected slot={} registrant={}",
                    self.slot_id, self.registrant_id
                );
                return false;
            }
        };

        debug!(
            "event=slot_render module=slot status=ok slot={} registrant={} redraws={}",
            self.slot_id,
            self.registrant_id,
            subscribers.len()
        );
        drop(displaced);
        notify(&subscribers);
        true
    }

    /// Appends a redraw callback. Independent of ownership.
    pub fn subscribe(&self, callback: RedrawCallback) {
        self.registry
            .with_slot(&self.slot_id, |slot| slot.subscribers.push(callback));
    }

    /// Removes every entry identical to `callback`. Unknown callbacks are ignored.
    pub fn unsubscribe(&self, callback: &RedrawCallback) {
        self.registry.with_slot(&self.slot_id, |slot| {
            slot.subscribers.retain(|existing| !existing.same_as(callback))
        });
    }

    /// Render function currently installed on this slot.
    pub(crate) fn render_fn(&self) -> Option<RenderFn> {
        self.registry
            .with_slot(&self.slot_id, |slot| slot.render_fn.clone())
    }
}
