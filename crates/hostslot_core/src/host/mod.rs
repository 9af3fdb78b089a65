//! Host-side glue for view instances mounted against a slot.
//!
//! # Responsibility
//! - Subscribe a forced-redraw callback while a view is mounted.
//! - Resolve what the view should draw from the slot's render function.
//!
//! # Invariants
//! - The callback subscribed on mount is the identical callback removed on
//!   drop; a mount never leaks its subscription.

use crate::slot::content::{resolve_content, SlotProps, ViewNode};
use crate::slot::handle::SlotHandle;
use crate::slot::registry::{RedrawCallback, SlotRegistry};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// Registrant id used by host view instances. Mounts never claim.
pub const HOST_REGISTRANT_ID: &str = "host.view";

/// One view instance mounted against a slot.
///
/// Dropping the mount is the unmount.
#[derive(Debug)]
pub struct SlotMount {
    handle: SlotHandle,
    props: SlotProps,
    callback: RedrawCallback,
    redraws: Rc<Cell<usize>>,
}

impl SlotMount {
    /// Mounts a view for `props.slot_id`; `on_redraw` runs on every forced redraw.
    pub fn mount(
        registry: &SlotRegistry,
        props: SlotProps,
        on_redraw: impl Fn() + 'static,
    ) -> Self {
        let handle = registry.handle(HOST_REGISTRANT_ID, props.slot_id.clone());
        let redraws = Rc::new(Cell::new(0_usize));
        let counter = redraws.clone();
        let callback = RedrawCallback::new(move || {
            counter.set(counter.get() + 1);
            on_redraw();
        });
        handle.subscribe(callback.clone());
        debug!(
            "event=slot_mount module=host status=ok slot={}",
            props.slot_id
        );

        Self {
            handle,
            props,
            callback,
            redraws,
        }
    }

    pub fn slot_id(&self) -> &str {
        self.handle.slot_id()
    }

    pub fn props(&self) -> &SlotProps {
        &self.props
    }

    /// Replaces host props. Does not change the slot the view is mounted on.
    pub fn set_props(&mut self, mut props: SlotProps) {
        props.slot_id = self.props.slot_id.clone();
        self.props = props;
    }

    /// Content the view should draw right now.
    ///
    /// `None` means draw nothing.
    pub fn render(&self) -> Option<ViewNode> {
        let render_fn = self.handle.render_fn();
        resolve_content(render_fn.as_ref(), &self.props)
    }

    /// Number of forced redraws received since mount.
    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }
}

impl Drop for SlotMount {
    fn drop(&mut self) {
        self.handle.unsubscribe(&self.callback);
        debug!(
            "event=slot_unmount module=host status=ok slot={}",
            self.props.slot_id
        );
    }
}
