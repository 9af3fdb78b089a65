//! Slot render-content contract.
//!
//! A render function receives the host's current [`SlotProps`] and returns
//! either raw markup or a structured [`ViewNode`] tree. Markup is trusted and
//! injected verbatim; no escaping is applied anywhere in this module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Tag used for the element that carries injected markup.
pub const MARKUP_CONTAINER_TAG: &str = "div";

/// Structured view-tree node understood by the host renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Raw markup placed inside the element without escaping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Container element holding trusted markup.
    pub fn raw_markup(markup: impl Into<String>) -> Self {
        Self {
            inner_html: Some(markup.into()),
            ..Self::element(MARKUP_CONTAINER_TAG)
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Properties the host passes to a slot's render function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotProps {
    pub slot_id: String,
    pub attributes: BTreeMap<String, String>,
    /// Statically provided default content, used when no render function is set.
    pub children: Option<ViewNode>,
}

impl SlotProps {
    pub fn new(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: ViewNode) -> Self {
        self.children = Some(children);
        self
    }
}

/// Value produced by a render function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    /// Trusted markup string, injected verbatim.
    Markup(String),
    /// Structured view tree, returned to the host as-is.
    Tree(ViewNode),
}

impl From<String> for SlotContent {
    fn from(value: String) -> Self {
        Self::Markup(value)
    }
}

impl From<&str> for SlotContent {
    fn from(value: &str) -> Self {
        Self::Markup(value.to_string())
    }
}

impl From<ViewNode> for SlotContent {
    fn from(value: ViewNode) -> Self {
        Self::Tree(value)
    }
}

/// Shared render function installed by a slot owner.
///
/// Equality is pointer identity of the underlying closure.
#[derive(Clone)]
pub struct RenderFn(Rc<dyn Fn(&SlotProps) -> SlotContent>);

impl RenderFn {
    pub fn new(render: impl Fn(&SlotProps) -> SlotContent + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self, props: &SlotProps) -> SlotContent {
        (self.0)(props)
    }

    pub fn same_as(&self, other: &RenderFn) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for RenderFn {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for RenderFn {}

impl Debug for RenderFn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RenderFn({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Resolves what the host should draw for one slot.
///
/// - markup becomes a [`MARKUP_CONTAINER_TAG`] element with `inner_html` set;
/// - a tree is returned unchanged;
/// - without a render function the static `children` are used, if any.
pub fn resolve_content(render_fn: Option<&RenderFn>, props: &SlotProps) -> Option<ViewNode> {
    match render_fn {
        Some(render) => Some(match render.call(props) {
            SlotContent::Markup(markup) => ViewNode::raw_markup(markup),
            SlotContent::Tree(tree) => tree,
        }),
        None => props.children.clone(),
    }
}
