//! Caller-owned slots that receive a handle to a mounted node.
//!
//! A [`NodeRef`] is handed to a component alongside its props. When the
//! render host mounts the component's root element it calls
//! [`NodeRef::attach`]; when the element goes away it calls
//! [`NodeRef::detach`]. In between, the caller can read the live node
//! through [`NodeRef::get`].

use std::{cell::RefCell, fmt, rc::Rc};

use log::trace;

use crate::node::NodeHandle;

type RefCallback = dyn Fn(Option<NodeHandle>);

#[derive(Clone)]
enum Slot {
    Cell(Rc<RefCell<Option<NodeHandle>>>),
    Callback(Rc<RefCallback>),
}

/// A reference handle owned by the caller.
///
/// Cloning a `NodeRef` shares the underlying slot, so a component can hold
/// one clone while the caller keeps another.
///
/// # Example
///
/// ```
/// # use iconry_core::{NodeRef, NodeHandle};
/// let node_ref = NodeRef::new();
/// assert!(node_ref.get().is_none());
///
/// let handle = NodeHandle::new("svg");
/// node_ref.attach(&handle);
/// assert!(node_ref.get().unwrap().ptr_eq(&handle));
///
/// node_ref.detach();
/// assert!(!node_ref.is_attached());
/// ```
#[derive(Clone)]
pub struct NodeRef {
    slot: Slot,
}

impl NodeRef {
    /// Creates an empty object slot.
    pub fn new() -> Self {
        Self {
            slot: Slot::Cell(Rc::new(RefCell::new(None))),
        }
    }

    /// Creates a callback ref.
    ///
    /// `callback` receives `Some(handle)` when the node is mounted and
    /// `None` when it is removed. A callback ref never stores the handle
    /// itself, so [`get`](Self::get) always returns `None`.
    pub fn callback(callback: impl Fn(Option<NodeHandle>) + 'static) -> Self {
        Self {
            slot: Slot::Callback(Rc::new(callback)),
        }
    }

    /// Returns the currently attached node, if any.
    pub fn get(&self) -> Option<NodeHandle> {
        match &self.slot {
            Slot::Cell(cell) => cell.borrow().clone(),
            Slot::Callback(_) => None,
        }
    }

    pub fn is_attached(&self) -> bool {
        match &self.slot {
            Slot::Cell(cell) => cell.borrow().is_some(),
            Slot::Callback(_) => false,
        }
    }

    /// Points this ref at `handle`. Called by render hosts on mount.
    pub fn attach(&self, handle: &NodeHandle) {
        trace!(tag = handle.tag(); "Attaching node ref");
        match &self.slot {
            Slot::Cell(cell) => *cell.borrow_mut() = Some(handle.clone()),
            Slot::Callback(callback) => callback(Some(handle.clone())),
        }
    }

    /// Clears this ref. Called by render hosts on unmount.
    pub fn detach(&self) {
        trace!("Detaching node ref");
        match &self.slot {
            Slot::Cell(cell) => *cell.borrow_mut() = None,
            Slot::Callback(callback) => callback(None),
        }
    }

    /// Returns `true` if both refs share the same slot.
    pub fn same_slot(a: &NodeRef, b: &NodeRef) -> bool {
        match (&a.slot, &b.slot) {
            (Slot::Cell(a), Slot::Cell(b)) => Rc::ptr_eq(a, b),
            (Slot::Callback(a), Slot::Callback(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Self::same_slot(self, other)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Cell(cell) => f
                .debug_struct("NodeRef")
                .field("attached", &cell.borrow().is_some())
                .finish(),
            Slot::Callback(_) => f.write_str("NodeRef(callback)"),
        }
    }
}
