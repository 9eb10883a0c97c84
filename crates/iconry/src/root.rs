//! A synchronous, single-threaded render host.
//!
//! [`Root`] turns [`VElement`] descriptions into live nodes, keeps them
//! mounted across renders and populates every [`NodeRef`] found in the
//! description with the node it was attached to.

use log::{debug, trace};

use iconry_core::{LiveNode, NodeHandle, NodeRef, VElement, VNode};

/// A mounted element together with the ref it was rendered with.
#[derive(Debug)]
struct Mounted {
    handle: NodeHandle,
    node_ref: Option<NodeRef>,
    children: Vec<MountedChild>,
}

#[derive(Debug)]
enum MountedChild {
    Element(Mounted),
    Text,
}

/// A mount point for one element tree.
///
/// The first [`render`](Self::render) mounts the tree; later renders
/// reconcile against it, keeping live nodes whose tag is unchanged so that
/// handles held by callers stay valid. [`unmount`](Self::unmount), or
/// dropping the root, clears every ref in the tree.
///
/// # Example
///
/// ```
/// # use iconry::{GoogleDriveIcon, IconComponent, NodeRef, Props, Root};
/// let node_ref = NodeRef::new();
/// let mut root = Root::new();
///
/// let tree = GoogleDriveIcon::default().render(Props::new(), Some(node_ref.clone()));
/// let handle = root.render(tree);
/// assert!(node_ref.get().unwrap().ptr_eq(&handle));
///
/// root.unmount();
/// assert!(node_ref.get().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Root {
    mounted: Option<Mounted>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `tree` into this root and returns the handle of its top node.
    ///
    /// Every ref leaving the tree is detached before any ref entering it is
    /// attached, so a slot that moves between nodes ends up on its new node.
    pub fn render(&mut self, tree: VElement) -> NodeHandle {
        let mut pending = PendingRefs::default();
        let mounted = match self.mounted.take() {
            Some(mut current) if current.handle.tag() == tree.tag() => {
                trace!(tag = tree.tag(); "Reconciling mounted tree");
                update(&mut current, tree, &mut pending);
                current
            }
            Some(current) => {
                debug!(
                    old_tag = current.handle.tag(),
                    new_tag = tree.tag();
                    "Replacing mounted tree"
                );
                unmount(current);
                mount(tree, &mut pending)
            }
            None => {
                debug!(tag = tree.tag(); "Mounting tree");
                mount(tree, &mut pending)
            }
        };
        pending.flush();

        let handle = mounted.handle.clone();
        self.mounted = Some(mounted);
        handle
    }

    /// Returns the handle of the mounted top node, if any.
    pub fn handle(&self) -> Option<NodeHandle> {
        self.mounted.as_ref().map(|mounted| mounted.handle.clone())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Removes the mounted tree and clears its refs. A no-op when nothing is
    /// mounted.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            debug!(tag = mounted.handle.tag(); "Unmounting tree");
            unmount(mounted);
        }
    }
}

impl Drop for Root {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Ref attachments queued during a render.
///
/// Attaching waits until reconciliation has finished, when every outgoing
/// ref is already detached.
#[derive(Default)]
struct PendingRefs(Vec<(NodeRef, NodeHandle)>);

impl PendingRefs {
    fn queue(&mut self, node_ref: &NodeRef, handle: &NodeHandle) {
        self.0.push((node_ref.clone(), handle.clone()));
    }

    /// Attaches in queue order: children before their parents.
    fn flush(self) {
        for (node_ref, handle) in self.0 {
            node_ref.attach(&handle);
        }
    }
}

fn mount(tree: VElement, pending: &mut PendingRefs) -> Mounted {
    let (tag, attrs, children, node_ref) = tree.into_parts();

    let handle = NodeHandle::new(tag);
    handle.replace_attrs(attrs);

    let children = children
        .into_iter()
        .map(|child| {
            let (live, mounted) = mount_child(child, pending);
            handle.push_child(live);
            mounted
        })
        .collect();

    if let Some(node_ref) = &node_ref {
        pending.queue(node_ref, &handle);
    }

    Mounted {
        handle,
        node_ref,
        children,
    }
}

fn mount_child(child: VNode, pending: &mut PendingRefs) -> (LiveNode, MountedChild) {
    match child {
        VNode::Element(element) => {
            let mounted = mount(element, pending);
            (
                LiveNode::Element(mounted.handle.clone()),
                MountedChild::Element(mounted),
            )
        }
        VNode::Text(text) => (LiveNode::Text(text), MountedChild::Text),
    }
}

/// Returns `true` while the live children still match what was mounted.
///
/// Callers holding a handle can restructure a node behind the root's back.
fn children_in_sync(mounted: &Mounted) -> bool {
    let live = mounted.handle.children();
    live.len() == mounted.children.len()
        && live
            .iter()
            .zip(&mounted.children)
            .all(|pair| match pair {
                (LiveNode::Element(handle), MountedChild::Element(child)) => {
                    handle.ptr_eq(&child.handle)
                }
                (LiveNode::Text(_), MountedChild::Text) => true,
                _ => false,
            })
}

/// Brings `current` in line with `tree`. Both must share a tag.
fn update(current: &mut Mounted, tree: VElement, pending: &mut PendingRefs) {
    let (_, attrs, children, node_ref) = tree.into_parts();

    let unchanged = match (&current.node_ref, &node_ref) {
        (Some(old), Some(new)) => NodeRef::same_slot(old, new),
        (None, None) => true,
        _ => false,
    };
    if !unchanged {
        if let Some(old) = current.node_ref.take() {
            old.detach();
        }
        if let Some(new) = &node_ref {
            pending.queue(new, &current.handle);
        }
        current.node_ref = node_ref;
    }

    current.handle.replace_attrs(attrs);

    if !children_in_sync(current) {
        debug!(
            tag = current.handle.tag();
            "Live children changed outside the root, remounting them"
        );
        current.handle.truncate_children(0);
        for old in current.children.drain(..) {
            if let MountedChild::Element(old) = old {
                unmount(old);
            }
        }
    }

    let new_len = children.len();
    for (index, child) in children.into_iter().enumerate() {
        if index >= current.children.len() {
            let (live, mounted) = mount_child(child, pending);
            current.handle.push_child(live);
            current.children.push(mounted);
            continue;
        }

        let reusable = matches!(
            (&current.children[index], &child),
            (MountedChild::Element(existing), VNode::Element(element))
                if existing.handle.tag() == element.tag()
        );

        match child {
            VNode::Element(element) if reusable => {
                if let MountedChild::Element(existing) = &mut current.children[index] {
                    update(existing, element, pending);
                }
            }
            child => replace_child(current, index, child, pending),
        }
    }

    if new_len < current.children.len() {
        trace!(removed = current.children.len() - new_len; "Removing trailing children");
        current.handle.truncate_children(new_len);
        for old in current.children.drain(new_len..) {
            if let MountedChild::Element(old) = old {
                unmount(old);
            }
        }
    }
}

fn replace_child(parent: &mut Mounted, index: usize, child: VNode, pending: &mut PendingRefs) {
    let old = std::mem::replace(&mut parent.children[index], MountedChild::Text);
    if let MountedChild::Element(old) = old {
        unmount(old);
    }
    let (live, mounted) = mount_child(child, pending);
    parent.handle.replace_child(index, live);
    parent.children[index] = mounted;
}

fn unmount(mounted: Mounted) {
    for child in mounted.children {
        if let MountedChild::Element(child) = child {
            unmount(child);
        }
    }
    if let Some(node_ref) = &mounted.node_ref {
        node_ref.detach();
    }
}
