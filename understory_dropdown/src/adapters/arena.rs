// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element tree and listener registry.
//!
//! [`NodeArena`] implements [`Surface`] and [`ListenerTable`] implements
//! [`Listeners`]. They suit hosts that have no element tree of their own, and
//! tests.
//!
//! ```
//! use understory_dropdown::adapters::arena::{ListenerTable, NodeArena};
//! use understory_dropdown::types::{Binding, EventKind, Listeners, Markers, Scope, Surface};
//!
//! let mut arena = NodeArena::new();
//! let root = arena.insert(None);
//! let item = arena.insert(Some(root));
//! arena.set_marker(&item, Markers::DISABLED, true);
//! assert!(arena.contains(&root, &item));
//! assert!(arena.has_marker(&item, Markers::DISABLED));
//!
//! let mut table = ListenerTable::new();
//! let id = table.listen(Binding { scope: Scope::Node(root), kind: EventKind::Activate });
//! assert_eq!(table.listening(Scope::Node(root), EventKind::Activate).next(), Some(id));
//! assert!(table.unlisten(id));
//! assert!(table.is_empty());
//! ```

use alloc::vec::Vec;

use crate::types::{Binding, EventKind, ListenerId, Listeners, Markers, Scope, Surface};

/// Handle of a node in a [`NodeArena`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    fn from_idx(idx: usize) -> Self {
        Self(idx as u32)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct Entry {
    parent: Option<NodeId>,
    markers: Markers,
}

/// Append-only element tree with per-node [`Markers`].
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Entry>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent` (or as a root) and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        if let Some(p) = parent {
            assert!(
                p.idx() < self.nodes.len(),
                "parent {p:?} is not in this arena"
            );
        }
        let id = NodeId::from_idx(self.nodes.len());
        self.nodes.push(Entry {
            parent,
            markers: Markers::empty(),
        });
        id
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of `node`, in insertion order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.parent == Some(node))
            .map(|(i, _)| NodeId::from_idx(i))
    }
}

impl Surface<NodeId> for NodeArena {
    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.idx()).and_then(|e| e.parent)
    }

    fn markers(&self, node: &NodeId) -> Markers {
        self.nodes
            .get(node.idx())
            .map(|e| e.markers)
            .unwrap_or_default()
    }

    fn set_marker(&mut self, node: &NodeId, marker: Markers, on: bool) {
        if let Some(e) = self.nodes.get_mut(node.idx()) {
            e.markers.set(marker, on);
        }
    }
}

/// Listener registry keyed by [`ListenerId`].
#[derive(Clone, Debug)]
pub struct ListenerTable<K> {
    entries: Vec<(ListenerId, Binding<K>)>,
    next: u64,
}

impl<K> Default for ListenerTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }
}

impl<K: Copy + Eq> ListenerTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The binding registered under `id`.
    pub fn binding(&self, id: ListenerId) -> Option<Binding<K>> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, b)| *b)
    }

    /// Ids listening for `kind` at `scope`, in registration order.
    pub fn listening(
        &self,
        scope: Scope<K>,
        kind: EventKind,
    ) -> impl Iterator<Item = ListenerId> + '_ {
        self.entries
            .iter()
            .filter(move |(_, b)| b.scope == scope && b.kind == kind)
            .map(|(id, _)| *id)
    }
}

impl<K: Copy + Eq> Listeners<K> for ListenerTable<K> {
    fn listen(&mut self, binding: Binding<K>) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.push((id, binding));
        id
    }

    fn unlisten(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(i, _)| *i == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_and_children() {
        let mut a = NodeArena::new();
        let root = a.insert(None);
        let x = a.insert(Some(root));
        let y = a.insert(Some(root));
        let z = a.insert(Some(x));
        assert_eq!(a.parent_of(&z), Some(x));
        assert_eq!(a.parent_of(&root), None);
        assert_eq!(a.children(root).collect::<Vec<_>>(), [x, y]);
        assert_eq!(NodeId::from_idx(z.idx()), z);
        assert!(a.contains(&root, &z));
        assert!(!a.contains(&y, &z));
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn markers_toggle_independently() {
        let mut a = NodeArena::new();
        let n = a.insert(None);
        a.set_marker(&n, Markers::EXPANDED, true);
        a.set_marker(&n, Markers::DISABLED, true);
        a.set_marker(&n, Markers::EXPANDED, false);
        assert_eq!(a.markers(&n), Markers::DISABLED);
    }

    #[test]
    fn unknown_node_has_no_markers() {
        let a = NodeArena::new();
        assert_eq!(a.markers(&NodeId(9)), Markers::empty());
        assert_eq!(a.parent_of(&NodeId(9)), None);
    }

    #[test]
    fn unlisten_removes_once() {
        let mut t: ListenerTable<u32> = ListenerTable::new();
        let b = Binding {
            scope: Scope::Document,
            kind: EventKind::Activate,
        };
        let a = t.listen(b);
        let c = t.listen(b);
        assert_ne!(a, c);
        assert_eq!(t.listening(Scope::Document, EventKind::Activate).count(), 2);
        assert!(t.unlisten(a));
        assert!(!t.unlisten(a));
        assert_eq!(t.binding(c), Some(b));
        assert_eq!(t.len(), 1);
    }
}
