//! Undirected graph with typed attributes.
//!
//! # Data layout
//!
//! Nodes and edges live in two insertion-ordered hash maps (`indexmap` with
//! `FxBuildHasher`):
//!
//! ```text
//! nodes: K        → N
//! edges: (lo, hi) → { u, v, E }     lo = min(u, v), hi = max(u, v)
//! ```
//!
//! Normalising the edge key makes `(u, v)` and `(v, u)` the same edge, so at
//! most one edge exists per unordered pair.  The entry keeps the orientation
//! it was inserted with.  Self-loops are `(n, n)`.
//!
//! There is no adjacency index: [`Graph::neighbors`] scans the edge map.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::{GraphError, GraphResult};

#[derive(Clone, Debug)]
struct EdgeEntry<K, E> {
    u:     K,
    v:     K,
    attrs: E,
}

/// Undirected graph keyed by `K` with node attributes `N` and edge
/// attributes `E`.
///
/// Invariant: both endpoints of every edge are nodes of the graph.
/// [`add_edge`](Self::add_edge) rejects missing endpoints and
/// [`remove_node`](Self::remove_node) cascades to incident edges.
#[derive(Clone, Debug)]
pub struct Graph<K, N = (), E = ()> {
    nodes: IndexMap<K, N, FxBuildHasher>,
    edges: IndexMap<(K, K), EdgeEntry<K, E>, FxBuildHasher>,
}

#[inline]
fn edge_key<K: Ord + Copy>(u: K, v: K) -> (K, K) {
    if u <= v { (u, v) } else { (v, u) }
}

impl<K, N, E> Graph<K, N, E>
where
    K: Copy + Eq + Hash + Ord + Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::with_hasher(FxBuildHasher),
            edges: IndexMap::with_hasher(FxBuildHasher),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity_and_hasher(nodes, FxBuildHasher),
            edges: IndexMap::with_capacity_and_hasher(edges, FxBuildHasher),
        }
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Insert `id` with `attrs`.  If `id` is already present this is a
    /// no-op: the existing attributes are kept.  Returns `true` if inserted.
    pub fn add_node(&mut self, id: K, attrs: N) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, attrs);
        true
    }

    /// Insert every `(id, attrs)` pair; existing ids are left untouched.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = (K, N)>,
    {
        for (id, attrs) in nodes {
            self.add_node(id, attrs);
        }
    }

    /// Remove `id` and every edge incident to it.  Returns the node's
    /// attributes, or `None` if it was absent.
    pub fn remove_node(&mut self, id: K) -> Option<N> {
        let attrs = self.nodes.shift_remove(&id)?;
        self.edges.retain(|_, e| e.u != id && e.v != id);
        Some(attrs)
    }

    pub fn remove_nodes_from<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = K>,
    {
        for id in ids {
            self.remove_node(id);
        }
    }

    #[inline]
    pub fn has_node(&self, id: K) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Same as [`has_node`](Self::has_node).  Membership is defined over
    /// nodes only, never edges.
    #[inline]
    pub fn contains(&self, id: K) -> bool {
        self.has_node(id)
    }

    #[inline]
    pub fn node(&self, id: K) -> Option<&N> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn node_mut(&mut self, id: K) -> Option<&mut N> {
        self.nodes.get_mut(&id)
    }

    /// Node ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.nodes.keys().copied()
    }

    /// `(id, &attrs)` in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (K, &N)> + '_ {
        self.nodes.iter().map(|(&k, n)| (k, n))
    }

    /// `(id, &mut attrs)` in insertion order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = (K, &mut N)> + '_ {
        self.nodes.iter_mut().map(|(&k, n)| (k, n))
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(false)` without touching the existing attributes if the
    /// pair is already connected in either orientation.  Fails with
    /// [`GraphError::MissingEndpoint`] if `u` or `v` is not a node.
    pub fn add_edge(&mut self, u: K, v: K, attrs: E) -> GraphResult<bool> {
        for node in [u, v] {
            if !self.nodes.contains_key(&node) {
                return Err(GraphError::MissingEndpoint { node: format!("{node:?}") });
            }
        }
        let key = edge_key(u, v);
        if self.edges.contains_key(&key) {
            return Ok(false);
        }
        self.edges.insert(key, EdgeEntry { u, v, attrs });
        Ok(true)
    }

    /// Insert every `(u, v, attrs)` triple.  Stops at the first missing
    /// endpoint.  Returns how many new edges were added.
    pub fn add_edges_from<I>(&mut self, edges: I) -> GraphResult<usize>
    where
        I: IntoIterator<Item = (K, K, E)>,
    {
        let mut added = 0;
        for (u, v, attrs) in edges {
            if self.add_edge(u, v, attrs)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove the edge `{u, v}` in whichever orientation it was inserted.
    pub fn remove_edge(&mut self, u: K, v: K) -> Option<E> {
        self.edges.shift_remove(&edge_key(u, v)).map(|e| e.attrs)
    }

    pub fn remove_edges_from<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, K)>,
    {
        for (u, v) in pairs {
            self.remove_edge(u, v);
        }
    }

    #[inline]
    pub fn has_edge(&self, u: K, v: K) -> bool {
        self.edges.contains_key(&edge_key(u, v))
    }

    #[inline]
    pub fn edge(&self, u: K, v: K) -> Option<&E> {
        self.edges.get(&edge_key(u, v)).map(|e| &e.attrs)
    }

    #[inline]
    pub fn edge_mut(&mut self, u: K, v: K) -> Option<&mut E> {
        self.edges.get_mut(&edge_key(u, v)).map(|e| &mut e.attrs)
    }

    /// `(u, v, &attrs)` in insertion order, with the orientation used at
    /// insertion.
    pub fn edges(&self) -> impl Iterator<Item = (K, K, &E)> + '_ {
        self.edges.values().map(|e| (e.u, e.v, &e.attrs))
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = (K, K, &mut E)> + '_ {
        self.edges.values_mut().map(|e| (e.u, e.v, &mut e.attrs))
    }

    /// Endpoint pairs only.  Collect these when the loop body needs
    /// `&mut` access to node attributes.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (K, K)> + '_ {
        self.edges.values().map(|e| (e.u, e.v))
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every node sharing an edge with `id`, found by scanning all edges.
    /// A self-loop makes `id` its own neighbour.
    pub fn neighbors(&self, id: K) -> FxHashSet<K> {
        let mut out = FxHashSet::default();
        for e in self.edges.values() {
            if e.u == id {
                out.insert(e.v);
            } else if e.v == id {
                out.insert(e.u);
            }
        }
        out
    }

    /// Number of edges incident to `id` (a self-loop counts once).
    pub fn degree(&self, id: K) -> usize {
        self.edges.values().filter(|e| e.u == id || e.v == id).count()
    }

    // ── Bulk ──────────────────────────────────────────────────────────────

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Remove all edges, keeping the nodes.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }
}

impl<K, N, E> Default for Graph<K, N, E>
where
    K: Copy + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// `for id in &graph` visits node ids in insertion order.
impl<'a, K, N, E> IntoIterator for &'a Graph<K, N, E>
where
    K: Copy + Eq + Hash + Ord + Debug,
{
    type Item = K;
    type IntoIter = std::iter::Copied<indexmap::map::Keys<'a, K, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.keys().copied()
    }
}
