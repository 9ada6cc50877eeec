//! Directed graphs as adjacency lists, and the usual ways of walking them. The
//! walkers remember where they've been in a [`DynamicTable`] so cycles don't
//! trap them.

use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
    iter::FromIterator,
};

use crate::{dynamic::DynamicTable, table::Table};

/// Each node maps to its out-neighbors, in the order they were declared. An
/// edge `a -> b` says nothing about `b -> a`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<N>
where
    N: Eq + Hash,
{
    adjacency: HashMap<N, Vec<N>>,
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Makes sure `node` exists, without giving it any edges.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_insert_with(Vec::new);
    }

    /// Appends `to` to the end of `from`'s neighbor list. Both ends become
    /// nodes of the graph.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_insert_with(Vec::new).push(to);
    }

    /// Out-neighbors of `node`; a node the graph doesn't know has none.
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<N> Default for Graph<N>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<HashMap<N, Vec<N>>> for Graph<N>
where
    N: Eq + Hash,
{
    fn from(adjacency: HashMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N> FromIterator<(N, Vec<N>)> for Graph<N>
where
    N: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

type Visited<N> = DynamicTable<N, ()>;

/// Depth first from `src`, following neighbors in declaration order.
pub fn dfs_recursive<N>(graph: &Graph<N>, src: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    fn visit<N>(graph: &Graph<N>, node: &N, visited: &mut Visited<N>, out: &mut Vec<N>)
    where
        N: Eq + Hash + Clone,
    {
        visited.insert(node.clone(), ());
        out.push(node.clone());

        for neighbor in graph.neighbors(node) {
            if !visited.contains_key(neighbor) {
                visit(graph, neighbor, visited, out);
            }
        }
    }

    let mut visited = Visited::default();
    let mut out = Vec::new();
    visit(graph, src, &mut visited, &mut out);
    out
}

/// Depth first from `src` with an explicit stack. Neighbors go on the stack in
/// reverse so the first declared neighbor is explored first, the same as
/// [`dfs_recursive`].
pub fn dfs_iterative<N>(graph: &Graph<N>, src: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut visited = Visited::default();
    let mut out = Vec::new();
    let mut stack = vec![src.clone()];

    while let Some(node) = stack.pop() {
        // a node can be stacked more than once before it's first visited
        if visited.contains_key(&node) {
            continue;
        }

        for neighbor in graph.neighbors(&node).iter().rev() {
            if !visited.contains_key(neighbor) {
                stack.push(neighbor.clone());
            }
        }

        visited.insert(node.clone(), ());
        out.push(node);
    }

    out
}

/// Breadth first from `src`. Nodes are marked when they're queued, so nothing
/// is ever queued twice; ties at the same distance go by declaration order.
pub fn bfs<N>(graph: &Graph<N>, src: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut visited = Visited::default();
    let mut out = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(src.clone(), ());
    queue.push_back(src.clone());

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(&node) {
            if !visited.contains_key(neighbor) {
                visited.insert(neighbor.clone(), ());
                queue.push_back(neighbor.clone());
            }
        }

        out.push(node);
    }

    out
}
