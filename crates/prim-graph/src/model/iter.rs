//! Lazy, single-pass, cancellable enumeration of nodes and edges.
//!
//! Both iterators check their [`CancelToken`] before yielding each item and
//! stop as soon as it fires. A cancelled enumeration is incomplete; callers
//! must check the token afterwards instead of trusting what they collected.

use std::slice;

use crate::cancel::CancelToken;

use super::edge::Edge;
use super::node::Node;

/// Iterator over the nodes of a graph, in insertion order.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    inner: slice::Iter<'a, Node>,
    cancel: Option<&'a CancelToken>,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(nodes: &'a [Node], cancel: Option<&'a CancelToken>) -> Self {
        Self {
            inner: nodes.iter(),
            cancel,
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return None;
        }
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Iterator over the edges incident to one node, in insertion order.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    edges: &'a [Edge],
    incident: slice::Iter<'a, usize>,
    cancel: Option<&'a CancelToken>,
}

impl<'a> Edges<'a> {
    pub(crate) fn new(
        edges: &'a [Edge],
        incident: &'a [usize],
        cancel: Option<&'a CancelToken>,
    ) -> Self {
        Self {
            edges,
            incident: incident.iter(),
            cancel,
        }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return None;
        }
        let &index = self.incident.next()?;
        self.edges.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.incident.size_hint().1)
    }
}
