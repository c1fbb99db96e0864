//! The forward cursor over a rope's elements.

use std::fmt;
use std::iter::FusedIterator;

use archery::{SharedPointer, SharedPointerKind};

use crate::node::NodeRef;

/// A forward cursor over a rope.
///
/// The cursor owns a handle to the rope's root, so it remains valid (and
/// keeps the tree alive) independently of the [`Rope`](crate::Rope) it came
/// from. Position state is a leaf-like current node plus an explicit stack
/// of concat ancestors whose right child has not been visited yet, which
/// makes each step O(1) amortized regardless of how deep the tree is.
///
/// Two cursors are equal when they sit at the same position *of the same
/// rope tree*: the comparison is by handle identity, so end cursors of two
/// distinct but equal ropes are not equal.
pub struct Iter<C, P: SharedPointerKind> {
    root: NodeRef<C, P>,
    /// Leaf-like node currently being read; `None` once past the end.
    current: Option<NodeRef<C, P>>,
    /// Offset within `current`.
    pos: usize,
    /// Offset from the beginning of the rope.
    index: usize,
    /// Concat ancestors with an unvisited right child, outermost first.
    stack: Vec<NodeRef<C, P>>,
}

/// Walk down the left spine to a leaf-like node, recording the concat
/// ancestors passed through.
fn descend_left<C, P: SharedPointerKind>(
    mut node: NodeRef<C, P>,
    stack: &mut Vec<NodeRef<C, P>>,
) -> NodeRef<C, P> {
    while node.depth() > 1 {
        let left = node.children().0.clone();
        stack.push(node);
        node = left;
    }
    node
}

impl<C, P: SharedPointerKind> Iter<C, P> {
    pub(crate) fn begin(root: NodeRef<C, P>) -> Self {
        let mut it = Iter {
            current: None,
            pos: 0,
            index: 0,
            stack: Vec::with_capacity(root.depth().saturating_sub(1)),
            root,
        };
        if it.root.length() > 0 {
            it.current = Some(descend_left(it.root.clone(), &mut it.stack));
        }
        it
    }

    /// The past-the-end sentinel: no current node, index at the length.
    pub(crate) fn at_end(root: NodeRef<C, P>) -> Self {
        let index = root.length();
        Iter {
            current: None,
            pos: 0,
            index,
            stack: Vec::new(),
            root,
        }
    }

    pub(crate) fn root(&self) -> &NodeRef<C, P> {
        &self.root
    }

    /// Offset from the start of the rope.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor is past the last element.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Elements between `self` and a `later` cursor of the same rope. O(1).
    pub fn distance(&self, later: &Self) -> usize {
        debug_assert!(later.index >= self.index, "cursors out of order");
        later.index - self.index
    }
}

impl<C: Clone, P: SharedPointerKind> Iter<C, P> {
    /// The element under the cursor, without moving; `None` at the end.
    pub fn peek(&self) -> Option<C> {
        self.current.as_ref().map(|node| node.get(self.pos))
    }

    /// Moves `n` elements forward. Much cheaper than `n` random accesses:
    /// whole leaves are skipped by length without touching their elements.
    pub fn advance(&mut self, mut n: usize) {
        self.index += n;
        loop {
            let Some(current) = &self.current else { break };
            let remaining = current.length() - self.pos;
            if n < remaining {
                self.pos += n;
                return;
            }
            n -= remaining;
            self.pos = 0;
            self.current = match self.stack.pop() {
                Some(parent) => {
                    let right = parent.children().1.clone();
                    Some(descend_left(right, &mut self.stack))
                }
                None => None,
            };
        }
        debug_assert!(n == 0, "cursor advanced past the end");
    }

    /// Moves `n` elements back.
    ///
    /// O(index): ropes are tuned for forward traversal, so the cursor is
    /// rebuilt from the beginning and advanced to the target position.
    pub fn retreat(&mut self, n: usize) {
        debug_assert!(n <= self.index, "cursor retreated before the start");
        let mut fresh = Iter::begin(self.root.clone());
        fresh.advance(self.index - n);
        *self = fresh;
    }
}

impl<C: Clone, P: SharedPointerKind> Iterator for Iter<C, P> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        let item = self.peek()?;
        self.advance(1);
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<C> {
        // Stride directly instead of stepping n times.
        let length = self.root.length();
        if self.index + n >= length {
            self.advance(length - self.index);
            return None;
        }
        self.advance(n);
        let item = self.peek();
        self.advance(1);
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.root.length() - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: Clone, P: SharedPointerKind> ExactSizeIterator for Iter<C, P> {}

impl<C: Clone, P: SharedPointerKind> FusedIterator for Iter<C, P> {}

impl<C, P: SharedPointerKind> Clone for Iter<C, P> {
    fn clone(&self) -> Self {
        Iter {
            root: SharedPointer::clone(&self.root),
            current: self.current.clone(),
            pos: self.pos,
            index: self.index,
            stack: self.stack.clone(),
        }
    }
}

impl<C, P: SharedPointerKind> PartialEq for Iter<C, P> {
    fn eq(&self, other: &Self) -> bool {
        if self.index != other.index
            || self.pos != other.pos
            || self.stack.len() != other.stack.len()
        {
            return false;
        }
        let same_current = match (&self.current, &other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => SharedPointer::ptr_eq(a, b),
            _ => false,
        };
        same_current
            && self
                .stack
                .iter()
                .zip(&other.stack)
                .all(|(a, b)| SharedPointer::ptr_eq(a, b))
            && SharedPointer::ptr_eq(&self.root, &other.root)
    }
}

impl<C, P: SharedPointerKind> Eq for Iter<C, P> {}

impl<C, P: SharedPointerKind> fmt::Debug for Iter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("index", &self.index)
            .field("at_end", &self.current.is_none())
            .finish()
    }
}
