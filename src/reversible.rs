//! Ropes that remember their reverse.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use archery::{RcK, SharedPointerKind};
use once_cell::sync::OnceCell;

use crate::iter::Iter;
use crate::node::{Node, NodeRef};
use crate::rope::Rope;

/// A [`Rope`] with a memoized reverse.
///
/// [`reverse`](ReversibleRope::reverse) costs one window node over the whole
/// sequence the first time and nothing afterwards, and the result's memo
/// points back at the original tree: `r.reverse().reverse()` yields a rope
/// sharing `r`'s root without building anything.
///
/// The wrapper is read-only (it derefs to [`Rope`] but exposes no
/// mutation): an appended-to rope would silently disagree with its memo.
/// Use [`into_rope`](ReversibleRope::into_rope) to go back to a plain rope.
///
/// # Examples
///
/// ```rust
/// use cordage::ReversibleRope;
///
/// let r: ReversibleRope<char> = "stressed".into();
/// assert_eq!(r.reverse().to_string(), "desserts");
/// assert_eq!(r.reverse().reverse().to_string(), "stressed");
/// ```
pub struct ReversibleRope<C, P: SharedPointerKind = RcK> {
    rope: Rope<C, P>,
    /// Root of the reversed sequence, filled by the first `reverse`.
    rev: OnceCell<NodeRef<C, P>>,
}

impl<C, P: SharedPointerKind> ReversibleRope<C, P> {
    /// Creates an empty reversible rope.
    pub fn new() -> Self {
        Rope::new().into()
    }

    fn with_memo(rope: Rope<C, P>, memo: NodeRef<C, P>) -> Self {
        let rev = OnceCell::new();
        let _ = rev.set(memo);
        ReversibleRope { rope, rev }
    }

    /// A view of the underlying rope.
    pub fn as_rope(&self) -> &Rope<C, P> {
        &self.rope
    }

    /// Unwraps into the underlying rope, dropping the memo.
    pub fn into_rope(self) -> Rope<C, P> {
        self.rope
    }
}

impl<C: Clone, P: SharedPointerKind> ReversibleRope<C, P> {
    /// The reversed rope, sharing this rope's tree.
    ///
    /// The reverse root is a single reversed window over the whole
    /// sequence, built once and memoized; the result's own memo is wired
    /// back to this rope's root, so reversing twice returns to the original
    /// structure for free.
    pub fn reverse(&self) -> ReversibleRope<C, P> {
        let root = self.rope.root().clone();
        let rev = self
            .rev
            .get_or_init(|| Node::subrange(self.rope.len(), 0, root.clone()))
            .clone();
        ReversibleRope::with_memo(Rope::from_root(rev), root)
    }

    /// Cursor over the elements back to front: forward iteration of the
    /// reverse.
    pub fn rev_iter(&self) -> Iter<C, P> {
        self.reverse().rope.iter()
    }
}

impl<C, P: SharedPointerKind> Deref for ReversibleRope<C, P> {
    type Target = Rope<C, P>;

    fn deref(&self) -> &Rope<C, P> {
        &self.rope
    }
}

impl<C, P: SharedPointerKind> From<Rope<C, P>> for ReversibleRope<C, P> {
    fn from(rope: Rope<C, P>) -> Self {
        ReversibleRope {
            rope,
            rev: OnceCell::new(),
        }
    }
}

impl<P: SharedPointerKind> From<&str> for ReversibleRope<char, P> {
    fn from(s: &str) -> Self {
        Rope::from(s).into()
    }
}

impl<C: Clone, P: SharedPointerKind> FromIterator<C> for ReversibleRope<C, P> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Rope::from_iter(iter).into()
    }
}

impl<C, P: SharedPointerKind> Clone for ReversibleRope<C, P> {
    fn clone(&self) -> Self {
        ReversibleRope {
            rope: self.rope.clone(),
            rev: self.rev.clone(),
        }
    }
}

impl<C, P: SharedPointerKind> Default for ReversibleRope<C, P> {
    fn default() -> Self {
        ReversibleRope::new()
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> PartialEq for ReversibleRope<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> Eq for ReversibleRope<C, P> {}

impl<C: Clone + Ord, P: SharedPointerKind> PartialEq<Rope<C, P>> for ReversibleRope<C, P> {
    fn eq(&self, other: &Rope<C, P>) -> bool {
        self.rope == *other
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> PartialOrd for ReversibleRope<C, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.rope.partial_cmp(&other.rope)
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> Ord for ReversibleRope<C, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rope.cmp(&other.rope)
    }
}

impl<C: Clone + fmt::Debug, P: SharedPointerKind> fmt::Debug for ReversibleRope<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rope.fmt(f)
    }
}

impl<C: Clone + fmt::Display, P: SharedPointerKind> fmt::Display for ReversibleRope<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rope.fmt(f)
    }
}
