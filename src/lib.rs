//! Persistent ropes with structural sharing.
//!
//! A [`Rope`] represents an immutable sequence of code units as a tree of
//! reference-counted nodes. Concatenation, repetition, substring and
//! reversal each build a small new root over the existing trees instead of
//! copying elements, so they stay cheap no matter how long the ropes get,
//! while random access, iteration and lexicographic comparison remain
//! efficient. Traversal never recurses: the cursor carries an explicit
//! descent stack, and dropping a tree millions of nodes deep unwinds
//! through a work list rather than the call stack. Comparison recognizes
//! pointer-equal shared subtrees and skips them without scanning.
//!
//! Ropes are values: `+=` and friends swap the root handle and never touch
//! shared nodes, so clones behave like independent strings at
//! reference-count cost.
//!
//! ```rust
//! use cordage::{ReversibleRope, Rope};
//!
//! let line: Rope<char> = "This is a string".into();
//! let rev: ReversibleRope<char> = line.clone().into();
//! let echoed = line + " " + rev.reverse().as_rope();
//! assert_eq!(echoed.to_string(), "This is a string gnirts a si sihT");
//! ```
//!
//! Node sharing is reference counted; the pointer-kind parameter decides
//! how. The default, [`RcK`], uses non-atomic counts and confines a rope's
//! trees to one thread; [`ArcK`] (via the [`RopeSync`] alias) uses atomic
//! counts and lets ropes travel across threads.

mod compare;
pub mod iter;
mod node;
pub mod reversible;
pub mod rope;

/// Concatenations whose combined length stays under this threshold are
/// materialized into a single leaf instead of getting a tree node.
pub const CHUNK: usize = 32;

pub use archery::{ArcK, RcK, SharedPointerKind};

pub use crate::iter::Iter;
pub use crate::reversible::ReversibleRope;
pub use crate::rope::{Decimal, Rope};

/// A rope whose nodes are atomically reference counted and may be shared
/// across threads.
pub type RopeSync<C> = Rope<C, ArcK>;

/// [`ReversibleRope`] over atomically counted nodes.
pub type ReversibleRopeSync<C> = ReversibleRope<C, ArcK>;
