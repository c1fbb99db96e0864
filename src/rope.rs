//! The public rope value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};

use archery::{RcK, SharedPointer, SharedPointerKind};

use crate::compare::three_way;
use crate::iter::Iter;
use crate::node::{Node, NodeRef};
use crate::CHUNK;

/// A persistent rope: an immutable sequence of code units represented as a
/// structurally-shared tree.
///
/// Concatenation, repetition, substring and (through
/// [`ReversibleRope`](crate::ReversibleRope)) reversal all run in constant
/// or near-constant time by building a new root that references the
/// existing trees. Cloning a rope is a reference-count bump; "mutators"
/// like `+=` and [`clear`](Rope::clear) only swap the root handle, so other
/// ropes sharing the old tree are unaffected.
///
/// Equality and ordering are by element sequence, never by tree shape.
///
/// The second parameter picks the reference-counting flavor of the shared
/// nodes: [`RcK`](archery::RcK) (the default) for single-threaded sharing,
/// [`ArcK`](archery::ArcK) for ropes that cross threads.
///
/// # Examples
///
/// ```rust
/// use cordage::Rope;
///
/// let hello: Rope<char> = "This is a string".into();
/// let shout = hello.clone() + "!";
/// assert_eq!(hello.len(), 16);
/// assert_eq!(shout.to_string(), "This is a string!");
/// ```
pub struct Rope<C, P: SharedPointerKind = RcK> {
    root: NodeRef<C, P>,
}

impl<C, P: SharedPointerKind> Rope<C, P> {
    /// Creates an empty rope.
    pub fn new() -> Self {
        Rope { root: Node::null() }
    }

    pub(crate) fn from_root(root: NodeRef<C, P>) -> Self {
        Rope { root }
    }

    pub(crate) fn root(&self) -> &NodeRef<C, P> {
        &self.root
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.root.length()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.root.length() == 0
    }

    /// Resets this value to the empty rope. Ropes sharing the old tree are
    /// unaffected.
    pub fn clear(&mut self) {
        self.root = Node::null();
    }

    /// Checks the structural invariants of the whole tree. Test helper;
    /// walks every node.
    pub fn check_invariants(&self) {
        self.root.check(true);
    }
}

impl<C: Clone, P: SharedPointerKind> Rope<C, P> {
    /// Builds a rope holding a copy of `data`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<u8> = Rope::from_slice(b"bytes");
    /// assert_eq!(r.len(), 5);
    /// ```
    pub fn from_slice(data: &[C]) -> Self {
        Rope {
            root: Node::leaf(data.to_vec()),
        }
    }

    /// A rope of `count` copies of `elem`.
    ///
    /// Leaf memory stays bounded no matter how large `count` grows: the bulk
    /// is a repetition of one [`CHUNK`]-sized leaf, plus one remainder leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<char> = Rope::from_elem(1_000_000, 'a');
    /// assert_eq!(r.len(), 1_000_000);
    /// assert_eq!(r.get(999_999), Some('a'));
    /// ```
    pub fn from_elem(count: usize, elem: C) -> Self {
        let full = Node::repeat(count / CHUNK, Node::leaf(vec![elem.clone(); CHUNK]));
        let rest = Node::leaf(vec![elem; count % CHUNK]);
        Rope {
            root: Node::concat(full, rest),
        }
    }

    /// `count` copies of this rope, sharing its tree.
    pub fn repeat(&self, count: usize) -> Self {
        Rope {
            root: Node::repeat(count, self.root.clone()),
        }
    }

    /// Element at `idx`, or `None` out of range. O(depth).
    pub fn get(&self, idx: usize) -> Option<C> {
        if idx < self.len() {
            Some(self.root.get(idx))
        } else {
            None
        }
    }

    /// The first element, or `None` when empty.
    pub fn front(&self) -> Option<C> {
        self.get(0)
    }

    /// The last element, or `None` when empty.
    pub fn back(&self) -> Option<C> {
        self.len().checked_sub(1).map(|idx| self.root.get(idx))
    }

    /// The window of `size` elements starting at `start`, sharing the
    /// original tree. Nothing is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<char> = "hello world".into();
    /// assert_eq!(r.substr(6, 5), "world");
    /// ```
    pub fn substr(&self, start: usize, size: usize) -> Self {
        Rope {
            root: Node::subrange(start, start + size, self.root.clone()),
        }
    }

    /// Cursor at the first element.
    pub fn iter(&self) -> Iter<C, P> {
        Iter::begin(self.root.clone())
    }

    /// Cursor past the last element.
    pub fn end(&self) -> Iter<C, P> {
        Iter::at_end(self.root.clone())
    }

    /// Cursor at position `idx`; O(idx), advanced from the start.
    pub fn iter_at(&self, idx: usize) -> Iter<C, P> {
        debug_assert!(idx <= self.len(), "cursor position out of range");
        if idx == self.len() {
            return self.end();
        }
        let mut it = self.iter();
        it.advance(idx);
        it
    }

    /// The elements between two cursors over this rope, as a new rope.
    /// Spans longer than [`CHUNK`] become a window sharing the tree; short
    /// ones materialize into a leaf.
    pub fn between(start: &Iter<C, P>, end: &Iter<C, P>) -> Self {
        debug_assert!(
            SharedPointer::ptr_eq(start.root(), end.root()),
            "cursors from different ropes"
        );
        let span = start.distance(end);
        if span > CHUNK {
            Rope {
                root: Node::subrange(start.index(), end.index(), start.root().clone()),
            }
        } else {
            Rope {
                root: Node::leaf(start.clone().take(span).collect()),
            }
        }
    }

    /// Copies the whole sequence into contiguous storage. O(len), and may
    /// be large; everything else here avoids exactly this.
    pub fn to_vec(&self) -> Vec<C> {
        self.root.materialize()
    }
}

impl<C: Clone + PartialEq, P: SharedPointerKind> Rope<C, P> {
    /// Cursor at the first element equal to `elem`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<char> = "hello world".into();
    /// assert_eq!(r.find(&'o').index(), 4);
    /// assert!(r.find(&'q').is_end());
    /// ```
    pub fn find(&self, elem: &C) -> Iter<C, P> {
        self.find_from(elem, self.iter())
    }

    /// Forward scan for `elem` starting at the cursor `from`.
    pub fn find_from(&self, elem: &C, mut from: Iter<C, P>) -> Iter<C, P> {
        while let Some(c) = from.peek() {
            if c == *elem {
                break;
            }
            from.advance(1);
        }
        from
    }

    /// Cursor at the first occurrence of `needle`, or the end cursor.
    ///
    /// Naive scan: on a mismatch the search restarts at the position after
    /// the current start. O(len · needle.len()) worst case. An empty needle
    /// matches at the start.
    pub fn find_seq(&self, needle: &[C]) -> Iter<C, P> {
        let mut start = self.iter();
        if needle.is_empty() {
            return start;
        }
        'positions: while let Some(c) = start.peek() {
            if c == needle[0] {
                let mut probe = start.clone();
                for want in needle {
                    match probe.peek() {
                        Some(have) if have == *want => probe.advance(1),
                        _ => {
                            start.advance(1);
                            continue 'positions;
                        }
                    }
                }
                return start;
            }
            start.advance(1);
        }
        start
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> Rope<C, P> {
    /// Three-way comparison by element sequence.
    ///
    /// Subtrees shared between the two ropes are recognized by handle and
    /// skipped without scanning, so comparing ropes that mostly share
    /// structure costs the differing parts, not the whole length.
    pub fn compare(&self, other: &Self) -> Ordering {
        three_way(&self.root, &other.root)
    }
}

impl<P: SharedPointerKind> Rope<char, P> {
    /// Cursor at the first occurrence of `needle`, or the end cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<char> = "hello world".into();
    /// assert_eq!(r.find_str("world").index(), 6);
    /// assert!(r.find_str("xyz").is_end());
    /// ```
    pub fn find_str(&self, needle: &str) -> Iter<char, P> {
        let needle: Vec<char> = needle.chars().collect();
        self.find_seq(&needle)
    }

    /// Parses a decimal integer from the front of the rope: an optional
    /// leading `-`, then digits, stopping at the first non-digit. Never
    /// fails; an empty or non-numeric rope parses to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cordage::Rope;
    ///
    /// let r: Rope<char> = "-1234 apples".into();
    /// assert_eq!(r.as_decimal::<i32>(), -1234);
    /// ```
    pub fn as_decimal<T: Decimal>(&self) -> T {
        let mut it = self.iter();
        let negate = it.peek() == Some('-');
        if negate {
            it.advance(1);
        }
        let mut result = T::ZERO;
        while let Some(c) = it.peek() {
            match c.to_digit(10) {
                Some(digit) => result = result.push_digit(digit as u8),
                None => break,
            }
            it.advance(1);
        }
        if negate {
            result.negate()
        } else {
            result
        }
    }
}

/// Integer scalars [`Rope::as_decimal`] can accumulate into.
pub trait Decimal: Copy {
    const ZERO: Self;
    fn push_digit(self, digit: u8) -> Self;
    fn negate(self) -> Self;
}

macro_rules! impl_decimal {
    ($($ty:ty),*) => {$(
        impl Decimal for $ty {
            const ZERO: Self = 0;

            fn push_digit(self, digit: u8) -> Self {
                self * 10 + digit as $ty
            }

            fn negate(self) -> Self {
                // Wrapping, so unsigned accumulators behave like the
                // two's-complement cast of their signed counterpart.
                self.wrapping_neg()
            }
        }
    )*};
}

impl_decimal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<C: Clone, P: SharedPointerKind> AddAssign<&Rope<C, P>> for Rope<C, P> {
    fn add_assign(&mut self, rhs: &Rope<C, P>) {
        self.root = Node::concat(self.root.clone(), rhs.root.clone());
    }
}

impl<C: Clone, P: SharedPointerKind> AddAssign<Rope<C, P>> for Rope<C, P> {
    fn add_assign(&mut self, rhs: Rope<C, P>) {
        self.root = Node::concat(self.root.clone(), rhs.root);
    }
}

impl<C: Clone, P: SharedPointerKind> AddAssign<C> for Rope<C, P> {
    // Element appends are convenient but build one node per element; prefer
    // appending a slice when the elements are already contiguous.
    fn add_assign(&mut self, rhs: C) {
        self.root = Node::concat(self.root.clone(), Node::leaf(vec![rhs]));
    }
}

impl<P: SharedPointerKind> AddAssign<&str> for Rope<char, P> {
    fn add_assign(&mut self, rhs: &str) {
        self.root = Node::concat(self.root.clone(), Node::leaf(rhs.chars().collect()));
    }
}

impl<C: Clone, P: SharedPointerKind> Add for Rope<C, P> {
    type Output = Rope<C, P>;

    fn add(mut self, rhs: Rope<C, P>) -> Rope<C, P> {
        self += rhs;
        self
    }
}

impl<C: Clone, P: SharedPointerKind> Add<&Rope<C, P>> for Rope<C, P> {
    type Output = Rope<C, P>;

    fn add(mut self, rhs: &Rope<C, P>) -> Rope<C, P> {
        self += rhs;
        self
    }
}

impl<C: Clone, P: SharedPointerKind> Add for &Rope<C, P> {
    type Output = Rope<C, P>;

    fn add(self, rhs: &Rope<C, P>) -> Rope<C, P> {
        Rope {
            root: Node::concat(self.root.clone(), rhs.root.clone()),
        }
    }
}

impl<C: Clone, P: SharedPointerKind> Add<C> for Rope<C, P> {
    type Output = Rope<C, P>;

    fn add(mut self, rhs: C) -> Rope<C, P> {
        self += rhs;
        self
    }
}

impl<P: SharedPointerKind> Add<&str> for Rope<char, P> {
    type Output = Rope<char, P>;

    fn add(mut self, rhs: &str) -> Rope<char, P> {
        self += rhs;
        self
    }
}

impl<C: Clone, P: SharedPointerKind> Extend<C> for Rope<C, P> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.root = Node::concat(self.root.clone(), Node::leaf(iter.into_iter().collect()));
    }
}

impl<C: Clone, P: SharedPointerKind> FromIterator<C> for Rope<C, P> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Rope {
            root: Node::leaf(iter.into_iter().collect()),
        }
    }
}

impl<C: Clone, P: SharedPointerKind> From<Vec<C>> for Rope<C, P> {
    fn from(data: Vec<C>) -> Self {
        Rope {
            root: Node::leaf(data),
        }
    }
}

impl<P: SharedPointerKind> From<&str> for Rope<char, P> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<P: SharedPointerKind> From<String> for Rope<char, P> {
    fn from(s: String) -> Self {
        s.chars().collect()
    }
}

impl<'a, C: Clone, P: SharedPointerKind> IntoIterator for &'a Rope<C, P> {
    type Item = C;
    type IntoIter = Iter<C, P>;

    fn into_iter(self) -> Iter<C, P> {
        self.iter()
    }
}

impl<C: Clone, P: SharedPointerKind> IntoIterator for Rope<C, P> {
    type Item = C;
    type IntoIter = Iter<C, P>;

    fn into_iter(self) -> Iter<C, P> {
        Iter::begin(self.root)
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> PartialEq for Rope<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> Eq for Rope<C, P> {}

impl<C: Clone + Ord, P: SharedPointerKind> PartialOrd for Rope<C, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<C: Clone + Ord, P: SharedPointerKind> Ord for Rope<C, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<C: Clone + PartialEq, P: SharedPointerKind> PartialEq<[C]> for Rope<C, P> {
    fn eq(&self, other: &[C]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

impl<C: Clone + PartialEq, P: SharedPointerKind> PartialEq<Vec<C>> for Rope<C, P> {
    fn eq(&self, other: &Vec<C>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == *b)
    }
}

impl<P: SharedPointerKind> PartialEq<str> for Rope<char, P> {
    fn eq(&self, other: &str) -> bool {
        // Byte length says nothing about char count; walk both.
        let mut chars = other.chars();
        for c in self.iter() {
            if chars.next() != Some(c) {
                return false;
            }
        }
        chars.next().is_none()
    }
}

impl<P: SharedPointerKind> PartialEq<&str> for Rope<char, P> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<P: SharedPointerKind> PartialEq<String> for Rope<char, P> {
    fn eq(&self, other: &String) -> bool {
        *self == **other
    }
}

impl<C: Clone + Hash, P: SharedPointerKind> Hash for Rope<C, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for c in self.iter() {
            c.hash(state);
        }
    }
}

impl<C, P: SharedPointerKind> Clone for Rope<C, P> {
    fn clone(&self) -> Self {
        Rope {
            root: SharedPointer::clone(&self.root),
        }
    }
}

impl<C, P: SharedPointerKind> Default for Rope<C, P> {
    fn default() -> Self {
        Rope::new()
    }
}

impl<C: Clone + fmt::Debug, P: SharedPointerKind> fmt::Debug for Rope<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<C: Clone + fmt::Display, P: SharedPointerKind> fmt::Display for Rope<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<C: Clone + serde::Serialize, P: SharedPointerKind> serde::Serialize for Rope<C, P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self.iter() {
            seq.serialize_element(&elt)?;
        }
        seq.end()
    }
}

impl<'de, C: Clone + serde::Deserialize<'de>, P: SharedPointerKind> serde::Deserialize<'de>
    for Rope<C, P>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<C> = Vec::deserialize(deserializer)?;
        Ok(vec.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let mut rope = Rope::<char>::new();
        rope.check_invariants();
        assert!(rope.is_empty());
        assert_eq!(rope.get(0), None);

        rope += 'a';
        rope += Rope::from("bcdefghijklmnopqrstuvwxyz");
        rope += Rope::from("0123456789");
        rope.check_invariants();

        assert_eq!(rope.len(), 36);
        assert_eq!(rope.front(), Some('a'));
        assert_eq!(rope.back(), Some('9'));
        assert_eq!(rope.get(25), Some('z'));
        assert_eq!(rope.get(36), None);
        assert_eq!(rope.to_string(), "abcdefghijklmnopqrstuvwxyz0123456789");

        rope.clear();
        assert!(rope.is_empty());
    }

    #[test]
    fn length_is_additive() {
        let a: Rope<char> = "some left side ".into();
        let b: Rope<char> = "and some right side long enough".into();
        assert_eq!((a.clone() + &b).len(), a.len() + b.len());
    }

    #[test]
    fn concatenation_associates_by_value() {
        let a: Rope<char> = "first piece, long enough to stay ".into();
        let b: Rope<char> = "second piece, also long enough to stay ".into();
        let c: Rope<char> = "third piece, likewise long enough".into();
        let left = (a.clone() + &b) + &c;
        let right = a + &(b + &c);
        assert_eq!(left, right);
        assert_eq!(left.to_vec(), right.to_vec());
    }

    #[test]
    fn empty_is_the_identity_and_shares_roots() {
        let a: Rope<char> = "identity element check, long enough to tree up".into();
        let empty = Rope::<char>::new();
        let left = empty.clone() + &a;
        let right = a.clone() + &empty;
        assert_eq!(left, a);
        assert_eq!(right, a);
        // Root sharing is observable through cursor identity.
        assert_eq!(left.iter(), a.iter());
        assert_eq!(right.iter(), a.iter());
    }

    #[test]
    fn indexing_round_trips_through_materialization() {
        let rope: Rope<char> = Rope::from("walk the whole sequence ").repeat(3);
        let flat = rope.to_vec();
        assert_eq!(rope.len(), flat.len());
        for (idx, c) in flat.iter().enumerate() {
            assert_eq!(rope.get(idx), Some(*c));
        }
    }

    #[test]
    fn substr_matches_the_model() {
        let text = "the quick brown fox jumps over the lazy dog";
        let rope: Rope<char> = text.into();
        let window = rope.substr(4, 15);
        window.check_invariants();
        let model: String = text.chars().skip(4).take(15).collect();
        assert_eq!(window, model);
        assert_eq!(window.len(), 15);
    }

    #[test]
    fn substr_of_a_substr_composes() {
        let rope: Rope<char> = "0123456789abcdefghijklmnopqrstuvwxyz".into();
        let inner = rope.substr(10, 26).substr(0, 6);
        assert_eq!(inner, "abcdef");
    }

    #[test]
    fn from_elem_models_repetition() {
        for count in [0, 1, 31, 32, 33, 100, 1000] {
            let rope: Rope<char> = Rope::from_elem(count, 'y');
            rope.check_invariants();
            assert_eq!(rope.len(), count);
            assert!(rope.iter().all(|c| c == 'y'));
        }
    }

    #[test]
    fn between_shares_long_spans() {
        let rope: Rope<char> = Rope::from("0123456789").repeat(20);
        let start = rope.iter_at(5);
        let end = rope.iter_at(150);
        let mid = Rope::between(&start, &end);
        mid.check_invariants();
        assert_eq!(mid.len(), 145);
        assert_eq!(mid.to_vec(), rope.to_vec()[5..150].to_vec());

        let short = Rope::between(&rope.iter_at(5), &rope.iter_at(15));
        assert_eq!(short, "5678901234");
    }

    #[test]
    fn finds_elements_and_sequences() {
        let rope: Rope<char> = "hello world".into();
        assert_eq!(rope.find(&'o').index(), 4);
        assert_eq!(rope.find_from(&'o', rope.iter_at(5)).index(), 7);
        assert_eq!(rope.find_str("world").index(), 6);
        assert_eq!(rope.find_str("hello").index(), 0);
        assert!(rope.find_str("xyz").is_end());
        assert_eq!(rope.find_str("").index(), 0);
    }

    #[test]
    fn needle_search_restarts_after_partial_matches() {
        // The needle's own prefix recurs inside a partial match.
        let rope: Rope<char> = "aaabaaabaab".into();
        assert_eq!(rope.find_str("aab").index(), 1);
        let rope: Rope<char> = "ababac".into();
        assert_eq!(rope.find_str("abac").index(), 2);
    }

    #[test]
    fn parses_decimals() {
        let mut rope = Rope::<char>::new();
        for c in '0'..='9' {
            rope += c;
        }
        assert_eq!(rope.to_string(), "0123456789");
        assert_eq!(rope.as_decimal::<i32>(), 123456789);
        assert_eq!(rope.as_decimal::<u64>(), 123456789);

        assert_eq!(Rope::<char>::from("-42").as_decimal::<i64>(), -42);
        assert_eq!(Rope::<char>::from("").as_decimal::<i32>(), 0);
        assert_eq!(Rope::<char>::from("12ab").as_decimal::<i32>(), 12);
        assert_eq!(Rope::<char>::from("-").as_decimal::<i32>(), 0);
        assert_eq!(Rope::<char>::from("x7").as_decimal::<i32>(), 0);
    }

    #[test]
    fn compares_against_strings_and_slices() {
        let rope: Rope<char> = "needle".into();
        assert_eq!(rope, "needle");
        assert_eq!(rope, String::from("needle"));
        assert_ne!(rope, "needl");
        assert_ne!(rope, "needles");

        let bytes: Rope<u8> = Rope::from_slice(b"raw");
        assert_eq!(bytes, b"raw"[..]);
        assert_eq!(bytes, b"raw".to_vec());
    }

    #[test]
    fn aliases_survive_mutation() {
        let mut rope: Rope<char> = "shared base that is long enough to tree".into();
        let alias = rope.clone();
        rope += Rope::from(" plus a tail");
        rope.clear();
        assert_eq!(alias, "shared base that is long enough to tree");
    }

    #[test]
    fn serde_round_trip() {
        let rope: Rope<char> = "serialize me".into();
        let json = serde_json::to_string(&rope).unwrap();
        let back: Rope<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(rope, back);
    }

    #[test]
    fn display_streams_every_element() {
        let tile: Rope<char> = Rope::from("ab").repeat(3);
        assert_eq!(tile.to_string(), "ababab");
        let nums: Rope<u8> = Rope::from_slice(&[1, 2, 3]);
        assert_eq!(format!("{nums}"), "123");
    }

    #[test]
    fn hashes_agree_with_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(rope: &Rope<char>) -> u64 {
            let mut hasher = DefaultHasher::new();
            rope.hash(&mut hasher);
            hasher.finish()
        }

        // Same sequence, different shapes.
        let flat: Rope<char> = "one two three four five six seven eight".into();
        let mut built = Rope::<char>::new();
        for piece in ["one two three ", "four five six ", "seven eight"] {
            built += piece;
        }
        assert_eq!(flat, built);
        assert_eq!(hash_of(&flat), hash_of(&built));
    }
}
