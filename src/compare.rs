//! Comparator traits and adapters.
//!
//! This module defines:
//! - [`Compare`]: the three-way comparison seam every container operation goes
//!   through.
//! - [`Natural`]: the `Ord`-backed comparator used by the `Default`
//!   constructors.
//! - [`CmpFn`]: an adapter turning a closure into a comparator.

use std::cmp::Ordering;

/// A three-way comparison over `T`.
///
/// A comparator handed to a container at construction fixes both the storage
/// order and the notion of equality: two values are the same element exactly
/// when the comparator returns [`Ordering::Equal`]. It must implement a total
/// order; the containers do not detect violations and their behavior under a
/// non-total comparator is unspecified.
///
/// Scans such as [`matching`](crate::BlockList::matching) and
/// [`between_by`](crate::BlockList::between_by) take a second comparator per
/// query. A probe comparator must be a *consistent coarsening* of the ordering
/// comparator: values equal under the ordering comparator stay equal under the
/// probe, and the probe never decreases along the stored order. A prefix
/// comparator over strings ordered bytewise is the canonical example.
///
/// # Examples
///
/// Implementing a domain ordering directly:
///
/// ```
/// use std::cmp::Ordering;
/// use sortedblocks::compare::Compare;
///
/// struct ByMagnitude;
///
/// impl Compare<i64> for ByMagnitude {
///     fn cmp(&self, a: &i64, b: &i64) -> Ordering {
///         a.abs().cmp(&b.abs()).then_with(|| a.cmp(b))
///     }
/// }
/// ```
pub trait Compare<T> {
    /// Compares two values, returning where `a` sorts relative to `b`.
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

// Borrowed comparators compare like their referent, so a container can lend
// its own ordering comparator to a per-query scan.
impl<T, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        (**self).cmp(a, b)
    }
}

/// The ordering a type already carries through [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a closure to [`Compare`], for ad-hoc orderings and probes.
///
/// # Examples
///
/// ```
/// use sortedblocks::{BlockList, CmpFn};
///
/// let descending = CmpFn(|a: &u32, b: &u32| b.cmp(a));
/// let mut list = BlockList::new(descending, 16);
/// for n in [4u32, 9, 1] {
///     list.try_add(n);
/// }
/// let ordered: Vec<u32> = list.iter().copied().collect();
/// assert_eq!(ordered, vec![9, 4, 1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CmpFn<F>(pub F);

impl<T, F: Fn(&T, &T) -> Ordering> Compare<T> for CmpFn<F> {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
