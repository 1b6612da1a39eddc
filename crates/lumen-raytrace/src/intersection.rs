//! Intersection records and hit selection.

use std::cmp::Ordering;
use std::fmt;

use lumen_math::Float;
use serde::{Deserialize, Serialize};

/// Identifier of an object within an [`ObjectPool`](crate::ObjectPool).
///
/// Ids are handed out sequentially from 0 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Sentinel for "not owned by any pool".
    pub const NONE: Self = Self(u32::MAX);

    /// True unless this is [`ObjectId::NONE`].
    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    /// Position in the pool's storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_some() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#none")
        }
    }
}

/// A ray parameter at which the ray meets an object.
///
/// Compared by `(t, object)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Intersection<S> {
    /// Ray parameter.
    pub t: S,
    /// The object that was hit.
    pub object: ObjectId,
}

impl<S: Float> Intersection<S> {
    /// Intersection at `t` with `object`.
    #[inline]
    pub fn new(t: S, object: ObjectId) -> Self {
        Self { t, object }
    }

    /// Intersection at `t` not tied to any object.
    #[inline]
    pub fn unowned(t: S) -> Self {
        Self::new(t, ObjectId::NONE)
    }

    /// Total order on `(t, object)`, NaN parameters sorting last.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.t.total_cmp(&other.t).then(self.object.cmp(&other.object))
    }
}

/// The visible intersection: smallest strictly positive `t`.
///
/// Intersections at `t <= 0` (behind or exactly at the ray origin) and NaN
/// parameters are ignored. Returns `None` when nothing qualifies. Among
/// equal minimal `t` the first one encountered wins.
pub fn hit<'a, S, I>(intersections: I) -> Option<Intersection<S>>
where
    S: Float,
    I: IntoIterator<Item = &'a Intersection<S>>,
{
    let mut best: Option<Intersection<S>> = None;
    for i in intersections {
        if i.t.is_nan() || i.t <= S::ZERO {
            continue;
        }
        match best {
            Some(b) if b.t <= i.t => {}
            _ => best = Some(*i),
        }
    }
    best
}

/// Sort intersections in place by ascending `t`.
pub fn sort_intersections<S: Float>(intersections: &mut [Intersection<S>]) {
    intersections.sort_by(Intersection::total_cmp);
}
