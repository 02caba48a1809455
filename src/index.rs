//! Index and slice arithmetic.
//!
//! Pure functions mapping caller-supplied positions, which may be negative
//! or out of bounds, onto traversal positions of a chain of known length.
//! Nothing here touches a list; [`List`](crate::List) calls these and the
//! tests exercise them directly.

use crate::Error;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Bounds                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A normalized slice selection over a sequence of known length.
///
/// Produced by [`bounds`]. The range is half-open in the direction of the
/// step: the start position is on stride and selected when in range, the
/// stop position is never selected.

#[derive(Clone, Copy, Debug)]
pub struct Bounds {
  start: isize,
  stop: isize,
  step: isize,
}

impl Bounds {
  /// Whether the value at traversal position `position` is selected.

  #[inline(always)]
  pub fn selects(&self, position: usize) -> bool {
    let i = position as isize;

    let within =
      if self.step > 0 {
        self.start <= i && i < self.stop
      } else {
        self.stop < i && i <= self.start
      };

    within && (i - self.start) % self.step == 0
  }

  /// Whether the selection runs in traversal order, that is, whether the
  /// step is positive.

  #[inline(always)]
  pub fn is_forward(&self) -> bool {
    self.step > 0
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Resolves a possibly negative index against a sequence of length `len`.
///
/// A negative index counts from the end, `-1` denoting the last element.
/// Returns `None` when `index >= len` or `len + index < 0`.

#[inline(always)]
pub fn resolve(index: isize, len: usize) -> Option<usize> {
  if index < 0 {
    let i = len as isize + index;
    if i < 0 { None } else { Some(i as usize) }
  } else if (index as usize) < len {
    Some(index as usize)
  } else {
    None
  }
}

/// Clamps an insertion position to `0 ..= len`.
///
/// A negative position counts from the end and is floored at the front; a
/// position at or past the end clamps to `len`, that is, to insertion
/// after the last element.

#[inline(always)]
pub fn clamp(position: isize, len: usize) -> usize {
  if position < 0 {
    let i = len as isize + position;
    if i < 0 { 0 } else { i as usize }
  } else if (position as usize) > len {
    len
  } else {
    position as usize
  }
}

/// Normalizes slice-style bounds against a sequence of length `len`.
///
/// The rules are those of language-level slicing:
///
/// - an omitted `step` is 1;
/// - a negative `start` or `stop` has `len` added to it once, then
///   saturates at the boundary fitting the step direction (`0` stepping
///   forward, one before the first element stepping backward);
/// - a `start` or `stop` at or past the end saturates at `len` for a
///   positive step and at `len - 1` for a negative one;
/// - an omitted `start` or `stop` selects everything on its side of the
///   range: `0 .. len` stepping forward, the last element down to and
///   including the first stepping backward.
///
/// A selection whose stop is on the wrong side of its start is empty, not
/// an error.
///
/// # Errors
///
/// Returns [`Error::ZeroStep`] when `step` is `Some(0)`.

pub fn bounds(
  start: Option<isize>,
  stop: Option<isize>,
  step: Option<isize>,
  len: usize,
) -> Result<Bounds, Error> {
  let step = step.unwrap_or(1);

  if step == 0 {
    return Err(Error::ZeroStep);
  }

  let len = len as isize;

  let (first, last) = if step > 0 { (0, len) } else { (len - 1, -1) };

  let start = match start { None => first, Some(i) => saturate(i, len, step) };
  let stop = match stop { None => last, Some(i) => saturate(i, len, step) };

  Ok(Bounds { start, stop, step })
}

#[inline(always)]
fn saturate(index: isize, len: isize, step: isize) -> isize {
  if index < 0 {
    let i = index + len;
    if i < 0 { if step < 0 { -1 } else { 0 } } else { i }
  } else if index >= len {
    if step < 0 { len - 1 } else { len }
  } else {
    index
  }
}
