use std::mem;

/// Rounds `value` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two.
///
/// # Examples
///
/// ```rust
/// use raligned::align_to;
///
/// assert_eq!(align_to!(13, 16), 16);
/// assert_eq!(align_to!(64, 64), 64);
/// assert_eq!(align_to!(65, 64), 128);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $alignment:expr) => {
    ($value + $alignment - 1) & !($alignment - 1)
  };
}

/// Size of the hidden header slot that precedes a fallback allocation.
pub const HEADER_SIZE: usize = mem::size_of::<*mut u8>();

/// Returns true if `addr` is a multiple of `alignment`.
#[inline]
pub fn is_aligned(
  addr: usize,
  alignment: usize,
) -> bool {
  addr & (alignment - 1) == 0
}

/// Alignment actually used for a request.
///
/// Anything below pointer size is raised to pointer size: an address that is
/// a multiple of the pointer size is also a multiple of every smaller power
/// of two, and the header slot needs pointer alignment anyway.
#[inline]
pub fn effective_alignment(alignment: usize) -> usize {
  debug_assert!(
    alignment.is_power_of_two(),
    "alignment {alignment} is not a power of two"
  );
  alignment.max(HEADER_SIZE)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_align_to() {
    for shift in 0..13 {
      let alignment = 1usize << shift;

      assert_eq!(align_to!(0usize, alignment), 0);
      assert_eq!(align_to!(alignment, alignment), alignment);

      for value in 1..=alignment {
        assert_eq!(align_to!(value, alignment), alignment);
      }

      assert_eq!(align_to!(alignment + 1, alignment), 2 * alignment);
    }
  }

  #[test]
  fn test_is_aligned() {
    assert!(is_aligned(0, 64));
    assert!(is_aligned(4096, 64));
    assert!(!is_aligned(4095, 64));
    assert!(is_aligned(7, 1));
    assert!(!is_aligned(24, 16));
  }

  #[test]
  fn test_effective_alignment() {
    assert_eq!(effective_alignment(1), HEADER_SIZE);
    assert_eq!(effective_alignment(2), HEADER_SIZE);
    assert_eq!(effective_alignment(HEADER_SIZE), HEADER_SIZE);
    assert_eq!(effective_alignment(64), 64);
    assert_eq!(effective_alignment(1 << 20), 1 << 20);
  }

  #[test]
  #[should_panic]
  #[cfg(debug_assertions)]
  fn test_effective_alignment_rejects_non_power_of_two() {
    effective_alignment(24);
  }
}
