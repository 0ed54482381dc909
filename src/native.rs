use std::ptr::{self, NonNull};

use libc::c_void;

use crate::{
  align::effective_alignment,
  error::{AllocError, Result},
};

/// Allocates `size` bytes aligned to `alignment` with `posix_memalign`.
///
/// The returned pointer must be released with [`deallocate`].
pub fn allocate(
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  let result = allocate_quiet(size, alignment);

  match &result {
    Ok(block) => log::trace!(
      "native allocate {size} bytes, align = {alignment}, address = {block:?}"
    ),
    Err(err) => log::debug!("posix_memalign failed: {err}"),
  }

  result
}

/// Releases a block returned by [`allocate`]. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`allocate`].
pub unsafe fn deallocate(ptr: *mut u8) {
  if !ptr.is_null() {
    log::trace!("native deallocate address = {ptr:?}");
  }

  unsafe { deallocate_quiet(ptr) }
}

/// [`allocate`] without logging.
#[cfg_attr(feature = "force-fallback", allow(dead_code))]
pub(crate) fn allocate_quiet(
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  let align = effective_alignment(alignment);
  let mut out: *mut c_void = ptr::null_mut();

  // posix_memalign(0) may hand back null on success.
  let code = unsafe { libc::posix_memalign(&mut out, align, size.max(1)) };

  match NonNull::new(out as *mut u8) {
    Some(block) if code == 0 => Ok(block),
    _ => Err(AllocError::AllocationFailure { size, alignment }),
  }
}

/// [`deallocate`] without logging.
///
/// # Safety
///
/// Same contract as [`deallocate`].
#[cfg_attr(feature = "force-fallback", allow(dead_code))]
pub(crate) unsafe fn deallocate_quiet(ptr: *mut u8) {
  if ptr.is_null() {
    return;
  }

  unsafe { libc::free(ptr as *mut c_void) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::align::is_aligned;

  #[test]
  fn test_allocate_aligned() {
    for alignment in [1, 2, 4, 8, 16, 32, 64, 128, 4096, 1 << 16] {
      let ptr = allocate(100, alignment).unwrap();
      assert!(is_aligned(ptr.as_ptr() as usize, alignment));

      unsafe {
        ptr::write_bytes(ptr.as_ptr(), 0xC3, 100);
        assert_eq!(*ptr.as_ptr().add(99), 0xC3);
        deallocate(ptr.as_ptr());
      }
    }
  }

  #[test]
  fn test_zero_size() {
    for _ in 0..4 {
      let ptr = allocate(0, 16).unwrap();
      assert!(is_aligned(ptr.as_ptr() as usize, 16));
      unsafe { deallocate(ptr.as_ptr()) };
    }
  }

  #[test]
  fn test_huge_request_fails() {
    let err = allocate(usize::MAX / 2, 64).unwrap_err();

    assert_eq!(
      err,
      AllocError::AllocationFailure {
        size: usize::MAX / 2,
        alignment: 64
      }
    );
  }

  #[test]
  fn test_deallocate_null() {
    unsafe { deallocate(ptr::null_mut()) };
  }

  #[test]
  fn test_quiet_route() {
    let ptr = allocate_quiet(4096, 4096).unwrap();
    assert!(is_aligned(ptr.as_ptr() as usize, 4096));

    unsafe {
      ptr::write_bytes(ptr.as_ptr(), 0x77, 4096);
      deallocate_quiet(ptr.as_ptr());
      deallocate_quiet(ptr::null_mut());
    }
  }
}
