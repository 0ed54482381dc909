use std::{
  alloc::{GlobalAlloc, Layout},
  ptr::{self, NonNull},
};

use crate::error::Result;

#[cfg(all(unix, not(feature = "force-fallback")))]
use crate::native as path;

#[cfg(any(not(unix), feature = "force-fallback"))]
use crate::fallback as path;

/// Name of the path compiled into [`allocate`] / [`deallocate`].
pub const PATH: &str = if cfg!(all(unix, not(feature = "force-fallback"))) {
  "native"
} else {
  "fallback"
};

/// Allocates at least `size` bytes whose address is a multiple of `alignment`.
///
/// `alignment` must be a power of two; this is only checked in debug builds.
/// Alignments below pointer size are raised to pointer size. A zero `size` is
/// served as one byte, so the result is always a unique pointer that can be
/// passed to [`deallocate`].
///
/// On Unix this is `posix_memalign`. Elsewhere, or with the `force-fallback`
/// feature, the block is over-allocated from `malloc` and the original
/// pointer is stashed in a header just before the returned address.
///
/// # Errors
///
/// Returns [`AllocError`](crate::AllocError) if the system allocator cannot
/// satisfy the request. The call is never retried.
#[inline]
pub fn allocate(
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  path::allocate(size, alignment)
}

/// Releases a block returned by [`allocate`]. Passing null does nothing.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`allocate`] that has not
/// been released yet. Anything else is undefined behavior, exactly as with
/// `free`.
#[inline]
pub unsafe fn deallocate(ptr: *mut u8) {
  unsafe { path::deallocate(ptr) }
}

/// [`GlobalAlloc`] adapter over [`allocate`] and [`deallocate`].
///
/// Goes through the same path but emits no log records, so an installed
/// logger that allocates while formatting cannot re-enter it.
///
/// ```rust,ignore
/// #[global_allocator]
/// static GLOBAL: raligned::AlignedAllocator = raligned::AlignedAllocator;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AlignedAllocator;

unsafe impl GlobalAlloc for AlignedAllocator {
  #[inline]
  unsafe fn alloc(
    &self,
    layout: Layout,
  ) -> *mut u8 {
    path::allocate_quiet(layout.size(), layout.align())
      .map_or(ptr::null_mut(), NonNull::as_ptr)
  }

  #[inline]
  unsafe fn dealloc(
    &self,
    ptr: *mut u8,
    _layout: Layout,
  ) {
    unsafe { path::deallocate_quiet(ptr) }
  }
}
