//! Over-allocate-and-adjust path.
//!
//! ```text
//!   raw                 aligned - HEADER_SIZE   aligned
//!   │                   │                       │
//!   ▼                   ▼                       ▼
//!   ┌───────────────────┬───────────────────────┬──────────────────┬───────┐
//!   │   padding (0..A)  │   Header { raw }      │   size bytes     │ slack │
//!   └───────────────────┴───────────────────────┴──────────────────┴───────┘
//!   ◄──────────────── size + alignment + HEADER_SIZE ─────────────────────►
//! ```

use std::ptr::NonNull;

use crate::{
  align::{HEADER_SIZE, effective_alignment},
  align_to,
  error::{AllocError, Result},
  header::Header,
  heap::{LibcHeap, SystemHeap},
};

/// Allocates `size` bytes aligned to `alignment` from the C heap.
///
/// The returned pointer must be released with [`deallocate`].
pub fn allocate(
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  allocate_in(&LibcHeap, size, alignment)
}

/// Releases a block returned by [`allocate`]. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`allocate`].
pub unsafe fn deallocate(ptr: *mut u8) {
  unsafe { deallocate_in(&LibcHeap, ptr) }
}

/// Same as [`allocate`], drawing the underlying block from `heap`.
pub fn allocate_in<H: SystemHeap>(
  heap: &H,
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  let result = allocate_quiet_in(heap, size, alignment);

  match &result {
    Ok(block) => log::trace!(
      "fallback allocate {size} bytes, align = {alignment}, address = {block:?}"
    ),
    Err(err) => log::debug!("fallback allocation failed: {err}"),
  }

  result
}

/// Same as [`deallocate`], returning the block to `heap`.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`allocate_in`] with the
/// same `heap`.
pub unsafe fn deallocate_in<H: SystemHeap>(
  heap: &H,
  ptr: *mut u8,
) {
  if !ptr.is_null() {
    log::trace!("fallback deallocate address = {ptr:?}");
  }

  unsafe { deallocate_quiet_in(heap, ptr) }
}

/// [`allocate`] without logging, for callers that may be the logger's own
/// allocator.
#[cfg_attr(all(unix, not(feature = "force-fallback")), allow(dead_code))]
pub(crate) fn allocate_quiet(
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  allocate_quiet_in(&LibcHeap, size, alignment)
}

/// [`deallocate`] without logging.
///
/// # Safety
///
/// Same contract as [`deallocate`].
#[cfg_attr(all(unix, not(feature = "force-fallback")), allow(dead_code))]
pub(crate) unsafe fn deallocate_quiet(ptr: *mut u8) {
  unsafe { deallocate_quiet_in(&LibcHeap, ptr) }
}

fn allocate_quiet_in<H: SystemHeap>(
  heap: &H,
  size: usize,
  alignment: usize,
) -> Result<NonNull<u8>> {
  let align = effective_alignment(alignment);
  let request = size.max(1);

  let total = request
    .checked_add(align)
    .and_then(|n| n.checked_add(HEADER_SIZE))
    .ok_or(AllocError::SizeOverflow { size, alignment })?;

  let raw = unsafe { heap.alloc(total) };

  if raw.is_null() {
    return Err(AllocError::AllocationFailure { size, alignment });
  }

  // First multiple of `align` that leaves room for the header. Because
  // `align >= HEADER_SIZE`, the padding before it is at most `align - 1` and
  // the block still ends inside `total`.
  let offset = align_to!(raw as usize + HEADER_SIZE, align) - raw as usize;

  unsafe {
    let aligned = raw.add(offset);
    Header::write(aligned, raw);
    Ok(NonNull::new_unchecked(aligned))
  }
}

unsafe fn deallocate_quiet_in<H: SystemHeap>(
  heap: &H,
  ptr: *mut u8,
) {
  if ptr.is_null() {
    return;
  }

  unsafe { heap.free(Header::read(ptr)) }
}
