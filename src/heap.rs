use libc::c_void;

/// The unaligned system allocator the fallback path sits on.
///
/// Dispatch is static: the fallback functions are generic over this trait,
/// so the default [`LibcHeap`] costs nothing over calling `malloc` directly.
///
/// # Safety
///
/// `alloc` must return null or a pointer to at least `size` writable bytes
/// that stays valid until handed to `free` on the same heap.
pub unsafe trait SystemHeap {
  unsafe fn alloc(
    &self,
    size: usize,
  ) -> *mut u8;

  unsafe fn free(
    &self,
    ptr: *mut u8,
  );
}

/// `malloc` / `free` from the C runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibcHeap;

unsafe impl SystemHeap for LibcHeap {
  #[inline]
  unsafe fn alloc(
    &self,
    size: usize,
  ) -> *mut u8 {
    unsafe { libc::malloc(size) as *mut u8 }
  }

  #[inline]
  unsafe fn free(
    &self,
    ptr: *mut u8,
  ) {
    unsafe { libc::free(ptr as *mut c_void) }
  }
}
