use crate::align::HEADER_SIZE;

/// Pointer-sized slot stored immediately before a fallback allocation.
///
/// Holds the unaligned pointer the system heap returned, so the block can be
/// released from the aligned address alone.
#[repr(transparent)]
pub struct Header {
  pub raw: *mut u8,
}

impl Header {
  /// Address of the header slot belonging to `aligned`.
  ///
  /// # Safety
  ///
  /// `aligned` must point at least `HEADER_SIZE` bytes into an allocation.
  #[inline]
  pub unsafe fn slot(aligned: *mut u8) -> *mut Header {
    unsafe { aligned.sub(HEADER_SIZE) as *mut Header }
  }

  /// Stores `raw` in the slot preceding `aligned`.
  ///
  /// # Safety
  ///
  /// `aligned` must be pointer-aligned and have `HEADER_SIZE` writable bytes
  /// in front of it within the same allocation.
  #[inline]
  pub unsafe fn write(
    aligned: *mut u8,
    raw: *mut u8,
  ) {
    unsafe { Self::slot(aligned).write(Header { raw }) }
  }

  /// Reads back the raw pointer stored by [`Header::write`].
  ///
  /// # Safety
  ///
  /// `aligned` must have been passed to [`Header::write`] and the block must
  /// still be live.
  #[inline]
  pub unsafe fn read(aligned: *mut u8) -> *mut u8 {
    unsafe { (*Self::slot(aligned)).raw }
  }
}
