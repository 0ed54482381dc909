use thiserror::Error;

/// Why [`allocate`](crate::allocate) could not hand out a block.
///
/// Both variants carry the request as the caller made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
  /// The system allocator could not satisfy the (possibly enlarged) request.
  #[error("failed to allocate {size} bytes aligned to {alignment}")]
  AllocationFailure { size: usize, alignment: usize },

  /// `size` plus the alignment slack and header does not fit in a `usize`.
  #[error("request of {size} bytes aligned to {alignment} overflows the address space")]
  SizeOverflow { size: usize, alignment: usize },
}

impl AllocError {
  /// Requested size in bytes.
  pub fn size(&self) -> usize {
    match *self {
      AllocError::AllocationFailure { size, .. } | AllocError::SizeOverflow { size, .. } => size,
    }
  }

  pub fn alignment(&self) -> usize {
    match *self {
      AllocError::AllocationFailure { alignment, .. }
      | AllocError::SizeOverflow { alignment, .. } => alignment,
    }
  }
}

pub type Result<T, E = AllocError> = std::result::Result<T, E>;
