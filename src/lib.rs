//! # raligned - Portable Aligned Memory Allocation
//!
//! This crate hands out raw memory blocks whose starting address is a
//! multiple of a requested power-of-two alignment, and releases them again,
//! on every platform, whatever the system allocator supports natively.
//!
//! ## Overview
//!
//! ```text
//!   allocate(size, alignment)
//!            │
//!            ├── unix ───────────────► posix_memalign(alignment, size)
//!            │
//!            └── otherwise ──────────► malloc(size + alignment + header)
//!                (or force-fallback)     + adjust + stash raw pointer
//! ```
//!
//! The choice is made at compile time. There is no state shared between
//! calls and no registry of live blocks, so thread safety is exactly that of
//! the C allocator underneath.
//!
//! ## Crate Structure
//!
//! ```text
//!   raligned
//!   ├── align      - align_to! macro and alignment helpers
//!   ├── header     - Hidden raw-pointer slot (fallback path)
//!   ├── heap       - SystemHeap trait and the libc malloc/free heap
//!   ├── fallback   - Over-allocate-and-adjust path
//!   ├── native     - posix_memalign path (unix)
//!   ├── aligned    - allocate / deallocate / AlignedAllocator
//!   └── error      - AllocError
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use raligned::{allocate, deallocate};
//!
//! let ptr = allocate(100, 64).expect("out of memory");
//! assert_eq!(ptr.as_ptr() as usize % 64, 0);
//!
//! unsafe {
//!     ptr.as_ptr().write_bytes(0xAB, 100);
//!     deallocate(ptr.as_ptr());
//! }
//! ```
//!
//! ## Fallback Layout
//!
//! ```text
//!   ┌──────────┬────────────────┬──────────────────────────────┐
//!   │ padding  │  raw pointer   │         User Data            │
//!   └──────────┴────────────────┴──────────────────────────────┘
//!   ▲                           ▲
//!   └── malloc result           └── Pointer returned to user
//!                                   (multiple of alignment)
//! ```
//!
//! ## Safety
//!
//! Releasing a pointer that did not come from [`allocate`], or releasing it
//! twice, is undefined behavior. A pointer must go back through the same
//! path (`native`, `fallback`, or the top-level functions) that produced it.

pub mod align;
mod aligned;
pub mod error;
pub mod fallback;
mod header;
pub mod heap;
#[cfg(unix)]
pub mod native;

pub use aligned::{AlignedAllocator, PATH, allocate, deallocate};
pub use error::{AllocError, Result};
pub use heap::{LibcHeap, SystemHeap};
