//! A probe of compiler-inserted struct padding, field alignment, and record
//! pointer arithmetic.
//!
//! One fixed-layout record type, [`MyStruct`], is allocated zeroed in a
//! contiguous array, populated, and then inspected through two non-owning
//! views of the same memory: a [`TypedCursor`] that knows the field layout,
//! and a [`RawWordCursor`] that sees nothing but 4-byte words. Every size,
//! alignment, and offset comes from the compiler, never from a literal.

mod array;
mod cursor;
mod error;
mod layout;
mod record;
mod report;
mod words;

pub use bytemuck;

pub use crate::array::*;
pub use crate::cursor::*;
pub use crate::error::*;
pub use crate::layout::*;
pub use crate::record::*;
pub use crate::report::*;
pub use crate::words::*;
