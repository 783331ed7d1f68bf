//! Layout introspection for [`MyStruct`]: sizes, alignments, and field
//! offsets as reported by the compiler for the current target ABI. Nothing
//! here is hardcoded; a different ABI yields different answers and the rest
//! of the crate follows along.

use std::mem::offset_of;

use crate::MyStruct;
use crate::RawWord;

/// Byte offsets of each field within [`MyStruct`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOffsets {
	pub a: usize,
	pub b: usize,
	pub c: usize,
	pub d: usize,
}

/// The record's total size, padding included.
pub const fn record_size() -> usize {
	size_of::<MyStruct>()
}

/// The record's alignment requirement (that of its most demanding field).
pub const fn record_align() -> usize {
	align_of::<MyStruct>()
}

/// How many raw words one record decomposes into.
pub const fn word_count() -> usize {
	record_size() / size_of::<RawWord>()
}

/// Compiler-reported offset of each field.
pub const fn field_offsets() -> FieldOffsets {
	FieldOffsets {
		a: offset_of!(MyStruct, a),
		b: offset_of!(MyStruct, b),
		c: offset_of!(MyStruct, c),
		d: offset_of!(MyStruct, d),
	}
}

/// Whether the byte at `offset` within a record is alignment padding, i.e.
/// lies inside the record but outside every field's span. Offsets at or past
/// [`record_size`] are not part of the record and report `false`.
pub const fn is_padding_byte(offset: usize) -> bool {
	if offset >= record_size() {
		return false;
	}
	let offsets = field_offsets();
	!(within(offset, offsets.a, size_of::<i32>())
		|| within(offset, offsets.b, size_of::<f64>())
		|| within(offset, offsets.c, size_of::<i32>())
		|| within(offset, offsets.d, size_of::<i64>()))
}

const fn within(offset: usize, start: usize, len: usize) -> bool {
	offset >= start && offset < start + len
}
