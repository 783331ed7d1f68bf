//! The typed view: a cursor that knows the record's field layout.

use std::ptr;

use crate::MyStruct;
use crate::PadviewError;
use crate::Result;

/// Non-owning cursor positioned at one element of a record slice.
///
/// Moving the cursor by one element moves the referenced address by exactly
/// `size_of::<MyStruct>()` bytes — padding included — never by the naive sum
/// of the field sizes.
#[derive(Clone, Copy, Debug)]
pub struct TypedCursor<'a> {
	records: &'a [MyStruct],
	index: usize,
}

/// Raw pointers to each field of one record, for address reporting. The
/// pointers are opaque tokens; nothing in the crate reads through them.
#[derive(Clone, Copy, Debug)]
pub struct FieldAddresses {
	pub a: *const i32,
	pub b: *const f64,
	pub c: *const i32,
	pub d: *const i64,
}

impl<'a> TypedCursor<'a> {
	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when `index >= records.len()`.
	pub fn new(records: &'a [MyStruct], index: usize) -> Result<Self> {
		if index >= records.len() {
			return Err(PadviewError::IndexOutOfRange {
				index,
				count: records.len(),
			});
		}
		Ok(Self { records, index })
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn record(&self) -> &'a MyStruct {
		// In range by construction.
		&self.records[self.index]
	}

	/// The address of each field of the current element.
	pub fn addresses(&self) -> FieldAddresses {
		let record = self.record();
		FieldAddresses {
			a: &raw const record.a,
			b: &raw const record.b,
			c: &raw const record.c,
			d: &raw const record.d,
		}
	}

	/// Moves the cursor forward by `elements` whole records.
	///
	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when the target position is
	/// past the end of the slice.
	pub fn advance(&self, elements: usize) -> Result<Self> {
		Self::new(self.records, self.index.saturating_add(elements))
	}

	/// Byte distance from `origin` to this cursor, by address subtraction.
	/// Positive when this cursor sits at a higher address.
	pub fn byte_offset_from(&self, origin: &Self) -> isize {
		let here = ptr::from_ref(self.record()).addr();
		let there = ptr::from_ref(origin.record()).addr();
		here as isize - there as isize
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record_size;

	#[test]
	fn new_rejects_out_of_range_positions() {
		let records = [MyStruct::default(); 4];
		assert!(TypedCursor::new(&records, 3).is_ok());
		let err = TypedCursor::new(&records, 4).unwrap_err();
		assert!(matches!(
			err,
			PadviewError::IndexOutOfRange { index: 4, count: 4 }
		));
	}

	#[test]
	fn advance_moves_by_whole_records() {
		let records = [MyStruct::default(); 4];
		let base = TypedCursor::new(&records, 0).unwrap();
		let third = base.advance(3).unwrap();
		assert_eq!(third.index(), 3);
		assert_eq!(third.byte_offset_from(&base), 3 * record_size() as isize);
	}

	#[test]
	fn advance_past_the_end_fails() {
		let records = [MyStruct::default(); 4];
		let base = TypedCursor::new(&records, 0).unwrap();
		assert!(base.advance(4).is_err());
		assert!(base.advance(usize::MAX).is_err());
	}

	#[test]
	fn field_addresses_are_spaced_by_the_padded_offsets() {
		let records = [MyStruct::default(); 2];
		let cursor = TypedCursor::new(&records, 0).unwrap();
		let addresses = cursor.addresses();
		let offsets = crate::field_offsets();
		let base = addresses.a.addr();
		assert_eq!(addresses.b.addr() - base, offsets.b);
		assert_eq!(addresses.c.addr() - base, offsets.c);
		assert_eq!(addresses.d.addr() - base, offsets.d);
	}
}
