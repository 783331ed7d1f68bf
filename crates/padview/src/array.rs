use bytemuck::allocation::try_zeroed_slice_box;

use crate::BASE_B;
use crate::BASE_D;
use crate::MyStruct;
use crate::PadviewError;
use crate::Result;
use crate::TypedCursor;

/// A contiguous, zero-initialized run of [`MyStruct`] records.
///
/// The backing block is requested zeroed from the allocator (the `calloc`
/// analog), sized as `count * size_of::<MyStruct>()` by the allocation
/// facility itself, and released when the array is dropped — on every exit
/// path.
#[derive(Debug)]
pub struct RecordArray {
	records: Box<[MyStruct]>,
}

impl RecordArray {
	/// Allocates `count` zero-initialized records.
	///
	/// # Errors
	///
	/// Returns [`PadviewError::AllocationFailure`] when the allocator cannot
	/// satisfy the request. The demo treats this as fatal: there is nothing
	/// to inspect without the block.
	pub fn zeroed(count: usize) -> Result<Self> {
		let records = try_zeroed_slice_box(count).map_err(|_| {
			PadviewError::AllocationFailure {
				count,
				size: size_of::<MyStruct>(),
			}
		})?;
		Ok(Self { records })
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when `index >= len`.
	pub fn get(&self, index: usize) -> Result<&MyStruct> {
		self.records.get(index).ok_or(PadviewError::IndexOutOfRange {
			index,
			count: self.records.len(),
		})
	}

	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when `index >= len`.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut MyStruct> {
		let count = self.records.len();
		self.records.get_mut(index).ok_or(PadviewError::IndexOutOfRange { index, count })
	}

	/// Positions a typed cursor at element `index`.
	///
	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when `index >= len`.
	pub fn cursor(&self, index: usize) -> Result<TypedCursor<'_>> {
		TypedCursor::new(&self.records, index)
	}

	pub fn as_slice(&self) -> &[MyStruct] {
		&self.records
	}

	pub fn as_mut_slice(&mut self) -> &mut [MyStruct] {
		&mut self.records
	}
}

/// Fills every record with values chosen for observability: small distinct
/// integers in `a` and `c`, and 8-byte values in `b` and `d` whose two
/// 4-byte halves are both non-zero.
///
/// Fields are stored one at a time. A whole-struct assignment would be free
/// to clobber the padding bytes; individual field stores leave them exactly
/// as the zeroed allocation produced them.
pub fn populate(array: &mut RecordArray) {
	for (i, record) in array.as_mut_slice().iter_mut().enumerate() {
		record.a = i as i32;
		record.b = BASE_B + i as f64;
		record.c = i as i32 * 20;
		record.d = BASE_D + i as i64;
	}
}
