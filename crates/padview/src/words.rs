//! The untyped view: one record's storage as a run of fixed-width words.
//!
//! This is where padding becomes observable. The backing block starts out
//! zeroed and is only ever written through individual field stores, so any
//! word that prints as zero at a position no field covers is padding the
//! compiler inserted.

use std::mem::offset_of;
use std::ptr;
use std::slice;

use crate::MyStruct;
use crate::PadviewError;
use crate::RecordArray;
use crate::Result;
use crate::word_count;

/// The fixed-width unit of the untyped view: a 4-byte signed integer,
/// matching the reference platform's `int`.
pub type RawWord = i32;

/// Non-owning cursor over one record's storage, reinterpreted as
/// [`word_count`] raw words. Advancing by one unit moves exactly
/// `size_of::<RawWord>()` bytes, regardless of field boundaries.
#[derive(Clone, Copy, Debug)]
pub struct RawWordCursor<'a> {
	words: &'a [RawWord],
	position: usize,
}

impl<'a> RawWordCursor<'a> {
	/// Positions a raw-word cursor at the start of element `index`.
	///
	/// # Errors
	///
	/// Returns [`PadviewError::IndexOutOfRange`] when `index` is past the
	/// end of the array.
	pub fn new(array: &'a RecordArray, index: usize) -> Result<Self> {
		Ok(Self {
			words: words_of(array.get(index)?),
			position: 0,
		})
	}

	/// The word under the cursor, or `None` one past the end.
	pub fn word(&self) -> Option<RawWord> {
		self.words.get(self.position).copied()
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// The whole word run at once.
	pub fn words(&self) -> &'a [RawWord] {
		self.words
	}

	/// Moves forward by `words` units, stopping one past the end.
	#[must_use]
	pub fn advance(self, words: usize) -> Self {
		Self {
			words: self.words,
			position: self.position.saturating_add(words).min(self.words.len()),
		}
	}
}

/// The single low-level reinterpretation point in the crate. `MyStruct`
/// cannot be `bytemuck::Pod` — it contains padding — so the word view is
/// spelled out here and only handed out via [`RawWordCursor`], which takes
/// its records from a [`RecordArray`].
#[allow(unsafe_code)]
fn words_of(record: &MyStruct) -> &[RawWord] {
	// SAFETY: the slice spans exactly `size_of::<MyStruct>()` bytes of the
	// referenced record. The record lives in a `RecordArray`, whose block is
	// allocated zeroed and written only through field stores, so every byte
	// in the span — padding included — is initialized. `MyStruct` is aligned
	// at least as strictly as `RawWord`, and the borrow keeps the storage
	// alive and unaliased for the returned lifetime.
	unsafe { slice::from_raw_parts(ptr::from_ref(record).cast::<RawWord>(), word_count()) }
}

/// Rebuilds a record from its raw-word decomposition, reading each field
/// back from the word bytes at the compiler-reported offsets.
///
/// # Errors
///
/// Returns [`PadviewError::WordCountMismatch`] unless exactly
/// [`word_count`] words are given.
pub fn record_from_words(words: &[RawWord]) -> Result<MyStruct> {
	if words.len() != word_count() {
		return Err(PadviewError::WordCountMismatch {
			expected: word_count(),
			actual: words.len(),
		});
	}
	// Subslice bounds below are compiler-derived field spans, always inside
	// the record.
	let bytes: &[u8] = bytemuck::cast_slice(words);
	let a = offset_of!(MyStruct, a);
	let b = offset_of!(MyStruct, b);
	let c = offset_of!(MyStruct, c);
	let d = offset_of!(MyStruct, d);
	Ok(MyStruct {
		a: bytemuck::pod_read_unaligned(&bytes[a..a + size_of::<i32>()]),
		b: bytemuck::pod_read_unaligned(&bytes[b..b + size_of::<f64>()]),
		c: bytemuck::pod_read_unaligned(&bytes[c..c + size_of::<i32>()]),
		d: bytemuck::pod_read_unaligned(&bytes[d..d + size_of::<i64>()]),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::populate;

	#[test]
	fn cursor_walks_every_word_once() {
		let array = RecordArray::zeroed(1).unwrap();
		let mut cursor = RawWordCursor::new(&array, 0).unwrap();
		let mut seen = 0;
		while let Some(word) = cursor.word() {
			assert_eq!(word, 0);
			seen += 1;
			cursor = cursor.advance(1);
		}
		assert_eq!(seen, word_count());
		assert_eq!(cursor.position(), word_count());
	}

	#[test]
	fn cursor_rejects_out_of_range_elements() {
		let array = RecordArray::zeroed(2).unwrap();
		let err = RawWordCursor::new(&array, 2).unwrap_err();
		assert!(matches!(
			err,
			PadviewError::IndexOutOfRange { index: 2, count: 2 }
		));
	}

	#[test]
	fn reconstruction_rejects_wrong_word_counts() {
		let words = vec![0; word_count() - 1];
		let err = record_from_words(&words).unwrap_err();
		assert!(matches!(err, PadviewError::WordCountMismatch { .. }));
	}

	#[test]
	fn reconstruction_round_trips_a_populated_record() {
		let mut array = RecordArray::zeroed(4).unwrap();
		populate(&mut array);
		let cursor = RawWordCursor::new(&array, 3).unwrap();
		let rebuilt = record_from_words(cursor.words()).unwrap();
		assert_eq!(&rebuilt, array.get(3).unwrap());
	}
}
