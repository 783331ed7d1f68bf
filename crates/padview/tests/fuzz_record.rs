//! Property-based tests: the raw-word view and the field reconstruction
//! agree for arbitrary field values, and padding stays observable.

use padview::RawWordCursor;
use padview::RecordArray;
use padview::is_padding_byte;
use padview::record_from_words;
use proptest::prelude::*;

fn single_record(a: i32, b: f64, c: i32, d: i64) -> RecordArray {
	let mut array = RecordArray::zeroed(1).unwrap();
	let record = array.get_mut(0).unwrap();
	record.a = a;
	record.b = b;
	record.c = c;
	record.d = d;
	array
}

proptest! {
	#[test]
	fn roundtrip_arbitrary_fields(a: i32, b: f64, c: i32, d: i64) {
		let array = single_record(a, b, c, d);
		let cursor = RawWordCursor::new(&array, 0).unwrap();
		let rebuilt = record_from_words(cursor.words()).unwrap();
		prop_assert_eq!(rebuilt.a, a);
		prop_assert_eq!(rebuilt.b.to_bits(), b.to_bits());
		prop_assert_eq!(rebuilt.c, c);
		prop_assert_eq!(rebuilt.d, d);
	}

	#[test]
	fn padding_survives_arbitrary_field_stores(a: i32, b: f64, c: i32, d: i64) {
		let array = single_record(a, b, c, d);
		let cursor = RawWordCursor::new(&array, 0).unwrap();
		let bytes: &[u8] = bytemuck::cast_slice(cursor.words());
		for (offset, byte) in bytes.iter().enumerate() {
			if is_padding_byte(offset) {
				prop_assert_eq!(*byte, 0u8);
			}
		}
	}

	#[test]
	fn reconstruction_rejects_any_wrong_length(len in 0usize..64) {
		prop_assume!(len != padview::word_count());
		let words = vec![0i32; len];
		prop_assert!(record_from_words(&words).is_err());
	}
}
