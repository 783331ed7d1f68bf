//! The demo's console report: a fixed sequence of lines that lays the typed
//! and untyped views of the same memory side by side.

use std::io::Write;

use crate::PadviewError;
use crate::RawWordCursor;
use crate::RecordArray;
use crate::Result;
use crate::populate;
use crate::record_size;

/// Number of records in the reference scenario.
pub const COUNT: usize = 4;

/// Prints the platform-computed record size. Never a hand-computed sum of
/// field sizes; that sum is wrong as soon as padding is inserted.
pub fn report_record_size(out: &mut impl Write) -> Result<()> {
	writeln!(out, "size of MYSTRUCT = {}", record_size()).map_err(report_io)
}

/// Prints the four field values, then the four field addresses, for the
/// element at `index`.
///
/// # Errors
///
/// Returns [`PadviewError::IndexOutOfRange`] when `index` is past the end
/// of the array.
pub fn report_element(out: &mut impl Write, array: &RecordArray, index: usize) -> Result<()> {
	let cursor = array.cursor(index)?;
	let record = cursor.record();
	writeln!(out, "[{index}] values:").map_err(report_io)?;
	writeln!(out, "a is {}", record.a).map_err(report_io)?;
	writeln!(out, "b is {:.6}", record.b).map_err(report_io)?;
	writeln!(out, "c is {}", record.c).map_err(report_io)?;
	writeln!(out, "d is {}", record.d).map_err(report_io)?;

	let addresses = cursor.addresses();
	writeln!(out, "addresses:").map_err(report_io)?;
	writeln!(out, "a is {:p}", addresses.a).map_err(report_io)?;
	writeln!(out, "b is {:p}", addresses.b).map_err(report_io)?;
	writeln!(out, "c is {:p}", addresses.c).map_err(report_io)?;
	writeln!(out, "d is {:p}", addresses.d).map_err(report_io)?;
	Ok(())
}

/// Prints the raw-word decomposition of the element at `index`, one
/// `v[<i>]=<value>` line per word. Words at positions no field covers print
/// as zero: that is the padding.
///
/// # Errors
///
/// Returns [`PadviewError::IndexOutOfRange`] when `index` is past the end
/// of the array.
pub fn report_raw_words(out: &mut impl Write, array: &RecordArray, index: usize) -> Result<()> {
	let mut cursor = RawWordCursor::new(array, index)?;
	writeln!(out, "Struct at index {index}").map_err(report_io)?;
	while let Some(word) = cursor.word() {
		writeln!(out, "v[{}]={word}", cursor.position()).map_err(report_io)?;
		cursor = cursor.advance(1);
	}
	Ok(())
}

/// Runs the whole demo: allocate zeroed, populate, then report the record
/// size, the first and last elements, and the last element's raw words.
///
/// The array is dropped when this returns, on the error paths included.
pub fn run_demo(out: &mut impl Write) -> Result<()> {
	let mut array = RecordArray::zeroed(COUNT)?;
	populate(&mut array);

	report_record_size(out)?;
	report_element(out, &array, 0)?;
	writeln!(out).map_err(report_io)?;
	report_element(out, &array, COUNT - 1)?;
	writeln!(out).map_err(report_io)?;
	report_raw_words(out, &array, COUNT - 1)?;
	Ok(())
}

fn report_io(source: std::io::Error) -> PadviewError {
	PadviewError::Report { source }
}
