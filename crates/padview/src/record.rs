use bytemuck::Zeroable;

/// The composite type under study. `repr(C)` keeps the declared field order,
/// so the compiler must insert padding in front of every 8-byte field that
/// would otherwise start at a misaligned offset.
///
/// `MyStruct` is deliberately not `Pod`: a type with padding bytes has no
/// uniform byte-level meaning, which is exactly what the raw-word view in
/// [`crate::RawWordCursor`] makes visible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
pub struct MyStruct {
	pub a: i32,
	pub b: f64,
	pub c: i32,
	pub d: i64,
}

/// Base value for field `b`. Large enough that both 4-byte halves of the
/// float's bit pattern are non-zero.
pub const BASE_B: f64 = 10_000_000_000.0;

/// Base value for field `d`. 2^32, so the value cannot fit in the low
/// 4-byte half alone.
pub const BASE_D: i64 = 4_294_967_296;
