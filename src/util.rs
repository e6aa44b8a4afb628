/// Numeric conversion helpers.
///
/// This module provides safe functions for narrowing between integer widths
/// without risking silent wraparound. Use these helpers whenever a wider
/// accumulator has to be brought back to a 32-bit value, or a signed value
/// has to be reinterpreted as unsigned.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or the caller-supplied error otherwise.
pub mod num;
