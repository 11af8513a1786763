//! Level arguments.
//!
//! Levels may arrive as integers or as floats (e.g. from a form or JSON
//! number). Anything that is not a whole number in range is rejected with the
//! calculator's message.

use crate::error::CalcError;

pub trait LevelArg: Copy {
    /// The value as an integer, or `None` if it is fractional, NaN or infinite.
    fn as_integer(self) -> Option<i64>;
}

macro_rules! impl_level_arg_int {
    ($($T:ty),*) => {
        $(impl LevelArg for $T {
            fn as_integer(self) -> Option<i64> {
                i64::try_from(self).ok()
            }
        })*
    };
}

impl_level_arg_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl LevelArg for f64 {
    fn as_integer(self) -> Option<i64> {
        if !self.is_finite() || self.fract() != 0.0 {
            return None;
        }
        if self < i64::MIN as f64 || self > i64::MAX as f64 {
            return None;
        }
        Some(self as i64)
    }
}

impl LevelArg for f32 {
    fn as_integer(self) -> Option<i64> {
        f64::from(self).as_integer()
    }
}

/// `level` as `u32` when it is a whole number in `min..=max`.
pub(crate) fn checked<L: LevelArg>(
    level: L,
    min: u32,
    max: u32,
    message: &str,
) -> Result<u32, CalcError> {
    level
        .as_integer()
        .filter(|v| (i64::from(min)..=i64::from(max)).contains(v))
        .map(|v| v as u32)
        .ok_or_else(|| CalcError::InvalidArgument(message.to_string()))
}
