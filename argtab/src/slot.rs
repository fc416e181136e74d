//! Typed destinations for parsed option values.
//!
//! A [`Slot`] pairs the declared [`Kind`] with a reference to caller-owned
//! storage. Destinations are [`Cell`]s so several options can share one
//! variable, which is how a group of flags ORs bits into a single integer.

use std::cell::Cell;
use std::ffi::{c_int, c_long};
use std::fmt;

use crate::kind::Kind;
use crate::number;

/// Raised when a numeric value substring has no convertible prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unconverted;

#[derive(Debug, Clone, Copy)]
pub enum Slot<'d, 'a> {
    /// Borrows the value substring straight out of the argument.
    Str(&'d Cell<Option<&'a str>>),
    Float(&'d Cell<f32>),
    Double(&'d Cell<f64>),
    Int(&'d Cell<c_int>),
    Long(&'d Cell<c_long>),
    U8(&'d Cell<u8>),
    U16(&'d Cell<u16>),
    U32(&'d Cell<u32>),
    U64(&'d Cell<u64>),
    I8(&'d Cell<i8>),
    I16(&'d Cell<i16>),
    I32(&'d Cell<i32>),
    I64(&'d Cell<i64>),
    FlagInt(&'d Cell<c_int>, c_int),
    FlagLong(&'d Cell<c_long>, c_long),
    FlagU8(&'d Cell<u8>, u8),
    FlagU16(&'d Cell<u16>, u16),
    FlagU32(&'d Cell<u32>, u32),
    FlagU64(&'d Cell<u64>, u64),
    FlagI8(&'d Cell<i8>, i8),
    FlagI16(&'d Cell<i16>, i16),
    FlagI32(&'d Cell<i32>, i32),
    FlagI64(&'d Cell<i64>, i64),
}

fn signed(value: &str) -> Result<i64, Unconverted> {
    number::parse_signed(value).map(|(n, _)| n).ok_or(Unconverted)
}

fn unsigned(value: &str) -> Result<u64, Unconverted> {
    number::parse_unsigned(value).map(|(n, _)| n).ok_or(Unconverted)
}

fn float(value: &str) -> Result<f64, Unconverted> {
    number::parse_float(value).map(|(n, _)| n).ok_or(Unconverted)
}

impl<'d, 'a> Slot<'d, 'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Str(_) => Kind::String,
            Slot::Float(_) => Kind::Float,
            Slot::Double(_) => Kind::Double,
            Slot::Int(_) => Kind::Int,
            Slot::Long(_) => Kind::Long,
            Slot::U8(_) => Kind::U8,
            Slot::U16(_) => Kind::U16,
            Slot::U32(_) => Kind::U32,
            Slot::U64(_) => Kind::U64,
            Slot::I8(_) => Kind::I8,
            Slot::I16(_) => Kind::I16,
            Slot::I32(_) => Kind::I32,
            Slot::I64(_) => Kind::I64,
            Slot::FlagInt(..) => Kind::FlagInt,
            Slot::FlagLong(..) => Kind::FlagLong,
            Slot::FlagU8(..) => Kind::FlagU8,
            Slot::FlagU16(..) => Kind::FlagU16,
            Slot::FlagU32(..) => Kind::FlagU32,
            Slot::FlagU64(..) => Kind::FlagU64,
            Slot::FlagI8(..) => Kind::FlagI8,
            Slot::FlagI16(..) => Kind::FlagI16,
            Slot::FlagI32(..) => Kind::FlagI32,
            Slot::FlagI64(..) => Kind::FlagI64,
        }
    }

    /// Convert `value` and write it to the destination.
    ///
    /// Integers are narrowed to the destination width by truncation. Flag
    /// kinds ignore `value` and OR in their bit pattern. On failure the
    /// destination is left untouched.
    pub(crate) fn assign(&self, value: &'a str) -> Result<(), Unconverted> {
        match *self {
            Slot::Str(d) => d.set(Some(value)),
            Slot::Float(d) => d.set(float(value)? as f32),
            Slot::Double(d) => d.set(float(value)?),
            Slot::Int(d) => d.set(signed(value)? as c_int),
            Slot::Long(d) => d.set(signed(value)? as c_long),
            Slot::U8(d) => d.set(unsigned(value)? as u8),
            Slot::U16(d) => d.set(unsigned(value)? as u16),
            Slot::U32(d) => d.set(unsigned(value)? as u32),
            Slot::U64(d) => d.set(unsigned(value)?),
            Slot::I8(d) => d.set(signed(value)? as i8),
            Slot::I16(d) => d.set(signed(value)? as i16),
            Slot::I32(d) => d.set(signed(value)? as i32),
            Slot::I64(d) => d.set(signed(value)?),
            Slot::FlagInt(d, bits) => d.set(d.get() | bits),
            Slot::FlagLong(d, bits) => d.set(d.get() | bits),
            Slot::FlagU8(d, bits) => d.set(d.get() | bits),
            Slot::FlagU16(d, bits) => d.set(d.get() | bits),
            Slot::FlagU32(d, bits) => d.set(d.get() | bits),
            Slot::FlagU64(d, bits) => d.set(d.get() | bits),
            Slot::FlagI8(d, bits) => d.set(d.get() | bits),
            Slot::FlagI16(d, bits) => d.set(d.get() | bits),
            Slot::FlagI32(d, bits) => d.set(d.get() | bits),
            Slot::FlagI64(d, bits) => d.set(d.get() | bits),
        }
        Ok(())
    }

    /// For flag kinds, whether any bit of the pattern is set in the destination.
    pub fn flag_is_set(&self) -> Option<bool> {
        let set = match *self {
            Slot::FlagInt(d, bits) => d.get() & bits != 0,
            Slot::FlagLong(d, bits) => d.get() & bits != 0,
            Slot::FlagU8(d, bits) => d.get() & bits != 0,
            Slot::FlagU16(d, bits) => d.get() & bits != 0,
            Slot::FlagU32(d, bits) => d.get() & bits != 0,
            Slot::FlagU64(d, bits) => d.get() & bits != 0,
            Slot::FlagI8(d, bits) => d.get() & bits != 0,
            Slot::FlagI16(d, bits) => d.get() & bits != 0,
            Slot::FlagI32(d, bits) => d.get() & bits != 0,
            Slot::FlagI64(d, bits) => d.get() & bits != 0,
            _ => return None,
        };
        Some(set)
    }
}

/// Formats the current destination value the way the value dump shows it.
impl fmt::Display for Slot<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(set) = self.flag_is_set() {
            return f.write_str(if set { "True" } else { "False" });
        }
        match *self {
            Slot::Str(d) => f.write_str(d.get().unwrap_or("(null)")),
            Slot::Float(d) => write!(f, "{:.6}", f64::from(d.get())),
            Slot::Double(d) => write!(f, "{:.6}", d.get()),
            Slot::Int(d) => write!(f, "{}", d.get()),
            Slot::Long(d) => write!(f, "{}", d.get()),
            Slot::U8(d) => write!(f, "{}", d.get()),
            Slot::U16(d) => write!(f, "{}", d.get()),
            Slot::U32(d) => write!(f, "{}", d.get()),
            Slot::U64(d) => write!(f, "{}", d.get()),
            Slot::I8(d) => write!(f, "{}", d.get()),
            Slot::I16(d) => write!(f, "{}", d.get()),
            Slot::I32(d) => write!(f, "{}", d.get()),
            Slot::I64(d) => write!(f, "{}", d.get()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_borrows_the_value() {
        let arg = String::from("--name=foo");
        let dest = Cell::new(None);
        Slot::Str(&dest).assign(&arg[7..]).unwrap();
        assert_eq!(dest.get(), Some("foo"));
        assert!(std::ptr::eq(dest.get().unwrap().as_ptr(), arg[7..].as_ptr()));
    }

    #[test]
    fn integers_truncate_to_width() {
        let small = Cell::new(0u8);
        Slot::U8(&small).assign("300").unwrap();
        assert_eq!(small.get(), 44);

        let signed = Cell::new(0i8);
        Slot::I8(&signed).assign("0xff").unwrap();
        assert_eq!(signed.get(), -1);

        let wide = Cell::new(0u64);
        Slot::U64(&wide).assign("0x10").unwrap();
        assert_eq!(wide.get(), 16);
    }

    #[test]
    fn floats_convert() {
        let f = Cell::new(0f32);
        Slot::Float(&f).assign("0.5").unwrap();
        assert_eq!(f.get(), 0.5);

        let d = Cell::new(0f64);
        Slot::Double(&d).assign("-1e2").unwrap();
        assert_eq!(d.get(), -100.0);
        Slot::Double(&d).assign("0x1.8p1").unwrap();
        assert_eq!(d.get(), 3.0);
    }

    #[test]
    fn failure_leaves_destination_alone() {
        let count = Cell::new(7);
        assert_eq!(Slot::Int(&count).assign("XYZ"), Err(Unconverted));
        assert_eq!(count.get(), 7);

        let d = Cell::new(1.5);
        assert_eq!(Slot::Double(&d).assign(""), Err(Unconverted));
        assert_eq!(d.get(), 1.5);
    }

    #[test]
    fn flags_or_their_pattern_and_ignore_value() {
        let flags = Cell::new(0x10u32);
        Slot::FlagU32(&flags, 0x1).assign("not parsed").unwrap();
        Slot::FlagU32(&flags, 0x4).assign("").unwrap();
        assert_eq!(flags.get(), 0x15);

        Slot::FlagU32(&flags, 0x1).assign("").unwrap();
        assert_eq!(flags.get(), 0x15);
    }

    #[test]
    fn flag_state_tests_pattern_bits() {
        let flags = Cell::new(0x2i64);
        assert_eq!(Slot::FlagI64(&flags, 0x2).flag_is_set(), Some(true));
        assert_eq!(Slot::FlagI64(&flags, 0x1).flag_is_set(), Some(false));
        assert_eq!(Slot::I64(&flags).flag_is_set(), None);
    }

    #[test]
    fn display_formats_by_kind() {
        let name = Cell::new(None);
        assert_eq!(Slot::Str(&name).to_string(), "(null)");
        name.set(Some("x"));
        assert_eq!(Slot::Str(&name).to_string(), "x");

        let rate = Cell::new(2.5f64);
        assert_eq!(Slot::Double(&rate).to_string(), "2.500000");
        let gain = Cell::new(0.25f32);
        assert_eq!(Slot::Float(&gain).to_string(), "0.250000");

        let n = Cell::new(-3i16);
        assert_eq!(Slot::I16(&n).to_string(), "-3");

        let flags = Cell::new(1 as c_int);
        assert_eq!(Slot::FlagInt(&flags, 1).to_string(), "True");
        assert_eq!(Slot::FlagInt(&flags, 2).to_string(), "False");
    }

    #[test]
    fn kinds_follow_variants() {
        let n = Cell::new(0i32);
        assert_eq!(Slot::Int(&n).kind(), Kind::Int);
        assert_eq!(Slot::I32(&n).kind(), Kind::I32);
        assert_eq!(Slot::FlagI32(&n, 1).kind(), Kind::FlagI32);
        assert!(Slot::FlagI32(&n, 1).kind().is_flag());
        assert!(!Slot::I32(&n).kind().is_flag());
    }
}
