use std::fmt;

/// The declared value kind of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Float,
    Double,
    Int,
    Long,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    FlagInt,
    FlagLong,
    FlagU8,
    FlagU16,
    FlagU32,
    FlagU64,
    FlagI8,
    FlagI16,
    FlagI32,
    FlagI64,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::FlagInt => "flag_int",
            Kind::FlagLong => "flag_long",
            Kind::FlagU8 => "flag_u8",
            Kind::FlagU16 => "flag_u16",
            Kind::FlagU32 => "flag_u32",
            Kind::FlagU64 => "flag_u64",
            Kind::FlagI8 => "flag_i8",
            Kind::FlagI16 => "flag_i16",
            Kind::FlagI32 => "flag_i32",
            Kind::FlagI64 => "flag_i64",
        }
    }

    /// Flag kinds OR a fixed bit pattern into their destination and take no value.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Kind::FlagInt
                | Kind::FlagLong
                | Kind::FlagU8
                | Kind::FlagU16
                | Kind::FlagU32
                | Kind::FlagU64
                | Kind::FlagI8
                | Kind::FlagI16
                | Kind::FlagI32
                | Kind::FlagI64
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
