//! Declarative command-line option tables.
//!
//! An [`OptionTable`] is an ordered list of option descriptors, each pairing
//! a short and/or long name with a typed destination [`Slot`]. Parsing walks
//! the argument vector once and writes into the caller's [`Cell`]s:
//!
//! - `--name=value` sets the option whose long name is `name`
//! - `-cvalue` sets the option whose short name is `c`
//! - `-abc` ORs the bit patterns of flag options `a`, `b` and `c`
//!
//! Positional arguments are ignored. Values that do not convert are reported
//! on stderr and folded into one [`ParseError`]; parsing never stops early.
//!
//! ```
//! use std::cell::Cell;
//! use argtab::{Opt, OptionTable, Slot};
//!
//! let name = Cell::new(None);
//! let flags = Cell::new(0);
//! let args = ["prog", "--name=foo", "-v"];
//! let table = OptionTable::new()
//!     .option(Opt::new(Slot::Str(&name)).short('n').long("name"))
//!     .option(Opt::new(Slot::FlagInt(&flags, 0x1)).short('v').long("verbose"));
//!
//! table.parse_all(&args).unwrap();
//! assert_eq!(name.get(), Some("foo"));
//! assert_eq!(flags.get() & 0x1, 0x1);
//! ```
//!
//! [`Cell`]: std::cell::Cell

pub mod error;
pub mod fatal;
pub mod kind;
pub mod letters;
pub mod number;
mod print;
pub mod slot;
pub mod table;

pub use error::{BadValue, ParseError, Result};
pub use kind::Kind;
pub use letters::LetterSet;
pub use slot::Slot;
pub use table::{Applied, Entry, Opt, OptionTable};
