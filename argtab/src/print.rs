//! Help text and current-value dumps.

use std::io::{self, Write};

use crate::table::{Entry, Opt, OptionTable};

/// ` -c --name                ` with the long name padded or cut to 20 columns.
fn option_heading(opt: &Opt<'_, '_>) -> String {
    format!(
        " -{} --{:<20.20}",
        opt.short_name().unwrap_or(' '),
        opt.long_name().unwrap_or("")
    )
}

impl OptionTable<'_, '_> {
    /// Write one line per entry: group descriptions as unindented headers,
    /// options as ` -c --name: description (kind)`.
    pub fn write_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        for entry in self.entries() {
            match entry {
                Entry::Group(description) => writeln!(out, "{}", description)?,
                Entry::Option(opt) => writeln!(
                    out,
                    "{}: {} ({})",
                    option_heading(opt),
                    opt.description_text(),
                    opt.kind()
                )?,
            }
        }
        writeln!(out)
    }

    /// Write the current value of every option's destination. Flags show
    /// `True` when any bit of their pattern is set.
    pub fn write_values<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        for entry in self.entries() {
            match entry {
                Entry::Group(description) => writeln!(out, "{}", description)?,
                Entry::Option(opt) => writeln!(out, "{}{}", option_heading(opt), opt.slot())?,
            }
        }
        writeln!(out)
    }

    pub fn print_help(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_help(&mut out)?;
        out.flush()
    }

    pub fn print_values(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_values(&mut out)?;
        out.flush()
    }
}
