//! Option descriptors, the ordered option table, and the matcher.

use tracing::{debug, trace};

use crate::error::{BadValue, ParseError, Result};
use crate::kind::Kind;
use crate::letters::LetterSet;
use crate::slot::Slot;

/// One option descriptor: names, a typed destination, and help text.
#[derive(Debug, Clone)]
pub struct Opt<'d, 'a> {
    short: Option<char>,
    long: Option<String>,
    slot: Slot<'d, 'a>,
    description: Option<String>,
}

impl<'d, 'a> Opt<'d, 'a> {
    pub fn new(slot: Slot<'d, 'a>) -> Self {
        Opt {
            short: None,
            long: None,
            slot,
            description: None,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    pub fn long(mut self, name: &str) -> Self {
        self.long = Some(name.to_string());
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn slot(&self) -> &Slot<'d, 'a> {
        &self.slot
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The value substring `token` carries for this option, if it matches.
    fn value_in<'t>(
        &self,
        token: &'t str,
        token_letters: LetterSet,
        known: LetterSet,
    ) -> Option<&'t str> {
        if let Some(rest) = token.strip_prefix("--") {
            if rest.is_empty() {
                return None;
            }
            let name = self.long.as_deref()?;
            return rest.strip_prefix(name)?.strip_prefix('=');
        }

        let rest = token.strip_prefix('-')?;
        let first = rest.chars().next()?;
        let short = self.short?;
        let value = &rest[first.len_utf8()..];
        if short == first {
            return Some(value);
        }
        if self.kind().is_flag() && !(token_letters & known & LetterSet::of(short)).is_empty() {
            return Some(value);
        }
        None
    }

    fn bad_value(&self, token: &str, value: &str) -> BadValue {
        BadValue {
            short: self.short,
            long: self.long.clone(),
            kind: self.kind(),
            token: token.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Entry<'d, 'a> {
    /// A section header for help text. Matches nothing.
    Group(String),
    Option(Opt<'d, 'a>),
}

/// What applying one token to the table did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Applied {
    /// Number of descriptors the token matched, failed conversions included.
    pub matched: usize,
    pub failures: Vec<BadValue>,
}

impl Applied {
    pub fn is_err(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// An ordered table of option descriptors.
///
/// `'d` is the lifetime of the caller's destinations and `'a` that of the
/// argument strings that string options borrow.
#[derive(Debug, Clone, Default)]
pub struct OptionTable<'d, 'a> {
    entries: Vec<Entry<'d, 'a>>,
}

impl<'d, 'a> OptionTable<'d, 'a> {
    pub fn new() -> Self {
        OptionTable {
            entries: Vec::new(),
        }
    }

    pub fn option(mut self, opt: Opt<'d, 'a>) -> Self {
        self.entries.push(Entry::Option(opt));
        self
    }

    pub fn group(mut self, description: &str) -> Self {
        self.entries.push(Entry::Group(description.to_string()));
        self
    }

    pub fn entries(&self) -> &[Entry<'d, 'a>] {
        &self.entries
    }

    pub fn options(&self) -> impl Iterator<Item = &Opt<'d, 'a>> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Option(opt) => Some(opt),
            Entry::Group(_) => None,
        })
    }

    /// Short characters of every flag-kind option; these may be grouped
    /// behind a single dash.
    pub fn flag_letters(&self) -> LetterSet {
        let set: LetterSet = self
            .options()
            .filter(|o| o.kind().is_flag())
            .filter_map(|o| o.short)
            .collect();
        trace!(letters = %set, "built flag letter set");
        set
    }

    /// Apply a single argument token against every descriptor.
    ///
    /// Tokens not starting with `-`, and the bare `-`, match nothing. A token
    /// may match several descriptors: `-abc` sets every flag among `a`, `b`
    /// and `c` that is in `known`. Conversion failures are reported on stderr
    /// and collected; the remaining descriptors are still tried.
    pub fn apply(&self, token: &'a str, known: LetterSet) -> Applied {
        let mut applied = Applied::default();
        if !token.starts_with('-') || token == "-" {
            return applied;
        }

        let token_letters = LetterSet::from_letters(&token[1..]);
        for opt in self.options() {
            let Some(value) = opt.value_in(token, token_letters, known) else {
                continue;
            };
            applied.matched += 1;

            if opt.slot.assign(value).is_err() {
                let err = opt.bad_value(token, value);
                debug!(token, value, kind = %opt.kind(), "option value not convertible");
                eprintln!("{}", err);
                applied.failures.push(err);
                continue;
            }
            debug!(
                token,
                value,
                short = ?opt.short,
                long = opt.long_name(),
                "applied option"
            );
        }
        applied
    }

    /// Apply every argument in order.
    ///
    /// The flag letter set is built once. All arguments are processed even
    /// after a failure; the error lists every value that did not convert.
    pub fn parse_all<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        let known = self.flag_letters();
        let mut failures = Vec::new();
        for arg in args {
            failures.extend(self.apply(arg.as_ref(), known).failures);
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ParseError { failures })
        }
    }
}
