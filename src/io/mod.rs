/*!
# IO

Utilities for reading matching instances from and writing matchings to text streams.
The algorithmic core never performs IO itself; this module parses everything into a
[`BipartiteInstance`](crate::instance::BipartiteInstance) first.

## Format

Currently supported is the **PairList** format (see [`pair_list`]): the whitespace
separated integers `x`, `y`, `e` followed by `e` pairs `a b`. Lines starting with a
comment identifier are skipped.

## Traits

- [`InstanceRead`] reads an instance from any [`BufRead`] or a file using default settings.
- [`MatchingWrite`] writes a matching to any [`Write`] or a file using default settings.

For non-default settings use [`InstanceReader`] and [`MatchingWriter`] directly.
*/

pub mod pair_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::{algo::Matching, instance::BipartiteInstance};

pub use pair_list::*;

/// Trait for reading a [`BipartiteInstance`] in the PairList-Format with default settings
pub trait InstanceRead: Sized {
    /// Tries to read an instance from the given reader
    ///
    /// # Errors
    /// Returns an error if the input is malformed or describes an invalid instance.
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read an instance from the given file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are invalid.
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_instance(BufReader::new(File::open(path)?))
    }
}

impl InstanceRead for BipartiteInstance {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        InstanceReader::default().try_read_instance(reader)
    }
}

/// Trait for writing a [`Matching`] in the PairList-Format with default settings
pub trait MatchingWrite {
    /// Tries to write the matching computed for `instance` to the given writer
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_matching<W: Write>(&self, instance: &BipartiteInstance, writer: W) -> Result<()>;

    /// Tries to write the matching computed for `instance` to the given file
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or writing fails.
    fn try_write_matching_file<P: AsRef<Path>>(
        &self,
        instance: &BipartiteInstance,
        path: P,
    ) -> Result<()> {
        self.try_write_matching(instance, BufWriter::new(File::create(path)?))
    }
}

impl MatchingWrite for Matching {
    fn try_write_matching<W: Write>(&self, instance: &BipartiteInstance, writer: W) -> Result<()> {
        MatchingWriter::default().try_write_matching(instance, self, writer)
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::UnexpectedEof,
                format!("Premature end of input when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", next, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
