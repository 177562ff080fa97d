//! # PairList
//!
//! The PairList-Format consists of the whitespace separated (line breaks included) integers
//!
//! ```text
//! x y e
//! a_1 b_1
//! ...
//! a_e b_e
//! ```
//!
//! where `x`/`y` are the number of left/right vertices, `e` is the number of pairings and
//! every pair `a b` (`1 <= a <= x`, `1 <= b <= y`) allows left vertex `a` to be matched with
//! right vertex `b`. Lines starting with the comment identifier are skipped.
//!
//! A matching is written as `x`, `y` and the number of matched pairs `k` on separate lines,
//! followed by `k` lines `a b`.

use log::debug;

use super::*;
use crate::prelude::*;

/// A reader for the PairList-Format
#[derive(Debug, Clone)]
pub struct InstanceReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for InstanceReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl InstanceReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> InstanceReader {
        self.comment_identifier = c.into();
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        !self.comment_identifier.is_empty()
            && line.trim_start().starts_with(self.comment_identifier.as_str())
    }

    /// Reads and validates an instance.
    ///
    /// # Errors
    /// - `UnexpectedEof` if the input ends before all announced values were read,
    /// - `InvalidData` if a token is not a non-negative integer, if tokens follow the last
    ///   pairing or if a pairing references a vertex outside of its side.
    ///
    /// # Examples
    /// ```
    /// use umatch::{prelude::*, io::*};
    ///
    /// let input = "c scenario A\n2 2\n3\n1 1\n1 2\n2 1\n";
    /// let instance = InstanceReader::new().try_read_instance(input.as_bytes()).unwrap();
    ///
    /// assert_eq!(instance.number_of_left_nodes(), 2);
    /// assert_eq!(instance.pairs(), &[Edge(1, 1), Edge(1, 2), Edge(2, 1)]);
    /// ```
    pub fn try_read_instance<R: BufRead>(&self, reader: R) -> Result<BipartiteInstance> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if self.is_comment(&line) {
                continue;
            }
            words.extend(line.split_whitespace().map(str::to_owned));
        }

        let mut tokens = words.iter().map(String::as_str);

        let left: NumNodes = parse_next_value!(tokens, "number of left vertices");
        let right: NumNodes = parse_next_value!(tokens, "number of right vertices");
        let number_of_pairs: NumEdges = parse_next_value!(tokens, "number of pairings");

        // do not trust the announced count for preallocation
        let mut pairs = Vec::with_capacity(number_of_pairs.min(1 << 16) as usize);
        for i in 0..number_of_pairs {
            let a = parse_next_value!(tokens, format!("left vertex of pairing #{i}"));
            let b = parse_next_value!(tokens, format!("right vertex of pairing #{i}"));
            pairs.push(Edge(a, b));
        }

        raise_error_unless!(
            tokens.next().is_none(),
            ErrorKind::InvalidData,
            format!("Unexpected input after the last of {number_of_pairs} pairings.")
        );

        debug!("read instance with {left} left, {right} right vertices and {number_of_pairs} pairings");

        Ok(BipartiteInstance::try_new(left, right, pairs)?)
    }
}

/// A writer for matchings in the PairList-Format
#[derive(Debug, Clone, Default)]
pub struct MatchingWriter {
    /// Prefix every section with a human readable label
    labelled: bool,
}

impl MatchingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to the human readable report
    pub fn labelled(mut self, labelled: bool) -> MatchingWriter {
        self.labelled = labelled;
        self
    }

    /// Writes `x`, `y`, the number of matched pairs and every pair `a b` on its own line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    ///
    /// # Examples
    /// ```
    /// use umatch::{prelude::*, io::*};
    ///
    /// let instance = BipartiteInstance::try_new(1, 1, [(1, 1)]).unwrap();
    /// let matching = instance.maximum_matching();
    ///
    /// let mut out = Vec::new();
    /// MatchingWriter::new().try_write_matching(&instance, &matching, &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "1\n1\n1\n1 1\n");
    /// ```
    pub fn try_write_matching<W: Write>(
        &self,
        instance: &BipartiteInstance,
        matching: &Matching,
        mut writer: W,
    ) -> Result<()> {
        let x = instance.number_of_left_nodes();
        let y = instance.number_of_right_nodes();
        let k = matching.len();

        if self.labelled {
            writeln!(writer, "Number of vertices on the left hand side of the graph: {x}")?;
            writeln!(writer, "Number of vertices on the right hand side of the graph: {y}")?;
            writeln!(writer, "Number of edges: {k}")?;
            writeln!(writer, "Edges")?;
            writeln!(writer, "From  To")?;
        } else {
            writeln!(writer, "{x}")?;
            writeln!(writer, "{y}")?;
            writeln!(writer, "{k}")?;
        }

        for pair in matching {
            writeln!(writer, "{pair}")?;
        }

        writer.flush()
    }
}
