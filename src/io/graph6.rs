/*!
# Graph6

[graph6](https://users.cecs.anu.edu.au/~bdm/data/formats.txt) encodes a simple undirected
graph as a single line of printable ASCII (bytes `63..=126`):

- the first byte is `n + 63` (only the single-byte form for `1 <= n <= 16` is supported),
- the remaining bytes hold the strict lower triangle of the adjacency matrix in row-major
  order (row `i`, columns `0..i`), six bits per byte, most-significant bit first, each
  group written as `bits + 63`; the last group is padded with zero bits.

The length of a valid encoding is therefore fully determined by its first byte.

## Examples

```
use simplegraphs::prelude::*;
use simplegraphs::io::graph6;

let matrix = graph6::decode(b"Bw").unwrap();
assert_eq!(matrix.number_of_edges(), 3);
assert_eq!(graph6::encode(&matrix), "Bw");
```

Files with one graph per line are read and written via [`Graph6Reader`] and
[`Graph6Writer`]:

```
use simplegraphs::prelude::*;
use simplegraphs::io::*;
use std::io::Cursor;

let data = b">>graph6<<A_\nBw\n";
let graphs: Vec<ForwardStar> = Graph6Reader::new()
    .header(true)
    .graphs(Cursor::new(&data[..]))
    .collect::<std::io::Result<_>>()
    .unwrap();

assert_eq!(graphs.len(), 2);
assert_eq!(graphs[1].number_of_edges(), 3);
```
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Optional marker some tools put in front of the first graph of a graph6 file
pub const GRAPH6_HEADER: &str = ">>graph6<<";

/// Offset added to every 6-bit value to make it printable
const BIAS: u8 = 63;

/// Number of adjacency bits packed into one byte
const BITS_PER_BYTE: usize = 6;

/// Returns the length in bytes of the graph6 encoding of a graph with `n` vertices
pub fn encoded_len(n: NumNodes) -> usize {
    let n = n as usize;
    1 + (n * n.saturating_sub(1) / 2).div_ceil(BITS_PER_BYTE)
}

/// Decodes graph6 text into an adjacency matrix.
///
/// # Errors
/// - [`Graph6Error::TooShort`] if `text` is empty or ends before the triangle is complete,
/// - [`Graph6Error::InvalidOrder`] if the first byte does not encode `1..=MAX_NODES`,
/// - [`Graph6Error::InvalidCharacter`] if a triangle byte is not in `63..=126`,
/// - [`Graph6Error::TooLong`] if bytes remain after the triangle.
pub fn decode(text: &[u8]) -> std::result::Result<AdjacencyMatrix, Graph6Error> {
    let (&first, body) = text.split_first().ok_or(Graph6Error::TooShort {
        expected: 1,
        found: 0,
    })?;

    let n = first
        .checked_sub(BIAS)
        .filter(|n| (1..=MAX_NODES as u8).contains(n))
        .ok_or(Graph6Error::InvalidOrder(first))? as NumNodes;

    let expected = encoded_len(n);
    let mut matrix = AdjacencyMatrix::new(n);

    let mut body = body.iter().enumerate();
    let mut bits = 0u8;
    let mut remaining = 0;

    for (i, j) in matrix.lower_triangle() {
        if remaining == 0 {
            let (pos, &byte) = body.next().ok_or(Graph6Error::TooShort {
                expected,
                found: text.len(),
            })?;

            bits = byte
                .checked_sub(BIAS)
                .filter(|&b| b < 1 << BITS_PER_BYTE)
                .ok_or(Graph6Error::InvalidCharacter {
                    position: pos + 1,
                    byte,
                })?;
            remaining = BITS_PER_BYTE;
        }

        remaining -= 1;
        if bits & (1 << remaining) != 0 {
            matrix.set_edge(i, j, true);
        }
    }

    if text.len() > expected {
        return Err(Graph6Error::TooLong {
            expected,
            found: text.len(),
        });
    }

    Ok(matrix)
}

/// Encodes an adjacency matrix as graph6 text
pub fn encode(matrix: &AdjacencyMatrix) -> String {
    let n = matrix.number_of_nodes();
    let mut text = String::with_capacity(encoded_len(n));
    text.push(char::from(n as u8 + BIAS));

    for group in &matrix.lower_triangle().chunks(BITS_PER_BYTE) {
        let mut bits = 0u8;
        let mut len = 0;
        for (i, j) in group {
            bits = (bits << 1) | matrix.has_edge(i, j) as u8;
            len += 1;
        }

        text.push(char::from((bits << (BITS_PER_BYTE - len)) + BIAS));
    }

    text
}

/// A reader for graph6 files containing one graph per line.
#[derive(Debug, Clone, Default)]
pub struct Graph6Reader {
    /// Accept (and skip) a leading `>>graph6<<` on the first graph line
    header: bool,
}

impl Graph6Reader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a leading `>>graph6<<` is accepted on the first graph line
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Returns an iterator over all graphs in `reader`, one per non-empty line.
    /// Malformed lines are reported as errors of kind [`ErrorKind::InvalidData`] wrapping
    /// the corresponding [`Graph6Error`]; iteration may continue past them.
    pub fn graphs<R: BufRead>(&self, reader: R) -> Graph6Graphs<R> {
        Graph6Graphs {
            lines: reader.lines(),
            header: self.header,
            line_number: 0,
        }
    }
}

impl GraphReader<ForwardStar> for Graph6Reader {
    /// Reads the first graph of the input
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<ForwardStar> {
        self.graphs(reader)
            .next()
            .unwrap_or_else(|| Err(io_error!(ErrorKind::NotFound, "No graph6 line found")))
    }
}

/// Iterator over the graphs of a graph6 file, see [`Graph6Reader::graphs`]
pub struct Graph6Graphs<R> {
    lines: Lines<R>,
    /// Strip a header from the next non-empty line
    header: bool,
    line_number: usize,
}

impl<R: BufRead> Iterator for Graph6Graphs<R> {
    type Item = Result<ForwardStar>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            self.line_number += 1;

            if line.is_empty() {
                continue;
            }

            let text = if std::mem::take(&mut self.header) {
                line.strip_prefix(GRAPH6_HEADER).unwrap_or(&line)
            } else {
                &line
            };

            return Some(ForwardStar::try_from_graph6(text).map_err(|err| {
                debug!(line = self.line_number, %err, "rejected graph6 line");
                io_error!(ErrorKind::InvalidData, err)
            }));
        }
    }
}

/// Trait for reading a graph from a reader in graph6.
/// Shorthand for default settings.
pub trait Graph6Read: Sized {
    /// Tries to read the first graph from a given reader
    fn try_read_graph6<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the first graph from a given file
    fn try_read_graph6_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_graph6(BufReader::new(File::open(path)?))
    }
}

impl Graph6Read for ForwardStar {
    fn try_read_graph6<R: BufRead>(reader: R) -> Result<Self> {
        Graph6Reader::default().try_read_graph(reader)
    }
}

/// A writer for graph6 files containing one graph per line
#[derive(Debug, Clone, Default)]
pub struct Graph6Writer {
    /// Prefix the first graph line with `>>graph6<<`
    header: bool,
}

impl Graph6Writer {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the first graph line is prefixed with `>>graph6<<`
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Writes all graphs, one per line
    pub fn try_write_graphs<'a, W, I>(&self, graphs: I, mut writer: W) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a ForwardStar>,
    {
        for (i, graph) in graphs.into_iter().enumerate() {
            if i == 0 && self.header {
                write!(writer, "{GRAPH6_HEADER}")?;
            }
            writeln!(writer, "{graph}")?;
        }

        writer.flush()
    }
}

impl GraphWriter<ForwardStar> for Graph6Writer {
    fn try_write_graph<W: Write>(&self, graph: &ForwardStar, writer: W) -> Result<()> {
        self.try_write_graphs([graph], writer)
    }
}

/// Trait for writing a graph to a writer in graph6.
/// Shorthand for default settings.
pub trait Graph6Write {
    /// Tries to write the graph to a writer
    fn try_write_graph6<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_graph6_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_graph6(writer)
    }
}

impl Graph6Write for ForwardStar {
    fn try_write_graph6<W: Write>(&self, writer: W) -> Result<()> {
        Graph6Writer::default().try_write_graph(self, writer)
    }
}
