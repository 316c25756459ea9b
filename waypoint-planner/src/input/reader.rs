//! Line-oriented parser for case streams.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::domain::{Point, Waypoint};

use super::error::InputError;

/// Parse a case-size line. `line` is the 1-based line number, for errors.
pub fn parse_case_size(text: &str, line: usize) -> Result<usize, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::InvalidCaseSize {
            line,
            text: text.to_string(),
        })
}

/// Parse an `x y penalty` line, checking the position against `edge`.
///
/// # Examples
///
/// ```
/// use waypoint_planner::input::parse_waypoint;
///
/// let w = parse_waypoint("30 70 5", 1, 100).unwrap();
/// assert_eq!((w.position().x(), w.position().y(), w.penalty()), (30, 70, 5));
///
/// assert!(parse_waypoint("30 70", 1, 100).is_err());
/// assert!(parse_waypoint("30 170 5", 1, 100).is_err());
/// ```
pub fn parse_waypoint(text: &str, line: usize, edge: u16) -> Result<Waypoint, InputError> {
    let invalid = |reason| InputError::InvalidWaypoint {
        line,
        text: text.to_string(),
        reason,
    };

    let mut fields = text.split_whitespace();
    let (Some(x), Some(y), Some(penalty), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid("expected 3 fields"));
    };

    let x: u16 = x
        .parse()
        .map_err(|_| invalid("x must be a non-negative integer"))?;
    let y: u16 = y
        .parse()
        .map_err(|_| invalid("y must be a non-negative integer"))?;
    let penalty: u32 = penalty
        .parse()
        .map_err(|_| invalid("penalty must be a non-negative integer"))?;

    let position =
        Point::within(x, y, edge).map_err(|source| InputError::OutOfRange { line, source })?;

    Ok(Waypoint::new(position, penalty))
}

/// Reads successive cases from a buffered stream.
///
/// Cases are handed out as [`CaseWaypoints`] iterators, so waypoints can be
/// fed to the planner as they are parsed. A case must be drained before the
/// next one is requested.
pub struct WaypointReader<R> {
    lines: Lines<R>,
    line: usize,
    edge: u16,
    finished: bool,
}

impl<'a> WaypointReader<&'a [u8]> {
    /// Read cases from an in-memory string.
    pub fn from_text(text: &'a str, edge: u16) -> Self {
        Self::new(text.as_bytes(), edge)
    }
}

impl WaypointReader<BufReader<File>> {
    /// Read cases from a file.
    pub fn open(path: impl AsRef<Path>, edge: u16) -> Result<Self, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), edge))
    }
}

impl<R: BufRead> WaypointReader<R> {
    /// Wrap a buffered reader. Positions are validated against `edge`.
    pub fn new(reader: R, edge: u16) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            edge,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        match self.lines.next() {
            Some(text) => {
                self.line += 1;
                Ok(Some(text?))
            }
            None => Ok(None),
        }
    }

    /// Start the next case, or return `None` at the end marker.
    ///
    /// End of input where a case size is expected is treated like the
    /// zero marker.
    pub fn next_case(&mut self) -> Result<Option<CaseWaypoints<'_, R>>, InputError> {
        if self.finished {
            return Ok(None);
        }

        let Some(text) = self.next_line()? else {
            self.finished = true;
            return Ok(None);
        };

        let expected = parse_case_size(&text, self.line)?;
        if expected == 0 {
            self.finished = true;
            return Ok(None);
        }

        Ok(Some(CaseWaypoints {
            reader: self,
            expected,
            read: 0,
        }))
    }

    /// Read the next case in full.
    pub fn read_case(&mut self) -> Result<Option<Vec<Waypoint>>, InputError> {
        match self.next_case()? {
            Some(case) => case.collect::<Result<Vec<_>, _>>().map(Some),
            None => Ok(None),
        }
    }
}

/// The waypoints of one case, parsed lazily.
pub struct CaseWaypoints<'r, R> {
    reader: &'r mut WaypointReader<R>,
    expected: usize,
    read: usize,
}

impl<R> CaseWaypoints<'_, R> {
    /// Number of waypoints announced by the case-size line.
    pub fn expected(&self) -> usize {
        self.expected
    }
}

impl<R: BufRead> Iterator for CaseWaypoints<'_, R> {
    type Item = Result<Waypoint, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.read == self.expected {
            return None;
        }

        let result = match self.reader.next_line() {
            Ok(Some(text)) => {
                self.read += 1;
                return Some(parse_waypoint(&text, self.reader.line, self.reader.edge));
            }
            Ok(None) => Err(InputError::TruncatedCase {
                expected: self.expected,
                found: self.read,
            }),
            Err(e) => Err(e),
        };

        // Nothing more can be read from this case after a stream failure
        self.read = self.expected;
        self.reader.finished = true;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.expected - self.read))
    }
}
