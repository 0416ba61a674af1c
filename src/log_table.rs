//! Bus log ingestion
//!
//! The emulator writes one row per tick with three comma-separated line
//! levels and no header: `data,clock,attention`. The whole log is read into
//! memory; row order is the time axis.

use crate::chart::padded_range;
use crate::error::{PlotError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Number of columns every log row must carry
pub const FIELD_COUNT: usize = 3;

/// Widest padded y axis accepted; tick placement scales by powers of ten
/// above the span and overflows near `f64::MAX`
pub const MAX_AXIS_SPAN: f64 = 1e300;

/// One of the three logged bus lines, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Data,
    Clock,
    Attention,
}

impl Signal {
    /// All signals in column (and panel) order
    pub const ALL: [Signal; 3] = [Signal::Data, Signal::Clock, Signal::Attention];

    /// Zero-based column index in the log
    pub fn column_index(self) -> usize {
        match self {
            Signal::Data => 0,
            Signal::Clock => 1,
            Signal::Attention => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::Data => "Data",
            Signal::Clock => "Clock",
            Signal::Attention => "Attention",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single tick of the bus log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRecord {
    pub data_value: f64,
    pub clock_value: f64,
    pub attention_value: f64,
}

impl LogRecord {
    pub fn new(data_value: f64, clock_value: f64, attention_value: f64) -> Self {
        Self {
            data_value,
            clock_value,
            attention_value,
        }
    }

    /// Value of the given signal at this tick
    pub fn value(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Data => self.data_value,
            Signal::Clock => self.clock_value,
            Signal::Attention => self.attention_value,
        }
    }
}

/// Ordered, immutable set of log records; index = tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    records: Vec<LogRecord>,
}

impl LogTable {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// Load a log file, rejecting missing, malformed and empty logs
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PlotError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => PlotError::InputRead {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let table = Self::from_reader(BufReader::new(file))?;
        if table.is_empty() {
            return Err(PlotError::EmptyInput {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), rows = table.len(), "loaded bus log");
        Ok(table)
    }

    /// Parse headerless `data,clock,attention` rows from any reader
    ///
    /// Blank lines are skipped. Every other row must have exactly three
    /// finite numeric fields; the first offending row aborts the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut ranges: [Option<(f64, f64)>; FIELD_COUNT] = [None; FIELD_COUNT];
        for (index, row) in csv_reader.records().enumerate() {
            let row = row.map_err(|e| PlotError::InputParse {
                line: e.position().map(|p| p.line()).unwrap_or(index as u64 + 1),
                message: e.to_string(),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or(index as u64 + 1);

            if row.iter().all(str::is_empty) {
                continue;
            }

            if row.len() != FIELD_COUNT {
                return Err(PlotError::InputParse {
                    line,
                    message: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
                });
            }

            let mut values = [0.0f64; FIELD_COUNT];
            for signal in Signal::ALL {
                let column = signal.column_index();
                let value = parse_field(&row[column], signal, line)?;
                ranges[column] = Some(widen_range(ranges[column], value, signal, line)?);
                values[column] = value;
            }
            records.push(LogRecord::new(
                values[Signal::Data.column_index()],
                values[Signal::Clock.column_index()],
                values[Signal::Attention.column_index()],
            ));
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Values of one signal in tick order
    pub fn column(&self, signal: Signal) -> Vec<f64> {
        self.records.iter().map(|r| r.value(signal)).collect()
    }

    /// (min, max) of one signal, `None` for an empty table
    pub fn value_range(&self, signal: Signal) -> Option<(f64, f64)> {
        self.records
            .iter()
            .map(|r| r.value(signal))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

fn parse_field(field: &str, signal: Signal, line: u64) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| PlotError::InputParse {
        line,
        message: format!("{} field is not a number: {:?}", signal, field),
    })?;

    if !value.is_finite() {
        return Err(PlotError::InputParse {
            line,
            message: format!("{} field is not finite: {:?}", signal, field),
        });
    }

    Ok(value)
}

/// Extend a signal's (min, max) with `value`, rejecting spreads whose
/// padded axis exceeds [`MAX_AXIS_SPAN`]
fn widen_range(
    range: Option<(f64, f64)>,
    value: f64,
    signal: Signal,
    line: u64,
) -> Result<(f64, f64)> {
    let (lo, hi) = match range {
        None => (value, value),
        Some((lo, hi)) => (lo.min(value), hi.max(value)),
    };

    let axis = padded_range(lo, hi);
    let span = axis.end - axis.start;
    if span.is_nan() || span > MAX_AXIS_SPAN {
        return Err(PlotError::InputParse {
            line,
            message: format!(
                "{} values span {:e}..{:e}, too wide to plot",
                signal, lo, hi
            ),
        });
    }

    Ok((lo, hi))
}
