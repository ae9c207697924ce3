use super::models::*;
use barroute::CaseId;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

// Line that closes the input. It carries no case.
const END_OF_CASES: i64 = -1;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: record found before the first case")]
    OutsideCase { line: usize },

    #[error("line {line}: expected 1, 2 or 3 tab separated fields, found {count}")]
    TooManyFields { line: usize, count: usize },

    #[error("line {line}: {case} already has an objective")]
    DuplicateObjective { line: usize, case: CaseId },
}

fn parse_number(line: usize, value: &str) -> Result<i64, ReadError> {
    lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    }
    let invalid = || ReadError::InvalidNumber {
        line,
        value: value.to_string(),
    };
    if !NUMBER_RE.is_match(value) {
        return Err(invalid());
    }
    value.parse::<i64>().map_err(|_| invalid())
}

// Partially read case along with the keys used to drop repeated records
struct OpenCase {
    case: RawCase,
    seen_locations: HashSet<String>,
    seen_roads: HashSet<Road>,
}

impl OpenCase {
    fn new(id: CaseId) -> OpenCase {
        OpenCase {
            case: RawCase::new(id),
            seen_locations: HashSet::new(),
            seen_roads: HashSet::new(),
        }
    }

    fn add_location(&mut self, name: &str) {
        if self.seen_locations.insert(name.to_string()) {
            self.case.locations.push(name.to_string());
        }
    }

    fn add_road(&mut self, from: &str, to: &str) {
        self.add_location(from);
        self.add_location(to);
        let road = Road {
            from: from.to_string(),
            to: to.to_string(),
        };
        if self.seen_roads.insert(road.clone()) {
            self.case.roads.push(road);
        }
    }
}

struct Reader {
    cases: Vec<OpenCase>,
}

impl Reader {
    fn new() -> Reader {
        Reader { cases: Vec::new() }
    }

    fn current(&mut self, line: usize) -> Result<&mut OpenCase, ReadError> {
        self.cases.last_mut().ok_or(ReadError::OutsideCase { line })
    }

    fn read_record(&mut self, line: usize, text: &str) -> Result<(), ReadError> {
        let fields: Vec<&str> = text.split('\t').map(str::trim).collect();
        match fields.as_slice() {
            [header] => {
                if parse_number(line, header)? != END_OF_CASES {
                    let id = CaseId(self.cases.len() as u32 + 1);
                    debug!(line, case = %id, "new case");
                    self.cases.push(OpenCase::new(id));
                }
            }
            [from, to] => {
                self.current(line)?.add_road(from, to);
            }
            [bars, start, end] => {
                let bars = parse_number(line, bars)?;
                let open = self.current(line)?;
                if open.case.objective.is_some() {
                    return Err(ReadError::DuplicateObjective {
                        line,
                        case: open.case.id,
                    });
                }
                open.case.objective = Some(RawObjective {
                    bars,
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
            _ => {
                return Err(ReadError::TooManyFields {
                    line,
                    count: fields.len(),
                })
            }
        }
        Ok(())
    }

    fn read_records<R: BufRead>(&mut self, input: R) -> Result<(), ReadError> {
        for (index, text) in input.lines().enumerate() {
            let line = index + 1;
            let text = text.map_err(|source| ReadError::Read { line, source })?;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            self.read_record(line, text)?;
        }
        Ok(())
    }

    fn cases(self) -> Vec<RawCase> {
        self.cases.into_iter().map(|open| open.case).collect()
    }
}

pub fn parse_cases<R: BufRead>(input: R) -> Result<Vec<RawCase>, ReadError> {
    let mut r = Reader::new();
    r.read_records(input)?;
    Ok(r.cases())
}

pub fn read_cases(filename: &str) -> Result<Vec<RawCase>, ReadError> {
    let t = Instant::now();
    let file = File::open(filename).map_err(|source| ReadError::Io {
        path: filename.to_string(),
        source,
    })?;
    let cases = parse_cases(BufReader::new(file))?;
    info!(
        cases = cases.len(),
        seconds = t.elapsed().as_secs_f32(),
        "read {}",
        filename
    );
    Ok(cases)
}
