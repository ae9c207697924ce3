use barroute::route::UNREACHABLE_SENTINEL;
use barroute::{evaluate_case, Case, CaseId, CaseOutcome, RouteError, SearchConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;
use tracing::warn;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("unknown report format '{}'", value)),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ReportOptions {
    pub format: ReportFormat,
    // Write unreachable cases with the numeric sentinel instead of a marker
    pub legacy_sentinel: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            format: ReportFormat::Text,
            legacy_sentinel: false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub cases: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} cases: {} reachable, {} unreachable, {} failed",
            self.cases, self.reachable, self.unreachable, self.failed
        )
    }
}

#[derive(Serialize)]
struct Entry {
    case: String,
    status: &'static str,
    total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Outcome of every case of a run, ordered by case number
#[derive(Default)]
pub struct Report {
    outcomes: BTreeMap<CaseId, CaseOutcome>,
}

impl Report {
    pub fn new() -> Self {
        Default::default()
    }

    /// Evaluates every built case. Cases which could not be built are recorded as failures.
    pub fn evaluate<I>(cases: I, config: &SearchConfig) -> Self
    where
        I: IntoIterator<Item = (CaseId, Result<Case, RouteError>)>,
    {
        let mut report = Report::new();
        for (id, case) in cases {
            let outcome = match case {
                Ok(case) => evaluate_case(&case, config),
                Err(err) => {
                    warn!(case = %id, error = %err, "invalid case");
                    CaseOutcome::Failed(err)
                }
            };
            report.insert(id, outcome);
        }
        report
    }

    pub fn insert(&mut self, id: CaseId, outcome: CaseOutcome) {
        self.outcomes.insert(id, outcome);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CaseId, &CaseOutcome)> {
        self.outcomes.iter()
    }

    pub fn summary(&self) -> Summary {
        self.outcomes
            .values()
            .fold(Summary::default(), |mut summary, outcome| {
                summary.cases += 1;
                match outcome {
                    CaseOutcome::Cheapest(_) => summary.reachable += 1,
                    CaseOutcome::Unreachable => summary.unreachable += 1,
                    CaseOutcome::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }

    fn text_value(outcome: &CaseOutcome, options: &ReportOptions) -> String {
        match outcome {
            CaseOutcome::Cheapest(route) => route.total.to_string(),
            CaseOutcome::Unreachable if options.legacy_sentinel => UNREACHABLE_SENTINEL.to_string(),
            CaseOutcome::Unreachable => "unreachable".to_string(),
            CaseOutcome::Failed(err) => format!("error: {}", err),
        }
    }

    fn entry(id: CaseId, outcome: &CaseOutcome, options: &ReportOptions) -> Entry {
        let (status, total, error) = match outcome {
            CaseOutcome::Cheapest(route) => ("ok", Some(route.total), None),
            CaseOutcome::Unreachable => (
                "unreachable",
                if options.legacy_sentinel {
                    Some(UNREACHABLE_SENTINEL)
                } else {
                    None
                },
                None,
            ),
            CaseOutcome::Failed(err) => ("error", None, Some(err.to_string())),
        };
        Entry {
            case: id.to_string(),
            status,
            total,
            error,
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W, options: &ReportOptions) -> std::io::Result<()> {
        match options.format {
            ReportFormat::Text => {
                for (id, outcome) in &self.outcomes {
                    writeln!(out, "{}: {}", id, Self::text_value(outcome, options))?;
                }
            }
            ReportFormat::Json => {
                let entries: Vec<Entry> = self
                    .outcomes
                    .iter()
                    .map(|(id, outcome)| Self::entry(*id, outcome, options))
                    .collect();
                serde_json::to_writer_pretty(&mut out, &entries)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }
}

pub fn save_report(report: &Report, path: &str, options: &ReportOptions) -> std::io::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    report.write_to(file, options)
}
