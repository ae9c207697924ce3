use crate::casefile::{categorize, RawCase, RawObjective};
use barroute::{Case, CaseId, RouteError};
use std::convert::TryFrom;

fn objective_bars(objective: &RawObjective) -> Result<u32, RouteError> {
    u32::try_from(objective.bars).map_err(|_| RouteError::InvalidObjective {
        reason: format!("cannot deliver {} bars", objective.bars),
    })
}

/// Turns the records of one case into a routable case. Every location is categorized by
/// its name before any road is added.
pub fn build_case(raw: &RawCase) -> Result<Case, RouteError> {
    let mut case = Case::new(raw.id);

    for name in &raw.locations {
        case.add_location(name.as_str(), categorize(name));
    }

    for road in &raw.roads {
        case.add_connection(&road.from, &road.to)?;
    }

    let objective = raw
        .objective
        .as_ref()
        .ok_or(RouteError::MissingObjective)?;
    case.set_objective(objective_bars(objective)?, &objective.start, &objective.end)?;

    Ok(case)
}

pub fn build_cases(raw_cases: &[RawCase]) -> Vec<(CaseId, Result<Case, RouteError>)> {
    raw_cases
        .iter()
        .map(|raw| (raw.id, build_case(raw)))
        .collect()
}
