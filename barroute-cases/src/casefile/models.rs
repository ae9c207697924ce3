use barroute::CaseId;

// Road is a directed connection between two named locations
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Road {
    pub from: String,
    pub to: String,
}

// RawObjective is the delivery line of a case, before any validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawObjective {
    pub bars: i64,
    pub start: String,
    pub end: String,
}

// RawCase holds the records of one case as they appear in the input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCase {
    pub id: CaseId,
    // Distinct location names, in the order of first appearance
    pub locations: Vec<String>,
    // Distinct roads, in the order of first appearance
    pub roads: Vec<Road>,
    pub objective: Option<RawObjective>,
}

impl RawCase {
    pub fn new(id: CaseId) -> RawCase {
        RawCase {
            id,
            locations: Vec::new(),
            roads: Vec::new(),
            objective: None,
        }
    }
}
