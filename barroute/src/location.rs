//! Locations of a delivery network.

use std::fmt;

/// Toll category of a location. A delivery pays a different toll when entering a town
/// than when entering a village.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
  Town,
  Village,
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Category::Town => write!(f, "town"),
      Category::Village => write!(f, "village"),
    }
  }
}

/// Node data of a case graph. The category is fixed when the location is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
  name: String,
  category: Category,
}

impl Location {
  pub fn new<S: Into<String>>(name: S, category: Category) -> Self {
    Location {
      name: name.into(),
      category,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn category(&self) -> Category {
    self.category
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}
