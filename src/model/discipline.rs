use serde::{Deserialize, Serialize};

/// A sport or event category, e.g. Swimming or Judo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: u64,
    pub name: String,
}

/// Wire body of `GET /disciplines`.
#[derive(Debug, Deserialize)]
pub(crate) struct DisciplinesResponse {
    pub data: Vec<Discipline>,
}
