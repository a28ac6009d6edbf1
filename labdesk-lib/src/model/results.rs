//! Result bodies of the bulk lab work functions

use serde::Deserialize;
use serde::Serialize;

/// Sum of `minimalPoint` over all lab works.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumResult {
    pub sum: f64,
}

/// Number of lab works matching a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub count: i64,
}

/// Number of lab works removed by a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted: i64,
}
