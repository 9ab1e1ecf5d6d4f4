//! Content generation for the education dashboard backend.
//!
//! Everything here is a pure, request-scoped transformation: template
//! lookups, worksheet assembly, doubt answering, performance analysis and
//! the coaching summary built on top of it.

pub mod analysis;
pub mod doubt;
pub mod insights;
pub mod lenient;
pub mod templates;
pub mod tutor;
pub mod worksheet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty band shared by worksheets and performance analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
