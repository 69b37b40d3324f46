//! Solve driver and allocation report.
//!
//! # Algorithm
//!
//! `Allocator` builds one large population of random allocations, keeps
//! the elite by truncation selection, and returns the best individual.
//! Every individual is built independently, so the search is embarrassingly
//! parallel; per-slot random streams keep it reproducible.
//!
//! # Report
//!
//! `AllocationReport` turns the best individual into per-course staffing,
//! seat assignments and the list of unmet demand and idle capacity.

mod driver;
mod report;

pub use driver::{Allocator, Solution};
pub use report::{AllocationReport, CourseStaffing, ProfessorIssue};
