//! Course model.
//!
//! A course offering that needs one professor and a number of TA-led lab
//! sessions, and admits a limited number of students.

use serde::{Deserialize, Serialize};

use super::CourseId;

/// A course offering.
///
/// Immutable once the catalog is built; shared read-only by every
/// candidate allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Sequential id (position in the catalog).
    pub id: CourseId,
    /// Unique display name.
    pub name: String,
    /// Lab sessions to staff with TAs; each session costs one lab-unit.
    pub labs: u32,
    /// Maximum number of enrolled students.
    pub capacity: u32,
}

impl Course {
    /// Creates a course.
    pub fn new(id: CourseId, name: impl Into<String>, labs: u32, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            labs,
            capacity,
        }
    }

    /// Students that cannot be seated given `demand`.
    pub fn overflow(&self, demand: u32) -> u32 {
        demand.saturating_sub(self.capacity)
    }
}
