//! Course staffing allocator for the U-Engine ecosystem.
//!
//! Assigns professors and teaching assistants to courses by building a
//! large population of random allocations, scoring each with a badness
//! function, and keeping the best.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Professor`, `TeachingAssistant`,
//!   `Student`, and allocation records `Individual`, `CourseAssignment`, `TaShare`
//! - **`index`**: Open-addressing name map used for unique names and codes
//! - **`catalog`**: Input records and the immutable per-solve `Catalog`
//! - **`validation`**: Input integrity checks (names, counts, student codes)
//! - **`ga`**: Pools, individual builder, badness function, population
//! - **`allocator`**: Solve driver and allocation report
//! - **`parser`**: Plain-text input format
//! - **`logging`**: Optional console subscriber
//!
//! # Example
//!
//! ```
//! use u_staffing::allocator::Allocator;
//! use u_staffing::catalog::{AllocationRequest, Catalog};
//! use u_staffing::ga::AllocationConfig;
//!
//! let request: AllocationRequest = "\
//! Algebra 2 30
//! P
//! Ivan Petrov Algebra
//! T
//! Anna Lee Algebra
//! S
//! Oleg Sidorov AB123 Algebra
//! ".parse().unwrap();
//!
//! let catalog = Catalog::from_request(&request).unwrap();
//! let allocator = Allocator::new(AllocationConfig::default().with_population_size(200));
//! let solution = allocator.solve(&catalog).unwrap();
//! let report = allocator.report(&catalog, &solution);
//! assert!(report.to_string().ends_with("Total score is 9."));
//! ```
//!
//! # References
//!
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing", Ch. 5
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod ga;
pub mod index;
pub mod logging;
pub mod models;
pub mod parser;
pub mod validation;

pub use error::{ConfigError, Error, ParseError, SetupError};
