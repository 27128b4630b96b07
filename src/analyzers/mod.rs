//! Statistics computed over a [`RosterData`](crate::model::RosterData).
//!
//! Both calculators are pure functions of an already validated roster and
//! can run in either order, or concurrently on a shared reference.

pub mod debt;
pub mod rating;
pub mod utility;

pub use debt::{PASSING_SCORE, count_with_debt, has_debt};
pub use rating::{Ratings, calculate_ratings};
