//!
//! Pure grade projection: score to letter/point mapping,
//! GPA aggregation and academic standing. No IO, no state.
//!

mod gpa;
mod grade_scale;
mod standing;

pub use gpa::*;
pub use grade_scale::*;
pub use standing::*;
