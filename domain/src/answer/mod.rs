//! Answer domain
//!
//! - [`response::AnsweredResponse`]: one backend's successful answer
//! - [`verdict::Verdict`]: strict parsing of the equivalence judge's reply
//! - [`display::spread_sections`]: layout helper for side-by-side output

pub mod display;
pub mod response;
pub mod verdict;

pub use display::spread_sections;
pub use response::AnsweredResponse;
pub use verdict::Verdict;
