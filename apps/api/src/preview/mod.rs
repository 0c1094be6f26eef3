// Resume preview pipeline: classify lines, project to fragments, format check.
// The classifier is a pure function; everything downstream is a 1:1 map.

pub mod classifier;
pub mod format_check;
pub mod handlers;
pub mod render;
