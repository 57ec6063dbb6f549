//! UI components for the showroom shell and its landing surfaces.

pub mod counters;
pub mod cta;
pub mod hero;
pub mod nav;
pub mod transition;
