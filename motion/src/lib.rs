//! Animation core for the showroom front end.
//!
//! Everything that decides *what moves where* lives here, free of DOM
//! scheduling, so the behavior runs under plain native tests: the smoke
//! particle field, the pointer-parallax pose, eased tweens and counters,
//! the one-shot visibility gate and the viewer's load/degrade sequence.
//! The `site` crate owns frame scheduling and the DOM; the one exception
//! is [`paint`], which draws a [`smoke::SmokeField`] onto a 2D canvas
//! context and is the only module that touches `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Shared numeric constants (blob ranges, thresholds, durations) |
//! | [`easing`] | Easing curves |
//! | [`tween`] | Time-boxed scalar tween |
//! | [`counter`] | Eased count-up for statistics |
//! | [`pulse`] | Periodic scale pulse for the call to action |
//! | [`smoke`] | Smoke particle field (spawn, step, wrap, resize) |
//! | [`parallax`] | Pointer offset to bounded model pose |
//! | [`gate`] | One-shot visibility trigger |
//! | [`sequence`] | Viewer load/degrade orchestration state machine |
//! | [`paint`] | Canvas drawing for the smoke field |

pub mod consts;
pub mod counter;
pub mod easing;
pub mod gate;
pub mod paint;
pub mod parallax;
pub mod pulse;
pub mod sequence;
pub mod smoke;
pub mod tween;
