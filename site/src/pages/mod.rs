//! Routed pages.

pub mod contact;
pub mod design;
pub mod home;
