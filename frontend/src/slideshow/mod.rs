//! Rotating announcement slideshow.
//!
//! [`controller`] holds the rotation logic and knows nothing about the
//! browser; [`dom`] and [`timer`] plug it into real elements and
//! `setInterval`, and [`component`] renders it.

pub mod announcements;
pub mod component;
pub mod controller;
pub mod dom;
pub mod timer;

pub use component::Slideshow;
