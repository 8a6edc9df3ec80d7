//! Page-wide visual and accessibility behaviour. Each module keeps its
//! decisions in plain functions; the browser wiring sits next to them.

pub mod cards;
pub mod focus;
pub mod header;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod typewriter;
pub mod visibility;
