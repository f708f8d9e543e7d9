//! Presentational components
//!
//! Each component is a small explicit state value plus a `render` method that
//! produces an HTML fragment. State only changes through the transition
//! methods; time and platform capabilities (clipboard, viewport observer) are
//! passed in by the caller, so everything here is deterministic under test.

pub mod code_block;
pub mod disclosure;
pub mod navbar;
pub mod reveal;

pub use code_block::{Clipboard, CodeBlock, CopyButton};
pub use disclosure::{Disclosure, FaqItem};
pub use navbar::{NavLink, Navbar};
pub use reveal::{ElementId, IntersectionEntry, ObserverOptions, ScrollReveal, ViewportObserver};
