//! # Marquee DOM
//!
//! In-memory page model for the Marquee interactivity runtime.
//!
//! This crate provides the document surface the scene crate operates on:
//! - [`Element`]: a page node with id, classes, dataset attributes, an
//!   inline style bag, and page-absolute geometry
//! - [`Document`]: a flat, document-ordered container with class/attribute
//!   queries and parent/child bookkeeping
//! - [`InlineStyle`]: the typed style property bag (opacity, transform,
//!   filter blur, transition declaration, visibility, display, accents)
//! - [`Rect`]: page geometry and visible-fraction math
//!
//! There is no layout engine here; element rects are authored directly, the
//! way a finished page hands the runtime its measured boxes.

pub mod document;
pub mod geometry;
pub mod node;
pub mod style;

pub use document::Document;
pub use geometry::Rect;
pub use node::Element;
pub use style::{
    BoxShadow, Display, InlineStyle, Transform2D, TransitionProperty, TransitionStyle, Visibility,
};
