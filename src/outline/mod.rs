//! Outline module - OPML loading, tree flattening and task line parsing

pub mod flatten;
pub mod opml;
pub mod parse;
