//! Everything needed to load the documentation site configuration
//! (navbar links, favicon, stylesheets and the Doxyfile reference).
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The TOML file is first deserialized into the private `UnresolvedConfiguration`
//! structure, which mirrors the file exactly. Its `resolve`
//! method then turns it (and its sections) into the resolved, read-only
//! [`Configuration`].
//!
//! Resolution only normalizes: an empty label becomes an absent one, omitted
//! lists become empty ones. Whether targets, URLs or files actually exist is
//! left to the external documentation generator; see [`crate::check`] for an
//! opt-in structural report.

#![allow(rustdoc::private_intra_doc_links)]

mod structure;
mod traits;
mod utilities;

pub use structure::*;
