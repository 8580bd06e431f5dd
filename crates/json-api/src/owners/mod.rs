//! Owners
//!
//! Callers are authenticated upstream; the gateway forwards the owner as a
//! uuid header.

pub(crate) mod middleware;

pub(crate) use middleware::OWNER_HEADER;
