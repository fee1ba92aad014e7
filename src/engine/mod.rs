//! The generic adapter engine.
//!
//! `bind` validates arguments into ordered query pairs, `request` composes
//! the outbound GET, `transport` executes exactly one HTTP round trip under
//! caller cancellation, `decoder` classifies and leniently decodes the
//! response, and `registry` wires the pipeline behind the dispatch surface.

pub mod binder;
pub mod decoder;
pub mod registry;
pub mod request;
pub mod transport;
