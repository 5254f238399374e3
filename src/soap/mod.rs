//! Neutral SOAP body model and fault translation
//!
//! The XML transport lives outside this crate; it converts between
//! envelope XML and the element-tree form defined here, with payload
//! content as a `serde_json::Value`. Everything the dispatcher produces
//! is one [`OutboundBody`] per inbound [`EnvelopeBody`].

mod envelope;
mod fault;

pub use envelope::{BodyElement, EnvelopeBody, OutboundBody};
pub use fault::SoapFault;
