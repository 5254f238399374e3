//! OCPP 1.2 central-system schema (`urn://Ocpp/Cs/2010/08/`)
//!
//! The reduced wire shape: no reservation ids, no transaction data on
//! stop, flat single-value meter records, and the smaller status and
//! error-code sets. The codec never synthesizes the richer 1.5 shapes.

pub mod mapping;
pub mod wire;

mod codec;

pub(crate) use codec::handle;
