//! OCPP 1.5 central-system schema (`urn://Ocpp/Cs/2012/06/`)
//!
//! The richer wire shape: reservation ids on start, nested transaction
//! data on stop, attributed multi-reading meter values, the `Reserved`
//! status and the extended error-code set.

pub mod mapping;
pub mod wire;

mod codec;

pub(crate) use codec::handle;
