//! # OCPP-over-SOAP message dispatch
//!
//! Central-system side dispatch layer for OCPP over SOAP. One SOAP
//! envelope body arrives per request; this crate resolves which action the
//! payload represents, detects which protocol version produced it from the
//! payload namespace, translates the version-specific wire payload into
//! version-agnostic domain calls against a [`CentralSystemService`], and
//! translates the result (or fault) back into the wire shape that version
//! of the station expects.
//!
//! ## Architecture
//!
//! - **domain**: version-agnostic types and the `CentralSystemService`
//!   trait the business logic implements
//! - **protocol**: per-version wire schemas, enumeration mapping tables
//!   and codecs (OCPP 1.2 and 1.5)
//! - **dispatch**: action catalog, version detection and orchestration
//! - **soap**: the neutral envelope-body model and fault translation
//!
//! The XML transport and envelope (de)serialization live outside this
//! crate; payload content crosses the boundary as a neutral
//! `serde_json::Value` element tree.

pub mod dispatch;
pub mod domain;
pub mod protocol;
pub mod soap;

pub use dispatch::{dispatch, Action, DispatchError, Version};
pub use domain::{CentralSystemService, FaultCode, OcppFault};
pub use soap::{BodyElement, EnvelopeBody, OutboundBody, SoapFault};
