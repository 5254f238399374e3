//! Version-agnostic domain model
//!
//! The stable contract between the dispatch layer and the business logic.
//! Nothing in this module knows which wire version a value came from; the
//! per-version codecs in [`crate::protocol`] are the only place that
//! distinction exists.

mod fault;
mod meter;
mod service;
mod types;

pub use fault::{FaultCode, OcppFault};
pub use meter::{
    Location, Measurand, MeterReading, MeterSample, ReadingContext, UnitOfMeasure, ValueFormat,
};
pub use service::CentralSystemService;
pub use types::{
    AuthorizationStatus, BootNotification, BootNotificationResult, ChargePointErrorCode,
    ChargePointStatus, ConnectorScope, FirmwareStatus, IdTagInfo, Scope, StartTransactionResult,
};
