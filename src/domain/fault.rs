//! Protocol fault signal

use std::fmt;

use thiserror::Error;

// ── FaultCode ──────────────────────────────────────────────────

/// Machine-readable category of a protocol fault.
///
/// These are the fault codes the SOAP binding of the protocol defines.
/// The dispatcher itself only originates `NotSupported`, `ProtocolError`
/// and `InternalError`; `SecurityError` and `IdentityMismatch` are raised
/// by business logic and passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCode {
    NotSupported,
    InternalError,
    ProtocolError,
    SecurityError,
    IdentityMismatch,
}

impl FaultCode {
    /// The wire literal for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSupported => "NotSupported",
            Self::InternalError => "InternalError",
            Self::ProtocolError => "ProtocolError",
            Self::SecurityError => "SecurityError",
            Self::IdentityMismatch => "IdentityMismatch",
        }
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OcppFault ──────────────────────────────────────────────────

/// A protocol-level fault returned instead of a normal response.
///
/// Business logic raises these through the service trait to signal a
/// protocol-defined rejection; the dispatcher raises them for malformed
/// requests. Either way the fault travels the call chain as an explicit
/// `Err` value and ends up in the outbound fault body, never as an
/// uncaught error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {description}")]
pub struct OcppFault {
    pub code: FaultCode,
    pub description: String,
}

impl OcppFault {
    pub fn new(code: FaultCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    pub fn not_supported(description: impl Into<String>) -> Self {
        Self::new(FaultCode::NotSupported, description)
    }

    pub fn protocol_error(description: impl Into<String>) -> Self {
        Self::new(FaultCode::ProtocolError, description)
    }

    pub fn internal_error(description: impl Into<String>) -> Self {
        Self::new(FaultCode::InternalError, description)
    }
}
