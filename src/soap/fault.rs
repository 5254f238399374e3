//! Fault translation
//!
//! Everything that can go wrong during dispatch ends up here as a
//! structurally valid SOAP fault: classification failures get a distinct
//! fault per cause, business faults pass through with their category and
//! detail untouched.

use std::fmt;

use crate::dispatch::DispatchError;
use crate::domain::{FaultCode, OcppFault};

/// SOAP fault body: machine-readable category plus human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    pub code: FaultCode,
    pub reason: String,
}

impl SoapFault {
    pub fn new(code: FaultCode, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.reason)
    }
}

/// Business and codec faults pass through unmodified.
impl From<OcppFault> for SoapFault {
    fn from(fault: OcppFault) -> Self {
        Self {
            code: fault.code,
            reason: fault.description,
        }
    }
}

/// Classification failures become diagnostic faults, one distinct reason
/// per cause so operators can tell a malformed sender from an unsupported
/// one.
impl From<DispatchError> for SoapFault {
    fn from(error: DispatchError) -> Self {
        let code = match error {
            DispatchError::EmptyBody => FaultCode::ProtocolError,
            DispatchError::UnsupportedAction(_) | DispatchError::UnrecognizedVersion(_) => {
                FaultCode::NotSupported
            }
        };
        Self {
            code,
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_fault_passes_through() {
        let fault = OcppFault::new(FaultCode::SecurityError, "unknown charge point");
        let soap = SoapFault::from(fault);
        assert_eq!(soap.code, FaultCode::SecurityError);
        assert_eq!(soap.reason, "unknown charge point");
    }

    #[test]
    fn classification_faults_are_distinct() {
        let empty = SoapFault::from(DispatchError::EmptyBody);
        let action = SoapFault::from(DispatchError::UnsupportedAction("resetRequest".into()));
        let version =
            SoapFault::from(DispatchError::UnrecognizedVersion("urn://other/".into()));
        assert_eq!(empty.code, FaultCode::ProtocolError);
        assert_eq!(action.code, FaultCode::NotSupported);
        assert_eq!(version.code, FaultCode::NotSupported);
        assert_ne!(action.reason, version.reason);
    }
}
