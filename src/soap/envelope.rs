//! Envelope body element model

use serde_json::Value;

use super::fault::SoapFault;

// ── BodyElement ────────────────────────────────────────────────

/// One payload element of a SOAP envelope body.
///
/// `namespace` and `local_name` identify the element; the content is a
/// neutral value tree produced by the transport's XML conversion, so the
/// codecs never touch an XML parser.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyElement {
    pub namespace: String,
    pub local_name: String,
    pub value: Value,
}

impl BodyElement {
    pub fn new(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
            value,
        }
    }
}

// ── EnvelopeBody ───────────────────────────────────────────────

/// Inbound envelope body: zero or more payload elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeBody {
    pub elements: Vec<BodyElement>,
}

impl EnvelopeBody {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Body carrying a single payload element.
    pub fn single(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            elements: vec![BodyElement::new(namespace, local_name, value)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// ── OutboundBody ───────────────────────────────────────────────

/// Outbound envelope body: a success response or a SOAP fault.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundBody {
    Response(BodyElement),
    Fault(SoapFault),
}

impl OutboundBody {
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// The fault, if this body is one.
    pub fn as_fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Response(_) => None,
        }
    }

    /// The response element, if this body is a success.
    pub fn as_response(&self) -> Option<&BodyElement> {
        match self {
            Self::Response(element) => Some(element),
            Self::Fault(_) => None,
        }
    }
}
