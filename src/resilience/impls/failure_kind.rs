use crate::resilience::enums::failure_kind::FailureKind;

impl FailureKind {
    /// Hash field holding the consecutive count for this class.
    pub fn field(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeouts",
            FailureKind::Unavailable => "503s",
        }
    }
}
