use thiserror::Error;

use vaultform_client::ClientError;
use vaultform_entry::{EntrySubType, EntryType};

/// Errors surfaced by the provider layer
///
/// Every variant renders as a short fixed summary plus the underlying
/// detail, matching the diagnostics shape the driving framework reports to
/// the user. Nothing is retried here; a failed operation leaves prior
/// state untouched.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Malformed input (bad UUID, bad import token)
    #[error("{summary}: {detail}")]
    Validation { summary: String, detail: String },

    /// The fetched entry's type/subtype tags disagree with the expected
    /// subtype
    #[error("invalid entry type: expected a {expected} credential entry, got {actual_type}/{actual_sub_type}")]
    TypeMismatch {
        expected: EntrySubType,
        actual_type: EntryType,
        actual_sub_type: EntrySubType,
    },

    /// Opaque failure from the vault client, message passed through
    /// verbatim
    #[error("{summary}: {detail}")]
    Client { summary: String, detail: String },
}

impl ProviderError {
    pub fn validation(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn client(summary: impl Into<String>, err: ClientError) -> Self {
        Self::Client {
            summary: summary.into(),
            detail: err.to_string(),
        }
    }

    /// Render as a (summary, detail) diagnostic for the driving framework.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            ProviderError::Validation { summary, detail }
            | ProviderError::Client { summary, detail } => Diagnostic {
                summary: summary.clone(),
                detail: detail.clone(),
            },
            ProviderError::TypeMismatch { expected, .. } => Diagnostic {
                summary: "invalid entry type".to_string(),
                detail: format!("expected a {} credential entry.", expected),
            },
        }
    }
}

/// A structured diagnostic: short fixed title plus underlying detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_diagnostic() {
        let err = ProviderError::TypeMismatch {
            expected: EntrySubType::PrivateKey,
            actual_type: EntryType::Credential,
            actual_sub_type: EntrySubType::Default,
        };
        let diagnostic = err.diagnostic();
        assert_eq!(diagnostic.summary, "invalid entry type");
        assert_eq!(diagnostic.detail, "expected a PrivateKey credential entry.");
    }

    #[test]
    fn test_client_error_passes_message_through() {
        let err = ProviderError::client(
            "unable to read entry",
            ClientError::api("server exploded"),
        );
        assert_eq!(
            err.to_string(),
            "unable to read entry: vault API error: server exploded"
        );
    }
}
