//! Signature validation.
//!
//! A signature is declared by the programmer when a command is registered.
//! Structural problems in it are setup-time defects, so they are reported
//! before any argv is parsed.
//!
//! # Examples
//!
//! ```
//! use docargs_core::*;
//!
//! let sig = Signature::new().param("title").param("name");
//! assert!(validate_signature(&sig).is_empty());
//!
//! let dup = Signature::new().param("name").param("name");
//! assert_eq!(
//!     validate_signature(&dup),
//!     vec![SignatureError::DuplicateParameter("name".into())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Signature;

/// Signature validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Parameter name is empty or whitespace-only.
    #[error("parameter name cannot be empty (position {0})")]
    EmptyName(usize),
    /// Parameter name contains whitespace or separator characters.
    #[error("invalid parameter name: {0:?}")]
    InvalidName(String),
    /// Two parameters share a name.
    #[error("duplicate parameter in signature: {0}")]
    DuplicateParameter(String),
    /// Argument takes a name or flag reserved for the generated help.
    #[error("argument {0:?} clashes with the built-in help flag (-h/--help)")]
    ReservedName(String),
}

/// Validates a signature, stopping at the first problem.
pub fn validate_signature(signature: &Signature) -> Vec<SignatureError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (position, param) in signature.iter().enumerate() {
        let name = param.name.as_str();
        if name.trim().is_empty() {
            errors.push(SignatureError::EmptyName(position));
            return errors;
        }

        if name.starts_with('-')
            || name
                .chars()
                .any(|ch| ch.is_whitespace() || matches!(ch, '=' | ',' | ':' | '(' | ')' | '[' | ']'))
        {
            errors.push(SignatureError::InvalidName(name.to_string()));
            return errors;
        }

        if !seen.insert(name) {
            errors.push(SignatureError::DuplicateParameter(name.to_string()));
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_name() {
        let sig = Signature::new().param("ok").param("  ");
        assert_eq!(validate_signature(&sig), vec![SignatureError::EmptyName(1)]);
    }

    #[test]
    fn test_validate_rejects_separator_characters() {
        let sig = Signature::new().param("two words");
        assert_eq!(
            validate_signature(&sig),
            vec![SignatureError::InvalidName("two words".to_string())]
        );

        let dashed = Signature::new().param("--flag");
        assert!(matches!(
            validate_signature(&dashed).as_slice(),
            [SignatureError::InvalidName(_)]
        ));
    }

    #[test]
    fn test_validate_accepts_empty_signature() {
        assert!(validate_signature(&Signature::new()).is_empty());
    }

    #[test]
    fn test_validate_reports_first_duplicate_only() {
        let sig = Signature::new()
            .param("a")
            .param("a")
            .param("b")
            .param("b");
        assert_eq!(
            validate_signature(&sig),
            vec![SignatureError::DuplicateParameter("a".to_string())]
        );
    }
}
