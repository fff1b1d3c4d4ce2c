//! Validated artifact names.
//!
//! [`ValidName`] is the only way a user-supplied name enters the rest of the
//! domain. Construction enforces every naming rule, so planners and templates
//! can embed the name into paths and source text without re-checking.

use std::fmt;

use crate::domain::{artifact::ArtifactKind, error::DomainError};

/// Characters Windows refuses in filesystem entry names.
///
/// Path separators are checked separately so they get their own reason text.
const ILLEGAL_FS_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// An artifact name that passed validation for a specific kind.
///
/// Invariant: non-empty, filesystem-safe, and identifier-shaped when the kind
/// embeds the name into generated symbols. Enforced at construction; there is
/// no other constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidName(String);

impl ValidName {
    /// Validate a raw user-supplied name for the given artifact kind.
    ///
    /// # Rules
    ///
    /// 1. Non-empty after trimming whitespace (`EmptyName`).
    /// 2. No path separators, no `.`/`..` segments, no leading dot, no
    ///    control characters, none of the characters Windows forbids
    ///    (`UnsafeName`).
    /// 3. For kinds that build symbol names (`Component`, `Hook`): must start
    ///    with an ASCII letter or `_` and contain only ASCII alphanumerics
    ///    and `_` (`InvalidIdentifier`).
    ///
    /// Pure function of its input; no filesystem access.
    pub fn parse(raw: &str, kind: ArtifactKind) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        if let Some(reason) = filesystem_objection(raw) {
            return Err(DomainError::UnsafeName {
                name: raw.to_string(),
                reason,
            });
        }

        if kind.requires_identifier() {
            if let Some(reason) = identifier_objection(raw) {
                return Err(DomainError::InvalidIdentifier {
                    name: raw.to_string(),
                    reason,
                });
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a name cannot be a filesystem entry, or `None` if it can.
fn filesystem_objection(name: &str) -> Option<String> {
    if name.contains('/') || name.contains('\\') {
        return Some("name cannot contain path separators".into());
    }
    if name == "." || name == ".." {
        return Some("name cannot be a relative directory segment".into());
    }
    if name.starts_with('.') {
        return Some("name cannot start with '.'".into());
    }
    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Some(format!("name contains control character {:?}", c));
    }
    if let Some(c) = name.chars().find(|c| ILLEGAL_FS_CHARS.contains(c)) {
        return Some(format!("'{c}' is not allowed in file names"));
    }
    None
}

/// Why a name cannot lead a source identifier, or `None` if it can.
fn identifier_objection(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {
            return Some("identifier cannot start with a digit".into());
        }
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some(format!("identifier cannot start with '{c}'"));
        }
        _ => {}
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Some(format!("identifier cannot contain '{c}'"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── emptiness ─────────────────────────────────────────────────────────

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            ValidName::parse("", ArtifactKind::Project),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        assert_eq!(
            ValidName::parse("  ", ArtifactKind::Component),
            Err(DomainError::EmptyName)
        );
    }

    // ── filesystem safety ─────────────────────────────────────────────────

    #[test]
    fn parent_segment_is_unsafe() {
        assert!(matches!(
            ValidName::parse("../x", ArtifactKind::Project),
            Err(DomainError::UnsafeName { .. })
        ));
        assert!(matches!(
            ValidName::parse("..", ArtifactKind::Project),
            Err(DomainError::UnsafeName { .. })
        ));
    }

    #[test]
    fn path_separators_are_unsafe() {
        assert!(ValidName::parse("a/b", ArtifactKind::Project).is_err());
        assert!(ValidName::parse("a\\b", ArtifactKind::Project).is_err());
    }

    #[test]
    fn dotfile_name_is_unsafe() {
        assert!(matches!(
            ValidName::parse(".hidden", ArtifactKind::Project),
            Err(DomainError::UnsafeName { .. })
        ));
    }

    #[test]
    fn windows_illegal_chars_are_unsafe() {
        for bad in ["a<b", "a>b", "a:b", "a\"b", "a|b", "a?b", "a*b"] {
            assert!(
                ValidName::parse(bad, ArtifactKind::Project).is_err(),
                "accepted: {bad}"
            );
        }
    }

    // ── identifier shape ──────────────────────────────────────────────────

    #[test]
    fn leading_digit_is_invalid_identifier_for_component_and_hook() {
        assert!(matches!(
            ValidName::parse("1abc", ArtifactKind::Component),
            Err(DomainError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            ValidName::parse("1abc", ArtifactKind::Hook),
            Err(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn leading_digit_is_fine_for_projects() {
        // Project names only become directories, never symbols.
        assert!(ValidName::parse("1abc", ArtifactKind::Project).is_ok());
    }

    #[test]
    fn hyphen_is_invalid_in_identifiers_but_fine_in_project_names() {
        assert!(ValidName::parse("my-widget", ArtifactKind::Component).is_err());
        assert!(ValidName::parse("my-app", ArtifactKind::Project).is_ok());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["Widget", "NavBar", "_internal", "Counter2"] {
            assert!(
                ValidName::parse(name, ArtifactKind::Component).is_ok(),
                "failed for: {name}"
            );
        }
        for name in &["my-project", "my_app", "project123", "MyApp"] {
            assert!(
                ValidName::parse(name, ArtifactKind::Project).is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn parsed_name_round_trips() {
        let name = ValidName::parse("Widget", ArtifactKind::Component).unwrap();
        assert_eq!(name.as_str(), "Widget");
        assert_eq!(name.to_string(), "Widget");
    }
}
