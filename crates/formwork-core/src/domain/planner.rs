//! Target directory planning.
//!
//! Pure path construction — no filesystem access here. The existence check
//! that gates `Project` creation goes through the `Filesystem` port in the
//! application layer, keeping this module deterministic.

use std::path::{Path, PathBuf};

use crate::domain::{artifact::ArtifactKind, name::ValidName};

/// Compute the absolute target directory for an artifact.
///
/// | Kind | Target |
/// |------|--------|
/// | `Project`   | `<root>/<name>` |
/// | `Component` | `<root>/src/components/<name>` |
/// | `Hook`      | `<root>/src/hooks` (shared, reused across invocations) |
pub fn target_dir(root: &Path, kind: ArtifactKind, name: &ValidName) -> PathBuf {
    match kind {
        ArtifactKind::Project => root.join(name.as_str()),
        ArtifactKind::Component => root.join("src").join("components").join(name.as_str()),
        ArtifactKind::Hook => root.join("src").join("hooks"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str, kind: ArtifactKind) -> ValidName {
        ValidName::parse(raw, kind).unwrap()
    }

    #[test]
    fn project_targets_root_child() {
        let target = target_dir(
            Path::new("/work"),
            ArtifactKind::Project,
            &name("demo", ArtifactKind::Project),
        );
        assert_eq!(target, PathBuf::from("/work/demo"));
    }

    #[test]
    fn component_targets_named_subdirectory() {
        let target = target_dir(
            Path::new("/work"),
            ArtifactKind::Component,
            &name("Widget", ArtifactKind::Component),
        );
        assert_eq!(target, PathBuf::from("/work/src/components/Widget"));
    }

    #[test]
    fn hooks_share_one_directory() {
        let a = target_dir(
            Path::new("/work"),
            ArtifactKind::Hook,
            &name("Counter", ArtifactKind::Hook),
        );
        let b = target_dir(
            Path::new("/work"),
            ArtifactKind::Hook,
            &name("Toggle", ArtifactKind::Hook),
        );
        assert_eq!(a, b);
        assert_eq!(a, PathBuf::from("/work/src/hooks"));
    }

    #[test]
    fn planning_is_deterministic() {
        let n = name("demo", ArtifactKind::Project);
        let first = target_dir(Path::new("/w"), ArtifactKind::Project, &n);
        let second = target_dir(Path::new("/w"), ArtifactKind::Project, &n);
        assert_eq!(first, second);
    }
}
