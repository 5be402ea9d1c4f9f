use crate::models::ComponentEntry;

const AMBIGUOUS_MARKER: &str = " (*)";

/// Label shown for `entry` within one rendered section.
///
/// Rows from the active namespace get a ` (*)` suffix when the same section
/// also holds a component with the same name from another namespace. Quadratic
/// in the length of the section.
pub fn display_name(
    entry: &ComponentEntry,
    section: &[ComponentEntry],
    active_namespace: &str,
) -> String {
    if entry.namespace() != active_namespace {
        return entry.name().to_string();
    }

    let collides = section.iter().any(|other| {
        other.name() == entry.name() && other.namespace() != entry.namespace()
    });

    if collides {
        format!("{}{AMBIGUOUS_MARKER}", entry.name())
    } else {
        entry.name().to_string()
    }
}

pub fn display_names(section: &[ComponentEntry], active_namespace: &str) -> Vec<String> {
    section
        .iter()
        .map(|entry| display_name(entry, section, active_namespace))
        .collect()
}

#[cfg(test)]
mod test {
    use crate::models::ComponentMetadata;

    use super::*;

    fn entry(name: &str, namespace: &str) -> ComponentEntry {
        ComponentEntry {
            metadata: ComponentMetadata {
                name: name.into(),
                namespace: namespace.into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn marks_active_namespace_entry_on_collision() {
        let section = vec![entry("nodejs", "openshift"), entry("nodejs", "other-ns")];

        assert_eq!(
            vec!["nodejs (*)", "nodejs"],
            display_names(&section, "openshift")
        );
    }

    #[test]
    fn no_marker_without_collision() {
        let section = vec![entry("nodejs", "openshift"), entry("python", "other-ns")];

        assert_eq!(vec!["nodejs", "python"], display_names(&section, "openshift"));
    }

    #[test]
    fn no_marker_for_same_namespace_duplicates() {
        let section = vec![entry("nodejs", "openshift"), entry("nodejs", "openshift")];

        assert_eq!(vec!["nodejs", "nodejs"], display_names(&section, "openshift"));
    }

    #[test]
    fn no_marker_when_active_namespace_is_not_involved() {
        let section = vec![entry("nodejs", "a"), entry("nodejs", "b")];

        assert_eq!(vec!["nodejs", "nodejs"], display_names(&section, "openshift"));
    }

    #[test]
    fn is_idempotent() {
        let section = vec![
            entry("nodejs", "openshift"),
            entry("nodejs", "other-ns"),
            entry("java", "openshift"),
        ];

        let first = display_names(&section, "openshift");
        let second = display_names(&section, "openshift");

        assert_eq!(first, second);
        assert_eq!(section[0].name(), "nodejs");
    }
}
