//! Issue state classification and label display helpers.

use super::types::{Classification, IssueStatus, Label, StateClass};

/// Label marking an issue whose site has been contacted
pub const SITEWAIT_LABEL: &str = "sitewait";
/// Label marking an issue as ready for outreach
pub const CONTACTREADY_LABEL: &str = "contactready";

/// Map an issue's status fields to display text and style class.
/// Checks run in order: closed first, then sitewait, then contactready.
pub fn classify(status: &IssueStatus) -> Classification {
    if status.is_closed {
        return Classification {
            display_text: "Closed",
            style_class: StateClass::Closed,
        };
    }

    if status.has_label(SITEWAIT_LABEL) {
        return Classification {
            display_text: "Site Contacted",
            style_class: StateClass::SiteContacted,
        };
    }

    if status.has_label(CONTACTREADY_LABEL) {
        return Classification {
            display_text: "Ready for Outreach",
            style_class: StateClass::ReadyForOutreach,
        };
    }

    // Needs Diagnosis is the default value
    Classification {
        display_text: "Needs Diagnosis",
        style_class: StateClass::NeedsDiagnosis,
    }
}

/// Join label names for display, keeping input order
pub fn join_label_names(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Label> {
        names
            .iter()
            .map(|name| Label {
                name: name.to_string(),
            })
            .collect()
    }

    fn status(is_closed: bool, names: &[&str]) -> IssueStatus {
        IssueStatus {
            is_closed,
            labels: labels(names),
        }
    }

    #[test]
    fn closed_wins_over_any_labels() {
        let c = classify(&status(true, &["sitewait", "contactready"]));
        assert_eq!(c.display_text, "Closed");
        assert_eq!(c.style_class, StateClass::Closed);
    }

    #[test]
    fn closed_without_labels_is_still_closed() {
        let c = classify(&status(true, &[]));
        assert_eq!(c.display_text, "Closed");
        assert_eq!(c.style_class, StateClass::Closed);
    }

    #[test]
    fn sitewait_beats_contactready() {
        let c = classify(&status(false, &["contactready", "sitewait"]));
        assert_eq!(c.display_text, "Site Contacted");
        assert_eq!(c.style_class, StateClass::SiteContacted);
    }

    #[test]
    fn sitewait_alone_means_site_contacted() {
        let c = classify(&status(false, &["sitewait"]));
        assert_eq!(c.display_text, "Site Contacted");
        assert_eq!(c.style_class, StateClass::SiteContacted);
    }

    #[test]
    fn contactready_alone_means_ready_for_outreach() {
        let c = classify(&status(false, &["contactready"]));
        assert_eq!(c.display_text, "Ready for Outreach");
        assert_eq!(c.style_class, StateClass::ReadyForOutreach);
    }

    #[test]
    fn no_labels_defaults_to_needs_diagnosis() {
        let c = classify(&status(false, &[]));
        assert_eq!(c.display_text, "Needs Diagnosis");
        assert_eq!(c.style_class, StateClass::NeedsDiagnosis);
    }

    #[test]
    fn unrelated_labels_default_to_needs_diagnosis() {
        let c = classify(&status(false, &["bug", "browser-firefox"]));
        assert_eq!(c.display_text, "Needs Diagnosis");
        assert_eq!(c.style_class, StateClass::NeedsDiagnosis);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let c = classify(&status(false, &["Sitewait", "CONTACTREADY"]));
        assert_eq!(c.style_class, StateClass::NeedsDiagnosis);
    }

    #[test]
    fn label_match_ignores_position() {
        let c = classify(&status(false, &["bug", "engine-gecko", "sitewait"]));
        assert_eq!(c.style_class, StateClass::SiteContacted);
    }

    #[test]
    fn classify_is_deterministic() {
        let s = status(false, &["contactready"]);
        assert_eq!(classify(&s), classify(&s));
    }

    #[test]
    fn join_concatenates_in_input_order() {
        assert_eq!(join_label_names(&labels(&["bug", "sitewait"])), "bug, sitewait");
    }

    #[test]
    fn join_single_label_has_no_separator() {
        assert_eq!(join_label_names(&labels(&["bug"])), "bug");
    }

    #[test]
    fn join_empty_is_empty_string() {
        assert_eq!(join_label_names(&[]), "");
    }

    #[test]
    fn join_keeps_duplicates() {
        assert_eq!(join_label_names(&labels(&["bug", "bug"])), "bug, bug");
    }
}
