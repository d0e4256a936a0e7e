use dioxus::prelude::*;

use mission_viewer_shared::models::{Issue, ServiceError};

/// Split the detail string for display, preserving line breaks.
fn detail_lines(detail: &str) -> Vec<String> {
    detail.split('\n').map(str::to_string).collect()
}

#[component]
pub fn ErrorDialog(error: Option<ServiceError>, on_close: EventHandler<()>) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog error-dialog",
                h3 { "Error" }
                div { class: "error-detail",
                    for line in detail_lines(&error.detail) {
                        p { "{line}" }
                    }
                }
                if let Some(issue) = &error.issue {
                    div { class: "error-issues",
                        "Related issue: "
                        IssueLink { issue: issue.clone() }
                        "."
                    }
                }
                if let Some(similar) = &error.similar {
                    if !similar.is_empty() {
                        div { class: "error-issues",
                            "Similar issues: "
                            for (i, issue) in similar.iter().enumerate() {
                                if i > 0 {
                                    ", "
                                }
                                IssueLink { issue: issue.clone() }
                            }
                            "."
                        }
                    }
                }
                if let Some(traceback) = &error.traceback {
                    pre { class: "traceback",
                        code { "{traceback}" }
                    }
                }
                div { class: "dialog-actions",
                    button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}

#[component]
fn IssueLink(issue: Issue) -> Element {
    rsx! {
        a { href: "{issue.url}", target: "_blank", "issue #{issue.number}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lines_preserves_breaks() {
        assert_eq!(detail_lines("first\nsecond"), vec!["first", "second"]);
    }

    #[test]
    fn test_detail_lines_single_line() {
        assert_eq!(detail_lines("bad file"), vec!["bad file"]);
    }

    #[test]
    fn test_detail_lines_from_service_error_fixture() {
        let error: ServiceError =
            serde_json::from_str(r#"{"detail": "line one\nline two"}"#).unwrap();
        assert_eq!(detail_lines(&error.detail), vec!["line one", "line two"]);
    }
}
