//! Variable substitution
//!
//! Renders template text by replacing each recognized `{{TOKEN}}` marker
//! with its value from the substitution context.

use std::path::Path;

use chrono::{DateTime, Local};

/// Values for one render call
///
/// Constructed fresh per call from the caller's field values. The timestamp
/// is injected rather than read here, so rendering stays deterministic.
#[derive(Debug, Clone)]
pub struct SubstitutionContext {
    /// Creation year, e.g. `2026`
    pub year: String,
    /// Author for the file header
    pub author: String,
    /// Output file name, e.g. `Foo.cs`
    pub file_name: String,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub create_time: String,
    /// Free-form description
    pub description: String,
    /// External link, empty unless configured
    pub link: String,
    /// Namespace the generated type lives in
    pub namespace: String,
    /// Name of the generated type
    pub type_name: String,
    /// Full output path, forward slashes
    pub file_path: String,
}

impl SubstitutionContext {
    /// Build a context from caller-supplied fields and a timestamp
    ///
    /// The file name is derived from `file_path`; backslashes in the path
    /// are normalized to forward slashes.
    pub fn new(
        author: impl Into<String>,
        namespace: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        file_path: &Path,
        now: DateTime<Local>,
    ) -> Self {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            year: now.format("%Y").to_string(),
            author: author.into(),
            file_name,
            create_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            description: description.into(),
            link: link.into(),
            namespace: namespace.into(),
            type_name: type_name.into(),
            file_path: file_path.to_string_lossy().replace('\\', "/"),
        }
    }
}

/// Replace every recognized token marker in `template` with its context value
///
/// One linear pass per token, in a fixed order. A value containing a marker
/// for a token already replaced stays literal; nothing is re-scanned.
/// Markers with no matching token pass through unchanged.
pub fn render(template: &str, ctx: &SubstitutionContext) -> String {
    template
        .replace("{{YEAR}}", &ctx.year)
        .replace("{{AUTHOR}}", &ctx.author)
        .replace("{{FILENAME}}", &ctx.file_name)
        .replace("{{CREATE_TIME}}", &ctx.create_time)
        .replace("{{DESCRIPTION}}", &ctx.description)
        .replace("{{GITHUB_URL}}", &ctx.link)
        .replace("{{NAMESPACE}}", &ctx.namespace)
        .replace("{{CLASS_NAME}}", &ctx.type_name)
        .replace("{{FILEPATH}}", &ctx.file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    fn ctx() -> SubstitutionContext {
        SubstitutionContext::new(
            "Ada",
            "Proj",
            "Foo",
            "demo",
            "",
            Path::new("src/Foo.cs"),
            fixed_now(),
        )
    }

    #[test]
    fn test_render_without_markers_is_identity() {
        let template = "no markers here, not even {single} braces";
        assert_eq!(render(template, &ctx()), template);
    }

    #[test]
    fn test_render_namespace_and_class() {
        let out = render("namespace {{NAMESPACE}}{ class {{CLASS_NAME}} {} }", &ctx());
        assert_eq!(out, "namespace Proj{ class Foo {} }");
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        let out = render("{{CLASS_NAME}} {{CLASS_NAME}} {{CLASS_NAME}}", &ctx());
        assert_eq!(out, "Foo Foo Foo");
    }

    #[test]
    fn test_render_timestamps_from_injected_clock() {
        let out = render("{{YEAR}} | {{CREATE_TIME}}", &ctx());
        assert_eq!(out, "2025 | 2025-01-15 09:30:00");
    }

    #[test]
    fn test_render_file_name_and_path() {
        let out = render("{{FILENAME}} at {{FILEPATH}}", &ctx());
        assert_eq!(out, "Foo.cs at src/Foo.cs");
    }

    #[test]
    fn test_render_unknown_marker_passes_through() {
        let out = render("{{NOT_A_TOKEN}} {{CLASS_NAME}}", &ctx());
        assert_eq!(out, "{{NOT_A_TOKEN}} Foo");
    }

    #[test]
    fn test_value_with_already_replaced_marker_stays_literal() {
        // AUTHOR is replaced before NAMESPACE, so a marker inserted by the
        // namespace value is never revisited.
        let ctx = SubstitutionContext::new(
            "Ada",
            "{{AUTHOR}}",
            "Foo",
            "",
            "",
            Path::new("Foo.cs"),
            fixed_now(),
        );
        let out = render("namespace {{NAMESPACE}}", &ctx);
        assert_eq!(out, "namespace {{AUTHOR}}");
    }

    #[test]
    fn test_empty_link_erases_marker() {
        let out = render("Link: {{GITHUB_URL}}", &ctx());
        assert_eq!(out, "Link: ");
    }

    #[test]
    fn test_context_normalizes_backslashes() {
        let ctx = SubstitutionContext::new(
            "Ada",
            "Proj",
            "Foo",
            "",
            "",
            Path::new("dir\\sub\\Foo.cs"),
            fixed_now(),
        );
        assert_eq!(ctx.file_path, "dir/sub/Foo.cs");
    }
}
