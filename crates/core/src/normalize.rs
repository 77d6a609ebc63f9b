//! Recovery of structured projects from raw model output.
//!
//! Model responses are *supposed* to be JSON, but frequently are not:
//! they arrive wrapped in markdown fences, with literal control characters
//! inside string values, or buried in explanatory prose. This module runs
//! an ordered repair ladder over the raw text until one stage yields
//! syntactically valid JSON, validates the result against the requested
//! flavor's schema, and serves a static fallback project when everything
//! fails. The entry points never fail outward.

use regex::Regex;
use serde_json::Value;

use crate::fallback::fallback_project;
use crate::project::{Flavor, GeneratedProject, ProjectFile};

/// The repair ladder stage whose output parsed as valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStage {
    /// The raw text was already valid JSON.
    Direct,
    /// Valid after removing markdown code fences.
    FenceStripped,
    /// Valid after the escape-repair substitutions.
    EscapeRepaired,
    /// Valid after extracting the first-`{`-to-last-`}` region.
    RegionExtracted,
}

impl std::fmt::Display for RecoveryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecoveryStage::Direct => "direct parse",
            RecoveryStage::FenceStripped => "fence stripping",
            RecoveryStage::EscapeRepaired => "escape repair",
            RecoveryStage::RegionExtracted => "object-region extraction",
        };
        write!(f, "{}", name)
    }
}

/// Why recovery gave up and served the fallback project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecoveryFailure {
    #[error("no repair stage produced syntactically valid JSON")]
    Parse,
    #[error("valid JSON lacked the file mapping required for the requested flavor")]
    Schema,
}

/// How the project handed back to the caller was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recovered(RecoveryStage),
    Fallback(RecoveryFailure),
}

impl Outcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// A normalized project plus how it was obtained, so the shell can
/// disclose degraded generation without inspecting the project itself.
#[derive(Debug, Clone)]
pub struct NormalizedResponse {
    pub project: GeneratedProject,
    pub outcome: Outcome,
}

/// Coerce raw model output into a schema-conforming project.
///
/// Never fails outward: every parse or schema failure terminates in the
/// flavor's fallback project. Pure function, no I/O.
pub fn normalize_response(raw: &str, flavor: Flavor) -> NormalizedResponse {
    let (value, stage) = match run_repair_ladder(raw) {
        Some(parsed) => parsed,
        None => return fallback_with(flavor, RecoveryFailure::Parse),
    };

    match shape_project(&value, flavor) {
        Ok(project) => NormalizedResponse {
            project,
            outcome: Outcome::Recovered(stage),
        },
        Err(failure) => fallback_with(flavor, failure),
    }
}

/// [`normalize_response`] without the outcome, for callers that only
/// want the project.
pub fn normalize(raw: &str, flavor: Flavor) -> GeneratedProject {
    normalize_response(raw, flavor).project
}

fn fallback_with(flavor: Flavor, failure: RecoveryFailure) -> NormalizedResponse {
    NormalizedResponse {
        project: fallback_project(flavor),
        outcome: Outcome::Fallback(failure),
    }
}

/// Run the ordered repair ladder until one stage parses.
///
/// Each stage operates on the previous stage's text, so later stages see
/// the accumulated repairs, not the raw input.
fn run_repair_ladder(raw: &str) -> Option<(Value, RecoveryStage)> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Some((value, RecoveryStage::Direct));
    }

    let stripped = strip_code_fences(raw);
    if let Ok(value) = serde_json::from_str(&stripped) {
        return Some((value, RecoveryStage::FenceStripped));
    }

    let repaired = repair_escapes(&stripped);
    if let Ok(value) = serde_json::from_str(&repaired) {
        return Some((value, RecoveryStage::EscapeRepaired));
    }

    let region = extract_object_region(&repaired)?;
    serde_json::from_str(region)
        .ok()
        .map(|value| (value, RecoveryStage::RegionExtracted))
}

/// Remove markdown code-fence markers around a JSON payload.
///
/// Strips every ```` ```json ```` opener anywhere in the text, a bare
/// leading ```` ``` ````, and a trailing ```` ``` ````.
pub fn strip_code_fences(text: &str) -> String {
    let tagged = Regex::new(r"```json\s*").unwrap();
    let mut text = tagged.replace_all(text.trim(), "").into_owned();

    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start_matches('\n').to_string();
    }

    let trailing = Regex::new(r"```\s*$").unwrap();
    text = trailing.replace(&text, "").into_owned();

    text.trim().to_string()
}

/// Repair common escaping mistakes models make when emitting JSON whose
/// string values contain multi-line source code.
///
/// The substitutions are ORDER-SENSITIVE and applied verbatim: over-escaped
/// quotes are un-escaped, doubled backslashes are collapsed, then literal
/// newline, carriage-return, and tab characters are re-escaped so the
/// surrounding structure stays syntactically valid. Best-effort heuristic:
/// it can corrupt legitimately-escaped content (an intentional `\n` token
/// inside source text, structural newlines between JSON tokens), so it
/// only runs after the earlier stages have failed.
pub fn repair_escapes(text: &str) -> String {
    text.replace("\\\"", "\"")
        .replace("\\\\", "\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Substring from the first `{` to the last `}`, inclusive.
///
/// Targets responses where the model emitted explanatory prose before
/// and/or after a single JSON object.
pub fn extract_object_region(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Validate the parsed value against the flavor's schema and normalize
/// every file entry to the record form.
///
/// A syntactically valid but schema-mismatched object is NOT treated as
/// success; it becomes a schema failure and the caller serves the fallback.
fn shape_project(value: &Value, flavor: Flavor) -> Result<GeneratedProject, RecoveryFailure> {
    let object = value.as_object().ok_or(RecoveryFailure::Schema)?;

    let mut project = GeneratedProject {
        project_title: object
            .get("projectTitle")
            .and_then(Value::as_str)
            .unwrap_or(flavor.default_title())
            .to_string(),
        explanation: object
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        ..Default::default()
    };

    for key in flavor.required_keys() {
        let entries = match object.get(*key) {
            Some(Value::Object(entries)) => entries,
            // Absent, or present but not a mapping.
            _ => return Err(RecoveryFailure::Schema),
        };

        let target = match *key {
            "files" => &mut project.files,
            "flutterFiles" => &mut project.flutter_files,
            _ => &mut project.rn_files,
        };

        for (path, file_value) in entries {
            // Leading path separators are preserved as received.
            target.insert(path.clone(), shape_file(file_value));
        }
    }

    project.rebuild_file_lists();
    Ok(project)
}

/// Normalize one file mapping entry to the `{ code }` record form.
fn shape_file(value: &Value) -> ProjectFile {
    match value {
        Value::String(code) => ProjectFile::new(code.clone()),
        Value::Object(fields) => match fields.get("code").and_then(Value::as_str) {
            Some(code) => ProjectFile::new(code),
            // No usable code field: keep something renderable.
            None => ProjectFile::new(pretty_json(value)),
        },
        other => ProjectFile::new(pretty_json(other)),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FLAVORS: [Flavor; 4] = [
        Flavor::Web,
        Flavor::Flutter,
        Flavor::ReactNative,
        Flavor::Combined,
    ];

    fn assert_lists_match(project: &GeneratedProject) {
        let map_keys: Vec<&String> = project.files.keys().collect();
        let list: Vec<&String> = project.generated_files.iter().collect();
        assert_eq!(map_keys, list);

        let map_keys: Vec<&String> = project.flutter_files.keys().collect();
        let list: Vec<&String> = project.flutter_generated_files.iter().collect();
        assert_eq!(map_keys, list);

        let map_keys: Vec<&String> = project.rn_files.keys().collect();
        let list: Vec<&String> = project.rn_generated_files.iter().collect();
        assert_eq!(map_keys, list);
    }

    #[test]
    fn test_direct_parse_is_idempotent_on_content() {
        let raw = r#"{"projectTitle":"Todo","explanation":"A todo app","files":{"/App.js":{"code":"console.log(1)"},"/index.js":"import './App';"},"generatedFiles":["/App.js","/index.js"]}"#;
        let normalized = normalize_response(raw, Flavor::Web);

        assert_eq!(normalized.outcome, Outcome::Recovered(RecoveryStage::Direct));
        let project = normalized.project;
        assert_eq!(project.project_title, "Todo");
        assert_eq!(project.explanation, "A todo app");
        // Byte-identical content; only structural wrapping changes.
        assert_eq!(project.files["/App.js"].code, "console.log(1)");
        assert_eq!(project.files["/index.js"].code, "import './App';");
        assert_lists_match(&project);
    }

    #[test]
    fn test_fence_stripping() {
        let raw = "```json\n{\"files\":{\"/a.js\":{\"code\":\"x\"}}}\n```";
        let normalized = normalize_response(raw, Flavor::Web);

        assert_eq!(
            normalized.outcome,
            Outcome::Recovered(RecoveryStage::FenceStripped)
        );
        assert_eq!(normalized.project.files.len(), 1);
        assert_eq!(normalized.project.files["/a.js"].code, "x");
    }

    #[test]
    fn test_bare_fence_stripping() {
        let raw = "```\n{\"files\":{\"/a.js\":{\"code\":\"x\"}}}\n```";
        let normalized = normalize_response(raw, Flavor::Web);
        assert_eq!(
            normalized.outcome,
            Outcome::Recovered(RecoveryStage::FenceStripped)
        );
    }

    #[test]
    fn test_escape_repair_recovers_literal_newline_in_string() {
        // Otherwise well-formed JSON with a literal newline inside a value.
        let raw = "{\"files\": {\"/a.js\": {\"code\": \"line1\nline2\"}}}";
        let normalized = normalize_response(raw, Flavor::Web);

        assert_eq!(
            normalized.outcome,
            Outcome::Recovered(RecoveryStage::EscapeRepaired)
        );
        assert_eq!(normalized.project.files["/a.js"].code, "line1\nline2");
    }

    #[test]
    fn test_region_extraction_ignores_surrounding_prose() {
        let raw = "Here is your code:\n{\"files\": {\"/a.js\": {\"code\": \"x\"}}} \nHope this helps!";
        let normalized = normalize_response(raw, Flavor::Web);

        assert_eq!(
            normalized.outcome,
            Outcome::Recovered(RecoveryStage::RegionExtracted)
        );
        assert_eq!(normalized.project.files["/a.js"].code, "x");
    }

    #[test]
    fn test_schema_mismatch_serves_fallback() {
        let normalized = normalize_response(r#"{"hello": "world"}"#, Flavor::Web);

        assert_eq!(
            normalized.outcome,
            Outcome::Fallback(RecoveryFailure::Schema)
        );
        let project = normalized.project;
        assert_eq!(project.project_title, "Web Application");
        assert!(project.files.contains_key("/App.js"));
        assert!(project.explanation.contains("fallback"));
    }

    #[test]
    fn test_combined_requires_both_mobile_mappings() {
        let raw = r#"{"flutterFiles":{"lib/main.dart":{"code":"void main() {}"}}}"#;
        let normalized = normalize_response(raw, Flavor::Combined);
        assert_eq!(
            normalized.outcome,
            Outcome::Fallback(RecoveryFailure::Schema)
        );
    }

    #[test]
    fn test_combined_shapes_both_mobile_mappings() {
        let raw = r#"{
            "projectTitle": "Shop",
            "flutterFiles": {"lib/main.dart": {"code": "void main() {}"}},
            "rnFiles": {"App.tsx": "export default () => null;"}
        }"#;
        let normalized = normalize_response(raw, Flavor::Combined);

        assert!(!normalized.outcome.is_fallback());
        let project = normalized.project;
        assert_eq!(project.flutter_files["lib/main.dart"].code, "void main() {}");
        assert_eq!(project.rn_files["App.tsx"].code, "export default () => null;");
        assert!(project.files.is_empty());
        assert_lists_match(&project);
    }

    #[test]
    fn test_mapping_value_that_is_not_an_object_is_schema_failure() {
        let normalized = normalize_response(r#"{"files": "oops"}"#, Flavor::Web);
        assert_eq!(
            normalized.outcome,
            Outcome::Fallback(RecoveryFailure::Schema)
        );
    }

    #[test]
    fn test_non_object_json_is_schema_failure() {
        for raw in [r#""just a string""#, "42", "[1, 2, 3]", "null", "true"] {
            let normalized = normalize_response(raw, Flavor::Flutter);
            assert_eq!(
                normalized.outcome,
                Outcome::Fallback(RecoveryFailure::Schema),
                "input: {raw}"
            );
        }
    }

    #[test]
    fn test_bare_string_value_is_wrapped() {
        let raw = r#"{"files": {"/a.js": "console.log(1)"}}"#;
        let project = normalize(raw, Flavor::Web);
        assert_eq!(project.files["/a.js"].code, "console.log(1)");
    }

    #[test]
    fn test_codeless_object_value_is_pretty_printed() {
        let raw = r#"{"files": {"/a.js": {"foo": 1}}}"#;
        let project = normalize(raw, Flavor::Web);
        assert_eq!(project.files["/a.js"].code, "{\n  \"foo\": 1\n}");
    }

    #[test]
    fn test_missing_title_defaults_per_flavor() {
        let raw = r#"{"rnFiles": {"App.tsx": {"code": "x"}}}"#;
        let project = normalize(raw, Flavor::ReactNative);
        assert_eq!(project.project_title, "React Native App");
        assert_eq!(project.explanation, "");
    }

    #[test]
    fn test_never_panics_on_malformed_corpus() {
        let corpus = [
            "",
            "   ",
            "not json at all",
            "{\"files\": ",
            "\u{0}\u{1}binary\u{7f}garbage\u{2}",
            "deeply nested prose with no braces whatsoever, across\nmany\nlines",
            "}{",
            "{]",
            "``` ```",
            "{\"files\"",
        ];

        for raw in corpus {
            for flavor in ALL_FLAVORS {
                let normalized = normalize_response(raw, flavor);
                assert_eq!(
                    normalized.outcome,
                    Outcome::Fallback(RecoveryFailure::Parse),
                    "input: {raw:?}, flavor: {flavor}"
                );
                assert!(normalized.project.file_count() > 0);
                assert_lists_match(&normalized.project);
            }
        }
    }

    #[test]
    fn test_list_invariant_holds_for_all_flavors() {
        for flavor in ALL_FLAVORS {
            // Fallback path for every flavor.
            let project = normalize("garbage", flavor);
            assert_lists_match(&project);
        }
    }

    #[test]
    fn test_companion_lists_are_rebuilt_not_trusted() {
        // The response's own generatedFiles list is stale; the output list
        // must come from the mapping keys.
        let raw = r#"{"files":{"/a.js":{"code":"x"}},"generatedFiles":["/stale.js","/a.js"]}"#;
        let project = normalize(raw, Flavor::Web);
        assert_eq!(project.generated_files, vec!["/a.js"]);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(
            strip_code_fences("```json\n{\"a\":1}\n```"),
            "{\"a\":1}"
        );
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        // A tagged opener mid-text is removed too.
        assert_eq!(
            strip_code_fences("intro ```json {\"a\":1}"),
            "intro {\"a\":1}"
        );
    }

    #[test]
    fn test_repair_escapes_substitution_order() {
        // Over-escaped quote, then doubled backslash, then literal whitespace.
        assert_eq!(repair_escapes(r#"a\"b"#), r#"a"b"#);
        assert_eq!(repair_escapes(r"a\\b"), r"a\b");
        assert_eq!(repair_escapes("a\nb\tc\rd"), r"a\nb\tc\rd");
    }

    #[test]
    fn test_extract_object_region() {
        assert_eq!(extract_object_region("x {\"a\":1} y"), Some("{\"a\":1}"));
        assert_eq!(extract_object_region("no braces"), None);
        assert_eq!(extract_object_region("} reversed {"), None);
    }
}
