use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which target platform's file set is being generated.
///
/// `Combined` is the "web + mobile" request, which produces both mobile
/// file sets (Flutter and React Native) in one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Web,
    Flutter,
    ReactNative,
    Combined,
}

/// Caller supplied a flavor string the system does not recognize.
///
/// This is a contract violation and is never absorbed into a fallback.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown flavor: {0} (expected web, flutter, react-native or combined)")]
pub struct UnknownFlavor(pub String);

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Flavor::Web),
            "flutter" => Ok(Flavor::Flutter),
            "react-native" => Ok(Flavor::ReactNative),
            "combined" | "web+mobile" => Ok(Flavor::Combined),
            other => Err(UnknownFlavor(other.to_string())),
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Flavor::Web => "web",
            Flavor::Flutter => "flutter",
            Flavor::ReactNative => "react-native",
            Flavor::Combined => "combined",
        };
        write!(f, "{}", name)
    }
}

impl Flavor {
    /// Wire names of the file mappings a model response must carry for
    /// this flavor. A response missing any of these is schema-mismatched.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Flavor::Web => &["files"],
            Flavor::Flutter => &["flutterFiles"],
            Flavor::ReactNative => &["rnFiles"],
            Flavor::Combined => &["flutterFiles", "rnFiles"],
        }
    }

    /// Title used when the model response carries none.
    pub fn default_title(&self) -> &'static str {
        match self {
            Flavor::Web => "Web Application",
            Flavor::Flutter => "Flutter App",
            Flavor::ReactNative => "React Native App",
            Flavor::Combined => "Mobile App Project",
        }
    }
}

/// A single generated source file.
///
/// Downstream consumers (display, export) only understand this record
/// form, so bare-string file values are wrapped into it on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Full source text of the file.
    pub code: String,
}

impl ProjectFile {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// A normalized multi-file project, as handed back to the caller.
///
/// Each populated file mapping has a companion list holding the same
/// paths. The list is always rebuilt from the map keys, so the two stay
/// in lockstep and display order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub explanation: String,

    /// Web files, keyed by path (e.g. `/App.js`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, ProjectFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generated_files: Vec<String>,

    /// Flutter files, keyed by path (e.g. `lib/main.dart`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flutter_files: BTreeMap<String, ProjectFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flutter_generated_files: Vec<String>,

    /// React Native files, keyed by path (e.g. `App.tsx`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rn_files: BTreeMap<String, ProjectFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rn_generated_files: Vec<String>,
}

impl GeneratedProject {
    /// Rebuild every companion list from its file mapping's keys.
    pub fn rebuild_file_lists(&mut self) {
        self.generated_files = self.files.keys().cloned().collect();
        self.flutter_generated_files = self.flutter_files.keys().cloned().collect();
        self.rn_generated_files = self.rn_files.keys().cloned().collect();
    }

    /// The populated (mapping, companion list) pairs, for iteration by
    /// consumers that treat all platforms uniformly (export, display).
    pub fn file_sets(&self) -> Vec<(&BTreeMap<String, ProjectFile>, &[String])> {
        let mut sets = Vec::new();
        if !self.files.is_empty() {
            sets.push((&self.files, self.generated_files.as_slice()));
        }
        if !self.flutter_files.is_empty() {
            sets.push((&self.flutter_files, self.flutter_generated_files.as_slice()));
        }
        if !self.rn_files.is_empty() {
            sets.push((&self.rn_files, self.rn_generated_files.as_slice()));
        }
        sets
    }

    /// Total number of files across all platforms.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.flutter_files.len() + self.rn_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_from_str() {
        assert_eq!("web".parse::<Flavor>().unwrap(), Flavor::Web);
        assert_eq!("flutter".parse::<Flavor>().unwrap(), Flavor::Flutter);
        assert_eq!("react-native".parse::<Flavor>().unwrap(), Flavor::ReactNative);
        assert_eq!("combined".parse::<Flavor>().unwrap(), Flavor::Combined);
        assert_eq!("web+mobile".parse::<Flavor>().unwrap(), Flavor::Combined);
    }

    #[test]
    fn test_unknown_flavor_is_an_error() {
        let err = "desktop".parse::<Flavor>().unwrap_err();
        assert!(err.to_string().contains("desktop"));
    }

    #[test]
    fn test_required_keys_per_flavor() {
        assert_eq!(Flavor::Web.required_keys(), &["files"]);
        assert_eq!(Flavor::Flutter.required_keys(), &["flutterFiles"]);
        assert_eq!(Flavor::ReactNative.required_keys(), &["rnFiles"]);
        assert_eq!(Flavor::Combined.required_keys(), &["flutterFiles", "rnFiles"]);
    }

    #[test]
    fn test_rebuild_file_lists_matches_map_keys() {
        let mut project = GeneratedProject {
            project_title: "Test".to_string(),
            ..Default::default()
        };
        project
            .files
            .insert("/App.js".to_string(), ProjectFile::new("a"));
        project
            .files
            .insert("/pages/Home.jsx".to_string(), ProjectFile::new("b"));
        project.rebuild_file_lists();

        assert_eq!(project.generated_files, vec!["/App.js", "/pages/Home.jsx"]);
        assert!(project.flutter_generated_files.is_empty());
        assert!(project.rn_generated_files.is_empty());
    }

    #[test]
    fn test_wire_names_round_trip() {
        let mut project = GeneratedProject {
            project_title: "Wire".to_string(),
            explanation: "Names".to_string(),
            ..Default::default()
        };
        project
            .flutter_files
            .insert("lib/main.dart".to_string(), ProjectFile::new("void main() {}"));
        project.rebuild_file_lists();

        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("projectTitle").is_some());
        assert!(json.get("flutterFiles").is_some());
        assert!(json.get("flutterGeneratedFiles").is_some());
        // Empty mappings are not serialized.
        assert!(json.get("files").is_none());
        assert!(json.get("rnFiles").is_none());

        let back: GeneratedProject = serde_json::from_value(json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn test_file_sets_skips_empty_mappings() {
        let mut project = GeneratedProject::default();
        assert!(project.file_sets().is_empty());

        project
            .rn_files
            .insert("App.tsx".to_string(), ProjectFile::new("x"));
        project.rebuild_file_lists();
        assert_eq!(project.file_sets().len(), 1);
        assert_eq!(project.file_count(), 1);
    }
}
