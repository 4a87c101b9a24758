//! Assertion configuration and its normalization.
//!
//! The wire format allows an assertion to be a bare level or a
//! `[level, options]` pair, and a configuration to be either flat or a
//! per-URL matrix. Everything is normalized into [`NormalizedAssertion`]
//! lists as soon as a configuration is resolved.

use log::{debug, warn};
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

use super::presets::preset_spec;
use crate::statistics::MergeMethod;
use crate::utils::config::{CATEGORY_KEY_PREFIX, DEFAULT_MIN_SCORE, RESOURCE_SUMMARY_AUDIT_ID};
use crate::utils::error::{ConfigError, InputError};

/// Failure level of an assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionLevel {
    Off,
    Warn,
    Error,
}

impl fmt::Display for AssertionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssertionLevel::Off => "off",
            AssertionLevel::Warn => "warn",
            AssertionLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Options of a `[level, options]` assertion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssertionOptions {
    #[serde(
        default,
        alias = "aggregationMethod",
        skip_serializing_if = "Option::is_none"
    )]
    pub merge_method: Option<MergeMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_numeric_value: Option<f64>,
}

/// One assertion as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssertionSetting {
    Level(AssertionLevel),
    WithOptions(AssertionLevel, AssertionOptions),
}

impl AssertionSetting {
    pub fn level(&self) -> AssertionLevel {
        match self {
            AssertionSetting::Level(level) | AssertionSetting::WithOptions(level, _) => *level,
        }
    }
}

/// Mapping from audit key to assertion, in configuration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssertionSpec {
    entries: Vec<(String, AssertionSetting)>,
}

impl AssertionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an assertion, replacing an entry with the exact same key
    pub fn insert(&mut self, key: impl Into<String>, setting: AssertionSetting) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = setting,
            None => self.entries.push((key, setting)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AssertionSetting> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssertionSetting)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AssertionSetting)> for AssertionSpec {
    fn from_iter<I: IntoIterator<Item = (K, AssertionSetting)>>(iter: I) -> Self {
        let mut spec = AssertionSpec::new();
        for (key, setting) in iter {
            spec.insert(key, setting);
        }
        spec
    }
}

impl Serialize for AssertionSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, setting) in &self.entries {
            map.serialize_entry(key, setting)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AssertionSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = AssertionSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from audit id to assertion level or [level, options]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut spec = AssertionSpec::new();
                while let Some((key, setting)) = access.next_entry::<String, AssertionSetting>()? {
                    spec.insert(key, setting);
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// Assertions that apply to URLs matching a pattern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssertionMatrixEntry {
    /// Regex source matched against each report's final URL
    pub matching_url_pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default)]
    pub assertions: AssertionSpec,
}

/// Top-level assertion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssertConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertions: Option<AssertionSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_url_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assert_matrix: Option<Vec<AssertionMatrixEntry>>,

    /// Also report assertions that passed
    #[serde(default)]
    pub include_passed_assertions: bool,
}

impl AssertConfig {
    /// Configuration made of a matrix only
    pub fn from_matrix(matrix: Vec<AssertionMatrixEntry>) -> Self {
        Self {
            assert_matrix: Some(matrix),
            ..Self::default()
        }
    }
}

/// Load an assertion configuration from a JSON or TOML file
///
/// The configuration may sit at the top level of the file or under
/// `ci.assert`, the layout used by CI run-config files.
pub fn load_assert_config(path: impl AsRef<Path>) -> Result<AssertConfig, InputError> {
    let path = path.as_ref();
    debug!("Reading assertion config from: {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let value: serde_json::Value = if is_toml {
        toml::from_str(&contents).map_err(|source| InputError::TomlFailed {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_json::from_str(&contents).map_err(|source| InputError::JsonFailed {
            path: path.to_path_buf(),
            source,
        })?
    };

    let section = match value.pointer("/ci/assert") {
        Some(nested) => nested.clone(),
        None => value,
    };

    serde_json::from_value(section).map_err(|source| InputError::JsonFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Property checked by an assertion, with its threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    MinScore(f64),
    MaxLength(f64),
    MaxNumericValue(f64),
}

impl Threshold {
    /// Pick the configured threshold; minScore, maxLength, maxNumericValue in
    /// priority order, minScore 1 when none is given
    pub fn from_options(options: &AssertionOptions) -> Self {
        if let Some(min_score) = options.min_score {
            Threshold::MinScore(min_score)
        } else if let Some(max_length) = options.max_length {
            Threshold::MaxLength(max_length)
        } else if let Some(max_numeric_value) = options.max_numeric_value {
            Threshold::MaxNumericValue(max_numeric_value)
        } else {
            Threshold::MinScore(DEFAULT_MIN_SCORE)
        }
    }

    pub fn expected(&self) -> f64 {
        match *self {
            Threshold::MinScore(v) | Threshold::MaxLength(v) | Threshold::MaxNumericValue(v) => v,
        }
    }

    /// Inclusive comparison: a value exactly at the threshold passes
    pub fn passes(&self, actual: f64) -> bool {
        match *self {
            Threshold::MinScore(expected) => actual >= expected,
            Threshold::MaxLength(expected) | Threshold::MaxNumericValue(expected) => {
                actual <= expected
            }
        }
    }
}

/// Size or request count of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceMetric {
    Size,
    Count,
}

impl ResourceMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceMetric::Size => "size",
            ResourceMetric::Count => "count",
        }
    }
}

/// What an assertion key points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionTarget {
    Audit(String),
    Category(String),
    ResourceSummary {
        resource_type: String,
        metric: ResourceMetric,
    },
}

impl AssertionTarget {
    /// Parse a normalized assertion key
    pub fn parse(key: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = key.split(':').collect();
        match parts.as_slice() {
            [audit_id] if !audit_id.is_empty() => Ok(AssertionTarget::Audit(audit_id.to_string())),
            [prefix, category] if *prefix == CATEGORY_KEY_PREFIX && !category.is_empty() => {
                Ok(AssertionTarget::Category(category.to_string()))
            }
            [audit_id, resource_type, metric]
                if *audit_id == RESOURCE_SUMMARY_AUDIT_ID && !resource_type.is_empty() =>
            {
                let metric = match *metric {
                    "size" => ResourceMetric::Size,
                    "count" => ResourceMetric::Count,
                    _ => return Err(ConfigError::UnsupportedAuditProperty(key.to_string())),
                };
                Ok(AssertionTarget::ResourceSummary {
                    resource_type: resource_type.to_string(),
                    metric,
                })
            }
            _ => Err(ConfigError::UnsupportedAuditProperty(key.to_string())),
        }
    }

    /// Audit id reported in results
    pub fn audit_id(&self) -> String {
        match self {
            AssertionTarget::Audit(id) => id.clone(),
            AssertionTarget::Category(id) => format!("{}:{}", CATEGORY_KEY_PREFIX, id),
            AssertionTarget::ResourceSummary { .. } => RESOURCE_SUMMARY_AUDIT_ID.to_string(),
        }
    }

    /// Audit property reported in results, for resource-summary rows
    pub fn audit_property(&self) -> Option<String> {
        match self {
            AssertionTarget::ResourceSummary {
                resource_type,
                metric,
            } => Some(format!("{}.{}", resource_type, metric.as_str())),
            _ => None,
        }
    }
}

/// Canonical form of one assertion
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAssertion {
    /// Kebab-cased configuration key
    pub key: String,
    pub target: AssertionTarget,
    pub level: AssertionLevel,
    pub merge_method: MergeMethod,
    pub threshold: Threshold,
}

impl NormalizedAssertion {
    fn from_setting(key: String, setting: &AssertionSetting) -> Result<Self, ConfigError> {
        let target = AssertionTarget::parse(&key)?;
        let (level, options) = match setting {
            AssertionSetting::Level(level) => (*level, AssertionOptions::default()),
            AssertionSetting::WithOptions(level, options) => (*level, options.clone()),
        };

        Ok(Self {
            key,
            target,
            level,
            merge_method: options.merge_method.unwrap_or_default(),
            threshold: Threshold::from_options(&options),
        })
    }
}

/// Convert an assertion key to kebab-case
///
/// `firstContentfulPaint`, `FirstContentfulPaint` and
/// `first-contentful-paint` all map to `first-contentful-paint`.
pub fn normalize_audit_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for c in key.trim().chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Normalize a spec: kebab-case keys, first occurrence of a key wins
pub fn normalize_spec(spec: &AssertionSpec) -> Result<Vec<NormalizedAssertion>, ConfigError> {
    let mut normalized: Vec<NormalizedAssertion> = Vec::with_capacity(spec.len());

    for (raw_key, setting) in spec.iter() {
        let key = normalize_audit_key(raw_key);
        let assertion = NormalizedAssertion::from_setting(key, setting)?;

        if let Some(existing) = normalized.iter().find(|a| a.key == assertion.key) {
            if *existing != assertion {
                warn!(
                    "Assertion '{}' duplicates '{}' with different settings; keeping the first",
                    raw_key, existing.key
                );
            } else {
                debug!("Dropping duplicate assertion key '{}'", raw_key);
            }
            continue;
        }

        normalized.push(assertion);
    }

    Ok(normalized)
}

/// Normalize a preset plus caller assertions; caller entries replace preset
/// entries for the same key wholesale
fn normalize_with_preset(
    preset: Option<&str>,
    assertions: Option<&AssertionSpec>,
) -> Result<Vec<NormalizedAssertion>, ConfigError> {
    let mut merged = match preset {
        Some(name) => normalize_spec(&preset_spec(name)?)?,
        None => Vec::new(),
    };

    if let Some(spec) = assertions {
        for assertion in normalize_spec(spec)? {
            match merged.iter_mut().find(|a| a.key == assertion.key) {
                Some(slot) => *slot = assertion,
                None => merged.push(assertion),
            }
        }
    }

    Ok(merged)
}

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidUrlPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Assertions scoped to URLs matching a compiled pattern
#[derive(Debug, Clone)]
pub struct AssertionGroup {
    pub pattern: Option<Regex>,
    pub assertions: Vec<NormalizedAssertion>,
}

impl AssertionGroup {
    fn matches(&self, url: &str) -> bool {
        self.pattern.as_ref().map_or(true, |re| re.is_match(url))
    }
}

/// Assertion configuration after validation and normalization
#[derive(Debug, Clone)]
pub enum ResolvedConfig {
    Flat(AssertionGroup),
    Matrix(Vec<AssertionGroup>),
}

impl ResolvedConfig {
    /// Validate and normalize a configuration
    ///
    /// # Errors
    /// * `ConfigError::AmbiguousConfiguration` - Matrix combined with flat options
    /// * `ConfigError::UnknownPreset` - Preset name not recognized
    /// * `ConfigError::InvalidUrlPattern` - A URL pattern is not a valid regex
    /// * `ConfigError::UnsupportedAuditProperty` - Malformed assertion key
    pub fn resolve(config: &AssertConfig) -> Result<Self, ConfigError> {
        if let Some(matrix) = &config.assert_matrix {
            if config.assertions.is_some()
                || config.matching_url_pattern.is_some()
                || config.preset.is_some()
            {
                return Err(ConfigError::AmbiguousConfiguration);
            }

            let groups = matrix
                .iter()
                .map(|entry| {
                    Ok(AssertionGroup {
                        pattern: Some(compile_pattern(&entry.matching_url_pattern)?),
                        assertions: normalize_with_preset(
                            entry.preset.as_deref(),
                            Some(&entry.assertions),
                        )?,
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;

            return Ok(ResolvedConfig::Matrix(groups));
        }

        let pattern = config
            .matching_url_pattern
            .as_deref()
            .map(compile_pattern)
            .transpose()?;

        Ok(ResolvedConfig::Flat(AssertionGroup {
            pattern,
            assertions: normalize_with_preset(config.preset.as_deref(), config.assertions.as_ref())?,
        }))
    }

    /// Assertions that apply to a URL; the last matching matrix entry wins
    pub fn assertions_for_url(&self, url: &str) -> Option<&[NormalizedAssertion]> {
        match self {
            ResolvedConfig::Flat(group) => group.matches(url).then_some(group.assertions.as_slice()),
            ResolvedConfig::Matrix(groups) => groups
                .iter()
                .rev()
                .find(|group| group.matches(url))
                .map(|group| group.assertions.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> AssertionSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_audit_key() {
        assert_eq!(normalize_audit_key("firstContentfulPaint"), "first-contentful-paint");
        assert_eq!(normalize_audit_key("FirstContentfulPaint"), "first-contentful-paint");
        assert_eq!(normalize_audit_key("first-contentful-paint"), "first-contentful-paint");
        assert_eq!(normalize_audit_key("categories:performance"), "categories:performance");
        assert_eq!(
            normalize_audit_key("resource-summary:thirdParty:size"),
            "resource-summary:third-party:size"
        );
    }

    #[test]
    fn test_spec_preserves_order() {
        let spec = spec(r#"{"b": "warn", "a": "error", "c": ["off", {}]}"#);
        let keys: Vec<&str> = spec.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(spec.get("a").unwrap().level(), AssertionLevel::Error);
    }

    #[test]
    fn test_setting_shapes() {
        let spec = spec(
            r#"{
                "interactive": ["warn", {"maxNumericValue": 4000, "aggregationMethod": "median"}],
                "viewport": "error"
            }"#,
        );

        let normalized = normalize_spec(&spec).unwrap();
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].level, AssertionLevel::Warn);
        assert_eq!(normalized[0].merge_method, MergeMethod::Median);
        assert_eq!(normalized[0].threshold, Threshold::MaxNumericValue(4000.0));
        assert_eq!(normalized[1].merge_method, MergeMethod::Optimistic);
        assert_eq!(normalized[1].threshold, Threshold::MinScore(1.0));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result: Result<AssertionSpec, _> =
            serde_json::from_str(r#"{"viewport": ["error", {"minScroe": 1}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_threshold_priority() {
        let options = AssertionOptions {
            max_numeric_value: Some(10.0),
            max_length: Some(2.0),
            min_score: Some(0.5),
            merge_method: None,
        };
        assert_eq!(Threshold::from_options(&options), Threshold::MinScore(0.5));

        let options = AssertionOptions {
            max_numeric_value: Some(10.0),
            max_length: Some(2.0),
            ..Default::default()
        };
        assert_eq!(Threshold::from_options(&options), Threshold::MaxLength(2.0));
    }

    #[test]
    fn test_camel_and_kebab_keys_dedupe() {
        let spec = spec(
            r#"{
                "firstContentfulPaint": ["error", {"minScore": 0.9}],
                "first-contentful-paint": ["warn", {"minScore": 0.5}]
            }"#,
        );

        let normalized = normalize_spec(&spec).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].key, "first-contentful-paint");
        assert_eq!(normalized[0].level, AssertionLevel::Error);
        assert_eq!(normalized[0].threshold, Threshold::MinScore(0.9));
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!(
            AssertionTarget::parse("categories:performance").unwrap(),
            AssertionTarget::Category("performance".to_string())
        );

        let target = AssertionTarget::parse("resource-summary:script:size").unwrap();
        assert_eq!(target.audit_id(), "resource-summary");
        assert_eq!(target.audit_property().as_deref(), Some("script.size"));

        assert!(matches!(
            AssertionTarget::parse("resource-summary:script:weight"),
            Err(ConfigError::UnsupportedAuditProperty(_))
        ));
        assert!(matches!(
            AssertionTarget::parse("uses-http2:items"),
            Err(ConfigError::UnsupportedAuditProperty(_))
        ));
    }

    #[test]
    fn test_matrix_with_flat_is_ambiguous() {
        let config = AssertConfig {
            preset: Some("lighthouse:all".to_string()),
            assert_matrix: Some(vec![AssertionMatrixEntry {
                matching_url_pattern: ".*".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert!(matches!(
            ResolvedConfig::resolve(&config),
            Err(ConfigError::AmbiguousConfiguration)
        ));
    }

    #[test]
    fn test_invalid_url_pattern() {
        let config = AssertConfig {
            matching_url_pattern: Some("(unclosed".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            ResolvedConfig::resolve(&config),
            Err(ConfigError::InvalidUrlPattern { .. })
        ));
    }

    #[test]
    fn test_preset_override_replaces_tuple() {
        let config = AssertConfig {
            preset: Some("lighthouse:recommended".to_string()),
            assertions: Some(spec(r#"{"firstContentfulPaint": "off"}"#)),
            ..Default::default()
        };

        let resolved = ResolvedConfig::resolve(&config).unwrap();
        let assertions = resolved.assertions_for_url("https://example.com/").unwrap();
        let fcp: Vec<_> = assertions
            .iter()
            .filter(|a| a.key == "first-contentful-paint")
            .collect();

        assert_eq!(fcp.len(), 1);
        assert_eq!(fcp[0].level, AssertionLevel::Off);
        assert_eq!(fcp[0].threshold, Threshold::MinScore(1.0));
    }

    #[test]
    fn test_last_matching_matrix_entry_wins() {
        let config = AssertConfig::from_matrix(vec![
            AssertionMatrixEntry {
                matching_url_pattern: ".*".to_string(),
                assertions: spec(r#"{"viewport": "warn"}"#),
                ..Default::default()
            },
            AssertionMatrixEntry {
                matching_url_pattern: "/blog/".to_string(),
                assertions: spec(r#"{"viewport": "error"}"#),
                ..Default::default()
            },
        ]);

        let resolved = ResolvedConfig::resolve(&config).unwrap();
        let blog = resolved.assertions_for_url("https://example.com/blog/post").unwrap();
        assert_eq!(blog[0].level, AssertionLevel::Error);

        let home = resolved.assertions_for_url("https://example.com/").unwrap();
        assert_eq!(home[0].level, AssertionLevel::Warn);
    }

    #[test]
    fn test_flat_pattern_prefilters() {
        let config = AssertConfig {
            matching_url_pattern: Some("^https://example\\.com/shop".to_string()),
            assertions: Some(spec(r#"{"viewport": "error"}"#)),
            ..Default::default()
        };

        let resolved = ResolvedConfig::resolve(&config).unwrap();
        assert!(resolved.assertions_for_url("https://example.com/shop/1").is_some());
        assert!(resolved.assertions_for_url("https://example.com/").is_none());
    }

    #[test]
    fn test_load_assert_config_nested_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("lighthouserc.json");
        std::fs::write(
            &json_path,
            r#"{"ci": {"assert": {"assertions": {"viewport": "error"}}}}"#,
        )
        .unwrap();
        let config = load_assert_config(&json_path).unwrap();
        assert_eq!(config.assertions.unwrap().len(), 1);

        let toml_path = dir.path().join("assert.toml");
        std::fs::write(
            &toml_path,
            "preset = \"lighthouse:no-pwa\"\nincludePassedAssertions = true\n",
        )
        .unwrap();
        let config = load_assert_config(&toml_path).unwrap();
        assert_eq!(config.preset.as_deref(), Some("lighthouse:no-pwa"));
        assert!(config.include_passed_assertions);
    }
}
