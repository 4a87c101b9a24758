//! Built-in assertion presets.

use super::config::{AssertionLevel, AssertionOptions, AssertionSetting, AssertionSpec};
use crate::utils::error::ConfigError;

pub const PRESET_ALL: &str = "lighthouse:all";
pub const PRESET_RECOMMENDED: &str = "lighthouse:recommended";
pub const PRESET_NO_PWA: &str = "lighthouse:no-pwa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuditKind {
    /// Timing metric, scored on a curve
    Metric,
    /// Lists savings opportunities; passing means an empty list
    Opportunity,
    /// Pass/fail check
    Binary,
    /// Progressive web app check
    Pwa,
}

const PRESET_AUDITS: &[(&str, AuditKind)] = &[
    ("first-contentful-paint", AuditKind::Metric),
    ("largest-contentful-paint", AuditKind::Metric),
    ("first-meaningful-paint", AuditKind::Metric),
    ("speed-index", AuditKind::Metric),
    ("interactive", AuditKind::Metric),
    ("total-blocking-time", AuditKind::Metric),
    ("max-potential-fid", AuditKind::Metric),
    ("cumulative-layout-shift", AuditKind::Metric),
    ("server-response-time", AuditKind::Metric),
    ("bootup-time", AuditKind::Metric),
    ("mainthread-work-breakdown", AuditKind::Metric),
    ("dom-size", AuditKind::Metric),
    ("total-byte-weight", AuditKind::Metric),
    ("render-blocking-resources", AuditKind::Opportunity),
    ("unused-css-rules", AuditKind::Opportunity),
    ("unused-javascript", AuditKind::Opportunity),
    ("unminified-css", AuditKind::Opportunity),
    ("unminified-javascript", AuditKind::Opportunity),
    ("uses-optimized-images", AuditKind::Opportunity),
    ("modern-image-formats", AuditKind::Opportunity),
    ("uses-responsive-images", AuditKind::Opportunity),
    ("offscreen-images", AuditKind::Opportunity),
    ("uses-text-compression", AuditKind::Opportunity),
    ("uses-rel-preconnect", AuditKind::Opportunity),
    ("efficient-animated-content", AuditKind::Opportunity),
    ("duplicated-javascript", AuditKind::Opportunity),
    ("legacy-javascript", AuditKind::Opportunity),
    ("redirects", AuditKind::Opportunity),
    ("uses-long-cache-ttl", AuditKind::Opportunity),
    ("font-display", AuditKind::Binary),
    ("is-on-https", AuditKind::Binary),
    ("errors-in-console", AuditKind::Binary),
    ("doctype", AuditKind::Binary),
    ("charset", AuditKind::Binary),
    ("document-title", AuditKind::Binary),
    ("html-has-lang", AuditKind::Binary),
    ("meta-description", AuditKind::Binary),
    ("http-status-code", AuditKind::Binary),
    ("is-crawlable", AuditKind::Binary),
    ("link-text", AuditKind::Binary),
    ("crawlable-anchors", AuditKind::Binary),
    ("image-alt", AuditKind::Binary),
    ("button-name", AuditKind::Binary),
    ("label", AuditKind::Binary),
    ("color-contrast", AuditKind::Binary),
    ("heading-order", AuditKind::Binary),
    ("viewport", AuditKind::Binary),
    ("content-width", AuditKind::Binary),
    ("installable-manifest", AuditKind::Pwa),
    ("service-worker", AuditKind::Pwa),
    ("splash-screen", AuditKind::Pwa),
    ("themed-omnibox", AuditKind::Pwa),
    ("maskable-icon", AuditKind::Pwa),
];

/// Expand a preset name into its assertion spec
///
/// # Errors
/// * `ConfigError::UnknownPreset` - Name is not a built-in preset
pub fn preset_spec(name: &str) -> Result<AssertionSpec, ConfigError> {
    let setting_for: fn(AuditKind) -> Option<AssertionSetting> = match name {
        PRESET_ALL => |_| Some(AssertionSetting::Level(AssertionLevel::Error)),
        PRESET_RECOMMENDED => recommended_setting,
        PRESET_NO_PWA => |kind| match kind {
            AuditKind::Pwa => None,
            other => recommended_setting(other),
        },
        _ => return Err(ConfigError::UnknownPreset(name.to_string())),
    };

    Ok(PRESET_AUDITS
        .iter()
        .filter_map(|(audit_id, kind)| setting_for(*kind).map(|setting| (*audit_id, setting)))
        .collect())
}

fn recommended_setting(kind: AuditKind) -> Option<AssertionSetting> {
    let setting = match kind {
        AuditKind::Metric => AssertionSetting::WithOptions(
            AssertionLevel::Warn,
            AssertionOptions {
                min_score: Some(0.9),
                ..Default::default()
            },
        ),
        AuditKind::Opportunity => AssertionSetting::WithOptions(
            AssertionLevel::Warn,
            AssertionOptions {
                max_length: Some(0.0),
                ..Default::default()
            },
        ),
        AuditKind::Binary => AssertionSetting::Level(AssertionLevel::Error),
        AuditKind::Pwa => AssertionSetting::Level(AssertionLevel::Warn),
    };
    Some(setting)
}
