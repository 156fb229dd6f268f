//! Template registry
//!
//! The closed (platform, template name) table backing validation and
//! skeleton lookup. Read-only at runtime.

use super::embedded;

/// One platform's registered templates
struct PlatformTemplates {
    platform: &'static str,
    templates: &'static [(&'static str, &'static str)],
}

const TABLE: &[PlatformTemplates] = &[
    PlatformTemplates {
        platform: "facebook",
        templates: &[
            ("basic", embedded::FACEBOOK_BASIC),
            ("detailed", embedded::FACEBOOK_DETAILED),
        ],
    },
    PlatformTemplates {
        platform: "whatsapp",
        templates: &[
            ("basic", embedded::WHATSAPP_BASIC),
            ("detailed", embedded::WHATSAPP_DETAILED),
        ],
    },
    PlatformTemplates {
        platform: "revolico",
        templates: &[
            ("basic", embedded::REVOLICO_BASIC),
            ("detailed", embedded::REVOLICO_DETAILED),
        ],
    },
];

/// Lookup table over the built-in platform/template pairs
///
/// Constructed once and handed to the services that validate against it.
/// `skeleton_for` never fails: unknown pairs fall back to the default
/// skeleton so generation always has a guide to offer the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Registered platform names, in display order
    pub fn platforms(&self) -> Vec<&'static str> {
        TABLE.iter().map(|p| p.platform).collect()
    }

    /// Template names registered for a platform; empty if unknown
    pub fn templates_for(&self, platform: &str) -> Vec<&'static str> {
        TABLE
            .iter()
            .find(|p| p.platform == platform)
            .map(|p| p.templates.iter().map(|(name, _)| *name).collect())
            .unwrap_or_default()
    }

    /// Skeleton text for a (platform, template) pair
    ///
    /// Falls back to the facebook/basic skeleton when the pair is absent.
    pub fn skeleton_for(&self, platform: &str, template: &str) -> &'static str {
        TABLE
            .iter()
            .find(|p| p.platform == platform)
            .and_then(|p| p.templates.iter().find(|(name, _)| *name == template))
            .map(|(_, skeleton)| *skeleton)
            .unwrap_or(embedded::FACEBOOK_BASIC)
    }

    /// The platform → template-names table as JSON
    pub fn as_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for entry in TABLE {
            let names: Vec<serde_json::Value> = entry
                .templates
                .iter()
                .map(|(name, _)| serde_json::Value::String(name.to_string()))
                .collect();
            map.insert(entry.platform.to_string(), serde_json::Value::Array(names));
        }
        serde_json::Value::Object(map)
    }
}
