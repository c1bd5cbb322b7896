use std::collections::BTreeMap;

use serde::Deserialize;

/// Package that every Laravel application depends on.
pub const FRAMEWORK_PACKAGE: &str = "laravel/framework";

/// Package name of the framework's starter skeleton.
pub const STARTER_PACKAGE: &str = "laravel/laravel";

/// The subset of `composer.json` this tool inspects. Read-only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub require: BTreeMap<String, String>,
}

impl ComposerManifest {
    /// Parse manifest JSON. Malformed content yields `None`; callers fall
    /// back to the filesystem markers.
    pub fn parse(raw: &str) -> Option<ComposerManifest> {
        serde_json::from_str(raw).ok()
    }

    pub fn depends_on_framework(&self) -> bool {
        self.require.contains_key(FRAMEWORK_PACKAGE)
    }

    pub fn is_starter_package(&self) -> bool {
        self.name.as_deref() == Some(STARTER_PACKAGE)
    }

    /// Major version extracted from the framework requirement, taken as the
    /// first run of digits in the range string ("^10.0" -> "10").
    pub fn framework_version(&self) -> Option<String> {
        let requirement = self.require.get(FRAMEWORK_PACKAGE)?;
        let digits: String = requirement
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() { None } else { Some(digits) }
    }
}
