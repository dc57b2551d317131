//! Rule configuration.
//!
//! A configuration is a three-level tree: category, then group, then rule
//! name, ending in a boolean. It is checked against the rule catalog when it
//! is loaded, so every rule the linter runs has exactly one entry.
//!
//! ```jsonc
//! {
//!   "perceivable": {
//!     "textAlternatives": {
//!       "img element missing alt attribute": true
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::ConfigError;
use crate::rules;

/// Address of one rule inside the configuration tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    /// Top-level category, e.g. `"perceivable"`.
    pub category: &'static str,
    /// Group inside the category, e.g. `"textAlternatives"`.
    pub group: &'static str,
    /// Rule name. Also the diagnostic's `rule` field.
    pub name: &'static str,
}

impl RuleKey {
    pub const fn new(category: &'static str, group: &'static str, name: &'static str) -> Self {
        Self {
            category,
            group,
            name,
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.\"{}\"", self.category, self.group, self.name)
    }
}

type Groups = BTreeMap<String, BTreeMap<String, bool>>;

/// Enable/disable switches for every rule.
///
/// Instances are immutable once built. To change settings, build a new
/// configuration and hand it to [`Linter::set_config`](crate::Linter::set_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, Groups>,
}

impl Configuration {
    /// Config file names looked up by [`Configuration::discover`], in priority order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".a11ylint.jsonc", ".a11ylint.json"];

    /// Every built-in rule enabled.
    pub fn defaults() -> Self {
        Self::uniform(&rules::catalog(), true)
    }

    /// Every rule of `catalog` set to `enabled`.
    pub fn uniform(catalog: &[RuleKey], enabled: bool) -> Self {
        let mut entries: BTreeMap<String, Groups> = BTreeMap::new();
        for key in catalog {
            entries
                .entry(key.category.to_string())
                .or_default()
                .entry(key.group.to_string())
                .or_default()
                .insert(key.name.to_string(), enabled);
        }
        Self { entries }
    }

    /// Loads configuration from a file.
    ///
    /// Both `.a11ylint.jsonc` and `.a11ylint.json` are read with the JSONC
    /// parser, which accepts plain JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_json(&content)
    }

    /// Parses configuration text and checks it against the built-in catalog.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ConfigError::Syntax(e.to_string()))?
            .ok_or_else(|| ConfigError::Syntax("empty document".to_string()))?;
        Self::from_value(&value, &rules::catalog())
    }

    /// Builds a configuration from a parsed JSON value.
    ///
    /// Every key in `value` must name a catalog entry and every catalog rule
    /// must be present.
    pub fn from_value(value: &Value, catalog: &[RuleKey]) -> Result<Self, ConfigError> {
        let expected = Self::uniform(catalog, false);
        let categories = value
            .as_object()
            .ok_or_else(|| ConfigError::NotAnObject("the top level".to_string()))?;

        let mut entries: BTreeMap<String, Groups> = BTreeMap::new();
        for (category, groups) in categories {
            let known_groups = expected
                .entries
                .get(category)
                .ok_or_else(|| ConfigError::UnknownEntry(category.clone()))?;
            let groups = groups
                .as_object()
                .ok_or_else(|| ConfigError::NotAnObject(category.clone()))?;

            for (group, rules) in groups {
                let group_path = format!("{category}.{group}");
                let known_rules = known_groups
                    .get(group)
                    .ok_or_else(|| ConfigError::UnknownEntry(group_path.clone()))?;
                let rules = rules
                    .as_object()
                    .ok_or_else(|| ConfigError::NotAnObject(group_path.clone()))?;

                for (rule, flag) in rules {
                    let rule_path = format!("{group_path}.\"{rule}\"");
                    if !known_rules.contains_key(rule) {
                        return Err(ConfigError::UnknownEntry(rule_path));
                    }
                    let enabled = flag
                        .as_bool()
                        .ok_or_else(|| ConfigError::NotABoolean(rule_path.clone()))?;
                    entries
                        .entry(category.clone())
                        .or_default()
                        .entry(group.clone())
                        .or_default()
                        .insert(rule.clone(), enabled);
                }
            }
        }

        let config = Self { entries };
        config.ensure_covers(catalog)?;
        Ok(config)
    }

    /// Finds a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// The gate: is the rule at `key` switched on?
    ///
    /// Fails for keys that have no entry. Loading already rejects
    /// configurations that miss a catalog rule, so this only fails for rules
    /// outside the catalog the configuration was built from.
    pub fn is_enabled(&self, key: &RuleKey) -> Result<bool, ConfigError> {
        self.entries
            .get(key.category)
            .and_then(|groups| groups.get(key.group))
            .and_then(|rules| rules.get(key.name))
            .copied()
            .ok_or_else(|| ConfigError::UnknownRule(key.to_string()))
    }

    /// Returns a copy with one rule switched.
    pub fn with_rule(mut self, key: &RuleKey, enabled: bool) -> Result<Self, ConfigError> {
        let slot = self
            .entries
            .get_mut(key.category)
            .and_then(|groups| groups.get_mut(key.group))
            .and_then(|rules| rules.get_mut(key.name))
            .ok_or_else(|| ConfigError::UnknownRule(key.to_string()))?;
        *slot = enabled;
        Ok(self)
    }

    /// Checks that every key has an entry.
    pub fn ensure_covers<'k>(
        &self,
        keys: impl IntoIterator<Item = &'k RuleKey>,
    ) -> Result<(), ConfigError> {
        for key in keys {
            if self.is_enabled(key).is_err() {
                return Err(ConfigError::MissingEntry(key.to_string()));
            }
        }
        Ok(())
    }

    /// Number of rules switched on.
    pub fn enabled_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|groups| groups.values())
            .flat_map(|rules| rules.values())
            .filter(|enabled| **enabled)
            .count()
    }

    /// Serializes the tree as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::defaults()
    }
}
