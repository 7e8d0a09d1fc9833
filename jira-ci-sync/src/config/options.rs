//! Optional TOML file with message templates and operation defaults.

use super::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Path checked when no options file is given explicitly.
pub const DEFAULT_OPTIONS_PATH: &str = ".github/jira-ci-sync.toml";

/// Priority assigned to bugs unless overridden.
pub const DEFAULT_PRIORITY: &str = "Blocker";

/// Link type used between a bug and the tracked issue unless overridden.
pub const DEFAULT_LINK_TYPE: &str = "Blocks";

const DEFAULT_COMMENT_TEMPLATE: &str = "Triggered by {{author}} for [repository|https://github.com/{{repository}}/actions].\n\n | {{table}}";

const DEFAULT_STORY_DESCRIPTION: &str =
    "This bug was automatically created on Pull Request for [repository|https://github.com/{{repository}}]";

const DEFAULT_BUG_DESCRIPTION: &str = "This bug was automatically created because automated test triggered by {{author}} failed on [repository|https://github.com/{{repository}}/actions]";

/// Templates and defaults, parsed from a file such as:
///
/// ```toml
/// comment-template = "Run by {{author}}\n\n{{table}}"
/// priority = "Critical"
/// link-type = "Relates"
/// ```
///
/// Templates are Handlebars and see `author`, `repository` and (for the
/// comment) `table`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SyncOptions {
    /// Body of the test report comment.
    pub comment_template: String,

    /// Description of stories created from a pull request.
    pub story_description: String,

    /// Description of bugs created for failing tests.
    pub bug_description: String,

    /// Priority set on bugs.
    pub priority: String,

    /// Link type between bug and tracked issue.
    pub link_type: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            comment_template: DEFAULT_COMMENT_TEMPLATE.to_string(),
            story_description: DEFAULT_STORY_DESCRIPTION.to_string(),
            bug_description: DEFAULT_BUG_DESCRIPTION.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            link_type: DEFAULT_LINK_TYPE.to_string(),
        }
    }
}

impl SyncOptions {
    /// Loads options from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No options file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let options = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;
        debug!(path = %path.display(), "Loaded options file");
        Ok(options)
    }
}
