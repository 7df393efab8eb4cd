//! The list of activities a session can switch between.
//!
//! An activity is just its name. Names that share a leading word (for
//! example `testing automatic` and `testing manual`) form a prefix group that
//! the breakdown report sums up separately.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Activities offered when neither the configuration nor an activities file
/// provides a list.
pub const DEFAULT_ACTIVITIES: [&str; 5] = ["testing automatic", "testing manual", "programming", "support", "other"];

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("activity name '{0}' contains a comma")]
    ContainsComma(String),
    #[error("activity name {0:?} contains a line break")]
    ContainsNewline(String),
    #[error("activity name is blank")]
    BlankName,
    #[error("activity list is empty")]
    Empty,
    #[error("failed to read activities from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the prefix of an activity name: the text before the first space.
///
/// ```rust
/// use timekeeper::libs::activity::prefix;
///
/// assert_eq!(prefix("testing manual"), Some("testing"));
/// assert_eq!(prefix("programming"), None);
/// ```
pub fn prefix(activity: &str) -> Option<&str> {
    activity.find(' ').map(|pos| &activity[..pos])
}

/// Tells whether `activity` belongs to the prefix group `prefix`.
pub fn has_prefix(activity: &str, prefix: &str) -> bool {
    activity.strip_prefix(prefix).is_some_and(|rest| rest.starts_with(' '))
}

/// Collects the distinct prefixes of a set of names in ascending order.
pub fn prefixes<'a, I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter_map(prefix).map(str::to_string).collect()
}

/// Trims an activity name and checks that it fits on one raw line.
///
/// ```rust
/// use timekeeper::libs::activity::validate_name;
///
/// assert_eq!(validate_name(" support ").unwrap(), "support");
/// assert!(validate_name("a,b").is_err());
/// assert!(validate_name("review\ncode").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<&str, ActivityError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ActivityError::BlankName);
    }
    if name.contains(',') {
        return Err(ActivityError::ContainsComma(name.to_string()));
    }
    if name.contains(['\n', '\r']) {
        return Err(ActivityError::ContainsNewline(name.to_string()));
    }
    Ok(name)
}

/// Ordered, immutable list of activity names for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityList {
    names: Vec<String>,
}

impl Default for ActivityList {
    fn default() -> Self {
        Self {
            names: DEFAULT_ACTIVITIES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ActivityList {
    /// Builds a list from names, trimming each and dropping blanks.
    ///
    /// Names are written verbatim into comma-separated raw files, so a name
    /// containing a comma or a line break is rejected.
    pub fn new<I, S>(names: I) -> Result<Self, ActivityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for name in names {
            if name.as_ref().trim().is_empty() {
                continue;
            }
            let name = validate_name(name.as_ref())?;
            if !list.iter().any(|existing| existing == name) {
                list.push(name.to_string());
            }
        }

        if list.is_empty() {
            return Err(ActivityError::Empty);
        }
        Ok(Self { names: list })
    }

    /// Reads a line-delimited activities file.
    pub fn from_file(path: &Path) -> Result<Self, ActivityError> {
        let content = fs::read_to_string(path).map_err(|source| ActivityError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(content.lines())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
