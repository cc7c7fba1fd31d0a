//! Lint declaration records extracted from the source tree.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Default level a lint is declared with.
pub enum Level {
    Forbid,
    Deny,
    Warn,
    Allow,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Forbid => "forbid",
            Level::Deny => "deny",
            Level::Warn => "warn",
            Level::Allow => "allow",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply in table rows
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Accepts any casing (`Warn`, `warn`, `WARN`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forbid" => Ok(Level::Forbid),
            "deny" => Ok(Level::Deny),
            "warn" => Ok(Level::Warn),
            "allow" => Ok(Level::Allow),
            other => Err(format!("unknown lint level `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One `declare_lint!` invocation.
pub struct LintRecord {
    /// File stem of the declaring source file.
    pub module: String,
    /// Lowercased lint identifier.
    pub name: String,
    pub level: Level,
    /// Description with continuations joined and quotes unescaped.
    pub description: String,
}

impl LintRecord {
    pub fn new(
        module: impl Into<String>,
        name: impl Into<String>,
        level: Level,
        description: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            level,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parses_any_case_and_displays_lowercase() {
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("FORBID".parse::<Level>().unwrap(), Level::Forbid);
        assert!("loud".parse::<Level>().is_err());
        assert_eq!(Level::Deny.to_string(), "deny");
        assert_eq!(format!("{:<7}|", Level::Warn), "warn   |");
    }

    #[test]
    fn test_record_serializes_level_lowercase() {
        let rec = LintRecord::new("x", "foo_bar", Level::Allow, "d");
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["level"], "allow");
        assert_eq!(v["module"], "x");
    }
}
