// Binding config file: parsing, rendering and persistence
//
// The format is line oriented and meant to be edited by hand:
//
//     //Comment lines at the top survive saves
//     Up:     Up,     W
//     Jump:   Space,  LeftMouse
//
// Tokens are case-insensitive and whitespace is ignored. Anything that cannot be
// understood is skipped so a partly broken file still loads.

use super::action::Action;
use super::binding::Binding;
use super::table::ActionBindingTable;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File the bindings are loaded from and saved to
pub const CONFIG_FILE: &str = "config.txt";

/// Pristine copy used to restore a missing config file
pub const DEFAULT_CONFIG_FILE: &str = "defaultconfig.txt";

const COMMENT_MARKER: &str = "//";

/// Written as the default config file when neither file exists
pub const DEFAULT_CONFIG: &str = "\
//Autogenerated, might be missing some things
Up:Up,W
down:Down,S
left:Left,A
right:Right,D
back:escape
accept:enter
";

/// Config file errors. Only raised for I/O failures; bad content is skipped.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A config line ignored because its action name is unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
}

/// A binding token that matched no mouse button or key name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// 1-based line number
    pub line: usize,
    pub action: Action,
    pub token: String,
}

/// What a load did, including everything it had to skip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub bindings_loaded: usize,
    pub skipped_lines: Vec<SkippedLine>,
    pub skipped_tokens: Vec<SkippedToken>,
}

impl LoadReport {
    /// True if nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty() && self.skipped_tokens.is_empty()
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn strip_byte_order_mark(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse config text and append every recognised binding to the table
pub fn apply_config(table: &mut ActionBindingTable, text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, line) in strip_byte_order_mark(text).lines().enumerate() {
        if line.starts_with(COMMENT_MARKER) {
            continue;
        }
        let Some((action_part, rest)) = line.split_once(':') else {
            continue;
        };
        let line_number = index + 1;

        let Some(action) = Action::from_name(&strip_whitespace(action_part)) else {
            warn!("Config line {line_number}: unknown action in {line:?}");
            report.skipped_lines.push(SkippedLine {
                line: line_number,
                text: line.to_string(),
            });
            continue;
        };

        let values = strip_whitespace(rest.split(':').next().unwrap_or_default());
        for token in values.split(',').filter(|token| !token.is_empty()) {
            let binding = Binding::parse(token);
            if !binding.is_bound() {
                warn!("Config line {line_number}: unknown binding {token:?} for {action}");
                report.skipped_tokens.push(SkippedToken {
                    line: line_number,
                    action,
                    token: token.to_string(),
                });
                continue;
            }
            table.add_binding(action, binding);
            report.bindings_loaded += 1;
        }
    }

    report
}

/// The contiguous block of comment lines at the top of a config file
pub fn leading_comments(text: &str) -> Vec<&str> {
    strip_byte_order_mark(text)
        .lines()
        .take_while(|line| line.starts_with(COMMENT_MARKER))
        .collect()
}

/// Render a table as config text, preceded by the given comment lines
pub fn render_config(table: &ActionBindingTable, comments: &[&str]) -> String {
    let mut out = String::new();

    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }

    for action in table.all_actions() {
        let bound: Vec<String> = table
            .get_bindings(action)
            .iter()
            .filter(|binding| binding.is_bound())
            .map(ToString::to_string)
            .collect();

        out.push_str(action.name());
        out.push_str(":\t");
        out.push_str(&bound.join(",\t"));
        out.push('\n');
    }

    out
}

/// Location of the config file and its default copy
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
    default_path: PathBuf,
}

impl ConfigStore {
    /// Store using the standard file names inside a directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::with_paths(dir.join(CONFIG_FILE), dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Store using explicit file paths
    pub fn with_paths<P: Into<PathBuf>, Q: Into<PathBuf>>(config_path: P, default_path: Q) -> Self {
        Self {
            config_path: config_path.into(),
            default_path: default_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Make sure the config file exists, restoring it from the default file and
    /// writing the default file first if needed.
    pub fn ensure_config_file(&self) -> Result<(), ConfigError> {
        if self.config_path.exists() {
            return Ok(());
        }

        if !self.default_path.exists() {
            info!("Writing default bindings to {}", self.default_path.display());
            fs::write(&self.default_path, DEFAULT_CONFIG).map_err(|source| ConfigError::Write {
                path: self.default_path.clone(),
                source,
            })?;
        }

        info!(
            "Restoring {} from {}",
            self.config_path.display(),
            self.default_path.display()
        );
        fs::copy(&self.default_path, &self.config_path).map_err(|source| ConfigError::Copy {
            from: self.default_path.clone(),
            to: self.config_path.clone(),
            source,
        })?;

        Ok(())
    }

    /// Read the config file. Bytes that are not valid UTF-8 are replaced so that one
    /// stray byte only costs the line it sits on.
    fn read_config(&self) -> Result<String, ConfigError> {
        let bytes = fs::read(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!("{} is not valid UTF-8, decoding it lossily", self.config_path.display());
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }

    /// Load the config file into a table, appending to whatever it already holds
    pub fn load_into(&self, table: &mut ActionBindingTable) -> Result<LoadReport, ConfigError> {
        self.ensure_config_file()?;
        let text = self.read_config()?;
        let report = apply_config(table, &text);

        debug!(
            "Loaded {} bindings from {} ({} lines and {} tokens skipped)",
            report.bindings_loaded,
            self.config_path.display(),
            report.skipped_lines.len(),
            report.skipped_tokens.len()
        );
        Ok(report)
    }

    /// Load the config file into a fresh table
    pub fn load(&self) -> Result<(ActionBindingTable, LoadReport), ConfigError> {
        let mut table = ActionBindingTable::new();
        let report = self.load_into(&mut table)?;
        Ok((table, report))
    }

    /// Overwrite the config file with the table, keeping its leading comments
    pub fn save(&self, table: &ActionBindingTable) -> Result<(), ConfigError> {
        let existing = if self.config_path.exists() {
            self.read_config()?
        } else {
            String::new()
        };

        let text = render_config(table, &leading_comments(&existing));
        fs::write(&self.config_path, text).map_err(|source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        })?;

        info!("Saved bindings to {}", self.config_path.display());
        Ok(())
    }
}
