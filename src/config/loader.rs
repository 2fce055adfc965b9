//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};

use super::types::ConsoleConfig;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "APICONSOLE_CONFIG";
/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "apiconsole.toml";

/// What a warning is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A key the configuration schema does not know
    UnknownKey,
    /// A menu key used by more than one entry
    DuplicateMenuKey,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: WarningKind,
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ConsoleConfig,
    /// File the configuration was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (unknown keys,
/// duplicate menu keys).
pub fn load_with_warnings(path: &Path) -> ConsoleResult<(ConsoleConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: ConsoleConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConsoleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: WarningKind::UnknownKey,
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    warnings.extend(config.menu.duplicate_keys().into_iter().map(|key| {
        ConfigWarning {
            kind: WarningKind::DuplicateMenuKey,
            line: find_repeat_line_number(&content, &format!("\"{}\"", key)),
            suggestion: None,
            key,
            file: path.to_path_buf(),
        }
    }));

    Ok((config, warnings))
}

/// Pick the configuration file to load.
///
/// Order: explicit path, `APICONSOLE_CONFIG`, `./apiconsole.toml`, then the
/// user config directory. Discovered files must exist; an explicit path is
/// returned as-is so a missing file surfaces as an error.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
    user_config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = get_env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    user_config_dir
        .map(|dir| dir.join("apiconsole").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Load the effective configuration for a session
pub fn load(explicit: Option<&Path>, cwd: &Path) -> ConsoleResult<LoadedConfig> {
    let get_env = |key: &str| std::env::var(key).ok();
    let source = resolve_config_path(explicit, cwd, get_env, dirs::config_dir());

    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (ConsoleConfig::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config, get_env),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (APICONSOLE_* prefix)
pub fn with_env_overrides(
    mut config: ConsoleConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> ConsoleConfig {
    // APICONSOLE_BASE_PATH
    if let Some(base_path) = get_env("APICONSOLE_BASE_PATH") {
        config.navigation.base_path = base_path;
    }

    // APICONSOLE_DEFAULT_KEY
    if let Some(default_key) = get_env("APICONSOLE_DEFAULT_KEY").filter(|k| !k.is_empty()) {
        config.navigation.default_key = default_key;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

/// Line of the second occurrence of `needle`, falling back to the first.
fn find_repeat_line_number(content: &str, needle: &str) -> Option<usize> {
    let first = find_line_number(content, needle)?;
    content
        .lines()
        .enumerate()
        .skip(first)
        .find(|(_, line)| line.contains(needle))
        .map(|(i, _)| i + 1)
        .or(Some(first))
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "navigation",
        "base_path",
        "default_key",
        "start_path",
        "output",
        "color",
        "unicode",
        "client",
        "service_prefix",
        "menu",
        "key",
        "label",
        "children",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
