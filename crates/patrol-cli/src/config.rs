//! Optional TOML configuration file.
//!
//! ```toml
//! [search]
//! workers = 8
//! chunk_size = 32
//! scope = "traced-path"
//! ```
//!
//! Every key is optional. Command-line flags win over the file, and the
//! file wins over [`SearchConfig::default`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use patrol::engine::{CandidateScope, SearchConfig};
use serde::Deserialize;

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Obstruction search defaults.
    #[serde(default)]
    pub search: SearchSection,
}

/// The `[search]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    pub workers: Option<usize>,
    pub chunk_size: Option<usize>,
    pub scope: Option<String>,
}

/// Search settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchOverrides {
    pub workers: Option<usize>,
    pub chunk_size: Option<usize>,
    pub scope: Option<CandidateScope>,
}

impl FileConfig {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))
    }
}

/// Layer the file and the flags over the default search configuration.
pub fn resolve_search_config(
    file: &FileConfig,
    overrides: &SearchOverrides,
) -> Result<SearchConfig> {
    let mut config = SearchConfig::default();

    if let Some(workers) = file.search.workers {
        config.worker_count = Some(workers);
    }
    if let Some(chunk_size) = file.search.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(scope) = &file.search.scope {
        config.scope = scope
            .parse::<CandidateScope>()
            .context("invalid scope in [search] table")?;
    }

    if let Some(workers) = overrides.workers {
        config.worker_count = Some(workers);
    }
    if let Some(chunk_size) = overrides.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(scope) = overrides.scope {
        config.scope = scope;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> FileConfig {
        toml::from_str(text).expect("parse")
    }

    #[test]
    fn empty_file_gives_defaults() {
        let merged = resolve_search_config(&parse(""), &SearchOverrides::default()).unwrap();
        assert_eq!(merged, SearchConfig::default());
    }

    #[test]
    fn file_values_applied() {
        let file = parse(
            r#"
            [search]
            workers = 3
            chunk_size = 10
            scope = "traced-path"
            "#,
        );
        let merged = resolve_search_config(&file, &SearchOverrides::default()).unwrap();
        assert_eq!(merged.worker_count, Some(3));
        assert_eq!(merged.chunk_size, 10);
        assert_eq!(merged.scope, CandidateScope::TracedPath);
    }

    #[test]
    fn flags_override_file() {
        let file = parse("[search]\nworkers = 3\nscope = \"traced-path\"\n");
        let overrides = SearchOverrides {
            workers: Some(1),
            chunk_size: None,
            scope: Some(CandidateScope::AllOpen),
        };
        let merged = resolve_search_config(&file, &overrides).unwrap();
        assert_eq!(merged.worker_count, Some(1));
        assert_eq!(merged.chunk_size, 64);
        assert_eq!(merged.scope, CandidateScope::AllOpen);
    }

    #[test]
    fn bad_scope_rejected() {
        let file = parse("[search]\nscope = \"everywhere\"\n");
        let err = resolve_search_config(&file, &SearchOverrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("everywhere"));
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let overrides = SearchOverrides {
            chunk_size: Some(0),
            ..SearchOverrides::default()
        };
        assert!(resolve_search_config(&FileConfig::default(), &overrides).is_err());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<FileConfig>("[search]\nthreads = 4\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nchunk_size = 5").unwrap();
        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.search.chunk_size, Some(5));
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = FileConfig::load(Path::new("/nonexistent/patrol.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/patrol.toml"));
    }
}
