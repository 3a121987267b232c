// Configuration module: loads the Supabase connection settings from a
// local properties file. The file holds exactly two secrets (project URL
// and API key) and the program refuses to start without both.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const URL_KEY: &str = "SUPABASE_URL";
const API_KEY_KEY: &str = "SUPABASE_KEY";

/// Connection settings for the Supabase backend. Constructed once in
/// `main` and passed to the API client; nothing else reads the file.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    /// Load the configuration from the first location that applies:
    /// the `SUPACRUD_CONFIG` environment variable, `config.properties`
    /// in the current directory, or `.supacrud.properties` in the
    /// user's home directory.
    pub fn load() -> Result<Self> {
        let path = resolve_config_path();
        Self::from_file(&path)
    }

    /// Load and validate the configuration from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Self::parse(&data)
    }

    fn parse(data: &str) -> Result<Self> {
        let base_url = lookup(data, URL_KEY);
        let api_key = lookup(data, API_KEY_KEY);
        if base_url.is_empty() {
            bail!("{} is missing or empty in the config file", URL_KEY);
        }
        if api_key.is_empty() {
            bail!("{} is missing or empty in the config file", API_KEY_KEY);
        }
        Ok(Config { base_url, api_key })
    }
}

/// Pick the config file location. An explicit `SUPACRUD_CONFIG` override
/// wins; otherwise prefer `config.properties` next to the binary's working
/// directory and fall back to a dotfile in the user's home directory.
pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SUPACRUD_CONFIG") {
        return PathBuf::from(path);
    }
    let local = PathBuf::from("config.properties");
    if local.exists() {
        return local;
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".supacrud.properties")
}

/// Find `key` in properties-style `KEY=VALUE` text and return its cleaned
/// value, or an empty string if the key is absent. Lines starting with
/// `#` or `!` are comments.
fn lookup(data: &str, key: &str) -> String {
    for line in data.lines() {
        let line = line.trim_start();
        if line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            if k.trim() == key {
                return clean(v);
            }
        }
    }
    String::new()
}

/// Strip surrounding whitespace and quote characters from a raw value.
fn clean(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_well_formed_file() {
        let file = config_file(
            "SUPABASE_URL=https://abc.supabase.co\nSUPABASE_KEY=anon-key-123\n",
        );
        let config = Config::from_file(file.path()).expect("load");
        assert_eq!(config.base_url, "https://abc.supabase.co");
        assert_eq!(config.api_key, "anon-key-123");
    }

    #[test]
    fn missing_file_fails() {
        let result = Config::from_file(Path::new("/nonexistent/config.properties"));
        assert!(result.is_err());
    }

    #[test]
    fn missing_url_key_fails() {
        let file = config_file("SUPABASE_KEY=anon-key-123\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));
    }

    #[test]
    fn empty_key_fails() {
        let file = config_file("SUPABASE_URL=https://abc.supabase.co\nSUPABASE_KEY=\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_KEY"));
    }

    #[test]
    fn quotes_only_value_fails() {
        let file = config_file("SUPABASE_URL=\"\"\nSUPABASE_KEY=k\n");
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn trims_whitespace_and_quotes() {
        let file = config_file(
            "SUPABASE_URL =  \"https://abc.supabase.co\"  \nSUPABASE_KEY= \"secret\" \n",
        );
        let config = Config::from_file(file.path()).expect("load");
        assert_eq!(config.base_url, "https://abc.supabase.co");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let file = config_file(
            "# Supabase project settings\n\n! legacy comment style\nSUPABASE_URL=https://abc.supabase.co\nSUPABASE_KEY=k\n",
        );
        let config = Config::from_file(file.path()).expect("load");
        assert_eq!(config.base_url, "https://abc.supabase.co");
    }

    #[test]
    fn explicit_override_wins() {
        std::env::set_var("SUPACRUD_CONFIG", "/custom/supacrud.properties");
        let path = resolve_config_path();
        std::env::remove_var("SUPACRUD_CONFIG");
        assert_eq!(path, PathBuf::from("/custom/supacrud.properties"));
    }
}
