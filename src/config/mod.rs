use serde::Deserialize;
use std::path::PathBuf;

/// Optional file configuration mirroring the CLI flags.
///
/// CLI arguments take precedence over file values. All fields are
/// optional so a partial config file works.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub svg: Option<PathBuf>,
    #[serde(default)]
    pub draw_outline: bool,
    #[serde(default)]
    pub keep_degenerate: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Load the first parseable config file from the search paths
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("poly2mesh.toml"));
    paths.push(PathBuf::from(".poly2mesh.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("poly2mesh").join("config.toml"));
        paths.push(config_dir.join("poly2mesh.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".poly2mesh.toml"));
    }

    paths
}
