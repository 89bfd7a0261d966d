use common::{MapConfig, Match};

#[derive(Debug)]
pub enum LoadError {
    Io(std::path::PathBuf, std::io::Error),
    Json(std::path::PathBuf, serde_json::Error),
    MissingMapConfig(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Reading {}: {}", path.display(), e),
            Self::Json(path, e) => write!(f, "Parsing {}: {}", path.display(), e),
            Self::MissingMapConfig(map) => write!(f, "No map config for '{}'", map),
        }
    }
}

impl std::error::Error for LoadError {}

fn read_json<T, P>(path: P) -> Result<T, LoadError>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| LoadError::Io(path.to_owned(), e))?;
    serde_json::from_slice(&data).map_err(|e| LoadError::Json(path.to_owned(), e))
}

#[tracing::instrument]
pub fn load_match(path: &std::path::Path) -> Result<Match, LoadError> {
    let parsed: Match = read_json(path)?;

    tracing::info!(
        id = %parsed.id,
        map = %parsed.map,
        rounds = parsed.rounds.len(),
        "Loaded match"
    );

    Ok(parsed)
}

/// Reads every `*.json` map config in `dir`, keyed by the config's name.
#[tracing::instrument]
pub fn load_map_configs(
    dir: &std::path::Path,
) -> Result<std::collections::HashMap<String, MapConfig>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::Io(dir.to_owned(), e))?;

    let mut configs = std::collections::HashMap::new();
    for entry in entries {
        let path = entry.map_err(|e| LoadError::Io(dir.to_owned(), e))?.path();
        if path.is_dir() || path.extension().map(|ext| ext != "json").unwrap_or(true) {
            continue;
        }

        let config: MapConfig = read_json(&path)?;
        tracing::trace!(name = %config.name, ?path, "Loaded map config");

        configs.insert(config.name.clone(), config.with_default_radar_size());
    }

    Ok(configs)
}

/// Picks the map config for a match.
///
/// The config embedded in the match wins, then the config directory, then
/// the compiled in radar table.
pub fn resolve_map_config(
    parsed: &Match,
    config_dir: Option<&std::path::Path>,
    map_override: Option<&str>,
) -> Result<MapConfig, LoadError> {
    let name = map_override.unwrap_or(&parsed.map);

    if map_override.is_none() {
        if let Some(config) = parsed.map_config.as_ref() {
            return Ok(config.clone().with_default_radar_size());
        }
    }

    if let Some(dir) = config_dir {
        if let Some(config) = load_map_configs(dir)?.remove(name) {
            return Ok(config);
        }
        tracing::debug!(map = name, ?dir, "Map not in config directory");
    }

    crate::maps::builtin(name).ok_or_else(|| LoadError::MissingMapConfig(name.to_owned()))
}
