//! Reading scene and config files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vantage_core::{Scene, ViewerConfig};

pub fn scene(path: &Path) -> Result<Scene> {
    let src = fs::read_to_string(path).with_context(|| format!("failed to read scene {}", path.display()))?;
    let scene = Scene::from_json_str(&src).with_context(|| format!("invalid scene {}", path.display()))?;
    if scene.is_empty() {
        log::warn!("scene {} has no figures", path.display());
    }
    log::info!(
        "loaded {}: {} figures, {} walls",
        path.display(),
        scene.figures().len(),
        scene.wall_count()
    );
    Ok(scene)
}

/// Loads the viewer config, or the defaults when no path is given.
pub fn config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let src = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    let config = ViewerConfig::from_json_str(&src).with_context(|| format!("invalid config {}", path.display()))?;
    log::info!("loaded config {}", path.display());
    Ok(config)
}
