use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use drifter::DrifterConfig;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub drifter: DrifterConfig,
    pub seconds: f32,
    pub frame_rate: u32,
    pub tick_rate: u32,
}

impl DemoConfig {
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    pub fn frame_count(&self) -> u32 {
        (self.seconds.max(0.0) * self.frame_rate as f32).round() as u32
    }
}

pub fn load_drifter_config(path: &Path) -> Result<DrifterConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    DrifterConfig::from_ron_str(&source)
        .with_context(|| format!("parsing {}", path.display()))
}
