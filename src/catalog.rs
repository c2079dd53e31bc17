//! Item and tier catalogue, with optional rc-file overrides
//!
//! The compiled-in defaults mirror the survey this tool ships with: five
//! original/processed image pairs and the five-step quality scale. A project
//! can override either through `.appraiserc.json`, discovered in the working
//! directory or any parent.

use crate::{ImagePair, Tier};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".appraiserc.json";

/// Display record for one step of the quality scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    /// Numeric tier value (1-5)
    pub value: u8,
    pub label: String,
    pub description: String,
    /// Hex color used for chart bars and labels
    pub color: String,
}

/// Everything the evaluation runs against: items to rate, the quality scale,
/// and an optional pass threshold override for CI-style gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default = "default_items")]
    pub items: Vec<ImagePair>,
    #[serde(default = "default_scale")]
    pub scale: Vec<TierInfo>,
    /// Minimum average score for a zero exit (CLI `--threshold` wins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: default_items(),
            scale: default_scale(),
            threshold: None,
        }
    }
}

impl Catalog {
    /// Check structural invariants: the scale must cover exactly the tier
    /// values 1 through 5, each once.
    pub fn validate(&self) -> Result<()> {
        if self.scale.len() != 5 {
            anyhow::bail!(
                "quality scale must have exactly 5 entries, found {}",
                self.scale.len()
            );
        }
        let mut values: Vec<u8> = self.scale.iter().map(|t| t.value).collect();
        values.sort_unstable();
        if values != [1, 2, 3, 4, 5] {
            anyhow::bail!("quality scale must cover tier values 1-5 exactly once");
        }
        if let Some(threshold) = self.threshold {
            if !(1.0..=5.0).contains(&threshold) {
                anyhow::bail!("threshold {} is outside the 1-5 scale", threshold);
            }
        }
        Ok(())
    }

    fn info_for(&self, tier: Tier) -> Option<&TierInfo> {
        self.scale.iter().find(|t| t.value == tier.value())
    }

    /// Label for a tier, falling back to the built-in scale
    pub fn label_for(&self, tier: Tier) -> &str {
        self.info_for(tier)
            .map(|t| t.label.as_str())
            .unwrap_or_else(|| tier.label())
    }

    /// Description for a tier, falling back to the built-in scale
    pub fn description_for(&self, tier: Tier) -> &str {
        self.info_for(tier)
            .map(|t| t.description.as_str())
            .unwrap_or_else(|| tier.description())
    }

    /// Hex display color for a tier, falling back to the built-in scale
    pub fn color_for(&self, tier: Tier) -> &str {
        self.info_for(tier)
            .map(|t| t.color.as_str())
            .unwrap_or_else(|| tier.color())
    }
}

fn default_items() -> Vec<ImagePair> {
    let entries = [
        (1, "Professional Portrait", "https://i.imgur.com/YG29M6I.png", "https://i.imgur.com/xW3oobT.png"),
        (2, "Business Attire", "https://i.imgur.com/Mxyf5Tt.png", "https://i.imgur.com/bqx1bWu.png"),
        (3, "Product - Smartphone", "https://i.imgur.com/NKBdsXV.png", "https://i.imgur.com/NUTQwWT.png"),
        (4, "Steak Dish", "https://i.imgur.com/DLokTft.png", "https://i.imgur.com/FN6GcEf.png"),
        (5, "Product - Coffee Cup", "https://i.imgur.com/ad5dEgm.png", "https://i.imgur.com/wobxzdf.png"),
    ];
    entries
        .into_iter()
        .map(|(id, name, original, processed)| ImagePair {
            id,
            name: name.to_string(),
            original: original.to_string(),
            processed: processed.to_string(),
        })
        .collect()
}

fn default_scale() -> Vec<TierInfo> {
    Tier::ALL
        .into_iter()
        .map(|tier| TierInfo {
            value: tier.value(),
            label: tier.label().to_string(),
            description: tier.description().to_string(),
            color: tier.color().to_string(),
        })
        .collect()
}

/// Load the catalogue. An explicit path must exist; otherwise the rc-file is
/// searched for in `work_dir` and its parents, and the compiled-in defaults
/// apply when none is found.
pub fn load_catalog(work_dir: &Path, custom_path: Option<&Path>) -> Result<Catalog> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Catalog file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    let catalog = match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in catalog: {}", path.display()))?
        }
        None => Catalog::default(),
    };

    catalog.validate()?;
    Ok(catalog)
}

fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

/// Write a default rc-file into `dir` for editing. Refuses to overwrite an
/// existing one unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let content = serde_json::to_string_pretty(&Catalog::default())
        .context("Failed to serialize default catalog")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
