//! `veneer check-config` — validate an exposure config.

use std::path::Path;

use anyhow::Context;
use veneer_engine::{ExposureConfig, MethodOrderer, TunerRule};

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let config = ExposureConfig::from_file(path)
        .with_context(|| format!("loading config {}", path.display()))?;

    println!("Config:         {}", path.display());
    println!("Exposure level: {:?}", config.exposure_level);
    println!("Ordering:       {}", config.orderer().describe());
    println!("Rules:          {}", config.rules.len());
    for rule in &config.rules {
        println!("  {}", describe_rule(rule));
    }
    Ok(())
}

/// One-line rule summary
pub fn describe_rule(rule: &TunerRule) -> String {
    let mut target = format!("{}::{}", rule.class, rule.method);
    if let Some(arity) = rule.arity {
        target.push_str(&format!("/{}", arity));
    }

    let mut actions = Vec::new();
    if rule.hide {
        actions.push("hide".to_string());
    }
    if let Some(name) = &rule.rename {
        actions.push(format!("rename to '{}'", name));
    }
    if let Some(name) = &rule.property {
        actions.push(format!("property '{}'", name));
    }
    if let Some(shadows) = rule.shadows_property {
        actions.push(if shadows {
            "shadows property".to_string()
        } else {
            "yields to property".to_string()
        });
    }
    if actions.is_empty() {
        actions.push("no change".to_string());
    }
    format!("{} -> {}", target, actions.join(", "))
}
