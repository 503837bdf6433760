//! `duograph config` - show the effective configuration

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::print_json;
use duograph_core::config::GlobalConfig;
use duograph_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = GlobalConfig::config_path()?;
    let exists = path.exists();
    let source = if exists {
        GlobalConfig::source_display()
    } else {
        "defaults (no config file)".to_string()
    };

    if ctx.is_json() {
        return print_json(&json!({
            "path": path.display().to_string(),
            "exists": exists,
            "source": source,
            "format": ctx.format,
            "config": ctx.config,
        }));
    }

    println!("Config file: {}", path.display());
    println!("Source: {}", source);
    println!("Format: {}", ctx.format);
    println!(
        "Log level: {}",
        ctx.config.log_level.as_deref().unwrap_or("(default)")
    );
    println!("Default weight: {}", ctx.config.default_weight);
    Ok(())
}
