//! Init command - writes a starter configuration file

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use svga11y_core::config::CONFIG_FILENAME;

const DEFAULT_CONFIG: &str = r#"# svga11y configuration file

# Glob patterns to skip during directory scans
# ignore = ["**/build/**", "**/dist/**"]

# Rule configuration (all rules are enabled by default;
# set a flag to false to disable that rule)
[rules]
# requireTitle = false
# requireDescription = false
# checkAriaLabels = false
# checkContrast = false
# checkRoleAttributes = false
# checkTextAlternatives = false
# checkFocusableElements = false
# checkAnimatedContent = false
# checkImageText = false
# checkLanguageDeclaration = false
# checkResponsiveScaling = false
# checkUniqueIDs = false
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(&self) -> Result<()> {
        let dir = std::env::current_dir()?;
        self.run_in(&dir)
    }

    fn run_in(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILENAME);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Config file '{}' already exists. Use --force to overwrite.",
                CONFIG_FILENAME
            );
        }

        fs::write(&config_path, DEFAULT_CONFIG)?;
        println!(
            "{} Created {} configuration file",
            "✓".green().bold(),
            CONFIG_FILENAME.cyan()
        );
        Ok(())
    }
}
