//! Explain command - provides detailed explanation of a rule

use clap::Args;
use colored::Colorize;
use std::env;
use svga11y_core::analysis::AnalysisEngine;
use svga11y_core::config::load_config_or_default_with_warnings;
use svga11y_core::rules::RuleKey;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[arg(
        value_name = "RULE",
        help = "Rule key to explain (e.g., \"title\", \"uniqueIDs\")"
    )]
    pub rule: String,
}

impl ExplainArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let cwd = env::current_dir()?;
        let config_result = load_config_or_default_with_warnings(&cwd);
        let config = config_result.config;
        let engine = AnalysisEngine::with_config(&config);
        let registry = engine.registry();

        let key = RuleKey::parse(&self.rule).or_else(|| {
            registry
                .rules()
                .map(|r| r.metadata())
                .find(|m| m.name.eq_ignore_ascii_case(&self.rule))
                .map(|m| m.key)
        });

        let rule = key.and_then(|k| registry.get_rule(k));

        match rule {
            Some(rule) => {
                let metadata = rule.metadata();
                let is_enabled = registry.is_rule_enabled(metadata.key);

                println!();
                println!("{}", format!("Rule: {}", metadata.key).bold());
                println!();
                println!("  {}: {}", "Name".cyan(), metadata.name);
                println!("  {}: {}", "Description".cyan(), metadata.description);
                println!(
                    "  {}: {}",
                    "Config flag".cyan(),
                    config_flag_for(metadata.key)
                );

                println!();
                if is_enabled {
                    println!("  {}: {}", "Status".cyan(), "enabled".green());
                } else {
                    println!("  {}: {}", "Status".cyan(), "disabled".red());
                }
                println!();

                Ok(())
            }
            None => {
                eprintln!(
                    "{} Unknown rule '{}'",
                    "error:".red().bold(),
                    self.rule
                );
                eprintln!();
                eprintln!("Available rules:");

                for rule in registry.rules() {
                    let meta = rule.metadata();
                    eprintln!("  {} ({})", meta.key, meta.name);
                }

                std::process::exit(1);
            }
        }
    }
}

/// Name of the `[rules]` table flag that controls the rule.
fn config_flag_for(key: RuleKey) -> &'static str {
    match key {
        RuleKey::Title => "requireTitle",
        RuleKey::Description => "requireDescription",
        RuleKey::AriaLabels => "checkAriaLabels",
        RuleKey::Contrast => "checkContrast",
        RuleKey::RoleAttributes => "checkRoleAttributes",
        RuleKey::TextAlternatives => "checkTextAlternatives",
        RuleKey::FocusableElements => "checkFocusableElements",
        RuleKey::AnimatedContent => "checkAnimatedContent",
        RuleKey::ImageText => "checkImageText",
        RuleKey::LanguageDeclaration => "checkLanguageDeclaration",
        RuleKey::ResponsiveScaling => "checkResponsiveScaling",
        RuleKey::UniqueIds => "checkUniqueIDs",
    }
}
