/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

use mindmeister_cli::config::CliConfig;

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("MindMeister client setup").bold().cyan());
    println!(
        "{}",
        style("Register an application at https://www.mindmeister.com/api to get a key pair.").dim()
    );

    let theme = ColorfulTheme::default();

    let api_key: String = Input::with_theme(&theme)
        .with_prompt("API key")
        .interact_text()?;

    let secret_key: String = Password::with_theme(&theme)
        .with_prompt("Shared secret")
        .interact()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(30)
        .interact_text()?;

    let mut config = CliConfig::new(api_key.trim(), secret_key.trim());
    config.timeout_secs = timeout_secs;
    config.validate()?;

    let yaml = serde_yaml::to_string(&config).context("failed to serialize config to YAML")?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());
    println!(
        "Next: run {} and open the printed URL.",
        style("mindmeister auth-url").bold()
    );

    Ok(())
}
