/*
[INPUT]:  Interactive user input via CLI prompts
[OUTPUT]: Written YAML configuration file
[POS]:    CLI configuration flow
[UPDATE]: When ConsoleConfig grows new options
*/

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::config::ConsoleConfig;

/// Prompt for every configuration value and write the file. The current
/// configuration (file values layered over defaults) seeds the prompts, so
/// rerunning only changes what the user retypes.
pub fn run_configure(output: &Path, current: ConsoleConfig) -> Result<()> {
    println!("{}", style("taskdeck configuration").bold().cyan());
    println!(
        "{}",
        style("Point the console at your workflow backend. Enter keeps the shown value.").dim()
    );

    let theme = ColorfulTheme::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Backend base URL (including the API prefix)")
        .default(current.base_url.clone())
        .interact_text()?;

    let api_token: String = Input::with_theme(&theme)
        .with_prompt("API token (empty for anonymous access)")
        .allow_empty(true)
        .default(current.api_token.clone().unwrap_or_default())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(current.timeout_secs)
        .interact_text()?;

    let connect_timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Connect timeout (seconds)")
        .default(current.connect_timeout_secs)
        .interact_text()?;

    let per_page: u32 = Input::with_theme(&theme)
        .with_prompt("Tasks per page")
        .default(current.per_page)
        .interact_text()?;

    let config = ConsoleConfig {
        base_url,
        api_token: (!api_token.is_empty()).then_some(api_token),
        timeout_secs,
        connect_timeout_secs,
        per_page,
    };
    config.write_to(output).context("write configuration")?;

    println!("\n{}", style("Configuration saved.").bold().green());
    println!("Written to: {}", style(output.display()).cyan());

    Ok(())
}
