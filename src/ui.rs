use anyhow::{Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use url::Url;

// Pede a URL da página quando ela não veio na linha de comando.
// A entrada só é aceita se for uma URL absoluta.
pub fn prompt_url(prompt: &str) -> Result<String> {
    let url = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            Url::parse(input.trim())
                .map(|_| ())
                .map_err(|e| format!("Invalid URL: {}", e))
        })
        .interact_text()
        .context("Failed to read URL")?;

    Ok(url.trim().to_string())
}

// Spinner no stderr enquanto a requisição está em andamento
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
