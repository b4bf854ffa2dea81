use dialoguer::Input;
use eyre::{eyre, Result};
use log::info;
use std::path::PathBuf;

use crate::theme::DialoguerTheme;
use crate::ConfigureOptions;
use base::setting::{default_path, load_file, save};
use base::util::non_blank;

fn ask(theme: &DialoguerTheme, prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::<String>::with_theme(theme);
    input.with_prompt(prompt).allow_empty(true);
    if let Some(current) = current {
        input.default(current.to_string());
    }
    let value = input.interact_text().map_err(|_| eyre!("Aborted"))?;
    Ok(non_blank(Some(value.as_str())).map(str::to_string))
}

/// Writes the config file. Flags win, anything not given is asked for.
/// Environment overrides are left out so they never end up on disk.
pub fn configure(opts: ConfigureOptions, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_path()?,
    };
    let mut settings = load_file(&path)?;
    let theme = DialoguerTheme::default();

    settings.server_url = match opts.server_url {
        Some(url) => non_blank(Some(url.as_str())).map(str::to_string),
        None => ask(&theme, "Server URL", settings.server_url())?,
    };
    settings.token = match opts.token {
        Some(token) => non_blank(Some(token.as_str())).map(str::to_string),
        None => ask(&theme, "Token", settings.token())?,
    };

    let path = save(&settings, Some(path))?;
    info!("Saved configuration to {:?}", path);
    info!("Server URL: {}", settings.server_url().unwrap_or("(not set)"));
    info!("Token: {}", settings.token().unwrap_or("(not set)"));
    Ok(())
}
