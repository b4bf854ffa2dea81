use base::{LOGLEVEL, LOGSTYLE};
use dialoguer::console::{style, Style, StyledObject};
use dialoguer::theme::Theme;
use env_logger::{fmt::Color, Builder, Env};
use log::{Level, LevelFilter};
use std::fmt;
use std::io::Write;

pub fn init_logger() {
    let env = Env::default()
        .filter_or(LOGLEVEL, "info")
        .write_style(LOGSTYLE);

    Builder::from_env(env)
        .filter(Some("html5ever"), LevelFilter::Warn)
        .filter(Some("selectors"), LevelFilter::Warn)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                Level::Warn => style.set_color(Color::Yellow).value("   warn"),
                Level::Info => style.set_color(Color::Green).value("   info"),
                Level::Error => style.set_color(Color::Red).value("  error"),
                Level::Debug => style.set_color(Color::Blue).value("  debug"),
                Level::Trace => style
                    .set_color(Color::Blue)
                    .set_bold(true)
                    .value("  trace"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}

/// Prompt styling for `configure`, lined up with the log prefixes.
pub struct DialoguerTheme {
    pub defaults_style: Style,
    pub prompt_style: Style,
    pub prompt_selection_style: Style,
    pub prompt_prefix: StyledObject<String>,
    pub success_prefix: StyledObject<String>,
    pub hint_style: Style,
}

impl Default for DialoguerTheme {
    fn default() -> Self {
        Self {
            defaults_style: Style::new().for_stderr().cyan(),
            prompt_style: Style::new().for_stderr().bold(),
            prompt_selection_style: Style::new().for_stderr(),
            prompt_prefix: style("      ?".to_string()).for_stderr().yellow(),
            success_prefix: style("    set".to_string()).for_stderr().green(),
            hint_style: Style::new().for_stderr().black().bright(),
        }
    }
}

impl Theme for DialoguerTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(
            f,
            "{} {} ",
            &self.prompt_prefix,
            self.prompt_style.apply_to(prompt)
        )
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        if !prompt.is_empty() {
            write!(
                f,
                "{} {} ",
                &self.prompt_prefix,
                self.prompt_style.apply_to(prompt)
            )?;
        }

        match default {
            Some(default) => write!(
                f,
                "{} ",
                self.hint_style.apply_to(&format!("({})", default)),
            ),
            None => write!(f, ""),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        if !prompt.is_empty() {
            write!(
                f,
                "{} {} ",
                &self.success_prefix,
                self.prompt_selection_style.apply_to(prompt)
            )?;
        }

        write!(f, "{}", self.defaults_style.apply_to(sel))
    }
}
