use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Config;

const ZSHRC: &str = ".zshrc";
const HOOK_DIR: &str = ".zsh";
const HOOK_FILE: &str = "histmon.zsh";
const SOURCE_LINE: &str = "source ~/.zsh/histmon.zsh";

const HOOK_TEMPLATE: &str = r#"autoload -Uz add-zsh-hook

typeset -g _histmon_start_at
typeset -g _histmon_command

_histmon_preexec() {
    _histmon_start_at=$(date +%s%3N)
    _histmon_command=$1
}

_histmon_precmd() {
    local exit_status=$?
    local end_at=$(date +%s%3N)

    if [[ -n "$_histmon_start_at" && -n "$_histmon_command" ]]; then
        (COMMAND="$_histmon_command" \
        START_AT="$_histmon_start_at" \
        END_AT="$end_at" \
        EXIT_STATUS="$exit_status" \
        TOKEN="{{TOKEN}}" \
        ENDPOINT="{{ENDPOINT}}" \
        histmon >/dev/null 2>&1 &)

        unset _histmon_start_at
        unset _histmon_command
    fi
}

add-zsh-hook preexec _histmon_preexec
add-zsh-hook precmd _histmon_precmd
"#;

/// Files touched by a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub zshrc: PathBuf,
    pub hook_script: PathBuf,
    /// False when the source line was already present
    pub source_line_added: bool,
}

pub struct Installer {
    home: PathBuf,
}

impl Installer {
    /// Installer rooted at the current user's home directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(Self::with_home(home))
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn install(&self, config: &Config) -> Result<InstallReport> {
        let zshrc = self.home.join(ZSHRC);
        if !zshrc.is_file() {
            bail!("File .zshrc not found: {}", zshrc.display());
        }

        let endpoint = config.endpoint()?;
        let token = config.token()?;

        let source_line_added = ensure_source_line(&zshrc)?;

        let hook_dir = self.home.join(HOOK_DIR);
        fs::create_dir_all(&hook_dir)
            .with_context(|| format!("Creating directory {}", hook_dir.display()))?;

        let hook_script = hook_dir.join(HOOK_FILE);
        fs::write(&hook_script, render_hook(endpoint, token))
            .with_context(|| format!("Writing hook script {}", hook_script.display()))?;
        debug!(path = %hook_script.display(), "hook script written");

        info!("Successfully installed histmon to your shell");
        Ok(InstallReport {
            zshrc,
            hook_script,
            source_line_added,
        })
    }
}

/// Append the source line unless the file already mentions it.
fn ensure_source_line(zshrc: &Path) -> Result<bool> {
    let mut text = fs::read_to_string(zshrc)
        .with_context(|| format!("Reading {}", zshrc.display()))?;

    if text.contains(SOURCE_LINE) {
        debug!(path = %zshrc.display(), "source line already present");
        return Ok(false);
    }

    text.push('\n');
    text.push_str(SOURCE_LINE);
    text.push('\n');
    fs::write(zshrc, text).with_context(|| format!("Writing {}", zshrc.display()))?;
    Ok(true)
}

pub fn render_hook(endpoint: &str, token: &str) -> String {
    HOOK_TEMPLATE
        .replace("{{TOKEN}}", &shell_escape(token))
        .replace("{{ENDPOINT}}", &shell_escape(endpoint))
}

/// Escape a value for use inside a double-quoted shell string.
fn shell_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
