use clap::{Parser, Subcommand, ValueEnum};
use taskpad_core::model::Filter;

#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about = "In-memory task screen", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: add "Buy milk"
    Add {
        title: Option<String>,
    },
    /// Mark a task as completed
    ///
    /// Example: done 2
    Done {
        id: u64,
    },
    /// Select which tasks the list shows
    ///
    /// Example: filter pending
    Filter {
        selection: FilterArg,
    },
    /// Show the visible tasks
    ///
    /// Example: list
    List,
    /// Toggle full-title display for a long task
    ///
    /// Example: expand 3
    Expand {
        id: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg {
    All,
    Pending,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Pending => Filter::Pending,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

/// Flag name used for config override arguments at process startup.
pub const CONFIG_OVERRIDE_FLAG: &str = "--config-override";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    Theme,
    Alias(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
///
/// Supported keys are `theme` and `alias.<name>` (or `aliases.<name>`).
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let trimmed = raw.trim();
    let (key_raw, value_raw) = trimmed
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim().to_string();
    let (field, remainder) = key_raw
        .split_once('.')
        .map(|(field, rest)| (field.trim(), Some(rest.trim())))
        .unwrap_or((key_raw.trim(), None));

    match field.to_ascii_lowercase().as_str() {
        "" => Err("override key cannot be empty".to_string()),
        "theme" => {
            if remainder.is_some() {
                Err("theme override cannot have subfields".to_string())
            } else {
                Ok(ParsedConfigOverride {
                    target: ConfigOverrideTarget::Theme,
                    value,
                })
            }
        }
        "alias" | "aliases" => {
            let alias_name = remainder
                .filter(|segment| !segment.is_empty())
                .ok_or_else(|| "alias override requires an alias name".to_string())?;
            Ok(ParsedConfigOverride {
                target: ConfigOverrideTarget::Alias(alias_name.to_string()),
                value,
            })
        }
        other => Err(format!("unknown config field '{other}'")),
    }
}
