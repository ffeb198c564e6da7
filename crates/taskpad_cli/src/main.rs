use std::io;
use taskpad_cli::cli::{
    CONFIG_OVERRIDE_FLAG, ConfigOverrideTarget, ParsedConfigOverride, parse_config_override,
};
use taskpad_cli::session::Session;
use taskpad_core::config::{self, ConfigOverrides};
use taskpad_core::error::AppError;

fn collect_overrides() -> Result<ConfigOverrides, AppError> {
    let mut overrides = ConfigOverrides::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let raw = if arg == CONFIG_OVERRIDE_FLAG {
            args.next()
                .ok_or_else(|| AppError::validation("--config-override requires a value"))?
        } else if let Some(rest) = arg.strip_prefix("--config-override=") {
            rest.to_string()
        } else {
            return Err(AppError::validation(format!(
                "unexpected argument '{arg}'"
            )));
        };

        let ParsedConfigOverride { target, value } =
            parse_config_override(&raw).map_err(AppError::validation)?;
        match target {
            ConfigOverrideTarget::Theme => overrides.theme = Some(value),
            ConfigOverrideTarget::Alias(name) => {
                overrides.aliases.insert(name, value);
            }
        }
    }

    Ok(overrides)
}

fn run() -> Result<(), AppError> {
    let overrides = collect_overrides()?;

    let loaded = config::load_or_default();
    if let Some(err) = loaded.error {
        eprintln!("WARNING: {}", err);
    }
    let config = config::merge_overrides(&loaded.config, &overrides);

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    Session::new(&config).run(&mut stdin_lock)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
