//! Configuration command handlers (no backend connection required).

use cellwatch_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts, config: &Config) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global, config),
        ConfigCommand::Show => {
            output::print_output(&output::render_yaml(config), global.quiet);
            Ok(())
        }
        ConfigCommand::Path => {
            output::print_output(
                &cellwatch_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }
        ConfigCommand::SetToken { profile } => set_token(profile, global, config),
    }
}

/// Write a starter config with one profile pointing at the given (or
/// default) backend URL.
fn init(global: &GlobalOpts, existing: &Config) -> Result<(), CliError> {
    let path = cellwatch_config::config_path();
    if path.exists() && !global.yes {
        return Err(CliError::NonInteractiveRequiresYes {
            action: format!("overwrite {}", path.display()),
        });
    }

    let profile_name = active_profile_name(global, existing);
    let api_url = global
        .api_url
        .clone()
        .unwrap_or_else(|| "http://localhost:8080/api".into());

    let mut config = Config::default();
    config.default_profile = Some(profile_name.clone());
    config.profiles.insert(
        profile_name.clone(),
        Profile {
            api_url,
            api_token: None,
            api_token_env: Some("CELLWATCH_API_TOKEN".into()),
            timeout: None,
            warn: None,
            crit: None,
            refresh_interval: None,
            congestion_limit: None,
        },
    );

    cellwatch_config::save_config(&config)?;
    if !global.quiet {
        eprintln!("wrote {} (profile '{profile_name}')", path.display());
    }
    Ok(())
}

/// Prompt for a bearer token and store it in the system keyring.
fn set_token(
    profile: Option<String>,
    global: &GlobalOpts,
    config: &Config,
) -> Result<(), CliError> {
    let profile_name = profile.unwrap_or_else(|| active_profile_name(global, config));

    let token = rpassword::prompt_password(format!("Bearer token for '{profile_name}': "))?;
    if token.trim().is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "empty token".into(),
        });
    }

    cellwatch_config::store_api_token(&profile_name, token.trim())?;
    if !global.quiet {
        eprintln!("token stored in system keyring for profile '{profile_name}'");
    }
    Ok(())
}
