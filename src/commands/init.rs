use crate::{
    libs::{config::Config, formatter::ChronoDateFormatter, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// chrono strftime pattern for due dates
    #[arg(long)]
    pub date_format: Option<String>,

    /// Recompute overdue flags from due dates on every render
    #[arg(long)]
    pub derive_overdue: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = build_config(Config::read()?, &init_args)?;
    config.save()?;

    msg_success!(Message::ConfigSaved);
    msg_info!(Message::ConfigSavedTo(Config::path()?.display().to_string()));
    Ok(())
}

/// Applies the init flags on top of `current`, validating the date pattern.
pub fn build_config(current: Config, init_args: &InitArgs) -> Result<Config> {
    let mut config = current;
    if let Some(pattern) = &init_args.date_format {
        if ChronoDateFormatter::new(pattern).is_err() {
            msg_bail_anyhow!(Message::InvalidDateFormat(pattern.clone()));
        }
        config.date_format = pattern.clone();
    }
    if init_args.derive_overdue {
        config.derive_overdue = true;
    }
    Ok(config)
}
