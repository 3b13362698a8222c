use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, MealsConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MealsConfig::load(config_dir);
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(key)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(config_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                config.get(key)
            )));
            Ok(result.with_config(config))
        }
    }
}
