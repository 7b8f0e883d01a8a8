//! The optional YAML config file.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::password_generation::{Generator, GeneratorConfig};
use crate::{Error, ErrorRepr};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load and validate the config at `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Config, Error> {
        let data =
            fs::read_to_string(path).map_err(|err| ErrorRepr::ConfigIo(path.to_owned(), err))?;
        Self::parse(path, &data)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, Error> {
        match fs::read_to_string(path) {
            Ok(data) => Self::parse(path, &data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}; using defaults", path.display());
                Ok(Config::default())
            }
            Err(err) => Err(ErrorRepr::ConfigIo(path.to_owned(), err).into()),
        }
    }

    fn parse(path: &Path, data: &str) -> Result<Config, Error> {
        // An empty document deserializes as unit, not as an empty map.
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(data)
            .map_err(|err| ErrorRepr::ConfigParse(path.to_owned(), err))?;
        config.generator()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn generator(&self) -> Result<Generator, Error> {
        Generator::new(&self.generator)
    }
}
