use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;

const ENV_PREFIX: &str = "RSCRIPT_RUNNER";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub host_dir: String,
    pub container_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub name: String,
    pub env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub runtime: String,
    pub volume: Volume,
    pub container: Container,
    pub script: Script,
}

impl Settings {
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = Config::default();

        // Start off with the built-in invocation.
        settings.set_default("runtime", "docker")?;
        settings.set_default(
            "volume.host_dir",
            "/home/milad/milad/Varient-docker/pyscript/snpedia",
        )?;
        settings.set_default("volume.container_dir", "/data")?;
        settings.set_default("container.image", "disvar_v1")?;
        settings.set_default("script.name", "run_snp_batch.R")?;
        settings.set_default("script.env", "r-environment")?;

        // Merge in the configuration file, only when one is named. It must exist.
        if let Some(path) = config_file {
            settings.merge(File::from(path))?;
        }

        // Add in settings from the environment (with a prefix of RSCRIPT_RUNNER).
        // Eg.. `RSCRIPT_RUNNER_CONTAINER__IMAGE=disvar_v2` sets `container.image`.
        settings.merge(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))?;

        // Deserialize (and thus freeze) the entire configuration.
        settings.try_into()
    }
}
