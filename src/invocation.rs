use crate::settings::Settings;

const RUN_COMMAND: &str = "run";
const REMOVE_FLAG: &str = "--rm";
const VOLUME_FLAG: &str = "-v";
const SHELL: &str = "bash";
const SHELL_COMMAND_FLAG: &str = "-c";
const INTERPRETER: &str = "Rscript";

/// The full command line handed to the container runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    program: String,
    args: Vec<String>,
    mount: String,
    shell_line: String,
}

impl InvocationSpec {
    pub fn new(settings: &Settings) -> Self {
        // Bind mount the host directory into the container.
        let mount = format!(
            "{}:{}",
            settings.volume.host_dir, settings.volume.container_dir
        );

        // Activate the script's environment, then run it from the mount point.
        let shell_line = format!(
            "source activate {} && {} {}/{}",
            settings.script.env, INTERPRETER, settings.volume.container_dir, settings.script.name
        );

        let args = vec![
            RUN_COMMAND.to_owned(),
            REMOVE_FLAG.to_owned(),
            VOLUME_FLAG.to_owned(),
            mount.clone(),
            settings.container.image.clone(),
            SHELL.to_owned(),
            SHELL_COMMAND_FLAG.to_owned(),
            shell_line.clone(),
        ];

        Self {
            program: settings.runtime.clone(),
            args,
            mount,
            shell_line,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    pub fn shell_line(&self) -> &str {
        &self.shell_line
    }

    /// Quotes the command line so it can be pasted into a POSIX shell.
    pub fn to_shell(&self) -> anyhow::Result<String> {
        let words = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str));
        Ok(shlex::try_join(words)?)
    }
}
