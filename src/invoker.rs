use std::process::Command;

use tracing::{debug, info, warn};

use crate::invocation::InvocationSpec;
use crate::outcome::Outcome;
use crate::settings::Settings;

pub struct Invoker {
    spec: InvocationSpec,
}

impl Invoker {
    pub fn new(settings: &Settings) -> Self {
        Self {
            spec: InvocationSpec::new(settings),
        }
    }

    pub fn spec(&self) -> &InvocationSpec {
        &self.spec
    }

    /// Runs the container to completion, blocking the calling thread.
    pub fn run(&self) -> Outcome {
        debug!(
            program = self.spec.program(),
            mount = self.spec.mount(),
            command = self.spec.shell_line(),
            "launching container"
        );

        let output = match Command::new(self.spec.program())
            .args(self.spec.args())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                // Nothing ran, so there is no captured stderr to report.
                warn!(program = self.spec.program(), error = %e, "failed to launch runtime");
                return Outcome::Failure {
                    stderr: format!("failed to launch {}: {}\n", self.spec.program(), e),
                };
            }
        };

        info!(status = %output.status, "container exited");

        if output.status.success() {
            Outcome::Success {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        } else {
            Outcome::Failure {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use super::*;
    use crate::settings::{Container, Script, Volume};

    const FAKE_RUNTIME: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fake-runtime");

    fn settings(host_dir: &Path, image: &str) -> Settings {
        // Make sure the fixture kept its executable bit.
        fs::set_permissions(FAKE_RUNTIME, fs::Permissions::from_mode(0o755)).unwrap();

        Settings {
            runtime: FAKE_RUNTIME.to_owned(),
            volume: Volume {
                host_dir: host_dir.to_str().unwrap().to_owned(),
                container_dir: "/data".to_owned(),
            },
            container: Container {
                image: image.to_owned(),
            },
            script: Script {
                name: "run_snp_batch.R".to_owned(),
                env: "r-environment".to_owned(),
            },
        }
    }

    #[test]
    fn zero_exit_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Invoker::new(&settings(dir.path(), "ok"));

        assert_eq!(
            invoker.run(),
            Outcome::Success {
                stdout: "ok\n".to_owned()
            }
        );
    }

    #[test]
    fn non_zero_exit_captures_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Invoker::new(&settings(dir.path(), "boom"));

        assert_eq!(
            invoker.run(),
            Outcome::Failure {
                stderr: "boom\n".to_owned()
            }
        );
    }

    #[test]
    fn only_the_relevant_stream_is_kept() {
        let dir = tempfile::tempdir().unwrap();

        let success = Invoker::new(&settings(dir.path(), "noisy")).run();
        assert_eq!(
            success,
            Outcome::Success {
                stdout: "result 42\n".to_owned()
            }
        );

        let failure = Invoker::new(&settings(dir.path(), "noisy-fail")).run();
        assert_eq!(
            failure,
            Outcome::Failure {
                stderr: "Error in library(dplyr)\n".to_owned()
            }
        );
    }

    #[test]
    fn runtime_receives_the_exact_argv() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Invoker::new(&settings(dir.path(), "ok"));

        invoker.run();

        let recorded = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
        let expected = format!(
            "run\n--rm\n-v\n{}:/data\nok\nbash\n-c\n\
             source activate r-environment && Rscript /data/run_snp_batch.R\n",
            dir.path().display()
        );
        assert_eq!(recorded, expected);
    }

    #[test]
    fn missing_host_dir_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Invoker::new(&settings(&dir.path().join("absent"), "ok"));

        match invoker.run() {
            Outcome::Failure { stderr } => assert!(stderr.contains("bind source path does not exist")),
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[test]
    fn missing_runtime_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings(dir.path(), "ok");
        settings.runtime = dir.path().join("no-such-runtime").to_str().unwrap().to_owned();

        match Invoker::new(&settings).run() {
            Outcome::Failure { stderr } => assert!(stderr.starts_with("failed to launch")),
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[test]
    fn repeated_runs_agree() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Invoker::new(&settings(dir.path(), "noisy"));

        assert_eq!(invoker.run(), invoker.run());
    }
}
