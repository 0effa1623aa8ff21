use tracing::{debug, info};

mod invocation;
mod invocation_error;
mod invoker;
pub mod logging;
mod opts;
mod outcome;
mod settings;

pub use invocation::InvocationSpec;
pub use invocation_error::InvocationError;
pub use invoker::Invoker;
pub use opts::Opts;
pub use outcome::Outcome;
pub use settings::Settings;

pub fn run(opts: Opts) -> anyhow::Result<()> {
    // Load the invocation settings.
    let settings = Settings::new(opts.config.as_deref())?;
    debug!(?settings, "loaded settings");

    let invoker = Invoker::new(&settings);

    if opts.dry_run {
        println!("{}", invoker.spec().to_shell()?);
        return Ok(());
    }

    // Run the container and report whichever stream matters.
    let outcome = invoker.run();
    info!(success = outcome.is_success(), "run finished");
    print!("{}", outcome);

    // A failed run only reaches the exit status when asked to.
    if opts.strict {
        outcome.into_result()?;
    }

    Ok(())
}
