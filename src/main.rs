use clap::Parser;

use rscript_runner::Opts;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    rscript_runner::logging::init(opts.verbose)?;
    rscript_runner::run(opts)?;

    Ok(())
}
