//! Implementation of the `psh-autoupdate check` command.

use crate::cli::CheckArgs;
use psh_autoupdate::config::Config;
use psh_autoupdate::error::Result;
use psh_autoupdate::preflight::run_preflight;

/// Report whether the Platform.sh CLI and API token are available.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = Config::from_env().with_overrides(None, None, args.cli);
    let report = run_preflight(&config.cli_program, |name| std::env::var(name).ok());

    report.print();
    report.summary()
}
