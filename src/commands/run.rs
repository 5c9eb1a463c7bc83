//! Implementation of the `psh-autoupdate run` command.

use crate::cli::RunArgs;
use psh_autoupdate::config::Config;
use psh_autoupdate::error::Result;
use psh_autoupdate::preflight::run_preflight;
use psh_autoupdate::runner::ShellRunner;
use psh_autoupdate::workflow::UpdateWorkflow;

/// Resolve configuration, check preconditions, and run the update workflow.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config =
        Config::from_env().with_overrides(args.update_branch, args.source_operation, args.cli);

    tracing::debug!(
        update_branch = %config.update_branch,
        source_operation = %config.source_operation,
        cli = %config.cli_program,
        "resolved configuration"
    );

    if !args.skip_preflight {
        run_preflight(&config.cli_program, |name| std::env::var(name).ok()).into_result()?;
    }

    let runner = ShellRunner::new();
    let report = UpdateWorkflow::new(&runner, &config).run()?;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize run report"),
        }
    }

    if report.has_warnings() {
        tracing::warn!(
            warnings = report.warnings.len(),
            "update completed with warnings"
        );
    } else {
        tracing::info!(
            update_branch = %report.targets.update_branch,
            source_operation = %report.targets.source_operation,
            "update completed"
        );
    }

    Ok(())
}
