use crate::runner::{CommandResult, CommandRunner};
use std::cell::RefCell;

/// Scripted runner: answers by command prefix and records every call.
///
/// Responses are matched in registration order; unmatched commands fail with
/// an "unexpected command" message so a test sees the stray call.
#[derive(Default)]
pub(crate) struct FakeRunner {
    responses: Vec<(String, CommandResult)>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(mut self, prefix: &str, output: &str) -> Self {
        self.responses
            .push((prefix.to_string(), CommandResult::ok(output)));
        self
    }

    pub(crate) fn fail(mut self, prefix: &str, output: &str) -> Self {
        self.responses
            .push((prefix.to_string(), CommandResult::failed(output)));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Second word of every recorded command, e.g. `environment:info`.
    pub(crate) fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| {
                let args = shell_words::split(c).unwrap();
                match args.get(1).map(String::as_str) {
                    Some("environment:info") => format!("environment:info {}", args[2]),
                    Some(sub) => sub.to_string(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &str) -> CommandResult {
        self.calls.borrow_mut().push(command.to_string());
        self.responses
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| CommandResult::failed(format!("unexpected command: {}", command)))
    }
}
