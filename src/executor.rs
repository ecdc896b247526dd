//! Command execution behind the gateway.
//!
//! The gateway treats the executor as opaque: it passes one verified command
//! in and forwards the outcome untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::{ExecCap, Verified};

/// Outcome of running a command: a success payload or a failure message.
pub type ExecutionOutcome = Result<String, String>;

/// Runs console commands.
///
/// Every call takes an [`ExecCap`], which only an authorized manager context
/// can produce, next to the `Verified` command text. Implementations that
/// are not safe to call from several requests at once should be wrapped in
/// [`SerializedExecutor`].
pub trait CommandExecutor: Send + Sync {
    /// Executes `command` and reports its outcome.
    ///
    /// A failed command is a normal outcome, not an error of the gateway.
    fn execute(&self, cap: ExecCap, command: &Verified<String>) -> ExecutionOutcome;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Arc<T> {
    fn execute(&self, cap: ExecCap, command: &Verified<String>) -> ExecutionOutcome {
        (**self).execute(cap, command)
    }
}

/// Serializes calls into an executor that is not reentrant.
///
/// Concurrent requests queue on a mutex; a poisoned lock is reported as a
/// failed outcome instead of a panic.
#[derive(Debug)]
pub struct SerializedExecutor<E> {
    inner: Mutex<E>,
}

impl<E> SerializedExecutor<E> {
    /// Wraps `executor`.
    pub fn new(executor: E) -> Self {
        Self {
            inner: Mutex::new(executor),
        }
    }
}

impl<E: CommandExecutor> CommandExecutor for SerializedExecutor<E> {
    fn execute(&self, cap: ExecCap, command: &Verified<String>) -> ExecutionOutcome {
        let guard = self
            .inner
            .lock()
            .map_err(|_| "Console is unavailable".to_string())?;
        guard.execute(cap, command)
    }
}

type Handler = Box<dyn Fn(&[&str]) -> ExecutionOutcome + Send + Sync>;

struct RegisteredCommand {
    description: String,
    handler: Handler,
}

/// A small console that dispatches on the first word of the command.
///
/// `help` is always available and lists the registered commands.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::CommandRegistry;
///
/// let console = CommandRegistry::new()
///     .register("version", "Display current version", |_| Ok("1.0.0".to_string()));
///
/// assert_eq!(console.dispatch("version"), Ok("1.0.0".to_string()));
/// assert!(console.dispatch("help").unwrap().starts_with("Available commands:"));
/// assert_eq!(console.dispatch("nope"), Err("Unknown command nope".to_string()));
/// ```
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, RegisteredCommand>,
}

impl CommandRegistry {
    /// Creates a console with only the built-in `help` command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command. Arguments (the words after the name) are passed
    /// to `handler`. Registering `help` replaces the built-in listing.
    pub fn register<F>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(&[&str]) -> ExecutionOutcome + Send + Sync + 'static,
    {
        self.commands.insert(
            name.into(),
            RegisteredCommand {
                description: description.into(),
                handler: Box::new(handler),
            },
        );
        self
    }

    /// Runs a command line.
    pub fn dispatch(&self, line: &str) -> ExecutionOutcome {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err("Empty command".to_string());
        };
        let args: Vec<&str> = words.collect();

        match self.commands.get(name) {
            Some(command) => (command.handler)(&args),
            None if name == "help" => Ok(self.help()),
            None => Err(format!("Unknown command {name}")),
        }
    }

    fn help(&self) -> String {
        let mut out = String::from("Available commands:");
        out.push_str("\n  help - List available commands");
        for (name, command) in &self.commands {
            out.push_str(&format!("\n  {name} - {}", command.description));
        }
        out
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandExecutor for CommandRegistry {
    fn execute(&self, _cap: ExecCap, command: &Verified<String>) -> ExecutionOutcome {
        self.dispatch(command.as_str())
    }
}
