// Command registry module: a fixed mapping from command name to its
// description and action, built once at startup. Dispatch is a tagged
// enum rather than callback fields so the REPL can match on it directly
// and handlers stay ordinary methods.

/// What a command does when invoked. The REPL interprets these; the
/// registry only stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Print a farewell and terminate the shell.
    Exit,
    /// Print every registered command with its description.
    Help,
    /// Fetch and print the next page of locations.
    MapForward,
    /// Fetch and print the previous page of locations.
    MapBack,
}

/// The registered record for one command: its name as typed by the user
/// (already lowercase), a one-line description for help text, and its
/// action.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

/// Registry of all commands the shell understands. Populated once at
/// startup and read-only afterwards; lookup is case-sensitive on the
/// normalized (lowercase) token.
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Registry pre-loaded with the built-in commands, in the order help
    /// text should list them.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("help", "Displays a help message", CommandAction::Help);
        registry.register("map", "Lists the next page of location areas", CommandAction::MapForward);
        registry.register("mapb", "Lists the previous page of location areas", CommandAction::MapBack);
        registry.register("exit", "Exit the Pokedex", CommandAction::Exit);
        registry
    }

    /// Add a command. Registering the same name twice is a programming
    /// error, caught in debug builds.
    pub fn register(&mut self, name: &'static str, description: &'static str, action: CommandAction) {
        debug_assert!(
            self.lookup(name).is_none(),
            "duplicate command name: {name}"
        );
        self.commands.push(Command {
            name,
            description,
            action,
        });
    }

    /// Find a command by its exact name. `None` means unknown command,
    /// which callers report to the user and carry on.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// All commands in registration order, for help text.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
