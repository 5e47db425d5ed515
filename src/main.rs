// Entrypoint for the Pokedex CLI.
// - Keeps `main` small: create an API client, the command registry, and
//   hand both to the REPL loop.
// - Returns `anyhow::Result` to simplify error handling.

use std::io;

use pokedex_cli::api::ApiClient;
use pokedex_cli::commands::CommandRegistry;
use pokedex_cli::repl::{self, Repl};

fn main() -> anyhow::Result<()> {
    // Debug logging is off by default; RUST_LOG=debug shows each outgoing
    // request and cursor update.
    env_logger::init();

    // Create API client configured by environment variable
    // `POKEAPI_LOCATIONS_URL` or default to the public PokeAPI endpoint.
    let api = ApiClient::from_env()?;
    let registry = CommandRegistry::with_builtins();
    let mut repl = Repl::new(registry, api);

    // Start the interactive shell. This call blocks until the user exits.
    repl::run(&mut repl, io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}
