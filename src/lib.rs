// Library root
// -----------
// This crate exposes a small library surface for the Pokedex CLI. The
// binary (`main.rs`) uses these modules to implement the interactive
// shell.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the location-listing
//   endpoint and owns the response/cursor types.
// - `commands`: The fixed name -> description/action registry the shell
//   dispatches against.
// - `repl`: Input normalization, command dispatch and the blocking
//   read/execute/print loop.
//
// Keeping this separation makes it easier to test dispatch and paging
// against a stub server without a terminal attached.
pub mod api;
pub mod commands;
pub mod repl;
