// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `config`: Loads the Supabase URL and API key from a local
//   properties file and refuses to start without both.
// - `api`: Encapsulates the PostgREST HTTP interactions (create, read,
//   update, delete) against the managed table.
// - `ui`: Implements the terminal menu and delegates requests to `api`.
//
// Keeping this separation makes it easier to test the API logic or
// replace the UI in the future (for example, adding a TUI or GUI).
pub mod api;
pub mod config;
pub mod ui;
