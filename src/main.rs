// Entrypoint for the CLI application.
// - Keeps `main` small: load config, create an API client and hand it
//   to the UI loop.
// - A config failure propagates out of `main` before the menu starts,
//   so the process exits non-zero with the error on stderr.

use supacrud::{api::ApiClient, config::Config, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let api = ApiClient::new(&config)?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
