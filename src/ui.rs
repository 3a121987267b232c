// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::{ApiClient, ApiResponse};
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// simple select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(api: ApiClient) -> Result<()> {
    banner(&api);
    loop {
        let items = vec![
            "Create (add) a new record",
            "Read all records",
            "Update an existing record",
            "Delete a record",
            "Exit",
        ];
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&items)
            .default(0)
            .interact()?;
        match selection {
            0 => handle_create(&api)?,
            1 => handle_read(&api)?,
            2 => handle_update(&api)?,
            3 => handle_delete(&api)?,
            4 => break,
            _ => {}
        }
        println!();
    }
    Ok(())
}

fn banner(api: &ApiClient) {
    println!("--- Supabase CRUD Manager ---");
    println!("Target: {}/rest/v1", api.base_url());
}

/// Collect the text for a new record and POST it.
fn handle_create(api: &ApiClient) -> Result<()> {
    let text: String = Input::new()
        .with_prompt("Enter the text for the new record")
        .interact_text()?;
    let spinner = start_spinner("Sending CREATE request...");
    let outcome = api.create(&text);
    spinner.finish_and_clear();
    report(outcome);
    Ok(())
}

fn handle_read(api: &ApiClient) -> Result<()> {
    let spinner = start_spinner("Sending READ request...");
    let outcome = api.read_all();
    spinner.finish_and_clear();
    report(outcome);
    Ok(())
}

/// Ask which row to change and what its new text should be, then PATCH.
/// The typed `Input` re-prompts until the id parses as a number.
fn handle_update(api: &ApiClient) -> Result<()> {
    let id: i64 = Input::new()
        .with_prompt("Enter the ID of the record to update")
        .interact_text()?;
    let text: String = Input::new().with_prompt("Enter the new text").interact_text()?;
    let spinner = start_spinner("Sending UPDATE request...");
    let outcome = api.update(id, &text);
    spinner.finish_and_clear();
    report(outcome);
    Ok(())
}

fn handle_delete(api: &ApiClient) -> Result<()> {
    let id: i64 = Input::new()
        .with_prompt("Enter the ID of the record to delete")
        .interact_text()?;
    let spinner = start_spinner("Sending DELETE request...");
    let outcome = api.delete(id);
    spinner.finish_and_clear();
    report(outcome);
    Ok(())
}

/// Print the outcome of one request. Successful statuses go to stdout,
/// everything else to stderr, and a transport failure is reported the
/// same way a bad status is: the menu keeps running either way.
fn report(outcome: Result<ApiResponse>) {
    match outcome {
        Ok(res) if res.is_success() => {
            println!("{} Status code: {}", "Success!".green(), res.status);
            if !res.body.is_empty() {
                println!("Response body:\n{}", pretty(&res.body));
            }
        }
        Ok(res) => {
            eprintln!("{} Status code: {}", "Error!".red(), res.status);
            if !res.body.is_empty() {
                eprintln!("Response body:\n{}", pretty(&res.body));
            }
        }
        Err(err) => eprintln!("{} {:#}", "Request failed:".red(), err),
    }
}

/// Indicatif spinner shown while the blocking request is in flight.
fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Re-indent a JSON body for readability; non-JSON bodies pass through.
fn pretty(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
