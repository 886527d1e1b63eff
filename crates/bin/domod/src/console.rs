//! Interactive console: a thin line protocol over the controller.
//!
//! Every verb maps onto one controller operation; nothing here holds state
//! beyond parsing and rendering.

use std::io::{BufRead, Write};

use domo_app::controller::HomeController;
use domo_domain::command::Command;

const HELP: &str = "\
commands:
  status           show every device and the away state
  toggle <device>  flip one device
  on <device>      force one device on
  off <device>     force one device off
  away             flip away mode
  undo             undo the most recent command
  help             show this list
  quit             leave the console";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip one device.
    Toggle(String),
    /// Force one device on.
    TurnOn(String),
    /// Force one device off.
    TurnOff(String),
    /// Flip away mode.
    Away,
    /// Undo the most recent command.
    Undo,
    /// Render the device table.
    Status,
    /// Render the verb list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Parse one input line. Device names may contain spaces: everything after
/// the verb belongs to the name.
///
/// Blank lines parse to `None`.
///
/// # Errors
///
/// Returns a short user-facing message for unknown or incomplete input.
pub fn parse(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let action = match (verb, rest) {
        ("toggle", name) if !name.is_empty() => Action::Toggle(name.to_string()),
        ("on", name) if !name.is_empty() => Action::TurnOn(name.to_string()),
        ("off", name) if !name.is_empty() => Action::TurnOff(name.to_string()),
        ("toggle" | "on" | "off", _) => return Err(format!("usage: {verb} <device>")),
        ("away", "") => Action::Away,
        ("undo", "") => Action::Undo,
        ("status", "") => Action::Status,
        ("help", "") => Action::Help,
        ("quit" | "exit", "") => Action::Quit,
        _ => return Err(format!("unknown command: {line} (try `help`)")),
    };
    Ok(Some(action))
}

/// Drive the console until `quit` or end of input.
///
/// # Errors
///
/// Returns any IO error from the reader or writer.
pub fn run<R, W>(
    controller: &mut HomeController,
    mut input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "domo console, type `help` for commands")?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match parse(&line) {
            Ok(Some(Action::Quit)) => {
                writeln!(output, "bye")?;
                break;
            }
            Ok(Some(action)) => writeln!(output, "{}", apply(action, controller))?,
            Ok(None) => {}
            Err(message) => writeln!(output, "{message}")?,
        }
    }
    Ok(())
}

/// Execute one action against the controller and render the outcome.
fn apply(action: Action, controller: &mut HomeController) -> String {
    match action {
        Action::Toggle(name) => run_device_command(controller, Command::toggle(&name), &name),
        Action::TurnOn(name) => run_device_command(controller, Command::turn_on(&name), &name),
        Action::TurnOff(name) => run_device_command(controller, Command::turn_off(&name), &name),
        Action::Away => match controller.toggle_away_mode() {
            Ok(true) => "away mode is now on".to_string(),
            Ok(false) => "away mode is now off".to_string(),
            Err(err) => err.to_string(),
        },
        Action::Undo => match controller.undo_last() {
            Ok(true) => "undid the most recent command".to_string(),
            Ok(false) => "nothing to undo".to_string(),
            Err(err) => err.to_string(),
        },
        Action::Status => render_status(controller),
        Action::Help => HELP.to_string(),
        Action::Quit => "bye".to_string(),
    }
}

fn run_device_command(controller: &mut HomeController, command: Command, name: &str) -> String {
    match controller.execute_command(command) {
        Ok(()) => match controller.device_snapshot().is_on(name) {
            Some(true) => format!("{name} is now on"),
            Some(false) => format!("{name} is now off"),
            None => format!("{name} is not a known device"),
        },
        Err(err) => err.to_string(),
    }
}

fn render_status(controller: &HomeController) -> String {
    let snapshot = controller.device_snapshot();
    let mut lines: Vec<String> = snapshot
        .devices()
        .iter()
        .map(|device| {
            let state = if device.on { "on" } else { "off" };
            format!("{}: {state}", device.name)
        })
        .collect();
    lines.push(format!(
        "away mode: {}",
        if controller.is_away() { "on" } else { "off" }
    ));
    lines.push(format!("undoable commands: {}", controller.history_len()));
    lines.join("\n")
}
