//! Interactive prompt for connectus
//!
//! Uses inquire for line input; every line goes through the session.

use anyhow::{anyhow, Result};
use inquire::{InquireError, Text};
use std::io::{self, IsTerminal};

use super::display::print_person_list;
use super::session::{Session, SessionError};
use super::ui::{clear_screen, error, minimal_render_config, status, warning};
use crate::db::ModelEvent;

const PROMPT: &str = "connectus>";

/// What the loop does after a line has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive prompt until `exit`, Esc or Ctrl-C.
pub fn run_menu(session: &mut Session) -> Result<()> {
    // TTY check: the prompt requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive mode requires a terminal. Pass a command to run it once:\n  \
            connectus list\n  \
            connectus add name=John Doe phone=98765432\n  \
            Run 'connectus --help' for all options."
        ));
    }

    session.model_mut().subscribe(Box::new(log_event));

    let _ = clear_screen();
    status("Welcome to ConnectUS. Type `help` to see all commands.\n");
    print_person_list(session.model());

    loop {
        println!();
        let line = Text::new(PROMPT)
            .with_render_config(minimal_render_config())
            .prompt_skippable();

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }

        if run_line(session, &line) == Flow::Quit {
            break;
        }
    }

    if let Err(e) = session.flush() {
        warning(&format!("Changes could not be saved: {}", e));
    }
    Ok(())
}

/// Execute one line and print its outcome.
fn run_line(session: &mut Session, line: &str) -> Flow {
    match session.execute(line) {
        Ok(result) => {
            status(&result.feedback);
            if result.exit {
                return Flow::Quit;
            }
            if !result.show_help {
                println!();
                print_person_list(session.model());
            }
            Flow::Continue
        }
        Err(SessionError::Storage(e)) => {
            error(&format!("Change applied but not saved: {}", e));
            Flow::Continue
        }
        Err(e) => {
            error(&e.to_string());
            Flow::Continue
        }
    }
}

fn log_event(event: &ModelEvent) {
    match event {
        ModelEvent::PersonAdded(person) => log::trace!("added {}", person.name),
        ModelEvent::PersonReplaced { old, new } => {
            log::trace!("replaced {} with {}", old.name, new.name)
        }
        ModelEvent::PersonRemoved(person) => log::trace!("removed {}", person.name),
        ModelEvent::Cleared => log::trace!("cleared"),
        ModelEvent::FilterChanged => log::trace!("filter changed"),
    }
}
