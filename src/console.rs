//! Console command surface
//!
//! A background thread reads line commands from stdin and hands them to the
//! simulation thread over a channel; the simulation drains the receiver on
//! its own schedule and stays the only mutator of shared state. Commands:
//! `help`, `ambience <value>`, `quit`.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::warn;

/// One parsed console command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Help,
    /// Set the ambient light intensity, clamped to [0, 1].
    Ambience(f32),
    Quit,
}

const HELP_TEXT: &str = "commands:\n  help             show this text\n  ambience <0..1>  set ambient light intensity\n  quit             exit";

/// Parses one input line into a command.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let mut tokens = line.split_whitespace();
    match tokens.next()? {
        "help" => Some(ConsoleCommand::Help),
        "quit" => Some(ConsoleCommand::Quit),
        "ambience" => {
            let value: f32 = tokens.next()?.parse().ok()?;
            if !(0.0..=1.0).contains(&value) {
                warn!("ambience {} out of range, clamping to [0, 1]", value);
            }
            Some(ConsoleCommand::Ambience(value.clamp(0.0, 1.0)))
        }
        _ => None,
    }
}

/// Spawns the console reader thread.
///
/// The thread parses stdin line by line and sends each command over the
/// returned channel; unrecognized input prints the help text locally. It
/// exits after `quit`, on stdin EOF, or once the receiver is dropped.
pub fn spawn_console() -> Receiver<ConsoleCommand> {
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                match parse_command(&line) {
                    Some(ConsoleCommand::Help) => println!("{}", HELP_TEXT),
                    Some(command) => {
                        let quitting = command == ConsoleCommand::Quit;
                        if sender.send(command).is_err() || quitting {
                            break;
                        }
                    }
                    None => {
                        if !line.trim().is_empty() {
                            println!("unrecognized command\n{}", HELP_TEXT);
                        }
                    }
                }
            }
        })
        .expect("failed to spawn console thread");

    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help_and_quit() {
        assert_eq!(parse_command("help"), Some(ConsoleCommand::Help));
        assert_eq!(parse_command("  quit  "), Some(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_ambience() {
        assert_eq!(
            parse_command("ambience 0.5"),
            Some(ConsoleCommand::Ambience(0.5))
        );
    }

    #[test]
    fn test_ambience_clamped() {
        assert_eq!(
            parse_command("ambience 1.7"),
            Some(ConsoleCommand::Ambience(1.0))
        );
        assert_eq!(
            parse_command("ambience -3"),
            Some(ConsoleCommand::Ambience(0.0))
        );
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command("ambience"), None);
        assert_eq!(parse_command("ambience bright"), None);
    }
}
