//! Stdin command surface. Each line becomes at most one message for the
//! pump; the projection rules live in `deck_core`, this is only wiring.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use deck_core::{CardValue, Msg, NAME_LIMIT};
use deck_logging::deck_warn;

#[derive(Debug, PartialEq)]
enum Command {
    Msg(Msg),
    Quit,
}

/// Spawns the stdin reader. EOF or a `quit` line raises the quit flag.
pub fn spawn(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Some(Command::Quit) => break,
                Some(Command::Msg(msg)) => {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                None => deck_warn!("unrecognized input: {}", line.trim()),
            }
        }
        quit.store(true, Ordering::Relaxed);
    });
}

fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Command::Msg(Msg::NoOp));
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb {
        "name" => {
            let name: String = rest.chars().take(NAME_LIMIT).collect();
            Some(Command::Msg(Msg::RegisterSubmitted(name)))
        }
        "pick" => CardValue::parse(rest).map(|value| Command::Msg(Msg::CardChosen(value))),
        "reveal" => Some(Command::Msg(Msg::RevealClicked)),
        "clear" => Some(Command::Msg(Msg::ClearClicked)),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_parse_only_deck_tokens() {
        assert_eq!(
            parse_line("pick 13"),
            Some(Command::Msg(Msg::CardChosen(CardValue::Thirteen)))
        );
        assert_eq!(
            parse_line("pick ☕"),
            Some(Command::Msg(Msg::CardChosen(CardValue::Coffee)))
        );
        assert_eq!(parse_line("pick 4"), None);
    }

    #[test]
    fn names_are_capped_at_the_input_limit() {
        let long = format!("name {}", "x".repeat(NAME_LIMIT + 5));
        match parse_line(&long) {
            Some(Command::Msg(Msg::RegisterSubmitted(name))) => {
                assert_eq!(name.chars().count(), NAME_LIMIT);
            }
            other => panic!("unexpected parse {other:?}"),
        }
    }

    #[test]
    fn bare_verbs_and_quit() {
        assert_eq!(parse_line("reveal"), Some(Command::Msg(Msg::RevealClicked)));
        assert_eq!(parse_line("clear"), Some(Command::Msg(Msg::ClearClicked)));
        assert_eq!(parse_line("quit"), Some(Command::Quit));
        assert_eq!(parse_line("  "), Some(Command::Msg(Msg::NoOp)));
        assert_eq!(parse_line("wave"), None);
    }
}
