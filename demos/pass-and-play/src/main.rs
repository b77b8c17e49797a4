//! Pass-and-play terminal driver for the Spyfall session.
//!
//! This is the stand-in for the real UI collaborators: it reads one
//! command per line, drives the session, and prints what a screen would
//! render. Run with `RUST_LOG=debug` to watch the session's tracing.

use std::io::{self, BufRead, Write};

use spyfall::prelude::*;

const HELP: &str = "\
commands:
  start <players>      deal a new game and begin the reveal
  board                show the possible locations
  questions            re-roll the discussion questions
  list                 show available and played locations
  add <name>: <role>, <role>, ...
  remove <name>        take a location out of play
  restore <name>       bring a played location back
  reset                restore the full catalog
  spymode <on|off>     toggle everyone-is-spy mode
  burn <on|off>        toggle remove-location-after-play
  new                  back to the lobby (keeps pool and settings)
  quit";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut session = GameSession::new(GameConfig::default());
    let stdin = io::stdin();
    let mut out = io::stdout();

    println!("spyfall: pass-and-play. {HELP}");

    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "start" => match rest.trim().parse::<usize>() {
                Ok(players) => match session.start_game(players).map(|_| ()) {
                    Ok(()) => run_reveal(&mut session, &stdin)?,
                    Err(GameError::PoolExhausted(_)) => {
                        println!("every location has been played; `reset` or `add` one")
                    }
                    Err(err) => println!("{err}"),
                },
                Err(_) => println!("enter a number of players, e.g. `start 5`"),
            },
            "board" => match session.locations_text() {
                Some(board) => println!("{board}"),
                None => println!("no game running; `start <players>` first"),
            },
            "questions" => {
                for question in session.new_questions() {
                    println!("{question}");
                }
            }
            "list" => {
                println!("available: {}", session.available_names().join(", "));
                println!("played:    {}", session.played_names().join(", "));
            }
            "add" => match parse_add(rest) {
                Some((name, roles)) => {
                    if session.add_location(&name, &roles) {
                        println!("added {name}");
                    } else {
                        println!("could not add {name:?}: empty or already known");
                    }
                }
                None => println!("usage: add <name>: <role>, <role>, ..."),
            },
            "remove" => session.remove_location(rest.trim()),
            "restore" => session.restore_location(rest.trim()),
            "reset" => session.reset_pool(),
            "spymode" => match parse_toggle(rest) {
                Some(enabled) => session.set_everyone_spy(enabled),
                None => println!("usage: spymode on|off"),
            },
            "burn" => match parse_toggle(rest) {
                Some(enabled) => session.set_remove_after_play(enabled),
                None => println!("usage: burn on|off"),
            },
            "new" => session.new_game(),
            "quit" | "exit" => break,
            other => println!("unknown command {other:?}, try `help`"),
        }
    }

    Ok(())
}

/// Walks the pass-the-device reveal: show a hand, wait for Enter, repeat.
fn run_reveal(session: &mut GameSession, stdin: &io::Stdin) -> io::Result<()> {
    loop {
        let number = session.current_player_number();
        println!("\nPlayer {number}: press Enter when you are alone with the screen");
        wait_for_enter(stdin)?;

        if let Some(player) = session.current_player() {
            if player.is_spy() {
                println!("You are the SPY. Figure out where everyone is.");
            } else {
                println!("Location: {}", player.location);
                println!("Role:     {}", player.role);
            }
        }
        println!("Press Enter to hide this and pass the device on.");
        wait_for_enter(stdin)?;
        print!("{}", "\n".repeat(40)); // push the secret off-screen

        match session.advance_player() {
            RevealOutcome::NextPlayer(_) => continue,
            RevealOutcome::Complete => break,
        }
    }

    println!("Everyone is in. Possible locations:\n");
    if let Some(board) = session.locations_text() {
        println!("{board}");
    }
    println!("\nIce breakers:");
    for question in session.helper_questions() {
        println!("{question}");
    }
    Ok(())
}

fn wait_for_enter(stdin: &io::Stdin) -> io::Result<()> {
    let mut discard = String::new();
    stdin.lock().read_line(&mut discard)?;
    Ok(())
}

/// Parses `"<name>: <role>, <role>, ..."` into a name and its roles.
fn parse_add(input: &str) -> Option<(String, Vec<String>)> {
    let (name, roles) = input.split_once(':')?;
    let name = name.trim();
    let roles: Vec<String> = roles
        .split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();
    if name.is_empty() || roles.is_empty() {
        return None;
    }
    Some((name.to_string(), roles))
}

fn parse_toggle(input: &str) -> Option<bool> {
    match input.trim() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_splits_name_and_roles() {
        let (name, roles) = parse_add("Moon Base: Commander, Pilot").unwrap();
        assert_eq!(name, "Moon Base");
        assert_eq!(roles, vec!["Commander", "Pilot"]);
    }

    #[test]
    fn test_parse_add_rejects_malformed_input() {
        assert!(parse_add("no colon here").is_none());
        assert!(parse_add(" : Role").is_none());
        assert!(parse_add("Name: , ,").is_none());
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(parse_toggle(" on "), Some(true));
        assert_eq!(parse_toggle("off"), Some(false));
        assert_eq!(parse_toggle("maybe"), None);
    }
}
