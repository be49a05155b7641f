//! Line-oriented text front end.
//!
//! One command per line on stdin, one response on stdout. Both colors are
//! played from the same terminal, so `move` defaults to the side on turn.

use std::io::{self, BufRead, Write};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::cli_config::CliConfig;
use crate::errors::RevealResult;
use crate::game_interface::{moves_from, try_apply_move, view_state};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::Game;
use crate::move_generation::legal_move_apply::MoveOutcome;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::{
    describe_king_safety, render_move_targets, render_projection,
};

const HELP_TEXT: &str = "\
commands:
  new [seed]                     start a new game
  board                          draw the board
  state                          print the public state as JSON
  moves <square>                 legal destinations, e.g. `moves e2`
  move <from> <to> [white|black] play a move, e.g. `move e2 e4`
  help                           this text
  quit                           leave";

pub fn run_stdio_loop(config: &CliConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(config.seed);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct Session {
    game: Game,
}

impl Session {
    fn new(seed: Option<u64>) -> Self {
        Self {
            game: start_game(seed),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "new" => match args.first().map(|raw| raw.parse::<u64>()) {
                None => {
                    self.game = start_game(None);
                    writeln!(out, "ok new game")?;
                }
                Some(Ok(seed)) => {
                    self.game = start_game(Some(seed));
                    writeln!(out, "ok new game (seed {seed})")?;
                }
                Some(Err(_)) => writeln!(out, "rejected: invalid seed {}", args[0])?,
            },
            "board" => {
                writeln!(out, "{}", render_projection(&view_state(&self.game)))?;
                writeln!(out, "{}", describe_king_safety(&self.game))?;
            }
            "state" => match serde_json::to_string(&view_state(&self.game)) {
                Ok(json) => writeln!(out, "{json}")?,
                Err(err) => writeln!(out, "rejected: {err}")?,
            },
            "moves" => match args.as_slice() {
                [square] => match algebraic_to_square(square) {
                    Ok(from) => {
                        let targets = moves_from(&self.game, from);
                        writeln!(
                            out,
                            "{}",
                            render_move_targets(&view_state(&self.game), from, &targets)
                        )?;
                    }
                    Err(err) => writeln!(out, "rejected: {err}")?,
                },
                _ => writeln!(out, "rejected: usage `moves <square>`")?,
            },
            "move" => match self.handle_move(&args) {
                Ok(outcome) => writeln!(out, "ok {}", describe_outcome(&outcome))?,
                Err(reason) => writeln!(out, "rejected: {reason}")?,
            },
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            _ => writeln!(out, "rejected: unknown command `{cmd}` (try `help`)")?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, args: &[&str]) -> Result<MoveOutcome, String> {
        let (from, to, color) = match args {
            [from, to] => (*from, *to, None),
            [from, to, color] => (*from, *to, Some(*color)),
            _ => return Err("usage `move <from> <to> [white|black]`".to_owned()),
        };
        let as_color = match color {
            None => self.game.turn(),
            Some(raw) => parse_color(raw).ok_or_else(|| format!("unknown color {raw}"))?,
        };
        let squares: RevealResult<(Square, Square)> =
            algebraic_to_square(from).and_then(|from| Ok((from, algebraic_to_square(to)?)));
        let (from, to) = squares.map_err(|err| err.to_string())?;

        try_apply_move(&mut self.game, from, to, as_color).map_err(|err| err.to_string())
    }
}

fn start_game(seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => {
            info!("starting seeded game {seed}");
            Game::new_with_rng(&mut StdRng::seed_from_u64(seed))
        }
        None => Game::new(),
    }
}

fn parse_color(raw: &str) -> Option<Color> {
    match raw.to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::White),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}

fn describe_outcome(outcome: &MoveOutcome) -> String {
    let mut text = format!("{}{}", outcome.from, outcome.to);
    if let Some(true_type) = outcome.revealed {
        text.push_str(&format!(" revealed {}", true_type.name()));
    }
    if let Some(captured) = &outcome.captured {
        text.push_str(&format!(
            " captured {} {}",
            captured.color.name(),
            captured.piece_type.name()
        ));
    }
    text.push_str(&format!(
        ", {} to move, {}",
        outcome.turn.name(),
        outcome.status.name()
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::GameStatus;

    fn run(session: &mut Session, line: &str) -> (String, bool) {
        let mut out = Vec::new();
        let quit = session
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (String::from_utf8(out).expect("responses are UTF-8"), quit)
    }

    #[test]
    fn pawn_push_reveals_and_passes_the_turn() {
        let mut session = Session::new(Some(5));
        let (reply, quit) = run(&mut session, "move e2 e4");

        assert!(!quit);
        assert!(reply.starts_with("ok e2e4 revealed "), "{reply}");
        assert!(reply.trim_end().ends_with(", Black to move, IN_PROGRESS"), "{reply}");
        assert_eq!(session.game.turn(), Color::Black);
    }

    #[test]
    fn wrong_color_and_bad_squares_are_rejected() {
        let mut session = Session::new(Some(5));
        let before = session.game.clone();

        let (reply, _) = run(&mut session, "move e7 e5 black");
        assert_eq!(reply, "rejected: not your turn: White to move, Black attempted\n");

        let (reply, _) = run(&mut session, "move e2 e9");
        assert_eq!(reply, "rejected: invalid coordinate e9\n");

        let (reply, _) = run(&mut session, "move e2 e5");
        assert_eq!(reply, "rejected: illegal move e2 -> e5\n");

        assert_eq!(session.game, before);
    }

    #[test]
    fn moves_lists_destinations() {
        let mut session = Session::new(Some(9));
        let (reply, _) = run(&mut session, "moves e2");
        assert!(reply.trim_end().ends_with("e2: e3 e4"), "{reply}");

        let (reply, _) = run(&mut session, "moves e7");
        assert!(reply.trim_end().ends_with("e7: no moves"), "{reply}");
    }

    #[test]
    fn state_is_json() {
        let mut session = Session::new(Some(1));
        let (reply, _) = run(&mut session, "state");
        let value: serde_json::Value = serde_json::from_str(reply.trim()).expect("valid JSON");

        assert_eq!(value["turn"], "WHITE");
        assert_eq!(value["status"], "IN_PROGRESS");
        assert_eq!(value["pieces"].as_array().map(Vec::len), Some(32));
    }

    #[test]
    fn new_game_with_seed_is_reproducible() {
        let mut session = Session::new(None);
        let (reply, _) = run(&mut session, "new 77");
        assert_eq!(reply, "ok new game (seed 77)\n");
        assert_eq!(session.game, Session::new(Some(77)).game);
        assert_eq!(session.game.status(), GameStatus::InProgress);

        let (reply, _) = run(&mut session, "new abc");
        assert_eq!(reply, "rejected: invalid seed abc\n");
    }

    #[test]
    fn quit_and_unknown_commands() {
        let mut session = Session::new(Some(1));
        assert_eq!(run(&mut session, "   ").0, "");
        assert!(run(&mut session, "castle").0.starts_with("rejected: unknown command"));
        assert!(run(&mut session, "quit").1);
    }
}
