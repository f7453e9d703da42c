//! Interactive console front-end: menus, move input and round flow.

mod render;

use std::io::{self, Write as _};

use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::db::ScoreRepository;
use crate::game::{BOARD_SIZE, GameMode, GameStatus, WIN_LENGTH};
use crate::players::Player;
use crate::service::GameService;
use crate::store::{SaveFile, SavedGame};

/// Points awarded to a winning human seat.
const WIN_POINTS: i32 = 10;
/// Points awarded to each human seat on a draw.
const DRAW_POINTS: i32 = 5;
/// Number of entries shown on the leaderboard.
const LEADERBOARD_SIZE: i64 = 5;

/// Drives the game from stdin/stdout. Owns the autosave location and the
/// score store; rounds are created per game from the menu.
pub struct GameController {
    save_file: SaveFile,
    scores: ScoreRepository,
}

impl GameController {
    /// Creates a controller over the given stores.
    pub fn new(save_file: SaveFile, scores: ScoreRepository) -> Self {
        Self { save_file, scores }
    }

    /// Runs the main menu until the player quits.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<()> {
        println!("Welcome to five-in-a-row!");
        println!("Place {WIN_LENGTH} marks in a row on the {BOARD_SIZE}x{BOARD_SIZE} board to win.");
        if !self.scores.is_available() {
            println!("Warning: the score database is unreachable; the leaderboard is disabled.");
        }

        loop {
            println!("\n========= Main menu =========");
            println!("1. New game");
            println!("2. Load game from file");
            println!("3. Resume saved game");
            println!("4. Leaderboard");
            println!("5. Quit");
            println!("=============================");
            let choice = self.prompt("Choose an option: ")?;

            match choice.as_str() {
                "1" => self.start_new_game()?,
                "2" => self.load_from_file()?,
                "3" => self.resume_autosave()?,
                "4" => self.show_leaderboard()?,
                "5" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                _ => println!("Invalid choice, pick 1-5."),
            }
        }
    }

    fn start_new_game(&self) -> Result<()> {
        let Some(mode) = self.select_mode()? else {
            return Ok(());
        };
        let mut service = GameService::new(mode);
        self.read_player_names(&mut service)?;
        self.run_rounds(&mut service)
    }

    /// Mode selection, with `back` returning to the main menu.
    fn select_mode(&self) -> Result<Option<GameMode>> {
        loop {
            println!("\nChoose a mode:");
            println!("1. {}", GameMode::HumanVsHuman);
            println!("2. {}", GameMode::HumanVsComputer);
            let input = self.prompt("Pick 1, 2 or type `back`: ")?;
            match input.to_lowercase().as_str() {
                "1" => return Ok(Some(GameMode::HumanVsHuman)),
                "2" => return Ok(Some(GameMode::HumanVsComputer)),
                "back" => return Ok(None),
                _ => println!("Invalid choice."),
            }
        }
    }

    /// Prompts for seat names; blank input keeps the defaults.
    fn read_player_names(&self, service: &mut GameService) -> Result<()> {
        match service.mode() {
            GameMode::HumanVsHuman => {
                let name = self.prompt("First player's name: ")?;
                service.player_one_mut().set_name(&name);
                let name = self.prompt("Second player's name: ")?;
                service.player_two_mut().set_name(&name);
            }
            GameMode::HumanVsComputer => {
                let name = self.prompt("Your name: ")?;
                service.player_one_mut().set_name(&name);
            }
        }
        info!(
            player_one = %service.player_one().name(),
            player_two = %service.player_two().name(),
            mode = %service.mode(),
            "seats ready"
        );
        Ok(())
    }

    /// Plays rounds on `service` until the player stops; scores carry across
    /// rounds.
    fn run_rounds(&self, service: &mut GameService) -> Result<()> {
        loop {
            if !self.play_until_settled(service)? {
                return Ok(());
            }
            self.handle_round_end(service);
            if !self.ask_yes_no("Play another round? (y/n): ")? {
                println!("Thanks for playing!");
                return Ok(());
            }
            service.reset_round();
        }
    }

    /// Runs one round to a terminal status. Returns false when the player
    /// quits mid-round instead of finishing it.
    fn play_until_settled(&self, service: &mut GameService) -> Result<bool> {
        loop {
            println!("{}", render::render_round(service));
            if service.status().is_terminal() {
                return Ok(true);
            }

            let prompt = format!(
                "{} ({}): enter `row col`, [s]ave or [q]uit: ",
                service.current_player().name(),
                service.current_player().symbol()
            );
            let input = self.prompt(&prompt)?.to_lowercase();

            match input.as_str() {
                "" => println!("Please enter a move or an option."),
                "s" | "save" => self.save_round(service),
                "q" | "quit" => {
                    self.offer_save(service)?;
                    return Ok(false);
                }
                _ => self.process_move(service, &input),
            }
        }
    }

    /// Parses a 1-based `row col` pair and submits it to the engine.
    fn process_move(&self, service: &mut GameService, input: &str) {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() != 2 {
            println!("Enter exactly two numbers separated by a space, e.g. `3 5`.");
            return;
        }
        let (Ok(row), Ok(col)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) else {
            println!("Only numbers between 1 and {BOARD_SIZE} are accepted.");
            return;
        };
        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
            println!("Out of range: rows and columns run from 1 to {BOARD_SIZE}.");
            return;
        }
        if !service.submit_move(row - 1, col - 1) {
            println!("Illegal move: that cell is already taken.");
        }
    }

    /// Announces the result and awards points: 10 to a winning human, 5 to
    /// each human on a draw. Awards are also recorded to the score store.
    fn handle_round_end(&self, service: &mut GameService) {
        println!("\n=== Round over ===");
        match service.status() {
            GameStatus::Won(symbol) => {
                let seat_one_won = service.player_one().symbol() == symbol;
                let winner = if seat_one_won {
                    service.player_one()
                } else {
                    service.player_two()
                };
                if winner.is_human() {
                    println!("Victory! {} wins!", winner.name());
                    let winner = if seat_one_won {
                        service.player_one_mut()
                    } else {
                        service.player_two_mut()
                    };
                    self.award(winner, WIN_POINTS);
                } else {
                    println!("Defeat! {} wins!", winner.name());
                }
            }
            GameStatus::Draw => {
                println!("It's a draw!");
                if service.player_one().is_human() {
                    self.award(service.player_one_mut(), DRAW_POINTS);
                }
                if service.player_two().is_human() {
                    self.award(service.player_two_mut(), DRAW_POINTS);
                }
            }
            GameStatus::InProgress => println!("Round abandoned."),
        }
    }

    fn award(&self, player: &mut Player, points: i32) {
        player.add_score(points);
        if let Err(e) = self.scores.save_score(player.name(), points) {
            warn!(error = %e, player = %player.name(), "failed to record score");
            println!("(score could not be recorded: {e})");
        }
        println!("{}'s total score: {}", player.name(), player.score());
    }

    fn save_round(&self, service: &GameService) {
        let snapshot = SavedGame::capture(service);
        match self.save_file.save(&snapshot) {
            Ok(()) => println!("Game saved to {}.", self.save_file.path().display()),
            Err(e) => {
                warn!(error = %e, "saving failed");
                println!("Could not save the game: {e}");
            }
        }
    }

    fn offer_save(&self, service: &GameService) -> Result<()> {
        if self.ask_yes_no("Save the game before quitting? (y/n): ")? {
            self.save_round(service);
        } else {
            println!("Quitting without saving.");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn resume_autosave(&self) -> Result<()> {
        if !self.save_file.exists() {
            println!("No saved game found.");
            return Ok(());
        }
        match self.save_file.load() {
            Ok(snapshot) => self.resume_snapshot(snapshot),
            Err(e) => {
                warn!(error = %e, "autosave could not be loaded");
                println!("Could not load the saved game: {e}");
                Ok(())
            }
        }
    }

    /// Prompts for a save-file path and resumes it; `back` cancels.
    fn load_from_file(&self) -> Result<()> {
        loop {
            let input = self.prompt("\nPath of the save to load (or `back`): ")?;
            if input.eq_ignore_ascii_case("back") {
                return Ok(());
            }
            if input.is_empty() {
                println!("The file name cannot be empty.");
                continue;
            }
            match SaveFile::new(&input).load() {
                Ok(snapshot) => return self.resume_snapshot(snapshot),
                Err(e) => {
                    println!("Could not load `{input}`: {e}");
                    println!("Try another file, or type `back` for the menu.");
                }
            }
        }
    }

    fn resume_snapshot(&self, snapshot: SavedGame) -> Result<()> {
        let mut service = snapshot.restore();
        println!(
            "Loaded {}'s game from {} ({}).",
            service.player_one().name(),
            snapshot.saved_at().format("%Y-%m-%d %H:%M"),
            service.mode()
        );
        if service.status().is_terminal() {
            println!("That round already finished: {}.", service.status());
            return Ok(());
        }
        // A restored round may leave the computer to move first.
        if !service.current_player().is_human() {
            service.play_computer_turn();
        }
        self.run_rounds(&mut service)
    }

    #[instrument(skip(self))]
    fn show_leaderboard(&self) -> Result<()> {
        println!("\n======= Leaderboard =======");
        if !self.scores.is_available() {
            println!("The score database is unreachable; check the --db-path setting.");
            return Ok(());
        }
        match self.scores.top_players(LEADERBOARD_SIZE) {
            Ok(ranked) if ranked.is_empty() => {
                println!("No scores recorded yet. Win a round to get on the board!");
            }
            Ok(ranked) => {
                for (rank, entry) in ranked.iter().enumerate() {
                    println!(
                        "{}. {} - {} points",
                        rank + 1,
                        entry.player(),
                        entry.total_score()
                    );
                }
            }
            Err(e) => {
                warn!(error = %e, "leaderboard query failed");
                println!("Could not load the leaderboard: {e}");
            }
        }
        println!("===========================");
        Ok(())
    }

    fn prompt(&self, text: &str) -> io::Result<String> {
        print!("{text}");
        io::stdout().flush()?;
        self.read_line()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut buf = String::new();
        let read = io::stdin().read_line(&mut buf)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(buf.trim().to_string())
    }

    fn ask_yes_no(&self, text: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt(text)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer `y` or `n`."),
            }
        }
    }
}
