//! `knight-game`: find knight paths from the terminal.
//!
//! Run: cargo run -- menu --board-size 8 --moves 3
//!      cargo run -- find a1 c2
//!      cargo run -- load

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use knight_core::{Board, Cell, parse_square, square_name};
use knight_game_lib::{
    FindRequest, Game, GameConfig, GameError, JsonPreferences, JsonSolutions, SearchTask,
    messages, solutions_or_message,
};
use tracing_subscriber::EnvFilter;

type FileGame = Game<JsonPreferences, JsonSolutions>;

fn cli() -> Command {
    Command::new("knight-game")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find every knight path of an exact length between two squares")
        .subcommand_required(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("State directory (default: $KNIGHT_GAME_HOME or ./.knight-game)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output; repeat for more"),
        )
        .subcommand(
            Command::new("menu")
                .about("Set the board size and move count")
                .arg(
                    Arg::new("board-size")
                        .long("board-size")
                        .required(true)
                        .help("Board size, 6 to 16"),
                )
                .arg(
                    Arg::new("moves")
                        .long("moves")
                        .required(true)
                        .help("Exact number of knight moves"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Find paths between two squares, e.g. `find a1 c2`")
                .arg(Arg::new("from").required(true).help("Source square"))
                .arg(Arg::new("to").required(true).help("Destination square")),
        )
        .subcommand(Command::new("load").about("Show the last solved game"))
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_game(config: &GameConfig) -> Result<FileGame, GameError> {
    log::debug!("state directory {}", config.data_dir().display());
    Ok(Game::new(
        JsonPreferences::open(config.preferences_path())?,
        JsonSolutions::open(config.solutions_path())?,
    ))
}

fn run_menu(game: &mut FileGame, args: &ArgMatches) -> Result<(), GameError> {
    let board_size = args.get_one::<String>("board-size").map_or("", String::as_str);
    let moves = args.get_one::<String>("moves").map_or("", String::as_str);
    let validation = game.validate_menu_input(board_size, moves)?;
    if validation.has_error() {
        return Err(GameError::InvalidInput(validation.messages()));
    }
    println!("Board {board_size}x{board_size}, {moves} moves");
    Ok(())
}

fn run_find(game: &mut FileGame, args: &ArgMatches) -> Result<(), GameError> {
    let size = game.preferences().preferred_board_size();
    let board = Board::new(size).ok_or(knight_paths::FindError::InvalidBoardSize(size))?;
    let square = |name: &str| -> Result<Cell, GameError> {
        let s = args.get_one::<String>(name).map_or("", String::as_str);
        Ok(parse_square(board, s)?)
    };
    let request = FindRequest {
        source: square("from")?,
        destination: square("to")?,
    };

    let query = game.query(request)?;
    let Some(result) = SearchTask::spawn(query).wait() else {
        log::warn!("search did not finish");
        return Ok(());
    };
    let response = game.complete(query, result)?;
    println!("{}", solutions_or_message(&response.solutions));
    Ok(())
}

fn run_load(game: &FileGame) -> Result<(), GameError> {
    let loaded = game.load_game();
    let (Some(source), Some(destination)) = (loaded.source, loaded.destination) else {
        println!("{}", messages::NO_SAVED_GAME);
        println!("Board {0}x{0}", loaded.board_size);
        return Ok(());
    };
    let board = Board::new(loaded.board_size)
        .ok_or(knight_paths::FindError::InvalidBoardSize(loaded.board_size))?;
    println!(
        "Board {0}x{0}, {1} -> {2}",
        loaded.board_size,
        square_name(board, source)?,
        square_name(board, destination)?
    );
    println!("{}", solutions_or_message(&loaded.solutions));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = GameConfig::resolve(matches.get_one::<PathBuf>("data-dir").cloned());
    let mut game = open_game(&config)?;

    let result = match matches.subcommand() {
        Some(("menu", args)) => run_menu(&mut game, args),
        Some(("find", args)) => run_find(&mut game, args),
        Some(("load", _)) => run_load(&game),
        _ => unreachable!("subcommand_required"),
    };

    match result {
        Err(GameError::InvalidInput(msgs)) => {
            for m in msgs {
                eprintln!("{m}");
            }
            process::exit(2);
        }
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_find() {
        let m = cli()
            .try_get_matches_from(["knight-game", "--data-dir", "/tmp/k", "find", "a1", "c2"])
            .unwrap();
        assert_eq!(m.get_one::<PathBuf>("data-dir"), Some(&PathBuf::from("/tmp/k")));
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "find");
        assert_eq!(sub.get_one::<String>("from").map(String::as_str), Some("a1"));
        assert_eq!(sub.get_one::<String>("to").map(String::as_str), Some("c2"));
    }

    #[test]
    fn verbose_counts() {
        let m = cli().try_get_matches_from(["knight-game", "-vv", "load"]).unwrap();
        assert_eq!(m.get_count("verbose"), 2);
    }

    #[test]
    fn find_then_load_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::new(dir.path());
        let mut game = open_game(&config).unwrap();
        let m = cli()
            .try_get_matches_from(["knight-game", "menu", "--board-size", "8", "--moves", "2"])
            .unwrap();
        run_menu(&mut game, m.subcommand_matches("menu").unwrap()).unwrap();
        let m = cli()
            .try_get_matches_from(["knight-game", "find", "a1", "c5"])
            .unwrap();
        run_find(&mut game, m.subcommand_matches("find").unwrap()).unwrap();

        let reopened = open_game(&config).unwrap();
        let loaded = reopened.load_game();
        assert_eq!(loaded.board_size, 8);
        assert_eq!(loaded.source, Some(Cell::new(7, 0)));
        assert_eq!(loaded.destination, Some(Cell::new(3, 2)));
        assert_eq!(loaded.solutions.len(), 1);
        assert_eq!(loaded.solutions[0].to_string(), "Nb3 -> Nc5");
    }

    #[test]
    fn menu_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = open_game(&GameConfig::new(dir.path())).unwrap();
        let m = cli()
            .try_get_matches_from(["knight-game", "menu", "--board-size", "5", "--moves", "2"])
            .unwrap();
        let err = run_menu(&mut game, m.subcommand_matches("menu").unwrap()).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(ref msgs) if msgs.len() == 1));
    }
}
