//! Command line of the `tui-2048` binary.

use clap::{Parser, Subcommand};

use crate::replay::ReplayArgs;

#[derive(Debug, Parser)]
#[command(name = "tui-2048", version, about = "Terminal 2048 with slide/merge animations")]
pub struct Cli {
    /// Without a subcommand the game runs interactively
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a scripted game headless and print one JSON line per move
    Replay(ReplayArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use clap::error::ErrorKind;

    fn replay(args: &[&str]) -> Result<ReplayArgs, clap::Error> {
        let cli = Cli::try_parse_from(["tui-2048", "replay"].into_iter().chain(args.iter().copied()))?;
        match cli.command {
            Some(Command::Replay(args)) => Ok(args),
            None => panic!("replay subcommand not parsed"),
        }
    }

    #[test]
    fn no_subcommand_plays_interactively() {
        let cli = Cli::try_parse_from(["tui-2048"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_replay_flags_in_any_order() {
        let args = replay(&["--moves", "lR, ud", "--seed", "9"]).unwrap();
        assert_eq!(args.seed, 9);
        assert_eq!(
            args.moves,
            vec![Direction::Left, Direction::Right, Direction::Up, Direction::Down]
        );

        let args = replay(&["--seed", "3"]).unwrap();
        assert!(args.moves.is_empty());
    }

    #[test]
    fn rejects_bad_replay_arguments() {
        let err = replay(&["--seed", "1", "--moves", "LX"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("--moves"));

        let err = replay(&["--seed", "abc"]).unwrap_err();
        assert!(err.to_string().contains("--seed"));

        let err = replay(&["--moves", "L"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(replay(&["--seed"]).is_err());

        let err = replay(&["--seed", "1", "--fast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        assert!(Cli::try_parse_from(["tui-2048", "solve"]).is_err());
    }
}
