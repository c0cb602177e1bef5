//! Command-line argument parsing.
//!
//! ```text
//! arcade [GAME] [--no-sound] [--fps N]
//! arcade --help | --version
//! ```

use crate::core::config::Config;
use crate::core::constants::{MAX_TICK_RATE_HZ, MIN_TICK_RATE_HZ};
use crate::games::GameKind;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Overrides for a normal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Skip the menu and start this game.
    pub game: Option<GameKind>,
    pub no_sound: bool,
    pub fps: Option<u32>,
}

impl RunOptions {
    /// Apply the flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.no_sound {
            config.sound = false;
        }
        if let Some(fps) = self.fps {
            config.tick_rate_hz = fps;
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--no-sound" => options.no_sound = true,
            "--fps" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--fps needs a value".to_string())?;
                options.fps = Some(parse_fps(value.as_ref())?);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            name => {
                if options.game.is_some() {
                    return Err(format!("Only one game can be given, got extra '{}'", name));
                }
                let kind =
                    GameKind::from_slug(name).ok_or_else(|| format!("Unknown game: {}", name))?;
                options.game = Some(kind);
            }
        }
    }

    Ok(Command::Run(options))
}

fn parse_fps(value: &str) -> Result<u32, String> {
    let fps: u32 = value
        .parse()
        .map_err(|_| format!("Invalid --fps value: {}", value))?;
    if !(MIN_TICK_RATE_HZ..=MAX_TICK_RATE_HZ).contains(&fps) {
        return Err(format!(
            "--fps must be between {} and {}",
            MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ
        ));
    }
    Ok(fps)
}

/// Text printed by `--help`.
pub fn help_text() -> String {
    let mut text = String::from("Arcade - small terminal games\n\n");
    text.push_str("Usage: arcade [GAME] [options]\n\n");
    text.push_str("Games:\n");
    for kind in GameKind::ALL {
        text.push_str(&format!("  {:<8} {}\n", kind.slug(), kind.name()));
    }
    text.push_str("\nOptions:\n");
    text.push_str("  --no-sound  Disable sound effects\n");
    text.push_str(&format!(
        "  --fps N     Simulation rate ({}-{}, default from config)\n",
        MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ
    ));
    text.push_str("  --version   Show version information\n");
    text.push_str("  --help      Show this help message\n");
    text.push_str("\nSettings are read from ~/.arcade/config.json\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn test_no_args_runs_menu() {
        assert_eq!(parse(&[]), Ok(Command::Run(RunOptions::default())));
    }

    #[test]
    fn test_game_and_flags() {
        let command = parse(&["pong", "--no-sound", "--fps", "60"]).unwrap();
        assert_eq!(
            command,
            Command::Run(RunOptions {
                game: Some(GameKind::Pong),
                no_sound: true,
                fps: Some(60),
            })
        );
    }

    #[test]
    fn test_help_and_version_win() {
        assert_eq!(parse(&["swap", "--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-v"]), Ok(Command::Version));
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["tetris"]).is_err());
        assert!(parse(&["--fps"]).is_err());
        assert!(parse(&["--fps", "fast"]).is_err());
        assert!(parse(&["--fps", "0"]).is_err());
        assert!(parse(&["--fps", "500"]).is_err());
        assert!(parse(&["--loud"]).is_err());
        assert!(parse(&["flip", "paint"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let mut config = Config::default();
        RunOptions {
            game: None,
            no_sound: true,
            fps: Some(15),
        }
        .apply(&mut config);
        assert!(!config.sound);
        assert_eq!(config.tick_rate_hz, 15);
    }

    #[test]
    fn test_help_lists_every_game() {
        let help = help_text();
        for kind in GameKind::ALL {
            assert!(help.contains(kind.slug()));
        }
    }
}
