use arcade::cli::{self, Command};
use arcade::core::config::Config;
use arcade::utils::{build_info, logging};
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{}", cli::help_text());
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init();

    let mut config = Config::load();
    options.apply(&mut config);
    let config = config.sanitized();

    if let Err(e) = arcade::app::run(config, options.game) {
        eprintln!("arcade: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
