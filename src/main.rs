//! calcpad - keypad calculator driver
//!
//! Line-oriented front end for the calculator core: reads whitespace-
//! separated key tokens from stdin, feeds each one to the expression
//! controller, and prints the display value after every line. Stands in for
//! whatever input wiring a real surface would provide.

use std::io::{self, BufRead};
use std::process::ExitCode;

use calcpad::config::AppConfig;
use calcpad::logging::init_logging;
use calcpad::{Controller, Keymap};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("calcpad: {e}");
            return ExitCode::FAILURE;
        }
    };
    let _guard = init_logging(&config.logging);

    let keymap = match Keymap::new(&config.keys) {
        Ok(keymap) => keymap,
        Err(e) => {
            tracing::error!("invalid key configuration: {e}");
            eprintln!("calcpad: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut controller = Controller::new(keymap);

    tracing::info!("calcpad ready");
    println!("{}", controller.display_state().value);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {e}");
                return ExitCode::FAILURE;
            }
        };

        for token in line.split_whitespace() {
            // classification errors are integration bugs: fail loudly
            if let Err(e) = controller.handle_key(token) {
                tracing::error!("key {token:?} rejected: {e}");
                eprintln!("calcpad: {e}");
                return ExitCode::FAILURE;
            }
        }
        println!("{}", controller.display_state().value);
    }

    ExitCode::SUCCESS
}
