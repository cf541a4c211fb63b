//! rHourLog main entrypoint.

use rhourlog::run;

fn main() {
    if let Err(e) = run() {
        rhourlog::ui::messages::report(&e);
        std::process::exit(1);
    }
}
