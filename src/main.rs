//! rreading main entrypoint.

use rreading::run;
use rreading::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
