use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user.
///
/// With `assume_yes` (global `--yes`) the question is still printed but
/// answered automatically. Anything other than `y`/`yes` counts as a no,
/// including a closed stdin.
pub fn ask_confirmation(prompt: &str, assume_yes: bool) -> bool {
    warning(prompt);

    if assume_yes {
        println!("Confirm [y/N]: y");
        return true;
    }

    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
