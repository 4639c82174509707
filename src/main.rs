//! rTenure main entrypoint.

use rtenure::run;
use rtenure::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
