//! tsvalidator main entrypoint.

use tsvalidator::run;
use tsvalidator::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
