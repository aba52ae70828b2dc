//! rShiftgap main entrypoint.

use rshiftgap::run;
use rshiftgap::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
