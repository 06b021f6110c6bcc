use crate::{println, serial_println};

const WELCOME: &str = r"
__   ____ _  __ _  ___ ___  _ __
\ \ / / _` |/ _` |/ __/ _ \| '_ \
 \ V / (_| | (_| | (_| (_) | | | |
  \_/ \__, |\__,_|\___\___/|_| |_|
      |___/
";

pub const VERSION: &str = "v0.1.0";

/// Prints the welcome message to the console.
pub fn print_welcome() {
    println!("{}{}", WELCOME, VERSION);

    serial_println!("welcome to vgacon {}", VERSION);
}
