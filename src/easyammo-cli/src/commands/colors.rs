//! Colors command handler

use easyammo::VANILLA_COLORS;

/// Print the vanilla colour table
pub fn handle() {
    println!("{:<14} HEX", "NAME");
    for entry in VANILLA_COLORS {
        println!("{:<14} {}", entry.name, entry.hex);
    }
}
