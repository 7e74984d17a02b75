//! Console logging with local timestamps

use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

pub fn info(message: &str) {
    println!("[{}] {}", timestamp(), message);
}

pub fn success(message: &str) {
    println!("[{}] ✓ {}", timestamp(), message);
}

pub fn warn(message: &str) {
    eprintln!("[{}] Warning: {}", timestamp(), message);
}
