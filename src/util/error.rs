use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use nu_ansi_term::Color::{Red, Yellow};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn disable_colors() {
    COLORS_ENABLED.store(false, Ordering::Relaxed);
}

pub fn error_message(source: &str, description: &str) {
    eprintln!("{}", format_error(source, description, COLORS_ENABLED.load(Ordering::Relaxed)));
}

pub fn error_exit(source: &str, description: &str) -> ! {
    error_message(source, description);
    process::exit(2);
}

fn format_error(source: &str, description: &str, colors: bool) -> String {
    if colors {
        format!("{}: {}", Yellow.paint(source), Red.paint(description))
    } else {
        format!("{}: {}", source, description)
    }
}
