use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use env_logger::Env;
use log::{Level, LevelFilter};

struct SolverStyle;

impl CologStyle for SolverStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}{}{}",
            Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold()
        )
    }
}

pub struct Logger;

impl Logger {
    /// `RUST_LOG`, when set, overrides `level`.
    pub fn init(level: LevelFilter) {
        let mut builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_env(Env::default());
        builder.format(colog::formatter(SolverStyle));
        builder.init();
    }
}
