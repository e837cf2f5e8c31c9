use crate::modules::faculty::use_cases::subscribe_student::handler::DEFAULT_MAX_COURSES_PER_STUDENT;
use thiserror::Error;

pub const LOG_FILTER: &str = "LOG_FILTER";
pub const MAX_COURSES_PER_STUDENT: &str = "FACULTY_MAX_COURSES_PER_STUDENT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Used when RUST_LOG is not set.
    pub log_filter: String,
    pub max_courses_per_student: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup(LOG_FILTER).unwrap_or_else(|| "info".to_string());
        let max_courses_per_student = match lookup(MAX_COURSES_PER_STUDENT) {
            None => DEFAULT_MAX_COURSES_PER_STUDENT,
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or(ConfigError::Invalid {
                    name: MAX_COURSES_PER_STUDENT,
                    value,
                })?,
        };
        Ok(Self {
            log_filter,
            max_courses_per_student,
        })
    }
}
