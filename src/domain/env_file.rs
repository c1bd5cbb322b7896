//! Line-oriented `KEY=VALUE` editing for the Laravel `.env` file.
//!
//! Substitution is textual: each known key is rewritten in place with a
//! whole-line match, and keys missing from the template are left out rather
//! than appended, matching the stock `.env.example` layout byte for byte
//! outside the six database lines.

use regex::{NoExpand, Regex};

use crate::domain::DatabaseConfig;

/// The environment file the wizard materializes.
pub const ENV_FILE: &str = ".env";

/// The template shipped with every Laravel checkout.
pub const ENV_TEMPLATE: &str = ".env.example";

/// The six keys rewritten in the template, with their write-time fallbacks.
fn db_entries(config: &DatabaseConfig) -> [(&'static str, String); 6] {
    let field = |value: &Option<String>, fallback: &str| {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };
    [
        ("DB_CONNECTION", field(&config.connection, "mysql")),
        ("DB_HOST", field(&config.host, "127.0.0.1")),
        ("DB_PORT", field(&config.port, "3306")),
        ("DB_DATABASE", field(&config.database, "laravel")),
        ("DB_USERNAME", field(&config.username, "root")),
        ("DB_PASSWORD", field(&config.password, "")),
    ]
}

/// Rewrite the six database lines of `content` with the collected values.
///
/// Each key replaces the first line matching `KEY=<rest of line>`; a key the
/// template does not contain is silently skipped.
pub fn apply_db_config(content: &str, config: &DatabaseConfig) -> String {
    let mut updated = content.to_string();
    for (key, value) in db_entries(config) {
        let Ok(line) = Regex::new(&format!(r"(?m)^{key}=.*$")) else {
            continue;
        };
        let replacement = format!("{key}={value}");
        updated = line.replace(&updated, NoExpand(&replacement)).into_owned();
    }
    updated
}

/// Extract the database values currently present in `content`.
///
/// First match per key, trimmed. A key that is absent or has an empty value
/// leaves its field unset; nothing here is an error.
pub fn extract_db_config(content: &str) -> DatabaseConfig {
    DatabaseConfig {
        connection: capture(content, "DB_CONNECTION"),
        host: capture(content, "DB_HOST"),
        port: capture(content, "DB_PORT"),
        database: capture(content, "DB_DATABASE"),
        username: capture(content, "DB_USERNAME"),
        password: capture(content, "DB_PASSWORD"),
    }
}

fn capture(content: &str, key: &str) -> Option<String> {
    let line = Regex::new(&format!(r"(?m)^{key}=(.+)$")).ok()?;
    line.captures(content)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
