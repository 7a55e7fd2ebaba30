//! Test fixtures and constants.

/// Master key used by most tests.
pub const MASTER_KEY: &str = "hunter2";

/// Workspace config with the cheapest key derivation Argon2 accepts.
pub const CHEAP_CONFIG: &str = "[kdf]\nmemory_kib = 8\niterations = 1\nparallelism = 1\n";

/// Standard fields used across multiple tests.
pub const STANDARD_FIELDS: &[(&str, &str, &str)] = &[
    ("github", "alice", "pw1"),
    ("aws", "alice@example.com", "s3cr3t!"),
    ("email", "alice", "correct horse battery staple"),
];

/// Ordinary prose to hide stores in.
const PROSE: &[&str] = &[
    "It", "was", "a", "bright", "cold", "day", "in", "April,", "and", "the", "clocks", "were",
    "striking", "thirteen.", "Outside,", "even", "through", "the", "shut", "window-pane,", "the",
    "world", "looked", "cold.",
];

/// A carrier text of `words` words, wrapped every twelve words.
pub fn corpus(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(if i % 12 == 0 { '\n' } else { ' ' });
        }
        text.push_str(PROSE[i % PROSE.len()]);
    }
    text
}
