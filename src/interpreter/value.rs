/// The `Value` enum and its behavior: rendering, equality, truthiness.
pub mod core;

/// The environment chain binding names to values, shared with closures.
pub mod environment;

/// Hash-key derivation for the values that may key a hash.
pub mod hash_key;
