//! SPL token program constants

/// SPL Token program
pub const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// SPL Token-2022 program
pub const TOKEN_2022_PROGRAM: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";

/// Programs whose parsed instructions count as token instructions
pub const TOKEN_PROGRAM_IDS: &[&str] = &[TOKEN_PROGRAM, TOKEN_2022_PROGRAM];

/// Parsed instruction types that mint new supply
pub const MINT_TO_TYPES: &[&str] = &["mintTo", "mintToChecked"];

/// Parsed instruction types that move tokens between accounts
pub const TRANSFER_TYPES: &[&str] = &["transfer", "transferChecked"];
