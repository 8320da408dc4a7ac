pub type Token = u32;

pub const PAD: &str = "<PAD>";
pub const UNK: &str = "<UNK>";
pub const START: &str = "<START>";
pub const END: &str = "<END>";

/// Reserved tokens, in the order they receive IDs `0..4`.
pub const SPECIAL_TOKENS: [&str; 4] = [PAD, UNK, START, END];

/// Tokens dropped from decoded text. `<UNK>` stays visible.
pub const STRUCTURAL_TOKENS: [&str; 3] = [START, END, PAD];
