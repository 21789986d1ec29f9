pub const TINIFY_ENDPOINT: &str = "https://api.tinify.com/shrink";
pub const API_KEY_VAR: &str = "TINIFY_KEY";

pub const DEFAULT_LEDGER_PATH: &str = ".tinify.db";
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_ROOT_DIR: &str = "docs";

/// Extensions eligible for compression. The remote service accepts exactly
/// these formats; everything else is left untouched by the scanner.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "avif"];
