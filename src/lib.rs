pub mod batch;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod scan;
pub mod status;

pub use batch::{run_batches, shrink_directory, shrink_directory_with, shrink_file};
pub use client::{ShrinkService, TinifyClient};
pub use config::Config;
pub use error::{Result, ShrinkError};
pub use ledger::{hash_file, Ledger};
pub use scan::{collect_candidates, is_image_file, pending_candidates};
pub use status::report_status;
