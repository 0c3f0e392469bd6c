pub mod model;
pub mod report;

// Re-export commonly used types/functions for consumers
pub use model::{asm_path, json_path, parse_obj, read_obj, save_asm, save_json};
pub use report::{LabelOut, Report};
