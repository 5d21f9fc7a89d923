mod collection;

pub use collection::collect_file_paths;

// Single-file loading lives with the syntax layer
pub use crate::syntax::parser::{
    get_extension, load_and_parse, load_file, parse_content, parse_with_result, validate_extension,
};
