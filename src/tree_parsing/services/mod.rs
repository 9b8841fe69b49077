pub mod line_decoder;
pub mod tree_parser;

pub use line_decoder::{decode_component, LevelDecoder, MavenLevelDecoder};
pub use tree_parser::DependencyTreeParser;
