use crate::shared::error::TreeParseError;
use crate::tree_parsing::domain::ComponentIdentity;

/// LevelDecoder - derives a line's tree depth from its leading decoration
///
/// Tree renderers differ in how they draw indentation, so the depth rule is
/// kept separate from the reconstruction walk.
pub trait LevelDecoder {
    fn decode_level(&self, line: &str) -> usize;
}

/// Depth rule for `mvn dependency:tree` output
///
/// Counts leading `+`, space, `\` and `|` characters. A count of 0 or 1 is
/// the level itself; larger counts are halved, since the renderer draws two
/// characters per level beyond the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenLevelDecoder;

impl MavenLevelDecoder {
    pub fn new() -> Self {
        Self
    }

    fn is_indent_char(c: char) -> bool {
        matches!(c, '+' | ' ' | '\\' | '|')
    }
}

impl LevelDecoder for MavenLevelDecoder {
    fn decode_level(&self, line: &str) -> usize {
        let indent = line.chars().take_while(|&c| Self::is_indent_char(c)).count();
        if indent <= 1 {
            indent
        } else {
            indent / 2
        }
    }
}

/// Decodes the component identity from a colon-delimited coordinate line
///
/// The whole line is split, decoration included; only the artifact (2nd
/// field) and version fields are read, so the prefix never matters.
/// Empty fields at the end of the line are not counted, so a stray
/// trailing `:` does not shift the version field.
///
/// ```text
/// group:artifact:type:version                    -> (artifact, version)
/// group:artifact:type:version:scope              -> (artifact, version)
/// group:artifact:type:classifier:version:scope   -> (artifact, version)
/// ```
///
/// # Errors
/// `TreeParseError::MalformedLine` for any other field count.
pub fn decode_component(
    line: &str,
    line_number: usize,
) -> std::result::Result<ComponentIdentity, TreeParseError> {
    let mut parts: Vec<&str> = line.split(':').collect();
    if parts.len() > 1 {
        while parts.last() == Some(&"") {
            parts.pop();
        }
    }
    match parts.len() {
        4 | 5 => Ok(ComponentIdentity::new(parts[1], parts[3])),
        6 => Ok(ComponentIdentity::new(parts[1], parts[4])),
        field_count => Err(TreeParseError::MalformedLine {
            line_number,
            line: line.to_string(),
            field_count,
        }),
    }
}
