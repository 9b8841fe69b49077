use super::line_decoder::{decode_component, LevelDecoder, MavenLevelDecoder};
use crate::shared::error::TreeParseError;
use crate::tree_parsing::domain::{DependencyTreeResult, FlattenedDependencies, LeveledDependencies};

/// One open ancestor whose children are still being collected
#[derive(Debug)]
struct ParentFrame {
    owner_name: String,
    accumulated_children: Vec<String>,
}

/// Stack of open ancestors, innermost last
///
/// Closing a level and reaching end of input both drain frames through
/// `flush`, so the merge rule lives in one place.
#[derive(Debug, Default)]
struct FrameStack {
    frames: Vec<ParentFrame>,
}

impl FrameStack {
    fn push(&mut self, owner_name: String) {
        self.frames.push(ParentFrame {
            owner_name,
            accumulated_children: Vec::new(),
        });
    }

    /// Records `name` under every open ancestor, not only the innermost one.
    fn append_to_all(&mut self, name: &str) {
        for frame in &mut self.frames {
            frame.accumulated_children.push(name.to_string());
        }
    }

    /// Pops `count` frames from the top and flushes each of them.
    fn close(
        &mut self,
        count: usize,
        line_number: usize,
        flattened: &mut FlattenedDependencies,
    ) -> std::result::Result<(), TreeParseError> {
        if count > self.frames.len() {
            return Err(TreeParseError::StackUnderflow {
                line_number,
                requested: count,
                available: self.frames.len(),
            });
        }
        for _ in 0..count {
            if let Some(frame) = self.frames.pop() {
                Self::flush(frame, flattened);
            }
        }
        Ok(())
    }

    fn close_all(self, flattened: &mut FlattenedDependencies) {
        for frame in self.frames {
            Self::flush(frame, flattened);
        }
    }

    fn flush(frame: ParentFrame, flattened: &mut FlattenedDependencies) {
        flattened.merge(frame.owner_name, frame.accumulated_children);
    }
}

/// DependencyTreeParser service - rebuilds a dependency tree from its text rendering
///
/// Pure and stateless between calls: every `parse` owns its own stack and
/// accumulators, so one parser can be shared freely across threads.
///
/// Depth increases are expected to be one level per line. By default a
/// larger jump still opens a single parent frame; with `strict_levels`
/// enabled it is rejected as `TreeParseError::LevelSkip`.
#[derive(Debug, Clone, Default)]
pub struct DependencyTreeParser<D = MavenLevelDecoder> {
    level_decoder: D,
    strict_levels: bool,
}

impl DependencyTreeParser<MavenLevelDecoder> {
    /// Creates a parser for `mvn dependency:tree` output
    pub fn new() -> Self {
        Self::with_level_decoder(MavenLevelDecoder::new())
    }
}

impl<D: LevelDecoder> DependencyTreeParser<D> {
    pub fn with_level_decoder(level_decoder: D) -> Self {
        Self {
            level_decoder,
            strict_levels: false,
        }
    }

    pub fn strict_levels(mut self, strict: bool) -> Self {
        self.strict_levels = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_levels
    }

    /// Parses tree lines into flattened and leveled dependencies
    ///
    /// # Arguments
    /// * `lines` - Tree lines in the order the build tool printed them
    ///
    /// # Errors
    /// * `MalformedLine` - a line does not have 4, 5 or 6 colon-separated fields
    /// * `StackUnderflow` - a line closes more levels than are open
    /// * `LevelSkip` - strict mode only, depth grew by more than one
    pub fn parse<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> std::result::Result<DependencyTreeResult, TreeParseError> {
        let mut flattened = FlattenedDependencies::new();
        let mut leveled = LeveledDependencies::new();
        let mut stack = FrameStack::default();

        let mut previous_level = 0usize;
        let mut previous_component_name = String::new();

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;
            let level = self.level_decoder.decode_level(line);
            let component = decode_component(line, line_number)?;

            leveled.insert(level, component.clone());

            if index == 0 {
                // No parent frame exists yet for the very first line
                previous_component_name = component.name().to_string();
                continue;
            }

            if level < previous_level {
                stack.close(previous_level - level, line_number, &mut flattened)?;
            } else if level > previous_level {
                if self.strict_levels && level - previous_level > 1 {
                    return Err(TreeParseError::LevelSkip {
                        line_number,
                        from: previous_level,
                        to: level,
                    });
                }
                stack.push(std::mem::take(&mut previous_component_name));
            }

            stack.append_to_all(component.name());

            previous_level = level;
            previous_component_name = component.name().to_string();
        }

        stack.close_all(&mut flattened);

        Ok(DependencyTreeResult::new(flattened, leveled))
    }
}
