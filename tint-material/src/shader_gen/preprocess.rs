use super::ShaderGenError;

/// One open `#ifdef` / `#ifndef` block
struct Block {
    /// Line of the opening directive, for error reporting
    line: usize,
    /// Whether the enclosing scope emits lines
    parent_active: bool,
    /// Whether the condition held
    condition: bool,
    in_else: bool,
}

impl Block {
    fn active(&self) -> bool {
        self.parent_active && (self.condition != self.in_else)
    }
}

/// Resolve conditional directives in a WGSL template
///
/// Supports nested `#ifdef NAME`, `#ifndef NAME`, `#else` and `#endif`.
/// Directive lines are removed from the output; any other line (including
/// other `#` directives such as `#import`) is kept when its block is active.
pub fn preprocess(source: &str, defs: &[&str]) -> Result<String, ShaderGenError> {
    let mut out = String::with_capacity(source.len());
    let mut stack: Vec<Block> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let active = stack.last().is_none_or(Block::active);
        let trimmed = raw.trim_start();

        if let Some(rest) = trimmed.strip_prefix("#ifdef") {
            let name = def_name(rest, line)?;
            stack.push(Block {
                line,
                parent_active: active,
                condition: defs.contains(&name),
                in_else: false,
            });
        } else if let Some(rest) = trimmed.strip_prefix("#ifndef") {
            let name = def_name(rest, line)?;
            stack.push(Block {
                line,
                parent_active: active,
                condition: !defs.contains(&name),
                in_else: false,
            });
        } else if is_directive(trimmed, "#else") {
            match stack.last_mut() {
                Some(block) if !block.in_else => block.in_else = true,
                _ => return Err(ShaderGenError::UnexpectedElse { line }),
            }
        } else if is_directive(trimmed, "#endif") {
            if stack.pop().is_none() {
                return Err(ShaderGenError::UnexpectedEndif { line });
            }
        } else if active {
            out.push_str(raw);
            out.push('\n');
        }
    }

    match stack.first() {
        Some(block) => Err(ShaderGenError::UnclosedBlock { line: block.line }),
        None => Ok(out),
    }
}

fn def_name(rest: &str, line: usize) -> Result<&str, ShaderGenError> {
    // "#ifdefFOO" is not a directive with a name
    if !rest.starts_with(char::is_whitespace) {
        return Err(ShaderGenError::MissingDefName { line });
    }
    rest.split_whitespace()
        .next()
        .ok_or(ShaderGenError::MissingDefName { line })
}

fn is_directive(trimmed: &str, directive: &str) -> bool {
    trimmed
        .strip_prefix(directive)
        .is_some_and(|rest| rest.trim().is_empty() || rest.trim_start().starts_with("//"))
}
