pub mod directive;
pub mod state;

use self::directive::{Directive, classify};
use self::state::{LabelGenerator, LabelStack, VariableScopes};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const INDENT: &str = "    ";

/// The byte set the trimming strips from both ends of every input line.
/// Deliberately narrower than `char::is_whitespace`.
const TRIMMED: [char; 6] = [' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Single-pass, line-oriented translator. All state lives for exactly one run;
/// `translate` consumes `self`, so a second run needs a fresh instance.
pub struct Translator {
    labels: LabelGenerator,
    loop_labels: LabelStack,
    if_labels: LabelStack,
    scopes: VariableScopes,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            labels: LabelGenerator::new(),
            loop_labels: LabelStack::new(".while"),
            if_labels: LabelStack::new(".if"),
            scopes: VariableScopes::new(),
        }
    }

    /// Reads `src` line by line, in order, and appends to `out`: first the
    /// fixed section preamble, then zero or more lines per input line.
    /// Any failure is terminal; nothing about `out`'s contents is guaranteed
    /// past the first error.
    pub fn translate<R: BufRead, W: Write>(mut self, src: R, mut out: W) -> Result<()> {
        writeln!(out, "section .data align=8")?;
        writeln!(out, "section .text align=16")?;
        writeln!(out, "global main")?;

        for (i, line) in src.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
            let line = line.trim_matches(TRIMMED);
            self.translate_line(line, &mut out)
                .with_context(|| format!("At line {}: {line:?}", i + 1))?;
        }

        out.flush()?;
        Ok(())
    }

    fn translate_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        match classify(line)? {
            Directive::FuncStart { name } => {
                writeln!(out, "{name}:")?;
                self.scopes.enter_function();
            }
            Directive::FuncEnd => {
                self.scopes.leave_function();
            }
            Directive::Var { name } => {
                if self.scopes.declare(name) {
                    writeln!(out, "{name} resb 8")?;
                }
            }
            Directive::WhileStart { cond } => {
                let id = self.labels.next_id();
                writeln!(out, "L{id}_start:")?;
                writeln!(out, "{INDENT}cmp {cond}")?;
                writeln!(out, "{INDENT}je L{id}_end")?;
                self.loop_labels.push(id);
            }
            Directive::WhileEnd => {
                let id = self.loop_labels.pop(".endwhile")?;
                writeln!(out, "{INDENT}jmp L{id}_start")?;
                writeln!(out, "L{id}_end:")?;
            }
            Directive::IfStart { cond } => {
                let id = self.labels.next_id();
                writeln!(out, "{INDENT}cmp {cond}")?;
                writeln!(out, "{INDENT}jne L{id}_else")?;
                self.if_labels.push(id);
            }
            Directive::Elif { cond } => {
                /* Peeked, not popped: every `.elif` of one chain reuses the
                same `_else`/`_end` pair. Kept for output compatibility. */
                let id = self.if_labels.peek(".elif")?;
                writeln!(out, "{INDENT}jmp L{id}_end")?;
                writeln!(out, "L{id}_else:")?;
                writeln!(out, "{INDENT}cmp {cond}")?;
                writeln!(out, "{INDENT}jne L{id}_end")?;
            }
            Directive::IfEnd => {
                let id = self.if_labels.pop(".endif")?;
                writeln!(out, "L{id}_end:")?;
            }
            Directive::Call { name } => {
                writeln!(out, "{INDENT}call {name}")?;
            }
            Directive::Raw(line) => {
                writeln!(out, "{INDENT}{line}")?;
            }
        }
        Ok(())
    }
}
