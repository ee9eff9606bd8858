use crate::translate::Translator;
use anyhow::Result;
use std::io::Cursor;

pub const PREAMBLE: [&str; 3] = [
    "section .data align=8",
    "section .text align=16",
    "global main",
];

/// Runs one fresh translator over an in-memory source and collects the
/// emitted lines, preamble included.
pub fn translate(src: &str) -> Result<Vec<String>> {
    let mut out = Vec::<u8>::new();
    Translator::new().translate(Cursor::new(src), &mut out)?;
    let out = String::from_utf8(out)?;
    Ok(out.lines().map(String::from).collect())
}

/// The emitted lines after the fixed preamble.
pub fn translate_body(src: &str) -> Result<Vec<String>> {
    let mut lines = translate(src)?;
    assert_eq!(lines[..3], PREAMBLE);
    Ok(lines.split_off(3))
}

macro_rules! fail {
    ( $($arg:tt),* ) => {
        panic!($($arg)*)
    };
}
pub(crate) use fail;
