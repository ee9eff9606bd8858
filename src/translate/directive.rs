use crate::translate::state::TranslateError;

/// Classification of one trimmed input line.
#[derive(PartialEq, Eq, Debug)]
pub enum Directive<'a> {
    FuncStart { name: &'a str },
    FuncEnd,
    Var { name: &'a str },
    WhileStart { cond: &'a str },
    WhileEnd,
    IfStart { cond: &'a str },
    Elif { cond: &'a str },
    IfEnd,
    Call { name: &'a str },
    Raw(&'a str),
}

/// The first matching rule, in this order, wins. Anything unrecognized,
/// including an empty line, is a raw instruction.
pub fn classify(line: &str) -> Result<Directive<'_>, TranslateError> {
    if let Some(rest) = line.strip_prefix("func ") {
        let name = drop_closer(rest, 2, "func <name> {")?;
        Ok(Directive::FuncStart { name })
    } else if line == "}" {
        Ok(Directive::FuncEnd)
    } else if let Some(name) = line.strip_prefix("var ") {
        Ok(Directive::Var { name })
    } else if let Some(rest) = line.strip_prefix(".while ") {
        let cond = drop_closer(rest, 1, ".while <cond>)")?;
        Ok(Directive::WhileStart { cond })
    } else if line == ".endwhile" {
        Ok(Directive::WhileEnd)
    } else if let Some(rest) = line.strip_prefix(".if ") {
        let cond = drop_closer(rest, 1, ".if <cond>)")?;
        Ok(Directive::IfStart { cond })
    } else if let Some(rest) = line.strip_prefix(".elif ") {
        let cond = drop_closer(rest, 1, ".elif <cond>)")?;
        Ok(Directive::Elif { cond })
    } else if line == ".endif" {
        Ok(Directive::IfEnd)
    } else if let Some(name) = line.strip_prefix("call ") {
        Ok(Directive::Call { name })
    } else {
        Ok(Directive::Raw(line))
    }
}

/// Drops the trailing `len` bytes blindly; nothing validates what they are.
fn drop_closer<'a>(rest: &'a str, len: usize, form: &'static str) -> Result<&'a str, TranslateError> {
    rest.len()
        .checked_sub(len)
        .and_then(|end| rest.get(..end))
        .ok_or(TranslateError::MalformedDirective { form })
}
