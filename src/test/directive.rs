use crate::test::utils::fail;
use crate::translate::directive::{Directive, classify};
use crate::translate::state::TranslateError;
use anyhow::Result;

#[test]
fn extraction_per_directive_kind() -> Result<()> {
    assert_eq!(
        classify("func main {")?,
        Directive::FuncStart { name: "main" }
    );
    assert_eq!(classify("}")?, Directive::FuncEnd);
    assert_eq!(classify("var counter")?, Directive::Var { name: "counter" });
    assert_eq!(
        classify(".while rax == 0)")?,
        Directive::WhileStart { cond: "rax == 0" }
    );
    assert_eq!(classify(".endwhile")?, Directive::WhileEnd);
    assert_eq!(
        classify(".if rbx < 4)")?,
        Directive::IfStart { cond: "rbx < 4" }
    );
    assert_eq!(
        classify(".elif rbx < 8)")?,
        Directive::Elif { cond: "rbx < 8" }
    );
    assert_eq!(classify(".endif")?, Directive::IfEnd);
    assert_eq!(classify("call done")?, Directive::Call { name: "done" });
    assert_eq!(classify("mov rax, 60")?, Directive::Raw("mov rax, 60"));
    Ok(())
}

#[test]
fn first_matching_rule_wins() -> Result<()> {
    // A recognized prefix inside a later-ranked directive's text stays inert.
    assert_eq!(
        classify("call func x")?,
        Directive::Call { name: "func x" }
    );
    assert_eq!(
        classify("var func a {")?,
        Directive::Var { name: "func a {" }
    );
    Ok(())
}

#[test]
fn closers_match_by_equality_not_prefix() -> Result<()> {
    assert_eq!(
        classify(".endwhile extra")?,
        Directive::Raw(".endwhile extra")
    );
    assert_eq!(classify(".endifx")?, Directive::Raw(".endifx"));
    assert_eq!(classify("} ;")?, Directive::Raw("} ;"));
    Ok(())
}

#[test]
fn condition_text_is_not_parsed() -> Result<()> {
    // Only the single trailing byte is dropped; an opening parenthesis, if
    // present, stays in the extracted text.
    assert_eq!(
        classify(".if (x == 0)")?,
        Directive::IfStart { cond: "(x == 0" }
    );
    Ok(())
}

#[test]
fn empty_line_is_raw() -> Result<()> {
    assert_eq!(classify("")?, Directive::Raw(""));
    Ok(())
}

#[test]
fn directive_shorter_than_its_form_is_malformed() {
    match classify("func {") {
        Err(TranslateError::MalformedDirective { form }) => {
            assert_eq!(form, "func <name> {");
        }
        actual => fail!("{actual:?}"),
    }
}
