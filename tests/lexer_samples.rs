//! Integration tests for the lexer using sample scripts
//!
//! These tests tokenize the scripts under `tests/samples` and snapshot the token stream in the
//! `token-simple` format to catch regressions.

use scenario::scenario::formats::FormatRegistry;
use scenario::scenario::lexing::{tokenize, LexError, MalformedFunction};

fn simple(source: &str) -> String {
    let tokens = tokenize(source).expect("sample should lex");
    FormatRegistry::with_defaults()
        .serialize(&tokens, "token-simple")
        .expect("token-simple is a default format")
}

#[test]
fn test_010_opening_tokenization() {
    let content = include_str!("samples/010-opening.scn");

    insta::assert_snapshot!(simple(content), @r###"
    COMMENT(" Chapter one: the station")
    LABEL("START")
    FUNCTION_NAME("bg")
    FUNCTION_PARAM_START("(")
    FUNCTION_PARAM("station")
    FUNCTION_PARAM_SEPARATOR(",")
    FUNCTION_PARAM("fade")
    FUNCTION_PARAM_END(")")
    FUNCTION_NAME("bgm")
    FUNCTION_PARAM_START("(")
    FUNCTION_PARAM("rain_loop")
    FUNCTION_PARAM_END(")")
    TEXT("「……遅いな」")
    FUNCTION_NAME("wait")
    FUNCTION_PARAM_START("(")
    FUNCTION_PARAM("30")
    FUNCTION_PARAM_END(")")
    LABEL("KEI")
    TEXT("「ごめん、待った？」")
    FUNCTION_NAME("se")
    FUNCTION_PARAM_START("(")
    FUNCTION_PARAM_END(")")
    LABEL("CHOICE_1")
    "###);
}

#[test]
fn test_010_opening_detokenized() {
    let content = include_str!("samples/010-opening.scn");
    let tokens = tokenize(content).unwrap();
    let output = FormatRegistry::with_defaults()
        .serialize(&tokens, "detokenized")
        .unwrap();

    insta::assert_snapshot!(output, @r###"
    ; Chapter one: the station
    START@bg(station,fade)@bgm(rain_loop)「……遅いな」@wait(30)KEI「ごめん、待った？」@se()CHOICE_1
    "###);
}

#[test]
fn test_020_truncated_call() {
    let content = include_str!("samples/020-truncated.scn");
    let err = tokenize(content).unwrap_err();

    assert_eq!(
        err,
        LexError::MalformedFunction {
            reason: MalformedFunction::MissingSeparatorOrEnd,
            offset: content.len(),
        }
    );
    assert_eq!(err.line_column(content), (3, 1));
}
