//! Rule-expression lexing as seen by callers.

use pretty_assertions::assert_eq;
use rstest::rstest;
use ruletag::engine::tag;

fn lexed(expression: &str) -> Vec<(String, Option<String>)> {
    tag::parse(expression)
        .iter()
        .map(|inv| (inv.name().to_owned(), inv.arg().map(str::to_owned)))
        .collect()
}

fn named(name: &str, arg: Option<&str>) -> (String, Option<String>) {
    (name.to_owned(), arg.map(str::to_owned))
}

#[rstest]
#[case("NotEmpty", vec![named("NotEmpty", None)])]
#[case("MinLength:2,MaxLength:8", vec![named("MinLength", Some("2")), named("MaxLength", Some("8"))])]
#[case("MinLength:2, MaxLength:8", vec![named("MinLength", Some("2")), named("MaxLength", Some("8"))])]
#[case("NotEmpty,", vec![named("NotEmpty", None)])]
#[case("", vec![])]
fn plain_expressions(#[case] expression: &str, #[case] expected: Vec<(String, Option<String>)>) {
    assert_eq!(lexed(expression), expected);
}

#[test]
fn regexp_literal_keeps_commas_and_position() {
    assert_eq!(
        lexed("MinLength:1,Regexp:/^[a-z]{1,3}(,[a-z]{1,3})*$/,NotEmpty"),
        vec![
            named("MinLength", Some("1")),
            named("Regexp", Some("/^[a-z]{1,3}(,[a-z]{1,3})*$/")),
            named("NotEmpty", None),
        ]
    );
}

#[test]
fn regexp_literal_is_greedy() {
    assert_eq!(
        lexed("Regexp:/a/, NotEmpty, Regexp:/b/"),
        vec![named("Regexp", Some("/a/, NotEmpty, Regexp:/b/"))]
    );
}

#[test]
fn regexp_first_leaves_an_empty_slot() {
    assert_eq!(
        lexed("Regexp:/^x$/, NotEmpty"),
        vec![named("Regexp", Some("/^x$/")), named("NotEmpty", None)]
    );
}

#[test]
fn regexp_without_closing_slash_is_an_ordinary_token() {
    assert_eq!(lexed("Regexp:^x$"), vec![named("Regexp", Some("^x$"))]);
}
