//! Classification cases for the line tokenizer.

use rstest::rstest;
use x0_site::highlight::TokenKind as K;
use x0_site::highlight::{detokenize, escape_html, tokenize_line, Token, TokenKind};

fn pairs(line: &str) -> Vec<(TokenKind, String)> {
    tokenize_line(line)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn expect(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|(k, t)| (*k, t.to_string())).collect()
}

#[rstest]
#[case::keyword_before_call("class(", &[(K::Keyword, "class"), (K::Plain, "(")])]
#[case::call("foo(", &[(K::Function, "foo"), (K::Plain, "(")])]
#[case::call_after_space("foo (", &[(K::Function, "foo"), (K::Plain, " "), (K::Plain, "(")])]
#[case::type_name("Agent", &[(K::Type, "Agent")])]
#[case::unterminated_string("\"abc", &[(K::String, "\"abc")])]
#[case::number_with_separators("100_000_000", &[(K::Number, "100_000_000")])]
#[case::lowercase_word("policy", &[(K::Plain, "policy")])]
#[case::capitalized_keyword_lookalike("Const", &[(K::Type, "Const")])]
#[case::backquoted_template("`${a}`", &[(K::String, "`${a}`")])]
#[case::single_quoted_with_escape(r"'it\'s'", &[(K::String, r"'it\'s'")])]
#[case::decimal_stays_split("1.5", &[(K::Number, "1"), (K::Plain, "."), (K::Number, "5")])]
#[case::hex_stays_split("0xff", &[(K::Number, "0"), (K::Plain, "xff")])]
#[case::signed_number("-1", &[(K::Plain, "-"), (K::Number, "1")])]
fn classifies(#[case] line: &str, #[case] expected: &[(TokenKind, &str)]) {
    assert_eq!(pairs(line), expect(expected));
}

#[rstest]
#[case("// a comment")]
#[case("   // indented")]
#[case("\t//tabbed")]
#[case("//")]
fn comment_lines_are_one_token(#[case] line: &str) {
    assert_eq!(tokenize_line(line), vec![Token::new(K::Comment, line)]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("{}[]();")]
#[case("\"")]
#[case("\\")]
#[case("'unterminated \\")]
#[case("a\u{0}b")]
#[case("日本語 = \"テキスト\"")]
fn odd_inputs_still_partition(#[case] line: &str) {
    assert_eq!(detokenize(&tokenize_line(line)), line);
}

#[test]
fn end_to_end_statement() {
    let line = "const agent = await client.createAgent(policy);";
    let expected = expect(&[
        (K::Keyword, "const"),
        (K::Plain, " "),
        (K::Plain, "agent"),
        (K::Plain, " "),
        (K::Plain, "="),
        (K::Plain, " "),
        (K::Keyword, "await"),
        (K::Plain, " "),
        (K::Plain, "client"),
        (K::Plain, "."),
        (K::Function, "createAgent"),
        (K::Plain, "("),
        (K::Plain, "policy"),
        (K::Plain, ")"),
        (K::Plain, ";"),
    ]);

    let tokens = tokenize_line(line);
    assert_eq!(detokenize(&tokens), line);
    assert_eq!(pairs(line), expected);
}

#[test]
fn script_tag_is_escaped() {
    assert_eq!(escape_html("<script>"), "&lt;script&gt;");
}
