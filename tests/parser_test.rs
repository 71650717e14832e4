// Integration tests for the scanner and parser

use monkey_lang::{
    parse, parse_with, Expression, Keyword, Lexer, Node, ParseError, Parser, ParserConfig,
    Statement, Token, TokenType, MAX_DEPTH,
};
use pretty_assertions::assert_eq;

#[test]
fn test_scanner_let_statement() {
    let tokens = Lexer::new("let five = 5;").tokenize();

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Keyword(Keyword::Let), "let"),
            Token::new(TokenType::Identifier, "five"),
            Token::new(TokenType::Assign, "="),
            Token::new(TokenType::Integer, "5"),
            Token::new(TokenType::Semicolon, ";"),
            Token::eof(),
        ]
    );
}

#[test]
fn test_scanner_never_runs_past_eof() {
    let inputs = ["", "let", "@#$%^&", "let x = ;;; !== ==! \n\t\r", "12abc_34"];

    for input in inputs {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();
        assert!(tokens.len() <= input.len() + 1);
        assert_eq!(tokens.last(), Some(&Token::eof()));
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn test_parse_let_binding_name() {
    let (program, errors) = parse("let x = 5;");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Statement::Let { name, value, .. } => {
            assert_eq!(name.render(), "x");
            assert_eq!(value.as_ref().map(|v| v.render()), Some("5".to_string()));
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_binding_name_when_skipping() {
    let (program, errors) = parse_with("let x = 5;", ParserConfig::skipping_values());
    assert!(errors.is_empty());

    match &program.statements[0] {
        Statement::Let { name, value, .. } => {
            assert_eq!(name.render(), "x");
            assert!(value.is_none());
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_single_integer() {
    let (program, errors) = parse("5");
    assert!(errors.is_empty());

    match &program.statements[..] {
        [Statement::Expression {
            expression: Expression::IntegerLiteral { value, .. },
            ..
        }] => assert_eq!(*value, 5),
        other => panic!("expected a single integer statement, got {:?}", other),
    }
}

#[test]
fn test_canonical_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b * c", "(a + (b * c))"),
        ("a * b / c", "((a * b) / c)"),
    ];

    for (source, expected) in cases {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "errors for {}: {:?}", source, errors);
        assert_eq!(program.render(), expected);
    }
}

#[test]
fn test_missing_semicolon_terminates_in_both_configurations() {
    let (program, errors) = parse("return x");
    assert!(errors.is_empty());
    assert_eq!(program.render(), "return x;");

    let (program, errors) = parse_with("return x", ParserConfig::skipping_values());
    assert_eq!(program.render(), "return ;");
    assert_eq!(
        errors,
        vec![ParseError::UnexpectedToken {
            expected: TokenType::Semicolon,
            found: TokenType::Eof,
        }]
    );
}

#[test]
fn test_no_prefix_rule_yields_single_diagnostic() {
    let mut parser = Parser::new(Lexer::new("!true"));
    let program = parser.parse_program();

    assert!(program.statements.is_empty());
    assert_eq!(
        parser.diagnostics(),
        vec!["no prefix parse function for TRUE found".to_string()]
    );
}

#[test]
fn test_diagnostics_accumulate_in_order() {
    let (program, errors) = parse("let = 1; let y 2; 3 + 99999999999999999999; let z = 4;");

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "expected next token to be =, got INT instead",
            "could not parse \"99999999999999999999\" as integer",
        ]
    );
    assert_eq!(program.render(), "12let z = 4;");
}

#[test]
fn test_render_round_trip_is_stable() {
    let sources = [
        "let x = 5; let y = x * (2 + 3); return y;",
        "return -a * b;",
        "!-a; a + b * c + d / e - f",
        "3 + 4 * 5 == 3 * 1 + 4 * 5",
        "5 > 4 != 3 < 4; return;",
        "(5 + 5) * 2 / -(1 - 2)",
    ];

    for source in sources {
        let (first, errors) = parse(source);
        assert!(errors.is_empty(), "errors for {}: {:?}", source, errors);
        let rendered = first.render();

        let (second, errors) = parse(&rendered);
        assert!(errors.is_empty(), "errors re-parsing {}: {:?}", rendered, errors);
        assert_eq!(second.render(), rendered);
    }
}

#[test]
fn test_statements_render_without_separators() {
    // An expression statement renders with no terminator, so it fuses with a
    // following keyword statement; round trips only hold when that cannot happen
    let (program, errors) = parse("x; return y;");
    assert!(errors.is_empty());
    assert_eq!(program.render(), "xreturn y;");

    let (reparsed, _) = parse(&program.render());
    assert_eq!(reparsed.render(), "xreturny");
}

#[test]
fn test_skipping_round_trip_is_stable() {
    let config = ParserConfig::skipping_values();
    let (first, _) = parse_with("let a = 1 + 2; return a;", config);
    let rendered = first.render();
    assert_eq!(rendered, "let a = ;return ;");

    let (second, errors) = parse_with(&rendered, config);
    assert!(errors.is_empty());
    assert_eq!(second.render(), rendered);
}

#[test]
fn test_infix_token_is_operator_token() {
    let (program, _) = parse("a != b");

    match &program.statements[0] {
        Statement::Expression { expression, .. } => {
            assert_eq!(expression.token_literal(), "!=");
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn assert_nesting_limit(source: &str) {
    let (program, errors) = parse(source);
    assert!(
        errors.contains(&ParseError::TooDeep(MAX_DEPTH)),
        "no nesting diagnostic among {} errors",
        errors.len()
    );
    // Rendering and dropping the partial program must stay within the stack
    let rendered = program.render();
    drop(program);
    assert!(rendered.len() <= source.len() * 2);
}

#[test]
fn test_deep_prefix_run_is_reported() {
    assert_nesting_limit(&format!("{}a", "-".repeat(10_000)));
}

#[test]
fn test_deep_group_run_is_reported() {
    assert_nesting_limit(&format!("{}a", "(".repeat(10_000)));
}

#[test]
fn test_long_infix_chain_is_reported() {
    assert_nesting_limit(&format!("a{}", " + a".repeat(50_000)));
}
