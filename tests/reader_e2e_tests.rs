/// End-to-end tests for the reader
/// Demonstrates: Scanner → Parser working together
use lisptree::{
    drop_nodes, parse, read, read_with, scan, Atom, Error, Imbalance, Node, Operator, ParseError,
    ParseOptions, Parser, ScanError, Scanner, Token, Tree,
};

#[test]
fn test_reader_e2e_documented_example() {
    let source = "(foo (bar))";

    // Scan
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Open,
            Token::Symbol("foo".to_string()),
            Token::Open,
            Token::Symbol("bar".to_string()),
            Token::Close,
            Token::Close,
        ]
    );

    // Parse
    let tree = Parser::new(tokens).parse().unwrap();
    assert_eq!(
        tree.into_node(),
        Node::list([Node::list([
            Node::symbol("foo"),
            Node::list([Node::symbol("bar")]),
        ])])
    );
}

#[test]
fn test_reader_e2e_arithmetic() {
    let tree = read("(+ 1 (* 2 3) )").unwrap();

    assert_eq!(
        tree,
        Tree::new(vec![Node::list([
            Node::operator(Operator::Plus),
            Node::integer(1),
            Node::list([
                Node::operator(Operator::Star),
                Node::integer(2),
                Node::integer(3),
            ]),
        ])])
    );
}

#[test]
fn test_reader_e2e_every_operator() {
    let source = "! % * + - < = > ^ ~ ";
    let tree = read(source).unwrap();

    let ops: Vec<Operator> = tree
        .leaves()
        .map(|atom| match atom {
            Atom::Operator(op) => *op,
            other => panic!("expected operator, got {:?}", other),
        })
        .collect();
    assert_eq!(ops, Operator::ALL);
}

#[test]
fn test_reader_e2e_multiple_top_level_forms() {
    let tree = read("(define x 10) (define y 20) (+ x y)").unwrap();

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaf_count(), 9);
    assert!(tree.iter().all(|form| !form.is_leaf()));
}

#[test]
fn test_reader_e2e_comparison_chain() {
    let tree = read("(if (< a b) (= a b ) (> a b ))").unwrap();
    let form = &tree.forms()[0];
    let children = form.as_list().unwrap();

    assert_eq!(children[0], Node::symbol("if"));
    assert_eq!(
        children[1],
        Node::list([
            Node::operator(Operator::Lt),
            Node::symbol("a"),
            Node::symbol("b"),
        ])
    );
    assert_eq!(children.len(), 4);
}

#[test]
fn test_reader_e2e_empty_input() {
    assert!(scan("").unwrap().is_empty());
    assert!(parse(vec![]).unwrap().is_empty());
    assert_eq!(read("").unwrap(), Tree::default());
    assert_eq!(read("     ").unwrap(), Tree::default());
}

#[test]
fn test_reader_e2e_missing_operator_terminator() {
    assert_eq!(read("(- 3 4)").unwrap().leaf_count(), 3);
    assert_eq!(
        read("(-3 4)").unwrap_err(),
        Error::Scan(ScanError::MissingOperatorTerminator {
            operator: Operator::Minus,
            offset: 1,
        })
    );
    assert!(matches!(
        read("(a b +)").unwrap_err(),
        Error::Scan(ScanError::MissingOperatorTerminator { .. })
    ));
}

#[test]
fn test_reader_e2e_whitespace_other_than_space() {
    let source = "(define x\n  10)";
    assert_eq!(
        read(source).unwrap_err(),
        Error::Scan(ScanError::UnrecognizedCharacter { ch: '\n', offset: 9 })
    );
}

#[test]
fn test_reader_e2e_unbalanced() {
    assert_eq!(
        read("(a b))").unwrap_err(),
        Error::Parse(ParseError::UnbalancedParentheses(
            Imbalance::UnexpectedClose { index: 4 }
        ))
    );
    assert_eq!(
        read("(a (b)").unwrap_err(),
        Error::Parse(ParseError::UnbalancedParentheses(
            Imbalance::UnclosedOpen { unclosed: 1 }
        ))
    );
    assert!(matches!(read(")("), Err(Error::Parse(_))));
}

#[test]
fn test_reader_e2e_display_round_trip() {
    let source = "(lambda (x) (* x x ) ) (apply ~ ) 7";
    let tree = read(source).unwrap();
    let rendered = tree.to_string();

    assert_eq!(rendered, "(lambda (x) (* x x)) (apply ~ ) 7");
    assert_eq!(read(&rendered).unwrap(), tree);
}

#[test]
fn test_reader_e2e_deep_nesting() {
    let depth = 100_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));

    let tree = read(&source).unwrap();
    assert_eq!(tree.depth(), depth);
    assert_eq!(tree.leaf_count(), 1);
}

#[test]
fn test_reader_e2e_deep_nesting_extra_close() {
    let depth = 100_000;
    let source = format!("{}x{})", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(
        read(&source).unwrap_err(),
        Error::Parse(ParseError::UnbalancedParentheses(
            Imbalance::UnexpectedClose { index: 2 * depth + 1 }
        ))
    );
}

#[test]
fn test_reader_e2e_deep_nesting_missing_close() {
    let depth = 100_000;
    let source = format!("({}x{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(
        read(&source).unwrap_err(),
        Error::Parse(ParseError::UnbalancedParentheses(
            Imbalance::UnclosedOpen { unclosed: 1 }
        ))
    );
}

#[test]
fn test_reader_e2e_deep_nesting_over_limit() {
    let depth = 100_000;
    // A complete form right at the limit, then one that goes past it
    let source = format!(
        "{}x{} {}",
        "(".repeat(depth),
        ")".repeat(depth),
        "(".repeat(depth + 1)
    );
    let options = ParseOptions::default().with_max_depth(depth);

    assert_eq!(
        read_with(&source, options).unwrap_err(),
        Error::Parse(ParseError::NestingTooDeep {
            limit: depth,
            index: 3 * depth + 1,
        })
    );
}

#[test]
fn test_reader_e2e_deep_forms_released() {
    let depth = 100_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));

    let forms = read(&source).unwrap().into_forms();
    assert_eq!(forms.len(), 1);
    drop_nodes(forms);

    let node = read(&source).unwrap().into_node();
    assert_eq!(node.depth(), depth + 1);
    drop_nodes(vec![node]);
}

#[test]
fn test_reader_e2e_long_flat_input() {
    let source = "a 1 ".repeat(50_000);
    let tree = read(&source).unwrap();
    assert_eq!(tree.len(), 100_000);
    assert_eq!(tree.depth(), 0);
}

#[test]
fn test_reader_e2e_serde_shape() {
    let tree = read("(foo 1 + )").unwrap();
    let json = serde_json::to_string(&tree).unwrap();

    assert_eq!(
        json,
        r#"[{"List":[{"Leaf":{"Symbol":"foo"}},{"Leaf":{"Integer":1}},{"Leaf":{"Operator":"Plus"}}]}]"#
    );

    let back: Tree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
