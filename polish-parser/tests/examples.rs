use polish_parser::{
    equals,
    is_arithmetic_expression,
    prefix2tree,
    to_infix,
    to_prefix,
    ExprTree,
    Value,
};
use pretty_assertions::assert_eq;

/// Expressions used for the properties that hold for every valid tree.
const CORPUS: &[&str] = &[
    "1",
    "X",
    "-1",
    "+ 1 2",
    "+ 1 - 2 3",
    "* - 1 + b 3 d",
    "- + a b + a b",
    "- + 4 - 6 5 + 4 - 6 5",
    "* 1 + - 2 x 0",
    "- 2 -3",
    "+ 007 x",
];

#[test]
fn parse_operators() {
    let tree = prefix2tree("hi").unwrap();
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.root().unwrap().value(), &Value::var("hi"));

    for symbol in ["+", "-", "*"] {
        let tree = prefix2tree(&format!("{symbol} 5 10")).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(root.value().to_string(), symbol);
        assert_eq!(root.left().unwrap().value().to_string(), "5");
        assert_eq!(root.right().unwrap().value().to_string(), "10");
    }

    let tree = prefix2tree("+ 5 - 4 3").unwrap();
    let root = tree.root().unwrap();
    let right = root.right().unwrap();
    assert_eq!(tree.size(), 5);
    assert_eq!(root.value().to_string(), "+");
    assert_eq!(root.left().unwrap().value().to_string(), "5");
    assert_eq!(right.value().to_string(), "-");
    assert_eq!(right.left().unwrap().value().to_string(), "4");
    assert_eq!(right.right().unwrap().value().to_string(), "3");
}

#[test]
fn parse_errors() {
    assert!(prefix2tree("+ 5 - 4").is_err());
    assert!(prefix2tree("+ 1 +").is_err());
    assert!(prefix2tree("- 1").is_err());
}

#[test]
fn prefix_output() {
    for source in ["1", "X", "+ 1 2", "+ 1 - 2 3", "* - 1 + b 3 d"] {
        assert_eq!(to_prefix(&prefix2tree(source).unwrap()).unwrap(), source);
    }
}

#[test]
fn infix_output() {
    let cases = [
        ("1", "1"),
        ("X", "X"),
        ("+ 1 2", "(1+2)"),
        ("+ 1 - 2 3", "(1+(2-3))"),
        ("* - 1 + b 3 d", "((1-(b+3))*d)"),
        ("- + a b + a b", "((a+b)-(a+b))"),
    ];
    for (source, expected) in cases {
        assert_eq!(to_infix(&prefix2tree(source).unwrap()).unwrap(), expected);
    }
}

#[test]
fn arithmetic_expressions() {
    for source in ["1", "X", "+ 1 2", "+ 1 - 2 3", "* - 1 + b 3 d", "-1"] {
        assert!(is_arithmetic_expression(&prefix2tree(source).unwrap()), "{source}");
    }

    let mut operator_leaf = ExprTree::new();
    let root = operator_leaf.add_root("+");
    root.add_left("1");
    root.add_right("+");
    assert!(!is_arithmetic_expression(&operator_leaf));

    let mut one_child = ExprTree::new();
    one_child.add_root("-").add_left("1");
    assert!(!is_arithmetic_expression(&one_child));
    assert!(to_prefix(&one_child).is_err());
    assert!(to_infix(&one_child).is_err());
}

#[test]
fn literals_print_as_written() {
    let tree = prefix2tree("+ 007 -0").unwrap();
    assert_eq!(to_prefix(&tree).unwrap(), "+ 007 -0");
    assert_eq!(to_infix(&tree).unwrap(), "(007+-0)");
    assert!(!equals(&prefix2tree("007").unwrap(), &prefix2tree("7").unwrap()));
    assert!(!equals(&prefix2tree("-0").unwrap(), &prefix2tree("0").unwrap()));
}

#[test]
fn round_trip() {
    for source in CORPUS {
        let tree = prefix2tree(source).unwrap();
        let printed = to_prefix(&tree).unwrap();
        assert!(equals(&tree, &prefix2tree(&printed).unwrap()), "{source}");
    }
}

#[test]
fn equality_is_an_equivalence() {
    let trees = CORPUS.iter().map(|source| prefix2tree(source).unwrap()).collect::<Vec<_>>();
    for (i, a) in trees.iter().enumerate() {
        assert!(equals(a, a));
        for (j, b) in trees.iter().enumerate() {
            assert_eq!(equals(a, b), equals(b, a));
            assert_eq!(equals(a, b), i == j, "{} {}", CORPUS[i], CORPUS[j]);
        }
    }
}
