//! Property-based tests for the expression formatter.
//!
//! Random expression sources are generated with every operator operand
//! parenthesized, so the parser never rejects a chain. The properties:
//! formatted output re-parses, the re-parsed tree preserves values and
//! operator structure, and a second format pass is byte-identical.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use erl_fmt::{format_form, DEFAULT_WIDTH};
use erl_parse::parse_expr;
use proptest::prelude::*;

fn atom_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,6}")
        .expect("valid regex")
        .prop_filter("not reserved", |s| !erl_ir::is_reserved(s))
}

fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..1_000_000).prop_map(|n| n.to_string()),
        (1u32..=0xffff).prop_map(|n| format!("16#{n:x}")),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        (0u32..100, 0u32..10).prop_map(|(a, b)| format!("{a}.{b}E3")),
        prop::string::string_regex("[A-Z][A-Za-z0-9_]{0,6}").expect("valid regex"),
        atom_strategy(),
        prop::string::string_regex("[a-z ]{0,8}").expect("valid regex")
            .prop_map(|s| format!("\"{s}\"")),
        prop_oneof![
            Just("$a".to_string()),
            Just("$ ".to_string()),
            Just(r"$\n".to_string()),
            Just(r"$\x41".to_string()),
            Just(r"$\x{1f600}".to_string()),
        ],
    ]
}

fn binop_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "=", "!", "orelse", "andalso", "==", "/=", "=<", "<", ">=", ">", "=:=", "=/=", "++",
        "--", "+", "-", "bor", "bxor", "bsl", "bsr", "or", "xor", "*", "/", "div", "rem",
        "band", "and",
    ])
}

fn unop_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "bnot", "not", "catch"])
}

/// Expression sources with fully parenthesized operator operands.
fn expr_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            (binop_strategy(), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| format!("({l}) {op} ({r})")),
            (unop_strategy(), inner.clone()).prop_map(|(op, e)| format!("{op} ({e})")),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|es| format!("{{{}}}", es.join(", "))),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|es| format!("[{}]", es.join(", "))),
            (inner.clone(), inner).prop_map(|(h, t)| format!("[({h}) | ({t})]")),
        ]
    })
}

proptest! {
    #[test]
    fn formatted_output_reparses_and_preserves_values(source in expr_strategy()) {
        let tree = parse_expr(&source).expect("generated source parses");
        let formatted = format_form(&tree, DEFAULT_WIDTH).expect("tree formats");
        let reparsed = parse_expr(&formatted)
            .unwrap_or_else(|e| panic!("output `{formatted}` does not re-parse: {e}"));
        prop_assert!(
            tree.value_eq(&reparsed),
            "value changed: `{}` -> `{}`",
            source,
            formatted,
        );
    }

    #[test]
    fn formatting_is_idempotent(source in expr_strategy()) {
        let tree = parse_expr(&source).expect("generated source parses");
        let first = format_form(&tree, DEFAULT_WIDTH).expect("tree formats");
        let reparsed = parse_expr(&first).expect("output re-parses");
        let second = format_form(&reparsed, DEFAULT_WIDTH).expect("reparse formats");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn narrow_widths_preserve_values_too(source in expr_strategy()) {
        let tree = parse_expr(&source).expect("generated source parses");
        for width in [1, 12, 30] {
            let formatted = format_form(&tree, width).expect("tree formats");
            let reparsed = parse_expr(&formatted)
                .unwrap_or_else(|e| panic!("output `{formatted}` does not re-parse: {e}"));
            prop_assert!(tree.value_eq(&reparsed));
            let again = format_form(&reparsed, width).expect("reparse formats");
            prop_assert_eq!(&formatted, &again);
        }
    }
}
