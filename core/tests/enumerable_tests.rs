//! Integration tests for the traversal operations.

use enumerable::{
    Combinator, Counter, EnumErrorKind, Operator, Pattern, Value, ValueType, all, any, count,
    each, each_with_index, map, multiply_els, none, read, reduce, select,
};

fn lit(src: &str) -> Value {
    read(src).unwrap_or_else(|e| panic!("bad literal {src}: {e}"))
}

fn word_len_at_least(n: usize) -> impl Fn(&Value) -> bool {
    move |word| word.length().is_some_and(|len| len >= n)
}

fn double(v: &Value) -> Value {
    Operator::ADD.apply(v, v).unwrap()
}

// ============================================================================
// each / each_with_index
// ============================================================================

#[test]
fn test_each_loops_an_array() {
    let mut seen = Vec::new();
    each(&lit("%w[a b c]"), |item| seen.push(item.clone())).unwrap();
    assert_eq!(Value::array(seen), lit("%w[a b c]"));
}

#[test]
fn test_each_loops_an_exclusive_range() {
    let mut seen = Vec::new();
    each(&lit("(1...4)"), |item| seen.push(item.clone())).unwrap();
    assert_eq!(Value::array(seen), lit("[1, 2, 3]"));
}

#[test]
fn test_each_loops_an_inclusive_range() {
    let mut seen = Vec::new();
    each(&lit("(1..4)"), |item| {
        seen.push(Operator::SUB.apply(item, &Value::int(1)).unwrap())
    })
    .unwrap();
    assert_eq!(Value::array(seen), lit("[0, 1, 2, 3]"));
}

#[test]
fn test_each_loops_a_hash_in_insertion_order() {
    let mut keys = Vec::new();
    each(&lit(r#"{"Jane Doe" => 10, "Jim Doe" => 6}"#), |pair| {
        if let Value::Array(entry) = pair {
            keys.push(entry.elements[0].clone());
        }
    })
    .unwrap();
    assert_eq!(Value::array(keys), lit(r#"["Jane Doe", "Jim Doe"]"#));
}

#[test]
fn test_each_with_index_builds_index_map() {
    let mut pairs = Vec::new();
    each_with_index(&lit("[9, 8, 7, 6, 5, 4, 3, 2, 1]"), |item, index| {
        pairs.push((Value::int(index as i64), item.clone()))
    })
    .unwrap();
    assert_eq!(
        Value::hash_map(pairs),
        lit("{0 => 9, 1 => 8, 2 => 7, 3 => 6, 4 => 5, 5 => 4, 6 => 3, 7 => 2, 8 => 1}")
    );
}

// ============================================================================
// select
// ============================================================================

#[test]
fn test_select_with_method_reference() {
    let evens = select(&lit("[1, 2, 3, 4, 5]"), Value::is_even).unwrap();
    assert_eq!(evens, lit("[2, 4]"));
    assert_ne!(evens, lit("[1, 3, 5]"));
}

#[test]
fn test_select_over_range() {
    let evens = select(&lit("(0..10)"), Value::is_even).unwrap();
    assert_eq!(evens, lit("[0, 2, 4, 6, 8, 10]"));
}

// ============================================================================
// all? / any? / none?
// ============================================================================

#[test]
fn test_all_with_block() {
    let words = lit("%w[ant bear cat]");
    assert!(all(&words, &Pattern::predicate(word_len_at_least(3))).unwrap());
    assert!(!all(&words, &Pattern::predicate(word_len_at_least(4))).unwrap());

    let small = Pattern::predicate(|n| {
        Operator::SUB
            .apply(n, &Value::int(100))
            .ok()
            .and_then(|d| d.as_int())
            .is_some_and(|d| d < 0)
    });
    assert!(all(&lit("(0..10)"), &small).unwrap());
}

#[test]
fn test_all_with_regex_type_and_truthiness() {
    assert!(!all(&lit("%w[ant bear cat]"), &lit("/t/").into()).unwrap());
    assert!(all(&lit("[1, 2i, 3.14]"), &lit("Numeric").into()).unwrap());
    assert!(!all(&lit("[nil, true, 99]"), &Pattern::Truthy).unwrap());
    assert!(all(&lit("[]"), &Pattern::Truthy).unwrap());
}

#[test]
fn test_any_forms() {
    let words = lit("%w[ant bear cat]");
    assert!(any(&words, &Pattern::predicate(word_len_at_least(4))).unwrap());
    assert!(!any(&words, &Pattern::predicate(word_len_at_least(5))).unwrap());
    assert!(!any(&words, &lit("/d/").into()).unwrap());
    assert!(any(&lit("[1, 2i, 3.14]"), &lit("Numeric").into()).unwrap());
    assert!(any(&lit("[nil, true, 99]"), &Pattern::Truthy).unwrap());
    assert!(!any(&lit("[]"), &Pattern::Truthy).unwrap());
}

#[test]
fn test_none_forms() {
    let words = lit("%w[ant bear cat]");
    let five = Pattern::predicate(|w| w.length() == Some(5));
    assert!(none(&words, &five).unwrap());
    assert!(!none(&words, &Pattern::predicate(word_len_at_least(4))).unwrap());
    assert!(none(&words, &lit("/d/").into()).unwrap());
    assert!(!none(&lit("[1, 2i, 3.14]"), &ValueType::Float.into()).unwrap());
    assert!(!none(&lit("[nil, true]"), &Pattern::Truthy).unwrap());
    assert!(!none(&lit("[nil, false, true]"), &Pattern::Truthy).unwrap());
    assert!(none(&lit("[]"), &Pattern::Truthy).unwrap());
}

#[test]
fn test_plain_argument_compares_by_equality() {
    assert!(any(&lit("[1, 2, 3]"), &Value::int(2).into()).unwrap());
    assert!(all(&lit("[2, 2.0, 4/2r]"), &Value::int(2).into()).unwrap());
    assert!(none(&lit("%w[a b]"), &Value::string("c").into()).unwrap());
}

#[test]
fn test_resolved_block_beats_argument() {
    let pattern = Pattern::resolve(
        Some(lit("String")),
        Some(Box::new(|v: &Value| v.is_odd())),
    );
    assert!(all(&lit("[1, 3]"), &pattern).unwrap());
}

// ============================================================================
// count
// ============================================================================

#[test]
fn test_count_forms() {
    let items = lit("[1, 2, 4, 2]");
    assert_eq!(count(&items, &Counter::Everything).unwrap(), 4);
    assert_ne!(count(&items, &Counter::Everything).unwrap(), 5);
    assert_eq!(count(&items, &Value::int(2).into()).unwrap(), 2);
    assert_eq!(count(&items, &Counter::predicate(Value::is_even)).unwrap(), 3);
}

#[test]
fn test_count_hash_and_range() {
    assert_eq!(count(&lit(r#"{"a" => 1, "b" => 2}"#), &Counter::Everything).unwrap(), 2);
    assert_eq!(count(&lit("(1...1)"), &Counter::Everything).unwrap(), 0);
    assert_eq!(count(&lit("(1..10)"), &Counter::predicate(Value::is_odd)).unwrap(), 5);
}

// ============================================================================
// map
// ============================================================================

#[test]
fn test_map_block_over_range() {
    let squares = map(&lit("(1..4)"), |i| Operator::POW.apply(i, &Value::int(2)).unwrap()).unwrap();
    assert_eq!(squares, lit("[1, 4, 9, 16]"));
    assert_ne!(squares, lit("[1, 2, 3, 4]"));
}

#[test]
fn test_map_with_named_function() {
    let doubled = map(&lit("[2, 4, 6]"), double).unwrap();
    assert_eq!(doubled, lit("[4, 8, 12]"));
    assert_ne!(doubled, lit("[2, 4, 6]"));
}

// ============================================================================
// reduce
// ============================================================================

#[test]
fn test_reduce_with_symbol() {
    let op = Combinator::resolve(None, Some(&lit(":+"))).unwrap();
    assert_eq!(reduce(&lit("(5..10)"), None, &op).unwrap(), Value::int(45));
}

#[test]
fn test_reduce_with_block() {
    let sum = Combinator::function(|acc, n| Operator::ADD.apply(&acc, n));
    assert_eq!(reduce(&lit("(5..10)"), None, &sum).unwrap(), Value::int(45));
}

#[test]
fn test_reduce_longest_word() {
    let longest = Combinator::block(|memo, word| {
        if memo.length() > word.length() {
            memo
        } else {
            word.clone()
        }
    });
    let result = reduce(&lit("%w[cat sheep bear]"), None, &longest).unwrap();
    assert_eq!(result, Value::string("sheep"));
}

#[test]
fn test_reduce_with_initial_value() {
    let times = Combinator::operator("*").unwrap();
    let product = reduce(&lit("(5..10)"), Some(Value::int(1)), &times).unwrap();
    assert_eq!(product, Value::int(151_200));

    let block = Combinator::function(|product, n| Operator::MUL.apply(&product, n));
    let product = reduce(&lit("(5..10)"), Some(Value::int(1)), &block).unwrap();
    assert_eq!(product, Value::int(151_200));
}

#[test]
fn test_reduce_integer_division_floors() {
    let div: Combinator = Operator::DIV.into();
    assert_eq!(reduce(&lit("[10, 4]"), None, &div).unwrap(), Value::int(2));
    assert_eq!(reduce(&lit("[7, -2]"), None, &div).unwrap(), Value::int(-4));
    assert_eq!(reduce(&lit("[-7, 2]"), None, &div).unwrap(), Value::int(-4));
}

#[test]
fn test_reduce_division_with_rational_stays_exact() {
    let div: Combinator = Operator::DIV.into();
    let quotient = reduce(&lit("[1/2r, 4]"), None, &div).unwrap();
    assert_eq!(quotient, lit("1/8r"));
    let float = reduce(&lit("[1, 2.0]"), None, &div).unwrap();
    assert_eq!(float, Value::float(0.5));
}

#[test]
fn test_reduce_empty_without_seed_fails() {
    let err = reduce(&lit("[]"), None, &Operator::ADD.into()).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::EmptyReduction);
    assert!(err.to_string().contains("pass an initial value"));
}

#[test]
fn test_multiply_els() {
    assert_eq!(multiply_els(&lit("[2, 4, 5]")).unwrap(), Value::int(40));
}

// ============================================================================
// Operator edge cases
// ============================================================================

#[test]
fn test_reduce_huge_repetition_fails() {
    let times: Combinator = Operator::MUL.into();
    for src in [r#"["ab", 4611686018427387904]"#, "[[1, 2], 4611686018427387904]"] {
        let err = reduce(&lit(src), None, &times).unwrap_err();
        assert_eq!(err.kind, EnumErrorKind::TypeMismatch, "{src}");
        assert!(err.message.contains("repetition too large"), "{src}");
    }
}

#[test]
fn test_reduce_repetition() {
    let times: Combinator = Operator::MUL.into();
    assert_eq!(
        reduce(&lit(r#"["ab", 3]"#), None, &times).unwrap(),
        Value::string("ababab")
    );
    assert_eq!(
        reduce(&lit("[[1], 2, 2]"), None, &times).unwrap(),
        lit("[1, 1, 1, 1]")
    );
}

#[test]
fn test_reduce_power_errors() {
    let pow: Combinator = Operator::POW.into();
    let err = reduce(&lit("[2, 4000000000]"), None, &pow).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::TypeMismatch);
    assert!(err.message.contains("Exponent too large"));

    let err = reduce(&lit("[0, -1]"), None, &pow).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::TypeMismatch);
    assert!(err.message.contains("Division by zero"));

    assert_eq!(reduce(&lit("[2, -2]"), None, &pow).unwrap(), lit("1/4r"));
}

#[test]
fn test_reduce_division_by_zero_fails() {
    let err = reduce(&lit("[1, 0]"), None, &Operator::DIV.into()).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::TypeMismatch);
    let err = reduce(&lit("[1, 0]"), None, &Operator::REM.into()).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::TypeMismatch);
}

#[test]
fn test_reduce_overflow_promotes() {
    let big = reduce(&lit("(1..25)"), None, &Operator::MUL.into()).unwrap();
    assert_eq!(big.to_string(), "15511210043330985984000000");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_atoms_are_not_enumerable() {
    for src in ["5", "\"abc\"", "nil", ":sym", "/re/", "Integer"] {
        let err = count(&lit(src), &Counter::Everything).unwrap_err();
        assert_eq!(err.kind, EnumErrorKind::NotEnumerable, "{src}");
    }
}

#[test]
fn test_unknown_operator() {
    let err = Combinator::resolve(None, Some(&lit(":<=>"))).unwrap_err();
    assert_eq!(err.kind, EnumErrorKind::UnknownOperator);
}
