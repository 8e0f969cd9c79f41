use optio::{
    first_option, flatten, none, safe_apply, safe_apply_value, some, unapply_none, unapply_some,
    Flatten, NullableExt, OptExt, Option, SequenceExt,
};
use pretty_assertions::assert_eq;

#[test]
fn test_safe_map_throws() {
    let starter_option = some("value");
    let option = starter_option.safe_map(|_| -> std::option::Option<String> { panic!("boom") });
    assert!(option.is_empty());
}

#[test]
fn test_safe_map_against_none() {
    let none_option: Option<&str> = none().into();
    let option = none_option.safe_map(|_| -> std::option::Option<String> {
        panic!("must not be called")
    });
    assert!(option.is_empty());
}

#[test]
fn test_safe_map_err_and_absent_results() {
    assert_eq!(some("7").safe_map(|s| s.parse::<u8>()), Option::Some(7));
    assert!(some("300").safe_map(|s| s.parse::<u8>()).is_empty());
    assert!(some(Vec::<i32>::new()).safe_map(|v| v.first().copied()).is_empty());
}

#[test]
fn test_safe_map_keeps_returned_option_wrapped() {
    assert_eq!(some(3).safe_map(|n| Some(some(n + 1))), Option::Some(some(4)));
    let nested = some(3).safe_map_value(|_| Option::<i32>::None);
    assert_eq!(nested, Option::Some(Option::None));
    assert_eq!(nested, some(3).map(|_| Option::<i32>::None));
}

#[test]
fn test_safe_map_value_division_by_zero() {
    assert_eq!(some(5i32).safe_map_value(|d| 10 / d), Option::Some(2));
    assert!(some(0i32).safe_map_value(|d| 10 / d).is_empty());
    let none_option: Option<i32> = none().into();
    let skipped = none_option.safe_map_value(|_| -> i32 { panic!("must not be called") });
    assert!(skipped.is_empty());
}

#[test]
fn test_safe_apply_value() {
    let items = vec![1, 2, 3];
    assert_eq!(safe_apply_value(|| items[2]), Option::Some(3));
    assert!(safe_apply_value(|| items[3]).is_empty());
    assert_eq!(safe_apply_value(|| Option::<u8>::None), Option::Some(Option::None));
}

#[test]
fn test_safe_apply() {
    assert_eq!(safe_apply(|| Some(1)), Option::Some(1));
    assert!(safe_apply(|| None::<i32>).is_empty());
    assert!(safe_apply(|| Err::<i32, String>("bad".into())).is_empty());
    assert!(safe_apply(|| -> Result<i32, String> { panic!("worse") }).is_empty());
}

#[test]
fn test_first_option_is_none_for_empty_list() {
    let first = Vec::<Option<String>>::new().first_option();
    assert!(first.is_empty());
}

#[test]
fn test_first_option_is_some_for_non_empty_list() {
    let first = vec!["value"].first_option();
    assert_eq!(first, Option::Some("value"));
}

#[test]
fn test_first_option_pulls_only_the_head() {
    let mut pulled = 0;
    let items = (1..).map(|i| {
        pulled += 1;
        i
    });
    assert_eq!(first_option(items), Option::Some(1));
    assert_eq!(pulled, 1);
}

#[test]
fn test_first_option_of_panicking_sequence() {
    let items = (0..3).map(|i| -> i32 { panic!("item {} unavailable", i) });
    assert!(first_option(items).is_empty());
}

#[test]
fn test_flatten_drops_empties_in_order() {
    let options = vec![some(1), Option::None, some(3)];
    let values: Vec<i32> = flatten(options).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn test_flatten_postfix_and_empty_input() {
    let words: Vec<&str> = vec![Option::None, some("a"), Option::None, some("b")]
        .flatten_options()
        .collect();
    assert_eq!(words, vec!["a", "b"]);

    let nothing: Flatten<_> = flatten(Vec::<Option<u8>>::new());
    assert_eq!(nothing.count(), 0);
}

#[test]
fn test_nullable_conversion() {
    let maybe_port: std::option::Option<u16> = Some(8080);
    assert_eq!(maybe_port.into_opt(), Option::Some(8080));
    assert!(None::<u16>.into_opt().is_empty());
}

#[test]
fn test_postfix_constructors() {
    assert_eq!("a".opt(), some("a"));
    assert_eq!(3.5f64.to_some(), Option::Some(3.5));
    let gone: Option<Vec<u8>> = vec![1, 2].to_none();
    assert!(gone.is_empty());
}

#[test]
fn test_extractors() {
    assert_eq!(unapply_some(some(5)), Option::Some(5));
    assert!(unapply_none(&Option::<()>::None));
    assert!(!unapply_none(&some(())));
}

#[test]
fn test_empty_factory_infers_type() {
    fn lookup(key: &str) -> Option<u32> {
        match key {
            "answer" => some(42),
            _ => Option::empty(),
        }
    }
    assert_eq!(lookup("answer"), Option::Some(42));
    assert!(lookup("question").is_empty());
}
