//! Binder Tests

use mdi_domain::value_objects::{Signature, Value, erase};
use mdi_infrastructure::binder::BoundFunction;
use mdi_infrastructure::registry::DependencyRegistry;

/// Lower the resolved slots to plain integers for assertions
fn ints(args: Vec<Option<Value>>) -> Vec<Option<i32>> {
    args.iter()
        .map(|slot| slot.as_ref().and_then(|v| v.downcast_ref::<i32>().copied()))
        .collect()
}

fn bind_ints(di: &DependencyRegistry, decl: &str) -> BoundFunction<Vec<Option<i32>>> {
    di.bind(Signature::parse(decl).unwrap(), ints)
}

#[test]
fn test_call_passes_explicit_args_through() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one, two)");

    assert_eq!(f.call([erase(1), erase(2)]), vec![Some(1), Some(2)]);
}

#[test]
fn test_call_drops_surplus_args() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one, two)");

    assert_eq!(
        f.call([erase(1), erase(2), erase(3), erase(4)]),
        vec![Some(1), Some(2)]
    );
}

#[test]
fn test_call_fills_missing_args_with_none() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one, two)");

    assert_eq!(f.call(Vec::new()), vec![None, None]);
}

#[test]
fn test_injected_slots_read_the_registry() {
    let di = DependencyRegistry::new();
    di.register("one", 1_i32).register("two", 2_i32);
    let f = bind_ints(&di, "fn f($one, three, $two)");

    assert_eq!(f.call([erase(3)]), vec![Some(1), Some(3), Some(2)]);
}

#[test]
fn test_injected_value_shadows_call_arg() {
    let di = DependencyRegistry::new();
    di.register("one", 1_i32);
    let f = bind_ints(&di, "fn f($one)");

    assert_eq!(f.call([erase(2)]), vec![Some(1)]);
}

#[test]
fn test_registration_after_bind_is_visible() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f($late)");

    assert_eq!(f.call(Vec::new()), vec![None]);

    di.register("late", 7_i32);
    assert_eq!(f.call(Vec::new()), vec![Some(7)]);
}

#[test]
fn test_overwrite_after_bind_is_visible() {
    let di = DependencyRegistry::new();
    di.register("version", 1_i32);
    let f = bind_ints(&di, "fn f($version)");

    assert_eq!(f.call(Vec::new()), vec![Some(1)]);

    di.register("version", 2_i32);
    assert_eq!(f.call(Vec::new()), vec![Some(2)]);
}

#[test]
fn test_wrapper_accepts_any_arity() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one)");

    assert_eq!(f.call(Vec::new()), vec![None]);
    assert_eq!(f.call([erase(1)]), vec![Some(1)]);
    assert_eq!(f.call([erase(1), erase(2), erase(3)]), vec![Some(1)]);
}

#[test]
fn test_bound_function_computes_a_result() {
    let di = DependencyRegistry::new();
    di.register("greeting", "hello".to_string());

    let greet = di.bind(Signature::parse("fn greet($greeting, name)").unwrap(), |args| {
        let greeting = args[0]
            .as_ref()
            .and_then(|v| v.downcast_ref::<String>())
            .map_or("hi", String::as_str);
        let name = args[1]
            .as_ref()
            .and_then(|v| v.downcast_ref::<String>())
            .map_or("world", String::as_str);
        format!("{greeting}, {name}")
    });

    assert_eq!(greet.call([erase("rust".to_string())]), "hello, rust");
    assert_eq!(greet.call(Vec::new()), "hello, world");
}

#[test]
fn test_bind_parsed_rejects_malformed_declaration() {
    let di = DependencyRegistry::new();

    assert!(di.bind_parsed("fn broken", ints).is_err());
    assert!(di.bind_parsed("fn ok(a, $b)", ints).is_ok());
}

#[test]
fn test_signature_is_frozen_at_bind_time() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one, $two)");

    assert_eq!(f.signature().to_string(), "(one, $two)");
    assert_eq!(f.signature().len(), 2);
}

#[test]
fn test_debug_renders_signature() {
    let di = DependencyRegistry::new();
    let f = bind_ints(&di, "fn f(one, $two)");

    let rendered = format!("{f:?}");
    assert!(rendered.contains("(one, $two)"));
}
