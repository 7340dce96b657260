use std::{sync::Arc, thread};

use quickbuilder_core::{DeclaredType, PrimitiveKind};
use quickbuilder_engine::{
    Builder, BuilderType, BuiltType, Error, Generator, SequenceExt, SharedProvider,
    Value, as_string, elements, integers_from, map,
};
use quickbuilder_ir::{BuilderContract, PropertyDescriptor};

#[derive(Debug, Clone, Default, PartialEq)]
struct Seed {
    size: i16,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Fruit {
    name: String,
    weight: i64,
    price: f64,
    seed: Option<Seed>,
}

fn seed_type() -> BuilderType<Seed> {
    let contract = BuilderContract::from_properties(
        "Seed",
        "Seed",
        [PropertyDescriptor::new("size", PrimitiveKind::Short.into())],
    )
    .unwrap();
    let built = BuiltType::with_default("Seed").setter("set_size", |s: &mut Seed, v: i16| s.size = v);
    BuilderType::synthesize(contract, built, None).unwrap()
}

fn fruit_contract() -> BuilderContract {
    BuilderContract::from_properties(
        "Fruit",
        "Fruit",
        [
            PropertyDescriptor::new("name", DeclaredType::reference("String")),
            PropertyDescriptor::new("weight", PrimitiveKind::Long.into()),
            PropertyDescriptor::new("price", PrimitiveKind::Double.into()),
            // Listed twice, as when two accessors target one field.
            PropertyDescriptor::new("weight", PrimitiveKind::Long.into()),
            PropertyDescriptor::new("seed", DeclaredType::reference("Seed")).builder(),
        ],
    )
    .unwrap()
}

fn fruit_built() -> BuiltType<Fruit> {
    BuiltType::with_default("Fruit")
        .setter("set_name", |f: &mut Fruit, v: String| f.name = v)
        .setter("set_weight", |f: &mut Fruit, v: i64| f.weight = v)
        .setter("set_price", |f: &mut Fruit, v: f64| f.price = v)
        .object_setter("set_seed", |f: &mut Fruit, v: Seed| f.seed = Some(v))
}

fn fruit_type() -> BuilderType<Fruit> {
    BuilderType::synthesize(fruit_contract(), fruit_built(), None).unwrap()
}

#[test]
fn test_duplicate_descriptors_share_one_slot() {
    let kind = fruit_type();
    let names: Vec<_> = kind.contract().properties.names().collect();
    assert_eq!(names, vec!["name", "weight", "price", "seed"]);

    let err = kind.construct(None, vec![None; 5]).unwrap_err();
    assert!(matches!(err, Error::Arity { expected: 4, .. }));
}

#[test]
fn test_conflicting_descriptor_fails_at_synthesis() {
    let result = BuilderContract::from_properties(
        "Fruit",
        "Fruit",
        [
            PropertyDescriptor::new("weight", PrimitiveKind::Long.into()),
            PropertyDescriptor::new("weight", PrimitiveKind::Int.into()),
        ],
    );
    let err: Error = result.unwrap_err().into();
    assert!(matches!(
        err,
        Error::Ir(quickbuilder_ir::Error::ConflictingProperty { .. })
    ));
}

#[test]
fn test_missing_setter_fails_at_synthesis() {
    let built = BuiltType::<Fruit>::with_default("Fruit")
        .setter("set_name", |f: &mut Fruit, v: String| f.name = v);

    let err = BuilderType::synthesize(fruit_contract(), built, None).unwrap_err();
    assert_eq!(err.to_string(), "`Fruit` has no setter `set_weight` for property `weight`");
}

#[test]
fn test_missing_default_constructor_fails_at_synthesis() {
    let built = BuiltType::<Fruit>::new("Fruit")
        .setter("set_name", |f: &mut Fruit, v: String| f.name = v)
        .setter("set_weight", |f: &mut Fruit, v: i64| f.weight = v)
        .setter("set_price", |f: &mut Fruit, v: f64| f.price = v)
        .object_setter("set_seed", |f: &mut Fruit, v: Seed| f.seed = Some(v));

    let err = BuilderType::synthesize(fruit_contract(), built, None).unwrap_err();
    assert!(matches!(err, Error::NoDefaultConstructor { .. }));
}

#[test]
fn test_contract_without_constructor_needs_generator() {
    let contract = fruit_contract().without_default_constructor();
    let err = BuilderType::synthesize(contract.clone(), fruit_built(), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Ir(quickbuilder_ir::Error::MissingConstructor { .. })
    ));

    let generator: Generator<Fruit> =
        Arc::new(|_: &Builder<Fruit>| -> quickbuilder_engine::Result<Fruit> { Ok(Fruit::default()) });
    assert!(BuilderType::synthesize(contract, fruit_built(), Some(generator)).is_ok());
}

#[test]
fn test_generator_replaces_default_constructor() {
    let built = BuiltType::<Fruit>::new("Fruit")
        .setter("set_name", |f: &mut Fruit, v: String| f.name = v)
        .setter("set_weight", |f: &mut Fruit, v: i64| f.weight = v)
        .setter("set_price", |f: &mut Fruit, v: f64| f.price = v)
        .object_setter("set_seed", |f: &mut Fruit, v: Seed| f.seed = Some(v));
    let generator: Generator<Fruit> = Arc::new(|b: &Builder<Fruit>| -> quickbuilder_engine::Result<Fruit> {
        Ok(Fruit {
            name: b.get("name")?,
            weight: b.get("weight")?,
            price: 0.0,
            seed: None,
        })
    });

    let kind = BuilderType::synthesize(fruit_contract(), built, Some(generator)).unwrap();
    let fruit = kind
        .builder()
        .with("name", "plum")
        .unwrap()
        .with("weight", 40)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(fruit.name, "plum");
    assert_eq!(fruit.weight, 40);

    // The zero-argument factory has no hook, and the built type has no
    // default constructor.
    let err = kind.new_builder().build().unwrap_err();
    assert!(matches!(err, Error::NoDefaultConstructor { .. }));
}

#[test]
fn test_generator_errors_propagate() {
    let generator: Generator<Fruit> =
        Arc::new(|_: &Builder<Fruit>| -> quickbuilder_engine::Result<Fruit> {
            Err(Error::generator("out of fruit"))
        });
    let kind = BuilderType::synthesize(fruit_contract(), fruit_built(), Some(generator)).unwrap();

    let err = kind.builder().build().unwrap_err();
    assert_eq!(err.to_string(), "generator failed");
}

#[test]
fn test_nested_builder_slot() {
    let seed = seed_type().new_builder().with("size", 3).unwrap();
    let fruit = fruit_type()
        .new_builder()
        .with_nested("seed", Arc::new(seed) as SharedProvider<Seed>)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(fruit.seed, Some(Seed { size: 3 }));
}

#[test]
fn test_nested_builder_is_rebuilt_each_time() {
    let seed = seed_type().new_builder().with("size", 1).unwrap();
    let builder = fruit_type()
        .new_builder()
        .with_nested("seed", Arc::new(seed) as SharedProvider<Seed>)
        .unwrap();

    let a = builder.build().unwrap();
    let b = builder.build().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_plain_and_builder_slots_are_distinct() {
    let builder = fruit_type().new_builder();

    assert!(matches!(
        builder.with("seed", Value::Null),
        Err(Error::NotAPlainProperty { .. })
    ));
    assert!(matches!(
        builder.with_builder("name", map(elements(["x"]), Value::from)),
        Err(Error::NotABuilderProperty { .. })
    ));
}

#[test]
fn test_immutability_under_with() {
    let b1 = fruit_type().new_builder().with("name", "apple").unwrap();
    let b2 = b1.with("weight", 99).unwrap();

    assert_eq!(b1.build().unwrap().weight, 0);
    assert_eq!(b2.build().unwrap().weight, 99);
    assert_eq!(b2.build().unwrap().name, "apple");
    assert_eq!(b1.changed_slots(&b2), vec!["weight"]);
}

#[test]
fn test_but_then_build_twice() {
    let base = fruit_type()
        .new_builder()
        .with("name", "lime")
        .unwrap()
        .with("price", 0.5f32)
        .unwrap();
    let derived = base.but();

    let first = derived.build().unwrap();
    let second = derived.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.price, 0.5);
}

#[test]
fn test_branching_variants() {
    let base = fruit_type().new_builder().with("weight", 10).unwrap();
    let apple = base.with("name", "apple").unwrap();
    let pear = base.with("name", "pear").unwrap();

    assert_eq!(apple.build().unwrap().name, "apple");
    assert_eq!(pear.build().unwrap().name, "pear");
    assert!(!base.is_set("name"));
}

#[test]
fn test_accessor_coerces_and_reports_unset() {
    let builder = fruit_type().new_builder().with("weight", 5i8).unwrap();

    assert_eq!(builder.value("weight").unwrap(), Value::Long(5));
    assert_eq!(builder.get::<i64>("weight").unwrap(), 5);

    let err = builder.get::<f64>("price").unwrap_err();
    assert_eq!(
        err.to_string(),
        "_price() called, but no value has been set for property price"
    );
}

#[test]
fn test_builder_in_sequence() {
    let builder = fruit_type().new_builder().with("name", "fig").unwrap();
    let fruits = (Arc::new(builder) as SharedProvider<Fruit>)
        .limit(3)
        .build_all()
        .unwrap();

    assert_eq!(fruits.len(), 3);
    assert!(fruits.iter().all(|f| f.name == "fig"));
}

#[test]
fn test_sequence_fills_labels() {
    let names: Vec<Fruit> = as_string(integers_from(1))
        .build_n(3)
        .unwrap()
        .into_iter()
        .map(|label| {
            fruit_type()
                .new_builder()
                .with("name", format!("fruit-{}", label))
                .and_then(|b| b.build())
                .unwrap()
        })
        .collect();

    let labels: Vec<_> = names.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(labels, vec!["fruit-1", "fruit-2", "fruit-3"]);
}

#[test]
fn test_builders_are_shared_across_threads() {
    let builder = fruit_type().new_builder().with("name", "mango").unwrap();

    let names: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| builder.build().unwrap().name))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(names.iter().all(|n| n == "mango"));
}
