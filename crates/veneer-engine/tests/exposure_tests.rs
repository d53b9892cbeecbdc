//! Member exposure behavior tests
//!
//! Covers hiding, renaming, property shadowing, synthetic property
//! registration and idempotent model building.
//!
//! # Running Tests
//! ```bash
//! cargo test --test exposure_tests
//! ```

use veneer_engine::{
    tuner_fn, ClassShape, ExposureConfig, Member, MemberModelBuilder, MethodSignature,
    NativeClass, PropertyDescriptor, SignatureOrderer,
};

fn sig(name: &str, ret: &str) -> MethodSignature {
    MethodSignature::new("demo.Person", name, ret)
}

/// `demo.Person` with a real `name` property, a same-named method, and an
/// overloaded `greet`.
fn person() -> ClassShape {
    ClassShape::new(NativeClass::new(1, "demo.Person"))
        .declare(sig("getName", "java.lang.String"))
        .declare(sig("name", "java.lang.String"))
        .declare(sig("greet", "java.lang.String"))
        .declare(sig("greet", "java.lang.String").param("java.lang.String"))
        .declare(sig("age", "int"))
        .declare(sig("nickname", "java.lang.String"))
        .with_property(PropertyDescriptor::read_only(
            "name",
            sig("getName", "java.lang.String"),
        ))
}

// ===== Hiding =====

#[test]
fn test_hidden_method_absent_under_any_name() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "age" {
            d.hidden()
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    let age = sig("age", "int");
    assert!(model.get("age").is_none());
    assert_eq!(model.method_names_of(&age).count(), 0);
    for (_, member) in model.iter() {
        if let Member::Property(prop) = member {
            assert!(!prop.accessors.methods().any(|m| m == &age));
        }
    }
}

// ===== Renaming =====

#[test]
fn test_renamed_method_reachable_only_under_new_name() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "age" {
            d.exposed_as("years")
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    let age = sig("age", "int");
    assert!(model.get("age").is_none());
    assert!(model.method_group("years").unwrap().contains(&age));
    assert_eq!(model.method_names_of(&age).collect::<Vec<_>>(), vec!["years"]);
}

#[test]
fn test_rename_into_existing_group_forms_overloads() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "nickname" {
            d.exposed_as("greet")
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    let greet = model.method_group("greet").unwrap();
    assert_eq!(greet.len(), 3);
    assert!(greet.contains(&sig("nickname", "java.lang.String")));
    assert!(model.get("nickname").is_none());
}

// ===== Shadowing =====

#[test]
fn test_method_shadows_property_by_default() {
    let model = MemberModelBuilder::default().build(&person());

    let member = model.get("name").unwrap();
    assert!(matches!(member, Member::Methods(_)));
    // Still registered internally for diagnostics
    assert_eq!(
        model.shadowed_property("name").unwrap().read_method(),
        Some(&sig("getName", "java.lang.String"))
    );
}

#[test]
fn test_property_wins_when_method_does_not_shadow() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "name" {
            d.shadowing_property(false)
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    let prop = model.property("name").unwrap();
    assert!(!prop.is_synthetic());
    assert!(model.shadowed_property("name").is_none());
    // The method is unreachable by name
    assert_eq!(model.method_names_of(&sig("name", "java.lang.String")).count(), 0);
}

#[test]
fn test_renamed_method_shadows_real_property() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.name() {
        "age" => d.exposed_as("name"),
        "name" => d.hidden(),
        _ => d,
    }));
    let model = builder.build(&person());

    let group = model.method_group("name").unwrap();
    assert_eq!(group.len(), 1);
    assert!(group.contains(&sig("age", "int")));
}

#[test]
fn test_only_shadowing_methods_survive_collision() {
    // Both greet overloads renamed onto the property; only one shadows
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match (m.name(), m.arity()) {
        ("greet", 0) => d.exposed_as("name").shadowing_property(false),
        ("greet", _) => d.exposed_as("name"),
        ("name", _) => d.hidden(),
        _ => d,
    }));
    let model = builder.build(&person());

    let group = model.method_group("name").unwrap();
    assert_eq!(group.len(), 1);
    assert!(group.contains(&sig("greet", "java.lang.String").param("java.lang.String")));
    assert!(model.shadowed_property("name").is_some());
}

// ===== Synthetic properties =====

#[test]
fn test_synthetic_property_first_registration_wins() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.name() {
        "age" | "nickname" => d
            .with_synthetic_property(PropertyDescriptor::read_only("q", m.signature.clone())),
        _ => d,
    }));
    let model = builder.build(&person());

    let q = model.property("q").unwrap();
    // `age` is declared before `nickname`
    assert_eq!(q.synthetic_source(), Some(&sig("age", "int")));
    assert_eq!(q.read_method(), Some(&sig("age", "int")));
    // Both methods stay callable under their own names
    assert!(model.method_group("age").is_some());
    assert!(model.method_group("nickname").is_some());
}

#[test]
fn test_synthetic_property_never_replaces_real_property() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "nickname" {
            d.with_synthetic_property(PropertyDescriptor::read_only("name", m.signature.clone()))
                .exposed_as("nick")
        } else if m.name() == "name" {
            d.hidden()
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    let prop = model.property("name").unwrap();
    assert!(!prop.is_synthetic());
    assert_eq!(prop.read_method(), Some(&sig("getName", "java.lang.String")));
}

#[test]
fn test_method_and_property_under_different_names() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "age" {
            d.with_synthetic_property(PropertyDescriptor::read_only("years", m.signature.clone()))
        } else {
            d
        }
    }));
    let model = builder.build(&person());

    assert!(model.method_group("age").is_some());
    assert!(model.property("years").unwrap().is_synthetic());
}

#[test]
fn test_other_method_shadows_synthetic_property() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.name() {
        "age" => d.with_synthetic_property(PropertyDescriptor::read_only(
            "nickname",
            m.signature.clone(),
        )),
        _ => d,
    }));
    let model = builder.build(&person());

    // nickname() did not create the property, so it shadows it
    assert!(model.method_group("nickname").is_some());
    assert!(model.shadowed_property("nickname").unwrap().is_synthetic());
}

#[test]
fn test_synthetic_property_wins_when_method_does_not_shadow() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.name() {
        "age" => d.with_synthetic_property(PropertyDescriptor::read_only(
            "nickname",
            m.signature.clone(),
        )),
        "nickname" => d.shadowing_property(false),
        _ => d,
    }));
    let model = builder.build(&person());

    let prop = model.property("nickname").unwrap();
    assert_eq!(prop.synthetic_source(), Some(&sig("age", "int")));
    assert!(model.shadowed_property("nickname").is_none());
    assert_eq!(model.method_names_of(&sig("nickname", "java.lang.String")).count(), 0);
    // age() itself stays callable under its own name
    assert!(model.method_group("age").unwrap().contains(&sig("age", "int")));
}

// ===== End-to-end =====

#[test]
fn test_box_size_exposed_as_property() {
    let size = MethodSignature::new("demo.Box", "size", "int");
    let shape = ClassShape::new(NativeClass::new(2, "demo.Box")).declare(size.clone());

    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "size" {
            d.with_synthetic_property(PropertyDescriptor::read_only("size", m.signature.clone()))
        } else {
            d
        }
    }));
    let model = builder.build(&shape);

    let prop = model.property("size").unwrap();
    assert!(prop.is_synthetic());
    assert_eq!(prop.read_method(), Some(&size));
    assert!(model.method_group("size").is_none());
    assert_eq!(model.len(), 1);
}

#[test]
fn test_config_driven_box_size() {
    let config = ExposureConfig::from_str(
        r#"
[[rules]]
class = "demo.Box"
method = "size"
arity = 0
property = "size"
"#,
    )
    .unwrap();
    let size = MethodSignature::new("demo.Box", "size", "int");
    let shape = ClassShape::new(NativeClass::new(2, "demo.Box")).declare(size.clone());

    let model = config.builder().build(&shape);
    assert_eq!(model.property("size").unwrap().read_method(), Some(&size));
    assert!(model.method_group("size").is_none());
}

// ===== Determinism =====

#[test]
fn test_build_is_idempotent() {
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.name() {
        "age" => {
            d.with_synthetic_property(PropertyDescriptor::read_only("years", m.signature.clone()))
        }
        "nickname" => d.exposed_as("greet"),
        _ => d,
    }));
    let shape = person();
    assert_eq!(builder.build(&shape), builder.build(&shape));

    let mut reversed = person();
    reversed.methods.reverse();
    assert_eq!(builder.build(&shape), builder.build(&reversed));
}

#[test]
fn test_overload_group_order_is_stable() {
    let model = MemberModelBuilder::default().build(&person());
    let greet = model.method_group("greet").unwrap();

    let asc: Vec<String> = greet
        .ordered(&SignatureOrderer::ascending())
        .iter()
        .map(|m| m.signature_text())
        .collect();
    assert_eq!(
        asc,
        vec![
            "java.lang.String demo.Person.greet()",
            "java.lang.String demo.Person.greet(java.lang.String)",
        ]
    );

    let mut desc: Vec<String> = greet
        .ordered(&SignatureOrderer::descending())
        .iter()
        .map(|m| m.signature_text())
        .collect();
    desc.reverse();
    assert_eq!(asc, desc);
}

// ===== Overloads against a synthetic property =====

/// `demo.Box` whose `size()` declares a synthetic "size" next to a
/// `size(int)` overload.
fn sized_box() -> ClassShape {
    ClassShape::new(NativeClass::new(3, "demo.Box"))
        .declare(MethodSignature::new("demo.Box", "size", "int"))
        .declare(MethodSignature::new("demo.Box", "size", "void").param("int"))
}

fn size_property_builder() -> MemberModelBuilder {
    MemberModelBuilder::new(tuner_fn(|_, m, d| {
        if m.name() == "size" && m.arity() == 0 {
            d.with_synthetic_property(PropertyDescriptor::read_only("size", m.signature.clone()))
        } else {
            d
        }
    }))
}

#[test]
fn test_overload_keeps_synthetic_source_in_group() {
    let getter = MethodSignature::new("demo.Box", "size", "int");
    let setter = MethodSignature::new("demo.Box", "size", "void").param("int");
    let model = size_property_builder().build(&sized_box());

    // size(int) shadows the property, and size() stays in the same group
    let group = model.method_group("size").unwrap();
    assert_eq!(group.len(), 2);
    assert!(group.contains(&getter));
    assert!(group.contains(&setter));
    assert_eq!(model.method_names_of(&getter).collect::<Vec<_>>(), vec!["size"]);
    assert_eq!(
        model.shadowed_property("size").and_then(|p| p.synthetic_source()),
        Some(&getter)
    );
}

#[test]
fn test_yielding_overload_leaves_name_to_synthetic_property() {
    let getter = MethodSignature::new("demo.Box", "size", "int");
    let builder = MemberModelBuilder::new(tuner_fn(|_, m, d| match m.arity() {
        0 => d.with_synthetic_property(PropertyDescriptor::read_only("size", m.signature.clone())),
        _ => d.shadowing_property(false),
    }));
    let model = builder.build(&sized_box());

    assert!(model.method_group("size").is_none());
    assert_eq!(model.property("size").unwrap().read_method(), Some(&getter));
    assert!(model.shadowed_property("size").is_none());
}
