//! Service container tests
//!
//! Covers the container contract: lazy singleton resolution, duplicate and
//! unknown id failures, cycle detection, tag ordering and retry-after-fault.

use classnav_domain::error::Error;
use classnav_infrastructure::config::AppConfig;
use classnav_infrastructure::di::{Container, ContainerBuilder, Tag};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Widget(#[allow(dead_code)] u32);

fn build(builder: ContainerBuilder) -> Container {
    builder.build(AppConfig::default())
}

#[test]
fn distinct_ids_resolve_to_independent_instances() {
    let mut builder = ContainerBuilder::new();
    builder.register("a", |_| Ok(Arc::new(Widget(1)))).unwrap();
    builder.register("b", |_| Ok(Arc::new(Widget(2)))).unwrap();
    let container = build(builder);

    let a: Arc<Widget> = container.resolve("a").unwrap();
    let b: Arc<Widget> = container.resolve("b").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn repeated_resolution_returns_the_identical_cached_instance() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let counter = constructions.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .register("a", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Widget(1)))
        })
        .unwrap();
    let container = build(builder);

    let first: Arc<Widget> = container.resolve("a").unwrap();
    let second: Arc<Widget> = container.resolve("a").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[test]
fn registration_does_not_invoke_the_factory() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let counter = constructions.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .register("a", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Widget(1)))
        })
        .unwrap();
    let _container = build(builder);

    assert_eq!(constructions.load(Ordering::SeqCst), 0);
}

#[test]
fn duplicate_registration_fails() {
    let mut builder = ContainerBuilder::new();
    builder.register("a", |_| Ok(Arc::new(Widget(1)))).unwrap();
    let err = builder
        .register("a", |_| Ok(Arc::new(Widget(2))))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateService { id } if id == "a"));
}

#[test]
fn unknown_id_fails() {
    let container = build(ContainerBuilder::new());
    let err = container.resolve::<Arc<Widget>>("missing").unwrap_err();
    assert!(matches!(err, Error::UnknownService { id } if id == "missing"));
}

#[test]
fn direct_self_resolution_is_a_circular_dependency() {
    let mut builder = ContainerBuilder::new();
    builder
        .register("a", |container| container.resolve::<Arc<Widget>>("a"))
        .unwrap();
    let container = build(builder);

    let err = container.resolve::<Arc<Widget>>("a").unwrap_err();
    assert!(matches!(err, Error::CircularDependency { ref id, .. } if id == "a"));
}

#[test]
fn transitive_cycle_reports_the_resolution_path() {
    let mut builder = ContainerBuilder::new();
    builder
        .register("a", |container| container.resolve::<Arc<Widget>>("b"))
        .unwrap();
    builder
        .register("b", |container| container.resolve::<Arc<Widget>>("a"))
        .unwrap();
    let container = build(builder);

    let err = container.resolve::<Arc<Widget>>("a").unwrap_err();
    match err {
        Error::CircularDependency { id, path } => {
            assert_eq!(id, "a");
            assert_eq!(path, "a -> b -> a");
        }
        other => panic!("expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn factories_resolve_their_dependencies_through_the_container() {
    struct Composite {
        part: Arc<Widget>,
    }

    let mut builder = ContainerBuilder::new();
    builder
        .register("part", |_| Ok(Arc::new(Widget(7))))
        .unwrap();
    builder
        .register("whole", |container| {
            let part: Arc<Widget> = container.resolve("part")?;
            Ok(Arc::new(Composite { part }))
        })
        .unwrap();
    let container = build(builder);

    let whole: Arc<Composite> = container.resolve("whole").unwrap();
    let part: Arc<Widget> = container.resolve("part").unwrap();
    assert!(Arc::ptr_eq(&whole.part, &part));
}

#[test]
fn tag_retrieval_preserves_registration_order_across_interleaved_tags() {
    let mut builder = ContainerBuilder::new();
    builder
        .register_tagged("one", vec![Tag::new("x")], |_| Ok(Arc::new(Widget(1))))
        .unwrap();
    builder
        .register_tagged("two", vec![Tag::new("y")], |_| Ok(Arc::new(Widget(2))))
        .unwrap();
    builder
        .register_tagged("three", vec![Tag::new("x")], |_| Ok(Arc::new(Widget(3))))
        .unwrap();
    builder
        .register_tagged(
            "four",
            vec![Tag::new("x").with_attribute("name", "last")],
            |_| Ok(Arc::new(Widget(4))),
        )
        .unwrap();
    let container = build(builder);

    let ids: Vec<&str> = container
        .tagged("x")
        .iter()
        .map(|(id, _)| id.as_str())
        .collect();
    assert_eq!(ids, vec!["one", "three", "four"]);
    assert_eq!(
        container.tagged("x")[2].1.get("name").map(String::as_str),
        Some("last")
    );
}

#[test]
fn unknown_tag_is_an_empty_sequence() {
    let container = build(ContainerBuilder::new());
    assert!(container.tagged("nothing").is_empty());
}

#[test]
fn failed_construction_is_not_cached_and_is_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .register("flaky", move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::process("first attempt fails"))
            } else {
                Ok(Arc::new(Widget(1)))
            }
        })
        .unwrap();
    let container = build(builder);

    assert!(container.resolve::<Arc<Widget>>("flaky").is_err());
    assert!(container.resolve::<Arc<Widget>>("flaky").is_ok());
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn resolving_with_the_wrong_type_is_a_service_type_error() {
    let mut builder = ContainerBuilder::new();
    builder.register("a", |_| Ok(Arc::new(Widget(1)))).unwrap();
    let container = build(builder);

    let err = container.resolve::<Arc<String>>("a").unwrap_err();
    assert!(matches!(err, Error::ServiceType { ref id, .. } if id == "a"));
}
