use tests::models::*;
use tests::*;

use docmap::class::{Class, Constructor};
use docmap::format::Case;
use docmap::{Cache, CaseFormatter, MemoryCache};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::Node")]
struct Node {
    #[document(field)]
    pub label: String,

    #[document(field, embed)]
    pub children: Vec<Node>,
}

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::A")]
struct A {
    #[document(field)]
    pub b: Option<B>,
}

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::B")]
struct B {
    #[document(field, embed)]
    pub items: Vec<A>,
}

#[test]
fn self_embedding_class_is_rejected() {
    init_tracing();

    let err = docmap::Mapper::builder()
        .register::<Node>()
        .build()
        .unwrap_err();

    assert!(err.is_cyclic_dependency(), "{err}");
    assert_eq!(err.to_string(), "cyclic dependency: app::Node -> app::Node");
}

#[test]
fn mutually_embedding_classes_are_rejected() {
    init_tracing();

    let err = docmap::Mapper::builder()
        .register::<A>()
        .register::<B>()
        .build()
        .unwrap_err();

    assert!(err.is_cyclic_dependency(), "{err}");
    assert_eq!(err.to_string(), "cyclic dependency: app::A -> app::B -> app::A");
}

#[test]
fn maps_are_built_eagerly_and_cached() {
    init_tracing();

    let cache = Arc::new(MemoryCache::new());

    let mapper = docmap::Mapper::builder()
        .register::<User>()
        .register::<Address>()
        .shared_cache(cache.clone())
        .build()
        .unwrap();

    assert_eq!(cache.len(), 2);
    assert!(cache.contains("blog::User"));
    assert!(cache.contains("blog::Address"));

    let first = mapper.map_of::<User>().unwrap();
    let second = mapper.map_for("blog::User").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.class_name(), "blog::User");
}

#[test]
fn deleted_maps_are_rebuilt() {
    init_tracing();

    let cache = Arc::new(MemoryCache::new());

    let mapper = docmap::Mapper::builder()
        .register::<Comment>()
        .shared_cache(cache.clone())
        .build()
        .unwrap();

    let before = mapper.map_of::<Comment>().unwrap();
    cache.delete("blog::Comment");
    assert!(cache.is_empty());

    let after = mapper.map_of::<Comment>().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.keys().collect::<Vec<_>>(), ["body", "likes"]);
    assert!(cache.contains("blog::Comment"));
}

#[test]
fn expired_maps_are_rebuilt() {
    init_tracing();

    let cache = Arc::new(MemoryCache::new());

    let mapper = docmap::Mapper::builder()
        .register::<Comment>()
        .shared_cache(cache.clone())
        .cache_ttl(Duration::ZERO)
        .build()
        .unwrap();

    assert!(cache.is_empty());

    let comment = mapper
        .hydrate::<Comment>(&doc! { "body": "hi", "likes": 1 })
        .unwrap();
    assert_eq!(comment, Comment::new("hi", 1));
}

#[test]
fn custom_formatter() {
    init_tracing();

    let mapper = docmap::Mapper::builder()
        .register::<User>()
        .register::<Address>()
        .formatter(CaseFormatter::new(Case::Snake, Case::Snake))
        .build()
        .unwrap();

    let mut user = User::new("Ada", "ada@example.com");
    user.address = Some(Address {
        street: "Main".to_string(),
        city: "London".to_string(),
        zip_code: Some("N1".to_string()),
    });

    let document = mapper.serialize(&user).unwrap();

    assert_eq!(
        document,
        doc! {
            "name": "Ada",
            "mail": "ada@example.com",
            "active": false,
            "address": { "street": "Main", "city": "London", "zip_code": "N1" },
            "tags": [],
        }
    );

    let map = mapper.map_of::<User>().unwrap();
    assert_eq!(map.storage_key_for("joined_at"), Some("joined_at"));
    assert_eq!(map.storage_key_for("id"), Some("_id"));

    assert_eq!(mapper.hydrate::<User>(&document).unwrap(), user);
}

#[test]
fn classes_without_a_default_constructor_cannot_be_hydrated() {
    init_tracing();

    let mapper = docmap::Mapper::builder()
        .register_class(
            Class::builder("app::Money")
                .constructor(Constructor::RequiresArgs(2))
                .build(),
        )
        .register_class(Class::builder("app::Opaque").build())
        .build()
        .unwrap();

    let err = mapper.hydrate_class("app::Money", &doc! {}).unwrap_err();
    assert!(err.is_unsupported_constructor(), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot instantiate `app::Money`: constructor requires 2 argument(s)"
    );

    let err = mapper.hydrate_class("app::Opaque", &doc! {}).unwrap_err();
    assert!(err.is_unsupported_constructor(), "{err}");
}

#[test]
fn hydrating_with_another_class_map() {
    let mapper = mapper!(Comment, Address);

    let map = mapper.map_of::<Address>().unwrap();

    let err = mapper
        .hydrate_with(&map, &doc! { "body": "hi" }, "blog::Comment")
        .unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");
}

#[test]
fn serializing_an_unregistered_class() {
    let mapper = mapper!(Address);

    let err = mapper.serialize(&Comment::new("hi", 0)).unwrap_err();
    assert!(err.is_unknown_class(), "{err}");

    let err = mapper.hydrate::<Comment>(&doc! {}).unwrap_err();
    assert!(err.is_unknown_class(), "{err}");
}
