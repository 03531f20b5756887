use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::Event")]
struct Event {
    pub id: Option<ObjectId>,

    pub kind: String,

    pub location: Option<Address>,

    #[document(field, embed)]
    pub comments: Vec<Comment>,

    secret: String,

    #[document(extra)]
    extra: IndexMap<String, Value>,
}

fn mapper(schemaless: bool) -> docmap::Mapper {
    init_tracing();

    docmap::Mapper::builder()
        .register::<Event>()
        .register::<Address>()
        .register::<Comment>()
        .register::<User>()
        .schemaless(schemaless)
        .build()
        .unwrap()
}

#[test]
fn every_reachable_attribute_is_serialized() {
    let simple = mapper(false).simple();

    let event = Event {
        kind: "visit".to_string(),
        location: Some(Address {
            city: "Paris".to_string(),
            ..Address::default()
        }),
        comments: vec![Comment::new("nice", 2)],
        secret: "hidden".to_string(),
        ..Event::default()
    };

    assert_eq!(
        simple.serialize(&event).unwrap(),
        doc! {
            "kind": "visit",
            "location": { "street": "", "city": "Paris" },
            "comments": [{ "body": "nice", "likes": 2 }],
        }
    );
}

#[test]
fn unannotated_attributes_and_private_methods() {
    let simple = mapper(false).simple();

    let mut user = User::new("Ada", "ada@example.com");
    user.nickname = Some("countess".to_string());
    user.session = Some(3);

    let document = simple.serialize(&user).unwrap();

    assert_eq!(document.get_str("mail").unwrap(), "ada@example.com");
    assert_eq!(document.get_bool("active").unwrap(), false);
    assert_eq!(document.get_str("nickname").unwrap(), "countess");
    assert!(!document.contains_key("session"));

    let hydrated: User = simple.hydrate(&document).unwrap();
    assert_eq!(hydrated.email(), "ada@example.com");
    assert_eq!(hydrated.nickname.as_deref(), Some("countess"));
    assert_eq!(hydrated.session, None);
}

#[test]
fn nested_documents_are_hydrated() {
    let simple = mapper(false).simple();

    let event: Event = simple
        .hydrate(&doc! {
            "kind": "visit",
            "location": { "city": "Paris", "zipCode": "75001" },
            "comments": [{ "body": "a" }, { "body": "b", "likes": 4 }],
        })
        .unwrap();

    assert_eq!(
        event.location,
        Some(Address {
            street: String::new(),
            city: "Paris".to_string(),
            zip_code: Some("75001".to_string()),
        })
    );
    assert_eq!(event.comments, vec![Comment::new("a", 0), Comment::new("b", 4)]);
}

#[test]
fn schemaless_mode_keeps_undeclared_keys() {
    let simple = mapper(true).simple();
    assert!(simple.is_schemaless());

    let event: Event = simple
        .hydrate(&doc! { "kind": "visit", "browser": "firefox", "retries": 2 })
        .unwrap();

    assert_eq!(event.kind, "visit");
    assert_eq!(event.extra.len(), 2);
    assert_eq!(event.extra["browser"].as_str(), Some("firefox"));
    assert!(matches!(event.extra["retries"], Value::I32(2)));

    assert_eq!(
        simple.serialize(&event).unwrap(),
        doc! { "kind": "visit", "comments": [], "browser": "firefox", "retries": 2 }
    );
}

#[test]
fn undeclared_keys_are_dropped_otherwise() {
    let simple = mapper(false).simple();

    let event: Event = simple
        .hydrate(&doc! { "kind": "visit", "browser": "firefox" })
        .unwrap();

    assert!(event.extra.is_empty());
}

#[test]
fn classes_without_a_sink_drop_undeclared_keys() {
    let simple = mapper(true).simple();

    let comment: Comment = simple
        .hydrate(&doc! { "body": "hi", "flagged": true })
        .unwrap();

    assert_eq!(comment, Comment::new("hi", 0));
}

#[test]
fn shape_mismatch() {
    let simple = mapper(false).simple();

    let err = simple
        .hydrate::<Event>(&doc! { "location": "Paris" })
        .unwrap_err();
    assert!(err.is_expected_document(), "{err}");

    let err = simple
        .hydrate::<Event>(&doc! { "comments": { "body": "a" } })
        .unwrap_err();
    assert!(err.is_expected_collection(), "{err}");
}

#[test]
fn unregistered_class() {
    let simple = docmap::Mapper::builder().build().unwrap().simple();

    let err = simple
        .serialize(&Comment::new("hi", 0))
        .unwrap_err();
    assert!(err.is_unknown_class(), "{err}");
}

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::Alias")]
struct Alias {
    #[document(field, key = "nickName")]
    pub alias: String,

    pub nick_name: String,
}

#[test]
fn first_attribute_owns_a_shared_key() {
    init_tracing();

    let mapper = docmap::Mapper::builder().register::<Alias>().build().unwrap();
    let simple = mapper.simple();

    let alias = Alias {
        alias: "first".to_string(),
        nick_name: "second".to_string(),
    };
    assert_eq!(simple.serialize(&alias).unwrap(), doc! { "nickName": "first" });

    let alias: Alias = simple.hydrate(&doc! { "nickName": "stored" }).unwrap();
    assert_eq!(alias.alias, "stored");
    assert_eq!(alias.nick_name, "");
}

#[test]
fn conversion_errors_name_the_attribute() {
    let simple = mapper(false).simple();

    let err = simple
        .hydrate::<Comment>(&doc! { "likes": "many" })
        .unwrap_err();

    assert!(err.root().is_type_conversion(), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot write `blog::Comment.likes` (key `likes`): cannot convert String to i32"
    );
}
