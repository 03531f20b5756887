use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

fn user() -> User {
    let mut user = User::new("Ada", "ada@example.com");
    user.id = Some(ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap());
    user.set_active(true);
    user.tags = vec!["admin".to_string(), "math".to_string()];
    user.address = Some(Address {
        street: "12 Analytical Row".to_string(),
        city: "London".to_string(),
        zip_code: None,
    });
    user
}

#[test]
fn serialize_flat_and_embedded_document() {
    let mapper = mapper!(User, Address);
    let user = user();

    let document = mapper.serialize(&user).unwrap();

    assert_eq!(
        document,
        doc! {
            "_id": user.id.unwrap(),
            "name": "Ada",
            "mail": "ada@example.com",
            "active": true,
            "address": {
                "street": "12 Analytical Row",
                "city": "London",
            },
            "tags": ["admin", "math"],
        }
    );
}

#[test]
fn user_round_trip() {
    let mapper = mapper!(User, Address);
    let user = user();

    let document = mapper.serialize(&user).unwrap();
    let hydrated: User = mapper.hydrate(&document).unwrap();

    assert_eq!(hydrated, user);
}

#[test]
fn post_round_trip_with_collection() {
    let mapper = mapper!(Post, User, Address, Comment);

    let post = Post {
        id: Some(ObjectId::new()),
        title: "Notes on the Engine".to_string(),
        author: Some(user()),
        comments: vec![Comment::new("first", 3), Comment::new("second", 0)],
        views: 1 << 40,
    };

    let document = mapper.serialize(&post).unwrap();

    assert_eq!(
        document.get_array("comments").unwrap(),
        &vec![
            Bson::Document(doc! { "body": "first", "likes": 3 }),
            Bson::Document(doc! { "body": "second", "likes": 0 }),
        ]
    );
    assert_eq!(document.get_i64("views").unwrap(), 1 << 40);
    assert_eq!(
        document
            .get_document("author")
            .unwrap()
            .get_document("address")
            .unwrap()
            .get_str("city")
            .unwrap(),
        "London"
    );

    let hydrated: Post = mapper.hydrate(&document).unwrap();
    assert_eq!(hydrated, post);
}

#[test]
fn native_values_pass_through() {
    let mapper = mapper!(User, Address);

    let mut user = User::new("Ada", "ada@example.com");
    let joined_at = bson::DateTime::from_millis(1_700_000_000_000);
    user.joined_at = Some(joined_at);

    let document = mapper.serialize(&user).unwrap();
    assert_eq!(document.get("joinedAt"), Some(&Bson::DateTime(joined_at)));

    let hydrated: User = mapper.hydrate(&document).unwrap();
    assert_eq!(hydrated.joined_at, Some(joined_at));
}

#[test]
fn undeclared_fields_are_not_persisted() {
    let mapper = mapper!(User, Address);

    let mut user = User::new("Ada", "ada@example.com");
    user.nickname = Some("countess".to_string());
    user.session = Some(7);

    let document = mapper.serialize(&user).unwrap();
    assert!(!document.contains_key("nickname"));
    assert!(!document.contains_key("session"));

    let hydrated: User = mapper.hydrate(&document).unwrap();
    assert_eq!(hydrated.nickname, None);
    assert_eq!(hydrated.session, None);
}

#[test]
fn serialize_value_requires_an_object() {
    let mapper = mapper!(User, Address);

    let document = mapper.serialize_value(&Value::object(user())).unwrap();
    assert_eq!(document.get_str("name").unwrap(), "Ada");

    let err = mapper.serialize_value(&Value::from("Ada")).unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");
}
