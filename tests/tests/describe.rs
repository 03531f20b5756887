use tests::models::*;

use docmap::class::{Annotation, Describe};
use pretty_assertions::assert_eq;

#[test]
fn derived_class_descriptor() {
    let class = User::describe();

    assert_eq!(class.name(), "blog::User");
    assert!(class.constructor().is_default());
    assert!(class.extra().is_none());

    let names: Vec<_> = class.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        ["id", "name", "email", "active", "address", "tags", "joined_at", "nickname"]
    );

    let persistable: Vec<_> = class.persistable().map(|a| a.name.as_str()).collect();
    assert_eq!(persistable.len(), 7);
    assert!(!persistable.contains(&"nickname"));
}

#[test]
fn annotations_follow_field_options() {
    let class = User::describe();

    let email = class.attribute("email").unwrap();
    assert!(!email.is_public());
    assert!(email.access.is_none());
    assert_eq!(email.explicit_key(), Some("mail"));
    assert_eq!(email.type_token(), Some("string"));

    let address = class.attribute("address").unwrap();
    assert!(address.is_public());
    assert_eq!(address.type_token(), Some("blog::Address"));

    let id = class.attribute("id").unwrap();
    assert_eq!(id.type_token(), Some("bson::oid::ObjectId"));

    let nickname = class.attribute("nickname").unwrap();
    assert!(!nickname.is_persistable());
    assert_eq!(nickname.annotations.len(), 1);

    let comments = Post::describe();
    let comments = comments.attribute("comments").unwrap();
    assert_eq!(comments.type_token(), Some("array"));
    assert_eq!(comments.embed_token(), Some("blog::Comment"));
    assert!(comments.annotations.iter().any(Annotation::is_field));
}

#[test]
fn accessor_methods_are_described() {
    let class = User::describe();

    let names: Vec<_> = class.methods().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["email", "set_email", "is_active", "set_active"]);

    let getter = class.method("is_active").unwrap();
    assert!(getter.is_public());
    assert_eq!(getter.required_params, 0);

    let setter = class.method("set_email").unwrap();
    assert_eq!(setter.required_params, 1);

    let mut user = User::new("Ada", "old@example.com");
    (setter.as_setter().unwrap())(&mut user, "new@example.com".into()).unwrap();
    assert_eq!(user.email(), "new@example.com");

    let value = (class.method("email").unwrap().as_getter().unwrap())(&user).unwrap();
    assert_eq!(value.as_str(), Some("new@example.com"));
}
