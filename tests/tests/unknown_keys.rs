use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

#[test]
fn strict_mapper_ignores_unknown_keys() {
    let mapper = mapper!(User, Address);

    let user: User = mapper
        .hydrate(&doc! {
            "name": "Ada",
            "legacyRole": "admin",
            "nickname": "countess",
            "address": { "city": "London", "country": "UK" },
        })
        .unwrap();

    let mut expected = User::new("Ada", "");
    expected.address = Some(Address {
        city: "London".to_string(),
        ..Address::default()
    });

    assert_eq!(user, expected);
}

#[test]
fn attribute_names_are_not_storage_keys() {
    let mapper = mapper!(User, Address);

    // `email` is stored under `mail`; `joined_at` under `joinedAt`
    let user: User = mapper
        .hydrate(&doc! { "email": "ada@example.com", "joined_at": 1 })
        .unwrap();

    assert_eq!(user.email(), "");
    assert_eq!(user.joined_at, None);
}
