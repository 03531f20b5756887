use tests::models::*;
use tests::*;

#[test]
fn scalar_where_document_expected() {
    let mapper = mapper!(User, Address);

    let err = mapper
        .hydrate::<User>(&doc! { "address": "12 Analytical Row" })
        .unwrap_err();

    assert!(err.is_expected_document(), "{err}");
    assert_eq!(
        err.to_string(),
        "expected a document at `blog::User.address`, found string"
    );
}

#[test]
fn array_where_document_expected() {
    let mapper = mapper!(User, Address);

    let err = mapper
        .hydrate::<User>(&doc! { "address": [{ "city": "London" }] })
        .unwrap_err();

    assert!(err.is_expected_document(), "{err}");
}

#[test]
fn document_where_collection_expected() {
    let mapper = mapper!(Post, User, Address, Comment);

    let err = mapper
        .hydrate::<Post>(&doc! { "comments": { "body": "first" } })
        .unwrap_err();

    assert!(err.is_expected_collection(), "{err}");
    assert_eq!(
        err.to_string(),
        "expected a collection at `blog::Post.comments`, found document"
    );
}

#[test]
fn collection_elements_must_be_documents() {
    let mapper = mapper!(Post, User, Address, Comment);

    let err = mapper
        .hydrate::<Post>(&doc! { "comments": [{ "body": "first" }, 42] })
        .unwrap_err();

    assert!(err.is_expected_document(), "{err}");
}

#[test]
fn nested_mismatch_is_reported_at_its_depth() {
    let mapper = mapper!(Post, User, Address, Comment);

    let err = mapper
        .hydrate::<Post>(&doc! { "author": { "name": "Ada", "address": 7 } })
        .unwrap_err();

    assert!(err.is_expected_document(), "{err}");
    assert_eq!(
        err.to_string(),
        "expected a document at `blog::User.address`, found int"
    );
}

#[test]
fn scalar_of_the_wrong_type() {
    let mapper = mapper!(User, Address);

    let err = mapper.hydrate::<User>(&doc! { "name": 42 }).unwrap_err();

    assert!(err.root().is_type_conversion(), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot write `blog::User.name` (key `name`): cannot convert I32 to String"
    );
}

#[test]
fn wrong_scalar_inside_an_embedded_document() {
    let mapper = mapper!(Post, User, Address, Comment);

    let err = mapper
        .hydrate::<Post>(&doc! { "comments": [{ "body": "ok" }, { "likes": "many" }] })
        .unwrap_err();

    assert!(err.root().is_type_conversion(), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot write `blog::Comment.likes` (key `likes`): cannot convert String to i32"
    );
}

#[test]
fn wrong_scalar_behind_a_mutator() {
    let mapper = mapper!(User, Address);

    let err = mapper.hydrate::<User>(&doc! { "mail": true }).unwrap_err();

    assert!(err.root().is_type_conversion(), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot write `blog::User.email` (key `mail`): cannot convert Bool to String"
    );
}
