use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, docmap::Document)]
#[document(name = "app::Profile")]
struct Profile {
    #[document(field)]
    pub id: Option<ObjectId>,

    #[document(field)]
    pub bio: Option<String>,

    #[document(field)]
    pub age: Option<i32>,

    #[document(field)]
    pub address: Option<Address>,
}

#[test]
fn all_null_object_serializes_to_empty_document() {
    let mapper = mapper!(Profile, Address);

    let document = mapper.serialize(&Profile::default()).unwrap();
    assert_eq!(document, Document::new());
}

#[test]
fn only_null_attributes_are_omitted() {
    let mapper = mapper!(Profile, Address);

    let profile = Profile {
        age: Some(0),
        bio: Some(String::new()),
        ..Profile::default()
    };

    let document = mapper.serialize(&profile).unwrap();
    assert_eq!(document, doc! { "bio": "", "age": 0 });
}

#[test]
fn null_entries_leave_attributes_untouched() {
    let mapper = mapper!(Profile, Address);

    let profile: Profile = mapper
        .hydrate(&doc! { "bio": null, "age": 41, "address": null })
        .unwrap();

    assert_eq!(
        profile,
        Profile {
            age: Some(41),
            ..Profile::default()
        }
    );
}
