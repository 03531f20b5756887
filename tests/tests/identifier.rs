use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, docmap::Document)]
#[document(name = "app::Account")]
struct Account {
    #[document(field, get = id, set = set_id)]
    id: Option<ObjectId>,

    #[document(field)]
    pub owner: String,
}

impl Account {
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<ObjectId>) {
        self.id = id;
    }
}

#[derive(Debug, Default, Clone, docmap::Document)]
#[document(name = "app::Ticket")]
struct Ticket {
    #[document(field, get = id)]
    id: Option<ObjectId>,
}

impl Ticket {
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }
}

#[test]
fn id_is_stored_under_reserved_key() {
    let mapper = mapper!(User, Address);

    let id = ObjectId::new();
    let mut user = User::new("Ada", "ada@example.com");
    user.id = Some(id);

    let document = mapper.serialize(&user).unwrap();
    assert_eq!(document.get_object_id("_id").unwrap(), id);
    assert!(!document.contains_key("id"));

    let map = mapper.map_of::<User>().unwrap();
    assert_eq!(map.attribute_for("_id"), Some("id"));
    assert_eq!(map.storage_key_for("id"), Some("_id"));
}

#[test]
fn id_only_document_leaves_other_attributes_unset() {
    let mapper = mapper!(User, Address);

    let id = ObjectId::new();
    let user: User = mapper.hydrate(&doc! { "_id": id }).unwrap();

    let mut expected = User::default();
    expected.id = Some(id);
    assert_eq!(user, expected);
}

#[test]
fn private_identifier_through_methods() {
    let mapper = mapper!(Account);

    let id = ObjectId::new();
    let account: Account = mapper
        .hydrate(&doc! { "_id": id, "owner": "ada" })
        .unwrap();

    assert_eq!(account.id(), Some(id));
    assert_eq!(
        mapper.serialize(&account).unwrap(),
        doc! { "_id": id, "owner": "ada" }
    );
}

#[test]
fn identifier_needs_a_mutator() {
    init_tracing();

    let err = docmap::Mapper::builder()
        .register::<Ticket>()
        .build()
        .unwrap_err();

    assert!(err.is_invalid_identifier(), "{err}");
}
