//! Document types shared by the integration tests.

use bson::{oid::ObjectId, DateTime};
use docmap::Document;

#[derive(Debug, Default, Clone, PartialEq, Document)]
#[document(name = "blog::User")]
pub struct User {
    #[document(field)]
    pub id: Option<ObjectId>,

    #[document(field)]
    pub name: String,

    #[document(field, key = "mail", get = email, set = set_email)]
    email: String,

    #[document(field, get = is_active, set = set_active)]
    active: bool,

    #[document(field)]
    pub address: Option<Address>,

    #[document(field)]
    pub tags: Vec<String>,

    #[document(field)]
    pub joined_at: Option<DateTime>,

    /// Not persisted by the strict mapper
    pub nickname: Option<String>,

    #[document(skip)]
    pub session: Option<u32>,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            ..Self::default()
        }
    }

    pub fn email(&self) -> &String {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Debug, Default, Clone, PartialEq, Document)]
#[document(name = "blog::Address")]
pub struct Address {
    #[document(field)]
    pub street: String,

    #[document(field)]
    pub city: String,

    #[document(field)]
    pub zip_code: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Document)]
#[document(name = "blog::Post")]
pub struct Post {
    #[document(field)]
    pub id: Option<ObjectId>,

    #[document(field)]
    pub title: String,

    #[document(field)]
    pub author: Option<User>,

    #[document(field, embed)]
    pub comments: Vec<Comment>,

    #[document(field)]
    pub views: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Document)]
#[document(name = "blog::Comment")]
pub struct Comment {
    #[document(field)]
    pub body: String,

    #[document(field)]
    pub likes: i32,
}

impl Comment {
    pub fn new(body: &str, likes: i32) -> Self {
        Self {
            body: body.to_string(),
            likes,
        }
    }
}
