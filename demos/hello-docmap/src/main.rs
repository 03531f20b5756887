use docmap::bson::{doc, oid::ObjectId};
use docmap::{Document, Mapper};

#[derive(Debug, Default, Clone, Document)]
#[document(name = "hello::User")]
struct User {
    #[document(field)]
    pub id: Option<ObjectId>,

    #[document(field)]
    pub name: String,

    #[document(field, key = "mail", get = email, set = set_email)]
    email: String,

    #[document(field, embed)]
    pub todos: Vec<Todo>,

    pub moto: Option<String>,
}

impl User {
    pub fn email(&self) -> &String {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }
}

#[derive(Debug, Default, Clone, Document)]
#[document(name = "hello::Todo")]
struct Todo {
    #[document(field)]
    pub title: String,

    #[document(field)]
    pub done: bool,
}

fn main() -> docmap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = Mapper::builder();
    builder.register::<User>().register::<Todo>();
    let mapper = builder.build()?;

    let mut user = User {
        id: Some(ObjectId::new()),
        name: "John Doe".to_string(),
        moto: Some("not persisted".to_string()),
        ..User::default()
    };
    user.set_email("john@example.com".to_string());
    user.todos.push(Todo {
        title: "finish the demo".to_string(),
        done: false,
    });

    let document = mapper.serialize(&user)?;
    println!("stored = {document}");

    let loaded: User = mapper.hydrate(&document)?;
    println!("loaded = {loaded:#?}");

    // The schema-less view also writes attributes without `field`.
    println!("simple = {}", mapper.simple().serialize(&user)?);

    if let Err(err) = mapper.hydrate::<User>(&doc! { "name": "Jane", "todos": { "title": "oops" } }) {
        println!("error  = {err}");
    }

    Ok(())
}
