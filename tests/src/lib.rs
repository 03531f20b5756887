pub mod models;

pub use bson::{doc, oid::ObjectId, Bson, Document};
pub use docmap::{Error, Mapper, Value};
pub use indexmap::IndexMap;

use tracing_subscriber::filter::LevelFilter;

/// Builds a mapper with the given document types registered.
#[macro_export]
macro_rules! mapper {
    (
        $( $ty:ty ),*
    ) => {{
        $crate::init_tracing();

        let mut builder = docmap::Mapper::builder();
        $( builder.register::<$ty>(); )*
        builder.build().unwrap()
    }};
}

/// Routes mapper logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
