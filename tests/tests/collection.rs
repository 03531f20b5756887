use tests::models::*;
use tests::*;

use pretty_assertions::assert_eq;

fn post(comments: Vec<Comment>) -> Post {
    Post {
        title: "Sketch".to_string(),
        comments,
        ..Post::default()
    }
}

#[test]
fn order_is_preserved() {
    let mapper = mapper!(Post, User, Address, Comment);

    let comments = vec![
        Comment::new("one", 1),
        Comment::new("two", 2),
        Comment::new("three", 3),
    ];

    let document = mapper.serialize(&post(comments.clone())).unwrap();

    let bodies: Vec<_> = document
        .get_array("comments")
        .unwrap()
        .iter()
        .map(|item| item.as_document().unwrap().get_str("body").unwrap())
        .collect();
    assert_eq!(bodies, ["one", "two", "three"]);

    let hydrated: Post = mapper.hydrate(&document).unwrap();
    assert_eq!(hydrated.comments, comments);
}

#[test]
fn empty_collection() {
    let mapper = mapper!(Post, User, Address, Comment);

    let document = mapper.serialize(&post(vec![])).unwrap();
    assert_eq!(document.get_array("comments").unwrap(), &Vec::<Bson>::new());

    let hydrated: Post = mapper.hydrate(&document).unwrap();
    assert!(hydrated.comments.is_empty());
}

#[test]
fn elements_are_hydrated_through_the_element_map() {
    let mapper = mapper!(Post, User, Address, Comment);

    let post: Post = mapper
        .hydrate(&doc! {
            "title": "Sketch",
            "comments": [
                { "body": "a", "likes": 1, "flagged": true },
                { "body": "b" },
            ],
        })
        .unwrap();

    assert_eq!(
        post.comments,
        vec![Comment::new("a", 1), Comment::new("b", 0)]
    );
}
