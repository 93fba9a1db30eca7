use quotesheet::state::gallery::{ImageGallery, ImageUpload};

fn upload(name: &str) -> ImageUpload {
    ImageUpload {
        name: name.to_string(),
        size: 2048,
        mime: "image/png".to_string(),
        data_url: format!("data:image/png;base64,{name}"),
    }
}

fn names(gallery: &ImageGallery) -> Vec<String> {
    gallery
        .images()
        .iter()
        .map(|image| image.upload.name.clone())
        .collect()
}

fn gallery_of(items: &[&str]) -> ImageGallery {
    let mut gallery = ImageGallery::new();
    for name in items {
        gallery.add(upload(name));
    }
    gallery
}

#[test]
fn test_ids_keep_increasing_after_remove_and_clear() {
    let mut gallery = ImageGallery::new();
    let first = gallery.add(upload("a"));
    let second = gallery.add(upload("b"));
    assert!(second > first);

    assert!(gallery.remove(second));
    let third = gallery.add(upload("c"));
    assert!(third > second);

    assert_eq!(gallery.clear(), 2);
    assert!(gallery.is_empty());
    let fourth = gallery.add(upload("d"));
    assert!(fourth > third);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut gallery = gallery_of(&["a"]);
    assert!(!gallery.remove(999));
    assert_eq!(gallery.len(), 1);
}

#[test]
fn test_move_up_and_down() {
    let mut gallery = gallery_of(&["a", "b", "c"]);
    assert!(gallery.move_up(2));
    assert_eq!(names(&gallery), vec!["a", "c", "b"]);
    assert!(gallery.move_down(0));
    assert_eq!(names(&gallery), vec!["c", "a", "b"]);

    assert!(!gallery.move_up(0));
    assert!(!gallery.move_down(2));
    assert_eq!(names(&gallery), vec!["c", "a", "b"]);
}

#[test]
fn test_drop_onto_moves_dragged_image() {
    let mut gallery = gallery_of(&["a", "b", "c", "d"]);
    let dragged = gallery.images()[0].id;

    assert!(gallery.drop_onto(dragged, 2));
    assert_eq!(names(&gallery), vec!["b", "c", "a", "d"]);
    assert_eq!(gallery.position(dragged), Some(2));

    assert!(!gallery.drop_onto(dragged, 2));
    assert!(!gallery.drop_onto(dragged, 10));
    assert!(!gallery.drop_onto(12345, 0));
}

#[test]
fn test_sources_follow_gallery_order() {
    let mut gallery = gallery_of(&["a", "b"]);
    gallery.move_image(1, 0);
    assert_eq!(
        gallery.sources(),
        vec!["data:image/png;base64,b", "data:image/png;base64,a"]
    );
}

#[test]
fn test_size_label_in_kilobytes() {
    let gallery = gallery_of(&["a"]);
    assert_eq!(gallery.images()[0].size_label(), "2.0 KB");
}
