use photobook_core::*;

#[test]
fn test_default_naming_scheme() {
    let naming = NamingScheme::default();
    assert_eq!(naming.page_ref(0).as_str(), "images/photo000.jpg");
    assert_eq!(naming.page_ref(7).as_str(), "images/photo007.jpg");
    assert_eq!(naming.page_ref(131).as_str(), "images/photo131.jpg");
}

#[test]
fn test_custom_naming_scheme() {
    let naming = NamingScheme {
        directory: "scans/".to_string(),
        prefix: "page-".to_string(),
        first_number: 1,
        digits: 4,
        extension: "png".to_string(),
    };
    assert_eq!(naming.page_ref(0).as_str(), "scans/page-0001.png");
    assert_eq!(naming.page_ref(9).as_str(), "scans/page-0010.png");

    let flat = NamingScheme {
        directory: String::new(),
        ..naming
    };
    assert_eq!(flat.page_ref(0).as_str(), "page-0001.png");
}

#[test]
fn test_page_set_bounds() {
    let pages = PageSet::from_naming(&NamingScheme::default(), 132).unwrap();
    assert_eq!(pages.len(), 132);
    assert_eq!(pages.last_index(), 131);
    assert!(!pages.is_empty());
    assert!(pages.get(131).is_ok());

    match pages.get(132) {
        Err(BookError::OutOfRange { index, len }) => {
            assert_eq!(index, 132);
            assert_eq!(len, 132);
        }
        _ => panic!("Expected OutOfRange error"),
    }
}

#[test]
fn test_empty_page_set_rejected() {
    match PageSet::new(Vec::new()) {
        Err(BookError::NoPages) => {}
        _ => panic!("Expected NoPages error"),
    }
}

#[test]
fn test_page_set_preserves_order() {
    let pages = PageSet::new(vec![
        PageRef::new("c.jpg"),
        PageRef::new("a.jpg"),
        PageRef::new("b.jpg"),
    ])
    .unwrap();
    let names: Vec<&str> = pages.iter().map(|p| p.as_str()).collect();
    assert_eq!(names, vec!["c.jpg", "a.jpg", "b.jpg"]);
    assert_eq!(pages.get(1).unwrap().as_path(), std::path::Path::new("a.jpg"));
}

#[test]
fn test_bookmark_index_overlaps() {
    let index = BookmarkIndex::new(vec![
        Bookmark::new(3, 10, "Spring").unwrap(),
        Bookmark::new(10, 12, "Bridge").unwrap(),
    ]);

    assert!(index.active_ranges(1).is_empty());
    assert_eq!(index.active_positions(2), vec![0]);
    assert_eq!(index.active_positions(9), vec![0, 1]);
    assert_eq!(index.active_positions(10), vec![1]);
    assert!(index.active_positions(12).is_empty());
    assert_eq!(index.len(), 2);
}

#[test]
fn test_bookmark_containment_range() {
    let bookmark = Bookmark::new(3, 10, "Spring").unwrap();
    let index = BookmarkIndex::new(vec![bookmark.clone()]);
    for current in 2..=9 {
        assert_eq!(index.active_ranges(current), vec![&bookmark]);
    }
    assert!(index.active_ranges(1).is_empty());
    assert!(index.active_ranges(10).is_empty());
}

#[test]
fn test_from_naming_rejects_overflow() {
    let naming = NamingScheme {
        first_number: usize::MAX - 1,
        ..Default::default()
    };
    assert!(PageSet::from_naming(&naming, 2).is_ok());
    assert!(matches!(
        PageSet::from_naming(&naming, 3),
        Err(BookError::Config(_))
    ));
}
