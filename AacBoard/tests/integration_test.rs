use aacboard::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

/// Every screen of a board: the home list, then each topic's list.
fn screens(board: &mut AacMappings) -> Vec<(String, Vec<String>)> {
    board.reset();
    let mut all = vec![(String::new(), board.image_locs())];
    let entries: Vec<String> = board.topics().map(|(image, _)| image.to_string()).collect();
    for image in entries {
        let topic = board.select(&image).unwrap().text().to_string();
        all.push((topic, board.image_locs()));
        board.reset();
    }
    all
}

#[test]
fn test_open_sample_board() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("AACMappingsDefault.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mut board = AacMappings::open(&path).unwrap();
    assert_eq!(
        board.image_locs(),
        vec!["img/food/plate.png", "img/clothing/hanger.png"]
    );
    assert_eq!(
        board.select("img/food/plate.png").unwrap(),
        Selection::Navigated("food".to_string())
    );
    assert_eq!(board.current_category(), "food");
    assert_eq!(
        board.image_locs(),
        vec!["img/food/fries.png", "img/food/watermelon.png"]
    );
    assert_eq!(
        board.select("img/food/fries.png").unwrap(),
        Selection::Spoken("french fries".to_string())
    );
    board.reset();
    assert_eq!(board.current_category(), "");
}

#[test]
fn test_write_then_reopen_matches() {
    let dir = tempdir().unwrap();
    let original_path = dir.path().join("original.txt");
    let copy_path = dir.path().join("copy.txt");
    fs::write(&original_path, SAMPLE).unwrap();

    let mut original = AacMappings::open(&original_path).unwrap();
    original.write_to_file(&copy_path).unwrap();
    let mut copy = AacMappings::open(&copy_path).unwrap();

    assert_eq!(screens(&mut original), screens(&mut copy));
    assert_eq!(fs::read_to_string(&copy_path).unwrap(), SAMPLE);
}

#[test]
fn test_roundtrip_with_duplicate_topic_names() {
    // Two entry images sharing a topic: the file written back lists the
    // topic's items twice, and re-reading it rebuilds the same category.
    let mut board = AacMappings::new();
    board.add_item("img/food/plate.png", "food").unwrap();
    board.add_item("img/food/bowl.png", "food").unwrap();
    board.select("img/food/bowl.png").unwrap();
    board.add_item("img/food/soup.png", "soup").unwrap();

    let text = board.to_board_string();
    assert_eq!(text.matches(">img/food/soup.png soup\n").count(), 2);

    let mut reread = AacMappings::parse(&text).unwrap();
    assert_eq!(screens(&mut board), screens(&mut reread));
}

#[test]
fn test_edited_board_roundtrips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.txt");

    let mut board = AacMappings::parse(SAMPLE).unwrap();
    board.add_item("img/toys/box.png", "things to play with").unwrap();
    board.select("img/toys/box.png").unwrap();
    board.add_item("img/toys/ball.png", "the red ball").unwrap();
    board.reset();
    board.select("img/clothing/hanger.png").unwrap();
    board.add_item("img/clothing/shirt.png", "blue shirt").unwrap();

    board.write_to_file(&path).unwrap();
    let mut reread = AacMappings::open(&path).unwrap();

    assert_eq!(screens(&mut board), screens(&mut reread));
    let clothing = reread.category("clothing").unwrap();
    assert_eq!(clothing.text_for("img/clothing/shirt.png"), Some("blue shirt"));
}

#[test]
fn test_empty_and_padded_text_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.txt");

    let mut board = AacMappings::parse(SAMPLE).unwrap();
    board.select("img/food/plate.png").unwrap();
    board.add_item("img/food/empty.png", "").unwrap();
    board.add_item("img/food/hi.png", "hi ").unwrap();
    board.write_to_file(&path).unwrap();

    let mut reread = AacMappings::open(&path).unwrap();
    assert_eq!(screens(&mut board), screens(&mut reread));
    let food = reread.category("food").unwrap();
    assert_eq!(food.text_for("img/food/empty.png"), Some(""));
    assert_eq!(food.text_for("img/food/hi.png"), Some("hi "));
}

#[test]
fn test_spaced_image_ids_never_reach_the_file() {
    let mut board = AacMappings::new();
    let err = board.add_item("img/my plate.png", "food").unwrap_err();
    assert!(matches!(err, Error::InvalidImageId { .. }));

    let mut food = Category::new("food");
    assert!(!food.add_item("img/french fries.png", "fries"));

    let reread = AacMappings::parse(&board.to_board_string()).unwrap();
    assert!(reread.image_locs().is_empty());
    assert!(food.is_empty());
}

#[test]
fn test_added_images_listed_in_order_with_latest_topic() {
    let mut board = AacMappings::new();
    board.add_item("a.png", "alpha").unwrap();
    board.add_item("b.png", "beta").unwrap();
    board.add_item("a.png", "gamma").unwrap();

    assert_eq!(board.image_locs(), vec!["a.png", "b.png"]);
    assert_eq!(
        board.select("a.png").unwrap(),
        Selection::Navigated("gamma".to_string())
    );
    assert_eq!(board.current_category(), "gamma");
}

#[test]
fn test_failed_select_keeps_state() {
    let mut board = AacMappings::parse(SAMPLE).unwrap();
    board.select("img/food/plate.png").unwrap();

    let err = board.select("img/clothing/shirt.png").unwrap_err();
    assert!(matches!(err, Error::ImageNotFound { .. }));
    assert_eq!(board.current_category(), "food");
    assert_eq!(board.screen(), &Screen::Topic("food".to_string()));
}

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let err = AacMappings::open(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_open_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "img/food/plate.png food\nnospace\n").unwrap();

    let err = AacMappings::open(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_write_to_unwritable_path() {
    let dir = tempdir().unwrap();
    let board = AacMappings::parse(SAMPLE).unwrap();
    let err = board
        .write_to_file(dir.path().join("missing-dir").join("board.txt"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_board_page_trait_objects() {
    let mut board = AacMappings::parse(SAMPLE).unwrap();
    let mut pages: Vec<Box<dyn BoardPage>> = vec![
        Box::new(board.clone()),
        Box::new(board.category("food").unwrap().clone()),
    ];

    assert_eq!(pages[0].current_category(), "");
    assert_eq!(pages[1].current_category(), "food");
    assert!(pages[1].select("img/food/watermelon.png").is_ok());
    assert!(pages[0].add_item("", "x").is_err());
    assert!(pages[1].add_item("", "x").is_ok());

    board.reset();
    assert_eq!(pages[0].image_locs(), board.image_locs());
}

#[test]
fn test_home_category_name() {
    let board = AacMappings::new();
    assert_eq!(board.home().name(), HOME_CATEGORY);
    assert!(board.home().is_empty());
}
