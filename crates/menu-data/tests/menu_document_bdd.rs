//! Behavioural tests for menu document parsing.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use menu_data::{MenuDataError, MenuDocument};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const BUNDLED_MENU_JSON: &str = include_str!("../fixtures/menu.json");

/// Test world holding the raw input and the parse outcome.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    document_result: Slot<Result<MenuDocument, MenuDataError>>,
}

impl World {
    fn document_result(&self) -> Result<MenuDocument, MenuDataError> {
        self.document_result
            .get()
            .expect("document result should be set")
    }

    fn document(&self) -> MenuDocument {
        self.document_result()
            .expect("document should be valid")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the bundled menu document")]
fn the_bundled_menu_document(world: &World) {
    world.json_input.set(BUNDLED_MENU_JSON.to_owned());
}

#[given("a menu document with a numeric price")]
fn a_menu_document_with_a_numeric_price(world: &World) {
    let json = r#"{"menu": [
        {"id": 9, "title": "Espresso", "price": 2.75, "category": "drinks"}
    ]}"#;
    world.json_input.set(json.to_owned());
}

#[given("malformed menu JSON")]
fn malformed_menu_json(world: &World) {
    world.json_input.set("{ menu: nope".to_owned());
}

#[given("a menu document with no items")]
fn a_menu_document_with_no_items(world: &World) {
    world.json_input.set(r#"{"menu": []}"#.to_owned());
}

#[when("the document is parsed")]
fn the_document_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.document_result.set(MenuDocument::from_json(&json));
}

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.document_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("every item carries a category slug")]
fn every_item_carries_a_category_slug(world: &World) {
    for item in world.document().items() {
        assert!(!item.category.trim().is_empty(), "item {} has no category", item.id);
    }
}

#[then("the first item price reads as decimal text")]
fn the_first_item_price_reads_as_decimal_text(world: &World) {
    let document = world.document();
    let first = document.items().first().expect("one item");
    assert_eq!(first.price, "2.75");
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.document_result() {
        Err(MenuDataError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("the document has no items")]
fn the_document_has_no_items(world: &World) {
    assert!(world.document().items().is_empty());
}

#[scenario(
    path = "tests/features/menu_document.feature",
    name = "Bundled menu parses successfully"
)]
fn bundled_menu_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_document.feature",
    name = "Numeric prices are accepted"
)]
fn numeric_prices_are_accepted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_document.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_document.feature",
    name = "Empty menu parses to an empty catalogue"
)]
fn empty_menu_parses_to_an_empty_catalogue(world: World) {
    let _ = world;
}
