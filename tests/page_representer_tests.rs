//! End-to-end rendering of paginated collections
//!
//! Both provider conventions must render byte-identical documents for the
//! same logical page.

mod common;

use common::{songs, EntriesPage, LimitPage, Song};
use pagelinks::links::page_args;
use pagelinks::{
    Error, LinkArgs, LinkFormat, LinkSynthesizer, PageRepresenter, PaginationAdapter,
    PaginationState, QueryUrlBuilder, Relation,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const BASE_URL: &str = "http://www.roar-contrib.com/songs";

fn songs_representer() -> PageRepresenter<Song> {
    PageRepresenter::builder()
        .url_builder(QueryUrlBuilder::new(BASE_URL).unwrap())
        .collection_name("songs")
        .build()
        .unwrap()
}

// ============================================================================
// per_page convention
// ============================================================================

#[test]
fn test_entries_single_page() {
    let page = EntriesPage::paginate(&songs());
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=1&per_page=30"}],"songs":[{"name":"Thriller"},{"name":"One More Time"},{"name":"Good Vibrations"}]}"#
    );
}

#[test]
fn test_entries_previous_and_next() {
    let page = EntriesPage::paginate_with(&songs(), 2, 1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"},{"rel":"next","href":"http://www.roar-contrib.com/songs?page=3&per_page=1"},{"rel":"previous","href":"http://www.roar-contrib.com/songs?page=1&per_page=1"}],"songs":[{"name":"One More Time"}]}"#
    );
}

#[test]
fn test_entries_previous_no_next() {
    let page = EntriesPage::paginate_with(&songs(), 3, 1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=3&per_page=1"},{"rel":"previous","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"}],"songs":[{"name":"Good Vibrations"}]}"#
    );
}

#[test]
fn test_entries_next_no_previous() {
    let page = EntriesPage::paginate_with(&songs(), 1, 1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=1&per_page=1"},{"rel":"next","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"}],"songs":[{"name":"Thriller"}]}"#
    );
}

// ============================================================================
// limit_value convention
// ============================================================================

#[test]
fn test_limit_single_page() {
    let page = LimitPage::paginate_array(&songs());
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=1&per_page=25"}],"songs":[{"name":"Thriller"},{"name":"One More Time"},{"name":"Good Vibrations"}]}"#
    );
}

#[test]
fn test_limit_previous_and_next() {
    let page = LimitPage::paginate_array(&songs()).page(2).per(1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"},{"rel":"next","href":"http://www.roar-contrib.com/songs?page=3&per_page=1"},{"rel":"previous","href":"http://www.roar-contrib.com/songs?page=1&per_page=1"}],"songs":[{"name":"One More Time"}]}"#
    );
}

#[test]
fn test_limit_previous_no_next() {
    let page = LimitPage::paginate_array(&songs()).page(3).per(1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=3&per_page=1"},{"rel":"previous","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"}],"songs":[{"name":"Good Vibrations"}]}"#
    );
}

#[test]
fn test_limit_next_no_previous() {
    let page = LimitPage::paginate_array(&songs()).page(1).per(1);
    assert_eq!(
        songs_representer().to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=1&per_page=1"},{"rel":"next","href":"http://www.roar-contrib.com/songs?page=2&per_page=1"}],"songs":[{"name":"Thriller"}]}"#
    );
}

#[test_case(1 ; "first page")]
#[test_case(2 ; "middle page")]
#[test_case(3 ; "last page")]
fn test_conventions_render_identically(page: i64) {
    let representer = songs_representer();
    let entries = EntriesPage::paginate_with(&songs(), page, 1);
    let limits = LimitPage::paginate_array(&songs()).page(page).per(1);

    assert_eq!(
        representer.to_json(&entries).unwrap(),
        representer.to_json(&limits).unwrap()
    );
    assert_eq!(
        PaginationState::from_collection(&entries).unwrap(),
        PaginationState::from_collection(&limits).unwrap()
    );
}

// ============================================================================
// HAL
// ============================================================================

#[test]
fn test_hal_single_page() {
    let representer = PageRepresenter::builder()
        .url_builder(QueryUrlBuilder::new(BASE_URL).unwrap())
        .collection_name_from_type("HalSongsRepresenter")
        .link_format(LinkFormat::Hal)
        .build()
        .unwrap();

    let page = EntriesPage::paginate(&songs());
    assert_eq!(
        representer.to_json(&page).unwrap(),
        r#"{"total_entries":3,"_links":{"self":{"href":"http://www.roar-contrib.com/songs?page=1&per_page=30"}},"hal_songs":[{"name":"Thriller"},{"name":"One More Time"},{"name":"Good Vibrations"}]}"#
    );
}

// ============================================================================
// Derived collection name
// ============================================================================

#[test]
fn test_collection_named_after_representer() {
    struct TopSongsRepresenter;

    let representer = PageRepresenter::builder()
        .url_builder(QueryUrlBuilder::new(BASE_URL).unwrap())
        .collection_name(pagelinks::CollectionName::of::<TopSongsRepresenter>())
        .build()
        .unwrap();

    let page = EntriesPage::paginate(&songs());
    assert_eq!(
        representer.to_json(&page).unwrap(),
        r#"{"total_entries":3,"links":[{"rel":"self","href":"http://www.roar-contrib.com/songs?page=1&per_page=30"}],"top_songs":[{"name":"Thriller"},{"name":"One More Time"},{"name":"Good Vibrations"}]}"#
    );
}

// ============================================================================
// Contract failures
// ============================================================================

#[test]
fn test_missing_url_builder() {
    let err = PageRepresenter::<Song>::builder()
        .collection_name("songs")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingUrlBuilder));
    assert!(err.is_contract_violation());
}

// ============================================================================
// Synthesizer over real providers
// ============================================================================

#[test]
fn test_synthesizer_is_idempotent() {
    let page = LimitPage::paginate_array(&songs()).page(2).per(1);
    let adapter = PaginationAdapter::new(&page).unwrap();
    let synthesizer = LinkSynthesizer::new(QueryUrlBuilder::new(BASE_URL).unwrap());

    let mut base = LinkArgs::new();
    base.insert("sort".to_string(), json!("name"));

    let first = synthesizer.links(&adapter, &base).unwrap();
    let second = synthesizer.links(&adapter, &base).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|l| l.rel).collect::<Vec<_>>(),
        vec![Relation::SelfRef, Relation::Next, Relation::Previous]
    );
    assert_eq!(
        first[0].href,
        "http://www.roar-contrib.com/songs?page=2&per_page=1&sort=name"
    );
}

#[test]
fn test_closure_url_builder() {
    let page = EntriesPage::paginate_with(&songs(), 2, 1);
    let adapter = PaginationAdapter::new(&page).unwrap();
    let synthesizer = LinkSynthesizer::new(|args: &LinkArgs| {
        format!("/songs/{}/{}", args["page"], args["per_page"])
    });

    let hrefs: Vec<String> = synthesizer
        .links(&adapter, &LinkArgs::new())
        .unwrap()
        .into_iter()
        .map(|l| l.href)
        .collect();
    assert_eq!(hrefs, vec!["/songs/2/1", "/songs/3/1", "/songs/1/1"]);

    let expected = page_args(&LinkArgs::new(), 2, 1);
    assert_eq!(expected.get("page"), Some(&json!(2)));
}
