//! Property tests for the record filter engine.
//!
//! These verify the engine-level guarantees over realistic record sets:
//! idempotence, monotonicity, order preservation, empty-criteria identity,
//! case-insensitive matching, keyword operator semantics, date-bound
//! exclusion, and exact status matching.

mod fixtures;

use fixtures::{ids, keyword_scenario, mixed_hearings};
use hearings_core::{
    sample_hearings, FilterCriteria, Hearing, HearingStatus, KeywordCriteria, KeywordOperator,
};
use hearings_search::{filter_records, HearingQuery};

fn no_filter() -> FilterCriteria {
    FilterCriteria::new()
}

fn no_keywords() -> KeywordCriteria {
    KeywordCriteria::new()
}

#[test]
fn test_empty_criteria_returns_full_input() {
    let records = mixed_hearings();
    let hits = filter_records(&records, "", &no_filter(), &no_keywords());
    assert_eq!(hits.len(), records.len());
    for (hit, record) in hits.iter().zip(records.iter()) {
        assert!(std::ptr::eq(*hit, record));
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let records = mixed_hearings();
    let filter = FilterCriteria::new().with_proceeding_type("Regulatory Appeal");
    let keywords = KeywordCriteria::new().with_keyword1("resources");

    let first: Vec<Hearing> = filter_records(&records, "regulatory", &filter, &keywords)
        .into_iter()
        .cloned()
        .collect();
    let second = filter_records(&first, "regulatory", &filter, &keywords);

    assert_eq!(second.len(), first.len());
    assert_eq!(ids(&second), vec!["m2", "m3"]);
}

#[test]
fn test_output_preserves_input_order() {
    let records = mixed_hearings();
    let hits = filter_records(&records, "re", &no_filter(), &no_keywords());
    let hit_ids = ids(&hits);

    let positions: Vec<usize> = hit_ids
        .iter()
        .map(|id| records.iter().position(|r| r.id == *id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_adding_constraints_never_grows_result() {
    let records = mixed_hearings();
    let steps = vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_party_name("res"),
        FilterCriteria::new()
            .with_party_name("res")
            .with_proceeding_type("Regulatory Appeal"),
        FilterCriteria::new()
            .with_party_name("res")
            .with_proceeding_type("Regulatory Appeal")
            .with_date_from("2026-03-01"),
        FilterCriteria::new()
            .with_party_name("res")
            .with_proceeding_type("Regulatory Appeal")
            .with_date_from("2026-03-01")
            .with_status(HearingStatus::Adjourned),
    ];

    let sizes: Vec<usize> = steps
        .iter()
        .map(|filter| filter_records(&records, "", filter, &no_keywords()).len())
        .collect();

    assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "sizes: {:?}", sizes);
    assert_eq!(sizes.first(), Some(&records.len()));
    assert_eq!(sizes.last(), Some(&0));
}

#[test]
fn test_adding_keywords_never_grows_and_result() {
    let records = keyword_scenario::all();
    let one = KeywordCriteria::new()
        .with_keyword1("pipeline")
        .with_operator(KeywordOperator::And);
    let two = one.clone().with_keyword2("appeal");

    let with_one = filter_records(&records, "", &no_filter(), &one).len();
    let with_two = filter_records(&records, "", &no_filter(), &two).len();
    assert!(with_two <= with_one);
}

#[test]
fn test_quick_search_is_case_insensitive() {
    let hearings = sample_hearings();
    let hits = filter_records(&hearings, "tourmaline", &no_filter(), &no_keywords());
    assert_eq!(ids(&hits), vec!["1"]);

    let hits = filter_records(&hearings, "TOURMALINE OIL", &no_filter(), &no_keywords());
    assert_eq!(ids(&hits), vec!["1"]);
}

#[test]
fn test_keyword_and_requires_every_keyword() {
    let records = keyword_scenario::all();
    let keywords = KeywordCriteria::new()
        .with_keyword1("pipeline")
        .with_keyword2("appeal")
        .with_operator(KeywordOperator::And);

    let hits = filter_records(&records, "", &no_filter(), &keywords);
    assert_eq!(ids(&hits), vec!["r3"]);
}

#[test]
fn test_keyword_or_accepts_any_keyword() {
    let records = vec![
        keyword_scenario::pipeline_only(),
        keyword_scenario::appeal_only(),
        keyword_scenario::both(),
    ];
    let keywords = KeywordCriteria::new()
        .with_keyword1("pipeline")
        .with_keyword2("appeal")
        .with_operator(KeywordOperator::Or);

    let hits = filter_records(&records, "", &no_filter(), &keywords);
    assert_eq!(ids(&hits), vec!["r1", "r2", "r3"]);
}

#[test]
fn test_keyword_or_empty_slot_is_satisfied_by_every_record() {
    let records = keyword_scenario::all();
    let keywords = KeywordCriteria::new()
        .with_keyword1("pipeline")
        .with_keyword2("appeal")
        .with_operator(KeywordOperator::Or);

    let hits = filter_records(&records, "", &no_filter(), &keywords);
    assert_eq!(ids(&hits), vec!["r1", "r2", "r3", "r4"]);
}

#[test]
fn test_keyword_or_with_three_keywords_rejects_misses() {
    let records = keyword_scenario::all();
    let keywords = KeywordCriteria::new()
        .with_keyword1("pipeline")
        .with_keyword2("appeal")
        .with_keyword3("hydro")
        .with_operator(KeywordOperator::Or);

    let hits = filter_records(&records, "", &no_filter(), &keywords);
    assert_eq!(ids(&hits), vec!["r1", "r2", "r3"]);
}

#[test]
fn test_whitespace_quick_search_is_not_ignored() {
    let records = vec![Hearing::new("w1", "501", "nospace", HearingStatus::Adjourned)];
    let hits = filter_records(&records, " ", &no_filter(), &no_keywords());
    assert!(hits.is_empty());
}

#[test]
fn test_keyword_searches_update_field() {
    let records = keyword_scenario::all();
    let keywords = KeywordCriteria::new().with_keyword1("march 2");

    let hits = filter_records(&records, "", &no_filter(), &keywords);
    assert_eq!(ids(&hits), vec!["r2"]);
}

#[test]
fn test_undated_record_excluded_by_any_date_bound() {
    let records = mixed_hearings();
    // m1 matches the party filter on its own; it has no start date.
    let base = FilterCriteria::new().with_party_name("tourmaline");
    assert_eq!(
        ids(&filter_records(&records, "", &base, &no_keywords())),
        vec!["m1"]
    );

    let lower = base.clone().with_date_from("2000-01-01");
    assert!(filter_records(&records, "", &lower, &no_keywords()).is_empty());

    let upper = base.with_date_to("2999-12-31");
    assert!(filter_records(&records, "", &upper, &no_keywords()).is_empty());
}

#[test]
fn test_date_bounds_are_inclusive() {
    let records = mixed_hearings();

    let from = FilterCriteria::new().with_date_from("2026-02-10");
    assert_eq!(
        ids(&filter_records(&records, "", &from, &no_keywords())),
        vec!["m2", "m3"]
    );

    let to = FilterCriteria::new().with_date_to("2026-02-10");
    assert_eq!(
        ids(&filter_records(&records, "", &to, &no_keywords())),
        vec!["m2", "m4"]
    );

    let both = FilterCriteria::new()
        .with_date_from("2026-02-10")
        .with_date_to("2026-02-10");
    assert_eq!(
        ids(&filter_records(&records, "", &both, &no_keywords())),
        vec!["m2"]
    );
}

#[test]
fn test_status_is_exact_match() {
    let hearings = sample_hearings();
    // Sample 467 passes both text tests; its status is In Progress.
    let filter = FilterCriteria::new()
        .with_party_name("tourmaline")
        .with_status(HearingStatus::Adjourned);
    let hits = filter_records(&hearings, "tourmaline", &filter, &no_keywords());
    assert!(hits.is_empty());

    let filter = filter.with_status(HearingStatus::InProgress);
    let hits = filter_records(&hearings, "tourmaline", &filter, &no_keywords());
    assert_eq!(ids(&hits), vec!["1"]);
}

#[test]
fn test_joint_hearing_flag_does_not_filter() {
    let records = mixed_hearings();
    let filter = FilterCriteria::new().with_joint_hearing(true);
    assert_eq!(
        filter_records(&records, "", &filter, &no_keywords()).len(),
        records.len()
    );
}

#[test]
fn test_query_value_matches_free_function() {
    let records = mixed_hearings();
    let filter = FilterCriteria::new().with_status(HearingStatus::InProgress);
    let keywords = KeywordCriteria::new().with_keyword1("2026");

    let query = HearingQuery::new()
        .with_quick_search("a")
        .with_filter(filter.clone())
        .with_keywords(keywords.clone());

    assert_eq!(
        ids(&query.apply(&records)),
        ids(&filter_records(&records, "a", &filter, &keywords))
    );
}
