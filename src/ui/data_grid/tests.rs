// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::paging::PageRequest;

fn record(id: u64) -> Record {
    Record {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        email_verified_at: None,
        created_at: Some("2024-11-02T09:15:00.000000Z".to_string()),
        updated_at: None,
    }
}

fn envelope(page: u32, page_size: u32, total_items: u64, total_pages: u32) -> PageEnvelope {
    let start = u64::from(page - 1) * u64::from(page_size);
    let end = (start + u64::from(page_size)).min(total_items);
    PageEnvelope {
        items: (start + 1..=end).map(record).collect(),
        current_page: PageNumber::new(page),
        page_size: PageSize::new(page_size),
        total_items,
        total_pages,
    }
}

fn expect_fetch(event: Event) -> PageRequest {
    match event {
        Event::Fetch(request) => request,
        other => panic!("expected a fetch, got {other:?}"),
    }
}

/// Grid after the initial refresh answered with 25 items over 3 pages.
fn loaded_grid() -> State {
    let mut state = State::default();
    let request = expect_fetch(state.refresh());
    let event = state.update(Message::PageLoaded {
        request: request.id,
        result: Ok(envelope(1, 10, 25, 3)),
    });
    assert_eq!(event, Event::None);
    state
}

#[test]
fn first_page_reports_range_and_page_count() {
    let state = loaded_grid();

    assert_eq!(state.page().value(), 1);
    assert_eq!(state.page_size().value(), 10);
    assert_eq!(state.search_term(), "");
    assert_eq!(state.range_start(), 1);
    assert_eq!(state.range_end(), 10);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.items().len(), 10);
    assert!(!state.is_loading());
}

#[test]
fn changing_page_size_fetches_first_page_with_new_size() {
    let mut state = loaded_grid();

    let request = expect_fetch(state.set_page_size(5));
    assert_eq!(request.query.page.value(), 1);
    assert_eq!(request.query.page_size.value(), 5);

    state.update(Message::PageLoaded {
        request: request.id,
        result: Ok(envelope(1, 5, 25, 5)),
    });
    assert_eq!(state.range_end(), 5);
    assert_eq!(state.total_pages(), 5);
}

#[test]
fn out_of_range_page_requests_are_ignored() {
    let mut state = loaded_grid();
    let issued = state.latest_request();

    assert_eq!(state.request_page(0), Event::None);
    assert_eq!(state.request_page(state.total_pages() + 1), Event::None);
    assert_eq!(state.page().value(), 1);
    assert_eq!(state.latest_request(), issued);
}

#[test]
fn in_range_page_request_fetches_that_page() {
    let mut state = loaded_grid();

    let request = expect_fetch(state.request_page(3));
    assert_eq!(request.query.page.value(), 3);
    assert_eq!(state.page().value(), 3);
    assert!(state.is_loading());
}

#[test]
fn requesting_the_current_page_does_not_refetch() {
    let mut state = loaded_grid();
    assert_eq!(state.request_page(1), Event::None);
}

#[test]
fn navigation_messages_respect_bounds() {
    let mut state = loaded_grid();

    assert_eq!(state.update(Message::PreviousPage), Event::None);
    assert_eq!(state.update(Message::FirstPage), Event::None);

    let last = expect_fetch(state.update(Message::LastPage));
    assert_eq!(last.query.page.value(), 3);
    assert_eq!(state.update(Message::NextPage), Event::None);

    let previous = expect_fetch(state.update(Message::PreviousPage));
    assert_eq!(previous.query.page.value(), 2);
}

#[test]
fn page_size_below_one_is_clamped() {
    let mut state = loaded_grid();

    let request = expect_fetch(state.set_page_size(-4));
    assert_eq!(request.query.page_size.value(), 1);
    assert_eq!(state.page_size().value(), 1);
}

#[test]
fn page_size_input_keeps_text_and_only_fetches_numbers() {
    let mut state = loaded_grid();

    assert_eq!(
        state.update(Message::PageSizeInputChanged(String::new())),
        Event::None
    );
    assert_eq!(state.page_size_input(), "");
    assert_eq!(state.page_size().value(), 10);

    assert_eq!(
        state.update(Message::PageSizeInputChanged("abc".into())),
        Event::None
    );

    let request = expect_fetch(state.update(Message::PageSizeInputChanged("25".into())));
    assert_eq!(request.query.page_size.value(), 25);
    assert_eq!(state.page_size_input(), "25");
}

#[test]
fn search_is_sent_verbatim_and_keeps_page_by_default() {
    let mut state = loaded_grid();
    expect_fetch(state.request_page(2));

    let request = expect_fetch(state.update(Message::SearchChanged("  Ann ".into())));
    assert_eq!(request.query.search_term, "  Ann ");
    assert_eq!(request.query.page.value(), 2);
}

#[test]
fn search_resets_page_when_configured() {
    let mut state = State::new(PageSize::default(), true);
    let request = expect_fetch(state.refresh());
    state.update(Message::PageLoaded {
        request: request.id,
        result: Ok(envelope(1, 10, 25, 3)),
    });
    expect_fetch(state.request_page(3));

    let request = expect_fetch(state.set_search_term("ann"));
    assert_eq!(request.query.page.value(), 1);
}

#[test]
fn unchanged_search_term_does_not_refetch() {
    let mut state = loaded_grid();
    expect_fetch(state.set_search_term("ann"));
    assert_eq!(state.set_search_term("ann"), Event::None);
}

#[test]
fn each_accepted_change_issues_a_new_request_id() {
    let mut state = loaded_grid();

    let first = expect_fetch(state.set_search_term("a"));
    let second = expect_fetch(state.set_search_term("an"));
    let third = expect_fetch(state.refresh());

    assert!(first.id < second.id);
    assert!(second.id < third.id);
    assert_eq!(state.latest_request(), third.id);
}

#[test]
fn stale_responses_are_discarded() {
    let mut state = loaded_grid();

    let older = expect_fetch(state.set_search_term("a"));
    let newer = expect_fetch(state.set_search_term("an"));

    // The newer answer lands first, then the older one straggles in.
    state.update(Message::PageLoaded {
        request: newer.id,
        result: Ok(envelope(1, 10, 4, 1)),
    });
    let event = state.update(Message::PageLoaded {
        request: older.id,
        result: Ok(envelope(1, 10, 25, 3)),
    });

    assert_eq!(
        event,
        Event::StaleResponse {
            request: older.id,
            latest: newer.id,
        }
    );
    assert_eq!(state.total_items(), 4);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.items().len(), 4);
}

#[test]
fn stale_response_keeps_loading_flag_for_pending_request() {
    let mut state = loaded_grid();

    let older = expect_fetch(state.set_search_term("a"));
    expect_fetch(state.set_search_term("an"));

    state.update(Message::PageLoaded {
        request: older.id,
        result: Ok(envelope(1, 10, 25, 3)),
    });
    assert!(state.is_loading());
}

#[test]
fn failed_fetch_keeps_previous_page() {
    let mut state = loaded_grid();
    let before: Vec<u64> = state.items().iter().map(|r| r.id).collect();

    let request = expect_fetch(state.request_page(2));
    let event = state.update(Message::PageLoaded {
        request: request.id,
        result: Err(FetchError::Status(500)),
    });

    assert_eq!(
        event,
        Event::FetchFailed {
            request: request.id,
            error: FetchError::Status(500),
        }
    );
    let after: Vec<u64> = state.items().iter().map(|r| r.id).collect();
    assert_eq!(before, after);
    assert_eq!(state.total_pages(), 3);
    assert!(!state.is_loading());
}

#[test]
fn envelope_values_replace_local_pagination() {
    let mut state = loaded_grid();

    // The service may answer with a different page than asked for.
    let request = expect_fetch(state.request_page(3));
    state.update(Message::PageLoaded {
        request: request.id,
        result: Ok(envelope(2, 10, 12, 2)),
    });

    assert_eq!(state.page().value(), 2);
    assert_eq!(state.total_items(), 12);
    assert_eq!(state.range_start(), 11);
    assert_eq!(state.range_end(), 12);
    assert!(!state.can_go_forward());
}

#[test]
fn empty_result_set_ends_range_at_zero() {
    let mut state = State::default();
    let request = expect_fetch(state.refresh());
    state.update(Message::PageLoaded {
        request: request.id,
        result: Ok(envelope(1, 10, 0, 0)),
    });

    assert_eq!(state.range_start(), 1);
    assert_eq!(state.range_end(), 0);
    assert_eq!(state.total_pages(), 0);
    assert!(state.items().is_empty());
    assert!(!state.can_go_forward());
}
