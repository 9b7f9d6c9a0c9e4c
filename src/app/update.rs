use log::debug;

use super::message::{Command, Message};
use super::state::{AppState, DetailStatus, SearchStatus};
use crate::error::{DetailError, SearchError};
use crate::model::MealDetail;
use crate::search::{SearchOutcome, NO_RESULTS_MESSAGE};

/// Apply `message` to `state`, returning the request to run, if any.
pub fn update(state: &mut AppState, message: Message) -> Option<Command> {
    match message {
        Message::QueryChanged(query) => {
            state.search.query = query;
            None
        }
        Message::ModeChanged(mode) => {
            state.search.mode = mode;
            None
        }
        Message::SubmitSearch => submit_search(state),
        Message::ViewMeal(id) => {
            state.detail_seq += 1;
            state.detail.status = DetailStatus::Loading;
            state.detail.meal = None;
            state.detail.error = None;
            Some(Command::LoadDetail {
                seq: state.detail_seq,
                id,
            })
        }
        Message::ToggleFavorite(meal) => {
            state.favorites.toggle(&meal);
            None
        }
        Message::SearchCompleted { seq, result } => {
            if seq != state.search_seq {
                debug!("Dropping stale search response {} (latest {})", seq, state.search_seq);
            } else {
                apply_search_result(state, result);
            }
            None
        }
        Message::DetailCompleted { seq, result } => {
            if seq != state.detail_seq {
                debug!("Dropping stale detail response {} (latest {})", seq, state.detail_seq);
            } else {
                apply_detail_result(state, result);
            }
            None
        }
    }
}

fn submit_search(state: &mut AppState) -> Option<Command> {
    // Invalidate whatever is still in flight
    state.search_seq += 1;

    let query = state.search.query.trim();
    if query.is_empty() {
        apply_search_result(state, Err(SearchError::EmptyQuery));
        return None;
    }
    let query = query.to_string();

    state.search.status = SearchStatus::Loading;
    state.search.results.clear();
    state.search.error = None;
    Some(Command::Search {
        seq: state.search_seq,
        query,
        mode: state.search.mode,
    })
}

fn apply_search_result(state: &mut AppState, result: Result<SearchOutcome, SearchError>) {
    let search = &mut state.search;
    match result {
        Ok(SearchOutcome::Found(meals)) => {
            search.status = SearchStatus::Results;
            search.results = meals;
            search.error = None;
        }
        Ok(SearchOutcome::NoResults) => {
            search.status = SearchStatus::Empty;
            search.results.clear();
            search.error = Some(NO_RESULTS_MESSAGE.to_string());
        }
        Err(e) => {
            search.status = SearchStatus::Failed;
            search.results.clear();
            search.error = Some(e.to_string());
        }
    }
}

fn apply_detail_result(state: &mut AppState, result: Result<MealDetail, DetailError>) {
    let detail = &mut state.detail;
    match result {
        Ok(meal) => {
            detail.status = DetailStatus::Loaded;
            detail.meal = Some(meal);
            detail.error = None;
        }
        Err(e) => {
            detail.status = DetailStatus::Failed;
            detail.meal = None;
            detail.error = Some(e.to_string());
        }
    }
}
