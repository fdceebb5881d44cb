//! End-to-end flows through the event handler and worker.
//!
//! These tests drive the application the way the terminal shim does: events
//! go into `handle_event`, emitted requests are executed by an `ApiWorker`
//! backed by an in-memory catalog, and the responses are fed back in. No
//! network, no terminal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tunedex::api::{ApiError, CatalogGateway, Result as ApiResult};
use tunedex::app::modes::Modal;
use tunedex::domain::{Playlist, PlaylistSong, RatingDraft, Session, Song};
use tunedex::ui::viewmodel::BodyView;
use tunedex::ui::Theme;
use tunedex::worker::{ApiRequest, ApiWorker};
use tunedex::{handle_event, Action, AppState, Event, View};

const DUPLICATE_MSG: &str = "Song already in playlist or invalid playlist/song";

/// Mutable catalog contents behind the fake gateway.
#[derive(Default)]
struct FakeState {
    users: Vec<(String, i64)>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
    members: HashMap<i64, Vec<i64>>,
    ratings: Vec<RatingDraft>,
    next_playlist_id: i64,
}

/// In-memory stand-in for the catalog backend.
///
/// Implements the same contract as the HTTP client, including idempotent
/// deletes and the duplicate-membership rejection message.
struct FakeCatalog {
    state: Arc<Mutex<FakeState>>,
}

#[async_trait]
impl CatalogGateway for FakeCatalog {
    async fn login(&self, username: &str) -> ApiResult<Session> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|(name, _)| name == username)
            .map(|(name, user_id)| Session {
                user_id: *user_id,
                username: name.clone(),
            })
            .ok_or_else(|| ApiError::Rejected("User not found".to_string()))
    }

    async fn search_songs(&self, query: &str) -> ApiResult<Vec<Song>> {
        let state = self.state.lock().unwrap();
        if query.is_empty() {
            return Ok(vec![]);
        }
        let needle = query.to_lowercase();
        Ok(state
            .songs
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&needle)
                    || song
                        .artist_name
                        .as_deref()
                        .is_some_and(|artist| artist.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn submit_rating(&self, rating: &RatingDraft) -> ApiResult<()> {
        self.state.lock().unwrap().ratings.push(rating.clone());
        Ok(())
    }

    async fn list_playlists(&self, _user_id: i64) -> ApiResult<Vec<Playlist>> {
        Ok(self.state.lock().unwrap().playlists.clone())
    }

    async fn create_playlist(
        &self,
        owner_id: i64,
        name: &str,
        is_public: bool,
    ) -> ApiResult<Playlist> {
        let mut state = self.state.lock().unwrap();
        state.next_playlist_id += 1;
        let playlist = Playlist {
            playlist_id: state.next_playlist_id,
            owner_id: Some(owner_id),
            name: name.to_string(),
            is_public,
        };
        state.playlists.push(playlist.clone());
        state.members.insert(playlist.playlist_id, vec![]);
        Ok(playlist)
    }

    async fn rename_playlist(&self, playlist_id: i64, new_name: &str) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        match state
            .playlists
            .iter_mut()
            .find(|playlist| playlist.playlist_id == playlist_id)
        {
            Some(playlist) => {
                playlist.name = new_name.to_string();
                Ok(())
            }
            None => Err(ApiError::Rejected("Playlist not found".to_string())),
        }
    }

    async fn delete_playlist(&self, playlist_id: i64) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .playlists
            .retain(|playlist| playlist.playlist_id != playlist_id);
        state.members.remove(&playlist_id);
        // Deleting an id that is already gone still succeeds.
        Ok(())
    }

    async fn list_playlist_songs(&self, playlist_id: i64) -> ApiResult<Vec<PlaylistSong>> {
        let state = self.state.lock().unwrap();
        let member_ids = state.members.get(&playlist_id).cloned().unwrap_or_default();
        Ok(member_ids
            .iter()
            .enumerate()
            .filter_map(|(position, song_id)| {
                state
                    .songs
                    .iter()
                    .find(|song| song.song_id == *song_id)
                    .map(|song| PlaylistSong {
                        song_id: song.song_id,
                        title: song.title.clone(),
                        artist_name: song.artist_name.clone(),
                        release_year: song.release_year,
                        position: Some(position as i32 + 1),
                    })
            })
            .collect())
    }

    async fn add_song_to_playlist(&self, playlist_id: i64, song_id: i64) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        let members = state.members.entry(playlist_id).or_default();
        if members.contains(&song_id) {
            return Err(ApiError::Rejected(DUPLICATE_MSG.to_string()));
        }
        members.push(song_id);
        Ok(())
    }

    async fn remove_song_from_playlist(&self, playlist_id: i64, song_id: i64) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(members) = state.members.get_mut(&playlist_id) {
            members.retain(|id| *id != song_id);
        }
        Ok(())
    }
}

/// Builds an app, a worker over a seeded fake catalog, and a handle to the
/// catalog contents for assertions.
fn fixture() -> (AppState, ApiWorker, Arc<Mutex<FakeState>>) {
    let shared = Arc::new(Mutex::new(FakeState {
        users: vec![("alice".to_string(), 7)],
        songs: vec![
            Song {
                song_id: 1,
                title: "Holiday".to_string(),
                artist_name: Some("Green Day".to_string()),
                release_year: Some(2004),
            },
            Song {
                song_id: 2,
                title: "Holiday in Cambodia".to_string(),
                artist_name: Some("Dead Kennedys".to_string()),
                release_year: Some(1980),
            },
            Song {
                song_id: 3,
                title: "<script>alert('x')</script>\u{1b}[31m".to_string(),
                artist_name: None,
                release_year: None,
            },
        ],
        ..FakeState::default()
    }));

    let worker = ApiWorker::new(Box::new(FakeCatalog {
        state: shared.clone(),
    }));

    (AppState::new(Theme::default()), worker, shared)
}

/// Executes emitted actions against the worker, feeding responses back into
/// the handler until the action queue drains.
async fn pump(app: &mut AppState, worker: &ApiWorker, actions: Vec<Action>) {
    let mut pending = actions;
    while !pending.is_empty() {
        match pending.remove(0) {
            Action::CallApi(request) => {
                let response = worker.handle_request(request).await;
                let (_, next) = handle_event(app, &Event::Api(response)).expect("api event");
                pending.extend(next);
            }
            Action::Quit => {}
        }
    }
}

fn send(app: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(app, &event).expect("event").1
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        send(app, Event::Char(c));
    }
}

async fn sign_in(app: &mut AppState, worker: &ApiWorker) {
    type_text(app, "alice");
    let actions = send(app, Event::Enter);
    pump(app, worker, actions).await;
}

async fn run_search(app: &mut AppState, worker: &ApiWorker, query: &str) {
    send(app, Event::ShowSearch);
    send(app, Event::FocusQuery);
    app.search_query.clear();
    type_text(app, query);
    let actions = send(app, Event::Enter);
    pump(app, worker, actions).await;
}

async fn create_playlist(app: &mut AppState, worker: &ApiWorker, name: &str) {
    let actions = send(app, Event::ShowPlaylists);
    pump(app, worker, actions).await;
    send(app, Event::OpenCreateModal);
    type_text(app, name);
    let actions = send(app, Event::Enter);
    pump(app, worker, actions).await;
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_with_known_username_opens_search_view() {
    let (mut app, worker, _) = fixture();

    sign_in(&mut app, &worker).await;

    assert_eq!(app.view, View::Search);
    let session = app.session.as_ref().expect("session should be open");
    assert_eq!(session.user_id, 7);
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn login_with_unknown_username_stays_on_login_with_error() {
    let (mut app, worker, _) = fixture();

    type_text(&mut app, "nobody");
    let actions = send(&mut app, Event::Enter);
    pump(&mut app, &worker, actions).await;

    assert_eq!(app.view, View::Login);
    assert!(app.session.is_none());
    let status = app.status.as_ref().expect("error should be shown");
    assert!(status.text.contains("User not found"));
}

#[tokio::test]
async fn empty_username_is_rejected_before_any_request() {
    let (mut app, worker, _) = fixture();

    let actions = send(&mut app, Event::Enter);
    assert!(actions.is_empty());
    pump(&mut app, &worker, actions).await;

    assert_eq!(app.view, View::Login);
    assert!(app.status.is_some());
}

#[tokio::test]
async fn logout_returns_to_login_and_clears_session() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;

    send(&mut app, Event::Logout);

    assert_eq!(app.view, View::Login);
    assert!(app.session.is_none());
    assert!(app.search_results.is_empty());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn empty_query_and_zero_matches_both_render_placeholder() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;

    run_search(&mut app, &worker, "").await;
    let vm = app.compute_viewmodel(30, 100);
    let BodyView::Search(search) = vm.body else {
        panic!("expected search body");
    };
    assert_eq!(
        search.empty_state.expect("placeholder").message,
        "No results found."
    );

    run_search(&mut app, &worker, "zzzzzz").await;
    let vm = app.compute_viewmodel(30, 100);
    let BodyView::Search(search) = vm.body else {
        panic!("expected search body");
    };
    assert!(search.empty_state.is_some());
}

#[tokio::test]
async fn search_results_populate_and_focus_moves_to_rows() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;

    run_search(&mut app, &worker, "holiday").await;

    assert_eq!(app.search_results.len(), 2);
    assert!(app.selected_song().is_some());
}

#[tokio::test]
async fn hostile_song_title_renders_as_literal_text() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;

    run_search(&mut app, &worker, "script").await;

    let vm = app.compute_viewmodel(30, 120);
    let BodyView::Search(search) = vm.body else {
        panic!("expected search body");
    };
    let title = &search.rows[0].title;
    assert!(title.contains("<script>"), "markup must stay literal: {title}");
    assert!(!title.contains('\u{1b}'), "escape bytes must be stripped");
}

// =============================================================================
// Ratings
// =============================================================================

#[tokio::test]
async fn non_integer_stars_are_never_sent() {
    let (mut app, worker, shared) = fixture();
    sign_in(&mut app, &worker).await;
    run_search(&mut app, &worker, "holiday").await;

    send(&mut app, Event::OpenRateModal);
    type_text(&mut app, "four");
    let actions = send(&mut app, Event::Enter);

    assert!(actions.is_empty(), "no request for a non-integer rating");
    assert!(shared.lock().unwrap().ratings.is_empty());
    assert!(matches!(app.modal, Some(Modal::Rate(_))), "form stays open");
    assert!(app.status.as_ref().unwrap().text.contains("whole number"));
}

#[tokio::test]
async fn valid_rating_submits_and_closes_the_dialog() {
    let (mut app, worker, shared) = fixture();
    sign_in(&mut app, &worker).await;
    run_search(&mut app, &worker, "holiday").await;

    send(&mut app, Event::OpenRateModal);
    type_text(&mut app, "5");
    send(&mut app, Event::Tab);
    type_text(&mut app, "classic");
    let actions = send(&mut app, Event::Enter);
    pump(&mut app, &worker, actions).await;

    assert!(app.modal.is_none());
    let ratings = shared.lock().unwrap().ratings.clone();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].stars, 5);
    assert_eq!(ratings[0].user_id, 7);
    assert_eq!(ratings[0].comment, "classic");
}

// =============================================================================
// Playlists
// =============================================================================

#[tokio::test]
async fn created_playlist_appears_exactly_once_in_listing() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;

    create_playlist(&mut app, &worker, "Road trip").await;

    let matching: Vec<_> = app
        .playlists
        .iter()
        .filter(|card| card.playlist.name == "Road trip")
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(app.modal.is_none(), "dialog closes on success");
}

#[tokio::test]
async fn navigating_to_playlists_reloads_data() {
    let (mut app, worker, shared) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Mix").await;

    // Mutate behind the client's back; navigation must pick it up.
    shared.lock().unwrap().playlists[0].name = "Renamed elsewhere".to_string();

    send(&mut app, Event::ShowSearch);
    let actions = send(&mut app, Event::ShowPlaylists);
    assert!(
        actions
            .iter()
            .any(|action| matches!(action, Action::CallApi(ApiRequest::LoadPlaylists { .. }))),
        "entering the view must trigger a reload"
    );
    pump(&mut app, &worker, actions).await;

    assert_eq!(app.playlists[0].playlist.name, "Renamed elsewhere");
}

#[tokio::test]
async fn deleting_playlist_removes_it_from_listing() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Short lived").await;

    let actions = send(&mut app, Event::DeletePlaylist);
    pump(&mut app, &worker, actions).await;

    assert!(app.playlists.is_empty());
}

#[tokio::test]
async fn deleting_missing_playlist_does_not_break_the_listing_flow() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Keeper").await;

    // A stale delete for an id that no longer exists.
    let response = worker
        .handle_request(ApiRequest::DeletePlaylist { playlist_id: 999 })
        .await;
    let (_, actions) = handle_event(&mut app, &Event::Api(response)).expect("api event");
    pump(&mut app, &worker, actions).await;

    assert_eq!(app.playlists.len(), 1);
    assert_eq!(app.playlists[0].playlist.name, "Keeper");
}

#[tokio::test]
async fn renaming_playlist_updates_listing() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Old name").await;

    send(&mut app, Event::OpenRenameModal);
    let Some(Modal::Rename(form)) = &mut app.modal else {
        panic!("rename dialog should be open");
    };
    form.name.clear();
    type_text(&mut app, "New name");
    let actions = send(&mut app, Event::Enter);
    pump(&mut app, &worker, actions).await;

    assert_eq!(app.playlists[0].playlist.name, "New name");
}

// =============================================================================
// Membership
// =============================================================================

async fn add_selected_song(app: &mut AppState, worker: &ApiWorker) {
    let actions = send(app, Event::OpenAddModal);
    pump(app, worker, actions).await;
    let actions = send(app, Event::Enter);
    pump(app, worker, actions).await;
}

#[tokio::test]
async fn round_trip_add_then_remove_leaves_playlist_empty() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Mix").await;

    run_search(&mut app, &worker, "holiday").await;
    add_selected_song(&mut app, &worker).await;
    assert!(app.modal.is_none(), "picker closes on success");

    let actions = send(&mut app, Event::ShowPlaylists);
    pump(&mut app, &worker, actions).await;
    assert_eq!(app.playlists[0].songs.len(), 1);

    let actions = send(&mut app, Event::RemoveSong);
    pump(&mut app, &worker, actions).await;
    assert!(app.playlists[0].songs.is_empty());
}

#[tokio::test]
async fn duplicate_add_surfaces_reason_and_preserves_contents() {
    let (mut app, worker, _) = fixture();
    sign_in(&mut app, &worker).await;
    create_playlist(&mut app, &worker, "Mix").await;

    run_search(&mut app, &worker, "holiday").await;
    add_selected_song(&mut app, &worker).await;

    // Second attempt for the same song.
    let actions = send(&mut app, Event::OpenAddModal);
    pump(&mut app, &worker, actions).await;
    let snapshot = app.playlists.clone();
    let actions = send(&mut app, Event::Enter);
    pump(&mut app, &worker, actions).await;

    let status = app.status.as_ref().expect("rejection should be shown");
    assert_eq!(status.text, DUPLICATE_MSG);
    assert!(
        matches!(app.modal, Some(Modal::AddToPlaylist(_))),
        "picker stays open for retry"
    );
    assert_eq!(app.playlists, snapshot, "rendered contents unchanged");
}

#[tokio::test]
async fn add_without_any_playlist_is_an_input_error() {
    let (mut app, worker, shared) = fixture();
    sign_in(&mut app, &worker).await;
    run_search(&mut app, &worker, "holiday").await;

    let actions = send(&mut app, Event::OpenAddModal);
    pump(&mut app, &worker, actions).await;
    let actions = send(&mut app, Event::Enter);

    assert!(actions.is_empty(), "no request without a target playlist");
    assert!(app.status.as_ref().unwrap().text.contains("Select a playlist"));
    assert!(shared.lock().unwrap().members.values().all(Vec::is_empty));
}

// =============================================================================
// Duplicate submission guard
// =============================================================================

#[tokio::test]
async fn double_submit_fires_only_one_request() {
    let (mut app, worker, _) = fixture();

    type_text(&mut app, "alice");
    let first = send(&mut app, Event::Enter);
    assert_eq!(first.len(), 1);

    // Second press lands before the response arrives.
    let second = send(&mut app, Event::Enter);
    assert!(second.is_empty(), "in-flight guard must swallow the repeat");

    pump(&mut app, &worker, first).await;
    assert_eq!(app.view, View::Search);
}
