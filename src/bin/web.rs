//! Single binary web server: match catalog, result entry drafts and stored results via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the service is reachable on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tennis_results_web::logic::{super_tiebreak_applicable, tiebreak_set_indices};
use tennis_results_web::{
    apply, codes_for, finalize, import_results, score_lines, set_plan, DraftEvent, EngineError,
    InMemoryResultStore, MatchFormat, MatchId, MatchInfo, MatchStatus, Participants, ResultCode,
    ResultDraft, ResultId, ResultStore, Side, StoreError, StoredResult, SubmissionGuard,
};

/// In-memory state: the match catalog, open drafts (one per match) and stored results.
struct AppData {
    matches: RwLock<HashMap<MatchId, MatchInfo>>,
    drafts: RwLock<HashMap<MatchId, ResultDraft>>,
    results: RwLock<InMemoryResultStore>,
    submissions: SubmissionGuard,
}

type AppState = Data<AppData>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateMatchBody {
    format: MatchFormat,
    participants: Participants,
    #[serde(default)]
    status: MatchStatus,
}

#[derive(Deserialize)]
struct MatchStatusBody {
    status: MatchStatus,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Path segment: stored result id (e.g. /api/results/{id})
#[derive(Deserialize)]
struct ResultPath {
    id: ResultId,
}

/// Path segments: format and winning side (e.g. /api/formats/bo5/codes/home)
#[derive(Deserialize)]
struct CodesPath {
    format: MatchFormat,
    side: Side,
}

#[derive(Serialize)]
struct CodeView {
    code: ResultCode,
    straight_sets: bool,
    super_tiebreak: bool,
}

/// Draft plus what the form needs to render it.
#[derive(Serialize)]
struct DraftView<'a> {
    draft: &'a ResultDraft,
    codes: Vec<ResultCode>,
    tiebreak_sets: Vec<usize>,
    super_tiebreak_applicable: bool,
}

#[derive(Serialize)]
struct ResultView<'a> {
    result: &'a StoredResult,
    display: Vec<String>,
}

#[derive(Serialize)]
struct ImportLineView {
    line: u64,
    error: String,
}

#[derive(Serialize)]
struct ImportView {
    stored: Vec<ResultId>,
    rejected: Vec<ImportLineView>,
}

fn draft_view(draft: &ResultDraft) -> DraftView<'_> {
    DraftView {
        draft,
        codes: draft
            .winner
            .map(|winner| codes_for(draft.format, winner))
            .unwrap_or_default(),
        tiebreak_sets: tiebreak_set_indices(&draft.sets),
        super_tiebreak_applicable: draft
            .result_code
            .map(|code| super_tiebreak_applicable(draft.format, code))
            .unwrap_or(false),
    }
}

fn result_response(stored: &StoredResult) -> HttpResponse {
    match score_lines(&stored.record) {
        Ok(display) => HttpResponse::Ok().json(ResultView {
            result: stored,
            display,
        }),
        Err(e) => engine_error(&e),
    }
}

fn engine_error(e: &EngineError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "kind": e.kind() }))
}

fn store_error(e: &StoreError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        StoreError::NotFound(_) | StoreError::NoResultForMatch(_) => HttpResponse::NotFound().json(body),
        StoreError::AlreadyExists(_) | StoreError::SubmissionInFlight(_) => {
            HttpResponse::Conflict().json(body)
        }
        StoreError::MatchMismatch { .. } => HttpResponse::BadRequest().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn no_match() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" }))
}

fn match_closed() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": "Match does not accept results" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-results-web",
    })
}

/// Result codes a side can win by in a format.
#[get("/api/formats/{format}/codes/{side}")]
async fn api_result_codes(path: Path<CodesPath>) -> HttpResponse {
    let codes: Vec<CodeView> = codes_for(path.format, path.side)
        .into_iter()
        .filter_map(|code| {
            set_plan(path.format, code).ok().map(|plan| CodeView {
                code,
                straight_sets: plan.is_straight_sets,
                super_tiebreak: plan.third_set_is_super_tiebreak,
            })
        })
        .collect();
    HttpResponse::Ok().json(codes)
}

/// Register a match (stands in for the match catalog).
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<CreateMatchBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut info = match MatchInfo::new(body.format, body.participants) {
        Ok(info) => info,
        Err(e) => return engine_error(&e),
    };
    info.status = body.status;
    let mut g = match state.matches.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    log::info!("Registered {} {} match {}", info.format, info.mode(), info.id);
    g.insert(info.id, info.clone());
    HttpResponse::Ok().json(info)
}

#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.matches.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get(&path.id) {
        Some(info) => HttpResponse::Ok().json(info),
        None => no_match(),
    }
}

#[put("/api/matches/{id}/status")]
async fn api_set_match_status(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<MatchStatusBody>,
) -> HttpResponse {
    let mut g = match state.matches.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(info) => {
            info.status = body.status;
            HttpResponse::Ok().json(info)
        }
        None => no_match(),
    }
}

/// Open the result form: a fresh draft, or the stored result re-hydrated for editing.
#[post("/api/matches/{id}/draft")]
async fn api_open_draft(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let info = match state.matches.read() {
        Ok(g) => match g.get(&path.id) {
            Some(info) => info.clone(),
            None => return no_match(),
        },
        Err(_) => return lock_error(),
    };
    if !info.status.accepts_results() {
        return match_closed();
    }
    let draft = {
        let results = match state.results.read() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        match results.find_by_match(info.id) {
            Some(stored) => match ResultDraft::from_persisted(&stored.record, &info) {
                Ok(draft) => draft,
                Err(e) => return engine_error(&e),
            },
            None => ResultDraft::new(&info),
        }
    };
    let mut drafts = match state.drafts.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    // reopening discards unsaved edits
    drafts.insert(info.id, draft.clone());
    HttpResponse::Ok().json(draft_view(&draft))
}

/// Apply one edit to the open draft.
#[post("/api/matches/{id}/draft/events")]
async fn api_draft_event(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<DraftEvent>,
) -> HttpResponse {
    let mut drafts = match state.drafts.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let draft = match drafts.get_mut(&path.id) {
        Some(d) => d,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No open draft" })),
    };
    match apply(draft, body.into_inner()) {
        Ok(next) => {
            *draft = next;
            HttpResponse::Ok().json(draft_view(draft))
        }
        Err(e) => engine_error(&e),
    }
}

/// Validate the open draft and store it (create, or update if the match has a result).
#[post("/api/matches/{id}/result")]
async fn api_submit_result(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let _ticket = match state.submissions.begin(path.id) {
        Ok(ticket) => ticket,
        Err(e) => return store_error(&e),
    };
    // status may have changed since the draft was opened
    let accepts = match state.matches.read() {
        Ok(g) => match g.get(&path.id) {
            Some(info) => info.status.accepts_results(),
            None => return no_match(),
        },
        Err(_) => return lock_error(),
    };
    if !accepts {
        return match_closed();
    }
    let draft = match state.drafts.read() {
        Ok(g) => match g.get(&path.id) {
            Some(d) => d.clone(),
            None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No open draft" })),
        },
        Err(_) => return lock_error(),
    };
    let record = match finalize(&draft) {
        Ok(record) => record,
        Err(e) => return engine_error(&e),
    };
    let mut results = match state.results.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let stored = if results.find_by_match(path.id).is_some() {
        results.update(path.id, record)
    } else {
        results.create(path.id, record)
    };
    let id = match stored {
        Ok(id) => id,
        Err(e) => return store_error(&e),
    };
    if let Ok(mut drafts) = state.drafts.write() {
        drafts.remove(&path.id);
    }
    match results.get(id) {
        Some(stored) => result_response(stored),
        None => store_error(&StoreError::NotFound(id)),
    }
}

/// Stored result for a match, with display lines.
#[get("/api/matches/{id}/result")]
async fn api_get_result(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let results = match state.results.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match results.find_by_match(path.id) {
        Some(stored) => result_response(stored),
        None => store_error(&StoreError::NoResultForMatch(path.id)),
    }
}

#[delete("/api/results/{id}")]
async fn api_delete_result(state: AppState, path: Path<ResultPath>) -> HttpResponse {
    let mut results = match state.results.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match results.delete(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error(&e),
    }
}

/// Bulk import results from a CSV body. Valid rows for open matches are stored, the rest
/// reported by line.
#[post("/api/results/import")]
async fn api_import_results(state: AppState, body: String) -> HttpResponse {
    let catalog = match state.matches.read() {
        Ok(g) => g.clone(),
        Err(_) => return lock_error(),
    };
    let report = import_results(body.as_bytes(), |id| catalog.get(&id).cloned());

    let mut results = match state.results.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut view = ImportView {
        stored: Vec::new(),
        rejected: report
            .rejected
            .iter()
            .map(|(line, e)| ImportLineView {
                line: *line,
                error: e.to_string(),
            })
            .collect(),
    };
    for record in report.accepted {
        let match_id = record.match_id;
        let stored = if results.find_by_match(match_id).is_some() {
            results.update(match_id, record)
        } else {
            results.create(match_id, record)
        };
        match stored {
            Ok(id) => view.stored.push(id),
            Err(e) => log::warn!("Imported result for match {} not stored: {}", match_id, e),
        }
    }
    HttpResponse::Ok().json(view)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppData {
        matches: RwLock::new(HashMap::new()),
        drafts: RwLock::new(HashMap::new()),
        results: RwLock::new(InMemoryResultStore::new()),
        submissions: SubmissionGuard::new(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_result_codes)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_set_match_status)
            .service(api_open_draft)
            .service(api_draft_event)
            .service(api_submit_result)
            .service(api_get_result)
            .service(api_delete_result)
            .service(api_import_results)
    })
    .bind(bind)?
    .run()
    .await
}
