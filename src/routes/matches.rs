use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Assistant, Matcher};
use crate::models::{
    AssistantRequest, AssistantResponse, DomainsResponse, ErrorResponse, FindMatchesResponse,
    HealthResponse, MatchRequest,
};

const MISSING_INPUT: &str = "Please provide skills and interest";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub assistant: Assistant,
}

/// Unversioned routes kept for existing clients
pub fn configure_root(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_internships));
}

/// Configure all versioned routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matches/find", web::post().to(find_matches))
        .route("/domains", web::get().to(list_domains))
        .route("/assistant", web::post().to(ask_assistant));
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Internship Matching API is running")
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        postings: state.matcher.catalog().len(),
    })
}

/// Validate a match request and split it into skills and interest
fn validated_inputs(req: MatchRequest) -> Result<(Vec<String>, String), HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: MISSING_INPUT.to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    match (req.skills, req.interest) {
        (Some(skills), Some(interest)) => Ok((skills, interest)),
        _ => Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: MISSING_INPUT.to_string(),
            message: "skills and interest are required".to_string(),
            status_code: 400,
        })),
    }
}

/// Match endpoint
///
/// POST /match
///
/// Request body:
/// ```json
/// {
///   "skills": ["SQL", "Python"],
///   "interest": "Data Science"
/// }
/// ```
///
/// Responds with up to five `{role, score, reason}` records.
async fn match_internships(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let (skills, interest) = match validated_inputs(req.into_inner()) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let results = state.matcher.match_postings(&skills, &interest);

    tracing::info!(
        "Returning {} matches for interest {:?} ({} skills)",
        results.len(),
        interest,
        skills.len()
    );

    HttpResponse::Ok().json(results)
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Same request body as `/match`; the response adds a confidence label per
/// match, skills worth learning for the chosen domain, and the catalog size.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let (skills, interest) = match validated_inputs(req.into_inner()) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let shortlist = state.matcher.shortlist(&skills, &interest);

    let response = FindMatchesResponse {
        matches: shortlist.matches,
        suggested_skills: shortlist.suggested_skills,
        total_postings: shortlist.total_postings,
    };

    tracing::info!(
        "Returning {} matches for interest {:?} (from {} postings)",
        response.matches.len(),
        interest,
        response.total_postings
    );

    HttpResponse::Ok().json(response)
}

/// List catalog domains
///
/// GET /api/v1/domains
async fn list_domains(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(DomainsResponse {
        domains: state.matcher.catalog().domains(),
    })
}

/// Canned-reply assistant
///
/// POST /api/v1/assistant
///
/// Request body: `{"message": "how is my score computed?"}`
async fn ask_assistant(
    state: web::Data<AppState>,
    req: web::Json<AssistantRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(AssistantResponse {
        reply: state.assistant.reply(&req.message).to_string(),
    })
}
