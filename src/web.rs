use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::Serialize;

use crate::display::format_duration;
use crate::error::PlanError;
use crate::parser::{validate_request, PlanRequestForm, DATE_FORMAT};
use crate::planner::{generate_study_plan, StudyPlan};

/// Boundary configuration, built once in main and passed in explicitly
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin allowed by the CORS policy (the frontend URL)
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            allowed_origin: "http://localhost:3001".to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct StudyPlanResponse {
    study_plan: Vec<DayPlanView>,
}

#[derive(Serialize)]
pub struct DayPlanView {
    date: String,
    plan: Vec<SessionView>,
}

#[derive(Serialize)]
pub struct SessionView {
    subject: String,
    chapter: String,
    time: String,
}

fn to_response(plan: &StudyPlan) -> StudyPlanResponse {
    StudyPlanResponse {
        study_plan: plan
            .iter()
            .map(|day| DayPlanView {
                date: day.date.format(DATE_FORMAT).to_string(),
                plan: day
                    .plan
                    .iter()
                    .map(|session| SessionView {
                        subject: session.subject.clone(),
                        chapter: session.chapter.clone(),
                        time: format_duration(session.hours),
                    })
                    .collect(),
            })
            .collect(),
    }
}

// Health check endpoint
async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Smart Study Planner API is running"
    })))
}

// Plan generation endpoint
async fn generate_plan(form: web::Json<PlanRequestForm>) -> Result<HttpResponse> {
    let request = match validate_request(&form) {
        Ok(request) => request,
        Err(e) => {
            return Ok(HttpResponse::UnprocessableEntity()
                .json(serde_json::json!({"error": e.to_string()})))
        }
    };

    match generate_study_plan(&request) {
        Ok(plan) => Ok(HttpResponse::Ok().json(to_response(&plan))),
        Err(PlanError::EmptyPlan) => Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "Failed to generate study plan"}))),
    }
}

/// Route table shared by the server and the tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .route("/generate-plan", web::post().to(generate_plan));
}

pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    log::info!("listening on 0.0.0.0:{}", config.port);

    let allowed_origin = config.allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
