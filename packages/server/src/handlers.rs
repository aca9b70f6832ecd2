//! HTTP handler functions for the ward air API.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use chrono::Datelike as _;
use ward_air_ai::AdvisorMode;
use ward_air_analytics::{
    AnalyticsError, admin_report, citizen_advisory, city_summary, compare_forecasts,
    generate_heatmap, monitor_card, news_feed,
};
use ward_air_analytics_models::{AdminFilter, HeatmapMetric, NewsCategory, PolicySet};
use ward_air_catalog::search::{locate_ward, matched_landmark, search_wards};
use ward_air_server_models::{
    AdminParams, AiMode, ApiAiReply, ApiCapabilities, ApiError, ApiHealth, ApiSearchHit, ApiWard,
    AskRequest, CompareParams, HeatmapParams, LocateParams, NewsParams, SearchParams, ViewMode,
};

use crate::AppState;
use crate::views::{api_catalog, view_payload};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/capabilities`
pub async fn capabilities(state: web::Data<AppState>) -> HttpResponse {
    let ai_mode = ai_mode(state.advisor.mode());

    HttpResponse::Ok().json(ApiCapabilities {
        ai_mode,
        ai_provider: state.advisor.provider_name().map(str::to_string),
        voice_assistant: ai_mode == AiMode::Live,
        catalog_id: state.simulation.catalog_id.clone(),
        tick_interval_secs: state.simulation.tick_interval.as_secs_f64(),
    })
}

/// `GET /api/wards`
pub async fn wards(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(api_catalog(&state.store.current()))
}

/// `GET /api/wards/search?q=`
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> HttpResponse {
    let catalog = state.store.current();
    let query = params.q.as_deref().unwrap_or("");

    let hits: Vec<ApiSearchHit> = search_wards(&catalog.wards, query)
        .into_iter()
        .map(|ward| ApiSearchHit {
            ward: ApiWard::from(ward),
            landmark: matched_landmark(ward, query).to_string(),
        })
        .collect();

    HttpResponse::Ok().json(hits)
}

/// `GET /api/wards/{id}`
///
/// Returns the live monitor card for one ward.
pub async fn ward(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let catalog = state.store.current();
    catalog.ward(&path).map_or_else(
        || ward_not_found(&path),
        |ward| HttpResponse::Ok().json(monitor_card(ward)),
    )
}

/// `GET /api/wards/{id}/heatmap?metric=AQI|PM25|PM2.5&year=`
pub async fn heatmap(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<HeatmapParams>,
) -> HttpResponse {
    let metric = match params.metric.as_deref() {
        None => HeatmapMetric::default(),
        Some(raw) => match HeatmapMetric::from_str(raw) {
            Ok(metric) => metric,
            Err(_) => return bad_request(format!("Unknown heatmap metric: {raw}")),
        },
    };

    if state.store.current().ward(&path).is_none() {
        return ward_not_found(&path);
    }

    let year = params.year.unwrap_or_else(|| chrono::Utc::now().year());
    HttpResponse::Ok().json(generate_heatmap(&path, metric, year))
}

/// `GET /api/wards/{id}/advisory`
pub async fn advisory(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let catalog = state.store.current();
    catalog.ward(&path).map_or_else(
        || ward_not_found(&path),
        |ward| HttpResponse::Ok().json(citizen_advisory(ward)),
    )
}

/// `GET /api/wards/{id}/compare?with=A,B`
///
/// Overlays the forecasts of the listed wards on this ward's forecast.
pub async fn compare(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<CompareParams>,
) -> HttpResponse {
    let catalog = state.store.current();
    if catalog.ward(&path).is_none() {
        return ward_not_found(&path);
    }

    match compare_forecasts(&catalog.wards, &path, &params.ids()) {
        Ok(comparison) => HttpResponse::Ok().json(comparison),
        Err(AnalyticsError::UnknownWard { id }) => {
            bad_request(format!("Unknown ward to compare: {id}"))
        }
        Err(e) => {
            log::error!("Forecast comparison failed: {e}");
            HttpResponse::InternalServerError().json(ApiError::new(e.to_string()))
        }
    }
}

/// `POST /api/wards/{id}/analysis`
pub async fn analysis(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let catalog = state.store.current();
    let Some(ward) = catalog.ward(&path) else {
        return ward_not_found(&path);
    };

    let text = state.advisor.ward_analysis(ward).await;
    ai_reply(&state, text)
}

/// `GET /api/summary`
pub async fn summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(city_summary(&state.store.current().wards))
}

/// `GET /api/admin?filter=&oddEven=&constructionBan=&industrialCurfew=`
pub async fn admin(state: web::Data<AppState>, params: web::Query<AdminParams>) -> HttpResponse {
    let filter = match params.filter.as_deref() {
        None => AdminFilter::default(),
        Some(raw) => match AdminFilter::from_str(raw) {
            Ok(filter) => filter,
            Err(_) => return bad_request(format!("Unknown admin filter: {raw}")),
        },
    };

    let policies = PolicySet {
        odd_even: params.odd_even.unwrap_or(false),
        construction_ban: params.construction_ban.unwrap_or(false),
        industrial_curfew: params.industrial_curfew.unwrap_or(false),
    };

    HttpResponse::Ok().json(admin_report(&state.store.current().wards, filter, policies))
}

/// `GET /api/news?category=`
pub async fn news(params: web::Query<NewsParams>) -> HttpResponse {
    let category = match params.category.as_deref() {
        None | Some("" | "All" | "ALL" | "all") => None,
        Some(raw) => match NewsCategory::from_str(raw) {
            Ok(category) => Some(category),
            Err(_) => return bad_request(format!("Unknown news category: {raw}")),
        },
    };

    HttpResponse::Ok().json(news_feed(category))
}

/// `GET /api/locate?lat=&lon=`
pub async fn locate(state: web::Data<AppState>, params: web::Query<LocateParams>) -> HttpResponse {
    let catalog = state.store.current();
    locate_ward(&catalog.wards, params.lat, params.lon).map_or_else(
        || {
            HttpResponse::NotFound().json(ApiError::new(format!(
                "No ward found near {}, {}",
                params.lat, params.lon
            )))
        },
        |ward| HttpResponse::Ok().json(ApiWard::from(ward)),
    )
}

/// `POST /api/ai/forecast`
pub async fn ai_forecast(state: web::Data<AppState>) -> HttpResponse {
    let catalog = state.store.current();
    let text = state.advisor.forecast_insights(&catalog.wards).await;
    ai_reply(&state, text)
}

/// `POST /api/ai/ask`
pub async fn ai_ask(state: web::Data<AppState>, body: web::Json<AskRequest>) -> HttpResponse {
    let question = body.question.trim();
    if question.is_empty() {
        return bad_request("Question must not be empty");
    }

    let catalog = state.store.current();
    let text = state.advisor.chat(question, &catalog.wards).await;
    ai_reply(&state, text)
}

/// `GET /api/views/{mode}`
pub async fn view(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match ViewMode::from_str(&path) {
        Ok(mode) => HttpResponse::Ok().json(view_payload(mode, &state.store.current())),
        Err(_) => HttpResponse::NotFound().json(ApiError::new(format!("Unknown view: {path}"))),
    }
}

const fn ai_mode(mode: AdvisorMode) -> AiMode {
    match mode {
        AdvisorMode::Live => AiMode::Live,
        AdvisorMode::Simulated => AiMode::Simulated,
    }
}

fn ai_reply(state: &AppState, text: String) -> HttpResponse {
    HttpResponse::Ok().json(ApiAiReply {
        text,
        mode: ai_mode(state.advisor.mode()),
    })
}

fn ward_not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new(format!("Ward not found: {id}")))
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError::new(message))
}
