use crate::companion::{ ConversationManager, SummaryGenerator };
use crate::config::prompt::DEFAULT_USER_NAME;
use crate::models::chat::ChatMessage;
use crate::models::recipe::{ Ingredient, Recipe };
use crate::recipe::mealdb::{ MealDbClient, RecipeSourceError };
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ Path, Query, State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::{ HeaderValue, Method, StatusCode },
};
use serde::{ Deserialize, Serialize };
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{ AllowHeaders, AllowOrigin, CorsLayer };
use log::{ info, error };

const UNKNOWN: &str = "Unknown";

#[derive(Clone)]
pub struct AppState {
    pub recipes: MealDbClient,
    pub summaries: SummaryGenerator,
    pub companion: ConversationManager,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    RecipeSource(#[from] RecipeSourceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RecipeSource(e) => {
                error!("Recipe source error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub recipe_name: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SummaryResponse {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatMessage>>,
    pub user_name: Option<String>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

pub fn router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(cors_origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/recipes/random", get(random_recipe_handler))
        .route("/api/recipes/search", get(search_recipes_handler))
        .route("/api/recipes/category/{category}", get(category_recipes_handler))
        .route("/api/recipes/{id}", get(recipe_by_id_handler))
        .route("/api/ai/recipe-summary", post(recipe_summary_handler))
        .route("/api/ai/chat", post(chat_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok", "message": "CoCo backend is running" }))
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Not found".into())
}

async fn random_recipe_handler(State(state): State<AppState>) -> Result<Json<Recipe>, ApiError> {
    state.recipes
        .random().await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Failed to fetch random recipe".into()))
}

async fn search_recipes_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let query = non_blank(params.q).ok_or_else(||
        ApiError::BadRequest("Search query required".into())
    )?;
    Ok(Json(state.recipes.search(&query).await?))
}

async fn category_recipes_handler(
    State(state): State<AppState>,
    Path(category): Path<String>
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.recipes.by_category(&category).await?))
}

async fn recipe_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> Result<Json<Recipe>, ApiError> {
    state.recipes
        .lookup(&id).await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Recipe not found".into()))
}

async fn recipe_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(req) = payload?;
    let (Some(name), Some(ingredients), Some(steps)) = (
        non_blank(req.recipe_name),
        req.ingredients,
        req.steps,
    ) else {
        return Err(ApiError::BadRequest("Missing required fields".into()));
    };

    let recipe = Recipe {
        name,
        category: non_empty(req.category).unwrap_or_else(|| UNKNOWN.to_string()),
        area: non_empty(req.area).unwrap_or_else(|| UNKNOWN.to_string()),
        ingredients,
        steps,
        ..Default::default()
    };
    info!("Summary requested for '{}'", recipe.name);
    let text = state.summaries.summarize(&recipe).await;
    Ok(Json(SummaryResponse { text }))
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let messages = req.messages.ok_or_else(||
        ApiError::BadRequest("Messages array required".into())
    )?;
    let user_name = non_empty(req.user_name).unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

    let reply = state.companion.respond(&messages, &user_name).await;
    Ok(Json(ChatResponse { reply }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
