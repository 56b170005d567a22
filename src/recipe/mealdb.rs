use crate::models::recipe::{ RawMeal, Recipe };
use super::normalize_meal;
use crate::config::endpoint_url;
use futures::future::join_all;
use log::{ debug, info, warn };
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Error)]
pub enum RecipeSourceError {
    #[error("Recipe source request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid recipe source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct MealDbConfig {
    pub base_url: Url,
    /// How many meals of a category are looked up in full.
    pub category_limit: usize,
}

/// `meals` is `null` when nothing matched.
#[derive(Deserialize)]
struct MealsResponse {
    meals: Option<Vec<RawMeal>>,
}

impl MealsResponse {
    fn into_meals(self) -> Vec<RawMeal> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: HttpClient,
    config: MealDbConfig,
}

impl MealDbClient {
    pub fn new(config: MealDbConfig) -> Self {
        Self { http: HttpClient::new(), config }
    }

    pub async fn random(&self) -> Result<Option<Recipe>, RecipeSourceError> {
        let meals = self.fetch("random.php", &[]).await?;
        Ok(normalize_meal(meals.first()))
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeSourceError> {
        let meals = self.fetch("search.php", &[("s", query)]).await?;
        let recipes: Vec<Recipe> = meals
            .iter()
            .filter_map(|m| normalize_meal(Some(m)))
            .collect();
        info!("Recipe search '{}' matched {} meals", query, recipes.len());
        Ok(recipes)
    }

    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>, RecipeSourceError> {
        let meals = self.fetch("lookup.php", &[("i", id)]).await?;
        Ok(normalize_meal(meals.first()))
    }

    /// The filter endpoint only returns id, name and thumbnail, so the first
    /// `category_limit` hits are looked up concurrently. Order follows the
    /// filter result; meals that vanish between the two calls, or whose
    /// lookup fails, are skipped.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeSourceError> {
        let partial = self.fetch("filter.php", &[("c", category)]).await?;
        let ids: Vec<String> = partial
            .iter()
            .take(self.config.category_limit)
            .filter_map(|m| m.get("idMeal"))
            .filter_map(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect();

        let lookups = join_all(ids.iter().map(|id| self.lookup(id))).await;
        let mut recipes = Vec::with_capacity(lookups.len());
        for (id, result) in ids.iter().zip(lookups) {
            match result {
                Ok(Some(recipe)) => recipes.push(recipe),
                Ok(None) => debug!("Meal {} in category '{}' no longer exists", id, category),
                Err(e) => warn!("Skipping meal {} in category '{}': {}", id, category, e),
            }
        }
        info!("Category '{}' resolved {} full recipes", category, recipes.len());
        Ok(recipes)
    }

    async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, &str)]
    ) -> Result<Vec<RawMeal>, RecipeSourceError> {
        let url = endpoint_url(&self.config.base_url, endpoint)?;
        debug!("GET {} {:?}", url, query);
        let resp = self.http.get(url).query(query).send().await?.error_for_status()?;
        let body = resp.json::<MealsResponse>().await?;
        Ok(body.into_meals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{ Matcher, Server };
    use serde_json::json;

    fn client_for(server: &Server) -> MealDbClient {
        MealDbClient::new(MealDbConfig {
            base_url: Url::parse(&format!("{}/api/json/v1/1", server.url())).unwrap(),
            category_limit: 2,
        })
    }

    fn meal_json(id: &str, name: &str) -> Value {
        json!({
            "idMeal": id,
            "strMeal": name,
            "strCategory": "Seafood",
            "strArea": "Italian",
            "strIngredient1": "Shrimp",
            "strMeasure1": "200g",
            "strInstructions": "Fry. Serve."
        })
    }

    #[tokio::test]
    async fn lookup_normalizes_first_meal() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/json/v1/1/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52772".into()))
            .with_header("content-type", "application/json")
            .with_body(json!({ "meals": [meal_json("52772", "Shrimp Pasta")] }).to_string())
            .create_async().await;

        let recipe = client_for(&server).lookup("52772").await.unwrap().unwrap();
        mock.assert_async().await;
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.steps, vec!["Fry.", "Serve."]);
        assert_eq!(recipe.time_minutes, 20);
    }

    #[tokio::test]
    async fn null_meals_means_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/lookup.php")
            .match_query(Matcher::Any)
            .with_body(r#"{"meals":null}"#)
            .create_async().await;
        server
            .mock("GET", "/api/json/v1/1/search.php")
            .match_query(Matcher::Any)
            .with_body(r#"{"meals":null}"#)
            .create_async().await;

        let client = client_for(&server);
        assert_eq!(client.lookup("0").await.unwrap(), None);
        assert!(client.search("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_returns_every_match() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "shrimp pasta".into()))
            .with_body(
                json!({ "meals": [meal_json("1", "Shrimp Pasta"), meal_json("2", "Shrimp Pasta Bake")] }).to_string()
            )
            .create_async().await;

        let recipes = client_for(&server).search("shrimp pasta").await.unwrap();
        let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Shrimp Pasta", "Shrimp Pasta Bake"]);
    }

    #[tokio::test]
    async fn category_looks_up_limited_ids_in_order() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
            .with_body(
                json!({ "meals": [
                    { "idMeal": "10", "strMeal": "A" },
                    { "idMeal": "11", "strMeal": "B" },
                    { "idMeal": "12", "strMeal": "C" }
                ] }).to_string()
            )
            .create_async().await;
        for (id, name) in [("10", "A full"), ("11", "B full")] {
            server
                .mock("GET", "/api/json/v1/1/lookup.php")
                .match_query(Matcher::UrlEncoded("i".into(), id.into()))
                .with_body(json!({ "meals": [meal_json(id, name)] }).to_string())
                .create_async().await;
        }
        let skipped = server
            .mock("GET", "/api/json/v1/1/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "12".into()))
            .expect(0)
            .create_async().await;

        let recipes = client_for(&server).by_category("Seafood").await.unwrap();
        let ids: Vec<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "11"]);
        skipped.assert_async().await;
    }

    #[tokio::test]
    async fn category_skips_failed_lookups() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
            .with_body(
                json!({ "meals": [{ "idMeal": "1", "strMeal": "A" }, { "idMeal": "2", "strMeal": "B" }] }).to_string()
            )
            .create_async().await;
        server
            .mock("GET", "/api/json/v1/1/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "1".into()))
            .with_body(json!({ "meals": [meal_json("1", "A full")] }).to_string())
            .create_async().await;
        server
            .mock("GET", "/api/json/v1/1/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "2".into()))
            .with_status(500)
            .create_async().await;

        let recipes = client_for(&server).by_category("Seafood").await.unwrap();
        let ids: Vec<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[tokio::test]
    async fn category_filter_failure_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/filter.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async().await;

        assert!(client_for(&server).by_category("Seafood").await.is_err());
    }

    #[tokio::test]
    async fn upstream_failure_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/json/v1/1/random.php")
            .with_status(503)
            .create_async().await;

        let err = client_for(&server).random().await.unwrap_err();
        assert!(matches!(err, RecipeSourceError::Request(_)));
    }
}
