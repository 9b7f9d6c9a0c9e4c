use std::sync::Arc;

use log::debug;

use crate::error::DetailError;
use crate::model::MealDetail;
use crate::service::RecipeService;

/// Fetches one full meal record by id
#[derive(Clone)]
pub struct DetailLoader {
    service: Arc<dyn RecipeService>,
}

impl DetailLoader {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        DetailLoader { service }
    }

    pub async fn load_detail(&self, id: &str) -> Result<MealDetail, DetailError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DetailError::NotFound(String::new()));
        }

        debug!("Loading meal {} from {}", id, self.service.service_name());
        self.service
            .lookup(id)
            .await
            .map_err(DetailError::Network)?
            .ok_or_else(|| DetailError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::model::Ingredient;
    use crate::service::MealDbClient;
    use mockito::{Matcher, Server};

    fn loader(url: String) -> DetailLoader {
        DetailLoader::new(Arc::new(MealDbClient::with_base_url(url)))
    }

    #[tokio::test]
    async fn test_beef_stew_has_one_ingredient() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
            .with_status(200)
            .with_body(
                r#"{"meals":[{"idMeal":"52874","strMeal":"Beef Stew",
                    "strIngredient1":"Beef","strMeasure1":"1kg",
                    "strIngredient2":"","strMeasure2":"",
                    "strIngredient3":"","strMeasure3":" "}]}"#,
            )
            .create_async()
            .await;

        let detail = loader(server.url()).load_detail("52874").await.unwrap();

        assert_eq!(detail.name, "Beef Stew");
        assert_eq!(
            detail.ingredients,
            vec![Ingredient {
                name: "Beef".to_string(),
                measure: "1kg".to_string()
            }]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_lookup_is_not_found() {
        for body in [r#"{"meals":[]}"#, r#"{"meals":null}"#] {
            let mut server = Server::new_async().await;
            let _mock = server
                .mock("GET", "/lookup.php")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body(body)
                .create_async()
                .await;

            let result = loader(server.url()).load_detail("1").await;
            assert!(matches!(result, Err(DetailError::NotFound(id)) if id == "1"));
        }
    }

    #[tokio::test]
    async fn test_blank_id_issues_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let result = loader(server.url()).load_detail(" ").await;
        assert!(matches!(result, Err(DetailError::NotFound(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bad_body_is_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals":[{"strMeal":"No id"}]}"#)
            .create_async()
            .await;

        let err = loader(server.url()).load_detail("1").await.unwrap_err();
        assert!(matches!(err, DetailError::Network(_)));
        assert_eq!(err.to_string(), "Failed to load details.");
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
            .with_status(500)
            .create_async()
            .await;

        let result = loader(server.url()).load_detail("52874").await;

        assert!(matches!(
            result,
            Err(DetailError::Network(ServiceError::Request(_)))
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Reserve a free port, then close it so nothing is listening
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let result = loader(format!("http://{addr}")).load_detail("52874").await;

        assert!(matches!(
            result,
            Err(DetailError::Network(ServiceError::Request(_)))
        ));
    }
}
