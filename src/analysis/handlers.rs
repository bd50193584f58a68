use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{
    models::{GameAnalysis, NewGameAnalysis},
    types::CreateGameAnalysisRequest,
};
use crate::extract::{Path, ValidatedJson};
use crate::shared::{AppError, AppState};

/// GET /api/game-analyses/:userId
#[instrument(name = "list_analyses", skip(state))]
pub async fn list_analyses(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<Vec<GameAnalysis>>, AppError> {
    let analyses = state.analysis_repository.list_analyses(user_id).await?;
    Ok(Json(analyses))
}

/// GET /api/game-analyses/single/:id
#[instrument(name = "get_analysis", skip(state))]
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<GameAnalysis>, AppError> {
    state
        .analysis_repository
        .get_analysis(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))
}

/// HTTP handler for storing a game analysis
///
/// POST /api/game-analyses
/// Moves submitted without a classification are classified from their
/// evaluation swing.
#[instrument(name = "create_analysis", skip(state, request), fields(user_id = request.user_id))]
pub async fn create_analysis(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGameAnalysisRequest>,
) -> Result<Json<GameAnalysis>, AppError> {
    let new_analysis = NewGameAnalysis {
        user_id: request.user_id,
        pgn_data: request.pgn_data,
        white_player: request.white_player,
        black_player: request.black_player,
        result: request.result,
        date: request.date,
        analysis: request.analysis.map(|submitted| submitted.classify()),
    };

    let created = state.analysis_repository.create_analysis(new_analysis).await?;
    info!(
        analysis_id = created.id,
        move_count = created.analysis.as_ref().map_or(0, |a| a.moves.len()),
        "Game analysis created"
    );
    Ok(Json(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoveClassification;
    use crate::shared::test_utils::{read_json, AppStateBuilder};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        Router::new()
            .route("/api/game-analyses", post(create_analysis))
            .route("/api/game-analyses/:id", get(list_analyses))
            .route("/api/game-analyses/single/:id", get(get_analysis))
            .with_state(AppStateBuilder::new().build())
    }

    fn post_json(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/game-analyses")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_fills_classifications() {
        let response = app()
            .oneshot(post_json(
                r#"{
                    "userId": 3,
                    "pgnData": "1. e4 e5",
                    "whitePlayer": "Alice",
                    "analysis": {"moves": [
                        {"move": "e4", "evaluation": 0.3, "classification": "Best"},
                        {"move": "e5", "evaluation": 0.3}
                    ]}
                }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created: GameAnalysis = read_json(response).await;
        assert_eq!(created.user_id, 3);
        assert_eq!(created.black_player, None);
        let moves = created.analysis.unwrap().moves;
        assert_eq!(moves[0].classification, MoveClassification::Best);
        assert_eq!(moves[1].san, "e5");
        assert_eq!(moves[1].classification, MoveClassification::Best);
    }

    #[tokio::test]
    async fn test_missing_pgn_is_400() {
        let response = app()
            .oneshot(post_json(r#"{"userId": 3}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_and_single_lookup() {
        let app = app();
        let created: GameAnalysis = read_json(
            app.clone()
                .oneshot(post_json(r#"{"userId": 4, "pgnData": "1. d4"}"#))
                .await
                .unwrap(),
        )
        .await;

        let response = app.clone().oneshot(get_request("/api/game-analyses/4")).await.unwrap();
        let listed: Vec<GameAnalysis> = read_json(response).await;
        assert_eq!(listed, vec![created.clone()]);

        let uri = format!("/api/game-analyses/single/{}", created.id);
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request("/api/game-analyses/single/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"], "Analysis not found");
    }
}
