//! Word counting handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use toolbench::{WordCountOptions, WordCountStats, WordCounter};

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct WordsRequest {
    pub text: String,
    /// Missing fields take their defaults; a missing object takes the
    /// server's defaults.
    #[serde(default)]
    pub options: Option<WordCountOptions>,
}

#[derive(Serialize)]
pub struct TopWord {
    pub word: String,
    pub count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsResponse {
    pub word_count: usize,
    pub stats: WordCountStats,
    pub top_words: Vec<TopWord>,
}

pub async fn count_words(
    State(state): State<AppState>,
    payload: Result<Json<WordsRequest>, JsonRejection>,
) -> Result<Json<WordsResponse>, ApiError> {
    let Json(request) = payload?;
    let options = request.options.unwrap_or(state.word_options);

    let stats = WordCounter::new().analyze_text(&request.text, &options);
    let top_words = stats
        .top_words(state.top_words)
        .into_iter()
        .map(|(word, count)| TopWord {
            word: word.to_string(),
            count,
        })
        .collect();

    Ok(Json(WordsResponse {
        word_count: stats.total_words,
        stats,
        top_words,
    }))
}
