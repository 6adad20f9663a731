use super::dto::{
    CredentialsRequest, SaveActivityRequest, SavedActivitiesResponse, SavedStateResponse,
    TokenResponse,
};
use super::model::SavedActivities;
use crate::http::{build_client, MAX_RETRIES};
use reqwest::{Response, StatusCode};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const SAVE_PATH: &str = "/api/activities/save";
const SAVED_PATH: &str = "/api/activities/saved";
const CHECK_PATH: &str = "/api/activities/check";

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("backend reported the request as unsuccessful")]
    Unsuccessful,

    #[error("not signed in")]
    MissingToken,
}

/// Client of the backend keeping each user's saved activities.
pub struct FavoritesAPI {
    client: ClientWithMiddleware,
    retrying_client: ClientWithMiddleware,
    base_url: String,
    token: Option<String>,
}

impl FavoritesAPI {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            // saving toggles, so it must not be sent twice
            client: build_client(0),
            retrying_client: build_client(MAX_RETRIES),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(&mut self, user_id: &str, password: &str) -> Result<(), FavoritesError> {
        self.authenticate(REGISTER_PATH, user_id, password).await
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&mut self, user_id: &str, password: &str) -> Result<(), FavoritesError> {
        self.authenticate(LOGIN_PATH, user_id, password).await
    }

    async fn authenticate(
        &mut self,
        path: &str,
        user_id: &str,
        password: &str,
    ) -> Result<(), FavoritesError> {
        let response = self
            .client
            .post(self.url(path))
            .json(&CredentialsRequest { user_id, password })
            .send()
            .await?;
        let token_response: TokenResponse = read(response).await?;

        info!("Signed in");

        self.token = Some(token_response.token);

        Ok(())
    }

    /// Saves the activity, or unsaves it when already saved.
    /// Returns whether it is saved afterwards.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_saved(&self, activity_id: &str) -> Result<bool, FavoritesError> {
        let response = self
            .client
            .post(self.url(SAVE_PATH))
            .bearer_auth(self.bearer()?)
            .json(&SaveActivityRequest { activity_id })
            .send()
            .await?;
        let state: SavedStateResponse = read(response).await?;

        if !state.success {
            return Err(FavoritesError::Unsuccessful);
        }

        info!("Activity is now {}", if state.saved { "saved" } else { "unsaved" });

        Ok(state.saved)
    }

    #[tracing::instrument(skip(self))]
    pub async fn saved_activities(&self) -> Result<SavedActivities, FavoritesError> {
        let response = self
            .retrying_client
            .get(self.url(SAVED_PATH))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let saved: SavedActivitiesResponse = read(response).await?;

        if !saved.success {
            return Err(FavoritesError::Unsuccessful);
        }

        debug!("User has {} saved activities", saved.saved_activities.len());

        Ok(SavedActivities::new(saved.saved_activities))
    }

    #[tracing::instrument(skip(self))]
    pub async fn is_saved(&self, activity_id: &str) -> Result<bool, FavoritesError> {
        let response = self
            .retrying_client
            .get(self.url(CHECK_PATH))
            .query(&[("activityId", activity_id)])
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let state: SavedStateResponse = read(response).await?;

        if !state.success {
            return Err(FavoritesError::Unsuccessful);
        }

        Ok(state.saved)
    }

    fn bearer(&self) -> Result<&str, FavoritesError> {
        self.token.as_deref().ok_or(FavoritesError::MissingToken)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, FavoritesError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        error!("Favorites backend answered {}: {}", status, body);

        return Err(FavoritesError::Status { status, body });
    }

    Ok(response.json::<T>().await?)
}
