// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-over-HTTP implementation of [`Remote`] using reqwest.

use std::time::Duration;

use parley_core::{DayUpdate, ExerciseUpdate, UserId, UserRecord};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::remote::{
    NewUser, Remote, RemoteError, RemoteFuture, RemoteResult, SessionStatus, UserSummary,
};
use crate::store::LocalStore;

/// Header carrying the content-derived key of a replayed update.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Backend client.
///
/// The session cookie handed out by the backend is kept in the
/// [`LocalStore`] auth-token key, so later processes reuse the session.
pub struct HttpRemote {
    client: Client,
    base_url: String,
    credentials: LocalStore,
}

impl HttpRemote {
    pub fn new(base_url: &str, timeout: Duration, credentials: LocalStore) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpRemote {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> RemoteResult<Response> {
        let request = match self.credentials.auth_token()? {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok());
        if let Some(cookie) = session_cookie(set_cookies) {
            self.credentials.set_auth_token(&cookie)?;
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> RemoteResult<T> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

impl Remote for HttpRemote {
    fn create_user(&self, user: NewUser) -> RemoteFuture<'_, UserSummary> {
        Box::pin(async move {
            let request = self.client.post(self.url("/user")).json(&user);
            self.json(request).await
        })
    }

    fn login(&self, email: String, password: String) -> RemoteFuture<'_, UserSummary> {
        Box::pin(async move {
            let body = serde_json::json!({ "email": email, "password": password });
            let request = self.client.post(self.url("/login")).json(&body);
            self.json(request).await
        })
    }

    fn logout(&self) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            self.send(self.client.post(self.url("/logout"))).await?;
            Ok(())
        })
    }

    fn check_session(&self) -> RemoteFuture<'_, SessionStatus> {
        Box::pin(async move { self.json(self.client.get(self.url("/check-auth"))).await })
    }

    fn fetch_user(&self, id: UserId) -> RemoteFuture<'_, UserRecord> {
        Box::pin(async move {
            let request = self.client.get(self.url(&format!("/user/{id}")));
            self.json(request).await
        })
    }

    fn put_exercise(
        &self,
        user_id: UserId,
        update: ExerciseUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let path = format!("/exercise/{user_id}/{}", update.exercise_type);
            let request = self
                .client
                .put(self.url(&path))
                .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
                .json(&update);
            self.send(request).await?;
            Ok(())
        })
    }

    fn put_training_day(
        &self,
        user_id: UserId,
        update: DayUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let path = format!("/training-day/{user_id}/{}", update.day_number);
            let request = self
                .client
                .put(self.url(&path))
                .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
                .json(&update);
            self.send(request).await?;
            Ok(())
        })
    }

    fn fetch_report(&self, user_id: UserId) -> RemoteFuture<'_, Vec<u8>> {
        Box::pin(async move {
            let request = self.client.get(self.url(&format!("/report/{user_id}")));
            let bytes = self
                .send(request)
                .await?
                .bytes()
                .await
                .map_err(|e| RemoteError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        })
    }
}

pub(crate) fn api_url(base_url: &str, path: &str) -> String {
    format!("{}/api{}", base_url.trim_end_matches('/'), path)
}

/// Reduce `Set-Cookie` header values to a `Cookie` header value.
///
/// Only the `name=value` pair of each cookie is kept; attributes such as
/// `Path` or `HttpOnly` are dropped.
pub(crate) fn session_cookie<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let pairs: Vec<&str> = values
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}

/// Server message for a failed request: the `error` field of a JSON body,
/// else the raw body, else the status reason.
pub(crate) fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if !body.is_empty() && !body.starts_with('<') {
        return body.to_string();
    }
    reason.unwrap_or("request failed").to_string()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
