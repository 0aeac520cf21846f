// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Anonymous visitor identity.
//!
//! Favorites are keyed by a random id kept in a long-lived cookie. There are
//! no accounts; clearing cookies starts a fresh list.

use crate::error::AppError;
use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use ring::rand::{SecureRandom, SystemRandom};

pub const VISITOR_COOKIE: &str = "kff_visitor";

/// Visitor id, inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub id: String,
}

/// Attach a [`Visitor`] to the request, issuing a cookie on first contact.
pub async fn ensure_visitor(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<(CookieJar, Response), AppError> {
    let existing = jar
        .get(VISITOR_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| is_valid_visitor_id(id));

    let (jar, id) = match existing {
        Some(id) => (jar, id),
        None => {
            let id = new_visitor_id()?;
            tracing::debug!("Issuing new visitor cookie");
            let cookie = Cookie::build((VISITOR_COOKIE, id.clone()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .permanent();
            (jar.add(cookie), id)
        }
    };

    request.extensions_mut().insert(Visitor { id });
    Ok((jar, next.run(request).await))
}

/// 128 random bits, hex-encoded.
pub fn new_visitor_id() -> Result<String, AppError> {
    let mut bytes = [0u8; 16];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG failure")))?;
    Ok(hex::encode(bytes))
}

fn is_valid_visitor_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;
    use axum::{routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|Extension(v): Extension<Visitor>| async move { v.id }))
            .layer(axum::middleware::from_fn(ensure_visitor))
    }

    #[tokio::test]
    async fn test_new_visitor_gets_cookie() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("kff_visitor="));
        assert!(set_cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_existing_cookie_is_reused() {
        let id = "0123456789abcdef0123456789abcdef";
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, format!("{}={}", VISITOR_COOKIE, id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], id.as_bytes());
    }

    #[tokio::test]
    async fn test_malformed_cookie_is_replaced() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, "kff_visitor=../../etc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_some());
    }

    #[test]
    fn test_visitor_ids_are_hex() {
        let id = new_visitor_id().unwrap();
        assert!(is_valid_visitor_id(&id));
        assert_ne!(id, new_visitor_id().unwrap());
    }
}
