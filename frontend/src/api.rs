use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use crate::{
    error::{Error, Result},
    types::{LikeBody, LikeResponse},
};

pub const CSRF_HEADER: &str = "X-CSRFToken";

fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(Error::Status(response.status()))
    }
}

/// Delete a comment, any 2xx counts as success and the body is ignored.
pub async fn delete_comment(url: &str, csrf_token: &str) -> Result<()> {
    let response = Request::delete(url)
        .credentials(RequestCredentials::SameOrigin)
        .header(CSRF_HEADER, csrf_token)
        .send()
        .await?;

    ensure_ok(response)?;

    Ok(())
}

pub async fn like_review(url: &str, csrf_token: &str, review_id: &str) -> Result<LikeResponse> {
    // `json` also sets the `Content-Type: application/json` header
    let response = Request::post(url)
        .header(CSRF_HEADER, csrf_token)
        .json(&LikeBody { review_id })?
        .send()
        .await?;

    Ok(ensure_ok(response)?.json().await?)
}
