use devotional_shared::{ApiError, Category, DevotionalPayload, FetchRequest, PageSlice};
#[cfg(not(feature = "mock"))]
use devotional_shared::ListResponse;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use serde::Deserialize;
use web_sys::File;

#[cfg(not(feature = "mock"))]
use crate::config::{upload_url, API_BASE};
#[cfg(feature = "mock")]
use crate::models;

/// Body some mutation endpoints send back. Only `status: false` matters.
#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    status: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default = "default_true")]
    status: bool,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(not(feature = "mock"))]
fn default_true() -> bool {
    true
}

#[cfg(not(feature = "mock"))]
fn devotionals_url(category: Category) -> String {
    format!("{}/devotionals/{}", API_BASE.trim_end_matches('/'), category.slug())
}

#[cfg(not(feature = "mock"))]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

/// Non-2xx is a failure; a 2xx body with `status: false` is a logical failure.
#[cfg(not(feature = "mock"))]
async fn expect_success(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<MutationResponse>(&body) {
        Ok(MutationResponse {
            status: Some(false),
            message,
        }) => Err(ApiError::Rejected(message.unwrap_or_else(|| "status is false".to_string()))),
        _ => Ok(()),
    }
}

/// 获取一页 devotionals，按分类与搜索词过滤
pub async fn fetch_devotionals(request: &FetchRequest) -> Result<PageSlice, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_list(request));
    }

    #[cfg(not(feature = "mock"))]
    {
        let category = request.endpoint_category();
        let mut url = format!(
            "{}?page={}&limit={}",
            devotionals_url(category),
            request.page,
            request.page_size
        );
        if let Some(search) = request.search.as_deref() {
            url.push_str(&format!("&search={}", urlencoding::encode(search)));
        }

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;

        body.into_slice()
    }
}

pub async fn create_devotional(payload: &DevotionalPayload) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        models::mock_create(payload);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::post(&devotionals_url(payload.category))
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await
    }
}

/// `category` comes from the edited draft, so a record can be moved between
/// categories by editing it.
pub async fn update_devotional(
    category: Category,
    id: &str,
    payload: &DevotionalPayload,
) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = category;
        return models::mock_update(id, payload);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/{}", devotionals_url(category), urlencoding::encode(id));
        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await
    }
}

pub async fn delete_devotional(category: Category, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = category;
        return models::mock_delete(id);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/{}", devotionals_url(category), urlencoding::encode(id));
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        expect_success(response).await
    }
}

/// Stores a locally selected image and returns its durable URL.
pub async fn upload_image(file: &File) -> Result<String, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_upload(file).await;
    }

    #[cfg(not(feature = "mock"))]
    {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Upload(format!("FormData unavailable: {:?}", e)))?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;

        let response = Request::post(&upload_url())
            .body(form)
            .map_err(|e| ApiError::Upload(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Upload(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(ApiError::Upload(format!("HTTP error: {}", response.status())));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Upload(format!("Parse error: {:?}", e)))?;
        match body {
            UploadResponse {
                status: true,
                url: Some(url),
                ..
            } if !url.trim().is_empty() => Ok(url),
            UploadResponse {
                message, ..
            } => Err(ApiError::Upload(
                message.unwrap_or_else(|| "upload returned no url".to_string()),
            )),
        }
    }
}
