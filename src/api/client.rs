use super::models::{ApiUser, NewTimeEntry, TimeEntry, format_api_instant};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.clockify.me/api/v1";
const API_KEY_HEADER: &str = "x-api-key";
const PAGE_SIZE: usize = 200;
const MAX_PAGES: usize = 50;

/// Remote time-tracking service: identity lookup, interval source and sink.
#[async_trait]
pub trait TimeTrackingApi: Send + Sync {
    async fn current_user(&self) -> AppResult<ApiUser>;

    async fn list_time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<TimeEntry>>;

    async fn create_time_entry(
        &self,
        workspace_id: &str,
        entry: &NewTimeEntry,
    ) -> AppResult<TimeEntry>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTimeTrackingClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl ReqwestTimeTrackingClient {
    pub fn new(base_url: &str, api_key: &str) -> AppResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::MissingConfig("api_key".to_string()));
        }
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|error| AppError::Config(format!("invalid api_base_url: {error}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "api_base_url cannot be a base: {base_url}"
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::Config("api_base_url cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn api_error(status: StatusCode, body: &str) -> AppError {
        AppError::Api {
            status: status.as_u16(),
            body: body.trim().to_string(),
        }
    }

    async fn read_body(response: reqwest::Response, what: &str) -> AppResult<(StatusCode, String)> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| AppError::Http(format!("failed reading {what} response: {error}")))?;
        Ok((status, body))
    }

    async fn time_entries_page(
        &self,
        url: Url,
        start: &str,
        end: &str,
        page: usize,
    ) -> AppResult<Vec<TimeEntry>> {
        let page_no = page.to_string();
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("start", start),
                ("end", end),
                ("page", page_no.as_str()),
                ("page-size", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|error| {
                AppError::Http(format!("network error while listing time entries: {error}"))
            })?;

        let (status, body) = Self::read_body(response, "time entries").await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|error| AppError::Payload(format!("invalid time entries payload: {error}")))
    }
}

/// Fetch pages 1, 2, ... until one comes back shorter than `page_size`.
/// Running out of `max_pages` on a full page is an error: the range holds
/// more items than would be returned.
async fn collect_pages<T, F, Fut>(
    page_size: usize,
    max_pages: usize,
    mut fetch: F,
) -> AppResult<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = AppResult<Vec<T>>>,
{
    let mut items = Vec::new();
    for page in 1..=max_pages {
        let batch = fetch(page).await?;
        let last_page = batch.len() < page_size;
        items.extend(batch);
        if last_page {
            return Ok(items);
        }
    }

    Err(AppError::Payload(format!(
        "more than {max_pages} pages of {page_size} time entries in the requested range"
    )))
}

#[async_trait]
impl TimeTrackingApi for ReqwestTimeTrackingClient {
    async fn current_user(&self) -> AppResult<ApiUser> {
        let response = self
            .client
            .get(self.endpoint(&["user"])?)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|error| AppError::Http(format!("network error while resolving user: {error}")))?;

        let (status, body) = Self::read_body(response, "user").await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|error| AppError::Payload(format!("invalid user payload: {error}; body={body}")))
    }

    async fn list_time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<TimeEntry>> {
        let url = self.endpoint(&["workspaces", workspace_id, "user", user_id, "time-entries"])?;
        let start = format_api_instant(start);
        let end = format_api_instant(end);
        let (start, end) = (start.as_str(), end.as_str());

        collect_pages(PAGE_SIZE, MAX_PAGES, |page| {
            let url = url.clone();
            async move { self.time_entries_page(url, start, end, page).await }
        })
        .await
    }

    async fn create_time_entry(
        &self,
        workspace_id: &str,
        entry: &NewTimeEntry,
    ) -> AppResult<TimeEntry> {
        let response = self
            .client
            .post(self.endpoint(&["workspaces", workspace_id, "time-entries"])?)
            .header(API_KEY_HEADER, &self.api_key)
            .json(entry)
            .send()
            .await
            .map_err(|error| {
                AppError::Http(format!("network error while creating time entry: {error}"))
            })?;

        let (status, body) = Self::read_body(response, "create time entry").await?;
        if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
            return Err(Self::api_error(status, &body));
        }

        // the created entry is informative only; an odd body is not a failure
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_api_key() {
        let res = ReqwestTimeTrackingClient::new(DEFAULT_API_BASE, "  ");
        assert!(matches!(res, Err(AppError::MissingConfig(_))));
    }

    #[test]
    fn endpoints_are_appended_to_base_path() {
        let client = ReqwestTimeTrackingClient::new("https://api.example.test/api/v1/", "k").unwrap();
        let url = client
            .endpoint(&["workspaces", "ws 1", "user", "u1", "time-entries"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.test/api/v1/workspaces/ws%201/user/u1/time-entries"
        );
    }

    fn page(len: usize) -> AppResult<Vec<u32>> {
        Ok((0..len as u32).collect())
    }

    #[tokio::test]
    async fn full_page_then_empty_page_stops() {
        let mut calls = Vec::new();
        let items = collect_pages(3, 10, |p| {
            calls.push(p);
            std::future::ready(if p == 1 { page(3) } else { page(0) })
        })
        .await
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(calls, vec![1, 2]);
    }

    #[tokio::test]
    async fn short_first_page_is_the_last() {
        let mut calls = Vec::new();
        let items = collect_pages(3, 10, |p| {
            calls.push(p);
            std::future::ready(page(2))
        })
        .await
        .unwrap();

        assert_eq!(items, vec![0, 1]);
        assert_eq!(calls, vec![1]);
    }

    #[tokio::test]
    async fn pages_are_concatenated_in_order() {
        let items = collect_pages(2, 10, |p| {
            std::future::ready(match p {
                1 => Ok(vec![1, 2]),
                2 => Ok(vec![3, 4]),
                _ => Ok(vec![5]),
            })
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn hitting_the_page_cap_is_an_error() {
        let mut calls = 0;
        let res = collect_pages(3, 4, |_| {
            calls += 1;
            std::future::ready(page(3))
        })
        .await;

        assert_eq!(calls, 4);
        assert!(matches!(res, Err(AppError::Payload(msg)) if msg.contains("more than 4 pages")));
    }

    #[tokio::test]
    async fn failing_page_aborts_the_listing() {
        let res = collect_pages(3, 10, |p| {
            std::future::ready(if p == 1 {
                page(3)
            } else {
                Err(AppError::Http("down".into()))
            })
        })
        .await;

        assert!(matches!(res, Err(AppError::Http(_))));
    }

    #[test]
    fn api_error_carries_status_and_body() {
        let err = ReqwestTimeTrackingClient::api_error(StatusCode::UNAUTHORIZED, " denied ");
        assert_eq!(err.to_string(), "Time-tracking API error: http 401; body=denied");
    }
}
