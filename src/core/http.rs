use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};
use tracing::{
    debug,
    info,
};

use super::{
    models::{
        Amiibo,
        CatalogResponse,
    },
    DashError,
};

pub const DEFAULT_CATALOG_URL: &str = "https://www.amiiboapi.com/api/amiibo/";

/// The catalog request is never cut short: no timeout, no retry.
pub fn http_client() -> Result<Client, DashError> {
    Ok(Client::builder().build()?)
}

/// Single GET of the whole catalog. No pagination, no retry.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<Amiibo>, DashError> {
    info!(url, "fetching amiibo catalog");

    let resp = client
        .get(url)
        .header(USER_AGENT, concat!("amiibo-dash/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    ensure_success(&resp)?;

    let body = resp.text().await?;
    debug!(bytes = body.len(), "catalog body received");

    parse_catalog(&body)
}

pub fn parse_catalog(body: &str) -> Result<Vec<Amiibo>, DashError> {
    let response: CatalogResponse = serde_json::from_str(body)?;
    Ok(response.amiibo)
}

fn ensure_success(resp: &Response) -> Result<(), DashError> {
    if !resp.status().is_success() {
        return Err(DashError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Region;

    #[test]
    fn parses_catalog_body() {
        let body = r#"{"amiibo": [
            {"amiiboSeries": "Super Smash Bros.", "character": "Mario", "gameSeries": "Super Mario",
             "head": "00000000", "image": "https://example.com/mario.png", "name": "Mario",
             "release": {"au": "2014-11-29", "eu": "2014-11-28", "jp": "2014-12-06", "na": "2014-11-21"},
             "tail": "00000002", "type": "Figure"},
            {"amiiboSeries": "Animal Crossing", "character": "Isabelle", "gameSeries": "Animal Crossing",
             "head": "01810000", "image": "https://example.com/isabelle.png", "name": "Isabelle",
             "release": {"au": null, "eu": null, "jp": null, "na": null},
             "tail": "024e0502", "type": "Card"}
        ]}"#;

        let records = parse_catalog(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].character, "Mario");
        assert_eq!(records[1].kind, "Card");
        assert_eq!(records[1].release_date(Region::Na), None);
    }

    #[test]
    fn missing_list_is_empty_catalog() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_catalog("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, DashError::Json(_)));

        let err = parse_catalog(r#"{"amiibo": {"character": "Mario"}}"#).unwrap_err();
        assert!(matches!(err, DashError::Json(_)));
    }

    #[test]
    fn builds_client() {
        assert!(http_client().is_ok());
    }
}
