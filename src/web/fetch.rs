//! One-shot word list download. Runs detached; a failure leaves the pool as
//! it was.

use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Response, window};

use crate::words::{WordPool, parse_datamuse};

#[derive(Debug)]
pub(crate) enum FetchError {
    NoWindow,
    Http(u16),
    Js(String),
    Parse(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoWindow => write!(f, "no window"),
            FetchError::Http(status) => write!(f, "HTTP status {status}"),
            FetchError::Js(msg) => write!(f, "{msg}"),
            FetchError::Parse(e) => write!(f, "bad word list: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<JsValue> for FetchError {
    fn from(v: JsValue) -> Self {
        FetchError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e)
    }
}

pub(crate) fn spawn_word_fetch(url: String, max_len: usize, pool: WordPool) {
    spawn_local(async move {
        match fetch_words(&url).await {
            Ok(words) => {
                let kept = pool.replace(words, max_len);
                log::debug!("word pool refreshed: {kept} words");
            }
            Err(e) => log::error!("Failed to fetch words from {url}: {e}"),
        }
    });
}

async fn fetch_words(url: &str) -> Result<Vec<String>, FetchError> {
    let win = window().ok_or(FetchError::NoWindow)?;
    let resp: Response = JsFuture::from(win.fetch_with_str(url)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }
    let body = JsFuture::from(resp.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| FetchError::Js("response body is not text".into()))?;
    Ok(parse_datamuse(&body)?)
}
