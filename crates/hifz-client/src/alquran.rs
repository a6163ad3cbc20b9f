//! alquran.cloud scripture source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::instrument;

use hifz_core::error::RetrievalError;
use hifz_core::model::{
    Chapter, ChapterPair, ChapterSummary, Edition, RevelationPlace, SearchMatch, Verse,
};
use hifz_core::traits::{build_audio_url, ScriptureSource};

use crate::cache::ChapterCache;
use crate::config::HifzConfig;

/// Client for the alquran.cloud REST API.
pub struct AlQuranClient {
    base_url: Url,
    original_edition: String,
    translation_edition: String,
    search_language: String,
    audio_base_url: String,
    audio_format: String,
    reciter: String,
    timeout_secs: Option<u64>,
    client: reqwest::Client,
    cache: Arc<ChapterCache>,
}

impl AlQuranClient {
    /// Client with default editions, optionally pointed at another API root.
    pub fn new(base_url: Option<String>) -> Result<Self, RetrievalError> {
        let mut config = HifzConfig::default();
        if let Some(url) = base_url {
            config.base_url = url;
        }
        Self::from_config(&config)
    }

    pub fn from_config(config: &HifzConfig) -> Result<Self, RetrievalError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                RetrievalError::Malformed(format!("invalid base URL: {}", config.base_url))
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RetrievalError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            original_edition: config.original_edition.clone(),
            translation_edition: config.translation_edition.clone(),
            search_language: config.search_language.clone(),
            audio_base_url: config.audio_base_url.clone(),
            audio_format: config.audio_format.clone(),
            reciter: config.reciter.clone(),
            timeout_secs: config.request_timeout_secs,
            client,
            cache: Arc::new(ChapterCache::new()),
        })
    }

    /// Use `cache` instead of the client's own, e.g. to share it between clients.
    pub fn with_cache(mut self, cache: Arc<ChapterCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<ChapterCache> {
        &self.cache
    }

    /// `base_url` with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET `url` and unwrap the `{ code, status, data }` envelope.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, RetrievalError> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RetrievalError::Timeout(self.timeout_secs.unwrap_or_default())
            } else {
                RetrievalError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|e| e.message())
                .unwrap_or(body);
            return Err(RetrievalError::Http { status, message });
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| RetrievalError::Malformed(format!("failed to parse response: {e}")))?;
        if envelope.code != 200 {
            return Err(RetrievalError::Api {
                code: envelope.code,
                status: envelope.message().unwrap_or_default(),
            });
        }

        serde_json::from_value(envelope.data)
            .map_err(|e| RetrievalError::Malformed(format!("unexpected payload: {e}")))
    }
}

#[derive(Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

impl Envelope {
    /// The status text, or the data field when the service put the error there.
    fn message(&self) -> Option<String> {
        match (&self.status, &self.data) {
            (_, serde_json::Value::String(detail)) => Some(detail.clone()),
            (Some(status), _) => Some(status.clone()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahSummary {
    number: u16,
    name: String,
    english_name: String,
    english_name_translation: String,
    number_of_ayahs: u32,
    revelation_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Surah {
    number: u16,
    name: String,
    english_name: String,
    english_name_translation: String,
    revelation_type: String,
    ayahs: Vec<Ayah>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ayah {
    number: u32,
    text: String,
    number_in_surah: u32,
    #[serde(default)]
    juz: u32,
    #[serde(default)]
    page: u32,
}

#[derive(Deserialize)]
struct SearchResults {
    #[serde(default)]
    matches: Vec<SearchHit>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    number: u32,
    text: String,
    number_in_surah: u32,
    surah: SurahRef,
    edition: EditionRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahRef {
    number: u16,
    english_name: String,
}

#[derive(Deserialize)]
struct EditionRef {
    identifier: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditionInfo {
    identifier: String,
    language: String,
    name: String,
    english_name: String,
    format: String,
    #[serde(rename = "type")]
    kind: String,
}

fn revelation_place(raw: &str) -> Result<RevelationPlace, RetrievalError> {
    raw.parse().map_err(RetrievalError::Malformed)
}

impl SurahSummary {
    fn into_summary(self) -> Result<ChapterSummary, RetrievalError> {
        Ok(ChapterSummary {
            revelation_place: revelation_place(&self.revelation_type)?,
            number: self.number,
            name: self.name,
            english_name: self.english_name,
            english_name_translation: self.english_name_translation,
            verse_count: self.number_of_ayahs,
        })
    }
}

impl Surah {
    fn into_chapter(self, expected: u16) -> Result<Chapter, RetrievalError> {
        if self.number != expected {
            return Err(RetrievalError::Malformed(format!(
                "asked for chapter {expected} but received chapter {}",
                self.number
            )));
        }
        Ok(Chapter {
            revelation_place: revelation_place(&self.revelation_type)?,
            number: self.number,
            name: self.name,
            english_name: self.english_name,
            english_name_translation: self.english_name_translation,
            verses: self
                .ayahs
                .into_iter()
                .map(|a| Verse {
                    number: a.number,
                    number_in_chapter: a.number_in_surah,
                    text: a.text,
                    juz: a.juz,
                    page: a.page,
                })
                .collect(),
        })
    }
}

#[async_trait]
impl ScriptureSource for AlQuranClient {
    fn name(&self) -> &str {
        "alquran.cloud"
    }

    #[instrument(skip(self))]
    async fn fetch_chapter_list(&self) -> Result<Vec<ChapterSummary>, RetrievalError> {
        if let Some(list) = self.cache.chapter_list() {
            tracing::debug!("chapter list cache hit");
            return Ok(list);
        }

        let raw: Vec<SurahSummary> = self.get(self.endpoint(&["surah"])).await.map_err(|e| {
            tracing::warn!("failed to fetch chapter list: {e}");
            e
        })?;
        let list = raw
            .into_iter()
            .map(SurahSummary::into_summary)
            .collect::<Result<Vec<_>, _>>()?;

        self.cache.set_chapter_list(list.clone());
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn fetch_chapter(&self, chapter: u16) -> Result<Arc<ChapterPair>, RetrievalError> {
        if let Some(pair) = self.cache.chapter(chapter) {
            tracing::debug!("chapter cache hit");
            return Ok(pair);
        }
        tracing::debug!("chapter cache miss");

        let number = chapter.to_string();
        let number = number.as_str();
        let original_url = self.endpoint(&["surah", number, self.original_edition.as_str()]);
        let translation_url =
            self.endpoint(&["surah", number, self.translation_edition.as_str()]);

        let (original, translated) = futures::future::try_join(
            self.get::<Surah>(original_url),
            self.get::<Surah>(translation_url),
        )
        .await?;

        let pair = ChapterPair::new(
            original.into_chapter(chapter)?,
            translated.into_chapter(chapter)?,
        )
        .map_err(RetrievalError::Malformed)?;

        tracing::debug!(verses = pair.verse_count(), "caching chapter");
        Ok(self.cache.insert_chapter(chapter, pair))
    }

    #[instrument(skip(self))]
    async fn search_verses(
        &self,
        keyword: &str,
        chapter: Option<u16>,
    ) -> Result<Vec<SearchMatch>, RetrievalError> {
        let scope = chapter.map_or_else(|| "all".to_string(), |n| n.to_string());
        let language = self.search_language.as_str();
        let url = self.endpoint(&["search", keyword, scope.as_str(), language]);
        let results: SearchResults = self.get(url).await?;

        Ok(results
            .matches
            .into_iter()
            .map(|hit| SearchMatch {
                number: hit.number,
                text: hit.text,
                chapter_number: hit.surah.number,
                chapter_name: hit.surah.english_name,
                number_in_chapter: hit.number_in_surah,
                edition: hit.edition.identifier,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn fetch_editions(&self) -> Result<Vec<Edition>, RetrievalError> {
        let mut url = self.endpoint(&["edition"]);
        url.query_pairs_mut()
            .append_pair("format", "text")
            .append_pair("type", "translation");
        let editions: Vec<EditionInfo> = self.get(url).await?;

        Ok(editions
            .into_iter()
            .map(|e| Edition {
                identifier: e.identifier,
                language: e.language,
                name: e.name,
                english_name: e.english_name,
                format: e.format,
                kind: e.kind,
            })
            .collect())
    }

    fn audio_url(&self, chapter: u16, _verse: u32, reciter: Option<&str>) -> String {
        build_audio_url(
            &self.audio_base_url,
            reciter.unwrap_or(&self.reciter),
            chapter,
            &self.audio_format,
        )
    }
}
