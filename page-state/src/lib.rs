//! State of the predictor page, kept apart from the DOM.
//!
//! The seed list is the single source of truth: it is mirrored into the seed
//! area text, the `seeds` query parameter and the history entry. Every
//! operation here mutates [`PageState`] and returns what the browser adapter
//! has to do next (push a history entry, issue a request), so the flows can be
//! exercised without a browser.

use predicted_words::Section;

pub mod config;
pub mod location;

pub use config::PredictorConfig;
pub use location::PageLocation;

/// Token of a predict request. Only the latest issued one may render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub seq: RequestSeq,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Stored as the entry's state; the encoded seeds parameter.
    pub state: String,
    pub title: String,
    pub url: String,
}

/// What a click on the predict button asks the browser to do.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub history: HistoryEntry,
    pub request: PredictRequest,
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        self.status == 200
    }
}

/// Where the seed area can be filled from instead of typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    RandomLesson,
    RandomUser,
}

impl Source {
    pub fn path(&self) -> &'static str {
        match self {
            Source::RandomLesson => "random-lesson",
            Source::RandomUser => "random-user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Source::RandomLesson => "Random lesson",
            Source::RandomUser => "Random user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowError {
    Seeds(seeds::SeedsError),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::Seeds(cause) => write!(f, "Failed to load seeds: {}", cause),
        }
    }
}

impl std::error::Error for FlowError {}

impl From<seeds::SeedsError> for FlowError {
    fn from(e: seeds::SeedsError) -> Self {
        Self::Seeds(e)
    }
}

/// How a predict request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Sections appended to the results.
    Rendered(usize),
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    Http(u16),
    Transport(String),
    Parse(String),
}

/// How an alternate source load ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    /// Words were put into the seed area and submitted.
    Loaded(Submission),
    Http(u16),
    Transport(String),
    Parse(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    seed_text: String,
    sections: Vec<Section>,
    latest: RequestSeq,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    pub fn set_seed_text(&mut self, text: impl Into<String>) {
        self.seed_text = text.into();
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Drop every rendered section.
    pub fn clear_results(&mut self) {
        self.sections.clear();
    }

    fn next_seq(&mut self) -> RequestSeq {
        self.latest = RequestSeq(self.latest.0 + 1);
        self.latest
    }

    /// Restore the page from its URL, on load and on back/forward navigation.
    ///
    /// Without a query string nothing is touched.
    pub fn load_from_href(
        &mut self,
        href: &str,
        config: &PredictorConfig,
    ) -> Result<Option<PredictRequest>, FlowError> {
        let Some(query) = seeds::query::PageQuery::parse(href) else {
            return Ok(None);
        };
        self.predict(query.seeds(), config)
    }

    /// Show predictions for an encoded seeds parameter.
    ///
    /// Results and seed area are cleared first. An empty parameter stops
    /// there; so does one that does not decode, with the error returned.
    /// Any request still in flight becomes stale.
    pub fn predict(
        &mut self,
        seeds_param: &str,
        config: &PredictorConfig,
    ) -> Result<Option<PredictRequest>, FlowError> {
        self.clear_results();
        self.seed_text.clear();
        let seq = self.next_seq();

        if seeds_param.is_empty() {
            return Ok(None);
        }

        let seeds = seeds::decode(seeds_param)?;
        self.seed_text = seeds::join_lines(&seeds);

        Ok(Some(PredictRequest {
            seq,
            url: config.predict_url(seeds_param),
        }))
    }

    /// Submit the seed area: encode it, describe the history entry to push and
    /// start a predict request.
    pub fn submit(&mut self, location: &PageLocation, config: &PredictorConfig) -> Submission {
        let seeds = seeds::split_lines(&self.seed_text);
        let seeds_param = seeds::encode(&seeds);

        self.clear_results();
        self.seed_text = seeds::join_lines(&seeds);
        let seq = self.next_seq();

        Submission {
            history: HistoryEntry {
                state: seeds_param.clone(),
                title: config.history_title.clone(),
                url: location.history_url(&config.app_path, &seeds_param),
            },
            request: PredictRequest {
                seq,
                url: config.predict_url(&seeds_param),
            },
        }
    }

    /// Apply the response to the request tagged `seq`.
    pub fn complete_predict(
        &mut self,
        seq: RequestSeq,
        response: Result<HttpResponse, String>,
    ) -> FetchOutcome {
        if seq != self.latest {
            return FetchOutcome::Stale;
        }

        let response = match response {
            Ok(response) => response,
            Err(cause) => return FetchOutcome::Transport(cause),
        };
        if !response.ok() {
            return FetchOutcome::Http(response.status);
        }

        match predicted_words::parse_sections(&response.body) {
            Ok(sections) => {
                let count = sections.len();
                self.sections.extend(sections);
                FetchOutcome::Rendered(count)
            }
            Err(e) => FetchOutcome::Parse(e.to_string()),
        }
    }

    /// Start loading seeds from `source`; returns the path to request.
    pub fn begin_source(&mut self, source: Source) -> &'static str {
        self.seed_text.clear();
        source.path()
    }

    /// Fill the seed area from a source response and submit it.
    pub fn complete_source(
        &mut self,
        response: Result<HttpResponse, String>,
        location: &PageLocation,
        config: &PredictorConfig,
    ) -> SourceOutcome {
        let response = match response {
            Ok(response) if response.ok() => response,
            Ok(response) => {
                self.seed_text = config.source_error.clone();
                return SourceOutcome::Http(response.status);
            }
            Err(cause) => {
                self.seed_text = config.source_error.clone();
                return SourceOutcome::Transport(cause);
            }
        };

        match predicted_words::parse_word_list(&response.body) {
            Ok(words) => {
                self.seed_text = seeds::join_lines(&words);
                SourceOutcome::Loaded(self.submit(location, config))
            }
            Err(e) => SourceOutcome::Parse(e.to_string()),
        }
    }
}
