use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};

use crate::{
    config,
    error::{FetchError, SelectionError},
    types::{Setlist, SetlistFilter, SetlistSearchResponse, Venue},
    utils::Pacer,
};

/// Minimum spacing between page requests, per the provider's rate limit.
const PAGE_INTERVAL: Duration = Duration::from_millis(500);

/// Everything the pagination run produced.
///
/// `failed` carries the error of the page that stopped the run early, if
/// any; the candidates fetched before it remain usable and the caller
/// decides whether partial results are acceptable.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub candidates: Vec<Setlist>,
    pub failed: Option<FetchError>,
}

/// Fetches every setlist matching the filter, paging automatically.
///
/// The search endpoint returns fixed pages of 20 items plus a `total`
/// count. Pages are requested sequentially, paced at least 500ms apart,
/// until the raw item tally reaches `total`. Setlists without any
/// documented song sections are data gaps and are dropped from the
/// candidate list.
pub async fn fetch_all(filter: &SetlistFilter) -> FetchReport {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching for setlists for {}...", filter.artist_name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut pacer = Pacer::new(PAGE_INTERVAL);
    let report = fetch_all_with(&mut pacer, |page| {
        if page > 1 {
            pb.set_message(format!("Grabbing page {}...", page));
        }
        fetch_page(filter, page)
    })
    .await;

    pb.finish_and_clear();
    report
}

/// Pagination loop over an injected page fetcher.
///
/// Kept generic over the fetch future so the paging and filtering rules can
/// be exercised without a network.
pub async fn fetch_all_with<F, Fut>(pacer: &mut Pacer, mut fetch_page: F) -> FetchReport
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<SetlistSearchResponse, FetchError>>,
{
    let mut report = FetchReport::default();
    let mut tally: u32 = 0;
    let mut page: u32 = 1;

    loop {
        pacer.wait().await;

        let res = match fetch_page(page).await {
            Ok(res) => res,
            Err(e) => {
                report.failed = Some(e);
                return report;
            }
        };

        let fetched = res.setlist.len() as u32;
        tally += fetched;
        report.candidates.extend(
            res.setlist
                .into_iter()
                .filter(|s| s.sets.sections.iter().any(|sec| !sec.song.is_empty())),
        );

        // An empty page means the catalog disagrees with its own total.
        if fetched == 0 || tally >= res.total {
            return report;
        }
        page += 1;
    }
}

async fn fetch_page(filter: &SetlistFilter, page: u32) -> Result<SetlistSearchResponse, FetchError> {
    let client = Client::new();
    let response = client
        .get(format!("{}/search/setlists", config::setlistfm_apiurl()))
        .query(&filter.query_params(page))
        .header("x-api-key", config::setlistfm_api_key())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| FetchError::Http { page, source })?;

    // The search endpoint answers an unmatched query with a 404.
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(SetlistSearchResponse::default());
    }
    if !response.status().is_success() {
        return Err(FetchError::Status {
            page,
            status: response.status(),
        });
    }

    response
        .json::<SetlistSearchResponse>()
        .await
        .map_err(|source| FetchError::Http { page, source })
}

/// A setlist promoted to "chosen", with its derived playlist strings.
#[derive(Debug, Clone)]
pub struct SelectedSetlist {
    pub setlist: Setlist,
    /// Every section's songs flattened in API order; encores follow the
    /// main set. This is the playlist track order.
    pub songs: Vec<String>,
    pub title: String,
    pub description: String,
}

/// Materializes the candidate at a 1-based index.
pub fn select(candidates: &[Setlist], index: usize) -> Result<SelectedSetlist, SelectionError> {
    let chosen = index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .cloned()
        .ok_or(SelectionError {
            index,
            len: candidates.len(),
        })?;

    Ok(SelectedSetlist {
        songs: flatten_songs(&chosen),
        title: playlist_title(&chosen),
        description: playlist_description(&chosen),
        setlist: chosen,
    })
}

/// Flattens all song sections into one ordered sequence.
pub fn flatten_songs(setlist: &Setlist) -> Vec<String> {
    setlist
        .sets
        .sections
        .iter()
        .flat_map(|section| section.song.iter().map(|song| song.name.clone()))
        .collect()
}

/// `"<artist> Live @ <venue>"`
pub fn playlist_title(setlist: &Setlist) -> String {
    format!(
        "{} Live @ {}",
        setlist.artist.name,
        venue_label(&setlist.venue)
    )
}

/// `"Setlist for <artist> on <tour>. They played at <venue> in <location>.
/// Performed on <date>."` — the tour clause is omitted, not defaulted, when
/// the show has no tour metadata.
pub fn playlist_description(setlist: &Setlist) -> String {
    let mut desc = format!("Setlist for {}", setlist.artist.name);
    match &setlist.tour {
        Some(tour) if !tour.name.is_empty() => {
            desc.push_str(&format!(" on {}. ", tour.name));
        }
        _ => desc.push_str(". "),
    }
    desc.push_str(&format!(
        "They played at {} in {}. Performed on {}.",
        venue_label(&setlist.venue),
        location_label(&setlist.venue),
        setlist.event_date
    ));
    desc
}

/// Venue display name; data gaps become "Unknown Venue".
pub fn venue_label(venue: &Venue) -> String {
    if venue.name.is_empty() {
        "Unknown Venue".to_string()
    } else {
        venue.name.clone()
    }
}

/// `"<city>, <state>"` for US venues, `"<city>, <country name>"` elsewhere.
pub fn location_label(venue: &Venue) -> String {
    let city = if venue.city.name.is_empty() {
        "Unknown City"
    } else {
        venue.city.name.as_str()
    };
    let suffix = if venue.city.country.code == "US" {
        venue.city.state.as_str()
    } else {
        venue.city.country.name.as_str()
    };
    format!("{}, {}", city, suffix)
}

/// Tour name for candidate tables; display-only default.
pub fn tour_label(setlist: &Setlist) -> String {
    match &setlist.tour {
        Some(tour) if !tour.name.is_empty() => tour.name.clone(),
        _ => "Unknown tour".to_string(),
    }
}
