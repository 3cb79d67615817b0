use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use reqwest::StatusCode;
use setlistify::error::FetchError;
use setlistify::setlistfm::setlists::{
    fetch_all_with, flatten_songs, location_label, playlist_description, playlist_title, select,
    venue_label,
};
use setlistify::types::{
    City, Country, SetSection, Setlist, SetlistArtist, SetlistSearchResponse, SetlistSong, Sets,
    Tour, Venue,
};
use setlistify::utils::Pacer;

// Helper to build a setlist with the given song sections
fn setlist(artist: &str, venue: &str, sections: Vec<(&str, Vec<&str>)>) -> Setlist {
    Setlist {
        artist: SetlistArtist {
            mbid: "mbid".to_string(),
            name: artist.to_string(),
            disambiguation: String::new(),
        },
        venue: Venue {
            name: venue.to_string(),
            city: City {
                name: "Worcester".to_string(),
                state: "MA".to_string(),
                country: Country {
                    code: "US".to_string(),
                    name: "United States".to_string(),
                },
            },
        },
        tour: None,
        event_date: "23-06-2019".to_string(),
        sets: Sets {
            sections: sections
                .into_iter()
                .map(|(name, songs)| SetSection {
                    name: name.to_string(),
                    encore: None,
                    song: songs
                        .into_iter()
                        .map(|s| SetlistSong {
                            name: s.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

fn empty_setlist() -> Setlist {
    setlist("August Burns Red", "Worcester Palladium", vec![])
}

fn page(count: usize, total: u32, empties: usize) -> SetlistSearchResponse {
    let mut setlists = Vec::new();
    for i in 0..count {
        if i < empties {
            setlists.push(empty_setlist());
        } else {
            setlists.push(setlist(
                "August Burns Red",
                "Worcester Palladium",
                vec![("Main Set", vec!["Composure"])],
            ));
        }
    }
    SetlistSearchResponse {
        setlist: setlists,
        total,
    }
}

#[tokio::test(start_paused = true)]
async fn test_pagination_stops_at_total() {
    // total=45 across fixed pages of 20 means exactly 3 requests
    let calls = AtomicU32::new(0);
    let mut pacer = Pacer::new(Duration::from_millis(500));

    let report = fetch_all_with(&mut pacer, |page_num| {
        calls.fetch_add(1, Ordering::SeqCst);
        let resp = match page_num {
            1 | 2 => page(20, 45, 2),
            3 => page(5, 45, 0),
            other => panic!("unexpected page request: {}", other),
        };
        async move { Ok(resp) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(report.failed.is_none());
    // 45 raw items minus 2 empty-section entries on each of the first two pages
    assert_eq!(report.candidates.len(), 41);
}

#[tokio::test(start_paused = true)]
async fn test_pagination_single_page() {
    let calls = AtomicU32::new(0);
    let mut pacer = Pacer::new(Duration::from_millis(500));

    let report = fetch_all_with(&mut pacer, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        let resp = page(7, 7, 0);
        async move { Ok(resp) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.candidates.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_pagination_keeps_partial_results_on_page_failure() {
    let mut pacer = Pacer::new(Duration::from_millis(500));

    let report = fetch_all_with(&mut pacer, |page_num| {
        let resp = match page_num {
            1 => Ok(page(20, 45, 0)),
            _ => Err(FetchError::Status {
                page: page_num,
                status: StatusCode::BAD_GATEWAY,
            }),
        };
        async move { resp }
    })
    .await;

    assert_eq!(report.candidates.len(), 20);
    assert!(report.failed.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_pacer_spaces_requests() {
    let mut pacer = Pacer::new(Duration::from_millis(500));
    let start = tokio::time::Instant::now();

    pacer.wait().await;
    pacer.wait().await;
    pacer.wait().await;

    // first wait is free, the next two each cost the full interval
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[test]
fn test_flatten_preserves_section_order() {
    let s = setlist(
        "August Burns Red",
        "Worcester Palladium",
        vec![("set1", vec!["A", "B"]), ("encore", vec!["C"])],
    );

    assert_eq!(flatten_songs(&s), vec!["A", "B", "C"]);
}

#[test]
fn test_select_is_one_based_and_flattens() {
    let candidates = vec![
        setlist("August Burns Red", "First Venue", vec![("set1", vec!["X"])]),
        setlist(
            "August Burns Red",
            "Worcester Palladium",
            vec![("set1", vec!["A", "B"]), ("encore", vec!["C"])],
        ),
    ];

    let selected = select(&candidates, 2).unwrap();
    assert_eq!(selected.songs, vec!["A", "B", "C"]);
    assert_eq!(selected.title, "August Burns Red Live @ Worcester Palladium");
}

#[test]
fn test_select_out_of_range_is_an_error() {
    let candidates = vec![setlist("A", "V", vec![("set1", vec!["X"])])];

    let err = select(&candidates, 5).unwrap_err();
    assert_eq!(err.index, 5);
    assert_eq!(err.len, 1);
}

#[test]
fn test_title_format() {
    let s = setlist(
        "August Burns Red",
        "Worcester Palladium",
        vec![("set1", vec!["Composure"])],
    );

    assert_eq!(
        playlist_title(&s),
        "August Burns Red Live @ Worcester Palladium"
    );
}

#[test]
fn test_us_location_uses_state() {
    let s = setlist("A", "V", vec![]);
    assert_eq!(location_label(&s.venue), "Worcester, MA");
}

#[test]
fn test_foreign_location_uses_country_name() {
    let mut s = setlist("A", "V", vec![]);
    s.venue.city = City {
        name: "Toronto".to_string(),
        state: "ON".to_string(),
        country: Country {
            code: "CA".to_string(),
            name: "Canada".to_string(),
        },
    };

    assert_eq!(location_label(&s.venue), "Toronto, Canada");
}

#[test]
fn test_missing_venue_and_city_get_placeholders() {
    let mut s = setlist("A", "", vec![]);
    s.venue.city.name = String::new();

    assert_eq!(venue_label(&s.venue), "Unknown Venue");
    assert_eq!(location_label(&s.venue), "Unknown City, MA");
}

#[test]
fn test_description_with_tour() {
    let mut s = setlist(
        "August Burns Red",
        "Worcester Palladium",
        vec![("set1", vec!["Composure"])],
    );
    s.tour = Some(Tour {
        name: "Dangerous Tour".to_string(),
    });

    assert_eq!(
        playlist_description(&s),
        "Setlist for August Burns Red on Dangerous Tour. \
         They played at Worcester Palladium in Worcester, MA. Performed on 23-06-2019."
    );
}

#[test]
fn test_description_omits_untitled_tour() {
    let s = setlist(
        "August Burns Red",
        "Worcester Palladium",
        vec![("set1", vec!["Composure"])],
    );

    assert_eq!(
        playlist_description(&s),
        "Setlist for August Burns Red. \
         They played at Worcester Palladium in Worcester, MA. Performed on 23-06-2019."
    );
}
