use tabled::Table;

use crate::{
    error, info,
    management::TokenManager,
    setlistfm::{
        self,
        artists::ResolveOutcome,
        setlists::{self, SelectedSetlist},
    },
    spotify, success,
    types::{ArtistTableRow, Setlist, SetlistArtist, SetlistFilter, SetlistTableRow},
    utils, warning,
};

/// The full interactive pipeline, looping until the user is done.
pub async fn playlist() {
    let token_mgr = TokenManager::new();

    info!("Generating access token for Spotify...");
    if let Err(e) = token_mgr.acquire_client_credentials().await {
        error!(
            "Could not get an access token for Spotify. Please make sure your client id and client secret are correct. Err: {}",
            e
        );
    }
    success!("Done.");

    loop {
        let artist = prompt_artist().await;
        let selected = prompt_setlist(&artist).await;
        print_setlist(&selected);

        info!("Finding songs...");
        let report =
            spotify::tracks::match_many(&token_mgr, &selected.setlist.artist.name, &selected.songs)
                .await;
        if report.missing_count() > 0 {
            warning!(
                "Could not find matches for {} songs. They may not be on Spotify or may be covers.",
                report.missing_count()
            );
        }

        // The browser consent runs at most once per session; afterwards the
        // manager renews through its refresh token, and the callback server
        // from the first run would still hold the port anyway.
        if !token_mgr.is_user_authorized().await {
            info!("Authorizing with your Spotify account...");
            if let Err(e) = token_mgr
                .acquire_authorization_code(spotify::auth::authorize_via_browser)
                .await
            {
                error!("Authorization failed or timed out: {}", e);
            }
        }

        match spotify::playlist::publish(
            &token_mgr,
            &selected.title,
            &selected.description,
            &report.track_uris(),
        )
        .await
        {
            Ok(outcome) => match outcome.populate_error {
                None => success!(
                    "Created playlist \"{}\" with {} tracks.",
                    outcome.playlist.name,
                    outcome.playlist.track_uris.len()
                ),
                Some(e) => warning!(
                    "Playlist \"{}\" was created but no tracks could be added: {}",
                    outcome.playlist.name,
                    e
                ),
            },
            Err(e) => warning!("Failed to create playlist: {}", e),
        }

        if !utils::prompt_yes_no("Would you like to make another playlist (y/n): ") {
            break;
        }
    }
}

/// Prompts until a catalog artist is resolved, handling the zero, one, and
/// many-match outcomes.
async fn prompt_artist() -> SetlistArtist {
    loop {
        let name = utils::prompt_line("Enter the name of the artist: ");
        if name.is_empty() {
            continue;
        }

        match setlistfm::artists::resolve(&name).await {
            Ok(ResolveOutcome::NotFound) => {
                info!("Could not find the artist. Make sure spelling is correct.");
            }
            Ok(ResolveOutcome::Single(artist)) => {
                success!("Found setlists for {}", artist.name);
                return artist;
            }
            Ok(ResolveOutcome::Multiple(candidates)) => {
                info!(
                    "There are several matches for {}. Please choose which one is correct.",
                    name
                );
                print_artist_candidates(&candidates);
                let choice = utils::prompt_choice(candidates.len());
                match setlistfm::artists::pick(&candidates, choice) {
                    Ok(artist) => return artist,
                    Err(e) => warning!("{}", e),
                }
            }
            Err(e) => warning!("{} Try again in a moment.", e),
        }
    }
}

/// Prompts for search filters and a setlist choice until one show is picked.
async fn prompt_setlist(artist: &SetlistArtist) -> SelectedSetlist {
    loop {
        let filter = prompt_filter(&artist.name);
        let report = setlists::fetch_all(&filter).await;

        if let Some(failed) = &report.failed {
            warning!(
                "Stopped fetching early ({}). Working with the {} setlists retrieved so far.",
                failed,
                report.candidates.len()
            );
        }

        let candidates = report.candidates;
        if candidates.is_empty() {
            warning!("No setlists with documented songs matched. Try different filters.");
            continue;
        }

        info!("Possible sets to choose from: {}", candidates.len());
        print_setlist_candidates(&candidates);

        if !utils::prompt_yes_no("Is your show listed? y/n: ") {
            continue;
        }

        let choice = utils::prompt_choice(candidates.len());
        match setlists::select(&candidates, choice) {
            Ok(selected) => return selected,
            Err(e) => warning!("{}", e),
        }
    }
}

fn prompt_filter(artist_name: &str) -> SetlistFilter {
    let mut filter = SetlistFilter::new(artist_name);
    filter.year = opt(utils::prompt_line("Enter the year of the show (recommended): "));
    filter.city = opt(utils::prompt_line(
        "Enter the name of the city (press Enter to skip): ",
    ));
    filter.state_name = opt(utils::prompt_line(
        "Enter the name of the state (press Enter to skip): ",
    ));
    filter.state_abbr = opt(utils::prompt_line(
        "Enter the two-letter state abbreviation (press Enter to skip): ",
    ));
    filter.tour_name = opt(utils::prompt_line(
        "Enter the name of the tour (press Enter to skip): ",
    ));
    filter.venue_name = opt(utils::prompt_line(
        "Enter the name of the venue (press Enter to skip): ",
    ));
    filter
}

fn opt(input: String) -> Option<String> {
    if input.is_empty() { None } else { Some(input) }
}

fn print_artist_candidates(candidates: &[SetlistArtist]) {
    let rows: Vec<ArtistTableRow> = candidates
        .iter()
        .enumerate()
        .map(|(i, artist)| ArtistTableRow {
            num: i + 1,
            name: artist.name.clone(),
            note: artist.disambiguation.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_setlist_candidates(candidates: &[Setlist]) {
    let rows: Vec<SetlistTableRow> = candidates
        .iter()
        .enumerate()
        .map(|(i, setlist)| SetlistTableRow {
            num: i + 1,
            venue: setlists::venue_label(&setlist.venue),
            location: setlists::location_label(&setlist.venue),
            date: setlist.event_date.clone(),
            tour: setlists::tour_label(setlist),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_setlist(selected: &SelectedSetlist) {
    let setlist = &selected.setlist;
    info!(
        "Setlist for {} on {}",
        setlist.artist.name,
        setlists::tour_label(setlist)
    );
    info!(
        "Set played at {} in {} on {}",
        setlists::venue_label(&setlist.venue),
        setlists::location_label(&setlist.venue),
        setlist.event_date
    );
    for (i, song) in selected.songs.iter().enumerate() {
        println!("  {:>2}: {}", i + 1, song);
    }
}
