//! Bundled sports data.
//!
//! The board ships its data compiled into the binary as three parallel
//! string arrays (titles, blurbs, image labels), one `Sport` per index
//! triple. Reset reloads from the same arrays.

use anyhow::{ensure, Result};

use crate::sport::Sport;

const TITLES: &[&str] = &[
    "Baseball",
    "Badminton",
    "Basketball",
    "Bowling",
    "Cycling",
    "Golf",
    "Running",
    "Soccer",
    "Swimming",
    "Table Tennis",
    "Tennis",
];

const INFO: &[&str] = &[
    "Extra innings decide the series opener as the visitors rally late.",
    "The world tour lands this weekend with the top seeds on a collision course.",
    "A buzzer beater closes out a wild fourth quarter in the city derby.",
    "League night recap: two perfect games and a scoring controversy.",
    "The mountain stage shatters the peloton with three summits to go.",
    "A rookie leads the open by two strokes heading into the final round.",
    "Marathon season kicks off with record fields in all divisions.",
    "Stoppage-time drama keeps the title race open until the final week.",
    "Relay teams shave tenths off the national mark at the spring invitational.",
    "Qualifying wraps up with an upset in the penultimate rubber.",
    "The grass-court swing begins with the defending champion in early trouble.",
];

const IMAGES: &[&str] = &[
    "Baseball",
    "Badminton",
    "Basketball",
    "Bowling",
    "Cycling",
    "Golf",
    "Running",
    "Soccer",
    "Swimming",
    "Table Tennis",
    "Tennis",
];

/// Build the sport list from the bundled arrays.
pub fn load() -> Result<Vec<Sport>> {
    load_from(TITLES, INFO, IMAGES)
}

/// Build a sport list from three parallel arrays.
///
/// The arrays must agree in length. A mismatch is a packaging error, so it
/// fails fast instead of truncating to the shortest array.
pub fn load_from(titles: &[&str], info: &[&str], images: &[&str]) -> Result<Vec<Sport>> {
    ensure!(
        titles.len() == info.len() && titles.len() == images.len(),
        "bundled sport arrays disagree in length: {} titles, {} info, {} images",
        titles.len(),
        info.len(),
        images.len()
    );
    Ok(titles
        .iter()
        .zip(info)
        .zip(images)
        .map(|((title, info), image)| Sport::new(*title, *info, *image))
        .collect())
}
