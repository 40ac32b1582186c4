// Mock match feed. A real deployment would call a cricket data API here;
// the cron route only reports what this returns and never writes a
// collection.

use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::matches::{format_display_date, format_display_time, Match, MatchStatus};
use crate::models::team::{default_teams, find_team, Team};

const VENUES: [&str; 10] = [
    "Wankhede Stadium, Mumbai",
    "M. Chinnaswamy Stadium, Bangalore",
    "Eden Gardens, Kolkata",
    "Arun Jaitley Stadium, Delhi",
    "MA Chidambaram Stadium, Chennai",
    "Punjab Cricket Association Stadium, Mohali",
    "Rajiv Gandhi International Stadium, Hyderabad",
    "Narendra Modi Stadium, Ahmedabad",
    "Sawai Mansingh Stadium, Jaipur",
    "Ekana Cricket Stadium, Lucknow",
];

/// Generates a plausible week of upcoming fixtures: one headline match
/// tomorrow evening plus one or two random fixtures on each following day.
pub fn fetch_upcoming_matches() -> Vec<Match> {
    let teams = default_teams();
    let mut rng = rand::thread_rng();
    let mut matches = Vec::new();

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let rcb = find_team("RCB").expect("RCB is in the fixed registry");
    let kkr = find_team("KKR").expect("KKR is in the fixed registry");
    matches.push(fixture(
        "match-rcb-kkr-2025".to_string(),
        rcb,
        kkr,
        tomorrow,
        true,
        "M. Chinnaswamy Stadium, Bangalore".to_string(),
    ));

    for day in 2..8 {
        let date = Utc::now().date_naive() + Duration::days(day);
        let matches_per_day = if rng.gen_bool(0.5) { 2 } else { 1 };

        for slot in 0..matches_per_day {
            let (team1, team2) = random_team_pair(&teams, &mut rng);
            let venue = VENUES[rng.gen_range(0..VENUES.len())].to_string();
            matches.push(fixture(
                format!("match-{}", Uuid::new_v4()),
                team1,
                team2,
                date,
                slot != 0,
                venue,
            ));
        }
    }

    matches
}

fn fixture(
    id: String,
    team1: Team,
    team2: Team,
    date: chrono::NaiveDate,
    evening: bool,
    venue: String,
) -> Match {
    // Afternoon fixtures start 15:30, evening fixtures 19:30 UTC.
    let (hour, minute) = if evening { (19, 30) } else { (15, 30) };
    let start = Utc
        .from_utc_datetime(&date.and_hms_opt(hour, minute, 0).expect("valid fixture time"));

    Match {
        id,
        team1,
        team2,
        date: format_display_date(start),
        time: format_display_time(start),
        venue,
        start_timestamp: start.timestamp_millis(),
        status: MatchStatus::Scheduled,
        visible: true,
        winner: None,
        winner_team: None,
    }
}

fn random_team_pair(teams: &[Team], rng: &mut impl Rng) -> (Team, Team) {
    let first = rng.gen_range(0..teams.len());
    let mut second = rng.gen_range(0..teams.len());
    while second == first {
        second = rng.gen_range(0..teams.len());
    }
    (teams[first].clone(), teams[second].clone())
}
