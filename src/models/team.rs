use serde::{Deserialize, Serialize};

/// Static reference data. Teams are seeded in code, never created or edited
/// at runtime, and are looked up by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub code: String,
    pub color: String,
}

impl Team {
    fn new(id: &str, name: &str, color: &str) -> Self {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            code: id.to_string(),
            color: color.to_string(),
        }
    }
}

pub fn default_teams() -> Vec<Team> {
    vec![
        Team::new("MI", "Mumbai Indians", "#004BA0"),
        Team::new("CSK", "Chennai Super Kings", "#FFFF00"),
        Team::new("RCB", "Royal Challengers Bangalore", "#EC1C24"),
        Team::new("KKR", "Kolkata Knight Riders", "#3A225D"),
        Team::new("DC", "Delhi Capitals", "#0078BC"),
        Team::new("RR", "Rajasthan Royals", "#EA1A85"),
        Team::new("PBKS", "Punjab Kings", "#ED1B24"),
        Team::new("SRH", "Sunrisers Hyderabad", "#F7A721"),
        Team::new("GT", "Gujarat Titans", "#1C1C1C"),
        Team::new("LSG", "Lucknow Super Giants", "#A72056"),
    ]
}

pub fn find_team(id: &str) -> Option<Team> {
    default_teams().into_iter().find(|t| t.id == id)
}
