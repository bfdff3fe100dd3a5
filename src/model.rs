use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

/// Account metadata as returned by `GET /users/{login}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    /// Two-letter avatar fallback built from the login.
    pub fn initials(&self) -> String {
        self.login.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

fn default_visibility() -> String {
    "public".to_string()
}

impl Repository {
    pub fn is_public(&self) -> bool {
        self.visibility == "public"
    }
}

/// One week of commit activity from `GET /repos/{owner}/{repo}/stats/commit_activity`.
///
/// `days` is Sunday first. `total` is carried as reported and is not checked
/// against the sum of `days`. A `null` day counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekActivity {
    pub week: i64,
    pub total: u32,
    #[serde(default, deserialize_with = "null_days_as_zero")]
    pub days: Vec<u32>,
}

fn null_days_as_zero<'de, D>(deserializer: D) -> std::result::Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let days: Option<Vec<Option<u32>>> = Option::deserialize(deserializer)?;
    Ok(days
        .unwrap_or_default()
        .into_iter()
        .map(|d| d.unwrap_or(0))
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Maps a zero-based month index (January = 0) to its abbreviation.
    pub fn from_index0(index: u32) -> Option<Month> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Commits for one month name, split by weekday. Rows of the stacked chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: Month,
    pub commits: u64,
    #[serde(rename = "Sunday")]
    pub sunday: u64,
    #[serde(rename = "Monday")]
    pub monday: u64,
    #[serde(rename = "Tuesday")]
    pub tuesday: u64,
    #[serde(rename = "Wednesday")]
    pub wednesday: u64,
    #[serde(rename = "Thursday")]
    pub thursday: u64,
    #[serde(rename = "Friday")]
    pub friday: u64,
    #[serde(rename = "Saturday")]
    pub saturday: u64,
}

impl MonthlySummary {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            commits: 0,
            sunday: 0,
            monday: 0,
            tuesday: 0,
            wednesday: 0,
            thursday: 0,
            friday: 0,
            saturday: 0,
        }
    }

    pub fn add_week(&mut self, week: &WeekActivity) {
        let day = |i: usize| week.days.get(i).copied().unwrap_or(0) as u64;
        self.commits += week.total as u64;
        self.sunday += day(0);
        self.monday += day(1);
        self.tuesday += day(2);
        self.wednesday += day(3);
        self.thursday += day(4);
        self.friday += day(5);
        self.saturday += day(6);
    }

    /// Weekday totals in Sunday-first order.
    pub fn weekdays(&self) -> [u64; 7] {
        [
            self.sunday,
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
        ]
    }

    pub fn weekday_sum(&self) -> u64 {
        self.weekdays().iter().sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: UserProfile,
    pub repository_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReposOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub filter: Option<String>,
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub repository: String,
    pub timezone: String,
    pub months: Vec<MonthlySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_serializes_as_chart_row() {
        let mut summary = MonthlySummary::new(Month::Mar);
        summary.add_week(&WeekActivity {
            week: 0,
            total: 5,
            days: vec![1, 0, 2, 0, 1, 1, 0],
        });
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["month"], "Mar");
        assert_eq!(value["commits"], 5);
        assert_eq!(value["Sunday"], 1);
        assert_eq!(value["Tuesday"], 2);
        assert_eq!(value["Saturday"], 0);
    }

    #[test]
    fn week_activity_parses_api_shape() {
        let week: WeekActivity =
            serde_json::from_str(r#"{"days":[0,3,26,20,39,1,0],"total":89,"week":1336280400}"#)
                .unwrap();
        assert_eq!(week.week, 1_336_280_400);
        assert_eq!(week.total, 89);
        assert_eq!(week.days.len(), 7);
    }

    #[test]
    fn null_days_count_as_zero() {
        let week: WeekActivity =
            serde_json::from_str(r#"{"days":[1,null,2,null,0,0,3],"total":6,"week":0}"#).unwrap();
        assert_eq!(week.days, vec![1, 0, 2, 0, 0, 0, 3]);

        let week: WeekActivity = serde_json::from_str(r#"{"days":null,"total":0,"week":0}"#).unwrap();
        assert!(week.days.is_empty());

        let mut summary = MonthlySummary::new(Month::Jan);
        summary.add_week(&week);
        summary.add_week(&serde_json::from_str(r#"{"days":[null,4],"total":4,"week":0}"#).unwrap());
        assert_eq!(summary.weekdays(), [0, 4, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut user: UserProfile = serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "bio": null,
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "company": null,
            "location": null,
            "blog": null,
            "twitter_username": null
        }))
        .unwrap();
        assert_eq!(user.display_name(), "octocat");
        assert_eq!(user.initials(), "OC");
        user.name = Some("The Octocat".into());
        assert_eq!(user.display_name(), "The Octocat");
    }

    #[test]
    fn repository_defaults_missing_topics_and_visibility() {
        let repo: Repository = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "hello",
            "html_url": "https://github.com/octocat/hello",
            "description": null,
            "stargazers_count": 3,
            "forks_count": 1,
            "language": "Rust",
            "updated_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert!(repo.topics.is_empty());
        assert!(repo.is_public());
    }
}
