//! Dashboard model
//!
//! Read-only presentation data derived from a completed profile: the header
//! greeting, the summary stat cards, the weekly progress series and the
//! profile rows. The figures other than the profile itself are fixed sample
//! metrics.

use chrono::Weekday;
use serde::Serialize;

use crate::profile::Profile;

/// Sample progress values, Monday through Sunday
const WEEKLY_PROGRESS: [u32; 7] = [20, 45, 30, 70, 85, 60, 90];

/// A summary card at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    pub subtitle: &'static str,
    pub emoji: &'static str,
    pub gradient: &'static str,
    pub icon_bg: &'static str,
}

/// One point of the weekly progress chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressPoint {
    #[serde(serialize_with = "serialize_weekday")]
    pub day: Weekday,
    pub progress: u32,
}

fn serialize_weekday<S: serde::Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(day)
}

/// Label/value row on the profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardModel {
    pub greeting: String,
    pub subtitle: String,
    pub avatar_initial: char,
    pub stats: Vec<StatCard>,
    pub weekly_progress: Vec<ProgressPoint>,
    pub profile_rows: Vec<ProfileRow>,
}

impl DashboardModel {
    /// Build the dashboard for a profile
    pub fn new(profile: &Profile, is_dark: bool) -> Self {
        Self {
            greeting: format!("Welcome back, {}!", profile.name),
            subtitle: format!("{} Dashboard", profile.company),
            avatar_initial: avatar_initial(&profile.name),
            stats: stat_cards(is_dark),
            weekly_progress: weekly_progress(),
            profile_rows: profile_rows(profile),
        }
    }

    /// Mean of the weekly series
    pub fn average_progress(&self) -> f64 {
        if self.weekly_progress.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.weekly_progress.iter().map(|p| p.progress).sum();
        sum as f64 / self.weekly_progress.len() as f64
    }

    /// Best day of the week
    pub fn peak(&self) -> Option<ProgressPoint> {
        self.weekly_progress.iter().copied().max_by_key(|p| p.progress)
    }
}

/// First character of the name, upper-cased; `?` for an empty name
pub fn avatar_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

fn stat_cards(is_dark: bool) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Team Members",
            value: 24,
            subtitle: "+3 this month",
            emoji: "👥",
            gradient: "bg-gradient-to-br from-blue-500/20 to-blue-600/20",
            icon_bg: if is_dark { "bg-blue-500/20" } else { "bg-blue-500/10" },
        },
        StatCard {
            title: "Active Projects",
            value: 12,
            subtitle: "8 in progress",
            emoji: "📊",
            gradient: "bg-gradient-to-br from-green-500/20 to-green-600/20",
            icon_bg: if is_dark { "bg-green-500/20" } else { "bg-green-500/10" },
        },
        StatCard {
            title: "Notifications",
            value: 7,
            subtitle: "2 urgent",
            emoji: "🔔",
            gradient: "bg-gradient-to-br from-purple-500/20 to-purple-600/20",
            icon_bg: if is_dark { "bg-purple-500/20" } else { "bg-purple-500/10" },
        },
    ]
}

fn weekly_progress() -> Vec<ProgressPoint> {
    let mut day = Weekday::Mon;
    WEEKLY_PROGRESS
        .iter()
        .map(|&progress| {
            let point = ProgressPoint { day, progress };
            day = day.succ();
            point
        })
        .collect()
}

fn profile_rows(profile: &Profile) -> Vec<ProfileRow> {
    vec![
        ProfileRow { label: "Email", value: profile.email.clone() },
        ProfileRow { label: "Industry", value: profile.industry.clone() },
        ProfileRow { label: "Company Size", value: format!("{} employees", profile.size) },
        ProfileRow { label: "Theme Preference", value: capitalize(&profile.theme) },
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Field;

    fn sample_profile() -> Profile {
        Profile {
            is_completed: true,
            ..Profile::default()
                .with(Field::Name, "ada Lovelace")
                .with(Field::Email, "ada@example.com")
                .with(Field::Company, "Analytical")
                .with(Field::Industry, "Technology")
                .with(Field::Size, "11-50")
                .with(Field::Theme, "classic")
        }
    }

    #[test]
    fn test_header_text() {
        let model = DashboardModel::new(&sample_profile(), false);
        assert_eq!(model.greeting, "Welcome back, ada Lovelace!");
        assert_eq!(model.subtitle, "Analytical Dashboard");
        assert_eq!(model.avatar_initial, 'A');
    }

    #[test]
    fn test_weekly_progress() {
        let model = DashboardModel::new(&sample_profile(), false);
        let days: Vec<String> = model.weekly_progress.iter().map(|p| p.day.to_string()).collect();
        assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(model.peak().map(|p| p.day), Some(Weekday::Sun));
        assert!((model.average_progress() - 400.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_icon_background_follows_mode() {
        let light = DashboardModel::new(&sample_profile(), false);
        let dark = DashboardModel::new(&sample_profile(), true);
        assert_eq!(light.stats[0].icon_bg, "bg-blue-500/10");
        assert_eq!(dark.stats[0].icon_bg, "bg-blue-500/20");
        assert_eq!(light.stats[2].title, "Notifications");
    }

    #[test]
    fn test_profile_rows() {
        let model = DashboardModel::new(&sample_profile(), false);
        let rows: Vec<(&str, &str)> =
            model.profile_rows.iter().map(|r| (r.label, r.value.as_str())).collect();
        assert_eq!(
            rows,
            vec![
                ("Email", "ada@example.com"),
                ("Industry", "Technology"),
                ("Company Size", "11-50 employees"),
                ("Theme Preference", "Classic"),
            ]
        );
    }

    #[test]
    fn test_avatar_initial_of_empty_name() {
        assert_eq!(avatar_initial("   "), '?');
        assert_eq!(avatar_initial("émile"), 'É');
    }

    #[test]
    fn test_serializes_weekday_names() {
        let json = serde_json::to_value(DashboardModel::new(&sample_profile(), true)).unwrap();
        assert_eq!(json["weekly_progress"][0]["day"], "Mon");
        assert_eq!(json["weekly_progress"][6]["progress"], 90);
    }
}
