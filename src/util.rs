use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Runs `f` behind a stderr spinner when `enabled`, clearing it afterwards.
pub fn with_spinner<T>(enabled: bool, message: &str, f: impl FnOnce() -> T) -> T {
    if !enabled {
        return f();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    let out = f();
    pb.finish_and_clear();
    out
}

/// Human distance between `then` and `now`, e.g. "3 days ago" or "about 2 years ago".
pub fn relative_time(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*then);
    let future = delta.num_seconds() < 0;
    let secs = delta.num_seconds().unsigned_abs();

    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    let distance = if secs < 45 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes.max(1), "minute")
    } else if hours < 24 {
        format!("about {}", plural(hours.max(1), "hour"))
    } else if days < 30 {
        plural(days, "day")
    } else if months < 12 {
        plural(months, "month")
    } else {
        format!("about {}", plural(years.max(1), "year"))
    };

    if future {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Formats a count with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Blog fields are often bare hosts; link them over https.
pub fn normalize_blog_url(blog: &str) -> String {
    if blog.starts_with("http") {
        blog.to_string()
    } else {
        format!("https://{blog}")
    }
}

pub fn twitter_url(handle: &str) -> String {
    format!("https://twitter.com/{handle}")
}

/// xterm-256 colour index for a repository language. Unknown languages are gray.
pub fn language_color(language: &str) -> u8 {
    match language {
        "JavaScript" => 220,
        "TypeScript" => 33,
        "Python" => 34,
        "Java" => 160,
        "C#" => 92,
        "PHP" => 61,
        "Ruby" => 124,
        "Go" => 44,
        "Rust" | "HTML" => 202,
        "Swift" => 208,
        "Kotlin" => 135,
        "CSS" => 75,
        "Shell" => 244,
        _ => 248,
    }
}

/// Stacked-bar colours for Sunday..Saturday, light to dark teal.
pub const WEEKDAY_COLORS: [u8; 7] = [43, 37, 36, 30, 29, 23, 22];

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
