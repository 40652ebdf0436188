use clap::Parser;

pub const DEFAULT_FEED_URL: &str = "https://fsf.org.in/news/feed.atom";
pub const DEFAULT_SECTION: &str = "news";
pub const DEFAULT_FROM: &str = "no-reply@gnu.org.in";

#[derive(Parser)]
#[command(name = "cedar")]
#[command(about = "Email announcements for new feed entries", long_about = None)]
pub struct Cli {
    /// Email address for sending emails to
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Sender address for outgoing mail
    #[arg(long, default_value = DEFAULT_FROM)]
    pub from: String,

    /// Feed URL to watch
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Section name scoping the announcement cache
    #[arg(long, default_value = DEFAULT_SECTION)]
    pub section: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cedar", "-t", "subscriber@example.org"]);
        assert_eq!(cli.to.as_deref(), Some("subscriber@example.org"));
        assert_eq!(cli.from, DEFAULT_FROM);
        assert_eq!(cli.url, DEFAULT_FEED_URL);
        assert_eq!(cli.section, DEFAULT_SECTION);
    }

    #[test]
    fn test_to_is_optional() {
        let cli = Cli::parse_from(["cedar"]);
        assert!(cli.to.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "cedar",
            "--to",
            "subscriber@example.org",
            "--url",
            "https://example.org/feed.atom",
            "--section",
            "events",
        ]);
        assert_eq!(cli.url, "https://example.org/feed.atom");
        assert_eq!(cli.section, "events");
    }
}
