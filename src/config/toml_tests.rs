//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_single_target_config() {
        let toml = r#"
            [general]
            commit-changes = true
            force-commit = false

            [general.log]
            debug = true

            [aws]
            profile = "home"
            region = "eu-west-1"

            [dns]
            hostname = "home.example.com"
            zone-id = "Z123"
            ttl = 300
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.general.commit_changes, Some(true));
        assert!(!config.general.force_commit);
        assert!(config.general.log.debug);
        assert_eq!(config.aws.profile.as_deref(), Some("home"));
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
        let dns = config.dns.unwrap();
        assert_eq!(dns.hostname.as_deref(), Some("home.example.com"));
        assert_eq!(dns.zone_id.as_deref(), Some("Z123"));
        assert_eq!(dns.ttl, Some(300));
    }

    #[test]
    fn parse_zones_section() {
        let toml = r#"
            [zones.example]
            zone-id = "Z456"
            default-ttl = 300
            hosts = [
                { hostname = "a.example.com" },
                { hostname = "b.example.com", ttl = 60 },
            ]
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let zone = &config.zones["example"];

        assert!(config.dns.is_none());
        assert_eq!(zone.zone_id.as_deref(), Some("Z456"));
        assert_eq!(zone.default_ttl, Some(300));
        assert_eq!(zone.hosts.len(), 2);
        assert_eq!(zone.hosts[0].hostname, "a.example.com");
        assert_eq!(zone.hosts[0].ttl, None);
        assert_eq!(zone.hosts[1].ttl, Some(60));
    }

    #[test]
    fn parse_added_sections() {
        let toml = r#"
            [healthcheck]
            id = "abc"
            base-url = "https://hc.example.net"

            [public-ip]
            url = "https://ip.example.net/"

            [retry]
            max-attempts = 3
            initial-delay = 2
            max-delay = 30
            multiplier = 1.5
            timeout = 5
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.healthcheck.id.as_deref(), Some("abc"));
        assert_eq!(
            config.healthcheck.base_url.as_deref(),
            Some("https://hc.example.net")
        );
        assert_eq!(config.public_ip.url.as_deref(), Some("https://ip.example.net/"));
        assert_eq!(config.retry.max_attempts, Some(3));
        assert_eq!(config.retry.initial_delay, Some(2));
        assert_eq!(config.retry.max_delay, Some(30));
        assert_eq!(config.retry.multiplier, Some(1.5));
        assert_eq!(config.retry.timeout, Some(5));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.dns.is_none());
        assert!(config.zones.is_empty());
        assert_eq!(config.general.commit_changes, None);
        assert!(!config.general.log.debug);
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_key_is_rejected() {
        let toml = r#"
            [dns]
            hostname = "home.example.com"
            zone_id = "Z123"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[webhook]\nurl = \"x\"").is_err());
    }

    #[test]
    fn negative_ttl_is_rejected() {
        let toml = r#"
            [dns]
            ttl = -1
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn host_without_hostname_is_rejected() {
        let toml = r#"
            [zones.example]
            zone-id = "Z456"
            hosts = [{ ttl = 60 }]
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/route53-ddns.toml"));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        assert_eq!(config.general.commit_changes, Some(true));
        assert!(config.dns.is_some());
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        for section in [
            "[general]",
            "[aws]",
            "[dns]",
            "[zones.",
            "[healthcheck]",
            "[public-ip]",
            "[retry]",
        ] {
            assert!(template.contains(section), "template lacks {section}");
        }
    }
}
