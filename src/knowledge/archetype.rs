crate::define_id_enum! {
    /// Coarse role a workload plays in a cluster.
    ///
    /// `Unknown` is reserved for classification results without evidence and
    /// may not be assigned to a profile.
    Archetype {
        Database => "database" : "Database" | "db",
        Cache => "cache" : "Cache",
        SearchEngine => "search-engine" : "Search Engine" | "search",
        MessageQueue => "message-queue" : "Message Queue" | "messaging" | "queue",
        WebServer => "web-server" : "Web Server" | "web",
        ReverseProxy => "reverse-proxy" : "Reverse Proxy" | "proxy",
        ApiGateway => "api-gateway" : "API Gateway" | "gateway",
        Monitoring => "monitoring" : "Monitoring",
        Logging => "logging" : "Logging",
        CustomApp => "custom-app" : "Custom App" | "app",
        Unknown => "unknown" : "Unknown",
    }
}

impl Archetype {
    /// Whether a profile definition may declare this archetype.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, Archetype::Unknown | Archetype::Other(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        let json = serde_json::to_string(&Archetype::MessageQueue).unwrap();
        assert_eq!(json, "\"message-queue\"");
        let parsed: Archetype = serde_json::from_str("\"search-engine\"").unwrap();
        assert_eq!(parsed, Archetype::SearchEngine);
    }

    #[test]
    fn test_unrecognised_name_becomes_other() {
        let parsed: Archetype = serde_yaml::from_str("datastore").unwrap();
        assert_eq!(parsed, Archetype::Other("datastore".to_string()));
        assert!(!parsed.is_assignable());
    }

    #[test]
    fn test_unknown_is_not_assignable() {
        assert!(!Archetype::Unknown.is_assignable());
        assert!(Archetype::Database.is_assignable());
        assert!(Archetype::CustomApp.is_assignable());
    }

    #[test]
    fn test_from_name_accepts_aliases() {
        assert_eq!(Archetype::from_name("db"), Some(Archetype::Database));
        assert_eq!(Archetype::from_name("Message Queue"), Some(Archetype::MessageQueue));
        assert_eq!(Archetype::from_name("reverse-proxy"), Some(Archetype::ReverseProxy));
        assert_eq!(Archetype::from_name("mainframe"), None);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(Archetype::ApiGateway.to_string(), "api-gateway");
        assert_eq!(Archetype::ApiGateway.name(), "API Gateway");
    }
}
