use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    #[default]
    Logs,
    Memory,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_default_to_logs() {
        assert_eq!(GatewayPublisherVia::Logs, GatewayPublisherVia::default());
        let via: GatewayPublisherVia = serde_json::from_str("\"Memory\"").expect("should parse via");
        assert_eq!(GatewayPublisherVia::Memory, via);
    }
}
