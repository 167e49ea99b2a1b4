//! Model selection.

use medicore_domain::Model;

/// Which model serves which role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelConfig {
    /// Model used for intent classification.
    pub routing: Model,
    /// Model used by every agent to generate replies.
    pub agents: Model,
}

impl ModelConfig {
    /// Use one model for both roles.
    pub fn single(model: Model) -> Self {
        Self {
            routing: model.clone(),
            agents: model,
        }
    }

    pub fn with_routing(mut self, model: Model) -> Self {
        self.routing = model;
        self
    }

    pub fn with_agents(mut self, model: Model) -> Self {
        self.agents = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_uses_model_for_both_roles() {
        let config = ModelConfig::single(Model::Gemini25Pro);
        assert_eq!(config.routing, Model::Gemini25Pro);
        assert_eq!(config.agents, Model::Gemini25Pro);
    }

    #[test]
    fn test_override_routing_only() {
        let config = ModelConfig::default().with_routing(Model::Gemini25FlashLite);
        assert_eq!(config.routing, Model::Gemini25FlashLite);
        assert_eq!(config.agents, Model::Gemini25Flash);
    }
}
