use domain::topic_policy::TopicPolicy;

#[derive(Debug, Clone, Default)]
pub struct TopicGate {
    policy: TopicPolicy,
}

impl TopicGate {
    pub fn new() -> Self {
        Self {
            policy: TopicPolicy::new(),
        }
    }

    pub fn with_policy(policy: TopicPolicy) -> Self {
        Self { policy }
    }

    pub fn is_on_topic(&self, message: &str) -> bool {
        self.policy.is_on_topic(message)
    }
}
