//! Messaging Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use fieldnote::Activity;

// ============================================
// Request/Response DTOs
// ============================================

/// Create message request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    /// Message text, must not be blank
    pub message: String,
    /// Primary id of the target entity
    pub target_id: i64,
    /// One of "form", "project", "user"
    pub target_type: String,
}

/// A created or listed message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
    pub target_id: i64,
    pub target_type: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

impl MessageResponse {
    pub fn from_domain(activity: Activity) -> Self {
        Self {
            id: activity.id,
            message: activity.description,
            target_id: activity.target_id,
            target_type: activity.target_type.to_string(),
            actor: activity.actor_name,
            created_at: activity.created_at,
        }
    }
}

/// Query parameters for listing messages
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMessagesParams {
    /// One of "form", "project", "user"
    pub target_type: String,
    /// Primary id of the target entity
    pub target_id: i64,
    /// Max records to return (1-100, default 50)
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use fieldnote::{Actor, Target, TargetType};

    #[test]
    fn test_response_projects_activity_fields() {
        let actor = Actor::new(7, "amina");
        let target = Target::new(TargetType::Form, 3, "household survey", 7);
        let activity = Activity::message(&actor, &target, "Please review");

        let response = MessageResponse::from_domain(activity.clone());

        assert_eq!(response.id, activity.id);
        assert_eq!(response.message, "Please review");
        assert_eq!(response.target_id, 3);
        assert_eq!(response.target_type, "form");
        assert_eq!(response.actor, "amina");
    }

    #[test]
    fn test_create_request_shape() {
        let request: CreateMessageRequest = serde_json::from_value(serde_json::json!({
            "message": "Please review",
            "target_id": 42,
            "target_type": "project"
        }))
        .unwrap();

        assert_eq!(request.message, "Please review");
        assert_eq!(request.target_id, 42);
        assert_eq!(request.target_type, "project");
    }
}
