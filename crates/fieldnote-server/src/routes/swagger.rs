//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateMessageRequest, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Messaging endpoints
        super::messaging::create_message,
        super::messaging::list_messages,
        super::messaging::get_message,
    ),
    info(
        title = "Fieldnote API",
        version = "0.2.0",
        description = "Messaging over the activity stream of a survey data-collection platform.\n\nMessages attach to forms, projects and users, and every send is an activity record.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Messaging", description = "Messages attached to forms, projects and users"),
    ),
    components(
        schemas(
            CreateMessageRequest,
            MessageResponse,
        )
    )
)]
pub struct ApiDoc;
