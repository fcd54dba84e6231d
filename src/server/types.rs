use serde::Serialize;

/// Reply for structured conversational-platform integrations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub fulfillment_messages: Vec<FulfillmentMessage>,
    pub fulfillment_text: String,
}

#[derive(Debug, Serialize)]
pub struct FulfillmentMessage {
    pub text: FulfillmentText,
}

#[derive(Debug, Serialize)]
pub struct FulfillmentText {
    pub text: Vec<String>,
}

/// Reply for plain web-chat integrations.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

impl FulfillmentResponse {
    /// Some integrations read `fulfillmentText`, others the first entry of
    /// `fulfillmentMessages`; both must carry the same string.
    pub fn new(answer: String) -> Self {
        Self {
            fulfillment_messages: vec![FulfillmentMessage {
                text: FulfillmentText {
                    text: vec![answer.clone()],
                },
            }],
            fulfillment_text: answer,
        }
    }
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
