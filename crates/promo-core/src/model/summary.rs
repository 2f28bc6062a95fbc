use serde::Deserialize;

use super::basket::SummaryAppliedPromotion;

/// A diagnostic message attached to every response summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Success flag plus messages, shared by every summary shape.
pub trait Outcome {
    fn succeeded(&self) -> bool;
    fn messages(&self) -> &[Message];
}

/// Summary envelope for basket, coupon validation and promotion export calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseSummary {
    pub processing_result: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Basket summary: the common envelope plus the promotions applied to the
/// basket as a whole. Line-level entries refer back to these by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasketResponseSummary {
    pub processing_result: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub applied_promotions: Vec<SummaryAppliedPromotion>,
}

/// Summary envelope for import calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportResponseSummary {
    pub processed_successfully: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Summary envelope for coupon code export calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportResponseSummary {
    pub processed_successfully: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Outcome for ResponseSummary {
    fn succeeded(&self) -> bool {
        self.processing_result
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Outcome for BasketResponseSummary {
    fn succeeded(&self) -> bool {
        self.processing_result
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Outcome for ImportResponseSummary {
    fn succeeded(&self) -> bool {
        self.processed_successfully
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Outcome for ExportResponseSummary {
    fn succeeded(&self) -> bool {
        self.processed_successfully
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}
