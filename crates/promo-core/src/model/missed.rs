use rust_decimal::Decimal;
use serde::Deserialize;

use super::wire_enum::wire_enum;
use crate::ModelError;

/// A promotion the basket did not qualify for, with the gap to qualify.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MissedPromotion {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub promotion_type_display: String,
    #[serde(default)]
    pub promotion_name: String,
    pub criteria: MissedPromotionCriteria,
    pub action: MissedPromotionAction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MissedPromotionCriteria {
    #[serde(default)]
    pub basket_additional_spend: Decimal,
    #[serde(default)]
    pub total_additional_spend: Decimal,
    #[serde(default)]
    pub criteria_items: Vec<CriteriaGroup>,
}

/// A group of products or attributes the basket must contain more of.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CriteriaGroup {
    pub source: CriteriaSource,
    #[serde(default)]
    pub additional_quantity: Decimal,
    #[serde(default)]
    pub additional_spend: Decimal,
    #[serde(default)]
    pub only_matched_items: bool,
    #[serde(default)]
    pub items: Vec<CriteriaItem>,
}

wire_enum!(
    /// Where a criteria group was defined on the promotion.
    CriteriaSource {
        Product,
        Attribute,
        Basket,
        Group,
    }
);

wire_enum!(
    /// What a missed promotion's reward is applied to.
    AppliesTo {
        Basket,
        Product,
        Delivery,
        Group,
    }
);

wire_enum!(
    /// Which items in a qualifying set the saving is taken from.
    SaveFrom {
        Cheapest,
        MostExpensive,
        Any,
        NotApplicable,
    }
);

/// Discriminator for [`CriteriaTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaItemType {
    Product,
    Attribute,
}

impl std::fmt::Display for CriteriaItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriteriaItemType::Product => write!(f, "Product"),
            CriteriaItemType::Attribute => write!(f, "Attribute"),
        }
    }
}

/// The product or attribute a criteria item refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaTarget {
    Product {
        product_code: String,
        variant_code: String,
    },
    Attribute {
        token: String,
        value: String,
    },
}

impl CriteriaTarget {
    #[must_use]
    pub fn item_type(&self) -> CriteriaItemType {
        match self {
            CriteriaTarget::Product { .. } => CriteriaItemType::Product,
            CriteriaTarget::Attribute { .. } => CriteriaItemType::Attribute,
        }
    }
}

/// One entry of a criteria group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CriteriaItemRecord")]
pub struct CriteriaItem {
    pub target: CriteriaTarget,
    pub is_matched: bool,
    /// Basket line ids already satisfying this item; meaningful only when
    /// `is_matched` is set.
    pub matched_line_ids: Vec<i64>,
}

/// Flat wire shape of [`CriteriaItem`]; only the fields selected by
/// `item_type` are meaningful.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CriteriaItemRecord {
    item_type: String,
    #[serde(default)]
    product_code: Option<String>,
    #[serde(default)]
    variant_code: Option<String>,
    #[serde(default)]
    attribute_token: Option<String>,
    #[serde(default)]
    attribute_value: Option<String>,
    #[serde(default)]
    is_matched: bool,
    #[serde(default)]
    matched_line_ids: Vec<i64>,
}

impl TryFrom<CriteriaItemRecord> for CriteriaItem {
    type Error = ModelError;

    fn try_from(record: CriteriaItemRecord) -> Result<Self, Self::Error> {
        let target = match record.item_type.as_str() {
            "Product" => CriteriaTarget::Product {
                product_code: record.product_code.unwrap_or_default(),
                variant_code: record.variant_code.unwrap_or_default(),
            },
            "Attribute" => CriteriaTarget::Attribute {
                token: record.attribute_token.unwrap_or_default(),
                value: record.attribute_value.unwrap_or_default(),
            },
            _ => return Err(ModelError::UnknownCriteriaItemType(record.item_type)),
        };
        Ok(Self {
            target,
            is_matched: record.is_matched,
            matched_line_ids: record.matched_line_ids,
        })
    }
}

/// The reward a missed promotion would have given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "MissedPromotionActionRecord")]
pub struct MissedPromotionAction {
    pub applies_to: AppliesTo,
    pub details: ActionDetails,
    pub save_from: SaveFrom,
}

/// Kind of reward. Only a percentage discount carries a value worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionDetails {
    PercentageDiscount { percentage: Decimal },
    AmountOff,
    FixedPrice,
    FreeProduct,
    Points,
    Other(String),
}

impl std::fmt::Display for ActionDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionDetails::PercentageDiscount { .. } => write!(f, "PercentageDiscount"),
            ActionDetails::AmountOff => write!(f, "AmountOff"),
            ActionDetails::FixedPrice => write!(f, "FixedPrice"),
            ActionDetails::FreeProduct => write!(f, "FreeProduct"),
            ActionDetails::Points => write!(f, "Points"),
            ActionDetails::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MissedPromotionActionRecord {
    applies_to: AppliesTo,
    details: String,
    #[serde(default)]
    percentage: Decimal,
    save_from: SaveFrom,
}

impl From<MissedPromotionActionRecord> for MissedPromotionAction {
    fn from(record: MissedPromotionActionRecord) -> Self {
        let details = match record.details.as_str() {
            "PercentageDiscount" => ActionDetails::PercentageDiscount {
                percentage: record.percentage,
            },
            "AmountOff" => ActionDetails::AmountOff,
            "FixedPrice" => ActionDetails::FixedPrice,
            "FreeProduct" => ActionDetails::FreeProduct,
            "Points" => ActionDetails::Points,
            _ => ActionDetails::Other(record.details),
        };
        Self {
            applies_to: record.applies_to,
            details,
            save_from: record.save_from,
        }
    }
}
