use clap::ValueEnum;

/// The demonstrations offered by the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    SubmitBasket,
    CreateUpdateProduct,
    ValidateCouponCode,
    PromotionsForDay,
    PromotionsForProduct,
    MissedPromotions,
    PushCouponCodes,
    RetrieveCouponCodes,
}

impl Scenario {
    pub const ALL: [Scenario; 8] = [
        Scenario::SubmitBasket,
        Scenario::CreateUpdateProduct,
        Scenario::ValidateCouponCode,
        Scenario::PromotionsForDay,
        Scenario::PromotionsForProduct,
        Scenario::MissedPromotions,
        Scenario::PushCouponCodes,
        Scenario::RetrieveCouponCodes,
    ];

    /// Menu key, `'1'` through `'8'`.
    pub fn key(self) -> char {
        match self {
            Scenario::SubmitBasket => '1',
            Scenario::CreateUpdateProduct => '2',
            Scenario::ValidateCouponCode => '3',
            Scenario::PromotionsForDay => '4',
            Scenario::PromotionsForProduct => '5',
            Scenario::MissedPromotions => '6',
            Scenario::PushCouponCodes => '7',
            Scenario::RetrieveCouponCodes => '8',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::SubmitBasket => "Submit basket",
            Scenario::CreateUpdateProduct => "Create/Update Product",
            Scenario::ValidateCouponCode => "Validate Coupon Code",
            Scenario::PromotionsForDay => "Retrieve Basket Promotions for Day",
            Scenario::PromotionsForProduct => "Retrieve Basket Promotions for Day by Product",
            Scenario::MissedPromotions => "Retrieve Missed Promotions with Basket",
            Scenario::PushCouponCodes => "Push Coupon Codes to Promo",
            Scenario::RetrieveCouponCodes => "Retrieve Coupon Codes from Promo",
        }
    }

    /// Name accepted by `promo-cli run`.
    pub fn cli_name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_default()
    }

    /// Scenario for a menu selection; anything else means quit.
    pub fn from_selection(selection: &str) -> Option<Self> {
        let mut chars = selection.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_menu_order() {
        let keys: String = Scenario::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, "12345678");
    }

    #[test]
    fn selection_maps_to_scenario() {
        assert_eq!(Scenario::from_selection("1"), Some(Scenario::SubmitBasket));
        assert_eq!(
            Scenario::from_selection(" 8\n"),
            Some(Scenario::RetrieveCouponCodes)
        );
    }

    #[test]
    fn cli_names_are_kebab_case() {
        assert_eq!(Scenario::SubmitBasket.cli_name(), "submit-basket");
        assert_eq!(
            Scenario::RetrieveCouponCodes.cli_name(),
            "retrieve-coupon-codes"
        );
    }

    #[test]
    fn unrecognised_selection_is_none() {
        assert_eq!(Scenario::from_selection("9"), None);
        assert_eq!(Scenario::from_selection("q"), None);
        assert_eq!(Scenario::from_selection("12"), None);
        assert_eq!(Scenario::from_selection(""), None);
    }
}
