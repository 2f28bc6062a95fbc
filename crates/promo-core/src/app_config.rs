const COMPANY_KEY_PLACEHOLDER: &str = "## COMPANY KEY HERE ##";
const COUPON_IMPORT_KEY_PLACEHOLDER: &str = "## COUPON IMPORT KEY HERE ##";

const EVALUATION_BASE_URL: &str = "https://evaluation.qixolpromo.com/api/";
const LIVE_BASE_URL: &str = "https://services.qixolpromo.com/api/";

/// Which hosted promotions environment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTarget {
    Evaluation,
    Live,
}

impl ServiceTarget {
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            ServiceTarget::Evaluation => EVALUATION_BASE_URL,
            ServiceTarget::Live => LIVE_BASE_URL,
        }
    }
}

impl std::fmt::Display for ServiceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceTarget::Evaluation => write!(f, "evaluation"),
            ServiceTarget::Live => write!(f, "live"),
        }
    }
}

/// A key that is missing or still holds the shipped placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWarning {
    CompanyKey,
    CouponImportKey,
}

impl KeyWarning {
    /// Guidance shown to the user before the program exits.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            KeyWarning::CompanyKey => {
                " Please provide your Company Key in PROMO_COMPANY_KEY.\n\
                 \x20 When you register to evaluate Qixol Promo you are assigned a Company Key.\n\
                 \x20 You can find it by logging into the Administration Portal, selecting\n\
                 \x20 'Configuration' from the navigation menu and then clicking 'Manage Company'."
            }
            KeyWarning::CouponImportKey => {
                " Please provide a Coupon Key in PROMO_COUPON_IMPORT_KEY.\n\
                 \x20 Coupon codes are imported into, and exported from, this coupon.\n\
                 \x20 The key is shown against the coupon under 'Coupons' in the Administration Portal."
            }
        }
    }
}

/// Keys required by every scenario, validated as present.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub company_key: String,
    pub coupon_import_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("company_key", &"[redacted]")
            .field("coupon_import_key", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub company_key: Option<String>,
    pub coupon_import_key: Option<String>,
    pub service_target: ServiceTarget,
    pub base_url: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Base URL requests go to: the explicit override, else the target's default.
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.service_target.base_url())
    }

    /// Returns both keys, or every warning that applies when either is
    /// missing or left as the placeholder.
    ///
    /// # Errors
    ///
    /// Returns the list of [`KeyWarning`]s when at least one key is unusable.
    pub fn credentials(&self) -> Result<Credentials, Vec<KeyWarning>> {
        let company_key = usable_key(self.company_key.as_deref(), COMPANY_KEY_PLACEHOLDER);
        let coupon_import_key = usable_key(
            self.coupon_import_key.as_deref(),
            COUPON_IMPORT_KEY_PLACEHOLDER,
        );

        match (company_key, coupon_import_key) {
            (Some(company_key), Some(coupon_import_key)) => Ok(Credentials {
                company_key: company_key.to_owned(),
                coupon_import_key: coupon_import_key.to_owned(),
            }),
            (company_key, coupon_import_key) => {
                let mut warnings = Vec::new();
                if company_key.is_none() {
                    warnings.push(KeyWarning::CompanyKey);
                }
                if coupon_import_key.is_none() {
                    warnings.push(KeyWarning::CouponImportKey);
                }
                Err(warnings)
            }
        }
    }
}

/// Empty values and the placeholder (any casing) are unusable.
fn usable_key<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(placeholder))
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "company_key",
                &self.company_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "coupon_import_key",
                &self.coupon_import_key.as_ref().map(|_| "[redacted]"),
            )
            .field("service_target", &self.service_target)
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
