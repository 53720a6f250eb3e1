use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Closed set of display languages shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Ta,
    Te,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "ta" => Some(Self::Ta),
            "te" => Some(Self::Te),
            _ => None,
        }
    }

    /// Resolves an optional caller-supplied code, falling back to English.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or(Self::DEFAULT)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
            Self::Te => "te",
        }
    }
}

/// Resolves `key` for the language identified by `code`.
///
/// Resolution order: requested pack, English pack, then the raw key itself.
/// Unrecognized codes skip straight to the English pack, so the function
/// always returns a printable string.
pub fn translate<'a>(code: &str, key: &'a str) -> &'a str {
    match Language::from_code(code) {
        Some(language) => translate_in(language, key),
        None => translate_in(Language::En, key),
    }
}

/// Same resolution as [`translate`], for an already-resolved [`Language`].
pub fn translate_in<'a>(language: Language, key: &'a str) -> &'a str {
    if let Some(text) = pack(language).get(key) {
        return text;
    }

    if language != Language::En {
        if let Some(text) = pack(Language::En).get(key) {
            return text;
        }
    }

    key
}

fn pack(language: Language) -> &'static HashMap<&'static str, &'static str> {
    static PACKS: OnceLock<HashMap<Language, HashMap<&'static str, &'static str>>> =
        OnceLock::new();
    let packs = PACKS.get_or_init(|| {
        let mut packs = HashMap::new();
        packs.insert(Language::En, build_pack(EN_PACK));
        packs.insert(Language::Hi, build_pack(HI_PACK));
        packs.insert(Language::Ta, build_pack(TA_PACK));
        packs.insert(Language::Te, build_pack(TE_PACK));
        packs
    });

    packs
        .get(&language)
        .unwrap_or_else(|| packs.get(&Language::En).expect("english pack present"))
}

fn build_pack(
    entries: &[(&'static str, &'static str)],
) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::with_capacity(entries.len());
    for (key, text) in entries {
        map.insert(*key, *text);
    }
    map
}

const EN_PACK: &[(&str, &str)] = &[
    ("risk_level", "Risk Level"),
    ("risk_score", "Compliance Risk"),
    ("risk_factors", "Risk Factors"),
    ("top_risks", "Top Risks"),
    ("obligations", "Compliance Obligations"),
    ("penalties", "Penalties"),
    ("compliance_plan", "Compliance Plan"),
    ("action_plan", "Action Plan"),
    ("immediate_actions", "Immediate Actions"),
    ("short_term_actions", "Short-Term Actions"),
    ("long_term_actions", "Long-Term Actions"),
    ("sustainability", "Sustainability"),
    ("profitability", "Profitability"),
    ("ethics", "Ethics"),
    ("matched_schemes", "Matched Government Schemes"),
    ("recommendations", "Recommendations"),
    ("market_overview", "Market Overview"),
    ("competitive_position", "Competitive Position"),
    ("key_competitors", "Key Competitors"),
    ("market_metrics", "Market Metrics"),
    ("your_position", "Your Estimated Position"),
    ("strengths", "Strengths"),
    ("weaknesses", "Weaknesses"),
    ("opportunities", "Opportunities"),
    ("threats", "Threats"),
    ("priority_high", "High"),
    ("priority_medium", "Medium"),
    ("priority_low", "Low"),
    ("barrier_to_entry", "Barrier to Entry"),
    ("price_sensitivity", "Price Sensitivity"),
    ("digital_adoption", "Digital Adoption"),
    ("required_documents", "Required Documents"),
    ("who_is_affected", "Who Is Affected"),
    ("conditions", "Conditions"),
    ("exceptions", "Exceptions"),
    ("applicable", "Applicable"),
    ("partially_applicable", "Partially Applicable"),
    ("not_applicable", "Not Applicable"),
    ("status_unknown", "Status Unknown"),
    ("auto_fetched", "Auto-fetched policy"),
    ("government_portals", "Government Portals"),
    ("compliance_resources", "Compliance Resources"),
    ("business_tools", "Business Tools"),
    ("learning_resources", "Learning Resources"),
];

const HI_PACK: &[(&str, &str)] = &[
    ("risk_level", "\u{091c}\u{094b}\u{0916}\u{093f}\u{092e} \u{0938}\u{094d}\u{0924}\u{0930}"),
    ("risk_score", "\u{0905}\u{0928}\u{0941}\u{092a}\u{093e}\u{0932}\u{0928} \u{091c}\u{094b}\u{0916}\u{093f}\u{092e}"),
    ("risk_factors", "\u{091c}\u{094b}\u{0916}\u{093f}\u{092e} \u{0915}\u{093e}\u{0930}\u{0915}"),
    ("top_risks", "\u{092a}\u{094d}\u{0930}\u{092e}\u{0941}\u{0916} \u{091c}\u{094b}\u{0916}\u{093f}\u{092e}"),
    ("obligations", "\u{0905}\u{0928}\u{0941}\u{092a}\u{093e}\u{0932}\u{0928} \u{0926}\u{093e}\u{092f}\u{093f}\u{0924}\u{094d}\u{0935}"),
    ("penalties", "\u{0926}\u{0902}\u{0921}"),
    ("compliance_plan", "\u{0905}\u{0928}\u{0941}\u{092a}\u{093e}\u{0932}\u{0928} \u{092f}\u{094b}\u{091c}\u{0928}\u{093e}"),
    ("action_plan", "\u{0915}\u{093e}\u{0930}\u{094d}\u{092f} \u{092f}\u{094b}\u{091c}\u{0928}\u{093e}"),
    ("immediate_actions", "\u{0924}\u{0924}\u{094d}\u{0915}\u{093e}\u{0932} \u{0915}\u{093e}\u{0930}\u{094d}\u{092f}"),
    ("short_term_actions", "\u{0905}\u{0932}\u{094d}\u{092a}\u{0915}\u{093e}\u{0932}\u{093f}\u{0915} \u{0915}\u{093e}\u{0930}\u{094d}\u{092f}"),
    ("long_term_actions", "\u{0926}\u{0940}\u{0930}\u{094d}\u{0918}\u{0915}\u{093e}\u{0932}\u{093f}\u{0915} \u{0915}\u{093e}\u{0930}\u{094d}\u{092f}"),
    ("sustainability", "\u{0938}\u{094d}\u{0925}\u{093f}\u{0930}\u{0924}\u{093e}"),
    ("profitability", "\u{0932}\u{093e}\u{092d}\u{092a}\u{094d}\u{0930}\u{0926}\u{0924}\u{093e}"),
    ("ethics", "\u{0928}\u{0948}\u{0924}\u{093f}\u{0915}\u{0924}\u{093e}"),
    ("matched_schemes", "\u{0909}\u{092a}\u{092f}\u{0941}\u{0915}\u{094d}\u{0924} \u{0938}\u{0930}\u{0915}\u{093e}\u{0930}\u{0940} \u{092f}\u{094b}\u{091c}\u{0928}\u{093e}\u{090f}\u{0901}"),
    ("recommendations", "\u{0938}\u{093f}\u{092b}\u{093c}\u{093e}\u{0930}\u{093f}\u{0936}\u{0947}\u{0902}"),
    ("market_overview", "\u{092c}\u{093e}\u{091c}\u{093c}\u{093e}\u{0930} \u{0905}\u{0935}\u{0932}\u{094b}\u{0915}\u{0928}"),
    ("key_competitors", "\u{092a}\u{094d}\u{0930}\u{092e}\u{0941}\u{0916} \u{092a}\u{094d}\u{0930}\u{0924}\u{093f}\u{0938}\u{094d}\u{092a}\u{0930}\u{094d}\u{0927}\u{0940}"),
    ("strengths", "\u{0924}\u{093e}\u{0915}\u{0924}\u{0947}\u{0902}"),
    ("weaknesses", "\u{0915}\u{092e}\u{091c}\u{093c}\u{094b}\u{0930}\u{093f}\u{092f}\u{093e}\u{0901}"),
    ("opportunities", "\u{0905}\u{0935}\u{0938}\u{0930}"),
    ("threats", "\u{0916}\u{0924}\u{0930}\u{0947}"),
    ("priority_high", "\u{0909}\u{091a}\u{094d}\u{091a}"),
    ("priority_medium", "\u{092e}\u{0927}\u{094d}\u{092f}\u{092e}"),
    ("priority_low", "\u{0928}\u{093f}\u{092e}\u{094d}\u{0928}"),
    ("barrier_to_entry", "\u{092a}\u{094d}\u{0930}\u{0935}\u{0947}\u{0936} \u{092c}\u{093e}\u{0927}\u{093e}"),
    ("price_sensitivity", "\u{092e}\u{0942}\u{0932}\u{094d}\u{092f} \u{0938}\u{0902}\u{0935}\u{0947}\u{0926}\u{0928}\u{0936}\u{0940}\u{0932}\u{0924}\u{093e}"),
    ("digital_adoption", "\u{0921}\u{093f}\u{091c}\u{093f}\u{091f}\u{0932} \u{0905}\u{092a}\u{0928}\u{093e}\u{092a}\u{0928}"),
    ("required_documents", "\u{0906}\u{0935}\u{0936}\u{094d}\u{092f}\u{0915} \u{0926}\u{0938}\u{094d}\u{0924}\u{093e}\u{0935}\u{0947}\u{091c}\u{093c}"),
    ("applicable", "\u{0932}\u{093e}\u{0917}\u{0942}"),
    ("not_applicable", "\u{0932}\u{093e}\u{0917}\u{0942} \u{0928}\u{0939}\u{0940}\u{0902}"),
    ("government_portals", "\u{0938}\u{0930}\u{0915}\u{093e}\u{0930}\u{0940} \u{092a}\u{094b}\u{0930}\u{094d}\u{091f}\u{0932}"),
    ("compliance_resources", "\u{0905}\u{0928}\u{0941}\u{092a}\u{093e}\u{0932}\u{0928} \u{0938}\u{0902}\u{0938}\u{093e}\u{0927}\u{0928}"),
    ("business_tools", "\u{0935}\u{094d}\u{092f}\u{093e}\u{092a}\u{093e}\u{0930} \u{0909}\u{092a}\u{0915}\u{0930}\u{0923}"),
    ("learning_resources", "\u{0936}\u{093f}\u{0915}\u{094d}\u{0937}\u{0923} \u{0938}\u{0902}\u{0938}\u{093e}\u{0927}\u{0928}"),
];

// The Tamil and Telugu packs cover the high-traffic labels; anything missing
// falls back to English at lookup time.
const TA_PACK: &[(&str, &str)] = &[
    ("risk_level", "\u{0b87}\u{0b9f}\u{0bb0}\u{0bcd} \u{0ba8}\u{0bbf}\u{0bb2}\u{0bc8}"),
    ("obligations", "\u{0b95}\u{0b9f}\u{0bae}\u{0bc8}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("penalties", "\u{0b85}\u{0baa}\u{0bb0}\u{0bbe}\u{0ba4}\u{0b99}\u{0bcd}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("action_plan", "\u{0b9a}\u{0bc6}\u{0baf}\u{0bb2}\u{0bcd} \u{0ba4}\u{0bbf}\u{0b9f}\u{0bcd}\u{0b9f}\u{0bae}\u{0bcd}"),
    ("sustainability", "\u{0ba8}\u{0bbf}\u{0bb2}\u{0bc8}\u{0ba4}\u{0bcd}\u{0ba4}\u{0ba9}\u{0bcd}\u{0bae}\u{0bc8}"),
    ("profitability", "\u{0b87}\u{0bb2}\u{0bbe}\u{0baa}\u{0ba4}\u{0bcd}\u{0ba4}\u{0ba9}\u{0bcd}\u{0bae}\u{0bc8}"),
    ("recommendations", "\u{0baa}\u{0bb0}\u{0bbf}\u{0ba8}\u{0bcd}\u{0ba4}\u{0bc1}\u{0bb0}\u{0bc8}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("market_overview", "\u{0b9a}\u{0ba8}\u{0bcd}\u{0ba4}\u{0bc8} \u{0b95}\u{0ba3}\u{0bcd}\u{0ba3}\u{0bcb}\u{0b9f}\u{0bcd}\u{0b9f}\u{0bae}\u{0bcd}"),
    ("strengths", "\u{0baa}\u{0bb2}\u{0b99}\u{0bcd}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("weaknesses", "\u{0baa}\u{0bb2}\u{0bb5}\u{0bc0}\u{0ba9}\u{0b99}\u{0bcd}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("opportunities", "\u{0bb5}\u{0bbe}\u{0baf}\u{0bcd}\u{0baa}\u{0bcd}\u{0baa}\u{0bc1}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("threats", "\u{0b85}\u{0b9a}\u{0bcd}\u{0b9a}\u{0bc1}\u{0bb1}\u{0bc1}\u{0ba4}\u{0bcd}\u{0ba4}\u{0bb2}\u{0bcd}\u{0b95}\u{0bb3}\u{0bcd}"),
    ("priority_high", "\u{0b89}\u{0baf}\u{0bb0}\u{0bcd}"),
    ("priority_medium", "\u{0ba8}\u{0b9f}\u{0bc1}\u{0ba4}\u{0bcd}\u{0ba4}\u{0bb0}"),
    ("priority_low", "\u{0b95}\u{0bc1}\u{0bb1}\u{0bc8}\u{0ba8}\u{0bcd}\u{0ba4}"),
];

const TE_PACK: &[(&str, &str)] = &[
    ("risk_level", "\u{0c2a}\u{0c4d}\u{0c30}\u{0c2e}\u{0c3e}\u{0c26} \u{0c38}\u{0c4d}\u{0c25}\u{0c3e}\u{0c2f}\u{0c3f}"),
    ("obligations", "\u{0c2c}\u{0c3e}\u{0c27}\u{0c4d}\u{0c2f}\u{0c24}\u{0c32}\u{0c41}"),
    ("penalties", "\u{0c1c}\u{0c30}\u{0c3f}\u{0c2e}\u{0c3e}\u{0c28}\u{0c3e}\u{0c32}\u{0c41}"),
    ("action_plan", "\u{0c15}\u{0c3e}\u{0c30}\u{0c4d}\u{0c2f}\u{0c3e}\u{0c1a}\u{0c30}\u{0c23} \u{0c2a}\u{0c4d}\u{0c30}\u{0c23}\u{0c3e}\u{0c33}\u{0c3f}\u{0c15}"),
    ("sustainability", "\u{0c38}\u{0c41}\u{0c38}\u{0c4d}\u{0c25}\u{0c3f}\u{0c30}\u{0c24}"),
    ("profitability", "\u{0c32}\u{0c3e}\u{0c2d}\u{0c26}\u{0c3e}\u{0c2f}\u{0c15}\u{0c24}"),
    ("recommendations", "\u{0c38}\u{0c3f}\u{0c2b}\u{0c3e}\u{0c30}\u{0c4d}\u{0c38}\u{0c41}\u{0c32}\u{0c41}"),
    ("market_overview", "\u{0c2e}\u{0c3e}\u{0c30}\u{0c4d}\u{0c15}\u{0c46}\u{0c1f}\u{0c4d} \u{0c05}\u{0c35}\u{0c32}\u{0c4b}\u{0c15}\u{0c28}\u{0c02}"),
    ("strengths", "\u{0c2c}\u{0c32}\u{0c3e}\u{0c32}\u{0c41}"),
    ("weaknesses", "\u{0c2c}\u{0c32}\u{0c39}\u{0c40}\u{0c28}\u{0c24}\u{0c32}\u{0c41}"),
    ("opportunities", "\u{0c05}\u{0c35}\u{0c15}\u{0c3e}\u{0c36}\u{0c3e}\u{0c32}\u{0c41}"),
    ("threats", "\u{0c2e}\u{0c41}\u{0c2a}\u{0c4d}\u{0c2a}\u{0c41}\u{0c32}\u{0c41}"),
    ("priority_high", "\u{0c05}\u{0c27}\u{0c3f}\u{0c15}"),
    ("priority_medium", "\u{0c2e}\u{0c27}\u{0c4d}\u{0c2f}\u{0c38}\u{0c4d}\u{0c25}"),
    ("priority_low", "\u{0c24}\u{0c15}\u{0c4d}\u{0c15}\u{0c41}\u{0c35}"),
];
