use serde::{Deserialize, Serialize};

/// Totals for one `investment_type` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,

    /// Sum of purchase values in this category.
    pub total_value: f64,

    /// Sum of `total_money` in this category.
    pub total_money: f64,

    /// Number of holdings in this category.
    pub count: usize,

    /// (total_money - total_value) / total_value * 100, or 0 when nothing
    /// was invested.
    pub avg_profit_loss: f64,
}

/// One asset's share of the portfolio's money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub isin: String,
    pub asset_name: String,
    pub total_money: f64,

    /// total_money / sum(total_money) * 100
    pub percentage: f64,
}

/// Fixed portfolio categories, matched by substring against the upper-cased
/// `investment_type`. Anything unmatched counts as variable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentCategory {
    /// Periodic purchase plans over fixed or variable income.
    Dca,
    RentaFija,
    RentaVariable,
    Cryptomonedas,
    Acciones,
    Crowfounding,
    Epsv,
    CapitalRiesgo,
}

impl InvestmentCategory {
    /// Table order.
    pub const ALL: [InvestmentCategory; 8] = [
        InvestmentCategory::Dca,
        InvestmentCategory::RentaFija,
        InvestmentCategory::RentaVariable,
        InvestmentCategory::Cryptomonedas,
        InvestmentCategory::Acciones,
        InvestmentCategory::Crowfounding,
        InvestmentCategory::Epsv,
        InvestmentCategory::CapitalRiesgo,
    ];

    /// Pie chart order. DCA plans are charted under their asset class.
    pub const CHART: [InvestmentCategory; 7] = [
        InvestmentCategory::RentaFija,
        InvestmentCategory::RentaVariable,
        InvestmentCategory::Cryptomonedas,
        InvestmentCategory::Acciones,
        InvestmentCategory::Crowfounding,
        InvestmentCategory::Epsv,
        InvestmentCategory::CapitalRiesgo,
    ];

    /// Table category. "DCA" only wins when combined with "RENTA FIJA" or
    /// "RENTA VARIABLE".
    #[must_use]
    pub fn from_investment_type(investment_type: Option<&str>) -> Self {
        let upper = investment_type.unwrap_or_default().to_uppercase();
        if upper.contains("DCA")
            && (upper.contains("RENTA FIJA") || upper.contains("RENTA VARIABLE"))
        {
            return InvestmentCategory::Dca;
        }
        Self::asset_class(&upper)
    }

    /// Chart category: the table rules without the DCA bucket.
    #[must_use]
    pub fn chart_category(investment_type: Option<&str>) -> Self {
        Self::asset_class(&investment_type.unwrap_or_default().to_uppercase())
    }

    fn asset_class(upper: &str) -> Self {
        const RULES: [(&str, InvestmentCategory); 7] = [
            ("RENTA FIJA", InvestmentCategory::RentaFija),
            ("RENTA VARIABLE", InvestmentCategory::RentaVariable),
            ("CRYPTO", InvestmentCategory::Cryptomonedas),
            ("ACCIONES", InvestmentCategory::Acciones),
            ("CROWFOUNDING", InvestmentCategory::Crowfounding),
            ("EPSV", InvestmentCategory::Epsv),
            ("CAPITAL RIESGO", InvestmentCategory::CapitalRiesgo),
        ];
        RULES
            .iter()
            .find(|(needle, _)| upper.contains(needle))
            .map_or(InvestmentCategory::RentaVariable, |(_, category)| *category)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InvestmentCategory::Dca => "DCA",
            InvestmentCategory::RentaFija => "RENTA FIJA",
            InvestmentCategory::RentaVariable => "RENTA VARIABLE",
            InvestmentCategory::Cryptomonedas => "CRYPTOMONEDAS",
            InvestmentCategory::Acciones => "ACCIONES",
            InvestmentCategory::Crowfounding => "CROWFOUNDING",
            InvestmentCategory::Epsv => "EPSV",
            InvestmentCategory::CapitalRiesgo => "CAPITAL RIESGO & STARTUPS",
        }
    }

    /// Slice color in the pie chart; DCA is never charted on its own.
    #[must_use]
    pub fn chart_color(self) -> Option<&'static str> {
        match self {
            InvestmentCategory::Dca => None,
            InvestmentCategory::RentaFija => Some("#FF6B6B"),
            InvestmentCategory::RentaVariable => Some("#48CAE4"),
            InvestmentCategory::Cryptomonedas => Some("#F9C74F"),
            InvestmentCategory::Acciones => Some("#6BCB77"),
            InvestmentCategory::Crowfounding => Some("#4D96FF"),
            InvestmentCategory::Epsv => Some("#BC6FF1"),
            InvestmentCategory::CapitalRiesgo => Some("#FFA500"),
        }
    }
}

impl std::fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's slice of the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: InvestmentCategory,
    pub total_money: f64,

    /// total_money / overall money * 100, or 0 when the portfolio is empty.
    pub percentage: f64,
}
