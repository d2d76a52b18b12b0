use crate::models::analytics::{
    AllocationSlice, CategoryAllocation, CategorySummary, InvestmentCategory,
};
use crate::models::investment::Investment;

/// Breakdowns computed from the holdings of the last load.
///
/// Pure functions of the input list; nothing is cached between calls.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Group holdings by `investment_type`, in order of first appearance.
    ///
    /// `avg_profit_loss` compares the money a category is worth now with the
    /// purchase values it was bought at.
    #[must_use]
    pub fn category_summaries(&self, investments: &[Investment]) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();

        for inv in investments {
            let category = inv.category();
            let idx = match summaries.iter().position(|s| s.category == category) {
                Some(idx) => idx,
                None => {
                    summaries.push(CategorySummary {
                        category: category.to_string(),
                        total_value: 0.0,
                        total_money: 0.0,
                        count: 0,
                        avg_profit_loss: 0.0,
                    });
                    summaries.len() - 1
                }
            };
            let summary = &mut summaries[idx];
            summary.total_value += inv.purchase_value;
            summary.total_money += inv.total_money;
            summary.count += 1;
        }

        for summary in &mut summaries {
            summary.avg_profit_loss = if summary.total_value > 0.0 {
                (summary.total_money - summary.total_value) / summary.total_value * 100.0
            } else {
                0.0
            };
        }

        summaries
    }

    /// Share of total money per holding, largest first.
    ///
    /// When the portfolio holds no money every share is 0.
    #[must_use]
    pub fn asset_allocation(&self, investments: &[Investment]) -> Vec<AllocationSlice> {
        let total: f64 = investments.iter().map(|i| i.total_money).sum();

        let mut slices: Vec<AllocationSlice> = investments
            .iter()
            .map(|inv| AllocationSlice {
                isin: inv.isin.clone(),
                asset_name: inv.asset_name.clone(),
                total_money: inv.total_money,
                percentage: if total > 0.0 {
                    inv.total_money / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        slices.sort_by(|a, b| {
            b.total_money
                .partial_cmp(&a.total_money)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices
    }

    /// Holdings sorted into the fixed categories, every category present in
    /// table order even when empty.
    #[must_use]
    pub fn categorize<'a>(
        &self,
        investments: &'a [Investment],
    ) -> Vec<(InvestmentCategory, Vec<&'a Investment>)> {
        let mut groups: Vec<(InvestmentCategory, Vec<&'a Investment>)> = InvestmentCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for inv in investments {
            let category = InvestmentCategory::from_investment_type(inv.investment_type.as_deref());
            if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == category) {
                members.push(inv);
            }
        }
        groups
    }

    /// Money per chart category, in chart order.
    #[must_use]
    pub fn category_allocation(&self, investments: &[Investment]) -> Vec<CategoryAllocation> {
        let mut totals = vec![0.0_f64; InvestmentCategory::CHART.len()];
        for inv in investments {
            let category = InvestmentCategory::chart_category(inv.investment_type.as_deref());
            if let Some(idx) = InvestmentCategory::CHART.iter().position(|c| *c == category) {
                totals[idx] += inv.total_money;
            }
        }
        let overall: f64 = totals.iter().sum();

        InvestmentCategory::CHART
            .iter()
            .zip(totals)
            .map(|(category, total_money)| CategoryAllocation {
                category: *category,
                total_money,
                percentage: if overall > 0.0 {
                    total_money / overall * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
