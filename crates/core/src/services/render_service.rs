use reqwest::Url;

use crate::models::banner::Banner;
use crate::models::investment::Investment;
use crate::models::portfolio::Totals;
use crate::models::settings::{NumberFormat, Settings};
use super::format_service::{format_currency_with, format_percentage, profit_loss_class_opt};

/// Number of columns in the investments table.
pub const TABLE_COLUMNS: usize = 8;

pub const EMPTY_TABLE_TEXT: &str = "📭 No investments recorded";
pub const LOADING_TEXT: &str = "📊 Loading data...";

/// Turns dashboard state into HTML fragments.
///
/// Output replaces whole containers (`#investments-body`, `#totals-row`),
/// so every call renders from scratch. All text coming from the backend is
/// escaped.
#[derive(Debug, Clone)]
pub struct RenderService {
    currency_symbol: String,
    number_format: NumberFormat,
    quote_url_base: String,
}

impl RenderService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            number_format: settings.number_format.clone(),
            quote_url_base: settings.quote_url_base.clone(),
        }
    }

    fn money(&self, value: f64) -> String {
        format_currency_with(value, &self.currency_symbol, &self.number_format)
    }

    /// Contents of the table body: one `<tr>` per holding in input order,
    /// or a single placeholder row when there are none.
    #[must_use]
    pub fn table_body(&self, investments: &[Investment]) -> String {
        if investments.is_empty() {
            return placeholder_row(EMPTY_TABLE_TEXT);
        }
        investments
            .iter()
            .map(|inv| self.investment_row(inv))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A single holding's `<tr>`.
    #[must_use]
    pub fn investment_row(&self, inv: &Investment) -> String {
        let class = profit_loss_class_opt(inv.profit_loss_percentage);
        let pct = format_percentage(inv.profit_loss_percentage);
        format!(
            "<tr>\
             <td>{isin}</td>\
             <td>{name}</td>\
             <td>{purchase}</td>\
             <td>{amount}</td>\
             <td>{current}</td>\
             <td>{total}</td>\
             <td class=\"{class}\">{pct}%</td>\
             <td>{link}</td>\
             </tr>",
            isin = escape_html(&inv.isin),
            name = escape_html(&inv.asset_name),
            purchase = self.money(inv.purchase_value),
            amount = self.money(inv.amount),
            current = self.money(inv.current_value),
            total = self.money(inv.total_money),
            link = self.quote_link(&inv.isin),
        )
    }

    fn quote_link(&self, isin: &str) -> String {
        let isin = isin.trim();
        if isin.is_empty() {
            return String::new();
        }
        format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener\" title=\"View on Yahoo Finance\">📈</a>",
            href = escape_html(&self.quote_href(isin)),
        )
    }

    /// Quote page URL with the ticker percent-encoded as the last path
    /// segment.
    #[must_use]
    pub fn quote_href(&self, isin: &str) -> String {
        let fallback = || format!("{}{isin}", self.quote_url_base);
        let Ok(mut url) = Url::parse(&self.quote_url_base) else {
            return fallback();
        };
        let pushed = url.path_segments_mut().map(|mut segments| {
            segments.pop_if_empty().push(isin);
        });
        match pushed {
            Ok(()) => url.into(),
            Err(()) => fallback(),
        }
    }

    /// Cells of the totals row: quantity under the amount column and money
    /// under the total column.
    #[must_use]
    pub fn totals_row(&self, totals: &Totals) -> String {
        format!(
            "<td colspan=\"3\"></td>\
             <td><strong>{quantity}</strong></td>\
             <td></td>\
             <td><strong>{money}</strong></td>\
             <td colspan=\"2\"></td>",
            quantity = self.money(totals.quantity),
            money = self.money(totals.money),
        )
    }

    /// Placeholder shown while a load is in flight.
    #[must_use]
    pub fn loading_row(&self) -> String {
        placeholder_row(LOADING_TEXT)
    }

    /// Markup of a banner inside the message container.
    #[must_use]
    pub fn banner(&self, banner: &Banner) -> String {
        format!(
            "<div class=\"message-alert {kind}\" data-banner-id=\"{id}\">{text}</div>",
            kind = banner.kind.css_class(),
            id = banner.id,
            text = escape_html(&banner.text),
        )
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

fn placeholder_row(text: &str) -> String {
    format!("<tr><td colspan=\"{TABLE_COLUMNS}\" class=\"placeholder\">{text}</td></tr>")
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
