// ═══════════════════════════════════════════════════════════════════
// Model Tests - wire payloads, lenient numbers, inputs, settings
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use portfolio_dashboard_core::errors::DashboardError;
use portfolio_dashboard_core::models::api::{
    MutationResponse, PortfolioResponse, UpdateAssetsResponse,
};
use portfolio_dashboard_core::models::asset_input::{AssetUpdate, EditAssetRequest, NewAsset};
use portfolio_dashboard_core::models::banner::{Banner, BannerKind};
use portfolio_dashboard_core::models::control::{Control, ControlState, WindowSpec};
use portfolio_dashboard_core::models::investment::{AssetId, Investment};
use portfolio_dashboard_core::models::portfolio::{PortfolioSnapshot, Totals};
use portfolio_dashboard_core::models::settings::{NumberFormat, Settings};

// ═══════════════════════════════════════════════════════════════════
//  Investment
// ═══════════════════════════════════════════════════════════════════

mod investment {
    use super::*;

    #[test]
    fn full_row_deserializes() {
        let inv: Investment = serde_json::from_value(json!({
            "id": 7,
            "isin": "IE00B4L5Y983",
            "asset_name": "iShares Core MSCI World",
            "purchase_value": 72.5,
            "amount": 1000.0,
            "current_value": 80.0,
            "total_money": 1103.45,
            "profit_loss_percentage": 10.345,
            "investment_type": "ETF",
            "created_at": "2025-01-15T10:00:00",
            "updated_at": "2025-02-01T08:30:00"
        }))
        .unwrap();

        assert_eq!(inv.id, Some(AssetId::new("7")));
        assert_eq!(inv.isin, "IE00B4L5Y983");
        assert_eq!(inv.purchase_value, 72.5);
        assert_eq!(inv.amount, 1000.0);
        assert_eq!(inv.current_value, 80.0);
        assert_eq!(inv.total_money, 1103.45);
        assert_eq!(inv.profit_loss_percentage, Some(10.345));
        assert_eq!(inv.category(), "ETF");
    }

    #[test]
    fn empty_object_defaults_to_zero() {
        let inv: Investment = serde_json::from_str("{}").unwrap();
        assert_eq!(inv.id, None);
        assert_eq!(inv.isin, "");
        assert_eq!(inv.asset_name, "");
        assert_eq!(inv.purchase_value, 0.0);
        assert_eq!(inv.amount, 0.0);
        assert_eq!(inv.current_value, 0.0);
        assert_eq!(inv.total_money, 0.0);
        assert_eq!(inv.profit_loss_percentage, None);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let inv: Investment = serde_json::from_value(json!({
            "purchase_value": "250.50",
            "amount": " 1000 ",
            "profit_loss_percentage": "-3.25"
        }))
        .unwrap();
        assert_eq!(inv.purchase_value, 250.5);
        assert_eq!(inv.amount, 1000.0);
        assert_eq!(inv.profit_loss_percentage, Some(-3.25));
    }

    #[test]
    fn nulls_and_garbage_become_defaults() {
        let inv: Investment = serde_json::from_value(json!({
            "purchase_value": null,
            "amount": "n/a",
            "current_value": [],
            "profit_loss_percentage": null
        }))
        .unwrap();
        assert_eq!(inv.purchase_value, 0.0);
        assert_eq!(inv.amount, 0.0);
        assert_eq!(inv.current_value, 0.0);
        assert_eq!(inv.profit_loss_percentage, None);
    }

    #[test]
    fn booleans_are_not_numbers() {
        let inv: Investment = serde_json::from_value(json!({
            "amount": true,
            "total_money": false,
            "profit_loss_percentage": true
        }))
        .unwrap();
        assert_eq!(inv.amount, 0.0);
        assert_eq!(inv.total_money, 0.0);
        assert_eq!(inv.profit_loss_percentage, None);
    }

    #[test]
    fn string_id_is_kept() {
        let inv: Investment = serde_json::from_value(json!({ "id": "a1b2" })).unwrap();
        assert_eq!(inv.id.as_ref().map(AssetId::as_str), Some("a1b2"));
    }

    #[test]
    fn object_id_is_rejected() {
        let res = serde_json::from_value::<Investment>(json!({ "id": {"x": 1} }));
        assert!(res.is_err());
    }

    #[test]
    fn category_falls_back_when_missing_or_blank() {
        let mut inv = Investment::new("X", "Y");
        assert_eq!(inv.category(), "Uncategorized");
        inv.investment_type = Some("   ".into());
        assert_eq!(inv.category(), "Uncategorized");
        inv.investment_type = Some("Stocks".into());
        assert_eq!(inv.category(), "Stocks");
    }

    #[test]
    fn asset_id_display_and_from() {
        assert_eq!(AssetId::from(42u64).to_string(), "42");
        assert_eq!(AssetId::from("abc").as_str(), "abc");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Responses
// ═══════════════════════════════════════════════════════════════════

mod responses {
    use super::*;

    #[test]
    fn portfolio_response_success() {
        let resp: PortfolioResponse = serde_json::from_value(json!({
            "success": true,
            "investments": [
                {"isin": "AAPL", "asset_name": "Apple"},
                {"isin": "MSFT", "asset_name": "Microsoft"}
            ],
            "totals": {"quantity": 2000, "money": "2100.5", "purchase_value": 500}
        }))
        .unwrap();

        assert!(resp.success);
        assert_eq!(resp.investments.len(), 2);
        assert_eq!(resp.totals.quantity, 2000.0);
        assert_eq!(resp.totals.money, 2100.5);
        assert_eq!(resp.totals.purchase_value, 500.0);

        let snapshot = resp.into_snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.investments[0].isin, "AAPL");
        assert_eq!(snapshot.investments[1].isin, "MSFT");
    }

    #[test]
    fn portfolio_response_failure() {
        let resp: PortfolioResponse = serde_json::from_value(json!({
            "success": false,
            "error": "No investments found"
        }))
        .unwrap();
        assert!(!resp.success);
        assert!(resp.investments.is_empty());
        assert_eq!(resp.totals, Totals::default());
        assert_eq!(resp.error.as_deref(), Some("No investments found"));
    }

    #[test]
    fn update_response_with_errors() {
        let resp: UpdateAssetsResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Update completed. 3 assets updated.",
            "updated_count": 3,
            "errors": ["Error with Fund A: timeout", "Error with Fund B: 404"]
        }))
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.updated_count, 3);
        assert_eq!(resp.failed_count(), 2);
    }

    #[test]
    fn update_response_null_errors() {
        let resp: UpdateAssetsResponse = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "updated_count": "5",
            "errors": null
        }))
        .unwrap();
        assert_eq!(resp.updated_count, 5);
        assert_eq!(resp.failed_count(), 0);
    }

    #[test]
    fn mutation_response_with_data() {
        let resp: MutationResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Asset 'Tesla' added",
            "data": {"id": 12, "isin": "TSLA", "asset_name": "Tesla"}
        }))
        .unwrap();
        assert!(resp.success);
        let data = resp.data.unwrap();
        assert_eq!(data.isin, "TSLA");
        assert_eq!(data.id, Some(AssetId::from(12u64)));
    }

    #[test]
    fn snapshot_default_is_empty() {
        let snapshot = PortfolioSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Asset inputs
// ═══════════════════════════════════════════════════════════════════

mod asset_input {
    use super::*;

    #[test]
    fn new_asset_trims_and_validates() {
        let asset = NewAsset::new("  TSLA ", " Tesla Inc. ", 250.5, 1000.0);
        assert_eq!(asset.isin, "TSLA");
        assert_eq!(asset.asset_name, "Tesla Inc.");
        assert!(asset.validate().is_ok());
    }

    #[test]
    fn new_asset_rejects_missing_fields() {
        let cases = [
            (NewAsset::new("", "Tesla", 1.0, 1.0), "isin"),
            (NewAsset::new("TSLA", "", 1.0, 1.0), "asset_name"),
            (NewAsset::new("TSLA", "Tesla", 0.0, 1.0), "purchase_value"),
            (NewAsset::new("TSLA", "Tesla", 1.0, 0.0), "amount"),
        ];
        for (asset, field) in cases {
            match asset.validate() {
                Err(DashboardError::ValidationError(msg)) => {
                    assert_eq!(msg, format!("required field missing: {field}"));
                }
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn new_asset_rejects_non_finite() {
        let asset = NewAsset::new("TSLA", "Tesla", f64::NAN, 1.0);
        assert!(matches!(
            asset.validate(),
            Err(DashboardError::ValidationError(_))
        ));
    }

    #[test]
    fn new_asset_serializes_without_empty_type() {
        let value = serde_json::to_value(NewAsset::new("TSLA", "Tesla", 250.5, 1000.0)).unwrap();
        assert_eq!(
            value,
            json!({"isin": "TSLA", "asset_name": "Tesla", "purchase_value": 250.5, "amount": 1000.0})
        );

        let typed = NewAsset::new("TSLA", "Tesla", 250.5, 1000.0).with_type("Stocks");
        let value = serde_json::to_value(typed).unwrap();
        assert_eq!(value["investment_type"], "Stocks");
    }

    #[test]
    fn asset_update_requires_isin() {
        assert!(AssetUpdate::new(" ").validate().is_err());
        assert!(AssetUpdate::new("TSLA").validate().is_ok());
        assert!(AssetUpdate::new("TSLA").amount(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn edit_request_flattens_update() {
        let id = AssetId::from(3u64);
        let update = AssetUpdate::new("TSLA").purchase_value(260.0);
        let value = serde_json::to_value(EditAssetRequest {
            id: &id,
            update: &update,
        })
        .unwrap();
        assert_eq!(value, json!({"id": "3", "isin": "TSLA", "purchase_value": 260.0}));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Banner & Controls
// ═══════════════════════════════════════════════════════════════════

mod banner_and_controls {
    use super::*;

    #[test]
    fn banner_expiry_is_inclusive() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let banner = Banner::new(BannerKind::Success, "done", t0 + Duration::seconds(5));
        assert!(!banner.is_expired(t0));
        assert!(!banner.is_expired(t0 + Duration::seconds(4)));
        assert!(banner.is_expired(t0 + Duration::seconds(5)));
    }

    #[test]
    fn banner_ids_are_unique() {
        let t0 = Utc::now();
        let a = Banner::new(BannerKind::Info, "a", t0);
        let b = Banner::new(BannerKind::Info, "a", t0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn banner_kind_css() {
        assert_eq!(BannerKind::Success.css_class(), "success");
        assert_eq!(BannerKind::Error.to_string(), "error");
        assert_eq!(BannerKind::Info.css_class(), "info");
    }

    #[test]
    fn control_element_ids_round_trip() {
        for control in Control::ALL {
            assert_eq!(Control::from_element_id(control.element_id()), Some(control));
        }
        assert_eq!(Control::from_element_id("delete-asset"), None);
        assert_eq!(Control::UpdateAssets.to_string(), "update-assets");
    }

    #[test]
    fn control_state_constructors() {
        assert!(ControlState::enabled("Update").enabled);
        let busy = ControlState::disabled("Updating...");
        assert!(!busy.enabled);
        assert_eq!(busy.label, "Updating...");
    }

    #[test]
    fn window_features() {
        let w = WindowSpec::new("/add-asset-window", "Add Asset", 600, 500);
        assert_eq!(w.features(), "width=600,height=500");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.api_base, "http://localhost:3000/api");
        assert_eq!(s.currency_symbol, "€");
        assert_eq!(s.number_format, NumberFormat::es_es());
        assert_eq!(s.banner_ttl_secs, 5);
        assert_eq!(s.request_timeout_secs, None);
        assert_eq!(s.add_window.url, "/add-asset-window");
        assert_eq!((s.add_window.width, s.add_window.height), (600, 500));
        assert_eq!(s.edit_window.url, "/edit-asset-window");
        assert_eq!((s.edit_window.width, s.edit_window.height), (600, 400));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"api_base": "https://example.com/api/", "currency_symbol": "$"}"#)
            .unwrap();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.banner_ttl_secs, 5);
        assert_eq!(s.endpoint("portfolio"), "https://example.com/api/portfolio");
        assert_eq!(s.endpoint("/update-assets"), "https://example.com/api/update-assets");
    }

    #[test]
    fn partial_number_format() {
        let s = Settings::from_json(r#"{"number_format": {"min_grouping_digits": 4}}"#).unwrap();
        assert_eq!(s.number_format.decimal_separator, ',');
        assert_eq!(s.number_format.min_grouping_digits, 4);
    }

    #[test]
    fn rejects_invalid_values() {
        let bad = [
            r#"{"api_base": ""}"#,
            r#"{"api_base": "/api"}"#,
            r#"{"banner_ttl_secs": 0}"#,
            r#"{"request_timeout_secs": 0}"#,
            r#"{"number_format": {"decimal_separator": ".", "group_separator": "."}}"#,
            r#"{"edit_window": {"url": "/e", "name": "E", "width": 0, "height": 400}}"#,
            r#"not json"#,
        ];
        for json in bad {
            assert!(
                matches!(Settings::from_json(json), Err(DashboardError::InvalidSettings(_))),
                "expected rejection of {json}"
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Investment categories
// ═══════════════════════════════════════════════════════════════════

mod categories {
    use portfolio_dashboard_core::models::analytics::InvestmentCategory;

    fn table(kind: &str) -> InvestmentCategory {
        InvestmentCategory::from_investment_type(Some(kind))
    }

    #[test]
    fn matching_ignores_case_and_extra_words() {
        assert_eq!(table("acciones"), InvestmentCategory::Acciones);
        assert_eq!(table("ACCIONES USA"), InvestmentCategory::Acciones);
        assert_eq!(table("Fondo Renta Fija Europa"), InvestmentCategory::RentaFija);
        assert_eq!(table("Crypto"), InvestmentCategory::Cryptomonedas);
        assert_eq!(table("crowfounding inmobiliario"), InvestmentCategory::Crowfounding);
        assert_eq!(table("EPSV"), InvestmentCategory::Epsv);
        assert_eq!(table("Capital Riesgo"), InvestmentCategory::CapitalRiesgo);
    }

    #[test]
    fn dca_needs_an_income_class() {
        assert_eq!(table("DCA Renta Variable"), InvestmentCategory::Dca);
        assert_eq!(table("dca renta fija"), InvestmentCategory::Dca);
        assert_eq!(table("DCA Crypto"), InvestmentCategory::Cryptomonedas);
        assert_eq!(table("DCA"), InvestmentCategory::RentaVariable);
    }

    #[test]
    fn chart_folds_dca_into_its_class() {
        assert_eq!(
            InvestmentCategory::chart_category(Some("DCA Renta Fija")),
            InvestmentCategory::RentaFija
        );
        assert_eq!(
            InvestmentCategory::chart_category(Some("DCA Renta Variable")),
            InvestmentCategory::RentaVariable
        );
    }

    #[test]
    fn earlier_rules_win() {
        assert_eq!(table("Renta Variable / Acciones"), InvestmentCategory::RentaVariable);
        assert_eq!(table("Crypto Acciones"), InvestmentCategory::Cryptomonedas);
    }

    #[test]
    fn unknown_or_missing_is_variable_income() {
        assert_eq!(table("Stocks"), InvestmentCategory::RentaVariable);
        assert_eq!(table(""), InvestmentCategory::RentaVariable);
        assert_eq!(
            InvestmentCategory::from_investment_type(None),
            InvestmentCategory::RentaVariable
        );
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(InvestmentCategory::CapitalRiesgo.to_string(), "CAPITAL RIESGO & STARTUPS");
        assert_eq!(InvestmentCategory::Cryptomonedas.label(), "CRYPTOMONEDAS");
        assert_eq!(InvestmentCategory::RentaFija.chart_color(), Some("#FF6B6B"));
        assert_eq!(InvestmentCategory::Dca.chart_color(), None);
        assert!(InvestmentCategory::CHART
            .iter()
            .all(|c| c.chart_color().is_some()));
        assert_eq!(
            serde_json::to_value(InvestmentCategory::RentaVariable).unwrap(),
            "renta_variable"
        );
    }
}
