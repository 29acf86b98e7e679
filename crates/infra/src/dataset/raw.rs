//! Wire shape of the dataset file.
//!
//! Coded fields and money stay as plain JSON values here; they are parsed
//! into domain types by [`super::Dataset::from_raw`].

use chrono::NaiveDate;
use serde::Deserialize;

use industrialerp_sales::SalesRep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    #[serde(default)]
    pub purchase_orders: Vec<RawPurchaseOrder>,
    #[serde(default)]
    pub sales_orders: Vec<RawSalesOrder>,
    #[serde(default)]
    pub inventory: Vec<RawInventoryItem>,
    #[serde(default)]
    pub suppliers: Vec<String>,
    #[serde(default)]
    pub customers: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub sales_reps: Vec<SalesRep>,
    #[serde(default)]
    pub reports: RawReports,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurchaseOrder {
    pub id: String,
    pub supplier: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: String,
    pub items: u32,
    pub delivery_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSalesOrder {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: String,
    pub items: u32,
    pub payment_status: String,
    pub due_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub location: String,
    pub unit_price: f64,
    pub total_value: f64,
    pub last_movement: NaiveDate,
    pub supplier: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReports {
    #[serde(default)]
    pub monthly: Vec<RawMonth>,
    #[serde(default)]
    pub categories: Vec<RawCategoryShare>,
    #[serde(default)]
    pub top_customers: Vec<RawTopCustomer>,
    #[serde(default)]
    pub top_products: Vec<RawTopProduct>,
    #[serde(default)]
    pub catalog: Vec<RawReportEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawMonth {
    pub month: String,
    pub sales: f64,
    pub purchases: f64,
    pub profit: f64,
    pub inventory: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawCategoryShare {
    pub name: String,
    pub value: u8,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawTopCustomer {
    pub name: String,
    pub sales: f64,
    pub growth: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawTopProduct {
    pub name: String,
    pub sold: u32,
    pub revenue: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReportEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub last_generated: NaiveDate,
    pub status: String,
}
