//! Dataset loading: JSON file → validated, typed records.
//!
//! This is the only place raw strings become domain values. Every coded
//! field is parsed into its closed enum, ids are checked for uniqueness per
//! list and decimal amounts are rounded to cents. Anything that fails is
//! reported as a [`StoreError`] naming the offending record; nothing invalid
//! reaches the views.

pub mod raw;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use industrialerp_core::entity::first_duplicate_id;
use industrialerp_core::{DomainError, DomainResult, Entity, Money};
use industrialerp_inventory::{InventoryItem, Sku};
use industrialerp_purchasing::{PurchaseOrder, PurchaseOrderId};
use industrialerp_reports::{
    CategoryShare, MonthlyFigures, ReportEntry, ReportsDataset, TopCustomer, TopProduct,
};
use industrialerp_sales::{SalesOrder, SalesOrderId, SalesRep};

use raw::{RawDataset, RawInventoryItem, RawPurchaseOrder, RawReports, RawSalesOrder};

/// Dataset compiled into the binary.
pub const SAMPLE_JSON: &str = include_str!("../../data/sample.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {list} record #{index} ({id}): {source}")]
    Record {
        list: &'static str,
        index: usize,
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("invalid dataset: {0}")]
    Domain(#[from] DomainError),
}

/// All records and reference lists, validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub purchase_orders: Vec<PurchaseOrder>,
    pub sales_orders: Vec<SalesOrder>,
    pub inventory: Vec<InventoryItem>,
    pub suppliers: Vec<String>,
    pub customers: Vec<String>,
    pub locations: Vec<String>,
    pub sales_reps: Vec<SalesRep>,
    pub reports: ReportsDataset,
}

impl Dataset {
    /// The embedded sample dataset.
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read dataset file");
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let raw: RawDataset = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawDataset) -> Result<Self, StoreError> {
        let purchase_orders =
            convert_all("purchase order", raw.purchase_orders, |r| &r.id, purchase_order)?;
        let sales_orders =
            convert_all("sales order", raw.sales_orders, |r| &r.id, sales_order)?;
        let inventory =
            convert_all("inventory item", raw.inventory, |r| &r.id, inventory_item)?;

        reject_duplicates("purchase order", &purchase_orders)?;
        reject_duplicates("sales order", &sales_orders)?;
        reject_duplicates("inventory item", &inventory)?;

        for item in &inventory {
            let computed = item.computed_value();
            if computed != item.total_value {
                warn!(
                    sku = %item.sku,
                    recorded = %item.total_value,
                    computed = %computed,
                    "inventory total value does not match stock × unit price"
                );
            }
            if item.min_stock > item.max_stock {
                warn!(
                    sku = %item.sku,
                    min = item.min_stock,
                    max = item.max_stock,
                    "minimum stock exceeds maximum"
                );
            }
        }

        Ok(Self {
            purchase_orders,
            sales_orders,
            inventory,
            suppliers: raw.suppliers,
            customers: raw.customers,
            locations: raw.locations,
            sales_reps: raw.sales_reps,
            reports: reports(raw.reports)?,
        })
    }
}

fn convert_all<R, T>(
    list: &'static str,
    raw: Vec<R>,
    raw_id: impl Fn(&R) -> &String,
    convert: impl Fn(&R) -> DomainResult<T>,
) -> Result<Vec<T>, StoreError> {
    raw.iter()
        .enumerate()
        .map(|(index, r)| {
            convert(r).map_err(|source| StoreError::Record {
                list,
                index,
                id: raw_id(r).clone(),
                source,
            })
        })
        .collect()
}

fn reject_duplicates<T: Entity>(list: &str, records: &[T]) -> Result<(), StoreError> {
    match first_duplicate_id(records) {
        Some(id) => Err(DomainError::conflict(format!("duplicate {list} id {id}")).into()),
        None => Ok(()),
    }
}

fn purchase_order(r: &RawPurchaseOrder) -> DomainResult<PurchaseOrder> {
    Ok(PurchaseOrder {
        id: PurchaseOrderId::parse(r.id.as_str())?,
        supplier: r.supplier.clone(),
        date: r.date,
        amount: Money::from_decimal(r.amount)?,
        status: r.status.parse()?,
        item_count: r.items,
        delivery_date: r.delivery_date,
    })
}

fn sales_order(r: &RawSalesOrder) -> DomainResult<SalesOrder> {
    Ok(SalesOrder {
        id: SalesOrderId::parse(r.id.as_str())?,
        customer: r.customer.clone(),
        date: r.date,
        amount: Money::from_decimal(r.amount)?,
        status: r.status.parse()?,
        item_count: r.items,
        payment_status: r.payment_status.parse()?,
        due_date: r.due_date,
    })
}

fn inventory_item(r: &RawInventoryItem) -> DomainResult<InventoryItem> {
    Ok(InventoryItem {
        sku: Sku::parse(r.id.as_str())?,
        name: r.name.clone(),
        category: r.category.parse()?,
        current_stock: r.current_stock,
        min_stock: r.min_stock,
        max_stock: r.max_stock,
        location: r.location.clone(),
        unit_price: Money::from_decimal(r.unit_price)?,
        total_value: Money::from_decimal(r.total_value)?,
        last_movement: r.last_movement,
        supplier: r.supplier.clone(),
    })
}

fn reports(raw: RawReports) -> Result<ReportsDataset, StoreError> {
    let monthly = raw
        .monthly
        .into_iter()
        .map(|m| -> DomainResult<MonthlyFigures> {
            Ok(MonthlyFigures {
                sales: Money::from_decimal(m.sales)?,
                purchases: Money::from_decimal(m.purchases)?,
                profit: Money::from_signed_decimal(m.profit)?,
                inventory: Money::from_decimal(m.inventory)?,
                month: m.month,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let categories = raw
        .categories
        .into_iter()
        .map(|c| -> DomainResult<CategoryShare> {
            if c.value > 100 {
                return Err(DomainError::validation(format!(
                    "category {} share {}% exceeds 100%",
                    c.name, c.value
                )));
            }
            Ok(CategoryShare {
                amount: Money::from_decimal(c.amount)?,
                percent: c.value,
                category: c.name,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let top_customers = raw
        .top_customers
        .into_iter()
        .map(|c| -> DomainResult<TopCustomer> {
            if !c.growth.is_finite() {
                return Err(DomainError::validation(format!(
                    "growth of {} is not finite",
                    c.name
                )));
            }
            Ok(TopCustomer {
                sales: Money::from_decimal(c.sales)?,
                growth_percent: c.growth,
                name: c.name,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let top_products = raw
        .top_products
        .into_iter()
        .map(|p| -> DomainResult<TopProduct> {
            Ok(TopProduct {
                revenue: Money::from_decimal(p.revenue)?,
                units_sold: p.sold,
                name: p.name,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let catalog = raw
        .catalog
        .into_iter()
        .map(|e| -> DomainResult<ReportEntry> {
            Ok(ReportEntry {
                status: e.status.parse()?,
                title: e.title,
                description: e.description,
                last_generated: e.last_generated,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let dataset = ReportsDataset {
        monthly,
        categories,
        top_customers,
        top_products,
        catalog,
    };
    if !dataset.categories.is_empty() && dataset.category_percent_total() != 100 {
        warn!(
            total = dataset.category_percent_total(),
            "category shares do not add up to 100%"
        );
    }
    Ok(dataset)
}
