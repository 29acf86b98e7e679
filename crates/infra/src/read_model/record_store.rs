use std::sync::Arc;

use tracing::info;

use industrialerp_inventory::{InventoryItem, Sku};
use industrialerp_purchasing::PurchaseOrder;
use industrialerp_reports::ReportsDataset;
use industrialerp_sales::{SalesOrder, SalesRep};

use crate::dataset::{Dataset, StoreError};

/// Data-access interface for the dashboard.
///
/// Lists are returned in dataset order and never change after construction.
pub trait RecordStore: Send + Sync {
    fn list_purchase_orders(&self) -> &[PurchaseOrder];
    fn list_sales_orders(&self) -> &[SalesOrder];
    fn list_inventory_items(&self) -> &[InventoryItem];

    fn suppliers(&self) -> &[String];
    fn customers(&self) -> &[String];
    fn locations(&self) -> &[String];
    fn sales_reps(&self) -> &[SalesRep];

    fn reports(&self) -> &ReportsDataset;

    fn find_inventory_item(&self, sku: &Sku) -> Option<&InventoryItem> {
        self.list_inventory_items().iter().find(|i| &i.sku == sku)
    }
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn list_purchase_orders(&self) -> &[PurchaseOrder] {
        (**self).list_purchase_orders()
    }

    fn list_sales_orders(&self) -> &[SalesOrder] {
        (**self).list_sales_orders()
    }

    fn list_inventory_items(&self) -> &[InventoryItem] {
        (**self).list_inventory_items()
    }

    fn suppliers(&self) -> &[String] {
        (**self).suppliers()
    }

    fn customers(&self) -> &[String] {
        (**self).customers()
    }

    fn locations(&self) -> &[String] {
        (**self).locations()
    }

    fn sales_reps(&self) -> &[SalesRep] {
        (**self).sales_reps()
    }

    fn reports(&self) -> &ReportsDataset {
        (**self).reports()
    }

    fn find_inventory_item(&self, sku: &Sku) -> Option<&InventoryItem> {
        (**self).find_inventory_item(sku)
    }
}

/// Store holding a validated [`Dataset`] in memory for the whole session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    data: Dataset,
}

impl InMemoryRecordStore {
    pub fn new(data: Dataset) -> Self {
        info!(
            purchase_orders = data.purchase_orders.len(),
            sales_orders = data.sales_orders.len(),
            inventory_items = data.inventory.len(),
            months = data.reports.monthly.len(),
            "record store ready"
        );
        Self { data }
    }

    /// Store seeded from the embedded sample dataset.
    pub fn sample() -> Result<Self, StoreError> {
        Dataset::sample().map(Self::new)
    }

    /// Store seeded from a dataset file, or the sample when `path` is `None`.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, StoreError> {
        match path {
            Some(path) => Dataset::from_path(path).map(Self::new),
            None => Self::sample(),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_purchase_orders(&self) -> &[PurchaseOrder] {
        &self.data.purchase_orders
    }

    fn list_sales_orders(&self) -> &[SalesOrder] {
        &self.data.sales_orders
    }

    fn list_inventory_items(&self) -> &[InventoryItem] {
        &self.data.inventory
    }

    fn suppliers(&self) -> &[String] {
        &self.data.suppliers
    }

    fn customers(&self) -> &[String] {
        &self.data.customers
    }

    fn locations(&self) -> &[String] {
        &self.data.locations
    }

    fn sales_reps(&self) -> &[SalesRep] {
        &self.data.sales_reps
    }

    fn reports(&self) -> &ReportsDataset {
        &self.data.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::{CategoryFilter, RecordFilter, Summarize};
    use industrialerp_inventory::InventoryCategory;
    use industrialerp_purchasing::PurchaseOrderStatus;

    fn store() -> InMemoryRecordStore {
        InMemoryRecordStore::sample().unwrap()
    }

    #[test]
    fn lists_keep_dataset_order() {
        let store = store();
        let ids: Vec<_> = store
            .list_purchase_orders()
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["PO-001", "PO-002", "PO-003", "PO-004"]);
    }

    #[test]
    fn acero_search_over_inventory() {
        let store = store();
        let hits = RecordFilter::new()
            .with_query("acero")
            .apply(store.list_inventory_items());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku.as_str(), "SKU-001");
    }

    #[test]
    fn empty_query_with_all_returns_everything() {
        let store = store();
        let all = RecordFilter::<InventoryCategory>::new().apply(store.list_inventory_items());
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn status_filter_over_purchases() {
        let store = store();
        let filter: CategoryFilter<PurchaseOrderStatus> = "pending".parse().unwrap();
        let hits = RecordFilter::new()
            .with_category(filter)
            .apply(store.list_purchase_orders());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "PO-001");

        let none = RecordFilter::new()
            .with_query("zzz")
            .with_category(filter)
            .apply(store.list_purchase_orders());
        assert!(none.is_empty());
    }

    #[test]
    fn module_summaries_on_sample() {
        let store = store();

        let purchases = PurchaseOrder::summarize(store.list_purchase_orders());
        assert_eq!(purchases.total_orders, 4);
        assert_eq!(purchases.pending, 1);
        assert_eq!(purchases.in_transit, 1);

        let sales = SalesOrder::summarize(store.list_sales_orders());
        assert_eq!(sales.active_orders, 2);
        assert_eq!(sales.distinct_customers, 4);

        let inventory = InventoryItem::summarize(store.list_inventory_items());
        assert_eq!(inventory.low_stock, 2);
        assert_eq!(inventory.critical, 0);
        assert_eq!(inventory.locations, 4);
    }

    #[test]
    fn find_by_sku_through_arc() {
        let store: Arc<dyn RecordStore> = Arc::new(store());
        let sku = Sku::parse("SKU-003").unwrap();
        let item = store.find_inventory_item(&sku).unwrap();
        assert_eq!(item.name, "Motores Eléctricos 5HP");
        assert!(store.find_inventory_item(&Sku::parse("SKU-999").unwrap()).is_none());
    }
}
